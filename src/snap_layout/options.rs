use egui::Vec2;

/// Options for [`super::SnapLayout`].
#[derive(Clone, Debug)]
pub struct SnapLayoutOptions {
    /// Linear pointer-to-edge distance (in points) that arms a snap zone,
    /// both on other panels' edges and on the viewport edges.
    pub snap_threshold: f32,

    /// Size of newly created panels.
    pub default_panel_size: Vec2,

    /// Seed for the placement generator. Two stores built with the same seed
    /// spawn panels at the same positions with the same colors.
    pub placement_seed: u64,

    /// If true, record operation events in a small ring buffer
    /// (see [`super::SnapLayout::debug_log_text`]).
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,

    /// If true, run structural integrity checks after every mutation and log
    /// transitions to the event log.
    pub debug_integrity: bool,

    /// If true, panic on integrity issues (debug builds only).
    pub debug_integrity_panic: bool,
}

impl Default for SnapLayoutOptions {
    fn default() -> Self {
        Self {
            snap_threshold: 30.0,
            default_panel_size: Vec2::new(320.0, 220.0),
            placement_seed: 0,
            debug_event_log: false,
            debug_event_log_capacity: 200,
            debug_integrity: false,
            debug_integrity_panic: false,
        }
    }
}
