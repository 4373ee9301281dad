use egui::{Pos2, Vec2};

use super::types::PanelId;

/// State for the one in-flight drag, created on drag-start and destroyed on
/// release or cancel.
///
/// Translation is relative: each pointer event contributes the delta since
/// the previous one, so a panel picked up anywhere under the cursor never
/// jumps to it.
#[derive(Clone, Copy, Debug)]
pub(super) struct DragSession {
    pub(super) serial: u64,
    pub(super) panel: PanelId,
    pub(super) pointer_start: Pos2,
    pub(super) last_pointer: Pos2,
}

impl DragSession {
    pub(super) fn begin(serial: u64, panel: PanelId, pointer: Pos2) -> Self {
        Self {
            serial,
            panel,
            pointer_start: pointer,
            last_pointer: pointer,
        }
    }

    /// Advance to `pointer` and return the delta since the last event.
    pub(super) fn translate_to(&mut self, pointer: Pos2) -> Vec2 {
        let delta = pointer - self.last_pointer;
        self.last_pointer = pointer;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_is_relative_to_the_last_event() {
        let mut session = DragSession::begin(1, PanelId::from_serial(1), Pos2::new(100.0, 50.0));

        assert_eq!(
            session.translate_to(Pos2::new(110.0, 45.0)),
            Vec2::new(10.0, -5.0)
        );
        assert_eq!(
            session.translate_to(Pos2::new(110.0, 45.0)),
            Vec2::ZERO,
            "repeated position must not re-apply the delta"
        );
        assert_eq!(session.pointer_start, Pos2::new(100.0, 50.0));
    }
}
