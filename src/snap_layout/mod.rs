use std::collections::VecDeque;

use egui::{Pos2, Rect, Vec2};

mod debug;
mod geometry;
mod integrity;
mod options;
mod placement;
mod resolver;
mod session;
mod types;


pub use options::SnapLayoutOptions;
pub use resolver::{SnapDecision, SnapSide, resolve_snap};
pub use types::{Panel, PanelId};

use placement::PlacementRng;
use session::DragSession;

/// Free-floating panels with edge snapping and reversible half-splits.
///
/// The store owns the authoritative ordered panel list, the single in-flight
/// drag session and the published snap preview. Hosts feed it pointer events
/// ([`Self::begin_drag`], [`Self::drag_move`], [`Self::release`]) and render
/// from [`Self::panels`] and [`Self::preview`]; the renderer never mutates
/// panel state.
///
/// Every mutation computes a replacement panel list and swaps it in whole, so
/// a reader between operations never observes a partially applied update.
/// Unknown panel ids are silent no-ops throughout.
#[derive(Debug)]
pub struct SnapLayout {
    pub options: SnapLayoutOptions,

    panels: Vec<Panel>,
    next_panel_serial: u64,

    drag: Option<DragSession>,
    next_drag_serial: u64,
    preview: Option<SnapDecision>,

    placement: PlacementRng,

    debug_log: VecDeque<String>,
    debug_last_integrity_hash: u64,
    op_serial: u64,
}

impl SnapLayout {
    pub fn new() -> Self {
        Self::new_with_options(SnapLayoutOptions::default())
    }

    pub fn new_with_options(options: SnapLayoutOptions) -> Self {
        let placement = PlacementRng::new(options.placement_seed);
        Self {
            options,
            panels: Vec::new(),
            next_panel_serial: 1,
            drag: None,
            next_drag_serial: 1,
            preview: None,
            placement,
            debug_log: VecDeque::new(),
            debug_last_integrity_hash: 0,
            op_serial: 0,
        }
    }

    /// The ordered panel list. Iteration order is also the snap resolver's
    /// scan order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// The published snap preview for the in-flight drag, if any.
    pub fn preview(&self) -> Option<SnapDecision> {
        self.preview
    }

    /// The panel currently being dragged, if any.
    pub fn dragged_panel(&self) -> Option<PanelId> {
        self.drag.map(|d| d.panel)
    }

    /// The panel that was split off from `id`, recovered by scanning.
    ///
    /// The split relation is directional: only the newcomer records its
    /// parent. When several panels split the same target over time, the
    /// first in list order wins.
    pub fn sibling_of(&self, id: PanelId) -> Option<PanelId> {
        self.panels
            .iter()
            .find(|p| p.parent == Some(id))
            .map(|p| p.id)
    }

    /// Create a floating panel of the default size at a random position
    /// fully inside `viewport`. Existing panels are untouched.
    pub fn create_panel(&mut self, viewport: Rect) -> PanelId {
        self.op_serial += 1;
        let id = self.allocate_panel_id();
        let rect = self
            .placement
            .rect_within(viewport, self.options.default_panel_size);
        let color = self.placement.color();

        let mut next = self.panels.clone();
        next.push(Panel {
            id,
            rect,
            color,
            snapped: false,
            parent: None,
        });
        self.panels = next;

        log::debug!("create panel {id:?} at {rect:?}");
        self.debug_log_event(format!("create {id:?} rect={rect:?}"));
        self.debug_check_integrity();
        id
    }

    /// Close a panel, restoring its split sibling first.
    pub fn close_panel(&mut self, id: PanelId) {
        self.op_serial += 1;
        if self.panel(id).is_none() {
            return;
        }

        self.unsnap_inner(id);

        let mut next = self.panels.clone();
        next.retain(|p| p.id != id);
        self.panels = next;

        if self.drag.is_some_and(|d| d.panel == id) {
            self.drag = None;
            self.preview = None;
        }

        log::debug!("close panel {id:?}");
        self.debug_log_event(format!("close {id:?}"));
        self.debug_check_integrity();
    }

    /// Start dragging `id` from `pointer`. A snapped panel detaches from its
    /// split immediately, before any movement. Replaces any stale session.
    pub fn begin_drag(&mut self, id: PanelId, pointer: Pos2) {
        self.op_serial += 1;
        if self.panel(id).is_none() {
            return;
        }

        self.unsnap_inner(id);

        let serial = self.next_drag_serial;
        self.next_drag_serial = self.next_drag_serial.saturating_add(1);
        self.drag = Some(DragSession::begin(serial, id, pointer));
        self.preview = None;

        log::debug!("drag session {serial} START panel={id:?}");
        self.debug_log_event(format!("session START id={serial} panel={id:?}"));
        self.debug_check_integrity();
    }

    /// Detach `id` from its split relationship, restoring its sibling's
    /// geometry when one exists.
    pub fn unsnap(&mut self, id: PanelId) {
        self.op_serial += 1;
        self.unsnap_inner(id);
        self.debug_check_integrity();
    }

    fn unsnap_inner(&mut self, id: PanelId) {
        let Some(detaching) = self.panel(id).copied() else {
            return;
        };

        let mut next = self.panels.clone();

        // Screen-half snaps have no sibling; a recorded parent that no
        // longer exists degrades the same way.
        if detaching.snapped
            && let Some(parent) = detaching.parent
            && let Some(sibling) = next.iter_mut().find(|p| p.id == parent)
        {
            sibling.rect = geometry::absorb_reclaimed_space(sibling.rect, detaching.rect);
            sibling.snapped = false;
            sibling.parent = None;
            log::trace!("unsnap {id:?}: sibling {parent:?} grows to {:?}", sibling.rect);
        }

        if let Some(own) = next.iter_mut().find(|p| p.id == id) {
            own.snapped = false;
            own.parent = None;
        }

        self.panels = next;
        self.debug_log_event(format!("unsnap {id:?}"));
    }

    /// Translate the dragged panel by the pointer delta since the previous
    /// event and republish the snap preview. Events for any other panel, a
    /// sentinel zero-coordinate, or non-finite coordinates are ignored.
    pub fn drag_move(&mut self, id: PanelId, pointer: Pos2, viewport: Rect) {
        self.op_serial += 1;
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        if session.panel != id {
            return;
        }
        // Some hosts deliver (0, 0) for events that carry no real movement.
        if pointer == Pos2::ZERO || !pointer.is_finite() {
            return;
        }

        let delta = session.translate_to(pointer);
        if delta != Vec2::ZERO {
            let mut next = self.panels.clone();
            if let Some(panel) = next.iter_mut().find(|p| p.id == id) {
                panel.rect = panel.rect.translate(delta);
            }
            self.panels = next;
        }

        self.preview = resolver::resolve_snap(
            pointer,
            id,
            &self.panels,
            viewport,
            self.options.snap_threshold,
        );
        log::trace!("drag move panel={id:?} pointer={pointer:?} preview={:?}", self.preview);
        self.debug_check_integrity();
    }

    /// End the drag, committing the active snap decision if any.
    ///
    /// With no session or no active decision this only clears drag state and
    /// the panel stays floating wherever the last event placed it. The
    /// viewport is read here, at release time, so a host resize during the
    /// drag is reflected in a screen-half snap.
    pub fn release(&mut self, viewport: Rect) {
        self.op_serial += 1;
        let Some(session) = self.drag.take() else {
            self.preview = None;
            return;
        };
        let Some(decision) = self.preview.take() else {
            self.debug_log_event(format!("session RELEASE id={} floating", session.serial));
            return;
        };

        match decision.target {
            Some(target) => self.commit_split(session.panel, target, decision.side),
            None => self.commit_screen_half(session.panel, decision.side, viewport),
        }

        log::debug!(
            "drag session {} RELEASE panel={:?} side={:?} target={:?}",
            session.serial,
            session.panel,
            decision.side,
            decision.target
        );
        self.debug_log_event(format!(
            "session RELEASE id={} panel={:?} side={:?} target={:?} travel={:?}",
            session.serial,
            session.panel,
            decision.side,
            decision.target,
            session.last_pointer - session.pointer_start,
        ));
        self.debug_check_integrity();
    }

    /// Abort the drag without committing; the panel stays floating wherever
    /// the last event placed it.
    pub fn cancel_drag(&mut self) {
        self.op_serial += 1;
        if let Some(session) = self.drag.take() {
            self.debug_log_event(format!("session CANCEL id={}", session.serial));
        }
        self.preview = None;
    }

    fn commit_split(&mut self, dragged: PanelId, target: PanelId, side: SnapSide) {
        let Some(target_panel) = self.panel(target).copied() else {
            // Target closed mid-drag; the dragged panel stays floating.
            return;
        };
        let before = target_panel.rect;
        let (claimed, remainder) = geometry::split_rect(before, side);

        let mut next = self.panels.clone();
        for panel in &mut next {
            if panel.id == dragged {
                panel.rect = claimed;
                panel.snapped = true;
                panel.parent = Some(target);
            } else if panel.id == target {
                panel.rect = remainder;
                panel.snapped = true;
                // The relation is directional: the target keeps its own
                // `parent` untouched.
            }
        }
        self.panels = next;

        if self.options.debug_integrity {
            for issue in integrity::partition_issues(claimed, remainder, before) {
                self.debug_integrity_log_event(issue);
            }
        }
    }

    fn commit_screen_half(&mut self, dragged: PanelId, side: SnapSide, viewport: Rect) {
        let (claimed, _) = geometry::split_rect(viewport, side);

        let mut next = self.panels.clone();
        if let Some(panel) = next.iter_mut().find(|p| p.id == dragged) {
            panel.rect = claimed;
            panel.snapped = true;
            panel.parent = None;
        }
        self.panels = next;
    }

    fn allocate_panel_id(&mut self) -> PanelId {
        let serial = self.next_panel_serial;
        self.next_panel_serial = self.next_panel_serial.saturating_add(1);
        PanelId::from_serial(serial)
    }
}

impl Default for SnapLayout {
    fn default() -> Self {
        Self::new()
    }
}
