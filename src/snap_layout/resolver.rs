use egui::{Pos2, Rect};

use super::geometry;
use super::types::{Panel, PanelId};

/// Which edge of a panel (or of the viewport) a release would snap against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum SnapSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl SnapSide {
    /// Tie-break order when the pointer is within threshold of several edges
    /// at once: first match wins.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Linear distance from `pointer` to this edge of `rect`.
    pub fn edge_distance(self, rect: Rect, pointer: Pos2) -> f32 {
        match self {
            Self::Left => (pointer.x - rect.left()).abs(),
            Self::Right => (rect.right() - pointer.x).abs(),
            Self::Top => (pointer.y - rect.top()).abs(),
            Self::Bottom => (rect.bottom() - pointer.y).abs(),
        }
    }
}

/// Live snap preview during a drag.
///
/// `target` present means "snap against this panel"; absent means "snap
/// against the screen edge". `preview` is the half-rectangle a release would
/// commit, ready to paint as a translucent overlay. An inactive decision is
/// `None` at the `Option<SnapDecision>` level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SnapDecision {
    pub side: SnapSide,
    pub target: Option<PanelId>,
    pub preview: Rect,
}

/// Decide whether releasing the dragged panel at `pointer` would snap, and
/// where.
///
/// The first panel in list order (skipping the dragged one) whose rectangle
/// contains the pointer is probed edge by edge in [`SnapSide::ALL`] order
/// against `threshold`; a pointer inside a panel but away from all of its
/// edges arms nothing. Only when no panel contains the pointer are the
/// viewport edges probed, with the same threshold and precedence.
///
/// Pure function of its inputs: identical calls yield identical decisions.
pub fn resolve_snap(
    pointer: Pos2,
    dragged: PanelId,
    panels: &[Panel],
    viewport: Rect,
    threshold: f32,
) -> Option<SnapDecision> {
    if let Some(target) = panels
        .iter()
        .find(|p| p.id != dragged && p.rect.contains(pointer))
    {
        let side = edge_within_threshold(target.rect, pointer, threshold)?;
        let (preview, _) = geometry::split_rect(target.rect, side);
        return Some(SnapDecision {
            side,
            target: Some(target.id),
            preview,
        });
    }

    let side = edge_within_threshold(viewport, pointer, threshold)?;
    let (preview, _) = geometry::split_rect(viewport, side);
    Some(SnapDecision {
        side,
        target: None,
        preview,
    })
}

fn edge_within_threshold(rect: Rect, pointer: Pos2, threshold: f32) -> Option<SnapSide> {
    SnapSide::ALL
        .into_iter()
        .find(|side| side.edge_distance(rect, pointer) <= threshold)
}
