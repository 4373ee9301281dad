use std::hash::{Hash as _, Hasher as _};

use egui::Rect;
use itertools::Itertools as _;

use super::geometry::{self, GEOM_EPSILON};
use super::types::Panel;

/// Structural invariants that must hold after every operation.
///
/// Dangling `parent` references are deliberately not flagged: closing a split
/// target leaves its former sibling pointing at a panel that no longer
/// exists, and `unsnap` degrades gracefully on that state.
pub(super) fn layout_integrity_issues(panels: &[Panel]) -> Vec<String> {
    let mut issues: Vec<String> = Vec::new();

    for id in panels.iter().map(|p| p.id).duplicates() {
        issues.push(format!("integrity: duplicate panel id {id:?}"));
    }

    for panel in panels {
        if !panel.rect.is_finite() {
            issues.push(format!(
                "integrity: panel {:?} rect {:?} not finite",
                panel.id, panel.rect
            ));
        } else if panel.rect.width() <= 0.0 || panel.rect.height() <= 0.0 {
            issues.push(format!(
                "integrity: panel {:?} rect {:?} has no extent",
                panel.id, panel.rect
            ));
        }

        if !panel.snapped && panel.parent.is_some() {
            issues.push(format!(
                "integrity: floating panel {:?} keeps parent {:?}",
                panel.id, panel.parent
            ));
        }

        if panel.parent == Some(panel.id) {
            issues.push(format!("integrity: panel {:?} is its own parent", panel.id));
        }
    }

    issues
}

/// Verify that `claimed` and `remainder` tile exactly the rectangle `whole`.
pub(super) fn partition_issues(claimed: Rect, remainder: Rect, whole: Rect) -> Vec<String> {
    let mut issues: Vec<String> = Vec::new();

    let union = claimed.union(remainder);
    if !geometry::rects_approx_eq(union, whole) {
        issues.push(format!(
            "partition: union {union:?} != split rect {whole:?}"
        ));
    }

    let area_sum = claimed.area() + remainder.area();
    if (area_sum - whole.area()).abs() > whole.area().max(1.0) * GEOM_EPSILON {
        issues.push(format!(
            "partition: overlap or gap, areas {area_sum} vs {}",
            whole.area()
        ));
    }

    issues
}

pub(super) fn hash_issues(lines: &[String]) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for line in lines {
        line.hash(&mut hasher);
    }
    hasher.finish()
}
