use egui::{Pos2, Rect};

use super::resolver::SnapSide;

/// Tolerance for adjacency and extent comparisons on committed geometry.
pub(super) const GEOM_EPSILON: f32 = 0.001;

/// Split `rect` exactly in half along the axis perpendicular to `side`.
///
/// Returns `(claimed, remainder)`: the half on `side` and the rest. Both
/// halves share the same split coordinate, so they partition `rect` with no
/// gap or overlap.
pub(super) fn split_rect(rect: Rect, side: SnapSide) -> (Rect, Rect) {
    match side {
        SnapSide::Left => {
            let mid = rect.left() + rect.width() * 0.5;
            (
                Rect::from_min_max(rect.min, Pos2::new(mid, rect.bottom())),
                Rect::from_min_max(Pos2::new(mid, rect.top()), rect.max),
            )
        }
        SnapSide::Right => {
            let mid = rect.left() + rect.width() * 0.5;
            (
                Rect::from_min_max(Pos2::new(mid, rect.top()), rect.max),
                Rect::from_min_max(rect.min, Pos2::new(mid, rect.bottom())),
            )
        }
        SnapSide::Top => {
            let mid = rect.top() + rect.height() * 0.5;
            (
                Rect::from_min_max(rect.min, Pos2::new(rect.right(), mid)),
                Rect::from_min_max(Pos2::new(rect.left(), mid), rect.max),
            )
        }
        SnapSide::Bottom => {
            let mid = rect.top() + rect.height() * 0.5;
            (
                Rect::from_min_max(Pos2::new(rect.left(), mid), rect.max),
                Rect::from_min_max(rect.min, Pos2::new(rect.right(), mid)),
            )
        }
    }
}

/// Grow `sibling` back over the space freed by a detaching panel.
///
/// Axis-aligned heuristic: if the two rects still form a row (equal vertical
/// extent) the sibling absorbs the freed width; a column absorbs the freed
/// height. When neither axis matches — the pair was perturbed by intervening
/// mutations — the freed extents are summed onto the sibling's size in place.
pub(super) fn absorb_reclaimed_space(sibling: Rect, freed: Rect) -> Rect {
    let same_row = (sibling.top() - freed.top()).abs() <= GEOM_EPSILON
        && (sibling.bottom() - freed.bottom()).abs() <= GEOM_EPSILON;
    if same_row {
        return Rect::from_min_max(
            Pos2::new(sibling.left().min(freed.left()), sibling.top()),
            Pos2::new(sibling.right().max(freed.right()), sibling.bottom()),
        );
    }

    let same_column = (sibling.left() - freed.left()).abs() <= GEOM_EPSILON
        && (sibling.right() - freed.right()).abs() <= GEOM_EPSILON;
    if same_column {
        return Rect::from_min_max(
            Pos2::new(sibling.left(), sibling.top().min(freed.top())),
            Pos2::new(sibling.right(), sibling.bottom().max(freed.bottom())),
        );
    }

    Rect::from_min_size(sibling.min, sibling.size() + freed.size())
}

pub(super) fn rects_approx_eq(a: Rect, b: Rect) -> bool {
    (a.left() - b.left()).abs() <= GEOM_EPSILON
        && (a.top() - b.top()).abs() <= GEOM_EPSILON
        && (a.right() - b.right()).abs() <= GEOM_EPSILON
        && (a.bottom() - b.bottom()).abs() <= GEOM_EPSILON
}

#[cfg(test)]
mod tests {
    use egui::Vec2;

    use super::*;

    fn odd_rect() -> Rect {
        Rect::from_min_size(Pos2::new(40.0, 60.0), Vec2::new(301.0, 201.0))
    }

    #[test]
    fn split_halves_tile_the_rect_exactly() {
        let rect = odd_rect();
        for side in SnapSide::ALL {
            let (claimed, remainder) = split_rect(rect, side);
            assert_eq!(claimed.union(remainder), rect, "side {side:?}");
            assert!(
                (claimed.area() + remainder.area() - rect.area()).abs() <= GEOM_EPSILON,
                "side {side:?} leaves a gap or overlap"
            );
        }
    }

    #[test]
    fn absorb_reverses_split() {
        let rect = odd_rect();
        for side in SnapSide::ALL {
            let (claimed, remainder) = split_rect(rect, side);
            assert_eq!(
                absorb_reclaimed_space(remainder, claimed),
                rect,
                "side {side:?}"
            );
        }
    }

    #[test]
    fn absorb_falls_back_to_extent_sum_when_axes_diverge() {
        let sibling = Rect::from_min_size(Pos2::new(100.0, 100.0), Vec2::new(200.0, 100.0));
        let freed = Rect::from_min_size(Pos2::new(500.0, 400.0), Vec2::new(50.0, 80.0));

        let grown = absorb_reclaimed_space(sibling, freed);
        assert_eq!(grown.min, sibling.min);
        assert_eq!(grown.size(), sibling.size() + freed.size());
    }
}
