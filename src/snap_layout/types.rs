use egui::{Color32, Rect};

/// Stable identity of a panel, unique for the panel's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PanelId(u64);

impl PanelId {
    pub(super) const fn from_serial(serial: u64) -> Self {
        Self(serial)
    }
}

/// One tile/window.
///
/// `snapped` is true iff the panel currently occupies a slot produced by a
/// split or a screen-half snap. `parent` is set iff the panel was created by
/// splitting that panel's space; the relation is directional — the split
/// target does not record its new sibling (recover it with
/// [`super::SnapLayout::sibling_of`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Panel {
    pub id: PanelId,
    /// Screen-space geometry.
    pub rect: Rect,
    /// Assigned at creation for the rendering collaborator; layout logic
    /// never consults it.
    pub color: Color32,
    pub snapped: bool,
    pub parent: Option<PanelId>,
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "serde")]
    #[test]
    fn panel_round_trips_through_json() {
        use super::{Panel, PanelId};
        use egui::{Color32, Pos2, Rect, Vec2};

        let panel = Panel {
            id: PanelId::from_serial(7),
            rect: Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(300.0, 200.0)),
            color: Color32::from_rgb(120, 80, 200),
            snapped: true,
            parent: Some(PanelId::from_serial(3)),
        };

        let json = serde_json::to_string(&panel).expect("panel must serialize");
        let back: Panel = serde_json::from_str(&json).expect("panel must deserialize");
        assert_eq!(back, panel);
    }
}
