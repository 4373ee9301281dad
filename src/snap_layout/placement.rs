use egui::epaint::Hsva;
use egui::{Color32, Rect, Vec2};

/// Generator for spawn placement and panel colors.
///
/// Simple LCG: deterministic, fast, no dependency. Two generators built from
/// the same seed produce the same spawn sequence.
#[derive(Clone, Debug)]
pub(super) struct PlacementRng(u64);

impl PlacementRng {
    pub(super) fn new(seed: u64) -> Self {
        Self(seed ^ 0xA1B2_C3D4_E5F6_0789)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005u64)
            .wrapping_add(1442695040888963407u64);
        self.0
    }

    /// Uniform in `[0, 1)`, from the top 24 bits.
    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// A rect of `size` placed uniformly at random, fully inside `bounds`.
    /// Oversized panels are clamped to the bounds first.
    pub(super) fn rect_within(&mut self, bounds: Rect, size: Vec2) -> Rect {
        let size = Vec2::new(size.x.min(bounds.width()), size.y.min(bounds.height()));
        let span = bounds.size() - size;
        let min = bounds.min
            + Vec2::new(
                self.next_f32() * span.x.max(0.0),
                self.next_f32() * span.y.max(0.0),
            );
        Rect::from_min_size(min, size)
    }

    pub(super) fn color(&mut self) -> Color32 {
        Hsva::new(self.next_f32(), 0.55, 0.75, 1.0).into()
    }
}
