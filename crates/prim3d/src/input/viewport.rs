/// Render target size in pixels.
///
/// Only the height takes part in world-size conversions; the projection's
/// field of view is vertical.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Non-empty with finite extents.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }

    /// Share of the viewport height covered by `pixels`.
    ///
    /// Non-finite for a zero-height viewport.
    #[inline]
    pub fn height_fraction(self, pixels: f32) -> f32 {
        pixels / self.height
    }
}
