use prim3d_math::Vec3;

use super::{KeyTable, Viewport};

/// Application state handed to the context once per frame.
///
/// Plain data. The context only reads it; the application owns updating it
/// before calling `Context::reset`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AppData {
    /// Camera position in world space. Depth sorting measures from here.
    pub view_origin: Vec3,
    /// `tan(fov_y / 2)` of the projection in use.
    pub tan_half_fov: f32,
    pub viewport: Viewport,
    pub key_down: KeyTable,
}

impl AppData {
    /// World-space size covering `pixels` screen pixels at `position`.
    ///
    /// Uses the vertical field of view and viewport height.
    pub fn pixels_to_world_size(&self, position: Vec3, pixels: f32) -> f32 {
        let d = (position - self.view_origin).length();
        self.tan_half_fov * 2.0 * d * self.viewport.height_fraction(pixels)
    }
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            view_origin: Vec3::ZERO,
            // 90 degree vertical fov.
            tan_half_fov: 1.0,
            viewport: Viewport::default(),
            key_down: KeyTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn full_viewport_height_covers_frustum_height() {
        let app = AppData {
            view_origin: Vec3::ZERO,
            tan_half_fov: 0.5,
            viewport: Viewport::new(1280.0, 720.0),
            ..AppData::default()
        };
        // At distance 10 the frustum is 2 * 0.5 * 10 = 10 units tall.
        let size = app.pixels_to_world_size(Vec3::new(0.0, 0.0, 10.0), 720.0);
        assert_relative_eq!(size, 10.0, epsilon = 1e-5);
        let size = app.pixels_to_world_size(Vec3::new(0.0, 0.0, 10.0), 72.0);
        assert_relative_eq!(size, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn scales_linearly_with_distance() {
        let app = AppData {
            view_origin: Vec3::new(1.0, 1.0, 1.0),
            viewport: Viewport::new(100.0, 100.0),
            ..AppData::default()
        };
        let near = app.pixels_to_world_size(Vec3::new(1.0, 1.0, 3.0), 10.0);
        let far = app.pixels_to_world_size(Vec3::new(1.0, 1.0, 7.0), 10.0);
        assert_relative_eq!(far, near * 3.0, epsilon = 1e-5);
    }
}
