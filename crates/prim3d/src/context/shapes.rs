use core::f32::consts::TAU;

use prim3d_math::{look_at, Color, Vec3};

use super::Context;
use crate::prim::PrimitiveMode;

/// One-call helpers for common shapes.
///
/// Each helper is a complete `begin`/`end` block, so it must be called while
/// no primitive is in progress.
impl Context {
    pub fn draw_point(&mut self, position: Vec3, size: f32, color: Color) {
        self.begin(PrimitiveMode::Points);
        self.vertex(position, size, color);
        self.end();
    }

    pub fn draw_line(&mut self, a: Vec3, b: Vec3, size: f32, color: Color) {
        self.begin(PrimitiveMode::Lines);
        self.vertex(a, size, color);
        self.vertex(b, size, color);
        self.end();
    }

    /// Filled triangle in the current color.
    pub fn draw_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        self.begin(PrimitiveMode::Triangles);
        self.vertex_at(a);
        self.vertex_at(b);
        self.vertex_at(c);
        self.end();
    }

    /// Quad outline through `a`, `b`, `c`, `d` in order.
    pub fn draw_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        self.begin(PrimitiveMode::LineLoop);
        self.vertex_at(a);
        self.vertex_at(b);
        self.vertex_at(c);
        self.vertex_at(d);
        self.end();
    }

    /// Filled quad as a two-triangle strip.
    pub fn draw_quad_filled(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        self.begin(PrimitiveMode::TriangleStrip);
        self.vertex_at(a);
        self.vertex_at(b);
        self.vertex_at(d);
        self.vertex_at(c);
        self.end();
    }

    /// Circle outline around `origin`, in the plane facing `normal`.
    ///
    /// `segments` is clamped to at least 3.
    pub fn draw_circle(&mut self, origin: Vec3, normal: Vec3, radius: f32, segments: u32) {
        let segments = segments.max(3);

        self.push_matrix_copy();
        self.mul_matrix(look_at(origin, origin + normal, Vec3::Y));

        self.begin(PrimitiveMode::LineLoop);
        for i in 0..segments {
            let t = i as f32 / segments as f32 * TAU;
            self.vertex_at(Vec3::new(t.cos() * radius, t.sin() * radius, 0.0));
        }
        self.end();

        self.pop_matrix();
    }
}
