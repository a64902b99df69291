use bytemuck::{Pod, Zeroable};
use prim3d_math::{Color, Vec3};

/// Assembled vertex as handed to the renderer.
///
/// `#[repr(C)]`, 20 bytes: position, point size / line width, packed RGBA.
/// The position already has the transform stack applied and the color alpha
/// already has the alpha stack applied.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub size: f32,
    pub color: Color,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec3, size: f32, color: Color) -> Self {
        Self { position, size, color }
    }
}

/// Views a vertex slice as raw bytes for upload into a GPU vertex buffer.
#[inline]
pub fn vertex_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
