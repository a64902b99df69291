use crate::buffer::GrowBuffer;

use super::{DrawPrimitive, Vertex};

/// Which set of buffers new primitives are appended to.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PrimList {
    /// Drawn first, in emission order.
    #[default]
    Immediate,
    /// Drawn after the immediate pass, ordered by view distance.
    Sorted,
}

impl PrimList {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One vertex buffer per primitive kind.
#[derive(Debug, Default)]
pub struct PrimBuffers {
    points: GrowBuffer<Vertex>,
    lines: GrowBuffer<Vertex>,
    triangles: GrowBuffer<Vertex>,
}

impl PrimBuffers {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: GrowBuffer::with_capacity(capacity),
            lines: GrowBuffer::with_capacity(capacity),
            triangles: GrowBuffer::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn get(&self, kind: DrawPrimitive) -> &GrowBuffer<Vertex> {
        match kind {
            DrawPrimitive::Points => &self.points,
            DrawPrimitive::Lines => &self.lines,
            DrawPrimitive::Triangles => &self.triangles,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, kind: DrawPrimitive) -> &mut GrowBuffer<Vertex> {
        match kind {
            DrawPrimitive::Points => &mut self.points,
            DrawPrimitive::Lines => &mut self.lines,
            DrawPrimitive::Triangles => &mut self.triangles,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty() && self.triangles.is_empty()
    }

    /// Clears all three buffers. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
        self.triangles.clear();
    }
}
