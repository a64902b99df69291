/// Topology a `begin`/`end` block is assembled into.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveMode {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
}

impl PrimitiveMode {
    /// Buffer kind the mode's vertices end up in.
    ///
    /// Strips and loops are flattened into discrete primitives while they are
    /// assembled, so the renderer only ever sees three kinds.
    #[inline]
    pub const fn primitive(self) -> DrawPrimitive {
        match self {
            PrimitiveMode::Points => DrawPrimitive::Points,
            PrimitiveMode::Lines | PrimitiveMode::LineStrip | PrimitiveMode::LineLoop => {
                DrawPrimitive::Lines
            }
            PrimitiveMode::Triangles | PrimitiveMode::TriangleStrip => DrawPrimitive::Triangles,
        }
    }
}

/// Primitive kind submitted to the renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawPrimitive {
    Points,
    Lines,
    Triangles,
}

impl DrawPrimitive {
    pub const ALL: [DrawPrimitive; 3] = [DrawPrimitive::Points, DrawPrimitive::Lines, DrawPrimitive::Triangles];

    /// Vertices per primitive: 1, 2 or 3.
    #[inline]
    pub const fn vertex_count(self) -> usize {
        match self {
            DrawPrimitive::Points => 1,
            DrawPrimitive::Lines => 2,
            DrawPrimitive::Triangles => 3,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}
