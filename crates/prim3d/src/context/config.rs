/// How the sorted pass orders its primitives.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DepthOrder {
    /// Primitives are reordered farthest-first and merged across kinds into
    /// back-to-front runs.
    #[default]
    BackToFront,
    /// Depth keys are computed but buffers keep emission order. The sorted
    /// pass is one run per kind: lines, then triangles, then points.
    Buffered,
}

/// Context construction options.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    pub depth_order: DepthOrder,
    /// Initial vertex capacity of each of the six primitive buffers.
    ///
    /// Strip and loop modes store 2x (lines) or 3x (triangles) the number of
    /// emitted vertices; size accordingly.
    pub initial_capacity: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            depth_order: DepthOrder::default(),
            initial_capacity: 1024,
        }
    }
}
