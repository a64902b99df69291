use crate::buffer::GrowBuffer;

use super::DrawPrimitive;

/// One contiguous run of the sorted vertex buffer for `kind`.
///
/// Runs hold indices, not pointers: they are resolved to a slice at dispatch
/// time, so buffer reallocation cannot leave them dangling.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawRun {
    pub kind: DrawPrimitive,
    /// First vertex of the run.
    pub start: usize,
    /// Number of vertices in the run (a multiple of `kind.vertex_count()`).
    pub count: usize,
}

impl DrawRun {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.count
    }
}

/// Ordered runs for the sorted pass of one frame.
///
/// Performance characteristics:
/// - `push()` is O(1) and merges with the previous run when contiguous
/// - storage is reused across frames; no per-frame allocation once warmed
///
/// The list remembers the buffer generation it was built against. A run is
/// only valid while the sorted buffers are still at that generation.
#[derive(Debug, Default)]
pub struct DrawList {
    runs: GrowBuffer<DrawRun>,
    generation: u64,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded runs. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.runs.clear();
    }

    /// Returns runs in submission order.
    #[inline]
    pub fn runs(&self) -> &[DrawRun] {
        &self.runs
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Appends `count` vertices of `kind` starting at `start`.
    ///
    /// Empty runs are dropped. A run that continues the previous run of the
    /// same kind extends it instead of adding an entry.
    pub fn push(&mut self, kind: DrawPrimitive, start: usize, count: usize) {
        if count == 0 {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            if last.kind == kind && last.end() == start {
                last.count += count;
                return;
            }
        }
        self.runs.push_back(DrawRun { kind, start, count });
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub(crate) fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }
}
