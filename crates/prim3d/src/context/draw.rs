use anyhow::{Context as _, Result};

use crate::prim::{DrawPrimitive, DrawRun, PrimList, Vertex};

use super::Context;

/// Consumer of assembled geometry.
///
/// Implemented by the application's rasterizer. `vertices` is never empty and
/// its length is a multiple of `kind.vertex_count()`. The slice is only
/// borrowed for the duration of the call.
pub trait Renderer {
    fn draw_primitives(&mut self, kind: DrawPrimitive, vertices: &[Vertex]) -> Result<()>;
}

impl<F> Renderer for F
where
    F: FnMut(DrawPrimitive, &[Vertex]) -> Result<()>,
{
    #[inline]
    fn draw_primitives(&mut self, kind: DrawPrimitive, vertices: &[Vertex]) -> Result<()> {
        self(kind, vertices)
    }
}

/// Submission order of the immediate pass.
const IMMEDIATE_ORDER: [DrawPrimitive; 3] = [DrawPrimitive::Triangles, DrawPrimitive::Lines, DrawPrimitive::Points];

impl Context {
    /// Submits the frame's geometry to `renderer`.
    ///
    /// Order: immediate triangles, lines, points, then the sorted pass. The
    /// sorted pass is built on first use each frame and rebuilt only if the
    /// sorted buffers changed since.
    ///
    /// Stops at the first renderer error.
    ///
    /// # Panics
    /// Panics while a primitive is in progress.
    pub fn draw<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        assert!(!self.is_building(), "draw() called between begin() and end()");
        if !self.is_sorted() {
            self.sort();
        }

        let immediate = &self.buffers[PrimList::Immediate.index()];
        for kind in IMMEDIATE_ORDER {
            submit(renderer, kind, immediate.get(kind))?;
        }

        for run in self.sorted_runs.runs() {
            submit(renderer, run.kind, self.resolve(run))?;
        }
        Ok(())
    }

    /// Turns a sorted-pass run into the vertices it covers.
    ///
    /// # Panics
    /// Panics if the sorted buffers were mutated after the run was built.
    fn resolve(&self, run: &DrawRun) -> &[Vertex] {
        assert_eq!(
            self.sorted_runs.generation(),
            self.generation,
            "stale draw run: sorted buffers changed after sort()"
        );
        &self.buffers[PrimList::Sorted.index()].get(run.kind)[run.start..run.end()]
    }
}

fn submit<R: Renderer + ?Sized>(renderer: &mut R, kind: DrawPrimitive, vertices: &[Vertex]) -> Result<()> {
    if vertices.is_empty() {
        return Ok(());
    }
    log::trace!("draw {:?} x{}", kind, vertices.len());
    renderer
        .draw_primitives(kind, vertices)
        .with_context(|| format!("failed to draw {} {:?} vertices", vertices.len(), kind))
}
