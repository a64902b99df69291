//! Primitive assembler.
//!
//! A [`Context`] owns everything one frame of immediate-mode geometry needs:
//! - attribute stacks (matrix, color, alpha, size, id)
//! - two sets of primitive buffers (immediate and sorted)
//! - the sorted-pass draw list
//! - current/previous key snapshots
//!
//! Frame flow:
//!
//! ```ignore
//! ctx.set_app_data(app);
//! ctx.reset();
//! ctx.begin(PrimitiveMode::LineLoop);
//! ctx.vertex_at(a);
//! ctx.vertex_at(b);
//! ctx.vertex_at(c);
//! ctx.end();
//! ctx.draw(&mut renderer)?;
//! ```
//!
//! Misuse of the begin/vertex/end protocol is a programmer error and panics.

mod attributes;
mod config;
mod current;
mod draw;
mod id;
mod shapes;
mod sort;
mod stack;

pub use config::{ContextConfig, DepthOrder};
pub use current::{replace_current, with_current};
pub use draw::Renderer;
pub use id::Id;
pub use stack::AttributeStack;

use prim3d_math::{Color, Mat4, Vec3};

use crate::buffer::GrowBuffer;
use crate::input::{AppData, Key, KeyTable};
use crate::prim::{DepthKey, DrawList, DrawPrimitive, PrimBuffers, PrimList, PrimitiveMode, Vertex};

/// Assembly state machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum AssemblyState {
    Idle,
    Building {
        mode: PrimitiveMode,
        /// Index of the primitive's first vertex in its target buffer.
        first_vertex: usize,
        /// Vertices written so far, including strip/loop duplicates.
        written: usize,
    },
}

/// Immediate-mode primitive assembler and per-frame draw state.
///
/// Single-threaded: all methods take `&mut self` or `&self` and run to
/// completion. Use [`with_current`] for an ambient per-thread context.
#[derive(Debug)]
pub struct Context {
    config: ContextConfig,
    app: AppData,

    state: AssemblyState,
    list: PrimList,
    buffers: [PrimBuffers; 2],

    matrices: AttributeStack<Mat4>,
    colors: AttributeStack<Color>,
    alphas: AttributeStack<f32>,
    sizes: AttributeStack<f32>,
    ids: AttributeStack<Id>,

    sorted_runs: DrawList,
    sort_called: bool,
    /// Bumped on every mutation of the sorted buffers.
    generation: u64,
    /// Per-kind sort keys, indexed by `DrawPrimitive::index`. Reused across frames.
    sort_keys: [Vec<DepthKey>; 3],
    sort_scratch: GrowBuffer<Vertex>,

    keys_curr: KeyTable,
    keys_prev: KeyTable,
    frame_index: u64,
}

impl Context {
    pub fn new() -> Self {
        Self::with_config(ContextConfig::default())
    }

    pub fn with_config(config: ContextConfig) -> Self {
        log::debug!(
            "creating context (depth order {:?}, initial capacity {})",
            config.depth_order,
            config.initial_capacity
        );
        let capacity = config.initial_capacity;
        Self {
            config,
            app: AppData::default(),
            state: AssemblyState::Idle,
            list: PrimList::Immediate,
            buffers: [PrimBuffers::with_capacity(capacity), PrimBuffers::with_capacity(capacity)],
            matrices: AttributeStack::new("matrix", Mat4::IDENTITY),
            colors: AttributeStack::new("color", Color::WHITE),
            alphas: AttributeStack::new("alpha", 1.0),
            sizes: AttributeStack::new("size", 1.0),
            ids: AttributeStack::new("id", Id::ROOT),
            sorted_runs: DrawList::new(),
            sort_called: false,
            generation: 0,
            sort_keys: Default::default(),
            sort_scratch: GrowBuffer::new(),
            keys_curr: KeyTable::default(),
            keys_prev: KeyTable::default(),
            frame_index: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    // ── primitive assembly ────────────────────────────────────────────────

    /// Starts a primitive.
    ///
    /// # Panics
    /// Panics if a primitive is already in progress.
    pub fn begin(&mut self, mode: PrimitiveMode) {
        assert!(
            self.state == AssemblyState::Idle,
            "begin({mode:?}) called while a primitive is in progress; missing end()"
        );
        let first_vertex = self.buffer(self.list, mode.primitive()).len();
        self.state = AssemblyState::Building { mode, first_vertex, written: 0 };
    }

    /// Emits a vertex into the primitive in progress.
    ///
    /// The position is transformed by the matrix stack top and the color's
    /// alpha is scaled by the alpha stack top.
    ///
    /// # Panics
    /// Panics outside `begin`/`end`.
    pub fn vertex(&mut self, position: Vec3, size: f32, color: Color) {
        let AssemblyState::Building { mode, written, .. } = &mut self.state else {
            panic!("vertex() called without begin()");
        };
        let mode = *mode;

        let v = Vertex::new(
            self.matrices.top() * position,
            size,
            color.with_alpha(color.a() * self.alphas.top()),
        );

        let buf = self.buffers[self.list.index()].get_mut(mode.primitive());
        match mode {
            PrimitiveMode::LineStrip | PrimitiveMode::LineLoop if *written >= 2 => {
                // Restart a discrete segment from the previous vertex.
                let prev = buf[buf.len() - 1];
                buf.push_back(prev);
                *written += 1;
            }
            PrimitiveMode::TriangleStrip if *written >= 3 => {
                // Restart a discrete triangle from the previous two vertices.
                let n = buf.len();
                let (a, b) = (buf[n - 2], buf[n - 1]);
                buf.push_back(a);
                buf.push_back(b);
                *written += 2;
            }
            _ => {}
        }
        buf.push_back(v);
        *written += 1;

        if self.list == PrimList::Sorted {
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Emits a vertex using the size and color stack tops.
    #[inline]
    pub fn vertex_at(&mut self, position: Vec3) {
        self.vertex(position, self.sizes.top(), self.colors.top());
    }

    /// Finishes the primitive in progress and validates its vertex count.
    ///
    /// `LineLoop` is closed here with a segment from the last vertex back to
    /// the first.
    ///
    /// # Panics
    /// Panics outside `begin`/`end`, or when the vertex count does not form
    /// whole primitives for the mode.
    pub fn end(&mut self) {
        let AssemblyState::Building { mode, first_vertex, written } =
            std::mem::replace(&mut self.state, AssemblyState::Idle)
        else {
            panic!("end() called without begin()");
        };

        match mode {
            PrimitiveMode::Points => {}
            PrimitiveMode::Lines => {
                assert!(written % 2 == 0, "Lines needs an even vertex count, got {written}");
            }
            PrimitiveMode::LineStrip => {
                assert!(written > 1, "LineStrip needs at least 2 vertices, got {written}");
            }
            PrimitiveMode::LineLoop => {
                assert!(written > 1, "LineLoop needs at least 2 vertices, got {written}");
                let buf = self.buffers[self.list.index()].get_mut(DrawPrimitive::Lines);
                let (last, first) = (buf[buf.len() - 1], buf[first_vertex]);
                buf.push_back(last);
                buf.push_back(first);
                if self.list == PrimList::Sorted {
                    self.generation = self.generation.wrapping_add(1);
                }
            }
            PrimitiveMode::Triangles => {
                assert!(written % 3 == 0, "Triangles needs a multiple of 3 vertices, got {written}");
            }
            PrimitiveMode::TriangleStrip => {
                assert!(written >= 3, "TriangleStrip needs at least 3 vertices, got {written}");
            }
        }
    }

    /// `true` between `begin` and `end`.
    #[inline]
    pub fn is_building(&self) -> bool {
        self.state != AssemblyState::Idle
    }

    /// Routes subsequent primitives to the sorted (`true`) or immediate
    /// (`false`) buffers. Geometry already emitted stays where it is.
    ///
    /// # Panics
    /// Panics while a primitive is in progress.
    pub fn enable_sorting(&mut self, enable: bool) {
        assert!(!self.is_building(), "enable_sorting() called between begin() and end()");
        self.list = if enable { PrimList::Sorted } else { PrimList::Immediate };
    }

    #[inline]
    pub fn is_sorting_enabled(&self) -> bool {
        self.list == PrimList::Sorted
    }

    // ── frame boundaries ──────────────────────────────────────────────────

    /// Starts a new frame: drops all geometry and the sorted draw list, and
    /// snapshots key state for press/release detection.
    ///
    /// # Panics
    /// Panics while a primitive is in progress.
    pub fn reset(&mut self) {
        assert!(!self.is_building(), "reset() called between begin() and end()");

        if !self.is_balanced() {
            let names: Vec<&str> = self.unbalanced_stacks().collect();
            log::warn!(
                "attribute stacks unbalanced at frame {}: push without pop on {}",
                self.frame_index,
                names.join(", "),
            );
        }

        for buffers in &mut self.buffers {
            buffers.clear();
        }
        self.sorted_runs.clear();
        self.sort_called = false;
        self.generation = self.generation.wrapping_add(1);

        self.keys_prev = self.keys_curr;
        self.keys_curr = self.app.key_down;

        self.frame_index = self.frame_index.wrapping_add(1);
    }

    /// Number of `reset` calls so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    // ── application data ──────────────────────────────────────────────────

    #[inline]
    pub fn app_data(&self) -> &AppData {
        &self.app
    }

    #[inline]
    pub fn app_data_mut(&mut self) -> &mut AppData {
        &mut self.app
    }

    #[inline]
    pub fn set_app_data(&mut self, app: AppData) {
        self.app = app;
    }

    /// World-space size covering `pixels` screen pixels at `position`.
    ///
    /// Non-finite until the application sets a viewport with a non-zero
    /// height.
    #[inline]
    pub fn pixels_to_world_size(&self, position: Vec3, pixels: f32) -> f32 {
        self.app.pixels_to_world_size(position, pixels)
    }

    /// Key state as of the last `reset`.
    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_curr.is_down(key)
    }

    /// `true` if `key` went down between the last two `reset` calls.
    #[inline]
    pub fn was_key_pressed(&self, key: Key) -> bool {
        self.keys_curr.is_down(key) && !self.keys_prev.is_down(key)
    }

    /// `true` if `key` went up between the last two `reset` calls.
    #[inline]
    pub fn was_key_released(&self, key: Key) -> bool {
        !self.keys_curr.is_down(key) && self.keys_prev.is_down(key)
    }

    // ── buffer access ─────────────────────────────────────────────────────

    /// Vertices of `kind` emitted into `list` this frame.
    #[inline]
    pub fn buffer(&self, list: PrimList, kind: DrawPrimitive) -> &[Vertex] {
        self.buffers[list.index()].get(kind)
    }

    /// `true` when no geometry has been emitted since the last `reset`.
    pub fn is_empty(&self) -> bool {
        self.buffers.iter().all(PrimBuffers::is_empty)
    }

    /// Draw runs of the sorted pass, as built by the last sort.
    #[inline]
    pub fn sorted_runs(&self) -> &DrawList {
        &self.sorted_runs
    }

    /// `true` once the sorted pass has been built for the current frame.
    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.sort_called && self.sorted_runs.generation() == self.generation
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
