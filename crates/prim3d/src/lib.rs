//! prim3d crate.
//!
//! Immediate-mode geometry builder: the application emits points, lines and
//! triangles every frame through a [`Context`], which assembles them into
//! flat vertex buffers and hands them to a caller-supplied [`Renderer`].

pub mod buffer;
pub mod context;
pub mod input;
pub mod logging;
pub mod prim;

pub use prim3d_math as math;
pub use prim3d_math::{Color, Mat4, Vec3, Vec4};

pub use context::{
    replace_current, with_current, Context, ContextConfig, DepthOrder, Id, Renderer,
};
pub use input::{AppData, Key, KeyTable, Viewport};
pub use prim::{DrawPrimitive, PrimitiveMode, Vertex};
