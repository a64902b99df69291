//! Primitive data: vertices, topologies, per-frame buffers and draw runs.
//!
//! Responsibilities:
//! - fixed-size vertex layout shared with renderers
//! - grouping rules (1, 2 or 3 vertices per primitive)
//! - depth keys and draw runs for the sorted pass

mod buffers;
mod key;
mod list;
mod mode;
mod vertex;

pub use buffers::{PrimBuffers, PrimList};
pub use key::DepthKey;
pub use list::{DrawList, DrawRun};
pub use mode::{DrawPrimitive, PrimitiveMode};
pub use vertex::{vertex_bytes, Vertex};
