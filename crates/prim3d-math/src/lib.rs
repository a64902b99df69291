//! Math types shared by the prim3d assembler and renderers.
//!
//! Conventions:
//! - column vectors on the right: `m * v`
//! - translation lives in the last column
//! - `m[(row, col)]` indexing

mod color;
mod mat4;
mod transform;
mod vec3;
mod vec4;

pub use color::Color;
pub use mat4::Mat4;
pub use transform::{look_at, rotate, translate};
pub use vec3::Vec3;
pub use vec4::Vec4;
