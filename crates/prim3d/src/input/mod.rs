//! Per-frame application snapshot.
//!
//! The library never polls a window or input device. The application fills an
//! [`AppData`] each frame and the context reads it during `reset`, sorting and
//! world-size queries.

mod snapshot;
mod types;
mod viewport;

pub use snapshot::AppData;
pub use types::{Key, KeyTable};
pub use viewport::Viewport;
