//! Logging utilities.
//!
//! The library itself only talks to the `log` facade. Applications (and
//! tests) that want output can install `env_logger` through [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
