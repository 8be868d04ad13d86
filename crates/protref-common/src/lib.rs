//! Shared infrastructure for the protref workspace.
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Currently this is the logging setup used by every protref binary; see
//! [`logging`].

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel, LogOutput};
