//! Logging utilities.
//!
//! Centralizes logger initialization for binaries and tests. The library
//! itself only logs through the standard `log` facade and never initializes
//! a backend on its own.

mod init;

pub use init::{LoggingConfig, init_logging};
