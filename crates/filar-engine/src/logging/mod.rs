//! Logging utilities.
//!
//! Centralizes logger initialization so library consumers and the demo
//! binaries configure diagnostics the same way. The crate itself only
//! logs through the standard `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
