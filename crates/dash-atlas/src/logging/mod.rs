//! Logging utilities.
//!
//! This module centralizes logger initialization. The library itself only
//! emits through the standard `log` facade (overflow and bad-pattern
//! warnings); binaries embedding the atlas call [`init_logging`] early in
//! `main`.

mod init;

pub use init::{LoggingConfig, init_logging};
