//! Logging utilities.
//!
//! This module centralizes logger initialization. It is intentionally small
//! and avoids imposing anything beyond the standard `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
