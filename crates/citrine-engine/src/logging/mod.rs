//! Logger setup.
//!
//! Centralizes `env_logger` initialization behind the `log` facade so
//! binaries get consistent filtering without each wiring its own builder.

mod init;

pub use init::{LoggingConfig, init_logging};
