//! DocBase Core - Foundation types shared by the DocBase client crates.
//!
//! This crate provides:
//! - Client and logging configuration, loadable from TOML and the environment
//! - The `DocbaseError` taxonomy returned by every client operation
//! - Structured logging setup with tracing
//! - Wire-level constants (base URL, header names, defaults)

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, ClientConfig, LoggingConfig};
pub use error::{DocbaseError, DocbaseResult, ErrorKind, ValidationError};
pub use logging::init_logging;
