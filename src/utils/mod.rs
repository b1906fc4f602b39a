//! # Utility Modules
//!
//! Supporting utilities for binaries built on the address core.
//!
//! ## Components
//! - **Logging**: `tracing-subscriber` setup driven by `LoggingConfig`

pub mod logging;

pub use logging::init_logging;
