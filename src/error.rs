//! # Error Types
//!
//! Typed failures for address parsing, conversion and the ambient layers.
//!
//! Every operation in this crate reports failure through a `Result`; bad input
//! never panics and never yields a half-built value.
//!
//! ## Error Categories
//! - **Parse Errors**: text that does not match the IPv4 or IPv6 grammar
//! - **Conversion Errors**: narrowing an IPv6 address with no embedded IPv4 form
//! - **Configuration Errors**: unreadable or invalid configuration
//! - **I/O Errors**: file system failures while loading or saving configuration
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use net_ip::error::{AddressError, ConversionError, Result};
//! use net_ip::{AddressV4, AddressV6};
//! use tracing::{error, info};
//!
//! fn narrow(text: &str) -> Result<AddressV4> {
//!     let v6: AddressV6 = text.parse()?;
//!     Ok(AddressV4::try_from_v6(&v6)?)
//! }
//!
//! match narrow("2001:db8::1") {
//!     Ok(v4) => info!(%v4, "Narrowed address"),
//!     Err(e) => {
//!         error!(error = %e, "Narrowing failed");
//!         assert!(matches!(
//!             e,
//!             AddressError::Conversion(ConversionError::NotV4Representable)
//!         ));
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Grammar errors
    pub const ERR_INVALID_V4: &str = "invalid IPv4 address syntax";
    pub const ERR_INVALID_V6: &str = "invalid IPv6 address syntax";

    /// Conversion errors
    pub const ERR_NOT_V4_REPRESENTABLE: &str = "cannot convert IPv6 address to IPv4";

    /// Logging errors
    pub const ERR_SUBSCRIBER_INSTALLED: &str = "A global tracing subscriber is already installed";
}

/// Text that does not match one of the address grammars.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseError {
    #[error("{}", constants::ERR_INVALID_V4)]
    InvalidV4Format,

    #[error("{}", constants::ERR_INVALID_V6)]
    InvalidV6Format,
}

/// Failure to move an address from one family to the other.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionError {
    #[error("{}", constants::ERR_NOT_V4_REPRESENTABLE)]
    NotV4Representable,
}

// AddressError is the umbrella error for everything the crate can report
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum AddressError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}

/// Type alias for Results using AddressError
pub type Result<T> = std::result::Result<T, AddressError>;
