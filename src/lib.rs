//! # net-ip
//!
//! Strongly-typed IP address values: a 4-byte [`AddressV4`] and a 16-byte
//! [`AddressV6`], each with canonical text parsing and formatting, and explicit
//! rules for moving between the two.
//!
//! ## Features
//! - **Real byte storage**: `[u8; 4]` and `[u8; 16]`, `Copy` and thread-safe
//! - **Strict grammar**: dotted quads, colon-hex with `::` and dotted tails
//! - **Canonical output**: exactly one string per address (RFC 5952 style)
//! - **Explicit conversions**: widening is total; narrowing is a typed `Result`
//! - **Generic code**: the [`IpAddress`] trait covers both families
//!
//! ## Conversion Rules
//! An IPv6 address narrows to IPv4 only when it embeds one, either as
//! IPv4-compatible (`::a.b.c.d`) or IPv4-mapped (`::ffff:a.b.c.d`). Widening
//! produces the `::a.b.c.d` form.
//!
//! ## Example Usage
//! ```rust
//! use net_ip::{AddressV4, AddressV6, ConversionError};
//!
//! let v4: AddressV4 = "192.168.0.1".parse()?;
//! let v6 = AddressV6::from(v4);
//! assert_eq!(v6.to_canonical_string(), "::192.168.0.1");
//! assert_eq!(AddressV4::try_from(v6)?, v4);
//!
//! let native: AddressV6 = "2001:db8:85a3::8a2e:370:7334".parse()?;
//! assert_eq!(
//!     AddressV4::try_from(native),
//!     Err(ConversionError::NotV4Representable)
//! );
//! assert!(!native.is_v4_representable());
//! # Ok::<(), net_ip::AddressError>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::address::{describe, Address, Family, IpAddress};
pub use crate::core::grammar::{format_v4, format_v6, parse_v4, parse_v6};
pub use crate::core::v4::AddressV4;
pub use crate::core::v6::{AddressV6, V4Embedding};
pub use crate::error::{AddressError, ConversionError, ParseError, Result};
