//! # Core Address Components
//!
//! The address value types, their textual grammar and the conversion rules
//! between the two families.
//!
//! ## Components
//! - **Grammar**: pure parse/format functions for both textual forms
//! - **V4 / V6**: fixed-size value types backed by raw octets
//! - **Convert**: the single widening and narrowing rule set
//! - **Address**: the `IpAddress` capability trait and the tagged `Address` enum
//! - **Serialization**: serde impls (canonical text or raw octets)
//!
//! ## Text Forms
//! ```text
//! IPv4             d.d.d.d
//! IPv6             x:x:x:x:x:x:x:x     (one "::" may replace zero groups)
//! IPv6 + IPv4 tail ::d.d.d.d | ::ffff:d.d.d.d
//! ```

pub mod address;
pub mod convert;
pub mod grammar;
pub mod serialization;
pub mod v4;
pub mod v6;
