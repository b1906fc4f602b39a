//! # Generic Address Capability
//!
//! [`IpAddress`] is the contract both address families satisfy, so callers
//! can write family-agnostic code:
//!
//! ```rust
//! use net_ip::{describe, AddressV4, AddressV6, IpAddress};
//!
//! fn show_all<A: IpAddress>(addrs: &[A]) -> Vec<String> {
//!     addrs.iter().map(describe).collect()
//! }
//!
//! let v4 = [AddressV4::new(10, 0, 0, 1)];
//! let v6 = [AddressV6::from(v4[0])];
//! assert_eq!(show_all(&v4), ["IPv4 10.0.0.1"]);
//! assert_eq!(show_all(&v6), ["IPv6 ::10.0.0.1"]);
//! ```
//!
//! [`Address`] is the tagged form for values whose family is only known at
//! runtime.

use crate::core::convert;
use crate::core::v4::AddressV4;
use crate::core::v6::AddressV6;
use crate::error::{ConversionError, ParseError};
use std::fmt;
use std::hash::Hash;
use std::net::IpAddr;
use std::str::FromStr;

/// Address family discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Family::V4 => "IPv4",
            Family::V6 => "IPv6",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capabilities shared by every IP address value.
pub trait IpAddress:
    Copy + Eq + Hash + fmt::Display + fmt::Debug + FromStr<Err = ParseError> + Send + Sync
{
    fn family(&self) -> Family;

    /// The canonical text form; one string per value.
    fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// True iff [`IpAddress::to_v4`] succeeds.
    fn is_v4_representable(&self) -> bool;

    /// Narrow to IPv4.
    ///
    /// # Errors
    /// Returns `ConversionError::NotV4Representable` when the value has no
    /// IPv4 form.
    fn to_v4(&self) -> Result<AddressV4, ConversionError>;

    /// Widen to IPv6. Never fails.
    fn to_v6(&self) -> AddressV6;
}

impl IpAddress for AddressV4 {
    fn family(&self) -> Family {
        Family::V4
    }

    fn is_v4_representable(&self) -> bool {
        true
    }

    fn to_v4(&self) -> Result<AddressV4, ConversionError> {
        Ok(*self)
    }

    fn to_v6(&self) -> AddressV6 {
        convert::widen(*self)
    }
}

impl IpAddress for AddressV6 {
    fn family(&self) -> Family {
        Family::V6
    }

    fn is_v4_representable(&self) -> bool {
        AddressV6::is_v4_representable(self)
    }

    fn to_v4(&self) -> Result<AddressV4, ConversionError> {
        convert::narrow(self)
    }

    fn to_v6(&self) -> AddressV6 {
        *self
    }
}

/// One-line `<family> <canonical text>` rendering for any address.
pub fn describe<A: IpAddress>(addr: &A) -> String {
    format!("{} {}", addr.family(), addr.to_canonical_string())
}

/// An address of either family.
///
/// Values of different families never compare equal, even when one is the
/// widened form of the other; use [`IpAddress::to_v6`] to compare across
/// families.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Address {
    V4(AddressV4),
    V6(AddressV6),
}

impl Default for Address {
    fn default() -> Self {
        Address::V6(AddressV6::UNSPECIFIED)
    }
}

impl Address {
    /// Parse text of either family; a `:` selects IPv6.
    ///
    /// # Errors
    /// Returns the parse error of the family the text was taken for.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        text.parse()
    }

    pub fn is_v4(&self) -> bool {
        matches!(self, Address::V4(_))
    }

    pub fn is_v6(&self) -> bool {
        matches!(self, Address::V6(_))
    }
}

impl IpAddress for Address {
    fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    fn is_v4_representable(&self) -> bool {
        match self {
            Address::V4(_) => true,
            Address::V6(v6) => v6.is_v4_representable(),
        }
    }

    fn to_v4(&self) -> Result<AddressV4, ConversionError> {
        match self {
            Address::V4(v4) => Ok(*v4),
            Address::V6(v6) => convert::narrow(v6),
        }
    }

    fn to_v6(&self) -> AddressV6 {
        match self {
            Address::V4(v4) => convert::widen(*v4),
            Address::V6(v6) => *v6,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::V4(v4) => fmt::Display::fmt(v4, f),
            Address::V6(v6) => fmt::Display::fmt(v6, f),
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::V4(v4) => fmt::Debug::fmt(v4, f),
            Address::V6(v6) => fmt::Debug::fmt(v6, f),
        }
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            s.parse().map(Address::V6)
        } else {
            s.parse().map(Address::V4)
        }
    }
}

impl From<AddressV4> for Address {
    fn from(v4: AddressV4) -> Self {
        Address::V4(v4)
    }
}

impl From<AddressV6> for Address {
    fn from(v6: AddressV6) -> Self {
        Address::V6(v6)
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => Address::V4(v4.into()),
            IpAddr::V6(v6) => Address::V6(v6.into()),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(v4) => IpAddr::V4(v4.into()),
            Address::V6(v6) => IpAddr::V6(v6.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn canonical<A: IpAddress>(addr: &A) -> String {
        addr.to_canonical_string()
    }

    #[test]
    fn test_generic_over_both_families() {
        let v4 = AddressV4::default();
        let v6 = AddressV6::default();
        let any = Address::default();

        assert_eq!(canonical(&v4), "0.0.0.0");
        assert_eq!(canonical(&v6), "::");
        assert_eq!(canonical(&any), "::");

        assert_eq!(describe(&v4), "IPv4 0.0.0.0");
        assert_eq!(describe(&v6), "IPv6 ::");
    }

    #[test]
    fn test_equals() {
        let a: AddressV6 = "2001:db8::1".parse().unwrap();
        let b: AddressV6 = "2001:0db8:0000:0000:0000:0000:0000:0001".parse().unwrap();
        let c: AddressV6 = "2001:db8::2".parse().unwrap();
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
        assert!(AddressV4::new(1, 2, 3, 4).equals(&"1.2.3.4".parse().unwrap()));
    }

    #[test]
    fn test_address_parse_selects_family() {
        assert!(Address::parse("10.0.0.1").unwrap().is_v4());
        assert!(Address::parse("::10.0.0.1").unwrap().is_v6());
        assert_eq!(
            Address::parse("10.0.0.256"),
            Err(ParseError::InvalidV4Format)
        );
        assert_eq!(Address::parse("1:::2"), Err(ParseError::InvalidV6Format));
    }

    #[test]
    fn test_address_conversion_queries() {
        let v4 = Address::parse("192.168.0.1").unwrap();
        assert_eq!(v4.to_v6().to_string(), "::192.168.0.1");
        assert!(v4.is_v4_representable());

        let native = Address::parse("2001:db8:85a3::8a2e:370:7334").unwrap();
        assert!(!native.is_v4_representable());
        assert_eq!(native.to_v4(), Err(ConversionError::NotV4Representable));

        let widened = Address::from(v4.to_v6());
        assert_ne!(v4, widened);
        assert_eq!(v4.to_v6(), widened.to_v6());
        assert_eq!(widened.to_v4(), v4.to_v4());
    }

    #[test]
    fn test_std_interop() {
        let std_addr: IpAddr = "::ffff:1.2.3.4".parse().unwrap();
        let addr = Address::from(std_addr);
        assert_eq!(addr.to_string(), "::ffff:1.2.3.4");
        assert_eq!(IpAddr::from(addr), std_addr);
        assert_eq!(format!("{addr:?}"), "AddressV6(::ffff:1.2.3.4)");
    }
}
