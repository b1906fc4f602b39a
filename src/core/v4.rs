//! # IPv4 Address
//!
//! Four octets in network order. Text goes through [`grammar::parse_v4`]
//! and [`grammar::format_v4`]; narrowing from IPv6 goes through
//! [`convert::narrow`].

use crate::core::convert;
use crate::core::grammar;
use crate::core::v6::AddressV6;
use crate::error::{ConversionError, ParseError};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A 4-byte IP address value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AddressV4 {
    octets: [u8; 4],
}

impl AddressV4 {
    /// `0.0.0.0`
    pub const UNSPECIFIED: Self = Self::new(0, 0, 0, 0);

    /// `255.255.255.255`
    pub const BROADCAST: Self = Self::new(255, 255, 255, 255);

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            octets: [a, b, c, d],
        }
    }

    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self { octets }
    }

    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }

    pub const fn is_unspecified(&self) -> bool {
        u32::from_be_bytes(self.octets) == 0
    }

    /// Parse dotted-decimal text.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidV4Format` if the text is not a valid
    /// dotted quad.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        grammar::parse_v4(text)
    }

    /// Build from an IPv6 address that embeds an IPv4 address.
    ///
    /// # Errors
    /// Returns `ConversionError::NotV4Representable` if `v6` carries no
    /// embedded IPv4 address.
    pub fn try_from_v6(v6: &AddressV6) -> Result<Self, ConversionError> {
        convert::narrow(v6)
    }

    /// Replace this value with the IPv4 address embedded in `v6`.
    ///
    /// On error `self` is left untouched.
    ///
    /// # Errors
    /// Returns `ConversionError::NotV4Representable` if `v6` carries no
    /// embedded IPv4 address.
    pub fn assign_from_v6(&mut self, v6: &AddressV6) -> Result<(), ConversionError> {
        *self = convert::narrow(v6)?;
        Ok(())
    }

    /// Widen into the IPv4-compatible form `::a.b.c.d`.
    ///
    /// This is the layout `From<AddressV4> for AddressV6` produces.
    pub fn to_ipv6_compatible(&self) -> AddressV6 {
        convert::widen(*self)
    }

    /// Widen into the IPv4-mapped form `::ffff:a.b.c.d`.
    pub fn to_ipv6_mapped(&self) -> AddressV6 {
        convert::widen_mapped(*self)
    }

    pub fn to_canonical_string(&self) -> String {
        grammar::format_v4(self)
    }
}

impl fmt::Display for AddressV4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        grammar::write_v4(f, &self.octets)
    }
}

impl fmt::Debug for AddressV4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressV4({self})")
    }
}

impl FromStr for AddressV4 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        grammar::parse_v4(s)
    }
}

impl TryFrom<AddressV6> for AddressV4 {
    type Error = ConversionError;

    fn try_from(v6: AddressV6) -> Result<Self, Self::Error> {
        convert::narrow(&v6)
    }
}

impl TryFrom<&AddressV6> for AddressV4 {
    type Error = ConversionError;

    fn try_from(v6: &AddressV6) -> Result<Self, Self::Error> {
        convert::narrow(v6)
    }
}

impl From<[u8; 4]> for AddressV4 {
    fn from(octets: [u8; 4]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<AddressV4> for [u8; 4] {
    fn from(addr: AddressV4) -> Self {
        addr.octets
    }
}

impl From<u32> for AddressV4 {
    fn from(bits: u32) -> Self {
        Self::from_octets(bits.to_be_bytes())
    }
}

impl From<AddressV4> for u32 {
    fn from(addr: AddressV4) -> Self {
        u32::from_be_bytes(addr.octets)
    }
}

impl From<Ipv4Addr> for AddressV4 {
    fn from(addr: Ipv4Addr) -> Self {
        Self::from_octets(addr.octets())
    }
}

impl From<AddressV4> for Ipv4Addr {
    fn from(addr: AddressV4) -> Self {
        Ipv4Addr::from(addr.octets)
    }
}

impl AsRef<[u8]> for AddressV4 {
    fn as_ref(&self) -> &[u8] {
        &self.octets
    }
}
