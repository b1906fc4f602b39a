//! # IPv6 Address
//!
//! Sixteen bytes, viewed as eight big-endian 16-bit groups.
//!
//! The address owns the "does this carry an IPv4 address" predicate. Two
//! layouts qualify:
//!
//! ```text
//! compatible  ::/96          [0 x 10] [00 00] [a b c d]
//! mapped      ::ffff:0:0/96  [0 x 10] [ff ff] [a b c d]
//! ```
//!
//! `::` and `::1` fall inside the compatible block and narrow to `0.0.0.0`
//! and `0.0.0.1`.

use crate::core::convert;
use crate::core::grammar;
use crate::core::v4::AddressV4;
use crate::error::ParseError;
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// How an IPv6 address embeds an IPv4 address in its last 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum V4Embedding {
    /// `::a.b.c.d`
    Compatible,
    /// `::ffff:a.b.c.d`
    Mapped,
}

impl V4Embedding {
    /// Classify raw bytes. This is the one definition of "v4-representable".
    pub fn classify(octets: &[u8; 16]) -> Option<Self> {
        if octets[..10].iter().any(|&b| b != 0) {
            return None;
        }
        match [octets[10], octets[11]] {
            [0x00, 0x00] => Some(V4Embedding::Compatible),
            [0xff, 0xff] => Some(V4Embedding::Mapped),
            _ => None,
        }
    }

    /// The 96-bit prefix bytes preceding the embedded address.
    pub const fn prefix(self) -> [u8; 12] {
        match self {
            V4Embedding::Compatible => [0; 12],
            V4Embedding::Mapped => [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff],
        }
    }
}

/// A 16-byte IP address value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AddressV6 {
    octets: [u8; 16],
}

impl AddressV6 {
    /// `::`
    pub const UNSPECIFIED: Self = Self::from_octets([0; 16]);

    /// `::1`
    pub const LOOPBACK: Self =
        Self::from_octets([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);

    #[allow(clippy::too_many_arguments)]
    pub const fn new(a: u16, b: u16, c: u16, d: u16, e: u16, f: u16, g: u16, h: u16) -> Self {
        Self::from_segments([a, b, c, d, e, f, g, h])
    }

    pub const fn from_octets(octets: [u8; 16]) -> Self {
        Self { octets }
    }

    pub const fn from_segments(segments: [u16; 8]) -> Self {
        let mut octets = [0u8; 16];
        let mut i = 0;
        while i < 8 {
            let [hi, lo] = segments[i].to_be_bytes();
            octets[2 * i] = hi;
            octets[2 * i + 1] = lo;
            i += 1;
        }
        Self { octets }
    }

    pub const fn octets(&self) -> [u8; 16] {
        self.octets
    }

    pub const fn segments(&self) -> [u16; 8] {
        let mut segments = [0u16; 8];
        let mut i = 0;
        while i < 8 {
            segments[i] = u16::from_be_bytes([self.octets[2 * i], self.octets[2 * i + 1]]);
            i += 1;
        }
        segments
    }

    pub const fn is_unspecified(&self) -> bool {
        u128::from_be_bytes(self.octets) == 0
    }

    /// Parse colon-hex text, including `::` compression and a dotted tail.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidV6Format` if the text does not match the
    /// IPv6 grammar.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        grammar::parse_v6(text)
    }

    /// Which embedding, if any, the last 32 bits are carried in.
    pub fn v4_embedding(&self) -> Option<V4Embedding> {
        V4Embedding::classify(&self.octets)
    }

    /// True iff narrowing to [`AddressV4`] succeeds.
    pub fn is_v4_representable(&self) -> bool {
        self.v4_embedding().is_some()
    }

    /// Replace this value with the widened form of `v4`.
    pub fn assign_from_v4(&mut self, v4: AddressV4) {
        *self = convert::widen(v4);
    }

    pub fn to_canonical_string(&self) -> String {
        grammar::format_v6(self)
    }
}

impl fmt::Display for AddressV6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        grammar::write_v6(f, &self.octets)
    }
}

impl fmt::Debug for AddressV6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressV6({self})")
    }
}

impl FromStr for AddressV6 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        grammar::parse_v6(s)
    }
}

impl From<AddressV4> for AddressV6 {
    fn from(v4: AddressV4) -> Self {
        convert::widen(v4)
    }
}

impl From<[u8; 16]> for AddressV6 {
    fn from(octets: [u8; 16]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<[u16; 8]> for AddressV6 {
    fn from(segments: [u16; 8]) -> Self {
        Self::from_segments(segments)
    }
}

impl From<AddressV6> for [u8; 16] {
    fn from(addr: AddressV6) -> Self {
        addr.octets
    }
}

impl From<u128> for AddressV6 {
    fn from(bits: u128) -> Self {
        Self::from_octets(bits.to_be_bytes())
    }
}

impl From<AddressV6> for u128 {
    fn from(addr: AddressV6) -> Self {
        u128::from_be_bytes(addr.octets)
    }
}

impl From<Ipv6Addr> for AddressV6 {
    fn from(addr: Ipv6Addr) -> Self {
        Self::from_octets(addr.octets())
    }
}

impl From<AddressV6> for Ipv6Addr {
    fn from(addr: AddressV6) -> Self {
        Ipv6Addr::from(addr.octets)
    }
}

impl AsRef<[u8]> for AddressV6 {
    fn as_ref(&self) -> &[u8] {
        &self.octets
    }
}
