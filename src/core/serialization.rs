//! # Serde Support
//!
//! Address values serialize differently depending on the target format:
//!
//! - **Human-readable** (JSON, TOML, ...): the canonical string
//! - **Binary** (bincode, ...): the raw octets, 4 or 16 bytes
//!
//! Deserialization always validates: strings go through the textual grammar,
//! so a malformed address in a config file is rejected at load time.

use crate::core::address::Address;
use crate::core::v4::AddressV4;
use crate::core::v6::AddressV6;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

impl Serialize for AddressV4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            self.octets().serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for AddressV4 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            text.parse()
                .map_err(|e| de::Error::custom(format!("{e}: {text:?}")))
        } else {
            <[u8; 4]>::deserialize(deserializer).map(AddressV4::from_octets)
        }
    }
}

impl Serialize for AddressV6 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            self.octets().serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for AddressV6 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            text.parse()
                .map_err(|e| de::Error::custom(format!("{e}: {text:?}")))
        } else {
            <[u8; 16]>::deserialize(deserializer).map(AddressV6::from_octets)
        }
    }
}

/// Binary encoding of [`Address`], tagged by family.
#[derive(Serialize, Deserialize)]
enum TaggedAddress {
    V4(AddressV4),
    V6(AddressV6),
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            match *self {
                Address::V4(v4) => TaggedAddress::V4(v4),
                Address::V6(v6) => TaggedAddress::V6(v6),
            }
            .serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            text.parse()
                .map_err(|e| de::Error::custom(format!("{e}: {text:?}")))
        } else {
            Ok(match TaggedAddress::deserialize(deserializer)? {
                TaggedAddress::V4(v4) => Address::V4(v4),
                TaggedAddress::V6(v6) => Address::V6(v6),
            })
        }
    }
}
