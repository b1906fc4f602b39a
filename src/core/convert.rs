//! # Family Conversion
//!
//! Widening (IPv4 to IPv6) is total. Narrowing (IPv6 to IPv4) succeeds only
//! when [`AddressV6::is_v4_representable`] holds; every narrowing path in the
//! crate, construction and assignment alike, goes through [`narrow`].

use crate::core::v4::AddressV4;
use crate::core::v6::{AddressV6, V4Embedding};
use crate::error::ConversionError;
use tracing::debug;

/// Widen into the IPv4-compatible layout `::a.b.c.d`.
pub fn widen(v4: AddressV4) -> AddressV6 {
    embed(v4, V4Embedding::Compatible)
}

/// Widen into the IPv4-mapped layout `::ffff:a.b.c.d`.
pub fn widen_mapped(v4: AddressV4) -> AddressV6 {
    embed(v4, V4Embedding::Mapped)
}

/// Extract the IPv4 address embedded in the last 32 bits of `v6`.
///
/// # Errors
/// Returns `ConversionError::NotV4Representable` if `v6` is neither
/// IPv4-compatible nor IPv4-mapped.
pub fn narrow(v6: &AddressV6) -> Result<AddressV4, ConversionError> {
    if !v6.is_v4_representable() {
        debug!(address = %v6, "IPv6 address carries no embedded IPv4 address");
        return Err(ConversionError::NotV4Representable);
    }

    let octets = v6.octets();
    Ok(AddressV4::new(octets[12], octets[13], octets[14], octets[15]))
}

fn embed(v4: AddressV4, embedding: V4Embedding) -> AddressV6 {
    let mut octets = [0u8; 16];
    octets[..12].copy_from_slice(&embedding.prefix());
    octets[12..].copy_from_slice(&v4.octets());
    AddressV6::from_octets(octets)
}
