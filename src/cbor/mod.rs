//! Helpful functionality around the `serde_cbor` crate.

use alloc::vec::Vec;
use serde::Serialize;
use serde_cbor::Serializer;

#[cfg_attr(tarpaulin, skip)]
mod error;
pub use error::CborError;

/// The result type for the `cbor` module.
pub type Result<T> = core::result::Result<T, CborError>;

/// Serializes an object into CBOR.
///
/// Serialization is deterministic: the same object always results in the
/// same bytes, which is what makes the output usable as HKDF `info`.
pub fn encode(object: impl Serialize) -> Result<Vec<u8>> {
    // The info structures are small, this avoids reallocation for all
    // identifiers of sensible length
    let mut serializer = Serializer::new(Vec::with_capacity(32));
    object.serialize(&mut serializer)?;

    Ok(serializer.into_inner())
}
