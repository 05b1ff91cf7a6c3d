//! The errors of the crate.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::cbor;

/// The catch-all error type for this crate.
///
/// Derivation errors are fatal to the call that produced them, no partially
/// derived context is ever returned alongside one.
#[derive(Debug)]
pub enum Error {
    /// Wraps errors from the `cbor` module.
    Cbor(cbor::CborError),
    /// Wraps errors from `hkdf`.
    Hkdf(hkdf::InvalidLength),
    /// The AEAD algorithm identifier is unknown or unsupported.
    UnsupportedAead(i32),
    /// The key agreement (HKDF hash) identifier is unknown or unsupported.
    UnsupportedKeyAgreement(i32),
    /// A required identifier is missing.
    MissingId(&'static str),
    /// The identifier doesn't fit into the IV of the AEAD algorithm.
    IdTooLong {
        /// The length of the offending identifier.
        len: usize,
        /// The maximum identifier length for the algorithm.
        max: usize,
    },
    /// There is no recipient with this identifier in the context.
    UnknownRecipient,
}

impl From<cbor::CborError> for Error {
    fn from(e: cbor::CborError) -> Error {
        Error::Cbor(e)
    }
}

impl From<hkdf::InvalidLength> for Error {
    fn from(e: hkdf::InvalidLength) -> Error {
        Error::Hkdf(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Cbor(e) => write!(f, "{}", e),
            Error::Hkdf(e) => write!(f, "HKDF error: {}", e),
            Error::UnsupportedAead(id) => {
                write!(f, "AEAD algorithm {} unsupported", id)
            }
            Error::UnsupportedKeyAgreement(id) => {
                write!(f, "Key agreement algorithm {} unsupported", id)
            }
            Error::MissingId(which) => write!(f, "Missing {} ID", which),
            Error::IdTooLong { len, max } => write!(
                f,
                "ID of {} bytes is too long, at most {} are possible",
                len, max
            ),
            Error::UnknownRecipient => {
                write!(f, "No recipient with this ID in the context")
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Cbor(e) => Some(e),
            Error::Hkdf(e) => Some(e),
            // Other errors that don't wrap anything
            _ => None,
        }
    }
}
