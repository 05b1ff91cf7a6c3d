//! The security context of an
//! [OSCORE](https://tools.ietf.org/html/rfc8613)
//! implementation, intended for embedded devices.
//!
//! Derives the sender and recipient keys and IVs from a master secret,
//! keeps track of sequence numbers and detects replays with a sliding
//! window. Both pairwise (unicast) and group contexts are supported; a group
//! context holds one recipient per member of the group.
//!
//! Protecting messages (AEAD, CoAP handling) happens elsewhere, this crate
//! only manages the state those operations need.
//!
//! ## Security
//! This should **not currently be used in production code**, use at your own
//! risk.

#![no_std]
#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod algorithm;
mod cbor;
mod context;
mod derive;
mod entity;
#[cfg_attr(tarpaulin, skip)]
mod error;
mod peer_id;
mod replay;
#[cfg(test)]
mod test_vectors;

pub use algorithm::{AeadAlgorithm, HashAlgorithm, KeyAgreement};
pub use context::{Ordinals, Recipients, SecurityContext, CONTEXT_ORDINALS};
pub use derive::{
    derive_context, derive_context_with, derive_entity_context,
    derive_group_context, derive_group_context_with, Params,
};
pub use entity::{EntityContext, SigningKey, MAX_SEQUENCE_NUMBER};
pub use error::Error;
pub use peer_id::PeerId;
pub use replay::{ReplayWindow, DEFAULT_WINDOW_SIZE};

/// The result type for this crate.
pub type Result<T> = core::result::Result<T, Error>;
