use alloc::{boxed::Box, sync::Arc, vec::Vec};
use core::fmt;
use ed25519_dalek::{Keypair, PublicKey};
use tracing::warn;

use super::{algorithm::AeadAlgorithm, peer_id::PeerId, replay::ReplayWindow};

/// The highest sequence number that fits into the 5 byte partial IV.
pub const MAX_SEQUENCE_NUMBER: u64 = (1 << 40) - 1;

/// An asymmetric key attached to a member of a group context.
///
/// It's only stored here for the signature layer, this crate never uses it.
pub enum SigningKey {
    /// The own key pair, used for signing.
    Keypair(Keypair),
    /// The public key of a peer, used for verification.
    Public(PublicKey),
}

impl SigningKey {
    /// Returns the public key.
    pub fn public(&self) -> &PublicKey {
        match self {
            SigningKey::Keypair(keypair) => &keypair.public,
            SigningKey::Public(public) => public,
        }
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Never print the secret half
        let kind = match self {
            SigningKey::Keypair(_) => "Keypair",
            SigningKey::Public(_) => "Public",
        };
        f.debug_tuple(kind).field(self.public().as_bytes()).finish()
    }
}

/// The keys and state for one party of a security context, either the sender
/// or one of the recipients.
///
/// Key and base IV have the length the AEAD algorithm requires and can't be
/// resized, the ID can't be changed at all.
pub struct EntityContext {
    alg: AeadAlgorithm,
    id: PeerId,
    key: Box<[u8]>,
    base_iv: Box<[u8]>,
    sequence_number: u64,
    replay_window: ReplayWindow,
    signing_key: Option<Arc<SigningKey>>,
}

impl EntityContext {
    /// Creates a new `EntityContext` from derived key material.
    pub(crate) fn new(
        alg: AeadAlgorithm,
        id: PeerId,
        key: Vec<u8>,
        base_iv: Vec<u8>,
        window_size: usize,
    ) -> EntityContext {
        debug_assert_eq!(alg.key_len(), key.len());
        debug_assert_eq!(alg.iv_len(), base_iv.len());
        EntityContext {
            alg,
            id,
            key: key.into_boxed_slice(),
            base_iv: base_iv.into_boxed_slice(),
            sequence_number: 0,
            replay_window: ReplayWindow::new(0, window_size),
            signing_key: None,
        }
    }

    /// Returns the AEAD algorithm.
    pub fn alg(&self) -> AeadAlgorithm {
        self.alg
    }

    /// Returns the sender or recipient ID.
    pub fn id(&self) -> &PeerId {
        &self.id
    }

    /// Returns the key.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Returns the key for modification in place.
    pub fn key_mut(&mut self) -> &mut [u8] {
        &mut self.key
    }

    /// Returns the base IV, which already contains the ID.
    pub fn base_iv(&self) -> &[u8] {
        &self.base_iv
    }

    /// Returns the current sequence number.
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    /// Sets the sequence number, e.g. when restoring it from storage.
    pub fn set_sequence_number(&mut self, n: u64) {
        self.sequence_number = n;
    }

    /// Increments the sequence number by one.
    ///
    /// The counter wraps on overflow. Detecting exhaustion and rekeying is up
    /// to the caller, see [`sequence_exhausted`](#method.sequence_exhausted).
    pub fn increment_sequence_number(&mut self) {
        self.sequence_number = self.sequence_number.wrapping_add(1);
        if self.at_partial_iv_limit() {
            warn!(id = ?self.id, "Sequence number reached partial IV limit");
        }
    }

    /// Whether the next increment leaves the partial IV range, or already has.
    fn at_partial_iv_limit(&self) -> bool {
        self.sequence_number >= MAX_SEQUENCE_NUMBER
    }

    /// Returns `true` if the sequence number can no longer be represented by
    /// a partial IV.
    pub fn sequence_exhausted(&self) -> bool {
        self.sequence_number > MAX_SEQUENCE_NUMBER
    }

    /// Returns the partial IV for the current sequence number.
    pub fn partial_iv(&self) -> Vec<u8> {
        format_partial_iv(self.sequence_number)
    }

    /// Returns the AEAD nonce for the given partial IV.
    ///
    /// The partial IV is right-aligned and XORed onto a copy of the base IV.
    /// If it's longer than the IV, only its low-order bytes are used.
    pub fn compute_iv(&self, mut partial_iv: &[u8]) -> Vec<u8> {
        let mut iv = self.base_iv.to_vec();
        if partial_iv.len() > iv.len() {
            partial_iv = &partial_iv[partial_iv.len() - iv.len()..];
        }
        let offset = iv.len() - partial_iv.len();
        for (b1, b2) in iv[offset..].iter_mut().zip(partial_iv.iter()) {
            *b1 ^= b2;
        }

        iv
    }

    /// Returns the replay window.
    pub fn replay_window(&self) -> &ReplayWindow {
        &self.replay_window
    }

    /// Returns the replay window for checking off received messages.
    pub fn replay_window_mut(&mut self) -> &mut ReplayWindow {
        &mut self.replay_window
    }

    /// Returns the signing key, if one has been attached.
    pub fn signing_key(&self) -> Option<&Arc<SigningKey>> {
        self.signing_key.as_ref()
    }

    /// Attaches a signing key.
    pub fn set_signing_key(&mut self, key: Arc<SigningKey>) {
        self.signing_key = Some(key);
    }

    /// Returns an independent copy.
    ///
    /// Key, base IV and ID are copied into new buffers and the sequence number
    /// is kept, but the copy starts with an empty replay window of the same
    /// size. The signing key is shared.
    pub fn duplicate(&self) -> EntityContext {
        EntityContext {
            alg: self.alg,
            id: self.id.clone(),
            key: self.key.clone(),
            base_iv: self.base_iv.clone(),
            sequence_number: self.sequence_number,
            replay_window: ReplayWindow::new(0, self.replay_window.size()),
            signing_key: self.signing_key.clone(),
        }
    }
}

impl fmt::Debug for EntityContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Leave out the key
        f.debug_struct("EntityContext")
            .field("alg", &self.alg)
            .field("id", &self.id)
            .field("base_iv", &self.base_iv)
            .field("sequence_number", &self.sequence_number)
            .field("replay_window", &self.replay_window)
            .field("signing_key", &self.signing_key)
            .finish()
    }
}

/// Returns the sequence number in its partial IV format (big-endian, no
/// leading zero bytes, so 0 is empty).
fn format_partial_iv(n: u64) -> Vec<u8> {
    let bytes = n.to_be_bytes();
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());

    bytes[first..].to_vec()
}
