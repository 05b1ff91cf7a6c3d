//! Derivation of security contexts from a master secret.
//!
//! Every key and IV comes from its own HKDF invocation on the master secret
//! and salt, with the CBOR encoded
//! `[id, id_context, alg_aead, type, L]` as `info`. The common IV is derived
//! once and then made unique for every party by folding its ID into it.

use alloc::{collections::BTreeMap, vec::Vec};
use core::{convert::TryFrom, fmt};
use hkdf::Hkdf;
use serde::Serialize;
use serde_bytes::Bytes;
use sha2::{Sha256, Sha512};
use tracing::debug;

use super::{
    algorithm::{AeadAlgorithm, HashAlgorithm, KeyAgreement},
    cbor,
    context::{Ordinals, Recipients, SecurityContext, CONTEXT_ORDINALS},
    entity::EntityContext,
    error::Error,
    peer_id::PeerId,
    replay::DEFAULT_WINDOW_SIZE,
    Result,
};

/// The input shared by all parties of a security context.
#[derive(Clone)]
pub struct Params<'a> {
    master_secret: &'a [u8],
    master_salt: Option<&'a [u8]>,
    id_context: Option<&'a [u8]>,
    aead: i32,
    key_agreement: i32,
    window_size: usize,
}

impl<'a> Params<'a> {
    /// Creates the parameters for the given master secret, with no salt, no
    /// ID context, AES-CCM-16-64-128, HKDF with SHA-256 and a replay window
    /// of 32 sequence numbers.
    pub fn new(master_secret: &'a [u8]) -> Params<'a> {
        Params {
            master_secret,
            master_salt: None,
            id_context: None,
            aead: AeadAlgorithm::default().id(),
            key_agreement: KeyAgreement::default().id(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    /// Sets the master salt.
    pub fn salt(mut self, master_salt: &'a [u8]) -> Params<'a> {
        self.master_salt = Some(master_salt);
        self
    }

    /// Sets the ID context of a pairwise context. Group derivation uses the
    /// group ID instead.
    pub fn id_context(mut self, id_context: &'a [u8]) -> Params<'a> {
        self.id_context = Some(id_context);
        self
    }

    /// Sets the AEAD algorithm by its COSE identifier.
    pub fn aead(mut self, alg: impl Into<i32>) -> Params<'a> {
        self.aead = alg.into();
        self
    }

    /// Sets the key agreement algorithm (which selects the hash function for
    /// HKDF) by its COSE identifier.
    pub fn key_agreement(mut self, alg: impl Into<i32>) -> Params<'a> {
        self.key_agreement = alg.into();
        self
    }

    /// Sets the number of sequence numbers the replay windows track.
    pub fn window_size(mut self, window_size: usize) -> Params<'a> {
        self.window_size = window_size;
        self
    }
}

impl fmt::Debug for Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Leave out the secret
        f.debug_struct("Params")
            .field("master_salt", &self.master_salt)
            .field("id_context", &self.id_context)
            .field("aead", &self.aead)
            .field("key_agreement", &self.key_agreement)
            .field("window_size", &self.window_size)
            .finish()
    }
}

/// The parameters with the algorithms resolved.
struct Suite<'a> {
    params: &'a Params<'a>,
    id_context: Option<&'a [u8]>,
    alg: AeadAlgorithm,
    hash: HashAlgorithm,
}

impl<'a> Suite<'a> {
    /// Looks up the algorithms, failing for unknown ones.
    fn resolve(
        params: &'a Params<'a>,
        id_context: Option<&'a [u8]>,
    ) -> Result<Suite<'a>> {
        let alg = AeadAlgorithm::try_from(params.aead)?;
        let hash = KeyAgreement::try_from(params.key_agreement)?.hash();

        Ok(Suite {
            params,
            id_context,
            alg,
            hash,
        })
    }

    /// Fails if the ID doesn't fit into the IV.
    fn check_id(&self, id: &[u8]) -> Result<()> {
        let max = self.alg.max_id_len();
        if id.len() > max {
            return Err(Error::IdTooLong { len: id.len(), max });
        }

        Ok(())
    }

    /// Returns the HKDF output for this `info` structure.
    fn hkdf(&self, id: &[u8], r#type: &str, l: usize) -> Result<Vec<u8>> {
        let info = build_info(id, self.id_context, self.alg, r#type, l)?;
        hkdf(
            self.hash,
            self.params.master_secret,
            self.params.master_salt,
            &info,
            l,
        )
    }

    /// Returns the common IV all base IVs are derived from.
    fn common_iv(&self) -> Result<Vec<u8>> {
        self.hkdf(&[], "IV", self.alg.iv_len())
    }

    /// Returns the entity context for the party with this ID.
    fn entity(&self, common_iv: &[u8], id: &[u8]) -> Result<EntityContext> {
        let key = self.hkdf(id, "Key", self.alg.key_len())?;
        let base_iv = individualize_iv(common_iv, id)?;

        Ok(EntityContext::new(
            self.alg,
            PeerId::new(id),
            key,
            base_iv,
            self.params.window_size,
        ))
    }
}

/// The `info` input to HKDF.
#[derive(Serialize)]
struct Info<'a>(&'a Bytes, Option<&'a Bytes>, i32, &'a str, usize);

/// Returns the CBOR encoded `info` structure.
///
/// # Arguments
/// * `id` - The sender ID or recipient ID (or empty for the IV).
/// * `id_context` - The ID context or group ID, if any.
/// * `alg` - The AEAD algorithm.
/// * `type` - Either "Key" or "IV".
/// * `l` - The size of the key/IV for the AEAD, in bytes.
fn build_info(
    id: &[u8],
    id_context: Option<&[u8]>,
    alg: AeadAlgorithm,
    r#type: &str,
    l: usize,
) -> Result<Vec<u8>> {
    let info = Info(
        Bytes::new(id),
        id_context.map(Bytes::new),
        alg.id(),
        r#type,
        l,
    );

    Ok(cbor::encode(info)?)
}

/// Returns `l` bytes of output keying material for this `info` structure.
fn hkdf(
    hash: HashAlgorithm,
    master_secret: &[u8],
    master_salt: Option<&[u8]>,
    info: &[u8],
    l: usize,
) -> Result<Vec<u8>> {
    let mut okm = vec![0; l];
    // Extract is run again for every output, the PRK isn't kept around
    match hash {
        HashAlgorithm::Sha256 => {
            Hkdf::<Sha256>::new(master_salt, master_secret)
                .expand(info, &mut okm)?
        }
        HashAlgorithm::Sha512 => {
            Hkdf::<Sha512>::new(master_salt, master_secret)
                .expand(info, &mut okm)?
        }
    }

    Ok(okm)
}

/// Returns the base IV of the party with this ID.
///
/// The first byte of the common IV is XORed with the length of the ID and the
/// ID itself is XORed into the bytes right before the last 5, which are left
/// for the partial IV.
fn individualize_iv(common_iv: &[u8], id: &[u8]) -> Result<Vec<u8>> {
    let iv_len = common_iv.len();
    if iv_len < id.len() + 6 {
        return Err(Error::IdTooLong {
            len: id.len(),
            max: iv_len.saturating_sub(6),
        });
    }

    let mut iv = common_iv.to_vec();
    iv[0] ^= id.len() as u8;
    let offset = iv_len - 5 - id.len();
    for (b1, b2) in iv[offset..].iter_mut().zip(id.iter()) {
        *b1 ^= b2;
    }

    Ok(iv)
}

/// Returns the entity context for the party with this ID.
///
/// The ID context from `params` is used. This derives the common IV as well,
/// so deriving a whole security context is cheaper with
/// [`derive_context`](fn.derive_context.html) or
/// [`derive_group_context`](fn.derive_group_context.html).
pub fn derive_entity_context(
    params: &Params,
    id: &[u8],
) -> Result<EntityContext> {
    let suite = Suite::resolve(params, params.id_context)?;
    suite.check_id(id)?;
    let common_iv = suite.common_iv()?;

    suite.entity(&common_iv, id)
}

/// Derives a pairwise security context.
///
/// Two peers end up with matching contexts if they use the same `params`,
/// with sender and recipient ID swapped.
///
/// # Arguments
/// * `params` - The master secret and the other shared parameters.
/// * `sender_id` - The own ID.
/// * `recipient_id` - The ID of the peer.
pub fn derive_context(
    params: &Params,
    sender_id: &[u8],
    recipient_id: &[u8],
) -> Result<SecurityContext> {
    derive_context_with(&CONTEXT_ORDINALS, params, sender_id, recipient_id)
}

/// Like [`derive_context`](fn.derive_context.html), with the ordinal taken
/// from the given allocator.
pub fn derive_context_with(
    ordinals: &Ordinals,
    params: &Params,
    sender_id: &[u8],
    recipient_id: &[u8],
) -> Result<SecurityContext> {
    let suite = Suite::resolve(params, params.id_context)?;
    suite.check_id(sender_id)?;
    suite.check_id(recipient_id)?;

    let common_iv = suite.common_iv()?;
    let sender = suite.entity(&common_iv, sender_id)?;
    let recipient = suite.entity(&common_iv, recipient_id)?;

    let context = SecurityContext::new(
        ordinals.next(),
        params.id_context.map(PeerId::new),
        sender,
        Recipients::Unicast(recipient),
    );
    debug!(
        ordinal = context.ordinal(),
        alg = ?suite.alg,
        "Derived pairwise security context"
    );

    Ok(context)
}

/// Derives a group security context.
///
/// The group ID takes the place of the ID context. There is a recipient
/// context for every member except the sender, members listed more than once
/// only get one. Signing keys can be attached afterwards with
/// `SecurityContext::attach_signing_key`.
///
/// # Arguments
/// * `params` - The master secret and the other shared parameters.
/// * `group_id` - The ID of the group.
/// * `sender_id` - The own ID.
/// * `member_ids` - The IDs of the group members, the own one may be
///   included.
pub fn derive_group_context(
    params: &Params,
    group_id: &[u8],
    sender_id: &[u8],
    member_ids: &[&[u8]],
) -> Result<SecurityContext> {
    derive_group_context_with(
        &CONTEXT_ORDINALS,
        params,
        group_id,
        sender_id,
        member_ids,
    )
}

/// Like [`derive_group_context`](fn.derive_group_context.html), with the
/// ordinal taken from the given allocator.
pub fn derive_group_context_with(
    ordinals: &Ordinals,
    params: &Params,
    group_id: &[u8],
    sender_id: &[u8],
    member_ids: &[&[u8]],
) -> Result<SecurityContext> {
    let suite = Suite::resolve(params, Some(group_id))?;
    suite.check_id(sender_id)?;
    for id in member_ids {
        suite.check_id(id)?;
    }
    if member_ids.iter().all(|&id| id == sender_id) {
        return Err(Error::MissingId("recipient"));
    }

    let common_iv = suite.common_iv()?;
    let sender = suite.entity(&common_iv, sender_id)?;
    let mut recipients: BTreeMap<PeerId, EntityContext> = BTreeMap::new();
    for &id in member_ids.iter().filter(|&&id| id != sender_id) {
        if !recipients.contains_key(id) {
            recipients.insert(PeerId::new(id), suite.entity(&common_iv, id)?);
        }
    }

    let context = SecurityContext::new(
        ordinals.next(),
        Some(PeerId::new(group_id)),
        sender,
        Recipients::Group(recipients),
    );
    debug!(
        ordinal = context.ordinal(),
        alg = ?suite.alg,
        recipients = context.recipient_ids().count(),
        "Derived group security context"
    );

    Ok(context)
}
