use alloc::{collections::BTreeMap, sync::Arc};
use core::{
    any::Any,
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

use super::{
    algorithm::AeadAlgorithm,
    entity::{EntityContext, SigningKey},
    error::Error,
    peer_id::PeerId,
    Result,
};

/// Hands out context ordinals, starting at 0.
///
/// Ordinals only serve as cheap identities of contexts (e.g. as cache keys),
/// they play no part in the cryptography. Allocation is atomic, so contexts
/// may be derived from several threads at once.
#[derive(Debug)]
pub struct Ordinals(AtomicUsize);

impl Ordinals {
    /// Creates a new allocator, the first ordinal it returns is 0.
    pub const fn new() -> Ordinals {
        Ordinals(AtomicUsize::new(0))
    }

    /// Returns the next ordinal.
    pub fn next(&self) -> usize {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for Ordinals {
    fn default() -> Ordinals {
        Ordinals::new()
    }
}

/// The process-wide allocator used by `derive_context` and
/// `derive_group_context`.
pub static CONTEXT_ORDINALS: Ordinals = Ordinals::new();

/// The recipient part of a security context.
#[derive(Debug)]
pub enum Recipients {
    /// The one peer of a pairwise context.
    Unicast(EntityContext),
    /// The other members of a group, by their ID.
    Group(BTreeMap<PeerId, EntityContext>),
}

/// The security context, consisting of the own sender context and the
/// recipient context(s) of the peer(s).
///
/// All entity contexts share the AEAD algorithm. There is no internal
/// locking: sending mutates the sender's sequence number and receiving the
/// recipient's replay window, so concurrent users either serialize access or
/// work on their own [`duplicate`](#method.duplicate).
pub struct SecurityContext {
    ordinal: usize,
    id_context: Option<PeerId>,
    sender: EntityContext,
    recipients: Recipients,
    annotation: Option<Arc<dyn Any + Send + Sync>>,
}

impl SecurityContext {
    /// Assembles a derived context.
    pub(crate) fn new(
        ordinal: usize,
        id_context: Option<PeerId>,
        sender: EntityContext,
        recipients: Recipients,
    ) -> SecurityContext {
        SecurityContext {
            ordinal,
            id_context,
            sender,
            recipients,
            annotation: None,
        }
    }

    /// Returns the ordinal, which identifies the context within the process.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Returns the ID context, which for group contexts is the group ID.
    pub fn id_context(&self) -> Option<&[u8]> {
        self.id_context.as_deref()
    }

    /// Returns `true` if this is a group context.
    pub fn is_group(&self) -> bool {
        match self.recipients {
            Recipients::Group(_) => true,
            Recipients::Unicast(_) => false,
        }
    }

    /// Returns the AEAD algorithm used by all parties.
    pub fn alg(&self) -> AeadAlgorithm {
        self.sender.alg()
    }

    /// Returns the sender context.
    pub fn sender(&self) -> &EntityContext {
        &self.sender
    }

    /// Returns the sender context, to advance its sequence number.
    pub fn sender_mut(&mut self) -> &mut EntityContext {
        &mut self.sender
    }

    /// Returns the recipient context(s).
    pub fn recipients(&self) -> &Recipients {
        &self.recipients
    }

    /// Returns the recipient context for the given ID.
    ///
    /// A pairwise context returns its only recipient regardless of `id`, a
    /// group context fails with `UnknownRecipient` if there is no member with
    /// that ID.
    pub fn recipient(&self, id: &[u8]) -> Result<&EntityContext> {
        match &self.recipients {
            Recipients::Unicast(recipient) => Ok(recipient),
            Recipients::Group(map) => {
                map.get(id).ok_or(Error::UnknownRecipient)
            }
        }
    }

    /// Returns the recipient context for the given ID, to update its replay
    /// window.
    ///
    /// Works like [`recipient`](#method.recipient).
    pub fn recipient_mut(&mut self, id: &[u8]) -> Result<&mut EntityContext> {
        match &mut self.recipients {
            Recipients::Unicast(recipient) => Ok(recipient),
            Recipients::Group(map) => {
                map.get_mut(id).ok_or(Error::UnknownRecipient)
            }
        }
    }

    /// Returns an iterator over the IDs of all recipients.
    pub fn recipient_ids(&self) -> impl Iterator<Item = &PeerId> {
        let (single, group) = match &self.recipients {
            Recipients::Unicast(recipient) => (Some(recipient.id()), None),
            Recipients::Group(map) => (None, Some(map.keys())),
        };
        single.into_iter().chain(group.into_iter().flatten())
    }

    /// Attaches the signing key to the member with this ID, which may be the
    /// sender or a recipient.
    ///
    /// Unlike [`recipient`](#method.recipient), the ID has to match exactly
    /// in pairwise contexts as well.
    pub fn attach_signing_key(
        &mut self,
        id: &[u8],
        key: Arc<SigningKey>,
    ) -> Result<()> {
        let member = if self.sender.id().as_bytes() == id {
            &mut self.sender
        } else {
            match &mut self.recipients {
                Recipients::Unicast(recipient)
                    if recipient.id().as_bytes() == id =>
                {
                    recipient
                }
                Recipients::Unicast(_) => return Err(Error::UnknownRecipient),
                Recipients::Group(map) => {
                    map.get_mut(id).ok_or(Error::UnknownRecipient)?
                }
            }
        };
        member.set_signing_key(key);

        Ok(())
    }

    /// Returns the user annotation, if any.
    pub fn annotation(&self) -> Option<&Arc<dyn Any + Send + Sync>> {
        self.annotation.as_ref()
    }

    /// Sets an arbitrary value the application wants to keep with this
    /// context.
    pub fn set_annotation(&mut self, annotation: Arc<dyn Any + Send + Sync>) {
        self.annotation = Some(annotation);
    }

    /// Returns an independent working copy of this context.
    ///
    /// All key material is copied into new buffers, every entity starts with
    /// an empty replay window and sequence numbers are preserved. The copy
    /// keeps the ordinal, since it carries the same keys.
    pub fn duplicate(&self) -> SecurityContext {
        let recipients = match &self.recipients {
            Recipients::Unicast(recipient) => {
                Recipients::Unicast(recipient.duplicate())
            }
            Recipients::Group(map) => Recipients::Group(
                map.iter()
                    .map(|(id, recipient)| (id.clone(), recipient.duplicate()))
                    .collect(),
            ),
        };

        SecurityContext {
            ordinal: self.ordinal,
            id_context: self.id_context.clone(),
            sender: self.sender.duplicate(),
            recipients,
            annotation: self.annotation.clone(),
        }
    }
}

impl fmt::Debug for SecurityContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SecurityContext")
            .field("ordinal", &self.ordinal)
            .field("id_context", &self.id_context)
            .field("sender", &self.sender)
            .field("recipients", &self.recipients)
            .field("annotation", &self.annotation.is_some())
            .finish()
    }
}
