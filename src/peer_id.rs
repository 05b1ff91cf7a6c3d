use alloc::{boxed::Box, vec::Vec};
use core::{borrow::Borrow, fmt, ops::Deref};

/// An immutable, owned sender or recipient ID.
///
/// Two IDs are equal when they contain the same bytes, and hash accordingly,
/// so they can be used as keys in ordinary maps. A missing ID is expressed
/// as `Option<PeerId>`, where `None == None` and `None != Some(_)`.
///
/// Through `Borrow<[u8]>`, a map keyed by `PeerId` can be queried with a
/// plain byte slice.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeerId(Box<[u8]>);

impl PeerId {
    /// Creates a new `PeerId`, copying the given bytes.
    pub fn new(id: &[u8]) -> PeerId {
        PeerId(id.into())
    }

    /// Returns the bytes of the ID.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for PeerId {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for PeerId {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for PeerId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for PeerId {
    fn from(id: &[u8]) -> PeerId {
        PeerId::new(id)
    }
}

impl From<Vec<u8>> for PeerId {
    fn from(id: Vec<u8>) -> PeerId {
        PeerId(id.into_boxed_slice())
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PeerId(")?;
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}
