//! The COSE algorithm registries the derivation depends on.

use core::convert::TryFrom;

use super::error::Error;

/// The AEAD algorithms a context can be derived for.
///
/// The discriminants are the COSE algorithm identifiers, which end up in the
/// `info` structure of the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AeadAlgorithm {
    /// AES-CCM mode 128-bit key, 64-bit tag, 13-byte nonce.
    AesCcm16_64_128 = 10,
    /// AES-CCM mode 128-bit key, 64-bit tag, 7-byte nonce.
    AesCcm64_64_128 = 12,
    /// AES-CCM mode 128-bit key, 128-bit tag, 7-byte nonce.
    AesCcm64_128_128 = 32,
    /// AES-CCM mode 128-bit key, 128-bit tag, 13-byte nonce.
    AesCcm16_128_128 = 30,
    /// AES-GCM mode w/ 128-bit key, 128-bit tag.
    A128Gcm = 1,
}

impl AeadAlgorithm {
    /// Returns the COSE identifier.
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Returns the key size in bytes.
    pub fn key_len(self) -> usize {
        16
    }

    /// Returns the IV (nonce) size in bytes.
    pub fn iv_len(self) -> usize {
        match self {
            AeadAlgorithm::AesCcm16_64_128 => 13,
            AeadAlgorithm::AesCcm64_64_128 => 7,
            AeadAlgorithm::AesCcm64_128_128 => 7,
            AeadAlgorithm::AesCcm16_128_128 => 13,
            AeadAlgorithm::A128Gcm => 12,
        }
    }

    /// Returns the maximum length of a sender or recipient ID.
    ///
    /// The last 5 bytes of the IV are reserved for the partial IV and the
    /// first one for the length of the ID.
    pub fn max_id_len(self) -> usize {
        self.iv_len() - 6
    }
}

impl Default for AeadAlgorithm {
    fn default() -> AeadAlgorithm {
        AeadAlgorithm::AesCcm16_64_128
    }
}

impl TryFrom<i32> for AeadAlgorithm {
    type Error = Error;

    fn try_from(id: i32) -> Result<AeadAlgorithm, Error> {
        match id {
            10 => Ok(AeadAlgorithm::AesCcm16_64_128),
            12 => Ok(AeadAlgorithm::AesCcm64_64_128),
            32 => Ok(AeadAlgorithm::AesCcm64_128_128),
            30 => Ok(AeadAlgorithm::AesCcm16_128_128),
            1 => Ok(AeadAlgorithm::A128Gcm),
            _ => Err(Error::UnsupportedAead(id)),
        }
    }
}

impl From<AeadAlgorithm> for i32 {
    fn from(alg: AeadAlgorithm) -> i32 {
        alg.id()
    }
}

/// The hash functions HKDF can be instantiated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256, the default.
    Sha256,
    /// SHA-512.
    Sha512,
}

/// The key agreement algorithms, which determine the hash used by HKDF.
///
/// The discriminants are the COSE algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAgreement {
    /// Shared secret w/ HKDF and SHA-256.
    DirectHkdfSha256 = -10,
    /// Shared secret w/ HKDF and SHA-512.
    DirectHkdfSha512 = -11,
    /// ECDH ES w/ HKDF, generate key directly, SHA-256.
    EcdhEsHkdf256 = -25,
    /// ECDH ES w/ HKDF, generate key directly, SHA-512.
    EcdhEsHkdf512 = -26,
    /// ECDH SS w/ HKDF, generate key directly, SHA-256.
    EcdhSsHkdf256 = -27,
    /// ECDH SS w/ HKDF, generate key directly, SHA-512.
    EcdhSsHkdf512 = -28,
}

impl KeyAgreement {
    /// Returns the COSE identifier.
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Returns the hash function HKDF uses with this algorithm.
    pub fn hash(self) -> HashAlgorithm {
        match self {
            KeyAgreement::DirectHkdfSha256
            | KeyAgreement::EcdhEsHkdf256
            | KeyAgreement::EcdhSsHkdf256 => HashAlgorithm::Sha256,
            KeyAgreement::DirectHkdfSha512
            | KeyAgreement::EcdhEsHkdf512
            | KeyAgreement::EcdhSsHkdf512 => HashAlgorithm::Sha512,
        }
    }
}

impl Default for KeyAgreement {
    fn default() -> KeyAgreement {
        KeyAgreement::DirectHkdfSha256
    }
}

impl TryFrom<i32> for KeyAgreement {
    type Error = Error;

    fn try_from(id: i32) -> Result<KeyAgreement, Error> {
        match id {
            -10 => Ok(KeyAgreement::DirectHkdfSha256),
            -11 => Ok(KeyAgreement::DirectHkdfSha512),
            -25 => Ok(KeyAgreement::EcdhEsHkdf256),
            -26 => Ok(KeyAgreement::EcdhEsHkdf512),
            -27 => Ok(KeyAgreement::EcdhSsHkdf256),
            -28 => Ok(KeyAgreement::EcdhSsHkdf512),
            _ => Err(Error::UnsupportedKeyAgreement(id)),
        }
    }
}

impl From<KeyAgreement> for i32 {
    fn from(alg: KeyAgreement) -> i32 {
        alg.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AEADS: [AeadAlgorithm; 5] = [
        AeadAlgorithm::AesCcm16_64_128,
        AeadAlgorithm::AesCcm64_64_128,
        AeadAlgorithm::AesCcm64_128_128,
        AeadAlgorithm::AesCcm16_128_128,
        AeadAlgorithm::A128Gcm,
    ];

    #[test]
    fn aead_registry() {
        for &alg in AEADS.iter() {
            assert_eq!(alg, AeadAlgorithm::try_from(alg.id()).unwrap());
            assert_eq!(16, alg.key_len());
        }
        assert_eq!(13, AeadAlgorithm::AesCcm16_64_128.iv_len());
        assert_eq!(7, AeadAlgorithm::AesCcm64_64_128.iv_len());
        assert_eq!(7, AeadAlgorithm::AesCcm64_128_128.iv_len());
        assert_eq!(13, AeadAlgorithm::AesCcm16_128_128.iv_len());
        assert_eq!(12, AeadAlgorithm::A128Gcm.iv_len());
        assert_eq!(1, AeadAlgorithm::AesCcm64_64_128.max_id_len());
    }

    #[test]
    fn unknown_ids() {
        match AeadAlgorithm::try_from(3) {
            Err(Error::UnsupportedAead(3)) => (),
            other => panic!("unexpected {:?}", other),
        }
        match KeyAgreement::try_from(-29) {
            Err(Error::UnsupportedKeyAgreement(-29)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn hash_selection() {
        assert_eq!(HashAlgorithm::Sha256, KeyAgreement::default().hash());
        assert_eq!(
            HashAlgorithm::Sha512,
            KeyAgreement::try_from(-28).unwrap().hash()
        );
        assert_eq!(
            HashAlgorithm::Sha256,
            KeyAgreement::EcdhEsHkdf256.hash()
        );
    }
}
