use super::{KeyType, KeyUsage};
use crate::jwa::KeyAlgorithm;

/// Claims shared by every key type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub(crate) kty: KeyType,
    pub(crate) alg: KeyAlgorithm,
    pub(crate) kid: String,
    pub(crate) usage: KeyUsage,
}

impl Header {
    /// Key type (`kty` claim)
    #[must_use]
    pub fn key_type(&self) -> KeyType {
        self.kty
    }

    /// Declared algorithm (`alg` claim)
    #[must_use]
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.alg
    }

    /// Key identifier (`kid` claim), empty when absent
    #[must_use]
    pub fn id(&self) -> &str {
        &self.kid
    }

    /// Intended usage (`use` claim)
    #[must_use]
    pub fn usage(&self) -> KeyUsage {
        self.usage
    }
}
