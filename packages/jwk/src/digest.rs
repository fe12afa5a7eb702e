//! Digest provider for thumbprints
//!
//! Callers pick the hash by [`DigestAlgorithm`]; [`Hasher`] holds the running
//! state and accepts input incrementally.

use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_384, Sha3_512};
use std::fmt;
use std::io;
use std::str::FromStr;
use thiserror::Error;

/// Hash algorithms available for thumbprints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// SHA-1 (legacy thumbprints only)
    Sha1,
    /// SHA-224
    Sha224,
    /// SHA-256, the usual RFC 7638 choice
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// SHA3-256
    Sha3_256,
    /// SHA3-384
    Sha3_384,
    /// SHA3-512
    Sha3_512,
}

/// The identifier does not name a supported digest
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported digest algorithm: {0}")]
pub struct UnsupportedDigest(String);

impl DigestAlgorithm {
    /// Canonical identifier, e.g. `SHA-256`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_384 => "SHA3-384",
            Self::Sha3_512 => "SHA3-512",
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 | Self::Sha3_256 => 32,
            Self::Sha384 | Self::Sha3_384 => 48,
            Self::Sha512 | Self::Sha3_512 => 64,
        }
    }

    /// Start a new hash computation
    #[must_use]
    pub fn hasher(self) -> Hasher {
        let state = match self {
            Self::Sha1 => HasherState::Sha1(Sha1::new()),
            Self::Sha224 => HasherState::Sha224(Sha224::new()),
            Self::Sha256 => HasherState::Sha256(Sha256::new()),
            Self::Sha384 => HasherState::Sha384(Sha384::new()),
            Self::Sha512 => HasherState::Sha512(Sha512::new()),
            Self::Sha3_256 => HasherState::Sha3_256(Sha3_256::new()),
            Self::Sha3_384 => HasherState::Sha3_384(Sha3_384::new()),
            Self::Sha3_512 => HasherState::Sha3_512(Sha3_512::new()),
        };
        Hasher { state }
    }

    /// Hash `data` in one call
    #[must_use]
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        let mut hasher = self.hasher();
        hasher.update(data);
        hasher.finalize()
    }
}

impl FromStr for DigestAlgorithm {
    type Err = UnsupportedDigest;

    /// Accepts the canonical identifier, case-insensitively, with or without the dash
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_uppercase().replace('-', "");
        match normalized.as_str() {
            "SHA1" => Ok(Self::Sha1),
            "SHA224" => Ok(Self::Sha224),
            "SHA256" => Ok(Self::Sha256),
            "SHA384" => Ok(Self::Sha384),
            "SHA512" => Ok(Self::Sha512),
            "SHA3256" | "SHA3_256" => Ok(Self::Sha3_256),
            "SHA3384" | "SHA3_384" => Ok(Self::Sha3_384),
            "SHA3512" | "SHA3_512" => Ok(Self::Sha3_512),
            _ => Err(UnsupportedDigest(s.to_string())),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

enum HasherState {
    Sha1(Sha1),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Sha3_256(Sha3_256),
    Sha3_384(Sha3_384),
    Sha3_512(Sha3_512),
}

/// Running hash computation
pub struct Hasher {
    state: HasherState,
}

impl Hasher {
    /// Feed more input
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.state {
            HasherState::Sha1(h) => h.update(data),
            HasherState::Sha224(h) => h.update(data),
            HasherState::Sha256(h) => h.update(data),
            HasherState::Sha384(h) => h.update(data),
            HasherState::Sha512(h) => h.update(data),
            HasherState::Sha3_256(h) => h.update(data),
            HasherState::Sha3_384(h) => h.update(data),
            HasherState::Sha3_512(h) => h.update(data),
        }
    }

    /// Finish and return the raw digest bytes
    #[must_use]
    pub fn finalize(self) -> Vec<u8> {
        match self.state {
            HasherState::Sha1(h) => h.finalize().to_vec(),
            HasherState::Sha224(h) => h.finalize().to_vec(),
            HasherState::Sha256(h) => h.finalize().to_vec(),
            HasherState::Sha384(h) => h.finalize().to_vec(),
            HasherState::Sha512(h) => h.finalize().to_vec(),
            HasherState::Sha3_256(h) => h.finalize().to_vec(),
            HasherState::Sha3_384(h) => h.finalize().to_vec(),
            HasherState::Sha3_512(h) => h.finalize().to_vec(),
        }
    }
}

impl io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
