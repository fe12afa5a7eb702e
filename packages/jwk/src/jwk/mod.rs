//! JSON Web Keys (RFC 7517)
//!
//! A JWK is parsed in one pass: header claims are checked while the object is
//! read, then the key type selects a builder for the remaining claims.

mod header;
pub(crate) mod parse;
mod rsa;

pub use header::Header;
pub use rsa::{CrtParameters, RsaPrivateKey, RsaPublicKey};

use crate::digest::DigestAlgorithm;
use crate::error::{JwkError, JwkResult};
use crate::jwa::KeyAlgorithm;
use crate::options::ParseOptions;
use std::fmt;
use std::io;
use std::str::FromStr;
use subtle::ConstantTimeEq;
use tracing::{debug, trace};

/// Key type claim
pub const CLAIM_KTY: &str = "kty";
/// Algorithm claim
pub const CLAIM_ALG: &str = "alg";
/// Usage claim
pub const CLAIM_USE: &str = "use";
/// Key identifier claim
pub const CLAIM_KID: &str = "kid";

/// Key family named by the `kty` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// RSA
    Rsa,
    /// Elliptic curve
    Ec,
    /// Octet key pair (EdDSA, ECDH-ES with X25519/X448)
    Okp,
}

impl KeyType {
    /// Claim value for this key type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rsa => "RSA",
            Self::Ec => "EC",
            Self::Okp => "OKP",
        }
    }
}

impl FromStr for KeyType {
    type Err = JwkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RSA" => Ok(Self::Rsa),
            "EC" => Ok(Self::Ec),
            "OKP" => Ok(Self::Okp),
            other => Err(JwkError::UnknownType(other.to_owned())),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intended usage named by the `use` claim
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyUsage {
    /// No `use` claim was present
    #[default]
    Unspecified,
    /// `sig`
    Signing,
    /// `enc`
    Encryption,
}

impl KeyUsage {
    /// Claim value for this usage, empty when unspecified
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Signing => "sig",
            Self::Encryption => "enc",
        }
    }

    /// Parse a present `use` claim; an empty value is not a usage.
    pub fn from_claim(value: &str) -> JwkResult<Self> {
        match value {
            "sig" => Ok(Self::Signing),
            "enc" => Ok(Self::Encryption),
            other => Err(JwkError::UnknownUse(other.to_owned())),
        }
    }
}

impl FromStr for KeyUsage {
    type Err = JwkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_claim(s)
    }
}

impl fmt::Display for KeyUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavior shared by every parsed key
pub trait JsonWebKey {
    /// Common claims
    fn header(&self) -> &Header;

    /// RFC 7638 thumbprint over the key's required public members
    fn thumbprint(&self, alg: DigestAlgorithm) -> Vec<u8>;

    /// Key type
    fn key_type(&self) -> KeyType {
        self.header().key_type()
    }

    /// Declared algorithm
    fn algorithm(&self) -> KeyAlgorithm {
        self.header().algorithm()
    }

    /// Key identifier, empty when absent
    fn id(&self) -> &str {
        self.header().id()
    }

    /// Intended usage
    fn usage(&self) -> KeyUsage {
        self.header().usage()
    }
}

/// A parsed key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// RSA key with public parameters only
    RsaPublic(RsaPublicKey),
    /// RSA key with private parameters
    RsaPrivate(RsaPrivateKey),
}

impl Key {
    /// Whether any private parameter was present
    #[must_use]
    pub fn is_private(&self) -> bool {
        matches!(self, Self::RsaPrivate(_))
    }

    /// Public RSA parameters, for public and private RSA keys alike
    #[must_use]
    pub fn as_rsa_public(&self) -> Option<&RsaPublicKey> {
        match self {
            Self::RsaPublic(key) => Some(key),
            Self::RsaPrivate(key) => Some(key.public_key()),
        }
    }

    /// Private RSA parameters
    #[must_use]
    pub fn as_rsa_private(&self) -> Option<&RsaPrivateKey> {
        match self {
            Self::RsaPrivate(key) => Some(key),
            Self::RsaPublic(_) => None,
        }
    }

    /// Compare this key's thumbprint to `expected` in constant time
    #[must_use]
    pub fn thumbprint_matches(&self, alg: DigestAlgorithm, expected: &[u8]) -> bool {
        self.thumbprint(alg).ct_eq(expected).into()
    }
}

impl JsonWebKey for Key {
    fn header(&self) -> &Header {
        match self {
            Self::RsaPublic(key) => key.header(),
            Self::RsaPrivate(key) => key.header(),
        }
    }

    fn thumbprint(&self, alg: DigestAlgorithm) -> Vec<u8> {
        match self {
            Self::RsaPublic(key) => key.thumbprint(alg),
            Self::RsaPrivate(key) => key.thumbprint(alg),
        }
    }
}

/// Builder-style entry point for parsing keys
#[derive(Debug, Clone, Copy, Default)]
pub struct JwkParser {
    options: ParseOptions,
}

impl JwkParser {
    /// Parser with default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with the given options
    #[must_use]
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Derive CRT values for private keys
    #[must_use]
    pub fn precompute_crt(mut self, enabled: bool) -> Self {
        self.options.precompute_crt = enabled;
        self
    }

    /// Cross-check private key parameters
    #[must_use]
    pub fn validate(mut self, enabled: bool) -> Self {
        self.options.validate = enabled;
        self
    }

    /// Options in effect
    #[must_use]
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse one JWK from a byte slice
    pub fn parse(&self, input: &[u8]) -> JwkResult<Key> {
        trace!(len = input.len(), "parsing JWK");
        self.build(parse::from_slice(input)?)
    }

    /// Parse one JWK from a string
    pub fn parse_str(&self, input: &str) -> JwkResult<Key> {
        self.parse(input.as_bytes())
    }

    /// Parse one JWK from a reader
    pub fn parse_reader<R: io::Read>(&self, reader: R) -> JwkResult<Key> {
        trace!("parsing JWK from reader");
        self.build(parse::from_reader(reader)?)
    }

    fn build(&self, parsed: parse::ParsedJwk<'_>) -> JwkResult<Key> {
        let kty = parsed.header.key_type();
        let key = match kty {
            KeyType::Rsa => rsa::build(parsed, &self.options)?,
            KeyType::Ec | KeyType::Okp => {
                debug!(kty = %kty, "key type not supported");
                return Err(JwkError::UnsupportedKeyType(kty));
            }
        };

        debug!(
            kty = %key.key_type(),
            alg = %key.algorithm(),
            kid = key.id(),
            private = key.is_private(),
            "parsed JWK"
        );
        Ok(key)
    }
}
