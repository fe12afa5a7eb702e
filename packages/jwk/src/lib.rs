//! JSON Web Key parsing and RFC 7638 thumbprints
//!
//! This crate provides:
//! - Single-pass extraction of JWK claims without an intermediate JSON tree
//! - RSA public and private key assembly from base64url big-endian claims
//! - A closed registry of JOSE key algorithm names
//! - Thumbprints with a caller-selected digest
//! - Pooled scratch buffers so steady-state parsing allocates little
//!
//! ```
//! use cryypt_jwk::{Cryypt, DigestAlgorithm, JsonWebKey};
//!
//! let key = Cryypt::jwk()
//!     .parse_str(r#"{"kty":"RSA","alg":"RS256","kid":"k1","n":"AQA","e":"AQAB"}"#)?;
//! assert_eq!(key.id(), "k1");
//! let thumbprint = key.thumbprint(DigestAlgorithm::Sha256);
//! assert!(key.thumbprint_matches(DigestAlgorithm::Sha256, &thumbprint));
//! # Ok::<(), cryypt_jwk::JwkError>(())
//! ```

pub mod digest;
pub mod encoding;
mod error;
pub mod jwa;
pub mod jwk;
pub mod options;
pub mod pool;
mod thumbprint;

pub use digest::DigestAlgorithm;
pub use error::*;
pub use jwa::{KeyAlgorithm, SignatureAlgorithm, UnknownAlgorithm};
pub use jwk::{
    CrtParameters, Header, JsonWebKey, JwkParser, Key, KeyType, KeyUsage, RsaPrivateKey,
    RsaPublicKey,
};
pub use options::ParseOptions;

use std::io;

/// Main entry point
pub struct Cryypt;

impl Cryypt {
    /// Parser with default options
    #[must_use]
    pub fn jwk() -> JwkParser {
        JwkParser::new()
    }
}

/// Parse one JWK from a byte slice with default options
///
/// # Errors
/// Returns a [`JwkError`] describing the first problem found in the input.
pub fn parse(input: &[u8]) -> JwkResult<Key> {
    JwkParser::new().parse(input)
}

/// Parse one JWK from a string with default options
///
/// # Errors
/// Returns a [`JwkError`] describing the first problem found in the input.
pub fn parse_str(input: &str) -> JwkResult<Key> {
    JwkParser::new().parse_str(input)
}

/// Parse one JWK from a reader with default options
///
/// # Errors
/// Returns a [`JwkError`] describing the first problem found in the input.
pub fn parse_reader<R: io::Read>(reader: R) -> JwkResult<Key> {
    JwkParser::new().parse_reader(reader)
}
