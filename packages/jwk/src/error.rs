//! Error handling for JWK parsing and key assembly

use crate::jwa::UnknownAlgorithm;
use crate::jwk::KeyType;
use thiserror::Error;

/// JWK-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwkError {
    /// The input is not a single JSON object of string claims
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// A claim is missing, undecodable or the key is incomplete for its type
    #[error("malformed key: {}{reason}", claim_prefix(.claim))]
    MalformedKey {
        /// Offending claim, when one can be named
        claim: Option<&'static str>,
        /// What is wrong with it
        reason: String,
    },

    /// `kty` is not one of the known key types
    #[error("unknown key type: {0}")]
    UnknownType(String),

    /// `use` is neither `sig` nor `enc`
    #[error("unknown key usage: {0}")]
    UnknownUse(String),

    /// `alg` is not in the algorithm registry
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),

    /// The key type is recognized but cannot be built yet
    #[error("key type {0} not supported")]
    UnsupportedKeyType(KeyType),

    /// Private key parameters contradict each other (only checked when validation is enabled)
    #[error("inconsistent key: {0}")]
    InconsistentKey(String),
}

impl JwkError {
    /// Create a malformed key error that names the offending claim
    #[must_use]
    pub fn malformed_claim(claim: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedKey {
            claim: Some(claim),
            reason: reason.into(),
        }
    }

    /// Create a malformed key error for a required claim that is absent
    #[must_use]
    pub fn missing_claim(claim: &'static str) -> Self {
        Self::malformed_claim(claim, "missing claim")
    }

    /// Create an inconsistent key error
    #[must_use]
    pub fn inconsistent(reason: impl Into<String>) -> Self {
        Self::InconsistentKey(reason.into())
    }

    /// Claim named by a [`JwkError::MalformedKey`]
    #[must_use]
    pub fn claim(&self) -> Option<&'static str> {
        match self {
            Self::MalformedKey { claim, .. } => *claim,
            _ => None,
        }
    }

    /// Whether the input was structurally or semantically malformed
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedJson(_) | Self::MalformedKey { .. })
    }
}

impl From<serde_json::Error> for JwkError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedJson(err.to_string())
    }
}

fn claim_prefix(claim: &Option<&'static str>) -> String {
    claim.map(|c| format!("claim `{c}`: ")).unwrap_or_default()
}

/// Result type for JWK operations
pub type JwkResult<T> = std::result::Result<T, JwkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_key_display_names_claim() {
        let err = JwkError::malformed_claim("n", "invalid base64url");
        assert_eq!(err.to_string(), "malformed key: claim `n`: invalid base64url");
        assert_eq!(err.claim(), Some("n"));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_malformed_key_display_without_claim() {
        let err = JwkError::MalformedKey {
            claim: None,
            reason: "missing alg claim".into(),
        };
        assert_eq!(err.to_string(), "malformed key: missing alg claim");
        assert_eq!(err.claim(), None);
    }

    #[test]
    fn test_enum_errors_carry_value() {
        assert_eq!(
            JwkError::UnknownType("DSA".into()).to_string(),
            "unknown key type: DSA"
        );
        assert_eq!(
            JwkError::UnknownUse("wrap".into()).to_string(),
            "unknown key usage: wrap"
        );
        assert!(!JwkError::UnknownType("DSA".into()).is_malformed());
    }
}
