//! JSON Web Algorithms registry
//!
//! The set of algorithms a key may declare is closed and compiled in. The
//! combined key-algorithm table is built once, on first use, by copying every
//! signature algorithm into it; non-signature key algorithms would be added to
//! the same table. The table is never mutated afterwards, so lookups need no
//! synchronization.

mod signature;

pub use signature::SignatureAlgorithm;

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

static KEY_ALGORITHMS: Lazy<HashMap<&'static str, KeyAlgorithm>> = Lazy::new(|| {
    let mut algorithms = HashMap::with_capacity(SignatureAlgorithm::ALL.len());
    for alg in SignatureAlgorithm::ALL {
        algorithms.insert(alg.as_str(), KeyAlgorithm::from(alg));
    }
    algorithms
});

/// The value is not a registered algorithm
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm: {name}")]
pub struct UnknownAlgorithm {
    name: String,
}

impl UnknownAlgorithm {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The rejected value
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Algorithm a key is intended for (`alg` claim)
///
/// Only registered names can be turned into a `KeyAlgorithm`, so holding one
/// proves the value passed registry validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyAlgorithm(&'static str);

impl KeyAlgorithm {
    /// Look up `name` in the registry
    ///
    /// # Errors
    /// Returns [`UnknownAlgorithm`] if the name is not registered.
    pub fn from_name(name: &str) -> Result<Self, UnknownAlgorithm> {
        KEY_ALGORITHMS
            .get(name)
            .copied()
            .ok_or_else(|| UnknownAlgorithm::new(name))
    }

    /// Whether `name` is a registered key algorithm
    #[must_use]
    pub fn is_valid(name: &str) -> bool {
        KEY_ALGORITHMS.contains_key(name)
    }

    /// The signature algorithm this key algorithm denotes, if it is one
    #[must_use]
    pub fn as_signature_algorithm(self) -> Option<SignatureAlgorithm> {
        self.0.parse().ok()
    }

    /// Registered `alg` value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<SignatureAlgorithm> for KeyAlgorithm {
    fn from(alg: SignatureAlgorithm) -> Self {
        Self(alg.as_str())
    }
}

impl PartialEq<SignatureAlgorithm> for KeyAlgorithm {
    fn eq(&self, other: &SignatureAlgorithm) -> bool {
        self.0 == other.as_str()
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_signature_algorithm_is_a_key_algorithm() {
        for alg in SignatureAlgorithm::ALL {
            let key_alg = KeyAlgorithm::from_name(alg.as_str())
                .expect("signature algorithms are registered as key algorithms");
            assert_eq!(key_alg, alg);
            assert_eq!(key_alg.as_signature_algorithm(), Some(alg));
            assert!(SignatureAlgorithm::is_valid(alg.as_str()));
        }
        assert_eq!(KEY_ALGORITHMS.len(), SignatureAlgorithm::ALL.len());
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let err = KeyAlgorithm::from_name("none").expect_err("`none` is not registered");
        assert_eq!(err.name(), "none");
        assert_eq!(err.to_string(), "unknown algorithm: none");
        assert!(!KeyAlgorithm::is_valid(""));
        assert!(!KeyAlgorithm::is_valid("rs256"));
    }

    #[test]
    fn test_ps_algorithms_use_registered_names() {
        assert_eq!(SignatureAlgorithm::PS384.as_str(), "PS384");
        assert_eq!(SignatureAlgorithm::PS512.as_str(), "PS512");
        assert!(KeyAlgorithm::is_valid("PS512"));
        assert!(!KeyAlgorithm::is_valid("P512"));
    }

    #[test]
    fn test_display_round_trips_through_from_name() {
        let alg = KeyAlgorithm::from(SignatureAlgorithm::ES256K);
        assert_eq!(alg.to_string(), "ES256K");
        assert_eq!(KeyAlgorithm::from_name(&alg.to_string()), Ok(alg));
    }
}
