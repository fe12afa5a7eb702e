//! Parse configuration
//!
//! RSA private keys are assembled from d, p and q only. Nothing derives the CRT
//! values or checks that the parameters belong together unless asked to here.

/// Controls the optional work done while assembling private keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Derive dP, dQ and qInv from d, p and q
    pub precompute_crt: bool,
    /// Check n = p·q, the d/e relation and any supplied CRT claims
    pub validate: bool,
}

impl ParseOptions {
    /// No precomputation, no validation
    #[must_use]
    pub const fn new() -> Self {
        Self {
            precompute_crt: false,
            validate: false,
        }
    }

    /// Precompute CRT values and validate every private key
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            precompute_crt: true,
            validate: true,
        }
    }

    /// Enable or disable CRT precomputation
    #[must_use]
    pub const fn with_crt_precomputation(mut self, enabled: bool) -> Self {
        self.precompute_crt = enabled;
        self
    }

    /// Enable or disable cross-parameter validation
    #[must_use]
    pub const fn with_validation(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }
}
