//! Base64 codecs used by JWK claims
//!
//! Thin wrapper over the `base64` engines with one extra operation: encoding a
//! machine word through its minimal big-endian form, as JWK integer claims
//! require.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::engine::GeneralPurpose;
use base64::Engine as _;

pub use base64::DecodeError;

/// Base64 variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Standard alphabet, padded
    Std,
    /// Standard alphabet, unpadded
    RawStd,
    /// URL-safe alphabet, padded
    Url,
    /// URL-safe alphabet, unpadded (the JWK form)
    RawUrl,
}

impl Encoding {
    #[inline]
    fn engine(self) -> &'static GeneralPurpose {
        match self {
            Self::Std => &STANDARD,
            Self::RawStd => &STANDARD_NO_PAD,
            Self::Url => &URL_SAFE,
            Self::RawUrl => &URL_SAFE_NO_PAD,
        }
    }

    /// Encode bytes to a new string
    #[inline]
    #[must_use]
    pub fn encode(self, input: &[u8]) -> String {
        self.engine().encode(input)
    }

    /// Decode a string to new bytes
    ///
    /// # Errors
    /// Returns [`DecodeError`] on characters outside the alphabet or a padding mismatch.
    #[inline]
    pub fn decode(self, input: &str) -> Result<Vec<u8>, DecodeError> {
        self.engine().decode(input)
    }

    /// Append the decoded bytes of `input` to `out`
    ///
    /// # Errors
    /// Returns [`DecodeError`] on characters outside the alphabet or a padding mismatch.
    #[inline]
    pub fn decode_into(self, input: &str, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        self.engine().decode_vec(input, out)
    }

    /// Encode `value` through its minimal big-endian bytes
    ///
    /// Leading zero bytes are stripped; zero itself encodes as a single zero byte.
    #[must_use]
    pub fn encode_u64(self, value: u64) -> String {
        let bytes = value.to_be_bytes();
        self.encode(minimal_be(&bytes))
    }
}

/// Strip leading zero bytes, keeping at least one byte
pub(crate) fn minimal_be(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b != 0) {
        Some(start) => &bytes[start..],
        None => &bytes[bytes.len().saturating_sub(1)..],
    }
}
