//! Single-pass claim extraction
//!
//! The JSON object is walked once through a serde map visitor. Header claims
//! are validated as soon as they are read; every other claim is kept as its
//! raw, still-encoded string. Claim values must be JSON strings: any other
//! shape is rejected as malformed JSON rather than decoded into a generic
//! value tree.

use super::header::Header;
use super::{KeyType, KeyUsage, CLAIM_ALG, CLAIM_KID, CLAIM_KTY, CLAIM_USE};
use crate::error::{JwkError, JwkResult};
use crate::jwa::KeyAlgorithm;
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::io;

/// Key-specific claims are pre-sized for the largest supported shape, an RSA
/// private key (n, e, d, p, q, dp, dq, qi).
const PARSED_CLAIMS_CAPACITY: usize = 8;

/// Non-header claims, name to raw encoded value
pub(crate) type ParsedClaims<'de> = HashMap<Cow<'de, str>, Cow<'de, str>>;

/// Validated header plus the claims left for the key builder
#[derive(Debug)]
pub(crate) struct ParsedJwk<'de> {
    pub(crate) header: Header,
    pub(crate) claims: ParsedClaims<'de>,
}

/// Parse one JWK object from a byte slice; string claims borrow from `input`
/// where no unescaping was needed.
pub(crate) fn from_slice(input: &[u8]) -> JwkResult<ParsedJwk<'_>> {
    let mut de = serde_json::Deserializer::from_slice(input);
    let partial = read_object(&mut de)?;
    de.end()?;
    partial.finish()
}

/// Parse one JWK object from a reader; all claims are owned.
pub(crate) fn from_reader<R: io::Read>(reader: R) -> JwkResult<ParsedJwk<'static>> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    let partial = read_object(&mut de)?;
    de.end()?;
    partial.finish()
}

fn read_object<'de, R>(de: &mut serde_json::Deserializer<R>) -> JwkResult<PartialJwk<'de>>
where
    R: serde_json::de::Read<'de>,
{
    let mut rejected = None;
    let result = ClaimSink {
        rejected: &mut rejected,
    }
    .deserialize(&mut *de);

    // A claim rejected by value validation surfaces as a serde error; report
    // the typed cause instead.
    match (result, rejected) {
        (_, Some(err)) => Err(err),
        (Ok(partial), None) => Ok(partial),
        (Err(err), None) => Err(err.into()),
    }
}

#[derive(Debug)]
struct PartialJwk<'de> {
    kty: Option<KeyType>,
    alg: Option<KeyAlgorithm>,
    kid: String,
    usage: KeyUsage,
    claims: ParsedClaims<'de>,
}

impl<'de> PartialJwk<'de> {
    fn new() -> Self {
        Self {
            kty: None,
            alg: None,
            kid: String::new(),
            usage: KeyUsage::Unspecified,
            claims: HashMap::with_capacity(PARSED_CLAIMS_CAPACITY),
        }
    }

    fn accept(&mut self, name: Cow<'de, str>, value: Cow<'de, str>) -> JwkResult<()> {
        match &*name {
            CLAIM_ALG => self.alg = Some(KeyAlgorithm::from_name(&value)?),
            CLAIM_KTY => self.kty = Some(value.parse()?),
            CLAIM_USE => self.usage = KeyUsage::from_claim(&value)?,
            CLAIM_KID => self.kid = value.into_owned(),
            _ => {
                self.claims.insert(name, value);
            }
        }
        Ok(())
    }

    fn finish(self) -> JwkResult<ParsedJwk<'de>> {
        let alg = self.alg.ok_or_else(|| JwkError::missing_claim(CLAIM_ALG))?;
        let kty = self.kty.ok_or_else(|| JwkError::missing_claim(CLAIM_KTY))?;
        Ok(ParsedJwk {
            header: Header {
                kty,
                alg,
                kid: self.kid,
                usage: self.usage,
            },
            claims: self.claims,
        })
    }
}

/// Map visitor that feeds each claim into a [`PartialJwk`]
struct ClaimSink<'a> {
    rejected: &'a mut Option<JwkError>,
}

impl<'de> DeserializeSeed<'de> for ClaimSink<'_> {
    type Value = PartialJwk<'de>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for ClaimSink<'_> {
    type Value = PartialJwk<'de>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON object of string claims")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut jwk = PartialJwk::new();
        while let Some(ClaimStr(name)) = map.next_key::<ClaimStr<'de>>()? {
            let ClaimStr(value) = map.next_value::<ClaimStr<'de>>()?;
            if let Err(err) = jwk.accept(name, value) {
                *self.rejected = Some(err);
                return Err(de::Error::custom("claim rejected"));
            }
        }
        Ok(jwk)
    }
}

/// A JSON string, borrowed from the input when possible
struct ClaimStr<'de>(Cow<'de, str>);

impl<'de> Deserialize<'de> for ClaimStr<'de> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ClaimStrVisitor;

        impl<'de> Visitor<'de> for ClaimStrVisitor {
            type Value = ClaimStr<'de>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string claim")
            }

            fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<Self::Value, E> {
                Ok(ClaimStr(Cow::Borrowed(v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ClaimStr(Cow::Owned(v.to_owned())))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ClaimStr(Cow::Owned(v)))
            }
        }

        deserializer.deserialize_str(ClaimStrVisitor)
    }
}
