//! RSA keys (RFC 7518 section 6.3)
//!
//! A key is private as soon as any of p, q, d, qi, dp or dq is present. The
//! private key is assembled from d, p and q; CRT values are only derived, and
//! the parameters only cross-checked, when [`ParseOptions`] asks for it.

use super::header::Header;
use super::parse::{ParsedClaims, ParsedJwk};
use super::{JsonWebKey, Key};
use crate::digest::DigestAlgorithm;
use crate::encoding::Encoding;
use crate::error::{JwkError, JwkResult};
use crate::options::ParseOptions;
use crate::{pool, thumbprint};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use std::fmt;

const CLAIM_N: &str = "n";
const CLAIM_E: &str = "e";
const CLAIM_D: &str = "d";
const CLAIM_P: &str = "p";
const CLAIM_Q: &str = "q";
const CLAIM_DP: &str = "dp";
const CLAIM_DQ: &str = "dq";
const CLAIM_QI: &str = "qi";

/// Claims whose presence marks a private key
const PRIVATE_CLAIMS: [&str; 6] = [CLAIM_P, CLAIM_Q, CLAIM_D, CLAIM_QI, CLAIM_DP, CLAIM_DQ];

/// RSA public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    header: Header,
    n: BigUint,
    e: u64,
}

impl RsaPublicKey {
    /// Modulus
    #[must_use]
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Public exponent
    #[must_use]
    pub fn e(&self) -> u64 {
        self.e
    }
}

impl JsonWebKey for RsaPublicKey {
    fn header(&self) -> &Header {
        &self.header
    }

    fn thumbprint(&self, alg: DigestAlgorithm) -> Vec<u8> {
        thumbprint::rsa(alg, self.e, &self.n)
    }
}

/// Chinese Remainder Theorem values of an RSA private key
#[derive(Clone, PartialEq, Eq)]
pub struct CrtParameters {
    dp: BigUint,
    dq: BigUint,
    qinv: BigUint,
}

impl CrtParameters {
    fn derive(d: &BigUint, p: &BigUint, q: &BigUint) -> JwkResult<Self> {
        let one = BigUint::one();
        if p <= &one || q <= &one {
            return Err(JwkError::inconsistent("primes must be greater than one"));
        }
        let qinv = q
            .modinv(p)
            .ok_or_else(|| JwkError::inconsistent("q has no inverse modulo p"))?;
        Ok(Self {
            dp: d % (p - &one),
            dq: d % (q - &one),
            qinv,
        })
    }

    /// d mod (p − 1)
    #[must_use]
    pub fn dp(&self) -> &BigUint {
        &self.dp
    }

    /// d mod (q − 1)
    #[must_use]
    pub fn dq(&self) -> &BigUint {
        &self.dq
    }

    /// q⁻¹ mod p
    #[must_use]
    pub fn qinv(&self) -> &BigUint {
        &self.qinv
    }
}

impl fmt::Debug for CrtParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrtParameters").finish_non_exhaustive()
    }
}

/// RSA private key
///
/// Holds its own public parameters; the header is shared with them.
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    public: RsaPublicKey,
    d: BigUint,
    p: BigUint,
    q: BigUint,
    crt: Option<CrtParameters>,
}

impl RsaPrivateKey {
    /// The public half of this key
    #[must_use]
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }

    /// Modulus
    #[must_use]
    pub fn n(&self) -> &BigUint {
        &self.public.n
    }

    /// Public exponent
    #[must_use]
    pub fn e(&self) -> u64 {
        self.public.e
    }

    /// Private exponent
    #[must_use]
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// First prime factor
    #[must_use]
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Second prime factor
    #[must_use]
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// CRT values, present only when precomputation was requested
    #[must_use]
    pub fn crt(&self) -> Option<&CrtParameters> {
        self.crt.as_ref()
    }
}

impl JsonWebKey for RsaPrivateKey {
    fn header(&self) -> &Header {
        &self.public.header
    }

    fn thumbprint(&self, alg: DigestAlgorithm) -> Vec<u8> {
        self.public.thumbprint(alg)
    }
}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("public", &self.public)
            .field("crt", &self.crt.is_some())
            .finish_non_exhaustive()
    }
}

/// Build an RSA key from parsed claims
pub(crate) fn build(parsed: ParsedJwk<'_>, options: &ParseOptions) -> JwkResult<Key> {
    let ParsedJwk { header, claims } = parsed;
    let public = build_public_key(header, &claims)?;

    if !has_private_claims(&claims) {
        return Ok(Key::RsaPublic(public));
    }

    let d = decode_claim(&claims, CLAIM_D)?;
    let p = decode_claim(&claims, CLAIM_P)?;
    let q = decode_claim(&claims, CLAIM_Q)?;

    if options.validate {
        validate(&public, &d, &p, &q, &claims)?;
    }
    let crt = if options.precompute_crt {
        Some(CrtParameters::derive(&d, &p, &q)?)
    } else {
        None
    };

    Ok(Key::RsaPrivate(RsaPrivateKey {
        public,
        d,
        p,
        q,
        crt,
    }))
}

fn build_public_key(header: Header, claims: &ParsedClaims<'_>) -> JwkResult<RsaPublicKey> {
    let n = decode_claim(claims, CLAIM_N)?;
    if n.is_zero() {
        return Err(JwkError::malformed_claim(CLAIM_N, "modulus must be non-zero"));
    }

    // JOSE exponents fit a machine word; decode through a scratch integer and narrow.
    let e = {
        let mut scratch = pool::big_uint();
        decode_claim_into(claims, CLAIM_E, &mut scratch)?;
        scratch
            .to_u64()
            .ok_or_else(|| JwkError::malformed_claim(CLAIM_E, "exponent exceeds 64 bits"))?
    };
    if e == 0 {
        return Err(JwkError::malformed_claim(CLAIM_E, "exponent must be non-zero"));
    }

    Ok(RsaPublicKey { header, n, e })
}

fn has_private_claims(claims: &ParsedClaims<'_>) -> bool {
    PRIVATE_CLAIMS.iter().any(|claim| claims.contains_key(*claim))
}

/// Decode a base64url big-endian integer claim into a freshly allocated value
fn decode_claim(claims: &ParsedClaims<'_>, name: &'static str) -> JwkResult<BigUint> {
    let mut value = BigUint::zero();
    decode_claim_into(claims, name, &mut value)?;
    Ok(value)
}

fn decode_claim_into(
    claims: &ParsedClaims<'_>,
    name: &'static str,
    dst: &mut BigUint,
) -> JwkResult<()> {
    let encoded = claims.get(name).ok_or_else(|| JwkError::missing_claim(name))?;

    let mut bytes = pool::byte_buffer();
    Encoding::RawUrl
        .decode_into(encoded, &mut bytes)
        .map_err(|e| JwkError::malformed_claim(name, format!("failed to decode: {e}")))?;
    *dst = BigUint::from_bytes_be(&bytes);
    Ok(())
}

fn validate(
    public: &RsaPublicKey,
    d: &BigUint,
    p: &BigUint,
    q: &BigUint,
    claims: &ParsedClaims<'_>,
) -> JwkResult<()> {
    let derived = CrtParameters::derive(d, p, q)?;

    if &(p * q) != public.n() {
        return Err(JwkError::inconsistent("n is not the product of p and q"));
    }
    if d >= public.n() {
        return Err(JwkError::inconsistent("d must be less than n"));
    }
    if public.e() < 2 {
        return Err(JwkError::inconsistent("public exponent must be at least 2"));
    }

    let one = BigUint::one();
    let de = d * BigUint::from(public.e());
    if &de % (p - &one) != one || &de % (q - &one) != one {
        return Err(JwkError::inconsistent("d is not the inverse of e"));
    }

    for (name, expected) in [
        (CLAIM_DP, derived.dp()),
        (CLAIM_DQ, derived.dq()),
        (CLAIM_QI, derived.qinv()),
    ] {
        if claims.contains_key(name) && &decode_claim(claims, name)? != expected {
            return Err(JwkError::inconsistent(format!(
                "{name} does not match d, p and q"
            )));
        }
    }

    Ok(())
}
