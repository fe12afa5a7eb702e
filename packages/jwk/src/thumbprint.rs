//! JWK thumbprints (RFC 7638)
//!
//! The hash input is the JSON object of a key's required public members only,
//! in the member order RFC 7638 fixes for that key type, with no whitespace.
//! Each key type writes its members explicitly; the order is never produced by
//! sorting at runtime.

use crate::digest::DigestAlgorithm;
use crate::encoding::Encoding;
use crate::pool;
use num_bigint::BigUint;

/// Thumbprint of an RSA public key: `{"e":…,"kty":"RSA","n":…}` hashed with `alg`
pub(crate) fn rsa(alg: DigestAlgorithm, e: u64, n: &BigUint) -> Vec<u8> {
    let mut buf = pool::byte_buffer();
    write_rsa_members(&mut buf, e, n);

    let mut hasher = alg.hasher();
    hasher.update(&buf);
    hasher.finalize()
}

/// Append the canonical RSA member object to `buf`
pub(crate) fn write_rsa_members(buf: &mut Vec<u8>, e: u64, n: &BigUint) {
    buf.extend_from_slice(br#"{"e":""#);
    buf.extend_from_slice(Encoding::RawUrl.encode_u64(e).as_bytes());
    buf.extend_from_slice(br#"","kty":"RSA","n":""#);
    buf.extend_from_slice(Encoding::RawUrl.encode(&n.to_bytes_be()).as_bytes());
    buf.extend_from_slice(br#""}"#);
}
