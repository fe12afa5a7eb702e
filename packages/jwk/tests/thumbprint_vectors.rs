//! RFC 7638 thumbprints against independently computed digests

mod common;

use common::{object, private_jwk, public_jwk, KID, N};
use cryypt_jwk::encoding::Encoding;
use cryypt_jwk::{DigestAlgorithm, JsonWebKey, Key};
use hex_literal::hex;
use proptest::prelude::*;

fn thumbprint(key: &Key, alg: DigestAlgorithm) -> String {
    Encoding::RawUrl.encode(&key.thumbprint(alg))
}

#[test]
fn test_public_key_known_answers() {
    let key = cryypt_jwk::parse_str(&public_jwk()).expect("public fixture should parse");

    for (alg, expected) in [
        (DigestAlgorithm::Sha1, common::THUMBPRINT_SHA1),
        (DigestAlgorithm::Sha256, common::THUMBPRINT_SHA256),
        (DigestAlgorithm::Sha384, common::THUMBPRINT_SHA384),
        (DigestAlgorithm::Sha512, common::THUMBPRINT_SHA512),
        (DigestAlgorithm::Sha3_256, common::THUMBPRINT_SHA3_256),
    ] {
        assert_eq!(thumbprint(&key, alg), expected, "{alg}");
        assert_eq!(key.thumbprint(alg).len(), alg.output_len(), "{alg}");
    }
}

#[test]
fn test_sha256_raw_bytes() {
    let key = cryypt_jwk::parse_str(&public_jwk()).expect("public fixture should parse");
    assert_eq!(
        key.thumbprint(DigestAlgorithm::Sha256),
        hex!("bd51f6d9f04da035acffa30a6fdf52c62e400eecc76e4245e31ad39beea61421")
    );
}

#[test]
fn test_private_key_shares_public_thumbprint() {
    let public = cryypt_jwk::parse_str(&public_jwk()).expect("public fixture should parse");
    let private = cryypt_jwk::parse_str(&private_jwk(&[])).expect("private fixture should parse");

    for alg in [DigestAlgorithm::Sha1, DigestAlgorithm::Sha256] {
        assert_eq!(public.thumbprint(alg), private.thumbprint(alg));
    }
    let expected = public.thumbprint(DigestAlgorithm::Sha256);
    assert!(private.thumbprint_matches(DigestAlgorithm::Sha256, &expected));
}

#[test]
fn test_optional_claims_do_not_affect_thumbprint() {
    let bare = object(&[("kty", "RSA"), ("alg", "RS256"), ("n", N), ("e", "AQAB")]);
    let decorated = object(&[
        ("kid", KID),
        ("use", "enc"),
        ("x5t", "ignored"),
        ("alg", "PS512"),
        ("e", "AQAB"),
        ("n", N),
        ("kty", "RSA"),
    ]);

    let bare = cryypt_jwk::parse_str(&bare).expect("bare key should parse");
    let decorated = cryypt_jwk::parse_str(&decorated).expect("decorated key should parse");
    assert_eq!(
        thumbprint(&bare, DigestAlgorithm::Sha256),
        thumbprint(&decorated, DigestAlgorithm::Sha256)
    );
}

#[test]
fn test_thumbprint_is_repeatable() {
    let key = cryypt_jwk::parse_str(&public_jwk()).expect("public fixture should parse");
    let first = key.thumbprint(DigestAlgorithm::Sha384);
    for _ in 0..16 {
        assert_eq!(key.thumbprint(DigestAlgorithm::Sha384), first);
    }
}

proptest! {
    #[test]
    fn prop_claim_order_does_not_change_thumbprint(
        claims in Just(vec![
            ("kty", "RSA"),
            ("alg", "RS256"),
            ("kid", KID),
            ("n", N),
            ("e", "AQAB"),
        ])
        .prop_shuffle()
    ) {
        let key = cryypt_jwk::parse_str(&object(&claims)).expect("every order should parse");
        prop_assert_eq!(thumbprint(&key, DigestAlgorithm::Sha256), common::THUMBPRINT_SHA256);
    }
}
