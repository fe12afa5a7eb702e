//! Shared key fixtures

#![allow(dead_code)]

/// 2048-bit RSA modulus shared by both fixtures
pub const N: &str = "rZDnqx3JBZ1PoBoU1NCfEGQ5vy8WUP_0xKpCm9GeuEnO3SI_SeA4IU9udUrRPpIzt9fT7zsma7ZRlvdvuQpk-mz1QuQP-wHeKXVoss5bgM5jv1SIfbJdvn6JFJ_I2L6Mh2WgE6huerUt-xnkyuOfO7MEStdySmaydVUWVMA18AYqj3wurL5p97GCFC5knquXoWQXqSXGOsukWqeha3QcaRdh3PuB_2GmBQJwhk5TlrIO_hkadRbwg2M6texucoBWdL-i5G2WYfeQ4lADUz25yTR0jIEzDLNDVW3Z36ANBiCjRTsqsacOe75VisqgOaVP2KnrFDqxsIwSYexNM9aWHQ";

pub const KID: &str = "jcnzM5SYcyC8PPztdZ2exBOyk0G_1EBw-ggiWXrHFMc";

pub const P: &str = "5EXZdUzc7Sij0P9L2QFwI8p9qzy1e4pzSIpBOHJeKb-LZIsXENzjN6u9i2K5EF1b3Z0Ly72WAwwl9HqMaGdKGpzjeV0tX80fekBYABevFaeSbkNPAg6kPcRBhTl5ZmaBAMb8m53mE85esjI1jfisr-hqJd6wPMBaAphSR9JwIOs";
pub const Q: &str = "wqXyExsfB47637IyTb06CqDlQ6A4iAzdCGoFTis4OcuyPgSjYVpHu1zn9lsvhUq9Bzc36sk_0lglCIa74y9SJYqEtNcls9uti4pTuHKAFqzSFHm9Re8nSvlGARN_a1BP6wN4S275Y2pZL1BuRjVGWGWRLyHjEuEnuo9mJXDqoxc";
pub const D: &str = "Ahmjw_1LRmcd5IkMQXr4wcEEtdyC_53pP0v0HGCP9BjoiOJ2M5Wj-Ds20fKCz6gDOjFBXj6v-1OsbxA1aN7IVANngFS0IMxn_MZv6uH2V3un11PVhvfWjIyJahd43a6IksbXBgXeuFti4AvzKcVRUu6ambE7r8zIUgUijQn6XRog4aUsjd5wfsL7h58sUH6T4FRpQvdVwpambrG0GlOZfg25c9zarQiEZ-tT9FbO0olF6lWrrOFay6iGbp4h0dlTr8HkJpFbjZQHNNUHFqG3cndlrKX0hiylpFrkHf0qCY6kYLbvcJn9qZD1bHfTtjyFAxeTt08qL5Zna5nfFtDYvQ";
pub const DP: &str = "DFc2XWANZYjX6lmS6SVpwZWV26cJjKc8ekR3KC0OqCUhzQqz8YZvhjfzpFBu_tJ9P-rYk2gpbvq-JoxlgNNsrymiJpKB_HbjZ8GIwGCHZ51Kjkl3QP43pNsyS5iC1qVd_gPD7knIAXQbrHiIaqdx9oSTEH8MegxQEWnYsOdQhoc";
pub const DQ: &str = "VnkYmSpUV6xKgbSNqoGlVnFySN_WHYLxczp-juKegPaggfLXjnloIrG8j3KlIuc4IQuD-PddNhpYoXgR4nT0Xp8yI5DtPAEdET_rv6aGhwxR7CzFTFtZrnIdin7Z_ZfZWUPaXlC31FW7t0xZITGrxbuhiznXwlxqpPPt4jZO1xM";
pub const QI: &str = "rQarz3GVlXpfXCJvkNKLJEFgSP3HQqgqcD4Mr69m6TkTqJw0lU20ceXPaDqKQY7gMxTVCyYeNyx462yrkciYcxa4pB-4kDlH6jZQ1S-uMpc9sgaSMwfk_cbxT8FneQraWnMlkdnXRq78RhK38mJ5KS9-pZZMAhgN8IMYE4kRnAE";

/// Base64url thumbprints of the public key, keyed by digest
pub const THUMBPRINT_SHA1: &str = "xKm6R1fOP17VeAibO_Wl0WfLskc";
pub const THUMBPRINT_SHA256: &str = "vVH22fBNoDWs_6MKb99Sxi5ADuzHbkJF4xrTm-6mFCE";
pub const THUMBPRINT_SHA384: &str = "rezeWzXFodfG6rRoIfFZ6XwaCTLqzSHCIOP2-FbePiYs5VNtBEYLX-W0DTmK671E";
pub const THUMBPRINT_SHA512: &str =
    "wuEpcBiNC3t6LeJPBdrFEFUvDbZaXwbSv-ZOXm_JsRU-K4rZEXDaDGY797WlvUiojMaieSvNtAtsu_dJ0FcHYg";
pub const THUMBPRINT_SHA3_256: &str = "WmCy2GVWaFE3kuomytMI70UlWUZiq85LUS2VBUbM344";

/// Public key JSON with its claims in the given order
pub fn public_jwk() -> String {
    format!(r#"{{"alg":"RS256","kty":"RSA","e":"AQAB","use":"sig","kid":"{KID}","n":"{N}"}}"#)
}

/// Private key JSON; `overrides` replace or add claims
pub fn private_jwk(overrides: &[(&str, &str)]) -> String {
    let mut claims = vec![
        ("alg", "RS256"),
        ("p", P),
        ("kty", "RSA"),
        ("q", Q),
        ("d", D),
        ("e", "AQAB"),
        ("use", "sig"),
        ("kid", KID),
        ("qi", QI),
        ("dp", DP),
        ("dq", DQ),
        ("n", N),
    ];
    for (name, value) in overrides {
        match claims.iter_mut().find(|(existing, _)| existing == name) {
            Some(claim) => claim.1 = *value,
            None => claims.push((*name, *value)),
        }
    }
    object(&claims)
}

/// Render string claims as a compact JSON object
pub fn object(claims: &[(&str, &str)]) -> String {
    let members: Vec<String> = claims
        .iter()
        .map(|(name, value)| format!(r#""{name}":"{value}""#))
        .collect();
    format!("{{{}}}", members.join(","))
}
