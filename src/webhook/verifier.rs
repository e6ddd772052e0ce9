//! Webhook signature verification.
//!
//! Implements the Rocket Pay signing scheme: the 256-bit signing key is the
//! SHA-256 digest of the application's API key, and the signature is the
//! lowercase hex HMAC-SHA256 of the raw request body under that key.
//!
//! The body must be the exact bytes received on the wire. Re-serializing a
//! parsed JSON value can reorder keys or change whitespace and makes every
//! valid signature fail.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Derive the signing key from the application's API key.
///
/// Hashing the token first gives the HMAC key a fixed length; the literal
/// token is never used as key material.
fn signing_key(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}

/// Check that `signature` authenticates `body` under the key derived from
/// `token`.
///
/// Returns `true` only when body, signature, and token are all non-empty
/// and the computed lowercase-hex HMAC-SHA256 of the body equals the
/// supplied signature exactly. The comparison is constant-time.
///
/// Never panics and never returns an error: adversarial input of any shape
/// yields `false`.
pub fn verify_signature(body: &str, signature: &str, token: &str) -> bool {
    if body.is_empty() || signature.is_empty() || token.is_empty() {
        return false;
    }

    let Ok(mut mac) = HmacSha256::new_from_slice(&signing_key(token)) else {
        return false;
    };
    mac.update(body.as_bytes());
    let expected = hex::encode(mac.finalize().into_bytes());

    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}

#[cfg(test)]
pub(crate) fn compute_test_signature(body: &str, token: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(&signing_key(token)).expect("HMAC accepts any key");
    mac.update(body.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
