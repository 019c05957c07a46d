//! Checkout signature scheme.
//!
//! The gateway signs `"<order_id>|<payment_id>"` with HMAC-SHA256 under the
//! shared secret and hands the hex digest to the client alongside the
//! payment id. We recompute the digest and compare in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the hex HMAC-SHA256 signature for an order/payment pair.
pub fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex_encode(&mac.finalize().into_bytes())
}

/// Check a hex signature against the expected digest for the pair.
///
/// Returns false for malformed hex rather than erroring; a signature that
/// does not decode cannot be valid.
pub fn verify(secret: &str, order_id: &str, payment_id: &str, signature: &str) -> bool {
    let Some(sig_bytes) = hex_decode(signature) else {
        return false;
    };
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    mac.verify_slice(&sig_bytes).is_ok()
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        let _ = write!(out, "{b:02x}");
    }
    out
}

fn hex_decode(input: &str) -> Option<Vec<u8>> {
    if input.len() % 2 != 0 {
        return None;
    }
    (0..input.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(input.get(i..i + 2)?, 16).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify_accepts() {
        let sig = sign("secret", "order_abc", "pay_xyz");
        assert!(verify("secret", "order_abc", "pay_xyz", &sig));
    }

    #[test]
    fn wrong_secret_rejected() {
        let sig = sign("secret", "order_abc", "pay_xyz");
        assert!(!verify("other", "order_abc", "pay_xyz", &sig));
    }

    #[test]
    fn swapped_ids_rejected() {
        let sig = sign("secret", "order_abc", "pay_xyz");
        assert!(!verify("secret", "pay_xyz", "order_abc", &sig));
    }

    #[test]
    fn malformed_hex_rejected() {
        assert!(!verify("secret", "order_abc", "pay_xyz", "not-hex"));
        assert!(!verify("secret", "order_abc", "pay_xyz", "abc"));
    }
}
