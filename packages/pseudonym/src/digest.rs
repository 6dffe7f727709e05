//! Keyed HMAC-SHA256 digest with hex encoding

use crate::{PseudonymError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Output size of HMAC-SHA256 in bytes
pub const DIGEST_LEN: usize = 32;

/// Raw result of one keyed hash invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyedDigest {
    bytes: [u8; DIGEST_LEN],
}

impl KeyedDigest {
    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Full digest as lowercase hex
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// First `chars` lowercase hex characters of the digest
    ///
    /// `chars` is clamped to the full hex length. Odd counts are supported.
    #[must_use]
    pub fn hex_prefix(&self, chars: usize) -> String {
        let chars = chars.min(DIGEST_LEN * 2);
        let mut hex = hex::encode(&self.bytes[..(chars + 1) / 2]);
        hex.truncate(chars);
        hex
    }
}

impl AsRef<[u8]> for KeyedDigest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// HMAC-SHA256 of `message` under `key`
///
/// # Errors
///
/// Returns `PseudonymError::Derivation` if the MAC cannot be keyed. HMAC
/// accepts keys of any length, so this is not expected in practice.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<KeyedDigest> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| PseudonymError::derivation(format!("HMAC key error: {e}")))?;
    mac.update(message);
    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(&mac.finalize().into_bytes());
    Ok(KeyedDigest { bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const KEY: &[u8] = b"super-secret-key-at-least-32-chars-long-for-safe-use";

    #[test]
    fn matches_known_vector() {
        let digest = hmac_sha256(KEY, b"user123::shopping-app::id").expect("hmac");
        assert_eq!(
            digest.as_bytes(),
            &hex!("3a1ee3a8bcd6229e9c017912294e0d77d04629a255b39cc47f6feeb75a14e20d")[..]
        );
    }

    #[test]
    fn rfc4231_case_2() {
        let digest = hmac_sha256(b"Jefe", b"what do ya want for nothing?").expect("hmac");
        assert_eq!(
            digest.to_hex(),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn hex_prefix_truncates() {
        let digest = hmac_sha256(KEY, b"user123::shopping-app::id").expect("hmac");
        assert_eq!(digest.hex_prefix(16), "3a1ee3a8bcd6229e");
        assert_eq!(digest.hex_prefix(3), "3a1");
        assert_eq!(digest.hex_prefix(1000), digest.to_hex());
    }
}
