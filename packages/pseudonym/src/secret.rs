//! Secret key material for the keyed hash
//!
//! The key is validated once, held immutably and wiped from memory on drop.
//! It is never printed: `Debug` is redacted and there is no `Display`.

use crate::{PseudonymError, Result};
use std::fmt;
use zeroize::Zeroizing;

/// Minimum secret length, in characters for text keys and bytes for raw keys
pub const MIN_SECRET_LEN: usize = 32;

/// Validated HMAC secret
#[derive(Clone)]
pub struct SecretKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl SecretKey {
    /// Create a secret from text, requiring at least [`MIN_SECRET_LEN`] characters
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::Configuration` if the text is empty or shorter
    /// than 32 characters.
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = Zeroizing::new(secret.into());
        if secret.is_empty() {
            return Err(PseudonymError::configuration(
                "Secret key must be a non-empty string",
            ));
        }
        if secret.chars().count() < MIN_SECRET_LEN {
            return Err(Self::too_short("characters"));
        }
        Ok(Self {
            bytes: Zeroizing::new(secret.as_bytes().to_vec()),
        })
    }

    /// Create a secret from raw bytes, requiring at least [`MIN_SECRET_LEN`] bytes
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::Configuration` if fewer than 32 bytes are supplied.
    pub fn from_bytes(secret: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = Zeroizing::new(secret.into());
        if bytes.is_empty() {
            return Err(PseudonymError::configuration(
                "Secret key must be a non-empty byte sequence",
            ));
        }
        if bytes.len() < MIN_SECRET_LEN {
            return Err(Self::too_short("bytes"));
        }
        Ok(Self { bytes })
    }

    fn too_short(unit: &str) -> PseudonymError {
        tracing::warn!(minimum = MIN_SECRET_LEN, "rejected weak secret key");
        PseudonymError::configuration(format!(
            "Secret key must be at least {MIN_SECRET_LEN} {unit} for security"
        ))
    }

    pub(crate) fn expose(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretKey").field(&"[REDACTED]").finish()
    }
}

impl TryFrom<&str> for SecretKey {
    type Error = PseudonymError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for SecretKey {
    type Error = PseudonymError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = PseudonymError;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_bytes(value)
    }
}
