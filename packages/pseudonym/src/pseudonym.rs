//! The `ck_` pseudonym format
//!
//! A pseudonym is `ck_` followed by exactly 16 lowercase hex characters. The
//! shape can be checked by anyone; only the holder of the secret can say which
//! identity produced it.

use crate::digest::KeyedDigest;
use crate::{PseudonymError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use subtle::ConstantTimeEq;

/// Fixed pseudonym prefix
pub const PREFIX: &str = "ck_";

/// Number of hex characters after the prefix
pub const PAYLOAD_HEX_LEN: usize = 16;

/// Check that `candidate` has the pseudonym shape
///
/// Total: returns `false` for anything malformed and never panics.
#[must_use]
pub fn verify(candidate: impl AsRef<str>) -> bool {
    candidate
        .as_ref()
        .strip_prefix(PREFIX)
        .is_some_and(|payload| {
            payload.len() == PAYLOAD_HEX_LEN
                && payload
                    .bytes()
                    .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        })
}

/// [`verify`] for raw bytes; non UTF-8 input is not a pseudonym
#[must_use]
pub fn verify_bytes(candidate: &[u8]) -> bool {
    std::str::from_utf8(candidate).is_ok_and(verify)
}

/// A well-formed pseudonym
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pseudonym(String);

impl Pseudonym {
    pub(crate) fn from_digest(digest: &KeyedDigest) -> Self {
        Self(format!("{PREFIX}{}", digest.hex_prefix(PAYLOAD_HEX_LEN)))
    }

    /// Parse and validate a pseudonym string
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::InvalidArgument` if the text is not `ck_` plus
    /// 16 lowercase hex characters.
    pub fn parse(candidate: &str) -> Result<Self> {
        if verify(candidate) {
            Ok(Self(candidate.to_owned()))
        } else {
            Err(PseudonymError::invalid_argument(
                "pseudonym",
                "expected `ck_` followed by 16 lowercase hex characters",
            ))
        }
    }

    /// Full text, prefix included
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 16 hex characters after the prefix
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.0[PREFIX.len()..]
    }

    /// Payload read as a big-endian 64-bit integer
    #[must_use]
    pub fn payload_value(&self) -> u64 {
        // payload is validated hex of exactly 16 chars
        u64::from_str_radix(self.payload(), 16).unwrap_or_default()
    }

    /// Compare two pseudonyms without short-circuiting on the first difference
    #[must_use]
    pub fn ct_eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }

    /// Consume into the inner string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Pseudonym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Pseudonym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pseudonym").field(&self.0).finish()
    }
}

impl AsRef<str> for Pseudonym {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Pseudonym {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Pseudonym {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<Pseudonym> for String {
    fn from(p: Pseudonym) -> Self {
        p.0
    }
}

impl FromStr for Pseudonym {
    type Err = PseudonymError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Pseudonym {
    type Error = PseudonymError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl Serialize for Pseudonym {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Pseudonym {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
