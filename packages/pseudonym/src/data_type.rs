//! Domain-separation tags
//!
//! [`DataType`] is the closed set callers may ask for. [`DerivationTag`] is the
//! wider, crate-private set that also covers the tags reserved for synthetic
//! profile values, so the public surface cannot reach them.

use crate::{PseudonymError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Public data-type scope of a pseudonym
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Stable account identifier
    #[default]
    Id,
    /// Email address substitute
    Email,
    /// Name substitute
    Name,
    /// Postal address substitute
    Address,
}

impl DataType {
    /// Every public data type, in canonical order
    pub const ALL: [DataType; 4] = [Self::Id, Self::Email, Self::Name, Self::Address];

    /// Tag text used in the canonical message
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Email => "email",
            Self::Name => "name",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = PseudonymError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|dt| dt.as_str() == s)
            .ok_or_else(|| {
                PseudonymError::invalid_argument(
                    "dataType",
                    format!("dataType must be one of: id, email, name, address (got {s:?})"),
                )
            })
    }
}

/// Full tag set accepted by the internal derivation gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DerivationTag {
    Public(DataType),
    FakeEmail,
    FakeDisplayName,
    FakeAddress,
}

impl DerivationTag {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Public(dt) => dt.as_str(),
            Self::FakeEmail => "fake_email",
            Self::FakeDisplayName => "fake_display_name",
            Self::FakeAddress => "fake_address",
        }
    }
}

impl From<DataType> for DerivationTag {
    fn from(dt: DataType) -> Self {
        Self::Public(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_public_tag() {
        for dt in DataType::ALL {
            assert_eq!(dt.as_str().parse::<DataType>(), Ok(dt));
        }
    }

    #[test]
    fn rejects_internal_and_unknown_tags() {
        for bogus in ["bogus", "fake_email", "fake_address", "ID", ""] {
            let err = bogus.parse::<DataType>().expect_err("must be rejected");
            assert_eq!(err.field(), Some("dataType"));
        }
    }

    #[test]
    fn internal_tags_are_distinct_from_public_ones() {
        let internal = [
            DerivationTag::FakeEmail,
            DerivationTag::FakeDisplayName,
            DerivationTag::FakeAddress,
        ];
        for tag in internal {
            assert!(DataType::ALL.iter().all(|dt| dt.as_str() != tag.as_str()));
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&DataType::Address).expect("serialize");
        assert_eq!(json, "\"address\"");
        let back: DataType = serde_json::from_str("\"email\"").expect("deserialize");
        assert_eq!(back, DataType::Email);
    }
}
