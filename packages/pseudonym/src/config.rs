//! Engine configuration
//!
//! Everything here is public, non-secret data. The secret key is supplied
//! separately and is never part of a serialized config.

use crate::{PseudonymError, Result, Vocabularies};
use serde::{Deserialize, Serialize};

/// Domain used for synthetic email addresses unless overridden
pub const DEFAULT_EMAIL_DOMAIN: &str = "consentkeys.local";

/// Non-secret engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Domain appended to synthetic email addresses
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
    /// Word lists for synthetic names and addresses
    #[serde(default)]
    pub vocabularies: Vocabularies,
}

fn default_email_domain() -> String {
    DEFAULT_EMAIL_DOMAIN.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            email_domain: default_email_domain(),
            vocabularies: Vocabularies::default(),
        }
    }
}

impl EngineConfig {
    /// Load a config from JSON; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::Configuration` if the JSON is malformed, a
    /// vocabulary is empty, or the email domain is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| PseudonymError::configuration(format!("invalid engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::Configuration` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PseudonymError::configuration(format!("cannot serialize config: {e}")))
    }

    /// Set the email domain
    #[must_use]
    pub fn with_email_domain(mut self, domain: impl Into<String>) -> Self {
        self.email_domain = domain.into();
        self
    }

    /// Set the vocabularies
    #[must_use]
    pub fn with_vocabularies(mut self, vocabularies: Vocabularies) -> Self {
        self.vocabularies = vocabularies;
        self
    }

    /// Check the settings that serde cannot enforce on its own
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::Configuration` if the email domain is empty,
    /// contains `@` or whitespace, or if a first-name or last-name entry is
    /// not a single whitespace-free token.
    pub fn validate(&self) -> Result<()> {
        let domain = self.email_domain.as_str();
        if domain.is_empty() {
            return Err(PseudonymError::configuration("email domain must not be empty"));
        }
        if domain.contains('@') || domain.chars().any(char::is_whitespace) {
            return Err(PseudonymError::configuration(format!(
                "email domain {domain:?} must not contain '@' or whitespace"
            )));
        }

        // display names are "<first> <last>" with exactly one space
        let names = [
            ("first_names", &self.vocabularies.first_names),
            ("last_names", &self.vocabularies.last_names),
        ];
        for (list, vocab) in names {
            if let Some(pos) = vocab.first_multi_token() {
                return Err(PseudonymError::configuration(format!(
                    "{list} entry {pos} must be a single word without whitespace"
                )));
            }
        }
        Ok(())
    }
}
