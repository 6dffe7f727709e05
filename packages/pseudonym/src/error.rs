//! Error taxonomy for pseudonym derivation

use thiserror::Error;

/// Pseudonym-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PseudonymError {
    /// Engine configuration was rejected (weak secret, empty vocabulary, bad domain).
    /// Fatal for the engine being built.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller supplied a malformed argument; fix the input and retry
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// Name of the offending field (`userId`, `clientId`, `dataType`, `modulus`)
        field: &'static str,
        /// Human readable description of the problem
        reason: String,
    },

    /// The keyed hash primitive failed unexpectedly
    #[error("Failed to generate pseudonym: {0}")]
    Derivation(String),
}

impl PseudonymError {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid argument error for `field`
    #[must_use]
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Create a derivation error
    #[must_use]
    pub fn derivation(msg: impl Into<String>) -> Self {
        Self::Derivation(msg.into())
    }

    /// Field named by an [`PseudonymError::InvalidArgument`], if any
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type for pseudonym operations
pub type Result<T> = std::result::Result<T, PseudonymError>;
