//! Deterministic, keyed, non-reversible pseudonyms per application
//!
//! The same user gets the same pseudonym every time inside one application and
//! an unrelated one in every other application. Nothing is stored: each value
//! is recomputed as HMAC-SHA256 over `userId::clientId::dataType` under a
//! caller-supplied secret.
//!
//! ```rust
//! use consentkeys_pseudonym::{ConsentKeys, DataType};
//!
//! # fn main() -> consentkeys_pseudonym::Result<()> {
//! let engine = ConsentKeys::pseudonym()
//!     .with_key("super-secret-key-at-least-32-chars-long-for-safe-use")
//!     .build()?;
//!
//! let id = engine.derive("user123", "shopping-app", DataType::Id)?;
//! assert_eq!(id.as_str(), "ck_3a1ee3a8bcd6229e");
//! assert!(consentkeys_pseudonym::verify(&id));
//!
//! let address = engine.fake_address("user123", "shopping-app")?;
//! assert_eq!(address.zip.len(), 5);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod data_type;
pub mod digest;
pub mod engine;
pub mod error;
pub mod identity;
pub mod profile;
pub mod pseudonym;
pub mod secret;
pub mod vocabulary;

// Re-export error types
pub use error::{PseudonymError, Result};

pub use config::{EngineConfig, DEFAULT_EMAIL_DOMAIN};
pub use data_type::DataType;
pub use engine::{PseudonymBuilder, PseudonymEngine};
pub use identity::Identity;
pub use profile::{FakeAddress, FakeProfile};
pub use pseudonym::{verify, verify_bytes, Pseudonym, PREFIX};
pub use secret::{SecretKey, MIN_SECRET_LEN};
pub use vocabulary::{Vocabularies, Vocabulary};

/// Main entry point
pub struct ConsentKeys;

impl ConsentKeys {
    /// Builder for a [`PseudonymEngine`]
    #[must_use]
    pub fn pseudonym() -> PseudonymBuilder {
        PseudonymBuilder::new()
    }
}
