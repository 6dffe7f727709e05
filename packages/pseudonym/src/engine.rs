//! Derivation engine
//!
//! Stateless apart from the immutable secret and configuration, so one engine
//! can be shared by reference or `Arc` across threads without locking.

use crate::data_type::DerivationTag;
use crate::digest::hmac_sha256;
use crate::identity::Identity;
use crate::profile::{self, FakeAddress, FakeProfile};
use crate::pseudonym::{self as shape, Pseudonym};
use crate::{DataType, EngineConfig, PseudonymError, Result, SecretKey, Vocabularies};
use std::sync::Arc;

/// Keyed pseudonym and synthetic profile generator
#[derive(Clone, Debug)]
pub struct PseudonymEngine {
    secret: SecretKey,
    email_domain: Arc<str>,
    vocabularies: Vocabularies,
}

impl PseudonymEngine {
    /// Engine with the stock email domain and vocabularies
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::Configuration` if the secret is empty or
    /// shorter than 32 characters.
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        Self::with_config(SecretKey::new(secret)?, EngineConfig::default())
    }

    /// Engine with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::Configuration` if `config` does not validate.
    pub fn with_config(secret: SecretKey, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let EngineConfig {
            email_domain,
            vocabularies,
        } = config;

        tracing::debug!(
            email_domain = %email_domain,
            first_names = vocabularies.first_names.len(),
            last_names = vocabularies.last_names.len(),
            streets = vocabularies.streets.len(),
            cities = vocabularies.cities.len(),
            states = vocabularies.states.len(),
            "pseudonym engine initialized"
        );

        Ok(Self {
            secret,
            email_domain: email_domain.into(),
            vocabularies,
        })
    }

    /// Start a [`PseudonymBuilder`]
    #[must_use]
    pub fn builder() -> PseudonymBuilder {
        PseudonymBuilder::new()
    }

    /// Domain used by [`fake_email`](Self::fake_email)
    #[must_use]
    pub fn email_domain(&self) -> &str {
        &self.email_domain
    }

    /// Word lists used for synthetic values
    #[must_use]
    pub fn vocabularies(&self) -> &Vocabularies {
        &self.vocabularies
    }

    /// Public validation gate: non-blank ids and a public data type name
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::InvalidArgument` naming `userId`, `clientId`
    /// or `dataType`, checked in that order.
    pub fn validate_identity<'a>(
        user_id: &'a str,
        client_id: &'a str,
        data_type: &str,
    ) -> Result<(Identity<'a>, DataType)> {
        let identity = Identity::new(user_id, client_id)?;
        let data_type = data_type.parse::<DataType>()?;
        Ok((identity, data_type))
    }

    /// Pseudonym for `(user_id, client_id, data_type)`
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::InvalidArgument` for blank ids and
    /// `PseudonymError::Derivation` if the keyed hash fails.
    pub fn derive(&self, user_id: &str, client_id: &str, data_type: DataType) -> Result<Pseudonym> {
        let identity = Identity::new(user_id, client_id)?;
        self.derive_tagged(identity, data_type.into())
    }

    /// [`derive`](Self::derive) with the data type given by name
    ///
    /// # Errors
    ///
    /// As [`derive`](Self::derive), plus `InvalidArgument` naming `dataType`
    /// when the name is not `id`, `email`, `name` or `address`.
    pub fn derive_named(&self, user_id: &str, client_id: &str, data_type: &str) -> Result<Pseudonym> {
        let (identity, data_type) = Self::validate_identity(user_id, client_id, data_type)?;
        self.derive_tagged(identity, data_type.into())
    }

    /// Pseudonym payload reduced modulo `modulus`
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::InvalidArgument` naming `modulus` when it is
    /// zero, or any error from [`derive`](Self::derive).
    pub fn deterministic_index(
        &self,
        user_id: &str,
        client_id: &str,
        data_type: DataType,
        modulus: u64,
    ) -> Result<u64> {
        let identity = Identity::new(user_id, client_id)?;
        if modulus == 0 {
            return Err(PseudonymError::invalid_argument(
                "modulus",
                "modulus must be a positive integer",
            ));
        }
        let pseudonym = self.derive_tagged(identity, data_type.into())?;
        Ok(pseudonym.payload_value() % modulus)
    }

    /// `<pseudonym>@<email domain>`
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::InvalidArgument` for blank ids.
    pub fn fake_email(&self, user_id: &str, client_id: &str) -> Result<String> {
        let identity = Identity::new(user_id, client_id)?;
        self.email_for(identity)
    }

    /// `"First Last"` drawn from the configured name lists
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::InvalidArgument` for blank ids.
    pub fn fake_display_name(&self, user_id: &str, client_id: &str) -> Result<String> {
        let identity = Identity::new(user_id, client_id)?;
        self.display_name_for(identity)
    }

    /// Street, city, state and zip drawn from one hash
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::InvalidArgument` for blank ids.
    pub fn fake_address(&self, user_id: &str, client_id: &str) -> Result<FakeAddress> {
        let identity = Identity::new(user_id, client_id)?;
        self.address_for(identity)
    }

    /// Email, display name and address together
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::InvalidArgument` for blank ids.
    pub fn fake_profile(&self, user_id: &str, client_id: &str) -> Result<FakeProfile> {
        let identity = Identity::new(user_id, client_id)?;
        Ok(FakeProfile {
            email: self.email_for(identity)?,
            display_name: self.display_name_for(identity)?,
            address: self.address_for(identity)?,
        })
    }

    /// Shape check only; see [`crate::verify`]
    #[must_use]
    pub fn verify(candidate: impl AsRef<str>) -> bool {
        shape::verify(candidate)
    }

    /// Constant-time equality of two pseudonyms
    #[must_use]
    pub fn compare(a: &Pseudonym, b: &Pseudonym) -> bool {
        a.ct_eq(b)
    }

    fn email_for(&self, identity: Identity<'_>) -> Result<String> {
        let pseudonym = self.derive_tagged(identity, DerivationTag::FakeEmail)?;
        Ok(format!("{pseudonym}@{}", self.email_domain))
    }

    fn display_name_for(&self, identity: Identity<'_>) -> Result<String> {
        let pseudonym = self.derive_tagged(identity, DerivationTag::FakeDisplayName)?;
        profile::display_name(&pseudonym, &self.vocabularies)
    }

    fn address_for(&self, identity: Identity<'_>) -> Result<FakeAddress> {
        let pseudonym = self.derive_tagged(identity, DerivationTag::FakeAddress)?;
        profile::address(&pseudonym, &self.vocabularies)
    }

    /// Internal gate: any tag, identity already validated
    fn derive_tagged(&self, identity: Identity<'_>, tag: DerivationTag) -> Result<Pseudonym> {
        let message = identity.canonical_message(tag);
        let digest = hmac_sha256(self.secret.expose(), message.as_bytes())?;
        tracing::trace!(data_type = tag.as_str(), "derived pseudonym");
        Ok(Pseudonym::from_digest(&digest))
    }
}

/// Builder for [`PseudonymEngine`]
#[derive(Debug, Default)]
pub struct PseudonymBuilder {
    secret: Option<Result<SecretKey>>,
    config: EngineConfig,
}

impl PseudonymBuilder {
    /// Create new builder with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the secret from text (at least 32 characters)
    #[must_use]
    pub fn with_key(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(SecretKey::new(secret));
        self
    }

    /// Set the secret from raw bytes (at least 32 bytes)
    #[must_use]
    pub fn with_key_bytes(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.secret = Some(SecretKey::from_bytes(secret));
        self
    }

    /// Use an already validated secret
    #[must_use]
    pub fn with_secret(mut self, secret: SecretKey) -> Self {
        self.secret = Some(Ok(secret));
        self
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the synthetic email domain
    #[must_use]
    pub fn with_email_domain(mut self, domain: impl Into<String>) -> Self {
        self.config.email_domain = domain.into();
        self
    }

    /// Set the word lists
    #[must_use]
    pub fn with_vocabularies(mut self, vocabularies: Vocabularies) -> Self {
        self.config.vocabularies = vocabularies;
        self
    }

    /// Validate everything and build the engine
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::Configuration` if no secret was given, the
    /// secret is too weak, or the configuration is invalid.
    pub fn build(self) -> Result<PseudonymEngine> {
        let secret = self.secret.unwrap_or_else(|| {
            Err(PseudonymError::configuration(
                "Secret key must be a non-empty string",
            ))
        })?;
        PseudonymEngine::with_config(secret, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vocabulary;

    const SECRET: &str = "super-secret-key-at-least-32-chars-long-for-safe-use";

    fn engine() -> PseudonymEngine {
        PseudonymEngine::new(SECRET).expect("valid secret")
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PseudonymEngine>();
    }

    #[test]
    fn derive_matches_regression_vectors() {
        let e = engine();
        let cases = [
            (DataType::Id, "ck_3a1ee3a8bcd6229e"),
            (DataType::Email, "ck_b83cfec2cacf20a4"),
            (DataType::Name, "ck_f2e8296d05852a76"),
            (DataType::Address, "ck_96d10823c34c3871"),
        ];
        for (dt, expected) in cases {
            let p = e.derive("user123", "shopping-app", dt).expect("derive");
            assert_eq!(p, expected, "{dt}");
        }
    }

    #[test]
    fn derive_named_parses_data_type() {
        let e = engine();
        let p = e
            .derive_named("user123", "shopping-app", "id")
            .expect("derive");
        assert_eq!(p, "ck_3a1ee3a8bcd6229e");

        let err = e
            .derive_named("user123", "shopping-app", "bogus")
            .expect_err("unknown data type");
        assert_eq!(err.field(), Some("dataType"));
        assert!(err.to_string().contains("dataType"));
    }

    #[test]
    fn internal_tags_are_not_reachable_by_name() {
        let err = engine()
            .derive_named("user123", "shopping-app", "fake_email")
            .expect_err("internal tag");
        assert_eq!(err.field(), Some("dataType"));
    }

    #[test]
    fn validation_order_is_user_client_data_type() {
        let err = PseudonymEngine::validate_identity("", "", "bogus").expect_err("all bad");
        assert_eq!(err.field(), Some("userId"));
        let err = PseudonymEngine::validate_identity("u", "", "bogus").expect_err("client bad");
        assert_eq!(err.field(), Some("clientId"));
        let err = PseudonymEngine::validate_identity("u", "c", "bogus").expect_err("type bad");
        assert_eq!(err.field(), Some("dataType"));
    }

    #[test]
    fn deterministic_index_reduces_payload() {
        let e = engine();
        let idx = e
            .deterministic_index("user123", "shopping-app", DataType::Id, 1000)
            .expect("index");
        assert_eq!(idx, 22);
        let idx = e
            .deterministic_index("user123", "shopping-app", DataType::Id, 7)
            .expect("index");
        assert_eq!(idx, 2);
        let idx = e
            .deterministic_index("user123", "shopping-app", DataType::Id, 1)
            .expect("index");
        assert_eq!(idx, 0);
    }

    #[test]
    fn deterministic_index_rejects_zero_modulus() {
        let err = engine()
            .deterministic_index("user123", "shopping-app", DataType::Id, 0)
            .expect_err("zero modulus");
        assert_eq!(err.field(), Some("modulus"));
    }

    #[test]
    fn zero_payload_reduces_to_zero() {
        let zero = Pseudonym::parse("ck_0000000000000000").expect("valid");
        for modulus in [1, 7, 1000, u64::MAX] {
            assert_eq!(zero.payload_value() % modulus, 0);
        }
    }

    #[test]
    fn multi_word_names_are_rejected_at_build() {
        let vocab = Vocabularies::default()
            .with_first_names(Vocabulary::new(["Mary Ann"]).expect("vocab"))
            .with_last_names(Vocabulary::new([" Smith "]).expect("vocab"));
        let err = PseudonymEngine::builder()
            .with_key(SECRET)
            .with_vocabularies(vocab)
            .build()
            .expect_err("multi-token names");
        assert!(matches!(err, PseudonymError::Configuration(_)));
    }

    #[test]
    fn fake_values_match_regression_vectors() {
        let e = engine();
        assert_eq!(
            e.fake_email("user123", "shopping-app").expect("email"),
            "ck_7545a87c5cab83e2@consentkeys.local"
        );
        assert_eq!(
            e.fake_display_name("user123", "shopping-app").expect("name"),
            "Sage Thomas"
        );
        let addr = e.fake_address("user123", "shopping-app").expect("address");
        assert_eq!(
            addr,
            FakeAddress {
                street: "149 Cedar Ave".into(),
                city: "Ashland".into(),
                state: "VA".into(),
                zip: "10040".into(),
            }
        );
    }

    #[test]
    fn fake_profile_bundles_the_individual_values() {
        let e = engine();
        let profile = e.fake_profile("user123", "shopping-app").expect("profile");
        assert_eq!(profile.email, e.fake_email("user123", "shopping-app").expect("email"));
        assert_eq!(
            profile.display_name,
            e.fake_display_name("user123", "shopping-app").expect("name")
        );
        assert_eq!(
            profile.address,
            e.fake_address("user123", "shopping-app").expect("address")
        );
    }

    #[test]
    fn fake_helpers_reject_blank_ids() {
        let e = engine();
        assert_eq!(e.fake_email("", "app").expect_err("blank").field(), Some("userId"));
        assert_eq!(
            e.fake_display_name("u", " ").expect_err("blank").field(),
            Some("clientId")
        );
        assert_eq!(e.fake_address("\t", "app").expect_err("blank").field(), Some("userId"));
        assert_eq!(e.fake_profile("u", "").expect_err("blank").field(), Some("clientId"));
    }

    #[test]
    fn builder_requires_a_secret() {
        let err = PseudonymEngine::builder().build().expect_err("no secret");
        assert!(matches!(err, PseudonymError::Configuration(_)));
    }

    #[test]
    fn builder_surfaces_weak_secret() {
        let err = PseudonymEngine::builder()
            .with_key("short")
            .build()
            .expect_err("weak secret");
        assert!(err.to_string().contains("32"));
    }

    #[test]
    fn builder_applies_domain_and_vocabularies() {
        let vocab = Vocabularies::default()
            .with_first_names(Vocabulary::new(["Ada"]).expect("vocab"))
            .with_last_names(Vocabulary::new(["Lovelace"]).expect("vocab"));
        let e = PseudonymEngine::builder()
            .with_key(SECRET)
            .with_email_domain("example.test")
            .with_vocabularies(vocab)
            .build()
            .expect("engine");

        assert_eq!(e.email_domain(), "example.test");
        assert!(e
            .fake_email("user123", "shopping-app")
            .expect("email")
            .ends_with("@example.test"));
        assert_eq!(
            e.fake_display_name("user123", "shopping-app").expect("name"),
            "Ada Lovelace"
        );
    }

    #[test]
    fn byte_and_text_secrets_agree() {
        let text = engine();
        let bytes = PseudonymEngine::builder()
            .with_key_bytes(SECRET.as_bytes())
            .build()
            .expect("engine");
        assert_eq!(
            text.derive("user123", "shopping-app", DataType::Id).expect("derive"),
            bytes.derive("user123", "shopping-app", DataType::Id).expect("derive"),
        );
    }

    #[test]
    fn builder_rejects_bad_domain() {
        let err = PseudonymEngine::builder()
            .with_key(SECRET)
            .with_email_domain("bad@domain")
            .build()
            .expect_err("bad domain");
        assert!(matches!(err, PseudonymError::Configuration(_)));
    }

    #[test]
    fn compare_is_equality() {
        let e = engine();
        let a = e.derive("user123", "shopping-app", DataType::Id).expect("derive");
        let b = e.derive("user123", "shopping-app", DataType::Id).expect("derive");
        let c = e.derive("user123", "social-app", DataType::Id).expect("derive");
        assert!(PseudonymEngine::compare(&a, &b));
        assert!(!PseudonymEngine::compare(&a, &c));
    }
}
