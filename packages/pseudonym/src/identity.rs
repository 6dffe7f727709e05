//! Validated identity pair and the canonical hash message

use crate::data_type::DerivationTag;
use crate::{PseudonymError, Result};

/// Separator between canonical message fields
pub const FIELD_DELIMITER: &str = "::";

/// A validated `(userId, clientId)` pair borrowed from the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity<'a> {
    user_id: &'a str,
    client_id: &'a str,
}

impl<'a> Identity<'a> {
    /// Validate both identifiers
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::InvalidArgument` naming `userId` or `clientId`
    /// when either is empty or whitespace only. `userId` is checked first.
    pub fn new(user_id: &'a str, client_id: &'a str) -> Result<Self> {
        if user_id.trim().is_empty() {
            return Err(PseudonymError::invalid_argument(
                "userId",
                "userId must be a non-empty string",
            ));
        }
        if client_id.trim().is_empty() {
            return Err(PseudonymError::invalid_argument(
                "clientId",
                "clientId must be a non-empty string",
            ));
        }
        Ok(Self { user_id, client_id })
    }

    /// User identifier
    #[must_use]
    pub fn user_id(&self) -> &'a str {
        self.user_id
    }

    /// Client/application identifier
    #[must_use]
    pub fn client_id(&self) -> &'a str {
        self.client_id
    }

    /// `userId::clientId::tag`
    pub(crate) fn canonical_message(&self, tag: DerivationTag) -> String {
        let tag = tag.as_str();
        let mut message = String::with_capacity(
            self.user_id.len() + self.client_id.len() + tag.len() + 2 * FIELD_DELIMITER.len(),
        );
        message.push_str(self.user_id);
        message.push_str(FIELD_DELIMITER);
        message.push_str(self.client_id);
        message.push_str(FIELD_DELIMITER);
        message.push_str(tag);
        message
    }
}
