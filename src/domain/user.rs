//! User record entity and validated write payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum accepted length of a user name.
pub const NAME_MAX_LEN: usize = 50;
/// Maximum accepted length of a user email address.
pub const EMAIL_MAX_LEN: usize = 100;

/// A stored user record.
///
/// `id` is assigned by the store on creation and never changes; `email` is
/// unique across all records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Server-assigned identifier, strictly increasing.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name (max 50 characters).
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Email address, unique across all records (max 100 characters).
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Validation failures raised when constructing a [`UserDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDraftValidationError {
    EmptyName,
    NameTooLong,
    EmptyEmail,
    EmailTooLong,
}

impl std::fmt::Display for UserDraftValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong => write!(f, "name must be at most {NAME_MAX_LEN} characters"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmailTooLong => write!(f, "email must be at most {EMAIL_MAX_LEN} characters"),
        }
    }
}

impl std::error::Error for UserDraftValidationError {}

/// Validated name/email payload for create and update operations.
///
/// ## Invariants
/// - `name` is non-blank and at most [`NAME_MAX_LEN`] characters.
/// - `email` is non-blank and at most [`EMAIL_MAX_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
}

impl UserDraft {
    /// Validate and construct a draft from raw request fields.
    pub fn try_from_parts(name: &str, email: &str) -> Result<Self, UserDraftValidationError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(UserDraftValidationError::EmptyName);
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(UserDraftValidationError::NameTooLong);
        }
        if email.is_empty() {
            return Err(UserDraftValidationError::EmptyEmail);
        }
        if email.chars().count() > EMAIL_MAX_LEN {
            return Err(UserDraftValidationError::EmailTooLong);
        }
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }

    /// Validated display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Validated email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
