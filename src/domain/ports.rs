//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserDraft};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// A write violated the email uniqueness constraint.
    #[error("user repository uniqueness conflict: {message}")]
    Conflict { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a uniqueness conflict error with the given message.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Durable storage for user records with uniqueness enforcement on email.
///
/// Each method executes exactly one statement against the store; writes
/// commit as soon as the statement succeeds.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch all records ordered by ascending identifier.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new record, returning it with the store-assigned identifier.
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Update the record with the given identifier, returning the updated
    /// record or `None` when no row matches.
    async fn update(&self, id: i32, draft: &UserDraft)
    -> Result<Option<User>, UserPersistenceError>;

    /// Delete the record with the given identifier, returning whether a row
    /// was removed.
    async fn delete(&self, id: i32) -> Result<bool, UserPersistenceError>;
}

#[cfg(test)]
mod tests {
    //! Display coverage for the port error constructors.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn constructors_accept_str_for_messages() {
        assert_eq!(
            UserPersistenceError::connection("refused").to_string(),
            "user repository connection failed: refused"
        );
        assert_eq!(
            UserPersistenceError::conflict("duplicate email").to_string(),
            "user repository uniqueness conflict: duplicate email"
        );
        assert_eq!(
            UserPersistenceError::query("syntax").to_string(),
            "user repository query failed: syntax"
        );
    }
}
