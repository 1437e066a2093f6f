//! User record use-cases over the repository port.
//!
//! The service owns the mapping from persistence failures to the central
//! [`Error`] payload so HTTP handlers stay thin.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Error, User, UserDraft};

/// Message returned whenever an identifier matches no record.
const NOT_FOUND_MESSAGE: &str = "User not found";
/// Message returned when a write collides with an existing email.
const DUPLICATE_EMAIL_MESSAGE: &str = "Email already in use";

/// CRUD use-cases backed by an injected [`UserRepository`].
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Conflict { .. } => Error::conflict(DUPLICATE_EMAIL_MESSAGE),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

impl UserService {
    /// Create a new service backed by the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// List all records ordered by ascending identifier.
    pub async fn list(&self) -> Result<Vec<User>, Error> {
        self.repository.list().await.map_err(map_persistence_error)
    }

    /// Fetch one record by identifier.
    pub async fn get(&self, id: i32) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| {
                debug!(id, "user lookup missed");
                Error::not_found(NOT_FOUND_MESSAGE)
            })
    }

    /// Create a record, returning it with the store-assigned identifier.
    pub async fn create(&self, draft: UserDraft) -> Result<User, Error> {
        self.repository
            .insert(&draft)
            .await
            .map_err(map_persistence_error)
    }

    /// Update an existing record in place.
    pub async fn update(&self, id: i32, draft: UserDraft) -> Result<User, Error> {
        self.repository
            .update(id, &draft)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| {
                debug!(id, "user update missed");
                Error::not_found(NOT_FOUND_MESSAGE)
            })
    }

    /// Delete a record by identifier.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if removed {
            Ok(())
        } else {
            debug!(id, "user delete missed");
            Err(Error::not_found(NOT_FOUND_MESSAGE))
        }
    }
}
