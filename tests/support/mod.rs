//! Shared test doubles for the HTTP contract suites.

use std::sync::Mutex;

use async_trait::async_trait;

use user_api::domain::ports::{UserPersistenceError, UserRepository};
use user_api::domain::{User, UserDraft};

/// Mutex-backed repository double enforcing the same identifier and email
/// uniqueness invariants as the PostgreSQL adapter.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<InMemoryState>,
}

#[derive(Default)]
struct InMemoryState {
    users: Vec<User>,
    last_id: i32,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        let mut users = state.users.clone();
        users.sort_by_key(|user| user.id);
        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        if state.users.iter().any(|user| user.email == draft.email()) {
            return Err(UserPersistenceError::conflict("duplicate email"));
        }
        state.last_id += 1;
        let user = User {
            id: state.last_id,
            name: draft.name().to_owned(),
            email: draft.email().to_owned(),
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: i32,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        if state
            .users
            .iter()
            .any(|user| user.email == draft.email() && user.id != id)
        {
            return Err(UserPersistenceError::conflict("duplicate email"));
        }
        let Some(user) = state.users.iter_mut().find(|user| user.id == id) else {
            return Ok(None);
        };
        user.name = draft.name().to_owned();
        user.email = draft.email().to_owned();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        let before = state.users.len();
        state.users.retain(|user| user.id != id);
        Ok(state.users.len() < before)
    }
}
