//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain use-cases and remain testable without I/O.

use std::sync::Arc;

use crate::domain::UserService;
use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: UserService,
}

impl HttpState {
    /// Build the handler state from a repository implementation.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            users: UserService::new(repository),
        }
    }
}
