//! HTTP server configuration object.

use std::sync::Arc;

use crate::domain::ports::UserRepository;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    host: String,
    port: u16,
    repository: Arc<dyn UserRepository>,
}

impl ServerConfig {
    /// Construct a server configuration with an injected repository.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, repository: Arc<dyn UserRepository>) -> Self {
        Self {
            host: host.into(),
            port,
            repository,
        }
    }

    /// Return the address pair the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    /// Return the injected repository.
    #[must_use]
    pub fn repository(&self) -> Arc<dyn UserRepository> {
        self.repository.clone()
    }
}
