//! Domain types and use-cases.
//!
//! These modules are transport agnostic: inbound adapters map the central
//! [`Error`] payload onto HTTP responses, and outbound adapters implement
//! the repository port defined in [`ports`].

pub mod error;
pub mod ports;
pub mod service;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::service::UserService;
pub use self::user::{User, UserDraft, UserDraftValidationError};
