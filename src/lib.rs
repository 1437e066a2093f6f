//! User record service library modules.
//!
//! The crate follows a hexagonal layout: transport-agnostic types and
//! use-cases live in [`domain`], HTTP adapters in [`inbound`], PostgreSQL
//! adapters in [`outbound`], and server wiring in [`server`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
