//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the domain's `UserRepository` port backed by
//! PostgreSQL via Diesel with async support through `diesel-async` and `bb8`
//! connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapter**: the repository only translates between Diesel rows and
//!   domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) are implementation details, never exposed to the domain.
//! - **Strongly typed errors**: all database errors are mapped to the port's
//!   persistence error type.
//!
//! The module also owns startup concerns: waiting for the database to become
//! reachable ([`wait`]) and the initial schema bootstrap ([`bootstrap`]).

mod bootstrap;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;
mod wait;

pub use bootstrap::{BootstrapError, bootstrap_schema};
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use wait::{RetryPolicy, StartupWaitError, wait_for_database};
