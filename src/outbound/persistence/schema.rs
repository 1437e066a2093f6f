//! Diesel table definition for the PostgreSQL schema.
//!
//! Must match the bootstrap statement in `bootstrap.rs` exactly; Diesel uses
//! it for type-safe SQL generation.

diesel::table! {
    /// User records table.
    ///
    /// The `id` column is a `SERIAL` primary key assigned by the store;
    /// `email` carries a UNIQUE constraint.
    users (id) {
        /// Primary key: server-assigned, strictly increasing.
        id -> Int4,
        /// Display name (max 50 characters).
        #[max_length = 50]
        name -> Varchar,
        /// Email address, unique across all records (max 100 characters).
        #[max_length = 100]
        email -> Varchar,
    }
}
