//! Initial schema bootstrap and optional sample-data seeding.
//!
//! Runs once at startup, after the database wait succeeds. Both steps are
//! idempotent: the table statement is `IF NOT EXISTS` and the seed insert
//! skips rows whose email is already present, so re-running initialization
//! never duplicates data.

use diesel_async::RunQueryDsl;
use tracing::info;

use super::models::NewUserRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(50) NOT NULL,
    email VARCHAR(100) UNIQUE NOT NULL
)";

/// Fixed sample records inserted when seeding is enabled.
const SAMPLE_USERS: &[(&str, &str)] = &[
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
    ("Charlie", "charlie@example.com"),
];

/// Errors raised while preparing the record store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    /// A connection could not be checked out of the pool.
    #[error("schema bootstrap connection failed: {message}")]
    Connection { message: String },
    /// A bootstrap statement failed to execute.
    #[error("schema bootstrap statement failed: {message}")]
    Statement { message: String },
}

impl From<PoolError> for BootstrapError {
    fn from(error: PoolError) -> Self {
        Self::Connection {
            message: error.to_string(),
        }
    }
}

impl From<diesel::result::Error> for BootstrapError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Statement {
            message: error.to_string(),
        }
    }
}

/// Create the `users` table if absent and optionally insert the sample rows.
pub async fn bootstrap_schema(pool: &DbPool, seed_sample_data: bool) -> Result<(), BootstrapError> {
    let mut conn = pool.get().await?;

    diesel::sql_query(CREATE_USERS_TABLE)
        .execute(&mut conn)
        .await?;
    info!("users table ready");

    if seed_sample_data {
        let rows: Vec<NewUserRow<'_>> = SAMPLE_USERS
            .iter()
            .map(|&(name, email)| NewUserRow { name, email })
            .collect();
        let inserted = diesel::insert_into(users::table)
            .values(&rows)
            .on_conflict(users::email)
            .do_nothing()
            .execute(&mut conn)
            .await?;
        info!(inserted, "sample users seeded");
    }

    Ok(())
}
