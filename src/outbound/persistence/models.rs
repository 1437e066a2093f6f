//! Diesel row models for the `users` table.

use diesel::prelude::*;

use super::schema::users;
use crate::domain::User;

/// Row read back from the `users` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// Insertable row; the store assigns `id`.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Changeset applied by the update statement.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserRowChanges<'a> {
    pub name: &'a str,
    pub email: &'a str,
}
