//! User entity model and DTOs.

use herhealth_core::store::{NewUser, UserRecord};
use herhealth_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses directly.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub password_hash: String,
}

impl From<NewUser> for CreateUser {
    fn from(user: NewUser) -> Self {
        Self {
            name: user.name,
            age: user.age,
            email: user.email,
            password_hash: user.password_hash,
        }
    }
}

impl From<User> for UserRecord {
    fn from(row: User) -> Self {
        Self {
            id: row.id,
            name: row.name,
            age: row.age,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}
