//! The user store collaborator.
//!
//! The assessment core only ever appends to a user's histories; it never reads
//! back or reorders them. Implementations must make each append atomic per user
//! so concurrent submissions for the same email do not overwrite each other.

mod memory;

pub use memory::MemoryUserStore;

use async_trait::async_trait;
use serde::Serialize;

use crate::assessment::AssessmentRecord;
use crate::error::CoreError;
use crate::period::PeriodEntry;
use crate::types::{DbId, Timestamp};

/// Identity and credential part of a stored user.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Input for [`UserStore::insert`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub password_hash: String,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<UserRecord> for UserProfile {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Persistence collaborator for users and their histories.
///
/// Appends and lists for an email with no matching user fail with
/// [`CoreError::NotFound`] rather than silently matching nothing.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by email (case-sensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, CoreError>;

    /// Insert a new user. Fails with [`CoreError::Conflict`] if the email is taken.
    async fn insert(&self, user: NewUser) -> Result<UserRecord, CoreError>;

    /// Append one assessment to the user's history.
    async fn append_assessment(
        &self,
        email: &str,
        record: &AssessmentRecord,
    ) -> Result<(), CoreError>;

    /// Append one period-tracking entry to the user's history.
    async fn append_period_entry(&self, email: &str, entry: &PeriodEntry)
        -> Result<(), CoreError>;

    /// All assessments for the user, oldest first.
    async fn list_assessments(&self, email: &str) -> Result<Vec<AssessmentRecord>, CoreError>;

    /// All period entries for the user, oldest first.
    async fn list_period_entries(&self, email: &str) -> Result<Vec<PeriodEntry>, CoreError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
