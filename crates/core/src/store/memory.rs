//! In-process [`UserStore`] backed by a `RwLock<HashMap>`.
//!
//! Used by tests and by local runs without a database. Every append takes the
//! write lock, so concurrent appends for one user are serialized.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{NewUser, UserRecord, UserStore};
use crate::assessment::AssessmentRecord;
use crate::error::CoreError;
use crate::period::PeriodEntry;
use crate::types::DbId;

#[derive(Debug)]
struct StoredUser {
    record: UserRecord,
    periods: Vec<PeriodEntry>,
    assessments: Vec<AssessmentRecord>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: DbId,
    users: HashMap<String, StoredUser>,
}

/// Thread-safe in-memory user store.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    pub async fn user_count(&self) -> usize {
        self.inner.read().await.users.len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, CoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(email).map(|u| u.record.clone()))
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, CoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.contains_key(&user.email) {
            return Err(CoreError::Conflict("User already exists".into()));
        }

        inner.next_id += 1;
        let record = UserRecord {
            id: inner.next_id,
            name: user.name,
            age: user.age,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        inner.users.insert(
            record.email.clone(),
            StoredUser {
                record: record.clone(),
                periods: Vec::new(),
                assessments: Vec::new(),
            },
        );
        Ok(record)
    }

    async fn append_assessment(
        &self,
        email: &str,
        record: &AssessmentRecord,
    ) -> Result<(), CoreError> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(email)
            .ok_or_else(|| CoreError::user_not_found(email))?;
        user.assessments.push(record.clone());
        Ok(())
    }

    async fn append_period_entry(
        &self,
        email: &str,
        entry: &PeriodEntry,
    ) -> Result<(), CoreError> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(email)
            .ok_or_else(|| CoreError::user_not_found(email))?;
        user.periods.push(entry.clone());
        Ok(())
    }

    async fn list_assessments(&self, email: &str) -> Result<Vec<AssessmentRecord>, CoreError> {
        let inner = self.inner.read().await;
        inner
            .users
            .get(email)
            .map(|u| u.assessments.clone())
            .ok_or_else(|| CoreError::user_not_found(email))
    }

    async fn list_period_entries(&self, email: &str) -> Result<Vec<PeriodEntry>, CoreError> {
        let inner = self.inner.read().await;
        inner
            .users
            .get(email)
            .map(|u| u.periods.clone())
            .ok_or_else(|| CoreError::user_not_found(email))
    }
}
