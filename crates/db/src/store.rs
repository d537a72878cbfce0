//! [`UserStore`] implementation over the Postgres repositories.

use async_trait::async_trait;
use herhealth_core::assessment::AssessmentRecord;
use herhealth_core::error::CoreError;
use herhealth_core::period::PeriodEntry;
use herhealth_core::store::{NewUser, UserRecord, UserStore};

use crate::error::into_core;
use crate::models::user::{CreateUser, User};
use crate::repositories::{AssessmentRepo, PeriodEntryRepo, UserRepo};
use crate::DbPool;

/// Postgres-backed user store.
///
/// Appends are single `INSERT ... SELECT` statements keyed by email, so
/// concurrent appends for one user never overwrite each other.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    async fn require_user(&self, email: &str) -> Result<User, CoreError> {
        UserRepo::find_by_email(&self.pool, email)
            .await
            .map_err(into_core)?
            .ok_or_else(|| CoreError::user_not_found(email))
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, CoreError> {
        let user = UserRepo::find_by_email(&self.pool, email)
            .await
            .map_err(into_core)?;
        Ok(user.map(UserRecord::from))
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, CoreError> {
        let input = CreateUser::from(user);
        let row = UserRepo::create(&self.pool, &input)
            .await
            .map_err(into_core)?;
        Ok(row.into())
    }

    async fn append_assessment(
        &self,
        email: &str,
        record: &AssessmentRecord,
    ) -> Result<(), CoreError> {
        let inserted = AssessmentRepo::append_for_email(&self.pool, email, record)
            .await
            .map_err(into_core)?;
        if !inserted {
            return Err(CoreError::user_not_found(email));
        }
        Ok(())
    }

    async fn append_period_entry(
        &self,
        email: &str,
        entry: &PeriodEntry,
    ) -> Result<(), CoreError> {
        let inserted = PeriodEntryRepo::append_for_email(&self.pool, email, entry)
            .await
            .map_err(into_core)?;
        if !inserted {
            return Err(CoreError::user_not_found(email));
        }
        Ok(())
    }

    async fn list_assessments(&self, email: &str) -> Result<Vec<AssessmentRecord>, CoreError> {
        let user = self.require_user(email).await?;
        AssessmentRepo::list_by_user(&self.pool, user.id)
            .await
            .map_err(into_core)?
            .into_iter()
            .map(AssessmentRecord::try_from)
            .collect()
    }

    async fn list_period_entries(&self, email: &str) -> Result<Vec<PeriodEntry>, CoreError> {
        let user = self.require_user(email).await?;
        PeriodEntryRepo::list_by_user(&self.pool, user.id)
            .await
            .map_err(into_core)?
            .into_iter()
            .map(PeriodEntry::try_from)
            .collect()
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool).await.map_err(into_core)
    }
}
