//! Integration tests for the Postgres user store.
//!
//! Exercises the repository layer and `PgUserStore` against a real database:
//! - Registration and duplicate emails
//! - Appending assessments and period entries
//! - Unknown users on append
//! - Concurrent appends for one user

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use herhealth_core::assessment::{self, AssessmentRecord};
use herhealth_core::error::CoreError;
use herhealth_core::period::PeriodEntry;
use herhealth_core::scoring::{Condition, RiskTier, Submission};
use herhealth_core::store::{NewUser, UserStore};
use herhealth_db::PgUserStore;
use serde_json::{json, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Priya".to_string(),
        age: 31,
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    }
}

fn answers(value: Value) -> Submission {
    value.as_object().cloned().expect("object")
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_check(pool: PgPool) {
    herhealth_db::health_check(&pool).await.unwrap();
    PgUserStore::new(pool).ping().await.unwrap();
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insert_and_find(pool: PgPool) {
    let store = PgUserStore::new(pool);

    let created = store.insert(new_user("priya@example.com")).await.unwrap();
    let found = store
        .find_by_email("priya@example.com")
        .await
        .unwrap()
        .expect("user should exist");

    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Priya");
    assert_eq!(found.age, 31);
    assert!(store.find_by_email("other@example.com").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_is_conflict(pool: PgPool) {
    let store = PgUserStore::new(pool);
    store.insert(new_user("dup@example.com")).await.unwrap();

    let result = store.insert(new_user("dup@example.com")).await;
    assert_matches!(result, Err(CoreError::Conflict(msg)) if msg == "User already exists");
}

// ---------------------------------------------------------------------------
// Assessments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assess_appends_exactly_one_record(pool: PgPool) {
    let store = PgUserStore::new(pool);
    store.insert(new_user("a@example.com")).await.unwrap();

    let outcome = assessment::assess(
        &store,
        "a@example.com",
        Condition::BreastCancer,
        answers(json!({ "lump": "yes", "family_history": "yes", "nipple_discharge": "no" })),
    )
    .await
    .unwrap();

    assert_eq!(outcome.score, 5);
    assert_eq!(outcome.risk, RiskTier::Moderate);

    let history = store.list_assessments("a@example.com").await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].condition, "Breast Cancer");
    assert_eq!(history[0].inputs["family_history"], "yes");
    assert_eq!(history[0].risk, RiskTier::Moderate);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_history_preserves_order(pool: PgPool) {
    let store = PgUserStore::new(pool);
    store.insert(new_user("o@example.com")).await.unwrap();

    for (condition, score) in [(Condition::Pcod, 8), (Condition::Pcos, 1), (Condition::IronDeficiency, 4)] {
        let record = AssessmentRecord::new(condition, Submission::new(), score);
        store.append_assessment("o@example.com", &record).await.unwrap();
    }

    let history = store.list_assessments("o@example.com").await.unwrap();
    let summary: Vec<_> = history.iter().map(|r| (r.condition.as_str(), r.risk)).collect();
    assert_eq!(
        summary,
        vec![
            ("PCOD", RiskTier::High),
            ("PCOS", RiskTier::Low),
            ("Iron Deficiency", RiskTier::Moderate),
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_append_for_unknown_user_is_not_found(pool: PgPool) {
    let store = PgUserStore::new(pool);
    let record = AssessmentRecord::new(Condition::Pcod, Submission::new(), 0);

    let result = store.append_assessment("ghost@example.com", &record).await;
    assert_matches!(result, Err(CoreError::NotFound { entity: "User", .. }));

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assessments")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_appends_are_not_lost(pool: PgPool) {
    let store = Arc::new(PgUserStore::new(pool));
    store.insert(new_user("c@example.com")).await.unwrap();

    let handles: Vec<_> = (0..10u32)
        .map(|score| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let record = AssessmentRecord::new(Condition::Pcos, Submission::new(), score);
                store.append_assessment("c@example.com", &record).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut scores: Vec<u32> = store
        .list_assessments("c@example.com")
        .await
        .unwrap()
        .iter()
        .map(|r| r.score)
        .collect();
    scores.sort_unstable();
    assert_eq!(scores, (0..10).collect::<Vec<_>>());
}

// ---------------------------------------------------------------------------
// Period entries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_period_entry_round_trip(pool: PgPool) {
    let store = PgUserStore::new(pool);
    store.insert(new_user("p@example.com")).await.unwrap();

    let last = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let entry = PeriodEntry::new(last, 28).unwrap();
    store.append_period_entry("p@example.com", &entry).await.unwrap();

    let entries = store.list_period_entries("p@example.com").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].last_period_date, last);
    assert_eq!(entries[0].cycle_length, 28);
    assert_eq!(entries[0].predicted_next_period.to_string(), "2024-01-29");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_unknown_user_is_not_found(pool: PgPool) {
    let store = PgUserStore::new(pool);
    assert_matches!(
        store.list_period_entries("ghost@example.com").await,
        Err(CoreError::NotFound { .. })
    );
}
