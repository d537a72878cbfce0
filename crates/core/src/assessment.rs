//! Recording scored submissions onto a user's assessment history.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::scoring::{self, Condition, RiskTier, Submission};
use crate::store::UserStore;
use crate::types::Timestamp;

/// One persisted, timestamped outcome of a single scoring submission.
///
/// Created once per submission and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Condition display name (e.g. `"Breast Cancer"`).
    pub condition: String,
    /// The raw answers exactly as submitted.
    pub inputs: Submission,
    pub score: u32,
    pub risk: RiskTier,
    pub recorded_at: Timestamp,
}

impl AssessmentRecord {
    /// Build a record for `score`, classifying it and stamping the current time.
    pub fn new(condition: Condition, inputs: Submission, score: u32) -> Self {
        Self {
            condition: condition.name().to_string(),
            inputs,
            score,
            risk: scoring::classify(score),
            recorded_at: Utc::now(),
        }
    }
}

/// What a submitter gets back: `{ "risk": ..., "score": ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentOutcome {
    pub risk: RiskTier,
    pub score: u32,
}

/// Classify `score`, append the record to the user's history and return the tier.
///
/// Fails with [`CoreError::NotFound`] when no user has the given email.
pub async fn record_assessment(
    store: &dyn UserStore,
    email: &str,
    condition: Condition,
    inputs: Submission,
    score: u32,
) -> Result<RiskTier, CoreError> {
    let record = AssessmentRecord::new(condition, inputs, score);
    let risk = record.risk;

    store.append_assessment(email, &record).await?;

    tracing::info!(
        email = %email,
        condition = %condition,
        score,
        risk = %risk,
        "Assessment recorded"
    );

    Ok(risk)
}

/// Score a submission and record it in one step.
pub async fn assess(
    store: &dyn UserStore,
    email: &str,
    condition: Condition,
    submission: Submission,
) -> Result<AssessmentOutcome, CoreError> {
    let score = scoring::score(condition, &submission);
    let risk = record_assessment(store, email, condition, submission, score).await?;
    Ok(AssessmentOutcome { risk, score })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use serde_json::{json, Value};

    use super::*;
    use crate::store::{MemoryUserStore, NewUser};

    async fn store_with_user(email: &str) -> MemoryUserStore {
        let store = MemoryUserStore::new();
        store
            .insert(NewUser {
                name: "Asha".into(),
                age: 29,
                email: email.into(),
                password_hash: "not-a-real-hash".into(),
            })
            .await
            .expect("insert should succeed");
        store
    }

    fn answers(value: Value) -> Submission {
        value.as_object().cloned().expect("object")
    }

    #[tokio::test]
    async fn breast_cancer_submission_is_moderate_and_appended_once() {
        let store = store_with_user("asha@example.com").await;
        let before = store.list_assessments("asha@example.com").await.unwrap();

        let outcome = assess(
            &store,
            "asha@example.com",
            Condition::BreastCancer,
            answers(json!({ "lump": "yes", "family_history": "yes", "nipple_discharge": "no" })),
        )
        .await
        .unwrap();

        assert_eq!(outcome, AssessmentOutcome { risk: RiskTier::Moderate, score: 5 });

        let after = store.list_assessments("asha@example.com").await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        let record = after.last().unwrap();
        assert_eq!(record.condition, "Breast Cancer");
        assert_eq!(record.score, 5);
        assert_eq!(record.risk, RiskTier::Moderate);
        assert_eq!(record.inputs["lump"], "yes");
    }

    #[tokio::test]
    async fn earlier_records_are_left_untouched() {
        let store = store_with_user("a@example.com").await;
        record_assessment(&store, "a@example.com", Condition::Pcod, Submission::new(), 0)
            .await
            .unwrap();
        let first = store.list_assessments("a@example.com").await.unwrap()[0].clone();

        record_assessment(&store, "a@example.com", Condition::Pcos, Submission::new(), 7)
            .await
            .unwrap();

        let history = store.list_assessments("a@example.com").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], first);
        assert_eq!(history[1].risk, RiskTier::High);
    }

    #[tokio::test]
    async fn recorded_risk_matches_classification() {
        let store = store_with_user("b@example.com").await;
        for score in 0..=12 {
            let risk = record_assessment(
                &store,
                "b@example.com",
                Condition::IronDeficiency,
                Submission::new(),
                score,
            )
            .await
            .unwrap();
            assert_eq!(risk, scoring::classify(score));
        }
    }

    #[tokio::test]
    async fn unknown_user_is_reported() {
        let store = MemoryUserStore::new();
        let result = assess(&store, "ghost@example.com", Condition::Pcod, Submission::new()).await;
        assert_matches!(result, Err(CoreError::NotFound { entity: "User", .. }));
    }

    #[tokio::test]
    async fn concurrent_assessments_for_same_user_are_all_kept() {
        let store = Arc::new(store_with_user("c@example.com").await);

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let acne = if i % 2 == 0 { "yes" } else { "no" };
                    let submission = answers(json!({ "acne": acne }));
                    assess(store.as_ref(), "c@example.com", Condition::Pcos, submission).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let history = store.list_assessments("c@example.com").await.unwrap();
        assert_eq!(history.len(), 16);
        assert_eq!(history.iter().filter(|r| r.score == 2).count(), 8);
    }
}
