//! Condition weight tables, submission scoring and risk classification.
//!
//! Every condition is a fixed table of binary symptom checks. A symptom
//! contributes its weight only when its answer is exactly the string `"yes"`;
//! anything else, including a missing key, contributes nothing. The resulting
//! score is classified with one set of absolute thresholds shared by all
//! conditions, regardless of each condition's maximum attainable score.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// The only answer value that triggers a symptom.
pub const ANSWER_YES: &str = "yes";

/// Scores at or above this are [`RiskTier::High`].
pub const HIGH_RISK_THRESHOLD: u32 = 6;
/// Scores at or above this (and below [`HIGH_RISK_THRESHOLD`]) are [`RiskTier::Moderate`].
pub const MODERATE_RISK_THRESHOLD: u32 = 3;

/// Raw yes/no answers keyed by symptom.
pub type Submission = Map<String, Value>;

// ---------------------------------------------------------------------------
// Risk tier
// ---------------------------------------------------------------------------

/// Risk classification derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskTier::Low),
            "Moderate" => Ok(RiskTier::Moderate),
            "High" => Ok(RiskTier::High),
            other => Err(CoreError::Validation(format!("Unknown risk tier: '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Condition definitions
// ---------------------------------------------------------------------------

/// One weighted symptom check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomWeight {
    pub key: &'static str,
    pub weight: u32,
}

const fn symptom(key: &'static str, weight: u32) -> SymptomWeight {
    SymptomWeight { key, weight }
}

/// Static weight table for one assessed condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionDefinition {
    /// Display name, also stored on every assessment record.
    pub name: &'static str,
    pub symptoms: &'static [SymptomWeight],
}

pub const BREAST_CANCER: ConditionDefinition = ConditionDefinition {
    name: "Breast Cancer",
    symptoms: &[
        symptom("lump", 3),
        symptom("family_history", 2),
        symptom("nipple_discharge", 2),
        symptom("pain", 1),
        symptom("skin_dimpling", 2),
        symptom("swelling", 1),
        symptom("redness", 1),
    ],
};

pub const PCOS: ConditionDefinition = ConditionDefinition {
    name: "PCOS",
    symptoms: &[
        symptom("irregular_periods", 2),
        symptom("acne", 2),
        symptom("weight_gain", 2),
        symptom("hair_thinning", 1),
        symptom("mood_swings", 1),
        symptom("dark_patches", 2),
    ],
};

pub const PCOD: ConditionDefinition = ConditionDefinition {
    name: "PCOD",
    symptoms: &[
        symptom("irregular_periods", 2),
        symptom("acne", 2),
        symptom("weight_gain", 2),
        symptom("hair_growth", 2),
    ],
};

pub const IRON_DEFICIENCY: ConditionDefinition = ConditionDefinition {
    name: "Iron Deficiency",
    symptoms: &[
        symptom("fatigue", 2),
        symptom("pale_skin", 2),
        symptom("dizziness", 2),
        symptom("hair_fall", 1),
        symptom("shortness_of_breath", 2),
        symptom("heavy_periods", 2),
        symptom("brittle_nails", 1),
    ],
};

/// The conditions the service can assess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    BreastCancer,
    Pcos,
    Pcod,
    IronDeficiency,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::BreastCancer,
        Condition::Pcos,
        Condition::Pcod,
        Condition::IronDeficiency,
    ];

    pub fn definition(self) -> &'static ConditionDefinition {
        match self {
            Condition::BreastCancer => &BREAST_CANCER,
            Condition::Pcos => &PCOS,
            Condition::Pcod => &PCOD,
            Condition::IronDeficiency => &IRON_DEFICIENCY,
        }
    }

    /// Display name stored on assessment records.
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// URL slug used by the submission endpoints.
    pub fn slug(self) -> &'static str {
        match self {
            Condition::BreastCancer => "breast_cancer",
            Condition::Pcos => "pcos",
            Condition::Pcod => "pcod",
            Condition::IronDeficiency => "iron_deficiency",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Condition {
    type Err = CoreError;

    /// Accepts either the display name or the slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Condition::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(needle) || c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::NotFound {
                entity: "Condition",
                key: needle.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Sum the weights of every symptom answered exactly `"yes"`.
pub fn score_definition(definition: &ConditionDefinition, submission: &Submission) -> u32 {
    definition
        .symptoms
        .iter()
        .filter(|s| is_yes(submission.get(s.key)))
        .map(|s| s.weight)
        .sum()
}

/// Score a submission for the given condition.
pub fn score(condition: Condition, submission: &Submission) -> u32 {
    score_definition(condition.definition(), submission)
}

/// Highest score a condition can produce.
pub fn max_score(condition: Condition) -> u32 {
    condition.definition().symptoms.iter().map(|s| s.weight).sum()
}

/// Classify a raw score. Thresholds are absolute and identical for every condition.
pub fn classify(score: u32) -> RiskTier {
    if score >= HIGH_RISK_THRESHOLD {
        RiskTier::High
    } else if score >= MODERATE_RISK_THRESHOLD {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

fn is_yes(answer: Option<&Value>) -> bool {
    matches!(answer, Some(Value::String(s)) if s == ANSWER_YES)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
