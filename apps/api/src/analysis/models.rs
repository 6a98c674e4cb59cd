//! Data model for a validated bias analysis.
//!
//! Enum fields are closed sum types — an out-of-set category or severity is
//! unrepresentable after validation, so everything downstream (aggregation,
//! presentation) can trust the values without re-checking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bias category in the Indian employment context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiasCategory {
    Gender,
    Region,
    #[serde(rename = "Caste/Community")]
    CasteCommunity,
    Language,
    Other,
}

impl BiasCategory {
    /// Parses the exact wire string. Anything else is a schema violation,
    /// never a silent `Other`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Gender" => Some(Self::Gender),
            "Region" => Some(Self::Region),
            "Caste/Community" => Some(Self::CasteCommunity),
            "Language" => Some(Self::Language),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Region => "Region",
            Self::CasteCommunity => "Caste/Community",
            Self::Language => "Language",
            Self::Other => "Other",
        }
    }
}

/// Severity of a flagged passage. Ordered Low < Medium < High so display
/// layers can sort descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One flagged resume passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasIssue {
    pub category: BiasCategory,
    pub severity: Severity,
    /// Best-effort verbatim quote from the input; not guaranteed byte-exact.
    pub original_text: String,
    pub reason: String,
    pub suggestion: String,
}

/// A simulated demographic-attribute swap. `impact` is narrative text, not a
/// computed statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterfactualScenario {
    pub variable: String,
    pub original: String,
    pub simulated: String,
    pub impact: String,
}

/// The top-level bias report. Constructed only by the schema validator from
/// provider output; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0–10, higher = less biased. Validated at the boundary; never clamped.
    pub fairness_score: u8,
    pub summary: String,
    /// Order as returned by the provider; may be empty (zero flags is a
    /// valid result, not a failure).
    pub biases: Vec<BiasIssue>,
    pub rewritten_resume: String,
    pub counterfactuals: Vec<CounterfactualScenario>,
}

/// A committed report: the validated result plus when it completed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
}
