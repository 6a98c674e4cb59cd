//! Result Aggregator — pure, read-only transforms over a validated
//! `AnalysisResult` that feed the presentation layer.
//!
//! Every transform constructs a fresh view; none mutates the input, so
//! applying a transform twice yields identical output.

use serde::Serialize;

use crate::analysis::models::{AnalysisResult, BiasCategory, BiasIssue, Severity};

/// Biases grouped by severity. Relative order within each bucket matches the
/// order the issues were received in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityBuckets {
    pub high: Vec<BiasIssue>,
    pub medium: Vec<BiasIssue>,
    pub low: Vec<BiasIssue>,
}

/// One bar of the category histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: BiasCategory,
    pub count: usize,
}

/// The fairness score split into a complementary pair for proportion-based
/// display (e.g. a donut chart). `score + gap == 10` always.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FairnessRatio {
    pub score: u8,
    pub gap: u8,
}

/// Groups the result's biases by severity, preserving input order within
/// each bucket.
pub fn severity_buckets(result: &AnalysisResult) -> SeverityBuckets {
    let mut buckets = SeverityBuckets {
        high: Vec::new(),
        medium: Vec::new(),
        low: Vec::new(),
    };

    for issue in &result.biases {
        match issue.severity {
            Severity::High => buckets.high.push(issue.clone()),
            Severity::Medium => buckets.medium.push(issue.clone()),
            Severity::Low => buckets.low.push(issue.clone()),
        }
    }

    buckets
}

/// Counts bias occurrences per category, in first-seen order. Categories
/// with zero occurrences are omitted, not zero-filled — the radar chart only
/// shows what is present.
pub fn category_histogram(result: &AnalysisResult) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for issue in &result.biases {
        match counts.iter_mut().find(|c| c.category == issue.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: issue.category,
                count: 1,
            }),
        }
    }

    counts
}

/// Converts the 0–10 fairness score into a complementary pair.
pub fn fairness_ratio(result: &AnalysisResult) -> FairnessRatio {
    FairnessRatio {
        score: result.fairness_score,
        gap: 10 - result.fairness_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(category: BiasCategory, severity: Severity, text: &str) -> BiasIssue {
        BiasIssue {
            category,
            severity,
            original_text: text.to_string(),
            reason: "test".to_string(),
            suggestion: "test".to_string(),
        }
    }

    fn result_with(biases: Vec<BiasIssue>, score: u8) -> AnalysisResult {
        AnalysisResult {
            fairness_score: score,
            summary: "summary".to_string(),
            biases,
            rewritten_resume: "rewritten".to_string(),
            counterfactuals: vec![],
        }
    }

    fn sample_result() -> AnalysisResult {
        result_with(
            vec![
                issue(BiasCategory::Gender, Severity::High, "first"),
                issue(BiasCategory::Region, Severity::Low, "second"),
                issue(BiasCategory::Gender, Severity::Medium, "third"),
            ],
            6,
        )
    }

    #[test]
    fn test_severity_buckets_groups_and_preserves_order() {
        let buckets = severity_buckets(&sample_result());
        assert_eq!(buckets.high.len(), 1);
        assert_eq!(buckets.high[0].original_text, "first");
        assert_eq!(buckets.medium.len(), 1);
        assert_eq!(buckets.medium[0].original_text, "third");
        assert_eq!(buckets.low.len(), 1);
        assert_eq!(buckets.low[0].original_text, "second");
    }

    #[test]
    fn test_severity_buckets_order_within_bucket() {
        let result = result_with(
            vec![
                issue(BiasCategory::Gender, Severity::High, "a"),
                issue(BiasCategory::Language, Severity::High, "b"),
                issue(BiasCategory::Other, Severity::High, "c"),
            ],
            5,
        );
        let buckets = severity_buckets(&result);
        let texts: Vec<_> = buckets.high.iter().map(|i| i.original_text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn test_histogram_counts_and_omits_absent_categories() {
        let histogram = category_histogram(&sample_result());
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram[0].category, BiasCategory::Gender);
        assert_eq!(histogram[0].count, 2);
        assert_eq!(histogram[1].category, BiasCategory::Region);
        assert_eq!(histogram[1].count, 1);
        assert!(!histogram
            .iter()
            .any(|c| matches!(c.category, BiasCategory::CasteCommunity
                | BiasCategory::Language
                | BiasCategory::Other)));
    }

    #[test]
    fn test_histogram_first_seen_order() {
        let result = result_with(
            vec![
                issue(BiasCategory::Language, Severity::Low, "a"),
                issue(BiasCategory::Gender, Severity::Low, "b"),
                issue(BiasCategory::Language, Severity::Low, "c"),
            ],
            7,
        );
        let histogram = category_histogram(&result);
        assert_eq!(histogram[0].category, BiasCategory::Language);
        assert_eq!(histogram[0].count, 2);
        assert_eq!(histogram[1].category, BiasCategory::Gender);
    }

    #[test]
    fn test_empty_biases_yield_empty_views() {
        let result = result_with(vec![], 10);
        assert!(severity_buckets(&result).high.is_empty());
        assert!(category_histogram(&result).is_empty());
    }

    #[test]
    fn test_fairness_ratio_sums_to_ten() {
        for score in 0..=10u8 {
            let ratio = fairness_ratio(&result_with(vec![], score));
            assert_eq!(ratio.score + ratio.gap, 10);
        }
    }

    #[test]
    fn test_transforms_are_idempotent_and_nonmutating() {
        let result = sample_result();
        let before = result.clone();

        let b1 = severity_buckets(&result);
        let b2 = severity_buckets(&result);
        let h1 = category_histogram(&result);
        let h2 = category_histogram(&result);
        let r1 = fairness_ratio(&result);
        let r2 = fairness_ratio(&result);

        assert_eq!(b1, b2);
        assert_eq!(h1, h2);
        assert_eq!(r1, r2);
        assert_eq!(result, before);
    }
}
