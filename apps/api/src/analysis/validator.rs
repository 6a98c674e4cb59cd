//! Schema Validator — the fail-closed boundary between raw provider output
//! and the typed `AnalysisResult`.
//!
//! Policy: any missing field, wrong field kind, or out-of-set enum value
//! invalidates the entire result. There is no partial acceptance and no
//! field-level default substitution — a clamped fairness score or a guessed
//! category would be worse than an explicit failure. Validation stops at the
//! first offending field and names it with a dotted path.

use serde_json::Value;

use crate::analysis::models::{
    AnalysisResult, BiasCategory, BiasIssue, CounterfactualScenario, Severity,
};
use crate::errors::AppError;
use crate::llm_client::strip_json_fences;

/// Validates a raw provider payload into an `AnalysisResult`.
///
/// Distinguishes two failure modes:
/// - `MalformedPayload` — the text is not valid JSON at all.
/// - `Schema` — valid JSON that violates the result contract.
pub fn validate_payload(raw: &str) -> Result<AnalysisResult, AppError> {
    let text = strip_json_fences(raw);

    let value: Value =
        serde_json::from_str(text).map_err(|e| AppError::MalformedPayload(e.to_string()))?;

    let obj = value
        .as_object()
        .ok_or_else(|| schema_err("$", "expected a JSON object"))?;

    let fairness_score = require_int(obj.get("fairnessScore"), "fairnessScore")?;
    if !(0..=10).contains(&fairness_score) {
        return Err(schema_err(
            "fairnessScore",
            format!("must be between 0 and 10, got {fairness_score}"),
        ));
    }

    let summary = require_str(obj.get("summary"), "summary")?;
    let rewritten_resume = require_str(obj.get("rewrittenResume"), "rewrittenResume")?;

    let biases = require_array(obj.get("biases"), "biases")?
        .iter()
        .enumerate()
        .map(|(i, item)| validate_bias_issue(item, i))
        .collect::<Result<Vec<_>, _>>()?;

    let counterfactuals = require_array(obj.get("counterfactuals"), "counterfactuals")?
        .iter()
        .enumerate()
        .map(|(i, item)| validate_counterfactual(item, i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AnalysisResult {
        fairness_score: fairness_score as u8,
        summary,
        biases,
        rewritten_resume,
        counterfactuals,
    })
}

fn validate_bias_issue(value: &Value, index: usize) -> Result<BiasIssue, AppError> {
    let path = |field: &str| format!("biases[{index}].{field}");

    let obj = value
        .as_object()
        .ok_or_else(|| schema_err(format!("biases[{index}]"), "expected a JSON object"))?;

    let category_raw = require_str(obj.get("category"), &path("category"))?;
    let category = BiasCategory::parse(&category_raw).ok_or_else(|| {
        schema_err(
            path("category"),
            format!("unknown category \"{category_raw}\""),
        )
    })?;

    let severity_raw = require_str(obj.get("severity"), &path("severity"))?;
    let severity = Severity::parse(&severity_raw).ok_or_else(|| {
        schema_err(
            path("severity"),
            format!("unknown severity \"{severity_raw}\""),
        )
    })?;

    Ok(BiasIssue {
        category,
        severity,
        original_text: require_str(obj.get("originalText"), &path("originalText"))?,
        reason: require_str(obj.get("reason"), &path("reason"))?,
        suggestion: require_str(obj.get("suggestion"), &path("suggestion"))?,
    })
}

fn validate_counterfactual(value: &Value, index: usize) -> Result<CounterfactualScenario, AppError> {
    let path = |field: &str| format!("counterfactuals[{index}].{field}");

    let obj = value
        .as_object()
        .ok_or_else(|| schema_err(format!("counterfactuals[{index}]"), "expected a JSON object"))?;

    Ok(CounterfactualScenario {
        variable: require_str(obj.get("variable"), &path("variable"))?,
        original: require_str(obj.get("original"), &path("original"))?,
        simulated: require_str(obj.get("simulated"), &path("simulated"))?,
        impact: require_str(obj.get("impact"), &path("impact"))?,
    })
}

fn require_str(value: Option<&Value>, field: &str) -> Result<String, AppError> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(schema_err(
            field,
            format!("expected a string, got {}", kind_of(other)),
        )),
        None => Err(schema_err(field, "missing required field")),
    }
}

fn require_int(value: Option<&Value>, field: &str) -> Result<i64, AppError> {
    match value {
        // as_i64 is None for floats like 7.5 — non-integers are rejected,
        // not rounded.
        Some(v @ Value::Number(_)) => v
            .as_i64()
            .ok_or_else(|| schema_err(field, "expected an integer")),
        Some(other) => Err(schema_err(
            field,
            format!("expected an integer, got {}", kind_of(other)),
        )),
        None => Err(schema_err(field, "missing required field")),
    }
}

fn require_array<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a Vec<Value>, AppError> {
    match value {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(schema_err(
            field,
            format!("expected an array, got {}", kind_of(other)),
        )),
        None => Err(schema_err(field, "missing required field")),
    }
}

fn schema_err(field: impl Into<String>, reason: impl Into<String>) -> AppError {
    AppError::Schema {
        field: field.into(),
        reason: reason.into(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> String {
        r#"{
            "fairnessScore": 6,
            "summary": "Several regional and gendered markers detected.",
            "biases": [
                {
                    "category": "Gender",
                    "severity": "High",
                    "originalText": "Highly nurturing team player",
                    "reason": "Gendered framing of soft skills",
                    "suggestion": "Collaborative team player"
                },
                {
                    "category": "Region",
                    "severity": "Low",
                    "originalText": "Software Engineer from Patna",
                    "reason": "City marker may trigger tier-based bias",
                    "suggestion": "Software Engineer"
                }
            ],
            "rewrittenResume": "Collaborative software engineer with 5 years experience.",
            "counterfactuals": [
                {
                    "variable": "Candidate name",
                    "original": "Priya Kumari",
                    "simulated": "P. Sharma",
                    "impact": "Surname swap removes a community signal."
                }
            ]
        }"#
        .to_string()
    }

    fn assert_schema_err(result: Result<AnalysisResult, AppError>, expected_field: &str) {
        match result {
            Err(AppError::Schema { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected Schema error at `{expected_field}`, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let result = validate_payload(&valid_payload()).unwrap();
        assert_eq!(result.fairness_score, 6);
        assert_eq!(result.biases.len(), 2);
        assert_eq!(result.biases[0].category, BiasCategory::Gender);
        assert_eq!(result.biases[0].severity, Severity::High);
        assert_eq!(result.counterfactuals.len(), 1);
    }

    #[test]
    fn test_valid_payload_with_code_fences_passes() {
        let fenced = format!("```json\n{}\n```", valid_payload());
        assert!(validate_payload(&fenced).is_ok());
    }

    #[test]
    fn test_empty_biases_is_valid() {
        let payload = r#"{
            "fairnessScore": 10,
            "summary": "No detectable bias.",
            "biases": [],
            "rewrittenResume": "Unchanged resume text.",
            "counterfactuals": []
        }"#;
        let result = validate_payload(payload).unwrap();
        assert!(result.biases.is_empty());
        assert_eq!(result.fairness_score, 10);
    }

    #[test]
    fn test_non_json_is_malformed_payload() {
        match validate_payload("I'm sorry, I cannot analyze this resume.") {
            Err(AppError::MalformedPayload(_)) => {}
            other => panic!("expected MalformedPayload, got {other:?}"),
        }
    }

    #[test]
    fn test_score_out_of_range_rejected_not_clamped() {
        let payload = valid_payload().replace("\"fairnessScore\": 6", "\"fairnessScore\": 15");
        assert_schema_err(validate_payload(&payload), "fairnessScore");
    }

    #[test]
    fn test_negative_score_rejected() {
        let payload = valid_payload().replace("\"fairnessScore\": 6", "\"fairnessScore\": -1");
        assert_schema_err(validate_payload(&payload), "fairnessScore");
    }

    #[test]
    fn test_fractional_score_rejected() {
        let payload = valid_payload().replace("\"fairnessScore\": 6", "\"fairnessScore\": 6.5");
        assert_schema_err(validate_payload(&payload), "fairnessScore");
    }

    #[test]
    fn test_string_score_rejected() {
        let payload = valid_payload().replace("\"fairnessScore\": 6", "\"fairnessScore\": \"6\"");
        assert_schema_err(validate_payload(&payload), "fairnessScore");
    }

    #[test]
    fn test_missing_biases_fails_rather_than_defaulting_empty() {
        let payload = r#"{
            "fairnessScore": 8,
            "summary": "ok",
            "rewrittenResume": "text",
            "counterfactuals": []
        }"#;
        assert_schema_err(validate_payload(payload), "biases");
    }

    #[test]
    fn test_unknown_severity_names_nested_field() {
        let payload = valid_payload().replace("\"severity\": \"Low\"", "\"severity\": \"Critical\"");
        assert_schema_err(validate_payload(&payload), "biases[1].severity");
    }

    #[test]
    fn test_unknown_category_names_nested_field() {
        let payload = valid_payload().replace(
            "\"category\": \"Gender\"",
            "\"category\": \"Religion\"",
        );
        assert_schema_err(validate_payload(&payload), "biases[0].category");
    }

    #[test]
    fn test_missing_counterfactual_field_named() {
        let payload = valid_payload().replace("\"impact\":", "\"effect\":");
        assert_schema_err(validate_payload(&payload), "counterfactuals[0].impact");
    }

    #[test]
    fn test_top_level_array_rejected() {
        assert_schema_err(validate_payload("[1, 2, 3]"), "$");
    }

    #[test]
    fn test_bias_entry_wrong_kind_rejected() {
        let payload = r#"{
            "fairnessScore": 8,
            "summary": "ok",
            "biases": ["not an object"],
            "rewrittenResume": "text",
            "counterfactuals": []
        }"#;
        assert_schema_err(validate_payload(payload), "biases[0]");
    }

    #[test]
    fn test_validation_preserves_bias_order() {
        let result = validate_payload(&valid_payload()).unwrap();
        assert_eq!(result.biases[0].severity, Severity::High);
        assert_eq!(result.biases[1].severity, Severity::Low);
    }
}
