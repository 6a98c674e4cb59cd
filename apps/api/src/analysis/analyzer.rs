//! Analyzer — owns the request/response lifecycle of one bias analysis.
//!
//! Pipeline: input precondition → prompt build → single provider call →
//! parse + schema validation. No caching, no retry, no rate limiting; a
//! failed call is terminal and the caller recovers by issuing a new one.

use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::analysis::provider::AnalysisProvider;
use crate::analysis::validator::validate_payload;
use crate::errors::AppError;

/// Runs one full analysis of `resume_text`.
///
/// Empty or whitespace-only input is rejected before the provider is
/// invoked. On success the returned `AnalysisResult` satisfies every model
/// invariant; on failure exactly one of `Validation`, `Provider`,
/// `MalformedPayload`, or `Schema` is surfaced — never a partial result.
pub async fn analyze(
    resume_text: &str,
    provider: &dyn AnalysisProvider,
) -> Result<AnalysisResult, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let prompt = build_analysis_prompt(resume_text);
    let raw = provider.complete(&prompt, ANALYSIS_SYSTEM).await?;

    validate_payload(&raw)
}
