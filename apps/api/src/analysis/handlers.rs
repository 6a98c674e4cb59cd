//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;
use uuid::Uuid;

use crate::analysis::aggregate::{
    category_histogram, fairness_ratio, severity_buckets, CategoryCount, FairnessRatio,
    SeverityBuckets,
};
use crate::analysis::analyzer::analyze;
use crate::analysis::models::{AnalysisReport, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Omit to start a fresh session; pass an existing id to replace that
    /// session's report.
    pub session_id: Option<Uuid>,
    pub resume_text: String,
}

/// The full report plus every derived view the dashboard needs, so the
/// presentation layer never recomputes anything.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub session_id: Uuid,
    pub result: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
    pub severity_buckets: SeverityBuckets,
    pub category_histogram: Vec<CategoryCount>,
    pub fairness_ratio: FairnessRatio,
}

impl ReportResponse {
    fn from_report(session_id: Uuid, report: AnalysisReport) -> Self {
        let severity_buckets = severity_buckets(&report.result);
        let category_histogram = category_histogram(&report.result);
        let fairness_ratio = fairness_ratio(&report.result);
        Self {
            session_id,
            result: report.result,
            analyzed_at: report.analyzed_at,
            severity_buckets,
            category_histogram,
            fairness_ratio,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Runs the full pipeline: prompt build → provider call → schema validation →
/// commit to session → derived views. One provider call per request; any
/// failure is terminal for this request and nothing is committed.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let session_id = request.session_id.unwrap_or_else(Uuid::new_v4);
    let session = state.sessions.session(session_id);
    let ticket = session.begin();

    let result = analyze(&request.resume_text, state.provider.as_ref()).await?;

    let report = match session.commit(ticket, result.clone()) {
        Some(report) => report,
        None => {
            // Superseded while in flight: the caller still gets their own
            // result, but the session keeps the newer state.
            warn!("analysis for session {session_id} completed stale; not committed");
            AnalysisReport {
                result,
                analyzed_at: Utc::now(),
            }
        }
    };

    Ok(Json(ReportResponse::from_report(session_id, report)))
}

/// GET /api/v1/analysis/:session_id
///
/// Returns the session's committed report with derived views re-computed
/// from the immutable result.
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ReportResponse>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    let report = session
        .current()
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} has no report")))?;

    Ok(Json(ReportResponse::from_report(session_id, report)))
}

/// POST /api/v1/analysis/:session_id/reset
///
/// Discards the session's report and invalidates any in-flight analysis.
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    session.reset();

    Ok(Json(json!({ "session_id": session_id, "status": "reset" })))
}
