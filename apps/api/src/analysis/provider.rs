//! Analysis Provider — the capability seam in front of the language model.
//!
//! The analyzer and validator never talk to a live API; they depend on this
//! one-method trait so tests can substitute a deterministic provider that
//! returns canned payloads, including malformed ones.
//!
//! Carried in `AppState` as `Arc<dyn AnalysisProvider>`.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// The opaque text-completion oracle behind the analysis pipeline.
///
/// One operation, one input shape, one output shape: a prompt plus a system
/// instruction in, the raw text payload out. Transport errors, provider-side
/// rejections, and empty responses all surface uniformly as
/// `AppError::Provider`; whether the payload is usable is decided later by
/// the schema validator.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, AppError>;
}

#[async_trait]
impl AnalysisProvider for LlmClient {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, AppError> {
        self.call_text(prompt, system)
            .await
            .map_err(|e| AppError::Provider(e.to_string()))
    }
}
