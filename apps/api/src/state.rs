use std::sync::Arc;

use crate::analysis::provider::AnalysisProvider;
use crate::analysis::session::SessionStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The analysis provider capability. Production: `LlmClient`.
    /// Tests swap in a deterministic double.
    pub provider: Arc<dyn AnalysisProvider>,
    /// Kept for handlers that need runtime settings; only startup reads it today.
    #[allow(dead_code)]
    pub config: Config,
    /// Per-session report slots with generation guards.
    pub sessions: SessionStore,
}
