//! Per-session analysis state with a generation guard.
//!
//! One report slot per session, one writer (the analyze call that commits),
//! many readers. Each `begin` bumps a generation counter and hands back a
//! ticket; a completing call commits its result only if its ticket still
//! matches the current generation. A session that was reset or superseded
//! while a call was in flight drops the stale result instead of writing it
//! over newer state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::analysis::models::{AnalysisReport, AnalysisResult};

/// Ticket issued by `begin`. Carries the generation the analysis was started
/// under; commits with a stale ticket are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
}

#[derive(Debug, Default)]
struct SessionInner {
    generation: u64,
    report: Option<AnalysisReport>,
}

/// State of one analysis session.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    inner: Mutex<SessionInner>,
}

impl AnalysisSession {
    /// Starts a new analysis: discards any previous report and returns a
    /// ticket bound to the new generation.
    pub fn begin(&self) -> AnalysisTicket {
        let mut inner = self.inner.lock().expect("session lock poisoned");
        inner.generation += 1;
        inner.report = None;
        AnalysisTicket {
            generation: inner.generation,
        }
    }

    /// Commits a completed result under `ticket`. Returns the stored report,
    /// or `None` if the ticket is stale (the session was reset or a newer
    /// analysis was started while this one was in flight).
    pub fn commit(&self, ticket: AnalysisTicket, result: AnalysisResult) -> Option<AnalysisReport> {
        let mut inner = self.inner.lock().expect("session lock poisoned");
        if inner.generation != ticket.generation {
            return None;
        }
        let report = AnalysisReport {
            result,
            analyzed_at: Utc::now(),
        };
        inner.report = Some(report.clone());
        Some(report)
    }

    /// Discards the current report and invalidates any outstanding ticket.
    pub fn reset(&self) {
        let mut inner = self.inner.lock().expect("session lock poisoned");
        inner.generation += 1;
        inner.report = None;
    }

    /// The most recently committed report, if any.
    pub fn current(&self) -> Option<AnalysisReport> {
        self.inner
            .lock()
            .expect("session lock poisoned")
            .report
            .clone()
    }
}

/// Maps session ids to sessions, creating them on demand.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Arc<AnalysisSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for `id`, creating it if absent.
    pub fn session(&self, id: Uuid) -> Arc<AnalysisSession> {
        let mut sessions = self.sessions.lock().expect("session store lock poisoned");
        Arc::clone(sessions.entry(id).or_default())
    }

    /// Returns the session for `id` only if it already exists.
    pub fn get(&self, id: Uuid) -> Option<Arc<AnalysisSession>> {
        let sessions = self.sessions.lock().expect("session store lock poisoned");
        sessions.get(&id).cloned()
    }
}
