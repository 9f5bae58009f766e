use std::sync::Arc;
use chrono::{Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;
use crate::enums::session_status::SessionStatus;
use crate::structs::analysis_view::AnalysisView;
use crate::structs::explainer_session::ExplainerSession;

pub enum SessionGate {
    Started(AnalysisGuard),
    Busy,
    NotFound,
}

/// Marks a session busy for the lifetime of one analysis. Dropping the guard
/// returns the session to idle even if the request future is abandoned.
pub struct AnalysisGuard {
    sessions: Arc<DashMap<String, ExplainerSession>>,
    session_id: String,
}

impl AnalysisGuard {
    /// Replaces the session's view wholesale with the new outcome.
    pub fn complete(self, view: AnalysisView) {
        if let Some(mut session) = self.sessions.get_mut(&self.session_id) {
            session.view = Some(view);
        }
    }
}

impl Drop for AnalysisGuard {
    fn drop(&mut self) {
        if let Some(mut session) = self.sessions.get_mut(&self.session_id) {
            session.status = SessionStatus::Idle;
            session.last_active = Utc::now();
        }
    }
}

pub struct SessionManager {
    sessions: Arc<DashMap<String, ExplainerSession>>,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    pub fn create_session(&self) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.sessions.insert(session_id.clone(), ExplainerSession::new(session_id.clone()));
        session_id
    }

    pub fn get_session(&self, session_id: &str) -> Option<ExplainerSession> {
        self.sessions.get(session_id).map(|entry| entry.clone())
    }

    pub fn try_begin_analysis(&self, session_id: &str) -> SessionGate {
        match self.sessions.get_mut(session_id) {
            Some(mut session) => {
                if session.status == SessionStatus::Busy {
                    return SessionGate::Busy;
                }
                session.status = SessionStatus::Busy;
                session.last_active = Utc::now();
                SessionGate::Started(AnalysisGuard {
                    sessions: Arc::clone(&self.sessions),
                    session_id: session_id.to_string(),
                })
            }
            None => SessionGate::NotFound,
        }
    }

    /// Drops idle sessions untouched for longer than `ttl_minutes`. Busy sessions are kept.
    pub fn cleanup_expired_sessions(&self, ttl_minutes: u64) -> usize {
        let Some(cutoff) = i64::try_from(ttl_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .and_then(|ttl| Utc::now().checked_sub_signed(ttl))
        else {
            return 0;
        };
        let before = self.sessions.len();

        self.sessions
            .retain(|_, session| session.status == SessionStatus::Busy || session.last_active > cutoff);

        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            log::info!("🧹 Removed {} expired sessions", removed);
        }
        removed
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
