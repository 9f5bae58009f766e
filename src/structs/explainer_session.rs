use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::session_status::SessionStatus;
use crate::structs::analysis_view::AnalysisView;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainerSession {
    pub id: String,
    pub status: SessionStatus,
    pub view: Option<AnalysisView>,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl ExplainerSession {
    pub fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            status: SessionStatus::Idle,
            view: None,
            created_at: now,
            last_active: now,
        }
    }
}
