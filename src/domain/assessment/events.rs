//! Assessment domain events.

use serde::{Deserialize, Serialize};

use super::{Band, TestKind};
use crate::domain::foundation::{Points, SessionId, Timestamp};

/// Events that can occur during an assessment session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AssessmentEvent {
    /// An option was selected within a question.
    OptionSelected {
        session_id: SessionId,
        question_index: usize,
        option_index: usize,
        points: Points,
        occurred_at: Timestamp,
    },

    /// The session was submitted and scored.
    Submitted {
        session_id: SessionId,
        kind: TestKind,
        score: Points,
        band: Band,
        occurred_at: Timestamp,
    },
}

impl AssessmentEvent {
    /// Returns the session the event belongs to.
    pub fn session_id(&self) -> SessionId {
        match self {
            AssessmentEvent::OptionSelected { session_id, .. } => *session_id,
            AssessmentEvent::Submitted { session_id, .. } => *session_id,
        }
    }
}
