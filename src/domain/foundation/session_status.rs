//! SessionStatus enum for the assessment session lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle of one questionnaire run-through.
///
/// `Complete` is reached implicitly once every question has a selection;
/// submission is allowed from any pre-submission state. `Submitted` is
/// terminal: selections are frozen and only re-submission may occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Unanswered,
    InProgress,
    Complete,
    Submitted,
}

impl SessionStatus {
    /// Returns true if at least one option has been selected.
    pub fn is_started(&self) -> bool {
        !matches!(self, SessionStatus::Unanswered)
    }

    /// Returns true if the session has been finalized.
    pub fn is_submitted(&self) -> bool {
        matches!(self, SessionStatus::Submitted)
    }

    /// Returns true if selections may still be changed.
    pub fn is_mutable(&self) -> bool {
        !self.is_submitted()
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &SessionStatus) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            // First selection starts the session
            (Unanswered, InProgress) |
            // A single-question set completes on its first selection
            (Unanswered, Complete) |
            // Changing a selection keeps the session in progress
            (InProgress, InProgress) |
            // Last unanswered question gets a selection
            (InProgress, Complete) |
            // Changing an existing selection while complete
            (Complete, Complete) |
            // Submission is allowed at any completion level
            (Unanswered, Submitted) |
            (InProgress, Submitted) |
            (Complete, Submitted)
        )
    }

    fn valid_transitions(&self) -> Vec<SessionStatus> {
        use SessionStatus::*;
        match self {
            Unanswered => vec![InProgress, Complete, Submitted],
            InProgress => vec![InProgress, Complete, Submitted],
            Complete => vec![Complete, Submitted],
            Submitted => vec![],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Unanswered => "Unanswered",
            SessionStatus::InProgress => "In Progress",
            SessionStatus::Complete => "Complete",
            SessionStatus::Submitted => "Submitted",
        };
        write!(f, "{}", s)
    }
}
