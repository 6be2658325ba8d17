//! AssessmentSession aggregate - one run-through of a questionnaire.
//!
//! The session exclusively owns per-question selection state. It is
//! created when the form appears, mutated on every option click, frozen
//! by submission, and discarded on navigation; nothing persists it.
//!
//! # Invariants
//!
//! - At most one option per question is selected at any time
//! - `selections` always has exactly one slot per question in the set
//! - A submitted session rejects further selection changes

use std::sync::Arc;

use crate::domain::foundation::{
    DomainError, ErrorCode, Percentage, Points, SessionId, SessionStatus, StateMachine, Timestamp,
};

use super::{AssessmentEvent, AssessmentResult, QuestionSet};

/// What a selection changed, for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// Share of questions that now have a selection.
    pub progress: Percentage,
    /// First question in order still lacking a selection, if any.
    pub next_unanswered: Option<usize>,
}

/// Assessment session aggregate.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    /// Unique identifier for this run-through.
    id: SessionId,

    /// The fixed question set being answered (shared, read-only).
    set: Arc<QuestionSet>,

    /// Selected option index per question, positionally aligned with the set.
    selections: Vec<Option<usize>>,

    /// Lifecycle status.
    status: SessionStatus,

    /// Events recorded since the last `take_events`.
    domain_events: Vec<AssessmentEvent>,
}

impl AssessmentSession {
    /// Creates a fresh session over a question set.
    pub fn new(set: Arc<QuestionSet>) -> Self {
        let selections = vec![None; set.len()];
        Self {
            id: SessionId::new(),
            set,
            selections,
            status: SessionStatus::Unanswered,
            domain_events: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the question set being answered.
    pub fn question_set(&self) -> &QuestionSet {
        &self.set
    }

    /// Returns the current status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Returns the selected option index for a question, if any.
    pub fn selected_option(&self, question_index: usize) -> Option<usize> {
        self.selections.get(question_index).copied().flatten()
    }

    /// Returns the number of questions with a selection.
    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    /// Returns the total number of questions.
    pub fn total_questions(&self) -> usize {
        self.set.len()
    }

    /// Returns true if every question has a selection.
    pub fn is_complete(&self) -> bool {
        self.selections.iter().all(|s| s.is_some())
    }

    /// Share of questions answered, as a clamped percentage.
    pub fn progress(&self) -> Percentage {
        Percentage::from_ratio(self.answered_count(), self.total_questions())
    }

    /// First question in order with no selection yet.
    pub fn first_unanswered(&self) -> Option<usize> {
        self.selections.iter().position(|s| s.is_none())
    }

    /// Sum of the selected options' points; unanswered questions add zero.
    pub fn score(&self) -> Points {
        self.selections
            .iter()
            .enumerate()
            .filter_map(|(q, selected)| {
                let option_index = (*selected)?;
                let question = self.set.question(q)?;
                question.option(option_index).map(|o| o.points())
            })
            .sum()
    }

    /// Drains recorded domain events.
    pub fn take_events(&mut self) -> Vec<AssessmentEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Selects an option, deselecting its siblings in the same question.
    ///
    /// # Errors
    ///
    /// - `SessionSubmitted` if the session has been finalized
    /// - `QuestionIndexOutOfRange` / `OptionIndexOutOfRange` for bad indices
    pub fn select_option(
        &mut self,
        question_index: usize,
        option_index: usize,
    ) -> Result<SelectionOutcome, DomainError> {
        if self.status.is_submitted() {
            return Err(DomainError::new(
                ErrorCode::SessionSubmitted,
                "Selections are frozen once the assessment is submitted",
            ));
        }

        let question = self.set.question(question_index).ok_or_else(|| {
            DomainError::new(
                ErrorCode::QuestionIndexOutOfRange,
                format!(
                    "Question index {} out of range for a set of {}",
                    question_index,
                    self.set.len()
                ),
            )
        })?;

        let option = question.option(option_index).ok_or_else(|| {
            DomainError::new(
                ErrorCode::OptionIndexOutOfRange,
                format!(
                    "Option index {} out of range for question {}",
                    option_index, question_index
                ),
            )
        })?;
        let points = option.points();

        // Writing the slot both selects the option and deselects siblings.
        self.selections[question_index] = Some(option_index);

        let target = if self.is_complete() {
            SessionStatus::Complete
        } else {
            SessionStatus::InProgress
        };
        self.status = self.status.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
        })?;

        self.record_event(AssessmentEvent::OptionSelected {
            session_id: self.id,
            question_index,
            option_index,
            points,
            occurred_at: Timestamp::now(),
        });

        Ok(SelectionOutcome {
            progress: self.progress(),
            next_unanswered: self.first_unanswered(),
        })
    }

    /// Submits the session, scoring whatever is currently selected.
    ///
    /// Allowed at any completion level; unanswered questions score zero.
    /// Submitting again after `Submitted` recomputes over the frozen
    /// selections and therefore returns an identical result.
    pub fn submit(&mut self) -> Result<AssessmentResult, DomainError> {
        if !self.status.is_submitted() {
            self.status = self
                .status
                .transition_to(SessionStatus::Submitted)
                .map_err(|e| {
                    DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                })?;
        }

        let score = self.score();
        let band = self.set.classify(score);
        let result = AssessmentResult::new(self.set.kind(), score, band);

        self.record_event(AssessmentEvent::Submitted {
            session_id: self.id,
            kind: self.set.kind(),
            score,
            band,
            occurred_at: Timestamp::now(),
        });

        Ok(result)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────

    fn record_event(&mut self, event: AssessmentEvent) {
        self.domain_events.push(event);
    }
}
