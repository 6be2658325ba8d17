//! SelectOptionHandler - Command handler for clicking an answer option.
//!
//! Selecting an option updates the session, pushes the new progress to
//! the indicator, and scrolls the first unanswered question into view.

use std::sync::Arc;

use tracing::debug;

use crate::domain::assessment::{AssessmentSession, SelectionOutcome};
use crate::domain::foundation::DomainError;
use crate::ports::{ProgressIndicator, ViewScroller, ViewTarget};

/// Command identifying one option within one question.
#[derive(Debug, Clone, Copy)]
pub struct SelectOptionCommand {
    /// Position of the question in its set.
    pub question_index: usize,
    /// Position of the option within the question.
    pub option_index: usize,
}

/// Handler for option clicks.
pub struct SelectOptionHandler {
    progress_indicator: Arc<dyn ProgressIndicator>,
    scroller: Arc<dyn ViewScroller>,
}

impl SelectOptionHandler {
    pub fn new(
        progress_indicator: Arc<dyn ProgressIndicator>,
        scroller: Arc<dyn ViewScroller>,
    ) -> Self {
        Self {
            progress_indicator,
            scroller,
        }
    }

    /// Applies the selection and drives the rendering ports.
    ///
    /// # Errors
    ///
    /// - `SessionSubmitted` if the session is frozen
    /// - `QuestionIndexOutOfRange` / `OptionIndexOutOfRange` for bad indices
    pub fn handle(
        &self,
        session: &mut AssessmentSession,
        cmd: SelectOptionCommand,
    ) -> Result<SelectionOutcome, DomainError> {
        let outcome = session.select_option(cmd.question_index, cmd.option_index)?;

        self.progress_indicator.set_progress(outcome.progress);
        if let Some(next) = outcome.next_unanswered {
            self.scroller.scroll_to(ViewTarget::Question(next));
        }

        debug!(
            session = %session.id(),
            question = cmd.question_index,
            option = cmd.option_index,
            progress = %outcome.progress,
            "option selected"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ui::{RecordingUi, RenderInstruction};
    use crate::domain::assessment::{
        AnswerOption, BandScale, Question, QuestionSet, TestKind,
    };
    use crate::domain::foundation::{ErrorCode, Percentage, Points};

    fn ten_question_session() -> AssessmentSession {
        let questions = (0..10)
            .map(|i| {
                let options = (0u32..4)
                    .map(|v| AnswerOption::new(format!("Option {}", v), Points::new(v)).unwrap())
                    .collect();
                Question::new(format!("Question {}", i + 1), options).unwrap()
            })
            .collect();
        let set = QuestionSet::new(TestKind::Stress, questions, BandScale::stress()).unwrap();
        AssessmentSession::new(Arc::new(set))
    }

    fn handler_with_ui() -> (SelectOptionHandler, Arc<RecordingUi>) {
        let ui = Arc::new(RecordingUi::new());
        let handler = SelectOptionHandler::new(ui.clone(), ui.clone());
        (handler, ui)
    }

    #[test]
    fn selection_updates_progress_indicator() {
        let (handler, ui) = handler_with_ui();
        let mut session = ten_question_session();

        for q in 0..3 {
            handler
                .handle(
                    &mut session,
                    SelectOptionCommand {
                        question_index: q,
                        option_index: 1,
                    },
                )
                .unwrap();
        }

        assert_eq!(ui.last_progress(), Some(Percentage::new(30)));
    }

    #[test]
    fn scrolls_to_first_unanswered_question() {
        let (handler, ui) = handler_with_ui();
        let mut session = ten_question_session();

        handler
            .handle(
                &mut session,
                SelectOptionCommand {
                    question_index: 0,
                    option_index: 2,
                },
            )
            .unwrap();

        assert_eq!(ui.last_scroll(), Some(ViewTarget::Question(1)));
    }

    #[test]
    fn skips_answered_questions_when_scrolling() {
        let (handler, ui) = handler_with_ui();
        let mut session = ten_question_session();

        // Answer 0 and 2; next unanswered is 1
        handler
            .handle(&mut session, SelectOptionCommand { question_index: 2, option_index: 0 })
            .unwrap();
        handler
            .handle(&mut session, SelectOptionCommand { question_index: 0, option_index: 0 })
            .unwrap();

        assert_eq!(ui.last_scroll(), Some(ViewTarget::Question(1)));
    }

    #[test]
    fn no_scroll_once_every_question_is_answered() {
        let (handler, ui) = handler_with_ui();
        let mut session = ten_question_session();

        for q in 0..10 {
            handler
                .handle(&mut session, SelectOptionCommand { question_index: q, option_index: 0 })
                .unwrap();
        }

        ui.clear();
        // Re-select within the last question; nothing left to scroll to
        handler
            .handle(&mut session, SelectOptionCommand { question_index: 9, option_index: 3 })
            .unwrap();
        assert!(ui
            .instructions()
            .iter()
            .all(|i| !matches!(i, RenderInstruction::ScrolledTo(_))));
    }

    #[test]
    fn bad_indices_touch_no_port() {
        let (handler, ui) = handler_with_ui();
        let mut session = ten_question_session();

        let err = handler
            .handle(&mut session, SelectOptionCommand { question_index: 10, option_index: 0 })
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::QuestionIndexOutOfRange);
        assert!(ui.instructions().is_empty());
    }
}
