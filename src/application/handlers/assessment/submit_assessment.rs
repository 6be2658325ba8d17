//! SubmitAssessmentHandler - Command handler for the form submit.
//!
//! Scores the session, reveals the results section, scrolls to it, and
//! renders the summary. Re-invocation over a submitted session re-renders
//! the identical result.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::{AssessmentResult, AssessmentSession};
use crate::domain::foundation::DomainError;
use crate::ports::{ResultPresenter, ViewScroller, ViewTarget};

/// Handler for assessment submission.
pub struct SubmitAssessmentHandler {
    presenter: Arc<dyn ResultPresenter>,
    scroller: Arc<dyn ViewScroller>,
}

impl SubmitAssessmentHandler {
    pub fn new(presenter: Arc<dyn ResultPresenter>, scroller: Arc<dyn ViewScroller>) -> Self {
        Self {
            presenter,
            scroller,
        }
    }

    /// Scores the session and drives the results view.
    pub fn handle(
        &self,
        session: &mut AssessmentSession,
    ) -> Result<AssessmentResult, DomainError> {
        let result = session.submit()?;

        self.presenter.reveal_results();
        self.scroller.scroll_to(ViewTarget::Results);
        self.presenter.render_summary(&result);

        info!(
            session = %session.id(),
            kind = %result.kind(),
            score = %result.score(),
            band = %result.band(),
            "assessment submitted"
        );
        Ok(result)
    }
}
