//! ResultPresenter port - Interface for the results view.

use crate::domain::assessment::AssessmentResult;

/// Port for rendering the assessment outcome.
///
/// `render_summary` fills in the heading, score line, and message;
/// `reveal_results` makes the hidden results section visible.
pub trait ResultPresenter: Send + Sync {
    /// Renders the result summary (overwrites any previous one).
    fn render_summary(&self, result: &AssessmentResult);

    /// Makes the results section visible.
    fn reveal_results(&self);
}
