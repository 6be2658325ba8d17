//! ProgressIndicator port - Interface for the questionnaire progress bar.

use crate::domain::foundation::Percentage;

/// Port for reflecting answer progress on screen.
///
/// Implementations typically set the width of a progress bar element;
/// the test adapter records the values instead.
pub trait ProgressIndicator: Send + Sync {
    /// Sets the indicator to the given share of answered questions.
    fn set_progress(&self, progress: Percentage);
}
