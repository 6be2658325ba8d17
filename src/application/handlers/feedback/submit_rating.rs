//! SubmitRatingHandler - Command handler for the rating widget's send button.
//!
//! Builds the submission from the widget, delivers it through the gateway,
//! and flips the widget to the matching banner. Gateway failures are
//! absorbed into the widget state; only a missing star propagates.

use std::sync::Arc;

use tracing::warn;

use crate::domain::feedback::{PageRef, RatingWidget, RatingWidgetStatus};
use crate::domain::foundation::DomainError;
use crate::ports::RatingGateway;

/// Handler for rating submission.
pub struct SubmitRatingHandler {
    gateway: Arc<dyn RatingGateway>,
}

impl SubmitRatingHandler {
    pub fn new(gateway: Arc<dyn RatingGateway>) -> Self {
        Self { gateway }
    }

    /// Submits the committed rating for the given page.
    ///
    /// Returns the widget status after the attempt (`Submitted` or
    /// `Failed`).
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if no star has been committed yet
    pub async fn handle(
        &self,
        widget: &mut RatingWidget,
        page: PageRef,
    ) -> Result<RatingWidgetStatus, DomainError> {
        let submission = widget.submission(page)?;

        match self.gateway.submit(submission).await {
            Ok(()) => widget.mark_submitted(),
            Err(err) => {
                warn!(error = %err, "rating delivery failed");
                widget.mark_failed();
            }
        }
        Ok(widget.status())
    }
}
