//! Mock rating gateway.
//!
//! The portal has no backend; rating delivery is simulated with a short
//! delay, logged, and remembered so callers can assert on it. Failure
//! can be switched on to exercise the widget's error banner.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::domain::feedback::RatingSubmission;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::RatingGateway;

/// Simulated delivery latency, matching the original page's fake call.
const SIMULATED_LATENCY: Duration = Duration::from_secs(1);

/// Gateway that simulates rating delivery.
pub struct MockRatingGateway {
    latency: Duration,
    fail: bool,
    submissions: Mutex<Vec<RatingSubmission>>,
}

impl Default for MockRatingGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRatingGateway {
    /// Creates a succeeding gateway with the standard simulated latency.
    pub fn new() -> Self {
        Self {
            latency: SIMULATED_LATENCY,
            fail: false,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Creates a gateway that resolves immediately (for tests).
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
            fail: false,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Creates a gateway whose submissions always fail.
    pub fn failing() -> Self {
        Self {
            latency: Duration::ZERO,
            fail: true,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Returns every submission accepted so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn submissions(&self) -> Vec<RatingSubmission> {
        self.submissions
            .lock()
            .expect("MockRatingGateway: submissions lock poisoned")
            .clone()
    }
}

#[async_trait]
impl RatingGateway for MockRatingGateway {
    async fn submit(&self, submission: RatingSubmission) -> Result<(), DomainError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.fail {
            return Err(DomainError::new(
                ErrorCode::RatingGatewayError,
                "Simulated rating delivery failure",
            ));
        }

        info!(
            page = %submission.page.title,
            rating = submission.rating.value(),
            has_feedback = submission.feedback.is_some(),
            "page rated"
        );
        self.submissions
            .lock()
            .expect("MockRatingGateway: submissions lock poisoned")
            .push(submission);
        Ok(())
    }
}
