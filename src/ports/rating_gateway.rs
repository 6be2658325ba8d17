//! RatingGateway port - Interface for delivering page ratings.

use async_trait::async_trait;

use crate::domain::feedback::RatingSubmission;
use crate::domain::foundation::DomainError;

/// Port for submitting a page rating.
///
/// The portal has no server of its own; the shipped adapter simulates
/// delivery. Implementations must resolve (success or failure) so the
/// widget can show the matching banner.
#[async_trait]
pub trait RatingGateway: Send + Sync {
    /// Delivers one rating submission.
    async fn submit(&self, submission: RatingSubmission) -> Result<(), DomainError>;
}
