//! Star-rating widget model.
//!
//! The widget lets a reader rate the current page 1-5 stars, optionally
//! leave feedback, and submit through the rating gateway. Hover shows a
//! preview highlight that reverts to the committed rating on leave.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Banner shown after a successful submission.
pub const RATING_THANKS_BANNER: &str = "Cảm ơn bạn đã gửi đánh giá!";

/// Banner shown when submission fails.
pub const RATING_ERROR_BANNER: &str = "Có lỗi xảy ra. Vui lòng thử lại sau.";

/// A committed star rating, 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(u8);

impl StarRating {
    /// Number of stars the widget renders.
    pub const MAX: u8 = 5;

    /// Creates a rating, returning error if outside 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if (1..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "rating",
                1,
                Self::MAX as i32,
                value as i32,
            ))
        }
    }

    /// Returns the number of stars.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// The page a rating refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    pub path: String,
    pub title: String,
}

/// What gets handed to the rating gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSubmission {
    pub rating: StarRating,
    pub feedback: Option<String>,
    pub page: PageRef,
}

/// Lifecycle of the rating widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingWidgetStatus {
    /// No star committed yet; feedback panel hidden.
    #[default]
    Idle,
    /// A star is committed; feedback panel visible.
    Rated,
    /// Submission succeeded; thanks banner visible.
    Submitted,
    /// Submission failed; error banner visible.
    Failed,
}

/// Star-rating widget state machine.
#[derive(Debug, Clone, Default)]
pub struct RatingWidget {
    committed: Option<StarRating>,
    preview: Option<StarRating>,
    feedback: String,
    status: RatingWidgetStatus,
}

impl RatingWidget {
    /// Creates an idle widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> RatingWidgetStatus {
        self.status
    }

    /// Returns the committed rating, if any.
    pub fn committed(&self) -> Option<StarRating> {
        self.committed
    }

    /// How many stars light up right now (hover preview wins).
    pub fn highlighted_stars(&self) -> u8 {
        self.preview
            .or(self.committed)
            .map(|r| r.value())
            .unwrap_or(0)
    }

    /// True while the feedback panel is visible.
    pub fn feedback_visible(&self) -> bool {
        matches!(self.status, RatingWidgetStatus::Rated)
    }

    /// Banner text for the current status, if one is showing.
    pub fn banner(&self) -> Option<&'static str> {
        match self.status {
            RatingWidgetStatus::Submitted => Some(RATING_THANKS_BANNER),
            RatingWidgetStatus::Failed => Some(RATING_ERROR_BANNER),
            _ => None,
        }
    }

    /// Pointer entered a star: preview that many stars.
    pub fn hover(&mut self, star: StarRating) {
        self.preview = Some(star);
    }

    /// Pointer left the stars: revert to the committed rating.
    pub fn leave(&mut self) {
        self.preview = None;
    }

    /// Click on a star: commit the rating and reveal the feedback panel.
    pub fn select(&mut self, star: StarRating) {
        self.committed = Some(star);
        self.preview = None;
        self.status = RatingWidgetStatus::Rated;
    }

    /// Replaces the optional feedback text.
    pub fn set_feedback(&mut self, text: impl Into<String>) {
        self.feedback = text.into();
    }

    /// Builds the submission payload for the gateway.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if no star has been committed
    pub fn submission(&self, page: PageRef) -> Result<RatingSubmission, DomainError> {
        let rating = self.committed.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ValidationFailed,
                "Cannot submit a rating before a star is selected",
            )
        })?;
        let feedback = if self.feedback.trim().is_empty() {
            None
        } else {
            Some(self.feedback.clone())
        };
        Ok(RatingSubmission {
            rating,
            feedback,
            page,
        })
    }

    /// Gateway accepted the rating: hide the panel, show thanks.
    pub fn mark_submitted(&mut self) {
        self.status = RatingWidgetStatus::Submitted;
    }

    /// Gateway rejected the rating: show the error banner.
    pub fn mark_failed(&mut self) {
        self.status = RatingWidgetStatus::Failed;
    }

    /// Banner dismissed (the UI hides it after a few seconds).
    pub fn dismiss_banner(&mut self) {
        if matches!(
            self.status,
            RatingWidgetStatus::Submitted | RatingWidgetStatus::Failed
        ) {
            self.status = if self.committed.is_some() {
                RatingWidgetStatus::Rated
            } else {
                RatingWidgetStatus::Idle
            };
        }
    }
}
