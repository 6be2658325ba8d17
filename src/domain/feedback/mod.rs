//! Feedback module - Page-rating widget and confession form models.
//!
//! Shallow collaborators of the assessment core: explicit state machines
//! for the star-rating widget, the confession submission form, and the
//! generic required-field text validation both forms rely on.

mod confession;
mod form;
mod rating;

pub use confession::{
    ConfessionForm, ConfessionFormStatus, ReactionCounter, CONFESSION_ACK, CONFESSION_MAX_CHARS,
};
pub use form::{TextField, REQUIRED_FIELD_MESSAGE};
pub use rating::{
    PageRef, RatingSubmission, RatingWidget, RatingWidgetStatus, StarRating, RATING_ERROR_BANNER,
    RATING_THANKS_BANNER,
};
