//! Feedback flow handlers.

mod submit_rating;

pub use submit_rating::SubmitRatingHandler;
