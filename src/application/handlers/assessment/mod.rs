//! Assessment flow handlers.

mod select_option;
mod submit_assessment;

pub use select_option::{SelectOptionCommand, SelectOptionHandler};
pub use submit_assessment::SubmitAssessmentHandler;
