//! Assessment module - Self-assessment question sets, sessions, and scoring.
//!
//! The deep core of the crate: an ordered question set, a session aggregate
//! tracking one selection per question, and submission-time scoring into a
//! severity band with a fixed result message.

mod band;
mod events;
mod messages;
mod question;
mod question_set;
mod result;
mod session;
mod test_kind;

pub use band::{Band, BandScale};
pub use events::AssessmentEvent;
pub use messages::result_message;
pub use question::{AnswerOption, Question};
pub use question_set::QuestionSet;
pub use result::AssessmentResult;
pub use session::{AssessmentSession, SelectionOutcome};
pub use test_kind::TestKind;
