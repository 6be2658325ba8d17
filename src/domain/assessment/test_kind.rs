//! TestKind enum - the two self-assessment questionnaires.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which questionnaire a question set or result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    Stress,
    Anxiety,
}

impl TestKind {
    /// All test kinds.
    pub const ALL: [TestKind; 2] = [TestKind::Stress, TestKind::Anxiety];

    /// Display label used in result headings.
    pub fn label(&self) -> &'static str {
        match self {
            TestKind::Stress => "Stress",
            TestKind::Anxiety => "Lo âu",
        }
    }

    /// Heading of the results view.
    pub fn result_heading(&self) -> &'static str {
        match self {
            TestKind::Stress => "Kết quả đánh giá Stress",
            TestKind::Anxiety => "Kết quả đánh giá Lo âu",
        }
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
