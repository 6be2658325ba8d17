//! Raw YAML schema for question-set files.
//!
//! Files deserialize into these spec structs, then convert through the
//! domain constructors so invariants are enforced rather than assumed.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{
    AnswerOption, Band, BandScale, Question, QuestionSet, TestKind,
};
use crate::domain::foundation::{Points, ValidationError};

/// Top-level file layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub question_sets: Vec<QuestionSetSpec>,
}

/// One questionnaire as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSetSpec {
    pub kind: TestKind,
    pub bands: BandSpec,
    pub questions: Vec<QuestionSpec>,
}

/// Band thresholds as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandSpec {
    pub thresholds: Vec<ThresholdSpec>,
    pub overflow: Band,
}

/// One `(upper bound inclusive, band)` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdSpec {
    pub upper: u32,
    pub band: Band,
}

/// One question as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub prompt: String,
    pub options: Vec<OptionSpec>,
}

/// One answer option as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionSpec {
    pub label: String,
    pub points: u32,
}

impl QuestionSetSpec {
    /// Converts the spec into a validated domain question set.
    pub fn into_domain(self) -> Result<QuestionSet, ValidationError> {
        let scale = BandScale::new(
            self.bands
                .thresholds
                .into_iter()
                .map(|t| (t.upper, t.band))
                .collect(),
            self.bands.overflow,
        )?;

        let questions = self
            .questions
            .into_iter()
            .map(|q| {
                let options = q
                    .options
                    .into_iter()
                    .map(|o| AnswerOption::new(o.label, Points::new(o.points)))
                    .collect::<Result<Vec<_>, _>>()?;
                Question::new(q.prompt, options)
            })
            .collect::<Result<Vec<_>, _>>()?;

        QuestionSet::new(self.kind, questions, scale)
    }
}
