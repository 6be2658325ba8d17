//! QuestionSet - one questionnaire, fixed at configuration time.

use serde::{Deserialize, Serialize};

use super::{Band, BandScale, Question, TestKind};
use crate::domain::foundation::{Points, ValidationError};

/// An ordered, immutable sequence of questions plus its band scale.
///
/// Two independent sets exist in the portal (stress and anxiety), each
/// with its own question count and thresholds. Sets are built once at
/// configuration time and shared read-only by sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    kind: TestKind,
    questions: Vec<Question>,
    scale: BandScale,
}

impl QuestionSet {
    /// Creates a question set.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if no questions are given
    pub fn new(
        kind: TestKind,
        questions: Vec<Question>,
        scale: BandScale,
    ) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }
        Ok(Self {
            kind,
            questions,
            scale,
        })
    }

    /// Returns which questionnaire this set belongs to.
    pub fn kind(&self) -> TestKind {
        self.kind
    }

    /// Returns the ordered questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the question at the given position.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Returns the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if the set has no questions (unreachable after `new`).
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Classifies a score against this set's scale.
    pub fn classify(&self, score: Points) -> Band {
        self.scale.classify(score)
    }

    /// Returns the band scale.
    pub fn scale(&self) -> &BandScale {
        &self.scale
    }

    /// Returns the highest score the set can produce.
    pub fn max_score(&self) -> Points {
        self.questions
            .iter()
            .map(|q| {
                q.options()
                    .iter()
                    .map(|o| o.points())
                    .max()
                    .unwrap_or(Points::ZERO)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AnswerOption;

    fn uniform_set(kind: TestKind, question_count: usize) -> QuestionSet {
        let questions = (0..question_count)
            .map(|i| {
                let options = (0u32..4)
                    .map(|v| AnswerOption::new(format!("Option {}", v), Points::new(v)).unwrap())
                    .collect();
                Question::new(format!("Question {}", i + 1), options).unwrap()
            })
            .collect();
        let scale = match kind {
            TestKind::Stress => BandScale::stress(),
            TestKind::Anxiety => BandScale::anxiety(),
        };
        QuestionSet::new(kind, questions, scale).unwrap()
    }

    #[test]
    fn new_rejects_empty_question_list() {
        let result = QuestionSet::new(TestKind::Stress, vec![], BandScale::stress());
        assert!(result.is_err());
    }

    #[test]
    fn question_lookup_is_positional() {
        let set = uniform_set(TestKind::Stress, 10);
        assert_eq!(set.len(), 10);
        assert_eq!(set.question(0).unwrap().prompt(), "Question 1");
        assert_eq!(set.question(9).unwrap().prompt(), "Question 10");
        assert!(set.question(10).is_none());
    }

    #[test]
    fn classify_delegates_to_scale() {
        let set = uniform_set(TestKind::Anxiety, 15);
        assert_eq!(set.classify(Points::new(15)), Band::Low);
        assert_eq!(set.classify(Points::new(31)), Band::High);
    }

    #[test]
    fn max_score_sums_heaviest_options() {
        let set = uniform_set(TestKind::Stress, 10);
        assert_eq!(set.max_score(), Points::new(30));
    }
}
