//! AssessmentResult - the record produced by submission.

use serde::{Deserialize, Serialize};

use super::{result_message, Band, TestKind};
use crate::domain::foundation::Points;

/// Outcome of submitting an assessment session.
///
/// Recomputed fresh on every submission; never persisted. Two submissions
/// over unchanged selections produce equal records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    kind: TestKind,
    score: Points,
    band: Band,
    message: String,
}

impl AssessmentResult {
    /// Builds the result for a scored submission.
    pub fn new(kind: TestKind, score: Points, band: Band) -> Self {
        Self {
            kind,
            score,
            band,
            message: result_message(kind, band).to_string(),
        }
    }

    /// Returns the questionnaire the result belongs to.
    pub fn kind(&self) -> TestKind {
        self.kind
    }

    /// Returns the cumulative score.
    pub fn score(&self) -> Points {
        self.score
    }

    /// Returns the severity band.
    pub fn band(&self) -> Band {
        self.band
    }

    /// Returns the fixed result message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the heading of the results view.
    pub fn heading(&self) -> &'static str {
        self.kind.result_heading()
    }

    /// Returns the score/band summary line shown under the heading.
    pub fn summary_line(&self) -> String {
        format!(
            "Điểm số của bạn: {} - Mức độ: {}",
            self.score,
            self.band.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_carries_fixed_message() {
        let result = AssessmentResult::new(TestKind::Stress, Points::new(15), Band::Medium);
        assert_eq!(result.message(), "Mức độ stress của bạn ở mức trung bình.");
    }

    #[test]
    fn summary_line_shows_score_and_band() {
        let result = AssessmentResult::new(TestKind::Anxiety, Points::new(31), Band::High);
        assert_eq!(result.summary_line(), "Điểm số của bạn: 31 - Mức độ: Cao");
    }

    #[test]
    fn heading_follows_kind() {
        let result = AssessmentResult::new(TestKind::Anxiety, Points::ZERO, Band::Low);
        assert_eq!(result.heading(), "Kết quả đánh giá Lo âu");
    }

    #[test]
    fn equal_inputs_produce_equal_records() {
        let a = AssessmentResult::new(TestKind::Stress, Points::new(7), Band::Low);
        let b = AssessmentResult::new(TestKind::Stress, Points::new(7), Band::Low);
        assert_eq!(a, b);
    }

    #[test]
    fn result_serializes_to_json() {
        let result = AssessmentResult::new(TestKind::Stress, Points::new(27), Band::High);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"stress\""));
        assert!(json.contains("\"high\""));
        assert!(json.contains("27"));
    }
}
