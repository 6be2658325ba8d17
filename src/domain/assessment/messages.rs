//! Fixed result messages keyed by (TestKind, Band).

use super::{Band, TestKind};

/// Returns the fixed result message for a questionnaire outcome.
///
/// Six strings total; display copy is fixed Vietnamese text.
pub fn result_message(kind: TestKind, band: Band) -> &'static str {
    match (kind, band) {
        (TestKind::Stress, Band::Low) => "Mức độ stress của bạn ở mức thấp.",
        (TestKind::Stress, Band::Medium) => "Mức độ stress của bạn ở mức trung bình.",
        (TestKind::Stress, Band::High) => "Mức độ stress của bạn ở mức cao.",
        (TestKind::Anxiety, Band::Low) => "Mức độ lo âu của bạn ở mức thấp.",
        (TestKind::Anxiety, Band::Medium) => "Mức độ lo âu của bạn ở mức trung bình.",
        (TestKind::Anxiety, Band::High) => "Mức độ lo âu của bạn ở mức cao.",
    }
}
