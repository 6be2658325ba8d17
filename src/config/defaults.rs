//! Built-in question sets for the portal's two questionnaires.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::domain::assessment::{
    AnswerOption, BandScale, Question, QuestionSet, TestKind,
};
use crate::domain::foundation::Points;

/// Frequency options shared by every built-in question, weighted 0-3.
const FREQUENCY_OPTIONS: [(&str, u32); 4] = [
    ("Không bao giờ", 0),
    ("Thỉnh thoảng", 1),
    ("Thường xuyên", 2),
    ("Rất thường xuyên", 3),
];

const STRESS_PROMPTS: [&str; 10] = [
    "Bạn cảm thấy căng thẳng vì những việc xảy ra ngoài ý muốn?",
    "Bạn cảm thấy khó kiểm soát những điều quan trọng trong cuộc sống?",
    "Bạn cảm thấy lo lắng và áp lực?",
    "Bạn thiếu tự tin vào khả năng giải quyết vấn đề cá nhân?",
    "Bạn cảm thấy mọi việc không diễn ra theo ý mình?",
    "Bạn nhận thấy mình không thể hoàn thành hết những việc phải làm?",
    "Bạn khó kiềm chế những điều khiến mình khó chịu?",
    "Bạn cảm thấy mình không làm chủ được tình hình?",
    "Bạn tức giận vì những việc nằm ngoài tầm kiểm soát?",
    "Bạn cảm thấy khó khăn chồng chất đến mức không thể vượt qua?",
];

const ANXIETY_PROMPTS: [&str; 15] = [
    "Bạn cảm thấy bồn chồn, lo lắng hơn bình thường?",
    "Bạn cảm thấy sợ hãi vô cớ?",
    "Bạn dễ bực bội hoặc hoảng hốt?",
    "Bạn cảm thấy như mọi thứ đang sụp đổ?",
    "Bạn khó đi vào giấc ngủ vì suy nghĩ quá nhiều?",
    "Bạn cảm thấy tim đập nhanh dù không vận động mạnh?",
    "Bạn khó tập trung vào công việc hằng ngày?",
    "Bạn cảm thấy tay chân run hoặc đổ mồ hôi?",
    "Bạn tránh né những tình huống khiến mình lo lắng?",
    "Bạn cảm thấy chóng mặt hoặc đau đầu khi căng thẳng?",
    "Bạn lo lắng quá mức về những chuyện nhỏ nhặt?",
    "Bạn cảm thấy khó thư giãn ngay cả khi nghỉ ngơi?",
    "Bạn cảm thấy mệt mỏi dù ngủ đủ giấc?",
    "Bạn có cảm giác tê hoặc ngứa ran ở đầu ngón tay, ngón chân?",
    "Bạn lo sợ điều tồi tệ sắp xảy ra với mình?",
];

static STRESS_SET: Lazy<Arc<QuestionSet>> = Lazy::new(|| {
    Arc::new(
        build_set(TestKind::Stress, &STRESS_PROMPTS, BandScale::stress())
            .expect("built-in stress set is valid"),
    )
});

static ANXIETY_SET: Lazy<Arc<QuestionSet>> = Lazy::new(|| {
    Arc::new(
        build_set(TestKind::Anxiety, &ANXIETY_PROMPTS, BandScale::anxiety())
            .expect("built-in anxiety set is valid"),
    )
});

fn build_set(
    kind: TestKind,
    prompts: &[&str],
    scale: BandScale,
) -> Result<QuestionSet, crate::domain::foundation::ValidationError> {
    let questions = prompts
        .iter()
        .map(|prompt| {
            let options = FREQUENCY_OPTIONS
                .iter()
                .map(|(label, points)| AnswerOption::new(*label, Points::new(*points)))
                .collect::<Result<Vec<_>, _>>()?;
            Question::new(*prompt, options)
        })
        .collect::<Result<Vec<_>, _>>()?;
    QuestionSet::new(kind, questions, scale)
}

/// The built-in stress questionnaire.
pub fn stress_set() -> Arc<QuestionSet> {
    STRESS_SET.clone()
}

/// The built-in anxiety questionnaire.
pub fn anxiety_set() -> Arc<QuestionSet> {
    ANXIETY_SET.clone()
}
