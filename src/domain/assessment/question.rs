//! Question and AnswerOption value objects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Points, ValidationError};

/// One selectable answer within a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    label: String,
    points: Points,
}

impl AnswerOption {
    /// Creates an answer option.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the label is empty or whitespace
    pub fn new(label: impl Into<String>, points: Points) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        Ok(Self { label, points })
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the point weight.
    pub fn points(&self) -> Points {
        self.points
    }
}

/// One question: a prompt and its ordered answer options.
///
/// Questions are identified by position within their set; at most one
/// option may be selected at a time (tracked by the session, not here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Minimum number of options a question must offer.
    pub const MIN_OPTIONS: usize = 2;

    /// Creates a question.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the prompt is empty or whitespace
    /// - `OutOfRange` if fewer than two options are given
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        if options.len() < Self::MIN_OPTIONS {
            return Err(ValidationError::invalid_format(
                "options",
                format!(
                    "A question must offer at least {} options, got {}",
                    Self::MIN_OPTIONS,
                    options.len()
                ),
            ));
        }
        Ok(Self { prompt, options })
    }

    /// Returns the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the ordered options.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Returns the option at the given position.
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    /// Returns the number of options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}
