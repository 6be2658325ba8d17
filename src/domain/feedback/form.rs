//! Required-field text validation shared by the portal's forms.

use crate::domain::foundation::Percentage;

/// Fixed inline message for a missing required field.
pub const REQUIRED_FIELD_MESSAGE: &str = "Trường này là bắt buộc.";

/// A single text input with optional requiredness and length cap.
///
/// Mirrors the portal's form behavior: validation runs on submit and
/// blocks it with a fixed inline message; the message clears on the next
/// input. Input beyond the cap is truncated (the `maxlength` attribute
/// in the original markup).
#[derive(Debug, Clone)]
pub struct TextField {
    name: String,
    value: String,
    required: bool,
    max_length: Option<usize>,
    error: Option<&'static str>,
}

impl TextField {
    /// Creates an empty field.
    pub fn new(name: impl Into<String>, required: bool, max_length: Option<usize>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            required,
            max_length,
            error: None,
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the visible inline error, if any.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Replaces the value, truncating at the cap and clearing any error.
    pub fn set_value(&mut self, input: impl Into<String>) {
        let mut input = input.into();
        if let Some(max) = self.max_length {
            if input.chars().count() > max {
                input = input.chars().take(max).collect();
            }
        }
        self.value = input;
        self.error = None;
    }

    /// Clears the value (form reset).
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Returns true if the value is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Character counter text, when the field has a cap.
    pub fn char_counter(&self) -> Option<String> {
        self.max_length
            .map(|max| format!("{}/{} ký tự", self.value.chars().count(), max))
    }

    /// How full the field is, for counter styling.
    pub fn fill_ratio(&self) -> Percentage {
        match self.max_length {
            Some(max) => Percentage::from_ratio(self.value.chars().count(), max),
            None => Percentage::ZERO,
        }
    }

    /// Validates the field, recording the inline error on failure.
    pub fn validate(&mut self) -> bool {
        if self.required && self.is_blank() {
            self.error = Some(REQUIRED_FIELD_MESSAGE);
            false
        } else {
            self.error = None;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_field_fails_validation_with_fixed_message() {
        let mut field = TextField::new("content", true, None);
        assert!(!field.validate());
        assert_eq!(field.error(), Some(REQUIRED_FIELD_MESSAGE));
    }

    #[test]
    fn whitespace_counts_as_blank() {
        let mut field = TextField::new("content", true, None);
        field.set_value("   ");
        assert!(!field.validate());
    }

    #[test]
    fn optional_field_passes_when_blank() {
        let mut field = TextField::new("feedback", false, None);
        assert!(field.validate());
        assert_eq!(field.error(), None);
    }

    #[test]
    fn error_clears_on_next_input() {
        let mut field = TextField::new("content", true, None);
        field.validate();
        assert!(field.error().is_some());

        field.set_value("x");
        assert_eq!(field.error(), None);
    }

    #[test]
    fn value_is_truncated_at_cap() {
        let mut field = TextField::new("content", true, Some(5));
        field.set_value("abcdefgh");
        assert_eq!(field.value(), "abcde");
    }

    #[test]
    fn char_counter_formats_count_over_cap() {
        let mut field = TextField::new("content", true, Some(5000));
        assert_eq!(field.char_counter().as_deref(), Some("0/5000 ký tự"));

        field.set_value("xin chào");
        assert_eq!(field.char_counter().as_deref(), Some("8/5000 ký tự"));
    }

    #[test]
    fn char_counter_absent_without_cap() {
        let field = TextField::new("name", true, None);
        assert_eq!(field.char_counter(), None);
    }

    #[test]
    fn fill_ratio_tracks_cap_usage() {
        let mut field = TextField::new("content", true, Some(10));
        field.set_value("abcde");
        assert_eq!(field.fill_ratio(), Percentage::new(50));
    }

    #[test]
    fn counter_counts_chars_not_bytes() {
        let mut field = TextField::new("content", true, Some(10));
        field.set_value("chào");
        assert_eq!(field.char_counter().as_deref(), Some("4/10 ký tự"));
    }
}
