//! Confession form model.
//!
//! Anonymous sharing form: one required content field capped at 5000
//! characters with a live counter. Submission validates, acknowledges
//! with a fixed message, and resets the draft; the acknowledgement is
//! dismissed by the UI after a few seconds.

use crate::domain::foundation::{DomainError, ErrorCode};

use super::TextField;

/// Fixed acknowledgement after a successful confession submission.
pub const CONFESSION_ACK: &str =
    "Cảm ơn bạn đã chia sẻ. Nội dung của bạn đang được xem xét và sẽ được đăng trong thời gian sớm nhất.";

/// Character cap on confession content.
pub const CONFESSION_MAX_CHARS: usize = 5000;

/// Lifecycle of the confession form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfessionFormStatus {
    /// Draft being edited.
    #[default]
    Editing,
    /// Submitted; acknowledgement banner visible, draft reset.
    Acknowledged,
}

/// Confession submission form.
#[derive(Debug, Clone)]
pub struct ConfessionForm {
    content: TextField,
    status: ConfessionFormStatus,
}

impl Default for ConfessionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfessionForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self {
            content: TextField::new("content", true, Some(CONFESSION_MAX_CHARS)),
            status: ConfessionFormStatus::Editing,
        }
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> ConfessionFormStatus {
        self.status
    }

    /// Returns the content field.
    pub fn content(&self) -> &TextField {
        &self.content
    }

    /// Live counter text, e.g. `0/5000 ký tự`.
    pub fn char_counter(&self) -> String {
        self.content
            .char_counter()
            .unwrap_or_else(|| format!("0/{} ký tự", CONFESSION_MAX_CHARS))
    }

    /// Replaces the draft content (typing).
    pub fn set_content(&mut self, input: impl Into<String>) {
        self.content.set_value(input);
        self.status = ConfessionFormStatus::Editing;
    }

    /// Submits the confession.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` when the content is blank; the fixed inline
    ///   message stays visible on the field until the next input
    pub fn submit(&mut self) -> Result<&'static str, DomainError> {
        if !self.content.validate() {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                "Confession content is required",
            )
            .with_detail("field", self.content.name().to_string()));
        }

        self.content.clear();
        self.status = ConfessionFormStatus::Acknowledged;
        Ok(CONFESSION_ACK)
    }

    /// Acknowledgement banner dismissed; back to editing.
    pub fn dismiss_acknowledgement(&mut self) {
        self.status = ConfessionFormStatus::Editing;
    }
}

/// Like/bookmark counter on a published confession.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionCounter {
    count: u32,
    active: bool,
}

impl ReactionCounter {
    /// Creates a counter with an initial count.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            active: false,
        }
    }

    /// Returns the visible count.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// True while the reader's own reaction is on.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Toggles the reaction on or off, adjusting the count.
    pub fn toggle(&mut self) {
        if self.active {
            self.count = self.count.saturating_sub(1);
        } else {
            self.count += 1;
        }
        self.active = !self.active;
    }
}
