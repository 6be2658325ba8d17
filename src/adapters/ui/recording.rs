//! Recording UI adapter.
//!
//! Captures every rendering instruction instead of touching a page.
//! Deterministic and synchronous, it backs the test suites and any
//! headless driver of the interaction flows.

use std::sync::Mutex;

use crate::domain::assessment::AssessmentResult;
use crate::domain::foundation::Percentage;
use crate::ports::{ProgressIndicator, ResultPresenter, ViewScroller, ViewTarget};

/// One captured rendering instruction, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    ProgressSet(Percentage),
    ScrolledTo(ViewTarget),
    SummaryRendered(AssessmentResult),
    ResultsRevealed,
}

/// UI adapter that records instructions for assertions.
///
/// # Panics
///
/// Methods may panic if the internal lock is poisoned. This is
/// acceptable for test code.
#[derive(Debug, Default)]
pub struct RecordingUi {
    instructions: Mutex<Vec<RenderInstruction>>,
}

impl RecordingUi {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured instructions in order.
    pub fn instructions(&self) -> Vec<RenderInstruction> {
        self.instructions
            .lock()
            .expect("RecordingUi: instructions lock poisoned")
            .clone()
    }

    /// Returns the last progress value set, if any.
    pub fn last_progress(&self) -> Option<Percentage> {
        self.instructions()
            .into_iter()
            .rev()
            .find_map(|i| match i {
                RenderInstruction::ProgressSet(p) => Some(p),
                _ => None,
            })
    }

    /// Returns the last scroll target, if any.
    pub fn last_scroll(&self) -> Option<ViewTarget> {
        self.instructions()
            .into_iter()
            .rev()
            .find_map(|i| match i {
                RenderInstruction::ScrolledTo(t) => Some(t),
                _ => None,
            })
    }

    /// Returns the last rendered result summary, if any.
    pub fn last_summary(&self) -> Option<AssessmentResult> {
        self.instructions()
            .into_iter()
            .rev()
            .find_map(|i| match i {
                RenderInstruction::SummaryRendered(r) => Some(r),
                _ => None,
            })
    }

    /// Returns true if the results section has been revealed.
    pub fn results_revealed(&self) -> bool {
        self.instructions()
            .iter()
            .any(|i| matches!(i, RenderInstruction::ResultsRevealed))
    }

    /// Clears captured instructions (test isolation).
    pub fn clear(&self) {
        self.instructions
            .lock()
            .expect("RecordingUi: instructions lock poisoned")
            .clear();
    }

    fn record(&self, instruction: RenderInstruction) {
        self.instructions
            .lock()
            .expect("RecordingUi: instructions lock poisoned")
            .push(instruction);
    }
}

impl ProgressIndicator for RecordingUi {
    fn set_progress(&self, progress: Percentage) {
        self.record(RenderInstruction::ProgressSet(progress));
    }
}

impl ViewScroller for RecordingUi {
    fn scroll_to(&self, target: ViewTarget) {
        self.record(RenderInstruction::ScrolledTo(target));
    }
}

impl ResultPresenter for RecordingUi {
    fn render_summary(&self, result: &AssessmentResult) {
        self.record(RenderInstruction::SummaryRendered(result.clone()));
    }

    fn reveal_results(&self) {
        self.record(RenderInstruction::ResultsRevealed);
    }
}
