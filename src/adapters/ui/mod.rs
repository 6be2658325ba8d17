//! Headless UI adapters.

mod recording;

pub use recording::{RecordingUi, RenderInstruction};
