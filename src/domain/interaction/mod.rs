//! Interaction module - Navigation and disclosure state machines.
//!
//! Small explicit FSMs for the portal's presentational components:
//! testimonial carousel, exclusive accordions, tab strips, the mobile
//! navigation menu, and the scroll-reveal threshold.

mod accordion;
mod carousel;
mod navigation;
mod reveal;
mod tabs;

pub use accordion::Accordion;
pub use carousel::{AutoAdvance, Carousel};
pub use navigation::{MenuState, NavMenu};
pub use reveal::{should_reveal, RevealTracker, REVEAL_MARGIN};
pub use tabs::TabStrip;
