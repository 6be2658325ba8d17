//! Adapters - Implementations of the ports.
//!
//! The crate ships headless adapters only: a recording UI for tests and
//! drivers, and a mock rating gateway simulating delivery (the portal
//! has no real backend).

pub mod rating;
pub mod ui;
