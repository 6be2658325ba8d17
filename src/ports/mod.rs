//! Ports - Interfaces for the rendering toolkit and external sinks.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the page. Adapters implement these ports.
//!
//! ## Rendering Ports (synchronous)
//!
//! - `ProgressIndicator` - width of the questionnaire progress bar
//! - `ViewScroller` - smooth scrolling to questions and results
//! - `ResultPresenter` - result summary rendering and reveal
//!
//! ## Submission Ports (asynchronous)
//!
//! - `RatingGateway` - delivery of page ratings

mod progress_indicator;
mod rating_gateway;
mod result_presenter;
mod view_scroller;

pub use progress_indicator::ProgressIndicator;
pub use rating_gateway::RatingGateway;
pub use result_presenter::ResultPresenter;
pub use view_scroller::{ViewScroller, ViewTarget};
