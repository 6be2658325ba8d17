//! Mindspace - Interaction Engine for a Mental-Health Content Portal
//!
//! This crate implements the client-side behavior of the Mindspace portal
//! as explicit, strongly-typed state machines: the self-assessment flow
//! (option selection, progress tracking, scoring, severity banding) plus
//! the page-rating widget, confession form, and navigation components.
//! All rendering happens through ports; the crate itself draws nothing.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
