//! Animation system for the animerec TUI
//!
//! Indeterminate progress bar shown while a query is in flight.

pub mod progress;

pub use progress::LoadingIndicator;
