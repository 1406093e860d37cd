//! Event handlers for the TUI
//!
//! Keyboard dispatch, query submission and frame rendering, each as an
//! `impl App` block.

pub mod keyboard;
pub mod query;
pub mod rendering;
