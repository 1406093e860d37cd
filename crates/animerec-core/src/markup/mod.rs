//! Markup-lite rendering for model responses
//!
//! Recognizes exactly two constructs: `**bold**` spans and lines starting
//! with `* `. Everything else is literal text. Rendering is pure and never
//! fails; the display layer owns the mapping from [`RunStyle`] to visuals.

mod elements;
mod parser;
mod source;

pub use elements::{RunStyle, StyledRun};
pub use parser::{render, render_with, RenderOptions};
pub use source::{label_line, to_plain, to_source};
