//! Built-in theme definitions

mod darkly;
mod terminal;

pub use darkly::darkly;
pub use terminal::terminal;
