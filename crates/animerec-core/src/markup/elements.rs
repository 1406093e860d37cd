//! Styled run types

/// Display class of a run
///
/// `Header` and `Subheader` are never produced by the parser; callers assign
/// them with [`super::label_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStyle {
    Header,
    Subheader,
    Bold,
    Bullet,
    Normal,
}

impl RunStyle {
    /// Stable lowercase name, used in logs and the one-shot printer
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStyle::Header => "header",
            RunStyle::Subheader => "subheader",
            RunStyle::Bold => "bold",
            RunStyle::Bullet => "bullet",
            RunStyle::Normal => "normal",
        }
    }
}

/// A contiguous span of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: RunStyle,
    /// Zero-based index of the input line this run came from
    pub line: usize,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, style: RunStyle, line: usize) -> Self {
        Self {
            text: text.into(),
            style,
            line,
        }
    }

    pub fn normal(text: impl Into<String>, line: usize) -> Self {
        Self::new(text, RunStyle::Normal, line)
    }

    pub fn bold(text: impl Into<String>, line: usize) -> Self {
        Self::new(text, RunStyle::Bold, line)
    }

    pub fn bullet(text: impl Into<String>, line: usize) -> Self {
        Self::new(text, RunStyle::Bullet, line)
    }
}
