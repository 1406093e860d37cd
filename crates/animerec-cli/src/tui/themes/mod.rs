//! Theme system for the animerec TUI

use ratatui::style::{Color, Modifier, Style};

use animerec_core::RunStyle;

pub mod definitions;
mod registry;

use once_cell::sync::Lazy;
pub use registry::ThemeRegistry;

/// Global theme registry with all built-in themes
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// A complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    // Core colors
    pub bg_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    pub text_color: Color,
    pub dim_color: Color,

    // Special colors
    pub warning_color: Color,
    pub error_color: Color,
    pub info_color: Color,

    // Input & panels
    pub input_bg_color: Color,
    pub input_border_color: Color,
    pub focus_border_color: Color,
    pub output_bg_color: Color,
    pub progress_color: Color,
    pub scrollbar_bg_color: Color,
    pub scrollbar_fg_color: Color,

    // Response markup
    pub header_color: Color,
    pub subheader_color: Color,
    pub bold_color: Color,
    pub bullet_color: Color,
}

impl Theme {
    /// Visual style for a markup run
    pub fn run_style(&self, style: RunStyle) -> Style {
        let base = Style::default().bg(self.output_bg_color);
        match style {
            RunStyle::Header => base.fg(self.header_color).add_modifier(Modifier::BOLD),
            RunStyle::Subheader => base.fg(self.subheader_color).add_modifier(Modifier::ITALIC),
            RunStyle::Bold => base.fg(self.bold_color).add_modifier(Modifier::BOLD),
            RunStyle::Bullet => base.fg(self.bullet_color),
            RunStyle::Normal => base.fg(self.text_color),
        }
    }
}
