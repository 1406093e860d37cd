//! Lookup of built-in themes by name

use super::definitions;
use super::Theme;

pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self {
            themes: vec![definitions::darkly(), definitions::terminal()],
        }
    }

    /// Find a theme by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name.as_str())
    }

    pub fn all(&self) -> &[Theme] {
        &self.themes
    }
}
