//! Notice banner
//!
//! One-line warning/error messages shown at the bottom of the screen.
//! Expire after a few seconds or when dismissed with Esc.

use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::tui::themes::Theme;

/// How long a notice stays visible
const NOTICE_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: String,
    created: Instant,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, "Input Error", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, "Error", message)
    }

    fn new(kind: NoticeKind, title: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            title,
            message: message.into(),
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= NOTICE_TTL
    }
}

/// Render the notice into a one-row area
pub fn render_notice(notice: &Notice, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let color = match notice.kind {
        NoticeKind::Warning => theme.warning_color,
        NoticeKind::Error => theme.error_color,
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {}: ", notice.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(notice.message.clone(), Style::default().fg(theme.text_color)),
        Span::styled("  (Esc to dismiss)", Style::default().fg(theme.dim_color)),
    ]);
    Paragraph::new(line).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let warning = Notice::warning("Please enter a prompt.");
        assert_eq!(warning.kind, NoticeKind::Warning);
        assert_eq!(warning.title, "Input Error");
        assert!(!warning.is_expired());

        let error = Notice::error("An error occurred: boom");
        assert_eq!(error.kind, NoticeKind::Error);
        assert_eq!(error.title, "Error");
    }

    #[test]
    fn test_render_contains_message() {
        let theme = crate::tui::themes::definitions::darkly();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        render_notice(&Notice::warning("Please enter a prompt."), area, &mut buf, &theme);
        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.contains("Input Error: Please enter a prompt."));
    }
}
