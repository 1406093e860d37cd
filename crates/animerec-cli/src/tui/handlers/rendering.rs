//! UI rendering
//!
//! One layout shared by both screens: title bar, field label, input box,
//! progress/hint row, output panel and a status row for notices.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use crate::tui::app::{App, Screen};
use crate::tui::components::render_notice;

const APP_TITLE: &str = "Anime Recommender";

impl App {
    /// Draw one frame
    pub fn ui(&mut self, f: &mut Frame) {
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, f.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // label
                Constraint::Length(3), // input
                Constraint::Length(1), // progress or hints
                Constraint::Min(3),    // output
                Constraint::Length(1), // status
            ])
            .split(f.area().inner(Margin::new(1, 0)));

        self.render_title(f, chunks[0]);
        self.render_label(f, chunks[1]);
        self.render_input(f, chunks[2]);
        self.render_progress_row(f, chunks[3]);
        self.render_output(f, chunks[4]);
        self.render_status(f, chunks[5]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            APP_TITLE,
            Style::default()
                .fg(self.theme.title_color)
                .add_modifier(Modifier::BOLD),
        )];
        if self.screen == Screen::Details {
            let subject = self.session.subject().unwrap_or_default();
            spans.push(Span::styled(
                format!("  ›  Details for {subject}"),
                Style::default().fg(self.theme.accent_color),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_label(&self, f: &mut Frame, area: Rect) {
        let label = match self.screen {
            Screen::Main => "Which anime did you like?",
            Screen::Details => "What specific aspects did you like?",
        };
        let line = Line::styled(label, Style::default().fg(self.theme.text_color));
        f.render_widget(Paragraph::new(line), area);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        // Dimmed border while this screen waits on a query
        let border = if self.is_loading(self.screen) {
            self.theme.input_border_color
        } else {
            self.theme.focus_border_color
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(self.theme.input_bg_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let input = match self.screen {
            Screen::Main => &self.main.input,
            Screen::Details => &self.details.input,
        };
        let (visible, cursor_col) = input.visible_window(inner.width as usize);
        let text = Paragraph::new(visible.to_string())
            .style(Style::default().fg(self.theme.text_color));
        f.render_widget(text, inner);

        if inner.width > 0 && inner.height > 0 {
            let x = inner.x + (cursor_col as u16).min(inner.width - 1);
            f.set_cursor_position(Position::new(x, inner.y));
        }
    }

    fn render_progress_row(&self, f: &mut Frame, area: Rect) {
        let screen = self.screen;
        let indicator = match screen {
            Screen::Main => &self.main.indicator,
            Screen::Details => &self.details.indicator,
        };
        if indicator.is_active() {
            indicator.render(area, f.buffer_mut(), &self.theme);
            return;
        }

        let key = Style::default()
            .fg(self.theme.accent_color)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(self.theme.dim_color);
        let spans = match screen {
            Screen::Main => {
                let details = if self.details_enabled {
                    Style::default().fg(self.theme.info_color)
                } else {
                    dim
                };
                vec![
                    Span::styled("Enter", key),
                    Span::styled(" Generate Recommendation   ", dim),
                    Span::styled("Tab", key),
                    Span::styled(" I specifically like the following aspects", details),
                ]
            }
            Screen::Details => vec![
                Span::styled("Enter", key),
                Span::styled(" Generate Detailed Recommendation   ", dim),
                Span::styled("Esc", key),
                Span::styled(" Back", dim),
            ],
        };
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_output(&mut self, f: &mut Frame, area: Rect) {
        let title = match self.screen {
            Screen::Main => " Recommendation ",
            Screen::Details => " Detailed Recommendation ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border_color))
            .title(Span::styled(title, Style::default().fg(self.theme.title_color)))
            .style(Style::default().bg(self.theme.output_bg_color));
        let inner = block.inner(area);
        f.render_widget(block, area);
        if inner.width < 2 || inner.height == 0 {
            return;
        }

        // Last column is reserved for the scrollbar
        let text_area = Rect {
            width: inner.width - 1,
            ..inner
        };
        let screen = self.screen;
        let loading = self.is_loading(screen);
        let theme = self.theme.clone();
        let output = &mut self.active().output;

        if output.is_empty() {
            let placeholder = if loading {
                "Thinking..."
            } else {
                "Your recommendation will appear here."
            };
            let line = Line::styled(placeholder, Style::default().fg(theme.dim_color));
            f.render_widget(Paragraph::new(line), text_area);
            return;
        }

        let lines = output.lines(text_area.width as usize, &theme);
        let height = text_area.height as usize;
        output.update_viewport(lines.len(), height);

        let start = output.scroll();
        let end = (start + height).min(lines.len());
        let visible = lines[start..end].to_vec();
        f.render_widget(Paragraph::new(visible), text_area);

        if output.max_scroll() > 0 {
            let scrollbar_area = Rect {
                x: inner.x + inner.width - 1,
                width: 1,
                ..inner
            };
            let mut state = ScrollbarState::new(output.max_scroll()).position(output.scroll());
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .track_style(Style::default().fg(theme.scrollbar_bg_color))
                .thumb_style(Style::default().fg(theme.scrollbar_fg_color));
            f.render_stateful_widget(scrollbar, scrollbar_area, &mut state);
        }
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        if let Some(notice) = &self.notice {
            render_notice(notice, area, f.buffer_mut(), &self.theme);
            return;
        }
        let line = Line::styled(
            "Ctrl+C quit   PgUp/PgDn scroll",
            Style::default().fg(self.theme.dim_color),
        );
        f.render_widget(Paragraph::new(line), area);
    }
}
