//! Styled runs to wrapped Ratatui lines
//!
//! All width calculations use unicode display width, not byte length, so
//! CJK titles and emoji wrap correctly.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use animerec_core::{RunStyle, StyledRun};

use super::themes::Theme;

/// Prefix for the first wrapped row of a bullet line
const BULLET_FIRST: &str = "  • ";
/// Prefix for continuation rows of a bullet line
const BULLET_CONT: &str = "    ";

/// A word or whitespace run with its style
struct Piece {
    text: String,
    style: Style,
    is_space: bool,
}

/// Render runs into lines wrapped at `width` display columns
pub fn render_runs(runs: &[StyledRun], width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut start = 0;

    while start < runs.len() {
        let line_no = runs[start].line;
        let end = runs[start..]
            .iter()
            .position(|r| r.line != line_no)
            .map_or(runs.len(), |offset| start + offset);
        render_logical_line(&runs[start..end], width, theme, &mut lines);
        start = end;
    }

    lines
}

fn render_logical_line(
    runs: &[StyledRun],
    width: usize,
    theme: &Theme,
    out: &mut Vec<Line<'static>>,
) {
    let is_bullet = runs.first().is_some_and(|r| r.style == RunStyle::Bullet);
    let (first_prefix, cont_prefix) = if is_bullet {
        (BULLET_FIRST, BULLET_CONT)
    } else {
        ("", "")
    };

    let pieces = split_pieces(runs, theme);
    let prefix_style = theme.run_style(RunStyle::Bullet);
    let rows = wrap_pieces(pieces, width.saturating_sub(first_prefix.width()).max(1));

    for (i, row) in rows.into_iter().enumerate() {
        let prefix = if i == 0 { first_prefix } else { cont_prefix };
        let mut spans = Vec::with_capacity(row.len() + 1);
        if !prefix.is_empty() {
            spans.push(Span::styled(prefix, prefix_style));
        }
        spans.extend(row);
        out.push(Line::from(spans));
    }
}

/// Break runs into words and whitespace, normalizing tabs and carriage returns
fn split_pieces(runs: &[StyledRun], theme: &Theme) -> Vec<Piece> {
    let mut pieces: Vec<Piece> = Vec::new();

    for run in runs {
        let style = theme.run_style(run.style);
        let text = run.text.replace('\t', "    ").replace('\r', "");
        for ch in text.chars() {
            let is_space = ch == ' ';
            match pieces.last_mut() {
                Some(last) if last.is_space == is_space && last.style == style => {
                    last.text.push(ch);
                }
                _ => pieces.push(Piece {
                    text: ch.to_string(),
                    style,
                    is_space,
                }),
            }
        }
    }

    pieces
}

/// Greedy word wrap over styled pieces.
///
/// Whitespace at a break is dropped; words longer than `max_width` are
/// force-broken by character. Always returns at least one (possibly empty) row.
fn wrap_pieces(pieces: Vec<Piece>, max_width: usize) -> Vec<Vec<Span<'static>>> {
    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new()];
    let mut col = 0usize;

    for piece in pieces {
        let piece_width = piece.text.width();

        if piece.is_space {
            if col + piece_width <= max_width {
                push_span(rows.last_mut(), piece.text, piece.style);
                col += piece_width;
            } else {
                rows.push(Vec::new());
                col = 0;
            }
            continue;
        }

        if col > 0 && col + piece_width > max_width {
            if let Some(row) = rows.last_mut() {
                trim_row_end(row);
            }
            rows.push(Vec::new());
            col = 0;
        }

        if piece_width <= max_width {
            push_span(rows.last_mut(), piece.text, piece.style);
            col += piece_width;
            continue;
        }

        // Word longer than a whole row
        let mut chunk = String::new();
        for c in piece.text.chars() {
            let char_width = c.width().unwrap_or(0);
            if col + char_width > max_width && col > 0 {
                push_span(rows.last_mut(), std::mem::take(&mut chunk), piece.style);
                rows.push(Vec::new());
                col = 0;
            }
            chunk.push(c);
            col += char_width;
        }
        if !chunk.is_empty() {
            push_span(rows.last_mut(), chunk, piece.style);
        }
    }

    rows
}

/// Drop whitespace left at the end of a finished row
fn trim_row_end(row: &mut Vec<Span<'static>>) {
    while let Some(last) = row.last_mut() {
        let trimmed_len = last.content.trim_end_matches(' ').len();
        if trimmed_len > 0 {
            last.content.to_mut().truncate(trimmed_len);
            return;
        }
        row.pop();
    }
}

/// Append text to the row, merging with the previous span when styles match
fn push_span(row: Option<&mut Vec<Span<'static>>>, text: String, style: Style) {
    let Some(row) = row else {
        return;
    };
    if let Some(last) = row.last_mut() {
        if last.style == style {
            last.content.to_mut().push_str(&text);
            return;
        }
    }
    row.push(Span::styled(text, style));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::definitions;
    use animerec_core::render;

    fn texts(lines: &[Line<'static>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_one_row_per_short_line() {
        let theme = definitions::darkly();
        let lines = render_runs(&render("Hello\n\n**Bold** move"), 40, &theme);
        assert_eq!(texts(&lines), vec!["Hello", "", "Bold move"]);
    }

    #[test]
    fn test_bold_span_styled() {
        let theme = definitions::darkly();
        let lines = render_runs(&render("try **Mushishi** next"), 40, &theme);
        let spans = &lines[0].spans;
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, "Mushishi");
        assert_eq!(spans[1].style, theme.run_style(RunStyle::Bold));
        assert_eq!(spans[0].style, theme.run_style(RunStyle::Normal));
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        let theme = definitions::darkly();
        let lines = render_runs(&render("the quick brown fox jumps"), 10, &theme);
        assert_eq!(texts(&lines), vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_bullet_hanging_indent() {
        let theme = definitions::darkly();
        let lines = render_runs(&render("* alpha beta gamma"), 14, &theme);
        assert_eq!(texts(&lines), vec!["  • alpha beta", "    gamma"]);
    }

    #[test]
    fn test_long_word_force_broken() {
        let theme = definitions::darkly();
        let lines = render_runs(&render("superlongword"), 5, &theme);
        assert_eq!(texts(&lines), vec!["super", "longw", "ord"]);
    }

    #[test]
    fn test_wide_characters() {
        let theme = definitions::darkly();
        // Each CJK character is two columns wide
        let lines = render_runs(&render("進撃の巨人"), 4, &theme);
        assert_eq!(texts(&lines), vec!["進撃", "の巨", "人"]);
    }

    #[test]
    fn test_carriage_returns_dropped() {
        let theme = definitions::darkly();
        let lines = render_runs(&render("one\r\ntwo\r"), 20, &theme);
        assert_eq!(texts(&lines), vec!["one", "two"]);
    }
}
