//! Line-oriented parsing of bold spans and bullet lines

use once_cell::sync::Lazy;
use regex::Regex;

use super::elements::{RunStyle, StyledRun};

/// Shortest span between two `**` markers
static BOLD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Marker that turns a whole line into a list item
const BULLET_PREFIX: &str = "* ";

/// Parser switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Expand `**bold**` spans inside bullet lines.
    ///
    /// Off by default: bullet text is emitted verbatim, markers included.
    pub bold_in_bullets: bool,
}

/// Render with default options
pub fn render(input: &str) -> Vec<StyledRun> {
    render_with(input, &RenderOptions::default())
}

/// Render `input` into runs, line by line
pub fn render_with(input: &str, options: &RenderOptions) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    if input.is_empty() {
        return runs;
    }

    for (line_no, line) in input.split('\n').enumerate() {
        match line.strip_prefix(BULLET_PREFIX) {
            Some(item) if options.bold_in_bullets => {
                // Leading Bullet run is always present so the line stays a bullet
                let first = runs.len();
                scan_bold(item, line_no, RunStyle::Bullet, &mut runs);
                if runs[first].style != RunStyle::Bullet {
                    runs.insert(first, StyledRun::bullet("", line_no));
                }
            }
            Some(item) => runs.push(StyledRun::bullet(item, line_no)),
            None => scan_bold(line, line_no, RunStyle::Normal, &mut runs),
        }
    }

    runs
}

/// Split one line into literal and bold runs.
///
/// Always emits at least one run. An empty tail is dropped once the line has
/// produced something; an unmatched `**` stays in the literal text.
fn scan_bold(line: &str, line_no: usize, literal: RunStyle, runs: &mut Vec<StyledRun>) {
    let start_len = runs.len();
    let mut cursor = 0;

    for caps in BOLD_REGEX.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if cursor < whole.start() {
            runs.push(StyledRun::new(&line[cursor..whole.start()], literal, line_no));
        }
        runs.push(StyledRun::bold(inner.as_str(), line_no));
        cursor = whole.end();
    }

    let tail = &line[cursor..];
    if !tail.is_empty() || runs.len() == start_len {
        runs.push(StyledRun::new(tail, literal, line_no));
    }
}
