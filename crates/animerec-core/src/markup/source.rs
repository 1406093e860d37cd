//! Turning runs back into text, and caller-side labeling

use super::elements::{RunStyle, StyledRun};

/// Reassemble the markup a run sequence was parsed from.
///
/// Restores `* ` before a line's leading bullet run, `**` around bold runs,
/// and one newline between lines. `to_source(&render(s)) == s` for any `s`.
pub fn to_source(runs: &[StyledRun]) -> String {
    let mut out = String::new();
    let mut current_line = None;

    for run in runs {
        let starts_line = current_line != Some(run.line);
        if let Some(prev) = current_line {
            for _ in prev..run.line {
                out.push('\n');
            }
        }
        current_line = Some(run.line);

        match run.style {
            RunStyle::Bullet if starts_line => {
                out.push_str("* ");
                out.push_str(&run.text);
            }
            RunStyle::Bold => {
                out.push_str("**");
                out.push_str(&run.text);
                out.push_str("**");
            }
            _ => out.push_str(&run.text),
        }
    }

    out
}

/// Text of the runs with markers dropped and lines joined by `\n`
pub fn to_plain(runs: &[StyledRun]) -> String {
    let mut out = String::new();
    let mut current_line = None;

    for run in runs {
        if let Some(prev) = current_line {
            for _ in prev..run.line {
                out.push('\n');
            }
        }
        current_line = Some(run.line);
        out.push_str(&run.text);
    }

    out
}

/// Mark the literal runs of one line as `Header` or `Subheader`.
///
/// Bold and bullet runs keep their style. Returns the number of runs changed.
pub fn label_line(runs: &mut [StyledRun], line: usize, style: RunStyle) -> usize {
    let mut changed = 0;
    for run in runs.iter_mut().filter(|r| r.line == line) {
        if run.style == RunStyle::Normal {
            run.style = style;
            changed += 1;
        }
    }
    changed
}
