//! Non-interactive `recommend` command
//!
//! Runs the same two-step flow as the TUI and prints the rendered reply.

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use crossterm::style::Stylize;
use tracing::info;

use animerec_core::markup::{label_line, to_plain};
use animerec_core::{render_with, CompletionBackend, Config, RunStyle, Session, StyledRun};

/// What to ask for and how to print it
#[derive(Debug, Clone, Default)]
pub struct OneShotRequest {
    pub title: String,
    pub aspects: Option<String>,
    /// Drop markers and colors
    pub plain: bool,
}

/// Fetch a recommendation, and details if aspects were given, writing both to `out`
pub async fn run<W: Write>(
    config: &Config,
    backend: &dyn CompletionBackend,
    request: &OneShotRequest,
    out: &mut W,
) -> Result<()> {
    let mut session = Session::new(config.prompt_builder());
    let options = config.render_options();

    let prompt = session
        .begin_recommendation(&request.title)
        .ok_or_else(|| anyhow!("Please enter a prompt."))?;
    info!(title = request.title.trim(), "One-shot recommendation");
    let text = backend
        .complete(&prompt)
        .await
        .context("An error occurred")?;

    let mut runs = render_with(&text, &options);
    if config.render.title_first_line {
        label_line(&mut runs, 0, RunStyle::Header);
    }
    write_runs(out, &runs, request.plain)?;

    if let Some(aspects) = &request.aspects {
        let prompt = session.details_prompt(aspects)?;
        let text = backend
            .complete(&prompt)
            .await
            .context("An error occurred")?;
        writeln!(out)?;
        let heading = "Detailed Recommendation";
        if request.plain {
            writeln!(out, "{heading}")?;
        } else {
            writeln!(out, "{}", heading.bold().underlined())?;
        }
        write_runs(out, &render_with(&text, &options), request.plain)?;
    }

    Ok(())
}

/// Print runs line by line, styled for a terminal or as plain text
pub fn write_runs<W: Write>(out: &mut W, runs: &[StyledRun], plain: bool) -> Result<()> {
    if plain {
        let text = to_plain(runs);
        if !text.is_empty() {
            writeln!(out, "{text}")?;
        }
        return Ok(());
    }

    let mut current_line = None;
    for run in runs {
        let starts_line = current_line != Some(run.line);
        if let Some(prev) = current_line {
            for _ in prev..run.line {
                writeln!(out)?;
            }
        }
        current_line = Some(run.line);

        let text = run.text.as_str();
        match run.style {
            RunStyle::Header => write!(out, "{}", text.bold().yellow())?,
            RunStyle::Subheader => write!(out, "{}", text.italic().green())?,
            RunStyle::Bold => write!(out, "{}", text.bold())?,
            RunStyle::Bullet => {
                if starts_line {
                    write!(out, "{}", "  • ".green())?;
                }
                write!(out, "{}", text.green())?;
            }
            RunStyle::Normal => write!(out, "{text}")?,
        }
    }
    if current_line.is_some() {
        writeln!(out)?;
    }
    Ok(())
}
