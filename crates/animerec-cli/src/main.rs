//! animerec: anime recommendations in the terminal

mod logging;
mod oneshot;
mod tui;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueHint};
use tracing::info;

use animerec_core::{CompletionBackend, Config, GeminiClient};

use crate::oneshot::OneShotRequest;
use crate::tui::themes::{Theme, THEME_REGISTRY};

#[derive(Parser, Debug)]
#[command(
    name = "animerec",
    version,
    about = "Anime recommendations in your terminal.",
    long_about = None,
    propagate_version = true,
    disable_help_subcommand = true
)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,
    /// Model name, e.g. gemini-1.5-flash
    #[arg(long, global = true)]
    model: Option<String>,
    /// Color theme (see `animerec themes`)
    #[arg(long, global = true)]
    theme: Option<String>,
    /// Prefill the title field
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a recommendation without starting the UI
    Recommend {
        /// Anime you like
        #[arg(value_name = "TITLE")]
        title: String,
        /// Aspects you liked, for a detailed follow-up
        #[arg(long, value_name = "TEXT")]
        aspects: Option<String>,
        /// No colors or markers
        #[arg(long)]
        plain: bool,
    },
    /// List available themes
    Themes,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run_cli().await {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Themes) = cli.command {
        for theme in THEME_REGISTRY.all() {
            println!("{:<12} {}", theme.name, theme.display_name);
        }
        return Ok(());
    }

    let log_path = logging::init()?;
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(model) = cli.model {
        config.api.model = model;
    }
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }
    config.validate()?;
    let theme = resolve_theme(&config.ui.theme)?;
    info!(
        model = %config.api.model,
        theme = %theme.name,
        log = ?log_path,
        "Starting animerec"
    );

    let backend: Arc<dyn CompletionBackend> =
        Arc::new(GeminiClient::new(&config).context("creating API client")?);

    match cli.command {
        Some(Command::Recommend {
            title,
            aspects,
            plain,
        }) => {
            let request = OneShotRequest {
                title,
                aspects,
                plain,
            };
            let mut stdout = io::stdout().lock();
            oneshot::run(&config, backend.as_ref(), &request, &mut stdout).await
        }
        Some(Command::Themes) => Ok(()),
        None => tui::run(&config, theme, backend, cli.title.as_deref()).await,
    }
}

fn resolve_theme(name: &str) -> Result<Theme> {
    THEME_REGISTRY.get(name).cloned().ok_or_else(|| {
        let known: Vec<&str> = THEME_REGISTRY.names().collect();
        anyhow!("unknown theme '{name}' (available: {})", known.join(", "))
    })
}
