//! Terminal UI
//!
//! Two screens over one event loop: pick a title, then refine by liked
//! aspects. Backend calls run on spawned tasks and report back over
//! channels polled each frame.

pub mod animation;
pub mod app;
pub mod components;
pub mod handlers;
pub mod input;
pub mod markup;
pub mod polling;
pub mod themes;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use animerec_core::{CompletionBackend, Config};

pub use app::App;
use themes::Theme;

/// Run the interactive UI until the user quits
pub async fn run(
    config: &Config,
    theme: Theme,
    backend: Arc<dyn CompletionBackend>,
    title: Option<&str>,
) -> Result<()> {
    let mut app = App::new(config, theme, backend);
    if let Some(title) = title {
        app.main.input.set_content(title);
    }

    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = app.run(&mut terminal).await;

    restore_terminal()?;
    terminal.show_cursor()?;
    result
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Leave raw mode before the default hook prints a panic
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}
