//! Application state and main loop

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::text::Line;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedReceiver;

use animerec_core::{CompletionBackend, Config, RenderOptions, Session, StyledRun};

use super::animation::LoadingIndicator;
use super::components::Notice;
use super::handlers::query::QueryOutcome;
use super::input::LineInput;
use super::markup::render_runs;
use super::themes::Theme;

/// Frame interval for animations and channel polling
const TICK_RATE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title entry and first recommendation
    Main,
    /// Aspect entry and refined recommendation
    Details,
}

/// Scrollable panel of rendered response text
#[derive(Default)]
pub struct OutputPanel {
    runs: Vec<StyledRun>,
    scroll: usize,
    max_scroll: usize,
    viewport_height: usize,
    /// Wrapped lines for the last render width
    cache: Option<(usize, Arc<Vec<Line<'static>>>)>,
}

impl OutputPanel {
    pub fn set_runs(&mut self, runs: Vec<StyledRun>) {
        self.runs = runs;
        self.scroll = 0;
        self.cache = None;
    }

    pub fn clear(&mut self) {
        self.set_runs(Vec::new());
    }

    #[cfg(test)]
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Wrapped lines for `width`, re-rendered only when the width changes
    pub fn lines(&mut self, width: usize, theme: &Theme) -> Arc<Vec<Line<'static>>> {
        if let Some((cached_width, lines)) = &self.cache {
            if *cached_width == width {
                return Arc::clone(lines);
            }
        }
        let lines = Arc::new(render_runs(&self.runs, width, theme));
        self.cache = Some((width, Arc::clone(&lines)));
        lines
    }

    /// Record the viewport after layout and clamp the scroll offset
    pub fn update_viewport(&mut self, total_lines: usize, height: usize) {
        self.viewport_height = height;
        self.max_scroll = total_lines.saturating_sub(height);
        self.scroll = self.scroll.min(self.max_scroll);
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn max_scroll(&self) -> usize {
        self.max_scroll
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll);
    }

    pub fn page_size(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }
}

/// Per-screen widgets
#[derive(Default)]
pub struct ScreenState {
    pub input: LineInput,
    pub output: OutputPanel,
    pub indicator: LoadingIndicator,
}

/// Receivers for in-flight queries; `Some` means a request is running
#[derive(Default)]
pub struct AsyncChannels {
    pub recommendation: Option<UnboundedReceiver<QueryOutcome>>,
    pub details: Option<UnboundedReceiver<QueryOutcome>>,
}

pub struct App {
    pub screen: Screen,
    pub theme: Theme,
    pub session: Session,
    pub backend: Arc<dyn CompletionBackend>,
    pub render_options: RenderOptions,
    /// Label the first response line as a header
    pub title_first_line: bool,
    pub main: ScreenState,
    pub details: ScreenState,
    /// Becomes true after the first successful recommendation
    pub details_enabled: bool,
    pub channels: AsyncChannels,
    pub notice: Option<Notice>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, theme: Theme, backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            screen: Screen::Main,
            theme,
            session: Session::new(config.prompt_builder()),
            backend,
            render_options: config.render_options(),
            title_first_line: config.render.title_first_line,
            main: ScreenState::default(),
            details: ScreenState::default(),
            details_enabled: false,
            channels: AsyncChannels::default(),
            notice: None,
            should_quit: false,
        }
    }

    /// State of the screen currently shown
    pub fn active(&mut self) -> &mut ScreenState {
        match self.screen {
            Screen::Main => &mut self.main,
            Screen::Details => &mut self.details,
        }
    }

    pub fn is_loading(&self, screen: Screen) -> bool {
        match screen {
            Screen::Main => self.channels.recommendation.is_some(),
            Screen::Details => self.channels.details.is_some(),
        }
    }

    pub fn switch_to_details(&mut self) {
        self.screen = Screen::Details;
    }

    pub fn switch_to_main(&mut self) {
        self.screen = Screen::Main;
    }

    /// Advance animations and expire notices. Returns true if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        let main = self.main.indicator.tick();
        let details = self.details.indicator.tick();
        let expired = self.notice.as_ref().is_some_and(|n| n.is_expired());
        if expired {
            self.notice = None;
        }
        main || details || expired
    }

    /// Run the event loop until the user quits
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(TICK_RATE);
        let mut needs_redraw = true;

        while !self.should_quit {
            if needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                needs_redraw = false;
            }

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                        needs_redraw = true;
                    }
                    Some(Ok(Event::Resize(_, _))) => needs_redraw = true,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                _ = ticker.tick() => {
                    needs_redraw |= self.tick();
                }
            }

            needs_redraw |= self.poll_queries().needs_redraw;
        }

        Ok(())
    }
}
