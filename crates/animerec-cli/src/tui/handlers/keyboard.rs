//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Screen};
use crate::tui::input::InputAction;

impl App {
    /// Route a key press to global bindings, then the active screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::Esc && self.notice.is_some() {
            self.notice = None;
            return;
        }

        if self.handle_scroll_key(key.code) {
            return;
        }

        match self.screen {
            Screen::Main => self.handle_main_key(key),
            Screen::Details => self.handle_details_key(key),
        }
    }

    fn handle_scroll_key(&mut self, code: KeyCode) -> bool {
        let output = &mut self.active().output;
        match code {
            KeyCode::PageUp => output.scroll_up(output.page_size()),
            KeyCode::PageDown => output.scroll_down(output.page_size()),
            KeyCode::Up => output.scroll_up(1),
            KeyCode::Down => output.scroll_down(1),
            _ => return false,
        }
        true
    }

    fn handle_main_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Tab {
            // Details stay locked until a recommendation has arrived
            if self.details_enabled {
                self.switch_to_details();
            }
            return;
        }

        if let InputAction::Submit(title) = self.main.input.handle_key(key.code, key.modifiers) {
            self.submit_recommendation(&title);
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::BackTab) {
            self.switch_to_main();
            return;
        }

        if let InputAction::Submit(aspects) = self.details.input.handle_key(key.code, key.modifiers)
        {
            self.submit_details(&aspects);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use animerec_core::{ApiError, CompletionBackend, Config};
    use async_trait::async_trait;

    use super::*;
    use crate::tui::components::Notice;
    use crate::tui::themes::definitions::darkly;

    struct UnusedBackend;

    #[async_trait]
    impl CompletionBackend for UnusedBackend {
        async fn complete(&self, _prompt: &str) -> Result<String, ApiError> {
            Ok(String::new())
        }
    }

    fn app() -> App {
        let config = Config::from_sources(None, |key| {
            (key == animerec_core::config::API_KEY_ENV).then(|| "k".to_string())
        })
        .unwrap();
        App::new(&config, darkly(), Arc::new(UnusedBackend))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_goes_to_active_input() {
        let mut app = app();
        for c in "Naruto".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.main.input.content(), "Naruto");
        assert_eq!(app.details.input.content(), "");
    }

    #[test]
    fn test_tab_locked_until_details_enabled() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Main);

        app.details_enabled = true;
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Details);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Main);
    }

    #[test]
    fn test_esc_dismisses_notice_before_navigating() {
        let mut app = app();
        app.details_enabled = true;
        app.switch_to_details();
        app.notice = Some(Notice::warning("Please enter a prompt."));

        press(&mut app, KeyCode::Esc);
        assert!(app.notice.is_none());
        assert_eq!(app.screen, Screen::Details);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Main);
    }

    #[test]
    fn test_enter_on_blank_title_warns() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.notice.as_ref().map(|n| n.message.as_str()),
            Some("Please enter a prompt.")
        );
    }

    #[test]
    fn test_scroll_keys_move_active_output() {
        let mut app = app();
        app.main.output.update_viewport(40, 10);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.main.output.scroll(), 9);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.main.output.scroll(), 8);
        assert_eq!(app.details.output.scroll(), 0);
    }
}
