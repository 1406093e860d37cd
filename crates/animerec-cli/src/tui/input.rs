//! Single-line text input
//!
//! Holds the buffer and a byte-offset cursor that always sits on a char
//! boundary.

use crossterm::event::{KeyCode, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Maximum input length in bytes
const MAX_INPUT_LEN: usize = 500;

/// Result of handling a key in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Key consumed, nothing else to do
    Continue,
    /// Buffer contents changed
    ContentChanged,
    /// Enter pressed; carries the current buffer
    Submit(String),
    /// Key not handled by the input
    Ignored,
}

#[derive(Debug, Default, Clone)]
pub struct LineInput {
    buffer: String,
    cursor: usize,
}

impl LineInput {
    pub fn content(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set_content(&mut self, text: &str) {
        self.buffer = text.replace(['\n', '\r'], " ");
        self.buffer.truncate(floor_char_boundary(&self.buffer, MAX_INPUT_LEN));
        self.cursor = self.buffer.len();
    }

    /// Handle a key event; Enter submits without clearing the buffer
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> InputAction {
        match code {
            KeyCode::Enter => InputAction::Submit(self.buffer.clone()),
            // Ctrl+U - clear line
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                InputAction::ContentChanged
            }
            // Ctrl+W - delete word backwards
            KeyCode::Char('w') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word_backwards();
                InputAction::ContentChanged
            }
            // Ctrl+A / Ctrl+E - start / end of line
            KeyCode::Char('a') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
                InputAction::Continue
            }
            KeyCode::Char('e') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.buffer.len();
                InputAction::Continue
            }
            KeyCode::Char(_) if modifiers.contains(KeyModifiers::CONTROL) => InputAction::Ignored,
            KeyCode::Char(ch) => {
                if self.buffer.len() + ch.len_utf8() > MAX_INPUT_LEN {
                    return InputAction::Continue;
                }
                self.buffer.insert(self.cursor, ch);
                self.cursor += ch.len_utf8();
                InputAction::ContentChanged
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return InputAction::Continue;
                }
                let prev = self.prev_boundary(self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputAction::ContentChanged
            }
            KeyCode::Delete => {
                if self.cursor >= self.buffer.len() {
                    return InputAction::Continue;
                }
                let next = self.next_boundary(self.cursor);
                self.buffer.drain(self.cursor..next);
                InputAction::ContentChanged
            }
            KeyCode::Left => {
                self.cursor = self.prev_boundary(self.cursor);
                InputAction::Continue
            }
            KeyCode::Right => {
                self.cursor = self.next_boundary(self.cursor);
                InputAction::Continue
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputAction::Continue
            }
            KeyCode::End => {
                self.cursor = self.buffer.len();
                InputAction::Continue
            }
            _ => InputAction::Ignored,
        }
    }

    /// Visible slice of the buffer for a field `width` columns wide, plus
    /// the cursor column within that slice. Scrolls so the cursor stays visible.
    pub fn visible_window(&self, width: usize) -> (&str, usize) {
        let width = width.max(1);
        let before = &self.buffer[..self.cursor];
        let cursor_col = before.width();
        if cursor_col < width {
            return (&self.buffer, cursor_col);
        }

        // Drop leading chars until the cursor fits with one spare column
        let mut start = 0;
        let mut col = cursor_col;
        for (idx, ch) in before.char_indices() {
            if col < width {
                break;
            }
            start = idx + ch.len_utf8();
            col -= unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        }
        (&self.buffer[start..], col)
    }

    fn delete_word_backwards(&mut self) {
        let before = &self.buffer[..self.cursor];
        let trimmed = before.trim_end_matches(' ');
        let start = trimmed.rfind(' ').map_or(0, |i| i + 1);
        self.buffer.drain(start..self.cursor);
        self.cursor = start;
    }

    fn prev_boundary(&self, from: usize) -> usize {
        self.buffer[..from]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self, from: usize) -> usize {
        self.buffer[from..]
            .chars()
            .next()
            .map_or(from, |c| from + c.len_utf8())
    }
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    let mut idx = max;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut LineInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_typing_and_submit_keeps_buffer() {
        let mut input = LineInput::default();
        type_str(&mut input, "Naruto");
        assert_eq!(
            input.handle_key(KeyCode::Enter, KeyModifiers::NONE),
            InputAction::Submit("Naruto".to_string())
        );
        assert_eq!(input.content(), "Naruto");
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut input = LineInput::default();
        type_str(&mut input, "ナルト");
        input.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.content(), "ナル");
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        input.handle_key(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.content(), "ナ");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = LineInput::default();
        type_str(&mut input, "Bleh");
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        input.handle_key(KeyCode::Left, KeyModifiers::NONE);
        type_str(&mut input, "ac");
        assert_eq!(input.content(), "Blaceh");
    }

    #[test]
    fn test_ctrl_w_and_ctrl_u() {
        let mut input = LineInput::default();
        type_str(&mut input, "Fullmetal Alchemist  ");
        input.handle_key(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(input.content(), "Fullmetal ");
        input.handle_key(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(input.content(), "");
    }

    #[test]
    fn test_unknown_ctrl_chord_ignored() {
        let mut input = LineInput::default();
        assert_eq!(
            input.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL),
            InputAction::Ignored
        );
        assert_eq!(input.content(), "");
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        let mut input = LineInput::default();
        type_str(&mut input, "abcdefghij");
        let (visible, col) = input.visible_window(5);
        assert_eq!(visible, "ghij");
        assert_eq!(col, 4);

        input.handle_key(KeyCode::Home, KeyModifiers::NONE);
        let (visible, col) = input.visible_window(5);
        assert_eq!(visible, "abcdefghij");
        assert_eq!(col, 0);
    }

    #[test]
    fn test_set_content_strips_newlines() {
        let mut input = LineInput::default();
        input.set_content("Spy x\nFamily");
        assert_eq!(input.content(), "Spy x Family");
        let (_, col) = input.visible_window(80);
        assert_eq!(col, 12);
    }
}
