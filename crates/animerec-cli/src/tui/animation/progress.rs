//! Indeterminate progress bar
//!
//! A highlighted segment bouncing back and forth across the track.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::tui::themes::Theme;

const TRACK_CHAR: &str = "─";
const SEGMENT_CHAR: &str = "━";

#[derive(Debug, Default)]
pub struct LoadingIndicator {
    active: bool,
    frame: usize,
}

impl LoadingIndicator {
    pub fn start(&mut self) {
        self.active = true;
        self.frame = 0;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance one frame. Returns true if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        if self.active {
            self.frame = self.frame.wrapping_add(1);
        }
        self.active
    }

    /// Column range `[start, end)` of the moving segment on a track `width` wide
    pub fn segment(&self, width: u16) -> (u16, u16) {
        let seg_len = (width / 5).max(3).min(width);
        let travel = (width - seg_len) as usize;
        if travel == 0 {
            return (0, seg_len);
        }
        // Ping-pong over 0..=travel
        let period = travel * 2;
        let pos = self.frame % period;
        let start = if pos <= travel { pos } else { period - pos };
        (start as u16, start as u16 + seg_len)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.active || area.width == 0 || area.height == 0 {
            return;
        }
        let (seg_start, seg_end) = self.segment(area.width);
        let track = Style::default().fg(theme.border_color);
        let segment = Style::default().fg(theme.progress_color);

        for x in 0..area.width {
            let (symbol, style) = if (seg_start..seg_end).contains(&x) {
                (SEGMENT_CHAR, segment)
            } else {
                (TRACK_CHAR, track)
            };
            if let Some(cell) = buf.cell_mut((area.x + x, area.y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}
