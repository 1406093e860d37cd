use super::super::Theme;
use ratatui::style::Color;

/// Terminal theme - uses native terminal colors (ANSI 0-15)
/// so it follows whatever colorscheme the terminal is using.
pub fn terminal() -> Theme {
    let red = Color::Indexed(1);
    let green = Color::Indexed(2);
    let yellow = Color::Indexed(3);
    let blue = Color::Indexed(4);
    let cyan = Color::Indexed(6);
    let white = Color::Indexed(7);
    let bright_black = Color::Indexed(8); // Gray
    let bright_green = Color::Indexed(10);
    let bright_yellow = Color::Indexed(11);
    let bright_cyan = Color::Indexed(14);
    let bright_white = Color::Indexed(15);

    // Reset = terminal's default background
    let bg = Color::Reset;

    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),

        bg_color: bg,
        border_color: bright_black,
        title_color: bright_cyan,
        accent_color: cyan,
        text_color: white,
        dim_color: bright_black,

        warning_color: yellow,
        error_color: red,
        info_color: green,

        input_bg_color: bg,
        input_border_color: bright_black,
        focus_border_color: blue,
        output_bg_color: bg,
        progress_color: cyan,
        scrollbar_bg_color: bg,
        scrollbar_fg_color: bright_black,

        header_color: bright_yellow,
        subheader_color: bright_green,
        bold_color: bright_white,
        bullet_color: green,
    }
}
