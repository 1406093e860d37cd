use super::super::Theme;
use ratatui::style::Color;

/// Darkly - the default dark theme
pub fn darkly() -> Theme {
    Theme {
        name: "darkly".to_string(),
        display_name: "Darkly".to_string(),
        // Core colors
        bg_color: Color::Rgb(34, 34, 34),       // Near-black window
        border_color: Color::Rgb(68, 68, 68),   // Secondary gray
        title_color: Color::Rgb(55, 90, 127),   // Primary blue
        accent_color: Color::Rgb(52, 152, 219), // Info blue
        text_color: Color::Rgb(255, 255, 255),
        dim_color: Color::Rgb(136, 136, 136),
        // Special colors
        warning_color: Color::Rgb(243, 156, 18),
        error_color: Color::Rgb(231, 76, 60),
        info_color: Color::Rgb(0, 188, 140), // Success green
        // Input & panels
        input_bg_color: Color::Rgb(48, 48, 48),
        input_border_color: Color::Rgb(68, 68, 68),
        focus_border_color: Color::Rgb(55, 90, 127),
        output_bg_color: Color::Rgb(40, 44, 52), // Editor-dark panel
        progress_color: Color::Rgb(52, 152, 219),
        scrollbar_bg_color: Color::Rgb(48, 48, 48),
        scrollbar_fg_color: Color::Rgb(102, 102, 102),
        // Response markup
        header_color: Color::Rgb(255, 215, 0),    // Gold
        subheader_color: Color::Rgb(173, 255, 47), // Green-yellow
        bold_color: Color::Rgb(255, 255, 255),
        bullet_color: Color::Rgb(144, 238, 144), // Light green
    }
}
