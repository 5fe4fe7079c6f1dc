use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

// Sea palette - light colors for dark background
pub const TEAL_PRIMARY: Color = Color::Rgb(120, 220, 220); // main brand color
pub const TEAL_LIGHT: Color = Color::Rgb(170, 240, 240); // highlights
pub const TEAL_ACCENT: Color = Color::Rgb(80, 190, 200); // borders
pub const SHORTCUT_KEY: Color = Color::Rgb(255, 170, 90); // shortcut keys (btop style)
pub const ACCENT_GREEN: Color = Color::Rgb(150, 230, 150); // good deals / scores
pub const ACCENT_YELLOW: Color = Color::Rgb(255, 230, 150); // medium deals / scores
pub const ERROR_RED: Color = Color::Rgb(255, 120, 120);
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180);
pub const TEXT_DIMMED: Color = Color::Rgb(90, 90, 90); // background when menu open
pub const BG_DARK: Color = Color::Rgb(10, 20, 28);
pub const BG_HIGHLIGHT: Color = Color::Rgb(30, 60, 75);

pub const LOGO: &str = "~ S H A R K D E A L ~";

/// Build a title with btop-style brackets
pub fn build_title(text: &str, border_color: Color, title_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("┐", Style::default().fg(border_color)),
        Span::styled(text.to_string(), Style::default().fg(title_color)),
        Span::styled("┌", Style::default().fg(border_color)),
    ])
}

/// Calculate vertical padding to center text within an area
pub fn vertical_padding(area_height: u16, text_lines: u16) -> String {
    let inner_height = area_height.saturating_sub(2); // Account for borders
    let padding = inner_height.saturating_sub(text_lines) / 2;
    "\n".repeat(padding as usize)
}

/// Color for a percentage where higher is better (discounts, review scores)
pub fn grade_color(value: u8, dimmed: bool) -> Color {
    if dimmed {
        TEXT_DIMMED
    } else if value >= 75 {
        ACCENT_GREEN
    } else if value >= 50 {
        ACCENT_YELLOW
    } else {
        TEXT_SECONDARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_centers_inside_borders() {
        assert_eq!(vertical_padding(12, 2), "\n\n\n\n");
        assert_eq!(vertical_padding(1, 1), "");
    }

    #[test]
    fn grades() {
        assert_eq!(grade_color(90, false), ACCENT_GREEN);
        assert_eq!(grade_color(60, false), ACCENT_YELLOW);
        assert_eq!(grade_color(10, false), TEXT_SECONDARY);
        assert_eq!(grade_color(90, true), TEXT_DIMMED);
    }
}
