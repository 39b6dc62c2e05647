use ratatui::style::Color;

use crate::model::UiConfig;

/// Colors for the TUI. Defaults keep the terminal's own palette for text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub title: Color,
    /// Cursor marker on the selected row
    pub cursor: Color,
    /// Timestamps, placeholders and key hints
    pub dim: Color,
    pub id: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text: Color::Reset,
            title: Color::Reset,
            cursor: Color::Yellow,
            dim: Color::DarkGray,
            id: Color::Cyan,
        }
    }
}

/// `#RRGGBB` to an RGB color
fn parse_hex_color(value: &str) -> Option<Color> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring color {key} = {value:?}: expected #RRGGBB");
                continue;
            };
            match key.as_str() {
                "text" => theme.text = color,
                "title" => theme.title = color,
                "cursor" => theme.cursor = color,
                "dim" => theme.dim = color,
                "id" => theme.id = color,
                _ => log::warn!("ignoring unknown color slot {key}"),
            }
        }

        theme
    }
}
