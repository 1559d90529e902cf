use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color palette for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub input_bg: Color,
    pub row_bg: Color,
    pub selection_bg: Color,
}

impl Theme {
    /// Dark palette
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x11, 0x18, 0x27),
            text: Color::Rgb(0xE5, 0xE7, 0xEB),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            highlight: Color::Rgb(0x60, 0xA5, 0xFA),
            red: Color::Rgb(0xF8, 0x71, 0x71),
            yellow: Color::Rgb(0xFA, 0xCC, 0x15),
            green: Color::Rgb(0x4A, 0xDE, 0x80),
            input_bg: Color::Rgb(0x37, 0x41, 0x51),
            row_bg: Color::Rgb(0x1F, 0x29, 0x37),
            selection_bg: Color::Rgb(0x1E, 0x3A, 0x8A),
        }
    }

    /// Light palette
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x11, 0x18, 0x27),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x9C, 0xA3, 0xAF),
            highlight: Color::Rgb(0x25, 0x63, 0xEB),
            red: Color::Rgb(0xDC, 0x26, 0x26),
            yellow: Color::Rgb(0xCA, 0x8A, 0x04),
            green: Color::Rgb(0x16, 0xA3, 0x4A),
            input_bg: Color::Rgb(0xF3, 0xF4, 0xF6),
            row_bg: Color::Rgb(0xE5, 0xE7, 0xEB),
            selection_bg: Color::Rgb(0xBF, 0xDB, 0xFE),
        }
    }

    /// Palette for the given display mode, with `[ui.colors.*]` overrides applied
    pub fn for_mode(dark: bool, ui: &UiConfig) -> Self {
        if dark {
            Theme::dark().with_overrides(&ui.colors.dark)
        } else {
            Theme::light().with_overrides(&ui.colors.light)
        }
    }

    fn with_overrides(mut self, colors: &HashMap<String, String>) -> Self {
        for (key, value) in colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring invalid color {} = {:?}", key, value);
                continue;
            };
            match key.as_str() {
                "background" => self.background = color,
                "text" => self.text = color,
                "text_bright" => self.text_bright = color,
                "dim" => self.dim = color,
                "highlight" => self.highlight = color,
                "red" => self.red = color,
                "yellow" => self.yellow = color,
                "green" => self.green = color,
                "input_bg" => self.input_bg = color,
                "row_bg" => self.row_bg = color,
                "selection_bg" => self.selection_bg = color,
                _ => log::warn!("ignoring unknown color slot {}", key),
            }
        }
        self
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
