use ratatui::style::Color;
use serde::{Deserialize, Serialize};

// Terminal presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub board_columns: u16,
    pub show_overhang: bool,
    pub screen_shake: bool,
    pub particle_max_count: usize,
    pub title_color_cycle_interval_ms: u64,
    pub title_colors: Vec<TitleColor>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            board_columns: 60,
            show_overhang: true,
            screen_shake: true,
            particle_max_count: 120,
            title_color_cycle_interval_ms: 150,
            title_colors: vec![
                TitleColor::Red,
                TitleColor::Yellow,
                TitleColor::Green,
                TitleColor::Cyan,
                TitleColor::Blue,
                TitleColor::Magenta,
            ],
        }
    }
}

// Supported colors for serialization/deserialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    Custom(u8, u8, u8),
}

impl From<TitleColor> for Color {
    fn from(color: TitleColor) -> Self {
        match color {
            TitleColor::Red => Color::Red,
            TitleColor::Green => Color::Green,
            TitleColor::Yellow => Color::Yellow,
            TitleColor::Blue => Color::Blue,
            TitleColor::Magenta => Color::Magenta,
            TitleColor::Cyan => Color::Cyan,
            TitleColor::White => Color::White,
            TitleColor::Gray => Color::Gray,
            TitleColor::Custom(r, g, b) => Color::Rgb(r, g, b),
        }
    }
}
