#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting title widths to u16 since the title is a few dozen cells
    clippy::cast_possible_truncation
)]

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Text,
    widgets::Paragraph,
};

use super::renderer::centered_rect;

// ASCII art letters for "STACK" title
pub const TITLE_LETTERS: [&str; 5] = [
    // S
    " ████\n█    \n ███ \n    █\n████ ",
    // T
    "█████\n  █  \n  █  \n  █  \n  █  ",
    // A
    " ███ \n█   █\n█████\n█   █\n█   █",
    // C
    " ████\n█    \n█    \n█    \n ████",
    // K
    "█   █\n█  █ \n███  \n█  █ \n█   █",
];

pub const TITLE_HEIGHT: u16 = 5;
const LETTER_SPACING: u16 = 1;

fn letter_width(letter: &str) -> u16 {
    letter
        .lines()
        .next()
        .map_or(0, |line| line.chars().count() as u16)
}

#[must_use]
pub fn title_width() -> u16 {
    let letters: u16 = TITLE_LETTERS.iter().map(|letter| letter_width(letter)).sum();
    letters + LETTER_SPACING * (TITLE_LETTERS.len() as u16 - 1)
}

/// Renders the ASCII art title, shifting the palette by `color_offset`
pub fn render_ascii_title(f: &mut Frame, area: Rect, colors: &[Color], color_offset: usize) {
    let title_area = centered_rect(title_width(), TITLE_HEIGHT, area);
    let mut current_x = title_area.x;

    for (i, letter) in TITLE_LETTERS.iter().enumerate() {
        let width = letter_width(letter);
        let letter_area = Rect::new(current_x, title_area.y, width, TITLE_HEIGHT)
            .intersection(area);

        let color = if colors.is_empty() {
            Color::White
        } else {
            colors[(i + color_offset) % colors.len()]
        };

        let paragraph = Paragraph::new(Text::from(*letter)).style(Style::default().fg(color));
        f.render_widget(paragraph, letter_area);

        current_x = current_x.saturating_add(width + LETTER_SPACING);
    }
}
