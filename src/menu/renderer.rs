#![warn(clippy::all, clippy::pedantic)]

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};
use std::time::{Duration, Instant};

use super::main_menu::render_main_menu_options;
use super::title::{TITLE_HEIGHT, render_ascii_title};
use crate::config::Config;
use crate::menu_types::{Menu, MenuState};

pub struct MenuRenderer {
    pub title_colors: Vec<Color>,
    pub color_offset: usize,
    pub color_change_time: Instant,
    color_cycle_interval: Duration,
}

impl Default for MenuRenderer {
    fn default() -> Self {
        let display = Config::current().display;

        Self {
            title_colors: display.title_colors.into_iter().map(Color::from).collect(),
            color_offset: 0,
            color_change_time: Instant::now(),
            color_cycle_interval: Duration::from_millis(display.title_color_cycle_interval_ms),
        }
    }
}

impl MenuRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the title color cycle
    pub fn update(&mut self) {
        if self.color_change_time.elapsed() >= self.color_cycle_interval {
            self.color_offset = self.color_offset.wrapping_add(1);
            self.color_change_time = Instant::now();
        }
    }

    pub fn render_menu(&self, f: &mut Frame, menu: &Menu, best_score: Option<u32>) {
        if menu.state != MenuState::MainMenu {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT + 4),
                Constraint::Length(4),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(f.area());

        render_ascii_title(f, chunks[0], &self.title_colors, self.color_offset);
        render_main_menu_options(f, centered_rect(20, 4, chunks[1]), menu);

        if let Some(best) = best_score.filter(|best| *best > 0) {
            let best_line = Paragraph::new(format!("Best: {best}"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(best_line, chunks[2]);
        }

        let hint = Paragraph::new("↑/↓: Select   Enter: Play   Q: Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, chunks[3]);
    }
}

#[must_use]
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + r.width.saturating_sub(width) / 2;
    let y = r.y + r.height.saturating_sub(height) / 2;

    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
