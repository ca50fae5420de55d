#![warn(clippy::all, clippy::pedantic)]

use crate::menu_types::{Menu, MenuOption};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

/// Renders the main menu options
pub fn render_main_menu_options(f: &mut Frame, area: Rect, menu: &Menu) {
    let selected = menu.selected_option.index();
    let mut lines = Vec::new();
    for (i, option) in MenuOption::ALL.iter().enumerate() {
        let style = if i == selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![Span::styled(option.label(), style)]));
    }
    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
