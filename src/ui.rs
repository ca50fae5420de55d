#![allow(
    // Allow truncation when mapping world coordinates onto terminal cells
    clippy::cast_possible_truncation,
    // Allow sign loss for the same mapping since coordinates are clamped non-negative first
    clippy::cast_sign_loss,
    // Allow precision loss when converting cell counts to f32
    clippy::cast_precision_loss
)]

use crate::app::App;
use crate::block::Block as Slab;
use crate::components::{Particle, ScreenShake};
use crate::config::Config;
use crate::game::BLOCK_HEIGHT;
use crate::menu_types::MenuState;
use crate::stack::StackSnapshot;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

const INFO_WIDTH: u16 = 24;
const MIN_BOARD_HEIGHT: u16 = 12;
// Rows kept free above the falling block
const HEADROOM_ROWS: usize = 3;

pub fn render(f: &mut Frame, app: &mut App) {
    if app.menu.state == MenuState::MainMenu {
        app.menu_renderer
            .render_menu(f, &app.menu, app.best_score());
        return;
    }

    let display = Config::current().display;
    let board_width = display.board_columns + 2; // +2 for borders
    let min_total_width = board_width + INFO_WIDTH;
    let min_total_height = MIN_BOARD_HEIGHT + 4;

    if f.area().width < min_total_width || f.area().height < min_total_height {
        let warning_text = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Stack - Paused"));

        f.render_widget(warning_text, centered_rect(50, 30, f.area()));
        return;
    }

    // Apply screen shake to the entire frame
    let (shake_x, shake_y) = app.world.resource::<ScreenShake>().current_offset;
    let original_area = f.area();
    let shake_area = Rect {
        x: original_area.x.saturating_add_signed(shake_x),
        y: original_area.y.saturating_add_signed(shake_y),
        width: original_area.width,
        height: original_area.height,
    }
    .intersection(original_area);

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(INFO_WIDTH)])
        .split(shake_area);

    let game_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(MIN_BOARD_HEIGHT)])
        .split(main_layout[0]);

    let title = Paragraph::new("STACK")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, game_layout[0]);

    let snapshot = app.snapshot();
    render_board(f, app, &snapshot, game_layout[1], display.board_columns);
    render_info(f, app, &snapshot, main_layout[1], display.show_overhang);
}

/// Maps the tower onto a window of terminal rows that follows the falling block.
struct Viewport {
    area: Rect,
    columns: u16,
    scale: f32,
    bottom_row: usize,
}

impl Viewport {
    fn new(area: Rect, columns: u16, play_width: f32, top_row: usize) -> Self {
        let visible_rows = area.height as usize;
        Self {
            area,
            columns,
            scale: f32::from(columns) / play_width.max(1.0),
            bottom_row: (top_row + 1 + HEADROOM_ROWS).saturating_sub(visible_rows),
        }
    }

    fn row_of(y: f32) -> usize {
        (y.max(0.0) / BLOCK_HEIGHT) as usize
    }

    fn screen_y(&self, row: usize) -> Option<u16> {
        let offset = row.checked_sub(self.bottom_row)?;
        let offset = u16::try_from(offset).ok()?;
        if offset >= self.area.height {
            return None;
        }
        Some(self.area.bottom() - 1 - offset)
    }

    fn column_span(&self, left: f32, right: f32) -> (u16, u16) {
        let first = (left * self.scale).floor().max(0.0) as u16;
        let last = ((right * self.scale).ceil().max(0.0) as u16).min(self.columns);
        (first.min(self.columns), last)
    }
}

fn render_board(f: &mut Frame, app: &mut App, snapshot: &StackSnapshot, area: Rect, columns: u16) {
    let inner_area = Block::default().borders(Borders::ALL).inner(area);
    f.render_widget(Block::default().borders(Borders::ALL), area);

    let viewport = Viewport::new(
        inner_area,
        columns,
        snapshot.play_width,
        snapshot.placed.len(),
    );

    for block in &snapshot.placed {
        draw_slab(f, &viewport, block, "█");
    }
    if let Some(block) = &snapshot.falling {
        draw_slab(f, &viewport, block, "▓");
    }

    render_particles(f, app, &viewport);

    if snapshot.is_game_over() {
        let game_over = Paragraph::new("GAME OVER")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        let game_over_area = Rect {
            x: inner_area.x,
            y: inner_area.y + inner_area.height / 2,
            width: inner_area.width,
            height: 1,
        };
        f.render_widget(game_over, game_over_area);
    }
}

fn draw_slab(f: &mut Frame, viewport: &Viewport, block: &Slab, symbol: &str) {
    let Some(y) = viewport.screen_y(Viewport::row_of(block.y)) else {
        return;
    };
    let (first, last) = viewport.column_span(block.left(), block.right());
    let color = block.color.get_color();

    for column in first..last {
        let x = viewport.area.left() + column;
        if x >= viewport.area.right() {
            break;
        }
        if let Some(cell) = f.buffer_mut().cell_mut((x, y)) {
            cell.set_symbol(symbol);
            cell.set_fg(color);
            cell.set_bg(Color::Black);
        }
    }
}

fn render_particles(f: &mut Frame, app: &mut App, viewport: &Viewport) {
    let particles: Vec<Particle> = app
        .world
        .query::<&Particle>()
        .iter(&app.world)
        .cloned()
        .collect();

    for particle in particles {
        if particle.position.x < 0.0 || particle.position.y < 0.0 {
            continue;
        }
        let Some(y) = viewport.screen_y(Viewport::row_of(particle.position.y)) else {
            continue;
        };
        let column = (particle.position.x * viewport.scale) as u16;
        if column >= viewport.columns {
            continue;
        }

        let symbol = if particle.size > 0.7 {
            "█"
        } else if particle.size > 0.4 {
            "▓"
        } else {
            "▒"
        };

        if let Some(cell) = f
            .buffer_mut()
            .cell_mut((viewport.area.left() + column, y))
        {
            cell.set_symbol(symbol);
            cell.set_fg(particle.color);
        }
    }
}

fn render_info(f: &mut Frame, app: &App, snapshot: &StackSnapshot, area: Rect, show_overhang: bool) {
    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(6), // Score block
            Constraint::Length(4), // Combo and feedback
            Constraint::Min(5),    // Controls
        ])
        .split(area);

    let info_title = Paragraph::new("INFO")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info_title, info_layout[0]);

    let best = app
        .best_score()
        .map_or_else(|| "-".to_string(), |best| best.max(snapshot.score).to_string());
    let basic_stats = format!(
        "Mode: {}\nScore: {}\nBest: {}\nLevel: {}\nHeight: {}",
        snapshot.mode.label(),
        snapshot.score,
        best,
        snapshot.level,
        snapshot.placed.len(),
    );
    f.render_widget(
        Paragraph::new(basic_stats).wrap(Wrap { trim: true }),
        info_layout[1],
    );

    let combo_color = match snapshot.combo {
        0 | 1 => Color::White,
        2 | 3 => Color::LightGreen,
        4 | 5 => Color::LightCyan,
        _ => Color::LightMagenta,
    };

    let status = if snapshot.is_game_over() {
        Paragraph::new("GAME OVER!\nEnter: retry\nEsc: menu").style(Style::default().fg(Color::Red))
    } else {
        let mut lines = vec![format!(
            "Combo: {}  (best {})\nPerfect: {}",
            snapshot.combo, snapshot.highest_combo, snapshot.perfect_count
        )];
        if show_overhang {
            if let Some(overhang) = snapshot.last_overhang {
                lines.push(format!(
                    "Chopped: {:.1} | {:.1}",
                    overhang.left, overhang.right
                ));
            }
        }
        Paragraph::new(lines.join("\n")).style(Style::default().fg(combo_color))
    };
    f.render_widget(status.wrap(Wrap { trim: true }), info_layout[2]);

    let controls = Paragraph::new(
        "Controls:\n\
        Space/Enter: Drop block\n\
        Esc: Menu\n\
        Q: Quit\n\
        ",
    )
    .block(Block::default().borders(Borders::TOP))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, info_layout[3]);
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
