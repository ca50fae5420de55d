#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

use stackblocks::app::App;
use stackblocks::components::Input;
use stackblocks::config::{self, Config};
use stackblocks::menu_types::{MenuOption, MenuState};
use stackblocks::stack::Stack;
use stackblocks::stats::StatsStore;
use stackblocks::ui;

fn main() -> Result<()> {
    // Create log file and redirect stderr to it
    let log_path = "stackblocks.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("failed to create log file {log_path}"))?;

    let stderr_fd = io::stderr().as_raw_fd();
    let log_file_fd = log_file.as_raw_fd();

    // Safety: both descriptors are open for the duration of the call
    unsafe {
        libc::dup2(log_file_fd, stderr_fd);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting Stack");

    match config::loader::load_config_from_file() {
        Ok(loaded) => {
            Config::install(loaded);
            info!("Configuration loaded successfully");
        }
        Err(e) => error!("Failed to load configuration, using defaults: {e}"),
    }

    let stats = StatsStore::open_default();
    info!("Recording stats to {}", stats.path().display());

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(33); // ~30 FPS
    let game_tick_rate = Duration::from_millis(16);

    let app = App::with_stats(&Config::current(), Box::new(stats));
    let res = run_app(&mut terminal, app, tick_rate, game_tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
        return Err(err);
    }

    info!("Exiting");
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
    game_tick_rate: Duration,
) -> Result<()> {
    let mut last_render = Instant::now();
    let mut last_game_tick = Instant::now();

    // Flush anything typed before the terminal was ready
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    loop {
        if last_render.elapsed() >= tick_rate {
            terminal.draw(|f| ui::render(f, &mut app))?;
            last_render = Instant::now();
        }

        if last_game_tick.elapsed() >= game_tick_rate {
            let delta_seconds = last_game_tick.elapsed().as_secs_f32();
            last_game_tick = Instant::now();

            if app.menu.state == MenuState::MainMenu && Config::check_and_reload() {
                app.apply_config(&Config::current());
                debug!("Configuration reloaded");
            }

            app.on_tick(delta_seconds);
        }

        if app.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(5))? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key);
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Held keys must not stop several blocks in a row
    if key.kind != KeyEventKind::Press {
        return;
    }
    debug!("Key event: {key:?}");

    if key.code == KeyCode::Char('q') {
        app.should_quit = true;
        return;
    }

    match app.menu.state {
        MenuState::MainMenu => match key.code {
            KeyCode::Up | KeyCode::Char('w') => app.menu.prev_option(),
            KeyCode::Down | KeyCode::Char('s') => app.menu.next_option(),
            KeyCode::Enter | KeyCode::Char(' ') => match app.menu.selected_option {
                MenuOption::Play(mode) => app.start_game(mode),
                MenuOption::Quit => app.should_quit = true,
            },
            _ => {}
        },
        MenuState::Game => {
            if key.code == KeyCode::Esc {
                app.return_to_menu();
                return;
            }

            let is_game_over = app.world.resource::<Stack>().is_game_over();
            let mut input = app.world.resource_mut::<Input>();
            match key.code {
                KeyCode::Enter if is_game_over => input.restart = true,
                KeyCode::Enter | KeyCode::Char(' ') => input.stop = true,
                _ => {}
            }
        }
    }
}
