use bevy_ecs::prelude::*;

use crate::Time;
use crate::components::{Input, ScreenShake};
use crate::config::Config;
use crate::difficulty::GameMode;
use crate::menu::MenuRenderer;
use crate::menu_types::{Menu, MenuState};
use crate::stack::{Stack, StackSnapshot};
use crate::stats::{NullStats, StatsRecorder};
use crate::systems;

pub struct App {
    pub world: World,
    pub should_quit: bool,
    pub menu: Menu,
    pub menu_renderer: MenuRenderer,
}

impl App {
    /// Creates an app that keeps no statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::with_stats(&Config::current(), Box::new(NullStats))
    }

    #[must_use]
    pub fn with_stats(config: &Config, stats: Box<dyn StatsRecorder>) -> Self {
        let mut world = World::new();
        world.insert_resource(Time::new());
        world.insert_resource(Input::default());
        world.insert_resource(ScreenShake::default());
        world.insert_resource(Stack::from_config(config, stats));

        Self {
            world,
            should_quit: false,
            menu: Menu::new(),
            menu_renderer: MenuRenderer::new(),
        }
    }

    /// Leaves the menu and starts a run in `mode`
    pub fn start_game(&mut self, mode: GameMode) {
        self.menu.state = MenuState::Game;
        systems::start_game(&mut self.world, mode);
    }

    /// Uses the gameplay and difficulty sections of `config` from the next run on
    pub fn apply_config(&mut self, config: &Config) {
        self.world.resource_mut::<Stack>().apply_config(config);
    }

    /// Returns to the main menu; an unfinished run is abandoned unrecorded
    pub fn return_to_menu(&mut self) {
        self.menu.state = MenuState::MainMenu;
    }

    #[must_use]
    pub fn snapshot(&self) -> StackSnapshot {
        self.world.resource::<Stack>().snapshot()
    }

    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.world.resource::<Stack>().best_score()
    }

    pub fn on_tick(&mut self, delta_seconds: f32) {
        self.world.resource_mut::<Time>().update();

        if self.menu.state == MenuState::Game {
            systems::input_system(&mut self.world);
            systems::game_tick_system(&mut self.world, delta_seconds);
        } else {
            self.menu_renderer.update();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
