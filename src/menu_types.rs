use crate::difficulty::GameMode;

// Top-level screen the app is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Game,
}

// Main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Play(GameMode),
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [
        MenuOption::Play(GameMode::Classic),
        MenuOption::Play(GameMode::Hardcore),
        MenuOption::Quit,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Play(mode) => mode.label(),
            MenuOption::Quit => "Quit",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|option| *option == self)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub state: MenuState,
    pub selected_option: MenuOption,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            state: MenuState::MainMenu,
            selected_option: MenuOption::Play(GameMode::Classic),
        }
    }
}

impl Menu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_option(&mut self) {
        let next = (self.selected_option.index() + 1) % MenuOption::ALL.len();
        self.selected_option = MenuOption::ALL[next];
    }

    pub fn prev_option(&mut self) {
        let len = MenuOption::ALL.len();
        let prev = (self.selected_option.index() + len - 1) % len;
        self.selected_option = MenuOption::ALL[prev];
    }
}
