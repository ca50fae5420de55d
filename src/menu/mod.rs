mod main_menu;
pub mod renderer;
pub mod title;

pub use self::renderer::MenuRenderer;
pub use crate::menu_types::{Menu, MenuOption, MenuState};
