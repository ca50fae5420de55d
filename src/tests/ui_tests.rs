#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::components::Input;
    use crate::difficulty::GameMode;
    use crate::ui::{self, centered_rect};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};

    // Helper function to create a test terminal
    fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 40, area);

        assert_eq!(centered.width, 50);
        assert_eq!(centered.height, 40);
        assert_eq!(centered.x, 25);
        assert_eq!(centered.y, 30);
    }

    #[test]
    fn test_render_main_menu() {
        let mut terminal = create_test_terminal(100, 30);
        let mut app = App::new();

        terminal.draw(|f| ui::render(f, &mut app)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Classic"));
        assert!(text.contains("Hardcore"));
        assert!(text.contains("Quit"));
    }

    #[test]
    fn test_render_game_shows_hud() {
        let mut terminal = create_test_terminal(100, 30);
        let mut app = App::new();
        app.start_game(GameMode::Classic);

        terminal.draw(|f| ui::render(f, &mut app)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Level: 1"));
        assert!(text.contains("Mode: Classic"));
        // The falling block is drawn on the board
        assert!(text.contains('▓'));
    }

    #[test]
    fn test_render_game_over() {
        let mut terminal = create_test_terminal(100, 30);
        let mut app = App::new();
        app.start_game(GameMode::Classic);
        app.world.resource_mut::<Input>().stop = true;
        app.on_tick(0.0);

        // Second block only touches the edge of the first
        {
            let mut stack = app.world.resource_mut::<crate::stack::Stack>();
            if let Some(block) = stack.falling_mut() {
                block.x = 150.0;
            }
        }
        app.world.resource_mut::<Input>().stop = true;
        app.on_tick(0.0);

        terminal.draw(|f| ui::render(f, &mut app)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("GAME OVER"));
    }

    #[test]
    fn test_render_small_terminal_warning() {
        let mut terminal = create_test_terminal(60, 12);
        let mut app = App::new();
        app.start_game(GameMode::Classic);

        terminal.draw(|f| ui::render(f, &mut app)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Terminal too small"));
    }

    #[test]
    fn test_render_tall_tower_keeps_top_visible() {
        let mut terminal = create_test_terminal(100, 24);
        let mut app = App::new();
        app.start_game(GameMode::Classic);

        // Stack well past the height of the board
        for _ in 0..40 {
            app.world.resource_mut::<Input>().stop = true;
            {
                let mut stack = app.world.resource_mut::<crate::stack::Stack>();
                if let Some(block) = stack.falling_mut() {
                    block.x = 0.0;
                }
            }
            app.on_tick(0.0);
        }
        assert_eq!(app.snapshot().placed.len(), 40);

        terminal.draw(|f| ui::render(f, &mut app)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains('▓'));
        assert!(text.contains("Height: 40"));
    }
}
