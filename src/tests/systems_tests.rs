#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::components::{Input, Particle, ScreenShake};
    use crate::difficulty::GameMode;
    use crate::stack::{GamePhase, Stack};
    use crate::systems::{game_tick_system, input_system, start_game};
    use crate::tests::test_utils::{approx_eq, create_test_world};
    use bevy_ecs::prelude::*;

    fn particle_count(world: &mut World) -> usize {
        world.query::<&Particle>().iter(world).count()
    }

    fn move_falling_to(world: &mut World, x: f32) {
        let mut stack = world.resource_mut::<Stack>();
        if let Some(block) = stack.falling_mut() {
            block.x = x;
        }
    }

    fn press_stop(world: &mut World) {
        world.resource_mut::<Input>().stop = true;
        input_system(world);
    }

    #[test]
    fn test_start_game_system() {
        let (mut world, _) = create_test_world();

        start_game(&mut world, GameMode::Classic);

        let stack = world.resource::<Stack>();
        assert_eq!(stack.phase(), GamePhase::Playing);
        assert!(stack.falling_block().is_some());
    }

    #[test]
    fn test_input_system_stops_block() {
        let (mut world, _) = create_test_world();
        start_game(&mut world, GameMode::Classic);

        press_stop(&mut world);

        assert_eq!(world.resource::<Stack>().placed().len(), 1);
        // Input is consumed once handled
        assert!(!world.resource::<Input>().stop);
    }

    #[test]
    fn test_no_input_does_nothing() {
        let (mut world, _) = create_test_world();
        start_game(&mut world, GameMode::Classic);

        input_system(&mut world);

        assert!(world.resource::<Stack>().placed().is_empty());
    }

    #[test]
    fn test_game_tick_moves_block() {
        let (mut world, _) = create_test_world();
        start_game(&mut world, GameMode::Classic);

        game_tick_system(&mut world, 0.25);

        let x = world.resource::<Stack>().falling_block().unwrap().x;
        assert!(approx_eq(x, 25.0));
    }

    #[test]
    fn test_chop_spawns_debris_and_shake() {
        let (mut world, _) = create_test_world();
        start_game(&mut world, GameMode::Classic);
        press_stop(&mut world);

        move_falling_to(&mut world, 40.0);
        press_stop(&mut world);

        assert!(particle_count(&mut world) > 0);
        let shake = world.resource::<ScreenShake>();
        assert!(shake.is_active);
        assert!(shake.horizontal_bias);
    }

    #[test]
    fn test_perfect_spawns_sparkles() {
        let (mut world, _) = create_test_world();
        start_game(&mut world, GameMode::Classic);
        press_stop(&mut world);

        move_falling_to(&mut world, 0.0);
        press_stop(&mut world);

        assert!(particle_count(&mut world) > 0);
        assert!(!world.resource::<ScreenShake>().is_active);
    }

    #[test]
    fn test_particles_respect_cap() {
        let (mut world, _) = create_test_world();
        start_game(&mut world, GameMode::Classic);
        press_stop(&mut world);

        // Alternate chops so debris keeps piling up
        for i in 0..12 {
            let x = if i % 2 == 0 { 3.0 } else { 0.0 };
            move_falling_to(&mut world, x);
            press_stop(&mut world);
        }

        let cap = crate::config::Config::current().display.particle_max_count;
        assert!(particle_count(&mut world) <= cap);
    }

    #[test]
    fn test_particles_expire() {
        let (mut world, _) = create_test_world();
        start_game(&mut world, GameMode::Classic);
        press_stop(&mut world);
        move_falling_to(&mut world, 40.0);
        press_stop(&mut world);

        for _ in 0..40 {
            game_tick_system(&mut world, 0.1);
        }

        assert_eq!(particle_count(&mut world), 0);
        assert!(!world.resource::<ScreenShake>().is_active);
    }

    #[test]
    fn test_game_over_then_restart() {
        let (mut world, records) = create_test_world();
        start_game(&mut world, GameMode::Hardcore);
        press_stop(&mut world);
        move_falling_to(&mut world, 200.0);
        press_stop(&mut world);

        assert!(world.resource::<Stack>().is_game_over());
        assert_eq!(records.lock().unwrap().len(), 1);

        // Stop does nothing once the game is over
        press_stop(&mut world);
        assert_eq!(world.resource::<Stack>().placed().len(), 1);

        world.resource_mut::<Input>().restart = true;
        input_system(&mut world);

        let stack = world.resource::<Stack>();
        assert_eq!(stack.phase(), GamePhase::Playing);
        assert_eq!(stack.mode(), GameMode::Hardcore);
        assert!(stack.placed().is_empty());
        assert_eq!(records.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let (mut world, _) = create_test_world();
        start_game(&mut world, GameMode::Classic);
        press_stop(&mut world);

        world.resource_mut::<Input>().restart = true;
        input_system(&mut world);

        assert_eq!(world.resource::<Stack>().placed().len(), 1);
    }

    #[test]
    fn test_start_game_clears_effects() {
        let (mut world, _) = create_test_world();
        start_game(&mut world, GameMode::Classic);
        press_stop(&mut world);
        move_falling_to(&mut world, 40.0);
        press_stop(&mut world);
        assert!(particle_count(&mut world) > 0);

        start_game(&mut world, GameMode::Classic);

        assert_eq!(particle_count(&mut world), 0);
        assert!(!world.resource::<ScreenShake>().is_active);
    }
}
