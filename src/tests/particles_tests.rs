#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::block::{Block, BlockColor};
    use crate::components::{Particle, ScreenShake};
    use crate::particles::{
        clear_particles, spawn_chop_particles, spawn_game_over_particles, spawn_perfect_particles,
        update_particles,
    };
    use crate::screenshake::{trigger_chop_shake, trigger_screen_shake, update_screen_shake};
    use crate::stack::Overhang;
    use bevy_ecs::prelude::*;

    fn create_effects_world() -> World {
        let mut world = World::new();
        world.insert_resource(ScreenShake::default());
        world
    }

    fn particles(world: &mut World) -> Vec<Particle> {
        world.query::<&Particle>().iter(world).cloned().collect()
    }

    fn overhang(left: f32, right: f32) -> Overhang {
        Overhang {
            left,
            right,
            origin_x: 20.0,
            origin_width: 100.0,
            y: 40.0,
            color: BlockColor::Lime,
        }
    }

    #[test]
    fn test_chop_debris_lands_on_chopped_side() {
        let mut world = create_effects_world();

        spawn_chop_particles(&mut world, &overhang(0.0, 20.0));

        let debris = particles(&mut world);
        assert_eq!(debris.len(), 5);
        for particle in &debris {
            assert!(particle.position.x >= 100.0 && particle.position.x <= 120.0);
            assert!(particle.velocity.0 > 0.0, "right debris should drift right");
        }
    }

    #[test]
    fn test_chop_with_no_overhang_spawns_nothing() {
        let mut world = create_effects_world();

        spawn_chop_particles(&mut world, &overhang(0.0, 0.0));

        assert!(particles(&mut world).is_empty());
    }

    #[test]
    fn test_perfect_sparkles_scale_with_combo() {
        let block = Block::new(0.0, 0.0, 100.0, 0.0, BlockColor::Sky, 1);

        let mut low = create_effects_world();
        spawn_perfect_particles(&mut low, &block, 1);
        let mut high = create_effects_world();
        spawn_perfect_particles(&mut high, &block, 5);

        assert!(particles(&mut high).len() > particles(&mut low).len());
    }

    #[test]
    fn test_game_over_shatters_block() {
        let mut world = create_effects_world();
        let block = Block::new(0.0, 60.0, 40.0, 0.0, BlockColor::Rose, 4);

        spawn_game_over_particles(&mut world, &block);

        assert_eq!(particles(&mut world).len(), 10);
        assert!(world.resource::<ScreenShake>().is_active);
    }

    #[test]
    fn test_update_applies_gravity_and_expires() {
        let mut world = create_effects_world();
        spawn_chop_particles(&mut world, &overhang(8.0, 0.0));

        update_particles(&mut world, 0.1);
        for particle in particles(&mut world) {
            assert!(particle.velocity.1 < 30.0);
        }

        update_particles(&mut world, 2.0);
        assert!(particles(&mut world).is_empty());
    }

    #[test]
    fn test_clear_particles() {
        let mut world = create_effects_world();
        spawn_chop_particles(&mut world, &overhang(10.0, 10.0));

        clear_particles(&mut world);

        assert!(particles(&mut world).is_empty());
    }

    #[test]
    fn test_chop_shake_favors_horizontal() {
        let mut world = create_effects_world();

        trigger_chop_shake(&mut world, 0.5);

        let shake = world.resource::<ScreenShake>();
        assert!(shake.is_active);
        assert!(shake.horizontal_bias);
        assert!(shake.intensity > 0.0);
    }

    #[test]
    fn test_shake_wears_off() {
        let mut world = create_effects_world();
        trigger_screen_shake(&mut world, 2.0, 0.2);

        update_screen_shake(&mut world, 0.1);
        assert!(world.resource::<ScreenShake>().is_active);

        update_screen_shake(&mut world, 0.2);
        let shake = world.resource::<ScreenShake>();
        assert!(!shake.is_active);
        assert_eq!(shake.current_offset, (0, 0));
    }
}
