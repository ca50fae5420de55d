#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when converting chopped widths to particle counts
    clippy::cast_possible_truncation,
    // Allow sign loss for the same conversion since widths are never negative
    clippy::cast_sign_loss,
    // Allow precision loss when spreading particles across a block
    clippy::cast_precision_loss
)]

use bevy_ecs::prelude::*;
use log::{debug, trace};
use ratatui::style::Color;

use crate::block::Block;
use crate::components::{Particle, Position};
use crate::config::Config;
use crate::screenshake;
use crate::stack::Overhang;

// World units of chopped width per spawned debris particle
const DEBRIS_SPACING: f32 = 4.0;
// Downward acceleration in world units per second squared
const GRAVITY: f32 = 240.0;

/// Debris falling off both sides of a trimmed block.
pub fn spawn_chop_particles(world: &mut World, overhang: &Overhang) {
    debug!(
        "Spawning chop particles ({:.1} left, {:.1} right)",
        overhang.left, overhang.right
    );

    let display = Config::current().display;
    let color = overhang.color.get_color();
    let pieces = [
        (overhang.origin_x, overhang.left, -1.0),
        (
            overhang.origin_x + overhang.origin_width - overhang.right,
            overhang.right,
            1.0,
        ),
    ];

    for (start, width, direction) in pieces {
        if width <= 0.0 {
            continue;
        }

        let count = ((width / DEBRIS_SPACING).ceil() as usize).max(1);
        for i in 0..count {
            let x = start + width * (i as f32 + fastrand::f32()) / count as f32;
            let vx = direction * (fastrand::f32() * 40.0 + 10.0);
            let vy = fastrand::f32() * 30.0;

            spawn_particle(
                world,
                display.particle_max_count,
                Position { x, y: overhang.y },
                (vx, vy),
                color,
                fastrand::f32() * 0.8 + 0.6, // lifetime: 0.6 to 1.4 seconds
                fastrand::f32() * 0.6 + 0.4,
            ); // size: 0.4 to 1.0
        }
    }

    if display.screen_shake {
        let chopped = (overhang.left + overhang.right) / overhang.origin_width.max(1.0);
        screenshake::trigger_chop_shake(world, chopped);
    }
}

/// Sparkles along the top edge of a perfectly placed block.
pub fn spawn_perfect_particles(world: &mut World, block: &Block, combo: u32) {
    trace!("Spawning perfect placement particles for combo {combo}");

    let max_count = Config::current().display.particle_max_count;
    let color = if combo > 2 {
        Color::LightYellow
    } else {
        Color::White
    };
    let count = 6 + combo.min(10) as usize * 2;

    for i in 0..count {
        let x = block.left() + block.width * (i as f32 + 0.5) / count as f32;
        let vx = (fastrand::f32() - 0.5) * 30.0;
        let vy = fastrand::f32() * 40.0 + 20.0;

        spawn_particle(
            world,
            max_count,
            Position { x, y: block.top() },
            (vx, vy),
            color,
            fastrand::f32() * 0.4 + 0.3, // lifetime: 0.3 to 0.7 seconds
            fastrand::f32() * 0.5 + 0.3,
        ); // size: 0.3 to 0.8
    }
}

/// The whole missed block shatters.
pub fn spawn_game_over_particles(world: &mut World, block: &Block) {
    debug!("Spawning game over particles");

    let display = Config::current().display;
    let color = block.color.get_color();
    let count = ((block.width / DEBRIS_SPACING).ceil() as usize).max(4);

    for i in 0..count {
        let x = block.left() + block.width * (i as f32 + fastrand::f32()) / count as f32;
        let vx = (fastrand::f32() - 0.5) * 80.0;
        let vy = fastrand::f32() * 60.0;

        spawn_particle(
            world,
            display.particle_max_count,
            Position { x, y: block.y },
            (vx, vy),
            color,
            fastrand::f32() * 1.0 + 0.8, // lifetime: 0.8 to 1.8 seconds
            fastrand::f32() * 0.8 + 0.4,
        ); // size: 0.4 to 1.2
    }

    if display.screen_shake {
        screenshake::trigger_screen_shake(world, 3.0, 0.6);
    }
}

pub fn update_particles(world: &mut World, delta_seconds: f32) {
    let mut entities_to_despawn = Vec::new();

    for (entity, mut particle) in world.query::<(Entity, &mut Particle)>().iter_mut(world) {
        particle.lifetime -= delta_seconds;

        if particle.lifetime <= 0.0 {
            entities_to_despawn.push(entity);
            continue;
        }

        particle.position.x += particle.velocity.0 * delta_seconds;
        particle.position.y += particle.velocity.1 * delta_seconds;

        // Friction on the horizontal drift, gravity pulls debris down
        particle.velocity.0 *= 0.95;
        particle.velocity.1 -= GRAVITY * delta_seconds;

        particle.size *= 0.98;
    }

    for entity in entities_to_despawn {
        world.despawn(entity);
    }

    screenshake::update_screen_shake(world, delta_seconds);
}

pub fn clear_particles(world: &mut World) {
    let particles: Vec<Entity> = world
        .query_filtered::<Entity, With<Particle>>()
        .iter(world)
        .collect();

    for entity in particles {
        world.despawn(entity);
    }
}

// Helper function to spawn a single particle, respecting the configured cap
fn spawn_particle(
    world: &mut World,
    max_count: usize,
    position: Position,
    velocity: (f32, f32),
    color: Color,
    lifetime: f32,
    size: f32,
) {
    if world.query::<&Particle>().iter(world).count() >= max_count {
        return;
    }

    world.spawn(Particle {
        position,
        velocity,
        color,
        lifetime,
        size,
    });
}
