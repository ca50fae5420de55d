#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting shake offsets to i16 since they are a few cells at most
    clippy::cast_possible_truncation
)]

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::ScreenShake;

// Shake fades out over this many seconds of its remaining duration
const SHAKE_FADE: f32 = 0.3;

/// Triggers a screen shake effect with the specified intensity and duration
pub fn trigger_screen_shake(world: &mut World, intensity: f32, duration: f32) {
    let mut screen_shake = world.resource_mut::<ScreenShake>();
    screen_shake.intensity = intensity;
    screen_shake.duration = duration;
    screen_shake.is_active = true;
    screen_shake.horizontal_bias = false;
    trace!("Screen shake triggered with intensity {intensity}");
}

/// Triggers a sideways shake scaled by how much of the block was chopped off
pub fn trigger_chop_shake(world: &mut World, chopped_fraction: f32) {
    let fraction = chopped_fraction.clamp(0.0, 1.0);
    let intensity = 0.6 + fraction * 2.4;
    let duration = 0.15 + fraction * 0.25;

    let mut screen_shake = world.resource_mut::<ScreenShake>();
    screen_shake.intensity = intensity;
    screen_shake.duration = duration;
    screen_shake.is_active = true;
    screen_shake.horizontal_bias = true;

    trace!("Chop screen shake triggered with intensity {intensity}");
}

/// Updates the screen shake state based on elapsed time
pub fn update_screen_shake(world: &mut World, delta_seconds: f32) {
    let mut screen_shake = world.resource_mut::<ScreenShake>();
    if screen_shake.duration <= 0.0 {
        return;
    }

    screen_shake.duration -= delta_seconds;

    if screen_shake.duration <= 0.0 {
        // Reset shake when duration expires
        screen_shake.duration = 0.0;
        screen_shake.intensity = 0.0;
        screen_shake.current_offset = (0, 0);
        screen_shake.is_active = false;
        screen_shake.horizontal_bias = false;
        return;
    }

    let intensity = screen_shake.intensity * (screen_shake.duration / SHAKE_FADE).min(1.0);
    let max_offset = (intensity * 2.0) as i16;
    if max_offset <= 0 {
        screen_shake.current_offset = (0, 0);
        return;
    }

    screen_shake.current_offset = if screen_shake.horizontal_bias {
        (
            fastrand::i16(0..=max_offset) - max_offset / 2,
            fastrand::i16(0..=(max_offset / 3)) - max_offset / 6,
        )
    } else {
        (
            fastrand::i16(0..=max_offset) - max_offset / 2,
            fastrand::i16(0..=max_offset) - max_offset / 2,
        )
    };
}
