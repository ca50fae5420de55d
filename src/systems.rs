use bevy_ecs::prelude::*;
use log::{debug, info, trace};

use crate::components::{Input, ScreenShake};
use crate::difficulty::GameMode;
use crate::particles;
use crate::stack::{PlacementOutcome, Stack, StackEvent};

/// Resets effects and input, then starts a fresh run on the stack.
pub fn start_game(world: &mut World, mode: GameMode) {
    particles::clear_particles(world);
    world.insert_resource(ScreenShake::default());
    world.insert_resource(Input::default());

    world.resource_mut::<Stack>().start_game(mode);
    process_stack_events(world);
}

pub fn input_system(world: &mut World) {
    let input = world.resource::<Input>().clone();
    *world.resource_mut::<Input>() = Input::default();

    if input.restart && world.resource::<Stack>().is_game_over() {
        let mode = world.resource::<Stack>().mode();
        info!("Restarting {} game", mode.label());
        start_game(world, mode);
        return;
    }

    if input.stop {
        let outcome = world.resource_mut::<Stack>().stop_current_block();
        match outcome {
            PlacementOutcome::Settled { perfect, points } => {
                debug!("Block settled (perfect: {perfect}, +{points})");
            }
            PlacementOutcome::GameOver(reason) => {
                info!("Placement ended the game: {reason:?}");
            }
            PlacementOutcome::Ignored => trace!("Stop ignored, nothing falling"),
        }
    }

    process_stack_events(world);
}

pub fn game_tick_system(world: &mut World, delta_seconds: f32) {
    trace!("Game tick with delta: {delta_seconds}");

    // Effects keep animating after the game ends
    particles::update_particles(world, delta_seconds);

    let mut stack = world.resource_mut::<Stack>();
    if stack.is_game_over() {
        return;
    }
    let play_width = stack.rules().play_width;
    stack.update(delta_seconds, play_width);
}

/// Turns pending stack events into particles and screen shake.
pub fn process_stack_events(world: &mut World) {
    let events: Vec<StackEvent> = world.resource_mut::<Stack>().drain_events().collect();

    for event in events {
        match event {
            StackEvent::Chopped(overhang) => {
                particles::spawn_chop_particles(world, &overhang);
            }
            StackEvent::BlockPlaced {
                index,
                perfect: true,
                ..
            } => {
                let (block, combo) = {
                    let stack = world.resource::<Stack>();
                    (stack.placed().get(index).copied(), stack.combo())
                };
                if let Some(block) = block {
                    particles::spawn_perfect_particles(world, &block, combo);
                }
            }
            StackEvent::GameOver { block, score, .. } => {
                info!("Final score {score}");
                particles::spawn_game_over_particles(world, &block);
            }
            StackEvent::ComboGrew { combo, width } => {
                debug!("Combo {combo} grew the block to {width:.1}");
            }
            StackEvent::ForcedShrink { width } => {
                debug!("Forced shrink to {width:.1}");
            }
            StackEvent::GameStarted(_)
            | StackEvent::BlockSpawned { .. }
            | StackEvent::BlockPlaced { .. } => {}
        }
    }
}
