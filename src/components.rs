#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;

// World-space position, x to the right and y up from the tower base
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

// Particle system for visual effects
#[derive(Debug, Clone, Component)]
pub struct Particle {
    pub position: Position,
    pub velocity: (f32, f32),
    pub color: ratatui::style::Color,
    pub lifetime: f32,
    pub size: f32,
}

// Screen shake effect
#[derive(Debug, Clone, Resource, Default)]
pub struct ScreenShake {
    pub intensity: f32,
    pub duration: f32,
    pub current_offset: (i16, i16),
    pub is_active: bool,
    pub horizontal_bias: bool, // When true, shake will prioritize horizontal movement
}

// Input state for keyboard controls
#[derive(Resource, Debug, Clone, Default)]
pub struct Input {
    pub stop: bool,
    pub restart: bool,
}
