#![warn(clippy::all, clippy::pedantic)]

use serde::{Deserialize, Serialize};

use crate::game::BLOCK_HEIGHT;

/// Palette the tower cycles through, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockColor {
    Coral,
    Amber,
    Lime,
    Teal,
    Sky,
    Violet,
    Rose,
}

impl BlockColor {
    pub const PALETTE: [BlockColor; 7] = [
        BlockColor::Coral,
        BlockColor::Amber,
        BlockColor::Lime,
        BlockColor::Teal,
        BlockColor::Sky,
        BlockColor::Violet,
        BlockColor::Rose,
    ];

    #[must_use]
    pub fn cycle(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    #[must_use]
    pub fn get_color(self) -> ratatui::style::Color {
        match self {
            BlockColor::Coral => ratatui::style::Color::LightRed,
            BlockColor::Amber => ratatui::style::Color::Yellow,
            BlockColor::Lime => ratatui::style::Color::LightGreen,
            BlockColor::Teal => ratatui::style::Color::Cyan,
            BlockColor::Sky => ratatui::style::Color::LightBlue,
            BlockColor::Violet => ratatui::style::Color::Magenta,
            BlockColor::Rose => ratatui::style::Color::LightMagenta,
        }
    }
}

/// Geometric relationship between a falling block and the block beneath it.
///
/// Computed fresh for every placement attempt and never stored on the tower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackAlignment {
    /// Left edge of the shared interval.
    pub overlap_left: f32,
    /// Width of the shared interval, zero when the blocks miss each other.
    pub overlap_width: f32,
    /// Part of the falling block hanging past the left edge of the block below.
    pub left_overhang: f32,
    /// Part of the falling block hanging past the right edge of the block below.
    pub right_overhang: f32,
    /// Both edges landed within the tolerance of the block below.
    pub is_perfect: bool,
}

impl StackAlignment {
    #[must_use]
    pub fn has_overlap(&self) -> bool {
        self.overlap_width > 0.0
    }
}

/// A single slab, either sliding above the tower or settled in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub velocity: f32,
    pub moving: bool,
    pub color: BlockColor,
    pub level: u32,
}

impl Block {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, velocity: f32, color: BlockColor, level: u32) -> Self {
        Self {
            x,
            y,
            width,
            velocity,
            moving: true,
            color,
            level,
        }
    }

    #[must_use]
    pub const fn height() -> f32 {
        BLOCK_HEIGHT
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn center(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.y + BLOCK_HEIGHT
    }

    pub fn stop(&mut self) {
        self.moving = false;
        self.velocity = 0.0;
    }

    /// Moves the block by one tick, bouncing off both edges of the play field.
    pub fn advance(&mut self, tick: f32, boundary_width: f32) {
        if !self.moving {
            return;
        }

        self.x += self.velocity * tick;

        let max_x = (boundary_width - self.width).max(0.0);
        if self.x <= 0.0 {
            self.x = 0.0;
            self.velocity = self.velocity.abs();
        } else if self.x >= max_x {
            self.x = max_x;
            self.velocity = -self.velocity.abs();
        }
    }

    /// Compares this block against `below`.
    #[must_use]
    pub fn compute_alignment(&self, below: &Block, tolerance: f32) -> StackAlignment {
        let overlap_left = self.left().max(below.left());
        let overlap_right = self.right().min(below.right());
        let overlap_width = (overlap_right - overlap_left).max(0.0);

        let left_delta = (self.left() - below.left()).abs();
        let right_delta = (self.right() - below.right()).abs();

        StackAlignment {
            overlap_left,
            overlap_width,
            left_overhang: (below.left() - self.left()).max(0.0).min(self.width),
            right_overhang: (self.right() - below.right()).max(0.0).min(self.width),
            is_perfect: left_delta <= tolerance && right_delta <= tolerance,
        }
    }

    /// Narrows the block around its center, never below `min_width`.
    pub fn apply_forced_shrink(&mut self, decrement: f32, min_width: f32) {
        let center = self.center();
        self.width = (self.width - decrement).max(min_width);
        self.x = center - self.width / 2.0;
    }

    /// Cuts the block down to the interval it shares with the block below.
    pub fn trim_to(&mut self, alignment: &StackAlignment) {
        self.x = alignment.overlap_left;
        self.width = alignment.overlap_width;
    }

    /// Widens the block around its center, capped at `max_width`, keeping
    /// both edges inside the play field.
    pub fn grow(&mut self, factor: f32, max_width: f32, boundary_width: f32) {
        let center = self.center();
        self.width = (self.width * factor).min(max_width.max(self.width));
        let max_x = (boundary_width - self.width).max(0.0);
        self.x = (center - self.width / 2.0).clamp(0.0, max_x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(x: f32, width: f32) -> Block {
        Block::new(x, 0.0, width, 0.0, BlockColor::Coral, 1)
    }

    #[test]
    fn test_overhang_split() {
        let below = block(50.0, 100.0);
        let falling = block(30.0, 100.0);

        let alignment = falling.compute_alignment(&below, 2.0);

        assert!((alignment.left_overhang - 20.0).abs() < f32::EPSILON);
        assert!(alignment.right_overhang.abs() < f32::EPSILON);
        assert!((alignment.overlap_left - 50.0).abs() < f32::EPSILON);
        assert!((alignment.overlap_width - 80.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_grow_never_exceeds_cap() {
        let mut b = block(10.0, 148.0);
        b.grow(1.05, 150.0, 300.0);
        assert!((b.width - 150.0).abs() < f32::EPSILON);
    }
}
