//! Breakout - A single-screen brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (object model, collisions, tick pipeline)
//! - `game`: Title/playing/ended state machine around the simulation
//! - `renderer`: Pure draw functions over a 2D drawing surface
//! - `platform`: Browser glue (keyboard input, LocalStorage)
//! - `persistence`: Key-value store abstraction
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::{Game, TickOutcome, Transition};
pub use highscores::BestScore;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed tick interval (50 Hz)
    pub const TICK_INTERVAL_MS: u32 = 20;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 1280.0;
    pub const CANVAS_HEIGHT: f32 = 720.0;

    /// Brick grid
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 10;
    pub const BRICK_SPACING_HORIZONTAL: f32 = 30.0;
    pub const BRICK_SPACING_VERTICAL: f32 = 16.0;
    /// Vertical band the grid is laid out in (rows share it evenly)
    pub const BRICK_AREA_HEIGHT: f32 = 360.0;
    pub const BRICK_TOP: f32 = 50.0;

    /// Paddle defaults
    pub const PADDLE_SPEED: f32 = 6.0;
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance from the bottom edge to the paddle center
    pub const PADDLE_OFFSET: f32 = 50.0;

    /// Ball defaults (units per tick)
    pub const BALL_SPEED: f32 = 5.0;
    pub const BALL_SIZE: f32 = 10.0;
    /// Spawn distance above the paddle center
    pub const BALL_OFFSET: f32 = 50.0;

    /// Walls sit just outside the canvas so the ball's edge hits the true boundary
    pub const WALL_THICKNESS: f32 = 10.0;

    /// Overlap difference below which a hit counts as a corner hit
    pub const CORNER_TOLERANCE: f32 = 2.0;
    /// Speed multiplier applied on every corner hit (compounds, no cap)
    pub const CORNER_BOOST: f32 = 1.05;

    /// Beveled edge width for drawn blocks
    pub const BEVEL_WIDTH: f32 = 4.0;
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics: when `min > max` the result is `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(value.min(max))
}

/// Per-axis penetration depth of two axis-aligned boxes given by center and size.
///
/// A component is positive when the boxes overlap along that axis.
#[inline]
pub fn box_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> Vec2 {
    (a_size + b_size) / 2.0 - (a_pos - b_pos).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        // Inverted bounds resolve to the lower bound
        assert_eq!(clamp(3.0, 8.0, 2.0), 8.0);
    }

    #[test]
    fn test_box_overlap() {
        let overlap = box_overlap(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(8.0, 0.0),
            Vec2::new(10.0, 10.0),
        );
        assert_eq!(overlap, Vec2::new(2.0, 10.0));

        let apart = box_overlap(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(30.0, 0.0),
            Vec2::new(10.0, 10.0),
        );
        assert!(apart.x < 0.0);
    }
}
