//! Data-driven game balance
//!
//! Every gameplay constant lives here so a host can override it with JSON.
//! Missing fields fall back to the defaults in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub wall_thickness: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_spacing_horizontal: f32,
    pub brick_spacing_vertical: f32,
    pub brick_area_height: f32,
    pub brick_top: f32,

    // === Paddle ===
    pub paddle_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_offset: f32,

    // === Ball ===
    pub ball_speed: f32,
    pub ball_size: f32,
    pub ball_offset: f32,

    // === Collision response ===
    pub corner_tolerance: f32,
    pub corner_boost: f32,

    // === Presentation ===
    pub bevel_width: f32,
    pub tick_interval_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            wall_thickness: WALL_THICKNESS,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_spacing_horizontal: BRICK_SPACING_HORIZONTAL,
            brick_spacing_vertical: BRICK_SPACING_VERTICAL,
            brick_area_height: BRICK_AREA_HEIGHT,
            brick_top: BRICK_TOP,

            paddle_speed: PADDLE_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_offset: PADDLE_OFFSET,

            ball_speed: BALL_SPEED,
            ball_size: BALL_SIZE,
            ball_offset: BALL_OFFSET,

            corner_tolerance: CORNER_TOLERANCE,
            corner_boost: CORNER_BOOST,

            bevel_width: BEVEL_WIDTH,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// LocalStorage key for host overrides (read only on wasm32)
    pub const STORAGE_KEY: &'static str = "breakout_tuning";

    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| GameError::InvalidTuning(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("wall_thickness", self.wall_thickness),
            ("paddle_speed", self.paddle_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_speed", self.ball_speed),
            ("ball_size", self.ball_size),
            ("corner_boost", self.corner_boost),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(GameError::InvalidTuning(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.brick_total() == 0 {
            return Err(GameError::InvalidTuning(
                "brick grid must have at least one brick".to_string(),
            ));
        }
        let brick = self.brick_size();
        if !(brick.x > 0.0 && brick.y > 0.0) {
            return Err(GameError::InvalidTuning(format!(
                "brick spacing leaves no room for bricks ({}x{})",
                brick.x, brick.y
            )));
        }
        if self.paddle_width > self.canvas_width {
            return Err(GameError::InvalidTuning(format!(
                "paddle_width {} exceeds canvas_width {}",
                self.paddle_width, self.canvas_width
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidTuning(
                "tick_interval_ms must be non-zero".to_string(),
            ));
        }
        // setInterval takes a signed 32-bit delay
        if i32::try_from(self.tick_interval_ms).is_err() {
            return Err(GameError::InvalidTuning(format!(
                "tick_interval_ms {} is too large",
                self.tick_interval_ms
            )));
        }
        Ok(())
    }

    /// Number of bricks in the grid (also the winning score)
    pub fn brick_total(&self) -> u32 {
        self.brick_rows * self.brick_columns
    }

    /// Size of a single brick, derived from the grid and spacing
    pub fn brick_size(&self) -> Vec2 {
        let columns = self.brick_columns.max(1) as f32;
        let rows = self.brick_rows.max(1) as f32;
        Vec2::new(
            (self.canvas_width - columns * self.brick_spacing_horizontal) / columns,
            (self.brick_area_height - rows * self.brick_spacing_vertical) / rows,
        )
    }

    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    /// Paddle starts centered horizontally, `paddle_offset` above the bottom edge
    pub fn paddle_spawn(&self) -> Vec2 {
        Vec2::new(
            self.canvas_width / 2.0,
            self.canvas_height - self.paddle_offset,
        )
    }

    /// Ball starts directly above the paddle
    pub fn ball_spawn(&self) -> Vec2 {
        self.paddle_spawn() - Vec2::new(0.0, self.ball_offset)
    }
}
