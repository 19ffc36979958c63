//! Fixed-tick simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick is one fixed step, no wall-clock time
//! - Randomness only through a caller-provided RNG
//! - Exhaustive, list-ordered iteration over objects
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Bounce, bounce_velocity, classify, overlap};
pub use state::{
    Color, Ending, GameEvent, GameObject, GamePhase, GameSession, HitEffect, ObjectKind,
    ROW_COLORS, WallSide,
};
pub use tick::{TickInput, ball_speed, tick};
