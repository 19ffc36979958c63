//! Fixed timestep simulation tick
//!
//! One tick runs paddle-move, ball-move-and-collide, event application and
//! pruning of destroyed objects, in that order.

use glam::Vec2;

use super::collision::{Bounce, bounce_velocity, classify, overlap};
use super::state::{Ending, GameEvent, GameSession, HitEffect, ObjectKind};
use crate::clamp;
use crate::tuning::Tuning;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
    /// Idle/demo mode - the paddle follows the ball
    pub idle: bool,
}

impl TickInput {
    /// Net direction from held keys: -1, 0 or +1 (both held cancel)
    pub fn direction(&self) -> f32 {
        let mut direction = 0.0;
        if self.left {
            direction -= 1.0;
        }
        if self.right {
            direction += 1.0;
        }
        direction
    }
}

/// Advance the session by one tick
///
/// Returns the ending if this tick finished the session. The caller must stop
/// ticking once an ending is returned.
pub fn tick(session: &mut GameSession, input: &TickInput, tuning: &Tuning) -> Option<Ending> {
    session.time_ticks += 1;

    move_paddle(session, input, tuning);
    let events = move_ball(session, tuning);
    let ending = apply_events(session, &events);
    session.objects.retain(|o| !o.destroyed);

    ending
}

/// Move the paddle by its net input direction and keep it fully on screen
pub fn move_paddle(session: &mut GameSession, input: &TickInput, tuning: &Tuning) {
    let direction = if input.idle {
        autopilot_direction(session, tuning)
    } else {
        input.direction()
    };

    let Some(index) = session.paddle_index() else {
        return;
    };
    let paddle = &mut session.objects[index];
    paddle.position.x += direction * tuning.paddle_speed;
    let half_width = paddle.size.x / 2.0;
    paddle.position.x = clamp(
        paddle.position.x,
        half_width,
        tuning.canvas_width - half_width,
    );
}

/// Steer toward the ball, holding still once within one step of it
fn autopilot_direction(session: &GameSession, tuning: &Tuning) -> f32 {
    let (Some(ball), Some(paddle)) = (session.ball(), session.paddle()) else {
        return 0.0;
    };
    let delta = ball.position.x - paddle.position.x;
    if delta.abs() <= tuning.paddle_speed {
        0.0
    } else {
        delta.signum()
    }
}

/// Integrate the ball and bounce it off everything it overlaps
///
/// Every overlapping object is handled in list order, so several bounces can
/// stack within one tick. Hit effects come back as events instead of being
/// applied here.
pub fn move_ball(session: &mut GameSession, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let Some(ball_index) = session.ball_index() else {
        return events;
    };
    let mut ball = session.objects[ball_index].clone();
    let Some(mut velocity) = ball.velocity() else {
        return events;
    };

    ball.position += velocity;

    for (index, other) in session.objects.iter().enumerate() {
        if index == ball_index {
            continue;
        }
        let Some(bounce) = classify(overlap(&ball, other), tuning.corner_tolerance) else {
            continue;
        };

        velocity = bounce_velocity(velocity, bounce, tuning.corner_boost);
        if bounce == Bounce::Corner {
            log::debug!("Corner hit, ball speed now {:.2}", velocity.length());
        }

        match other.on_hit {
            Some(HitEffect::Lose) => events.push(GameEvent::BallLost),
            Some(HitEffect::Break) => events.push(GameEvent::BrickBroken { index }),
            None => {}
        }
    }

    ball.kind = ObjectKind::Ball { velocity };
    session.objects[ball_index] = ball;

    events
}

/// Apply collision events to score and object state
///
/// Every terminal event overrides the one before it, so the last in list
/// order decides the ending.
pub fn apply_events(session: &mut GameSession, events: &[GameEvent]) -> Option<Ending> {
    let mut ending = None;

    for event in events {
        match *event {
            GameEvent::BallLost => ending = Some(Ending::Lost),
            GameEvent::BrickBroken { index } => {
                let Some(brick) = session.objects.get_mut(index) else {
                    continue;
                };
                if brick.destroyed {
                    continue;
                }
                brick.destroyed = true;
                session.score += 1;
                if session.score >= session.brick_total {
                    ending = Some(Ending::Won);
                }
            }
        }
    }

    ending
}

/// Ball speed in units per tick (zero when there is no ball)
pub fn ball_speed(session: &GameSession) -> f32 {
    session
        .ball()
        .and_then(|b| b.velocity())
        .map(Vec2::length)
        .unwrap_or(0.0)
}
