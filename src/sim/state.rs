//! Game state and core simulation types
//!
//! Every entity is an axis-aligned box; what it does is decided by its
//! [`ObjectKind`] tag and the optional visual/hit payloads it carries.

use glam::Vec2;
use rand::Rng;

use crate::tuning::Tuning;

/// An sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string (`rgb(...)` when opaque, `rgba(...)` otherwise)
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Brick colors, cycled by row from the top
pub const ROW_COLORS: [Color; 5] = [
    Color::rgb(153, 51, 0),
    Color::rgb(255, 0, 0),
    Color::rgb(255, 153, 204),
    Color::rgb(0, 255, 0),
    Color::rgb(255, 255, 153),
];

/// Which canvas edge a wall guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// Entity variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectKind {
    Wall(WallSide),
    Paddle,
    /// The only moving, non-player object
    Ball { velocity: Vec2 },
    Brick { row: u32, column: u32 },
}

/// What happens when the ball strikes an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitEffect {
    /// Ball is lost (bottom wall)
    Lose,
    /// Object is destroyed and scores a point (bricks)
    Break,
}

/// Events emitted by the collision pass, applied centrally after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BallLost,
    /// Brick at this index of `GameSession::objects` was struck
    BrickBroken { index: usize },
}

/// A box entity: center position plus full width/height
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    pub position: Vec2,
    pub size: Vec2,
    pub kind: ObjectKind,
    /// Drawn as a beveled block when present
    pub visual: Option<Color>,
    pub on_hit: Option<HitEffect>,
    /// Pruned from the session at the end of the tick
    pub destroyed: bool,
}

impl GameObject {
    /// A boundary wall spanning just outside one canvas edge
    pub fn wall(side: WallSide, tuning: &Tuning) -> Self {
        let (w, h) = (tuning.canvas_width, tuning.canvas_height);
        let t = tuning.wall_thickness;
        let (position, size) = match side {
            WallSide::Left => (Vec2::new(-t / 2.0, h / 2.0), Vec2::new(t, h)),
            WallSide::Right => (Vec2::new(w + t / 2.0, h / 2.0), Vec2::new(t, h)),
            WallSide::Top => (Vec2::new(w / 2.0, -t / 2.0), Vec2::new(w, t)),
            WallSide::Bottom => (Vec2::new(w / 2.0, h + t / 2.0), Vec2::new(w, t)),
        };
        Self {
            position,
            size,
            kind: ObjectKind::Wall(side),
            visual: None,
            on_hit: (side == WallSide::Bottom).then_some(HitEffect::Lose),
            destroyed: false,
        }
    }

    pub fn paddle(tuning: &Tuning) -> Self {
        Self {
            position: tuning.paddle_spawn(),
            size: tuning.paddle_size(),
            kind: ObjectKind::Paddle,
            visual: Some(Color::WHITE),
            on_hit: None,
            destroyed: false,
        }
    }

    /// The ball, launched diagonally upward; `rightward` picks the horizontal sign
    pub fn ball(tuning: &Tuning, rightward: bool) -> Self {
        let component = tuning.ball_speed * std::f32::consts::FRAC_1_SQRT_2;
        let sign = if rightward { 1.0 } else { -1.0 };
        Self {
            position: tuning.ball_spawn(),
            size: Vec2::splat(tuning.ball_size),
            kind: ObjectKind::Ball {
                velocity: Vec2::new(component * sign, -component),
            },
            visual: Some(Color::WHITE),
            on_hit: None,
            destroyed: false,
        }
    }

    /// Brick at grid cell (`row`, `column`), counted from the top-left
    pub fn brick(row: u32, column: u32, tuning: &Tuning) -> Self {
        let size = tuning.brick_size();
        let position = Vec2::new(
            tuning.brick_spacing_horizontal / 2.0
                + size.x / 2.0
                + column as f32 * (size.x + tuning.brick_spacing_horizontal),
            tuning.brick_top
                + tuning.brick_spacing_vertical
                + row as f32 * (size.y + tuning.brick_spacing_vertical),
        );
        Self {
            position,
            size,
            kind: ObjectKind::Brick { row, column },
            visual: Some(ROW_COLORS[row as usize % ROW_COLORS.len()]),
            on_hit: Some(HitEffect::Break),
            destroyed: false,
        }
    }

    pub fn is_ball(&self) -> bool {
        matches!(self.kind, ObjectKind::Ball { .. })
    }

    pub fn is_paddle(&self) -> bool {
        self.kind == ObjectKind::Paddle
    }

    pub fn is_brick(&self) -> bool {
        matches!(self.kind, ObjectKind::Brick { .. })
    }

    pub fn velocity(&self) -> Option<Vec2> {
        match self.kind {
            ObjectKind::Ball { velocity } => Some(velocity),
            _ => None,
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Lost,
    Won,
}

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the start key
    Title,
    /// Ticking
    Playing,
    /// Terminal; a reload is required to play again
    Ended(Ending),
}

/// Everything owned by one play session
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Walls, paddle, ball and bricks, in creation order
    pub objects: Vec<GameObject>,
    pub score: u32,
    /// Best score loaded when the session started
    pub best_score: u32,
    /// Score needed to win
    pub brick_total: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameSession {
    /// Build the full layout: 4 walls, paddle, ball, then the brick grid
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R, best_score: u32) -> Self {
        let mut objects = Vec::with_capacity(6 + tuning.brick_total() as usize);
        for side in [WallSide::Left, WallSide::Right, WallSide::Top, WallSide::Bottom] {
            objects.push(GameObject::wall(side, tuning));
        }
        objects.push(GameObject::paddle(tuning));
        objects.push(GameObject::ball(tuning, rng.random_bool(0.5)));
        for row in 0..tuning.brick_rows {
            for column in 0..tuning.brick_columns {
                objects.push(GameObject::brick(row, column, tuning));
            }
        }

        Self {
            objects,
            score: 0,
            best_score,
            brick_total: tuning.brick_total(),
            time_ticks: 0,
        }
    }

    pub fn ball_index(&self) -> Option<usize> {
        self.objects.iter().position(GameObject::is_ball)
    }

    pub fn paddle_index(&self) -> Option<usize> {
        self.objects.iter().position(GameObject::is_paddle)
    }

    pub fn ball(&self) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.is_ball())
    }

    pub fn paddle(&self) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.is_paddle())
    }

    pub fn bricks_remaining(&self) -> usize {
        self.objects.iter().filter(|o| o.is_brick()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_session_layout() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let session = GameSession::new(&tuning, &mut rng, 3);

        assert_eq!(session.objects.len(), 4 + 1 + 1 + 50);
        assert_eq!(session.bricks_remaining(), 50);
        assert_eq!(session.brick_total, 50);
        assert_eq!(session.best_score, 3);
        assert_eq!(session.objects.iter().filter(|o| o.is_ball()).count(), 1);
        assert_eq!(session.objects.iter().filter(|o| o.is_paddle()).count(), 1);
    }

    #[test]
    fn test_only_bottom_wall_loses() {
        let tuning = Tuning::default();
        for side in [WallSide::Left, WallSide::Right, WallSide::Top] {
            assert_eq!(GameObject::wall(side, &tuning).on_hit, None);
        }
        let bottom = GameObject::wall(WallSide::Bottom, &tuning);
        assert_eq!(bottom.on_hit, Some(HitEffect::Lose));
        assert_eq!(bottom.position, Vec2::new(640.0, 725.0));
        assert_eq!(bottom.size, Vec2::new(1280.0, 10.0));
        assert!(bottom.visual.is_none());
    }

    #[test]
    fn test_ball_launch_velocity() {
        let tuning = Tuning::default();
        for rightward in [false, true] {
            let ball = GameObject::ball(&tuning, rightward);
            let v = ball.velocity().unwrap();
            assert!((v.length() - 5.0).abs() < 1e-5);
            assert!((v.x.abs() - v.y.abs()).abs() < 1e-6);
            assert!(v.y < 0.0, "ball always launches upward");
            assert_eq!(v.x > 0.0, rightward);
        }
    }

    #[test]
    fn test_brick_grid_positions() {
        let tuning = Tuning::default();
        let first = GameObject::brick(0, 0, &tuning);
        assert_eq!(first.position, Vec2::new(64.0, 66.0));
        assert_eq!(first.visual, Some(ROW_COLORS[0]));

        let last = GameObject::brick(4, 9, &tuning);
        assert_eq!(last.position, Vec2::new(64.0 + 9.0 * 128.0, 66.0 + 4.0 * 72.0));
        assert_eq!(last.visual, Some(ROW_COLORS[4]));
        assert_eq!(last.on_hit, Some(HitEffect::Break));
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::rgb(153, 51, 0).to_css(), "rgb(153, 51, 0)");
        assert_eq!(Color::rgba(0, 0, 0, 0.3).to_css(), "rgba(0, 0, 0, 0.3)");
    }
}
