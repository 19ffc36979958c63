//! Collision detection and response for axis-aligned boxes
//!
//! Detection is a Minkowski-sum half-extent test: two boxes touch when both
//! per-axis overlaps are positive. Response picks a bounce from how the two
//! overlaps compare.

use glam::Vec2;

use super::state::GameObject;
use crate::box_overlap;

/// How the ball bounces off a struck box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce {
    /// Overlaps nearly equal: both components flip and speed up
    Corner,
    /// Side hit: x flips
    Horizontal,
    /// Top/bottom hit: y flips
    Vertical,
}

/// Per-axis overlap of the ball against another object
#[inline]
pub fn overlap(ball: &GameObject, other: &GameObject) -> Vec2 {
    box_overlap(ball.position, ball.size, other.position, other.size)
}

/// Classify an overlap; `None` when the boxes are not touching
pub fn classify(overlap: Vec2, corner_tolerance: f32) -> Option<Bounce> {
    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return None;
    }
    if (overlap.x - overlap.y).abs() < corner_tolerance {
        Some(Bounce::Corner)
    } else if overlap.x < overlap.y {
        Some(Bounce::Horizontal)
    } else {
        Some(Bounce::Vertical)
    }
}

/// Apply a bounce to a velocity
///
/// Corner hits multiply speed by `corner_boost` every time; there is no cap.
#[inline]
pub fn bounce_velocity(velocity: Vec2, bounce: Bounce, corner_boost: f32) -> Vec2 {
    match bounce {
        Bounce::Corner => velocity * -corner_boost,
        Bounce::Horizontal => Vec2::new(-velocity.x, velocity.y),
        Bounce::Vertical => Vec2::new(velocity.x, -velocity.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CORNER_BOOST, CORNER_TOLERANCE};

    #[test]
    fn test_no_contact() {
        assert_eq!(classify(Vec2::new(0.0, 10.0), CORNER_TOLERANCE), None);
        assert_eq!(classify(Vec2::new(10.0, -1.0), CORNER_TOLERANCE), None);
    }

    #[test]
    fn test_corner_hit_flips_and_boosts() {
        let bounce = classify(Vec2::new(10.0, 10.0), CORNER_TOLERANCE);
        assert_eq!(bounce, Some(Bounce::Corner));

        let v = bounce_velocity(Vec2::new(3.0, -4.0), Bounce::Corner, CORNER_BOOST);
        assert!((v.x - (-3.0 * 1.05)).abs() < 1e-6);
        assert!((v.y - (4.0 * 1.05)).abs() < 1e-6);
        assert!((v.length() - 5.0 * 1.05).abs() < 1e-5);
    }

    #[test]
    fn test_corner_boost_compounds() {
        let mut v = Vec2::new(3.0, 4.0);
        for _ in 0..10 {
            v = bounce_velocity(v, Bounce::Corner, CORNER_BOOST);
        }
        assert!((v.length() - 5.0 * 1.05f32.powi(10)).abs() < 1e-3);
    }

    #[test]
    fn test_edge_hit_flips_x_only() {
        let bounce = classify(Vec2::new(5.0, 20.0), CORNER_TOLERANCE);
        assert_eq!(bounce, Some(Bounce::Horizontal));

        let v = bounce_velocity(Vec2::new(3.0, -4.0), Bounce::Horizontal, CORNER_BOOST);
        assert_eq!(v, Vec2::new(-3.0, -4.0));
    }

    #[test]
    fn test_flat_hit_flips_y_only() {
        let bounce = classify(Vec2::new(20.0, 5.0), CORNER_TOLERANCE);
        assert_eq!(bounce, Some(Bounce::Vertical));

        let v = bounce_velocity(Vec2::new(3.0, -4.0), Bounce::Vertical, CORNER_BOOST);
        assert_eq!(v, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_tolerance_band_edge() {
        // Difference of exactly the tolerance is not a corner hit
        assert_eq!(
            classify(Vec2::new(4.0, 6.0), CORNER_TOLERANCE),
            Some(Bounce::Horizontal)
        );
        assert_eq!(
            classify(Vec2::new(4.5, 6.0), CORNER_TOLERANCE),
            Some(Bounce::Corner)
        );
    }
}
