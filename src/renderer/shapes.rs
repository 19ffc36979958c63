//! Shape generation for 2D primitives

use glam::Vec2;

use crate::sim::Color;

/// Highlight laid over the top and left edges of a block
pub const BEVEL_LIGHT: Color = Color::rgba(255, 255, 255, 0.3);
/// Shadow laid over the bottom and right edges of a block
pub const BEVEL_DARK: Color = Color::rgba(0, 0, 0, 0.3);

/// A filled axis-aligned rectangle (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }
}

/// Generate the rectangles for a beveled block centered at `center`
///
/// Draw order matters: base fill, light top/left, dark bottom/right. The dark
/// strips overlap the light ones at the top-right and bottom-left corners.
pub fn beveled_block(center: Vec2, size: Vec2, color: Color, bevel: f32) -> [Rect; 5] {
    let x = center.x - size.x / 2.0;
    let y = center.y - size.y / 2.0;
    let (w, h) = (size.x, size.y);

    [
        Rect::new(x, y, w, h, color),
        // Top + left highlight
        Rect::new(x, y, w, bevel, BEVEL_LIGHT),
        Rect::new(x, y, bevel, h, BEVEL_LIGHT),
        // Bottom + right shadow
        Rect::new(x, y + h - bevel, w, bevel, BEVEL_DARK),
        Rect::new(x + w - bevel, y, bevel, h, BEVEL_DARK),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beveled_block_layout() {
        let red = Color::rgb(255, 0, 0);
        let rects = beveled_block(Vec2::new(100.0, 50.0), Vec2::new(40.0, 20.0), red, 4.0);

        assert_eq!(rects[0], Rect::new(80.0, 40.0, 40.0, 20.0, red));
        assert_eq!(rects[1], Rect::new(80.0, 40.0, 40.0, 4.0, BEVEL_LIGHT));
        assert_eq!(rects[2], Rect::new(80.0, 40.0, 4.0, 20.0, BEVEL_LIGHT));
        assert_eq!(rects[3], Rect::new(80.0, 56.0, 40.0, 4.0, BEVEL_DARK));
        assert_eq!(rects[4], Rect::new(116.0, 40.0, 4.0, 20.0, BEVEL_DARK));
    }
}
