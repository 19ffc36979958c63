//! Surface that records draw calls instead of rasterizing them

use super::{Rect, Surface, TextStyle};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Rect(Rect),
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
    },
}

/// Records every primitive in call order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect(_)))
            .count()
    }

    /// Text strings in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, rect: &Rect) {
        self.commands.push(DrawCommand::Rect(*rect));
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
    }
}
