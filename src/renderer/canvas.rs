//! Canvas 2D surface (browser only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Rect, Surface, TextStyle};
use crate::error::GameError;

/// Draws onto an HTML canvas through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Find the canvas with `id` and acquire its 2D context
    pub fn from_element_id(id: &str) -> Result<Self, GameError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GameError::SurfaceUnavailable("no document".to_string()))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| GameError::SurfaceUnavailable(format!("no element #{id}")))?
            .dyn_into()
            .map_err(|_| GameError::SurfaceUnavailable(format!("#{id} is not a canvas")))?;
        Self::new(&canvas)
    }

    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, GameError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GameError::SurfaceUnavailable(format!("{e:?}")))?
            .ok_or_else(|| GameError::SurfaceUnavailable("2d context not supported".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::SurfaceUnavailable("unexpected context type".to_string()))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, rect: &Rect) {
        self.ctx.set_fill_style_str(&rect.color.to_css());
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.ctx.set_fill_style_str(&style.color.to_css());
        self.ctx.set_font(style.font);
        self.ctx.set_text_align(style.align.as_str());
        self.ctx.set_text_baseline(style.baseline.as_str());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
