//! 2D canvas painter (browser only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::draw_list::{DrawList, colors};

/// Paints draw lists onto an HTML canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    pub size: (u32, u32),
}

impl CanvasRenderer {
    /// Wrap a canvas; None if it has no 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            size: (canvas.width(), canvas.height()),
        })
    }

    pub fn paint(&self, list: &DrawList) {
        let (w, h) = self.size;
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);

        for quad in &list.quads {
            let [x, y, width, height] = quad.rect;
            self.ctx.set_fill_style_str(&colors::css(quad.color));
            self.ctx
                .fill_rect(x as f64, y as f64, width as f64, height as f64);
        }

        self.ctx.set_fill_style_str(&colors::css(colors::TEXT));
        for line in &list.text {
            self.ctx.set_font(&format!("{}px Arial", line.size_px));
            let _ = self.ctx.fill_text(&line.text, line.x as f64, line.y as f64);
        }
    }
}
