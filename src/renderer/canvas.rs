//! Canvas 2D backend (wasm32 only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{Shape, build_frame};
use crate::consts::CANVAS_SIZE;
use crate::sim::GameState;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    size: f64,
}

impl CanvasRenderer {
    /// Size the canvas and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        canvas.set_width(CANVAS_SIZE);
        canvas.set_height(CANVAS_SIZE);
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        Some(Self {
            ctx,
            size: CANVAS_SIZE as f64,
        })
    }

    pub fn render(&self, state: &GameState) {
        self.draw(&build_frame(state));
    }

    pub fn draw(&self, shapes: &[Shape]) {
        let ctx = &self.ctx;
        for shape in shapes {
            match *shape {
                Shape::Clear { color } | Shape::Overlay { color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(0.0, 0.0, self.size, self.size);
                }
                Shape::Line { from, to, color } => {
                    ctx.set_stroke_style_str(color);
                    ctx.set_line_width(1.0);
                    ctx.begin_path();
                    ctx.move_to(from.0, from.1);
                    ctx.line_to(to.0, to.1);
                    ctx.stroke();
                }
                Shape::Rect { x, y, size, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(x, y, size, size);
                }
                Shape::Glyph {
                    letter,
                    x,
                    y,
                    font,
                    color,
                    glow,
                } => {
                    ctx.set_fill_style_str(color);
                    ctx.set_font(font);
                    if let Some(glow) = glow {
                        ctx.set_shadow_color(glow);
                        ctx.set_shadow_blur(10.0);
                    }
                    let mut buf = [0u8; 4];
                    if let Err(e) = ctx.fill_text(letter.encode_utf8(&mut buf), x, y) {
                        log::warn!("fill_text failed: {:?}", e);
                    }
                    if glow.is_some() {
                        ctx.set_shadow_blur(0.0);
                    }
                }
            }
        }
    }
}
