//! Canvas 2D backend

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{Shape, css_color, scene};
use crate::platform::Renderer;
use crate::sim::{Arena, GameState};

/// Paints frames onto an HTML canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn paint(&self, shape: &Shape) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match *shape {
            Shape::Clear { size, color } => {
                ctx.set_fill_style_str(&css_color(color));
                ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
            }
            Shape::DashedLine {
                from,
                to,
                dash,
                width,
                color,
            } => {
                let pattern = js_sys::Array::of2(
                    &JsValue::from_f64(dash[0] as f64),
                    &JsValue::from_f64(dash[1] as f64),
                );
                ctx.set_line_dash(&pattern)?;
                ctx.set_line_width(width as f64);
                ctx.set_stroke_style_str(&css_color(color));
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
                ctx.set_line_dash(&js_sys::Array::new())?;
            }
            Shape::Rect { min, size, color } => {
                ctx.set_fill_style_str(&css_color(color));
                ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&css_color(color));
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
                ctx.fill();
            }
        }
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, state: &GameState, arena: &Arena) {
        for shape in scene(state, arena) {
            if let Err(e) = self.paint(&shape) {
                log::warn!("Render error: {:?}", e);
            }
        }
    }
}
