use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{DrawCommand, Surface};

/// `CanvasRenderingContext2d` backed surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn draw_dot(&self, x: f64, y: f64, radius: f64, color: &str, alpha: f64, glow: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(color);
        ctx.set_global_alpha(alpha);

        ctx.begin_path();
        ctx.arc(x, y, radius, 0.0, PI * 2.0)?;
        ctx.fill();

        ctx.set_shadow_blur(glow);
        ctx.set_shadow_color(color);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
        ctx.set_global_alpha(1.0);
        Ok(())
    }

    fn draw_beam(&self, command: &DrawCommand) -> Result<(), JsValue> {
        let DrawCommand::Beam { tail, head, color, head_alpha, width } = command else {
            return Ok(());
        };
        let ctx = &self.ctx;
        ctx.set_line_width(*width);

        let grad = ctx.create_linear_gradient(tail.0, tail.1, head.0, head.1);
        grad.add_color_stop(0.0, &color.with_alpha(0.0).css())?;
        grad.add_color_stop(1.0, &color.with_alpha(*head_alpha).css())?;
        ctx.set_stroke_style_canvas_gradient(&grad);

        ctx.begin_path();
        ctx.move_to(tail.0, tail.1);
        ctx.line_to(head.0, head.1);
        ctx.stroke();
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn draw(&mut self, command: &DrawCommand) {
        let result = match command {
            DrawCommand::Clear { width, height } => {
                self.ctx.clear_rect(0.0, 0.0, *width, *height);
                Ok(())
            }
            DrawCommand::Line { from, to, color, width } => {
                self.ctx.set_stroke_style_str(&color.css());
                self.ctx.set_line_width(*width);
                self.ctx.begin_path();
                self.ctx.move_to(from.0, from.1);
                self.ctx.line_to(to.0, to.1);
                self.ctx.stroke();
                Ok(())
            }
            DrawCommand::Dot { center, radius, color, alpha, glow } => {
                self.draw_dot(center.0, center.1, *radius, &color.css(), *alpha, *glow)
            }
            DrawCommand::Beam { .. } => self.draw_beam(command),
        };
        if let Err(e) = result {
            log::warn!("canvas draw failed: {:?}", e);
        }
    }
}
