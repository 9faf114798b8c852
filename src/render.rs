use crate::constants::{dust_rgba, DUST_TRANSPARENT};
use crate::core::ParticleField;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas renderer for the dust layer.
pub struct DustRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl DustRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Clear the surface and draw every particle as a soft radial glow.
    pub fn draw(&self, field: &ParticleField) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        for p in field.particles() {
            let x = p.position.x as f64;
            let y = p.position.y as f64;
            let r = p.glow_radius() as f64;
            let grad = match self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) {
                Ok(g) => g,
                Err(_) => continue,
            };
            _ = grad.add_color_stop(0.0, &dust_rgba(p.alpha));
            _ = grad.add_color_stop(1.0, DUST_TRANSPARENT);
            self.ctx.set_fill_style_canvas_gradient(&grad);
            self.ctx.begin_path();
            _ = self.ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
            self.ctx.fill();
        }
    }

    pub fn clear(&self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }
}
