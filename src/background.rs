//! Animated particle background drawn on a 2D canvas.

use crate::constants::{link_stroke_style, PARTICLE_COLOR, PARTICLE_COUNT_ATTR};
use crate::dom;
use folio_core::{Backdrop, FieldConfig, Surface, LINK_WIDTH};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] backed by a `CanvasRenderingContext2d`.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    particle_fill: JsValue,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            particle_fill: JsValue::from_str(PARTICLE_COLOR),
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    #[allow(deprecated)]
    fn fill_disc(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style(&self.particle_fill);
        self.ctx.fill();
    }

    #[allow(deprecated)]
    fn stroke_link(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.ctx
            .set_stroke_style(&JsValue::from_str(&link_stroke_style(alpha)));
        self.ctx.set_line_width(LINK_WIDTH);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}

/// Owns everything the background needs between frames.
pub struct Background {
    canvas: web::HtmlCanvasElement,
    surface: CanvasSurface,
    backdrop: Backdrop,
    rng: StdRng,
    running: bool,
}

impl Background {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(dom::js_err)?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let config = field_config(&canvas);
        let size = dom::sync_canvas_to_viewport(&canvas);
        let mut rng = StdRng::from_entropy();
        let backdrop = Backdrop::new(config, size, &mut rng);
        log::info!(
            "[background] {} particles on {:.0}x{:.0}",
            backdrop.field().len(),
            size.x,
            size.y
        );

        Ok(Self {
            canvas,
            surface: CanvasSurface::new(ctx),
            backdrop,
            rng,
            running: true,
        })
    }

    /// Viewport changed: resize the canvas and start over with a fresh field.
    pub fn resize(&mut self) {
        let size = dom::sync_canvas_to_viewport(&self.canvas);
        self.backdrop.resize(size, &mut self.rng);
    }

    pub fn pointer_moved(&mut self, client: Vec2) {
        self.backdrop.pointer_moved(client);
    }

    /// Draw one frame. Returns `false` once torn down so the loop can stop.
    pub fn frame(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.backdrop.frame(&mut self.surface);
        true
    }

    /// Stop animating and blank the canvas.
    pub fn teardown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.surface.clear(self.backdrop.field().bounds());
        log::info!("[background] torn down");
    }
}

fn field_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let config = FieldConfig::default();
    match canvas.get_attribute(PARTICLE_COUNT_ATTR) {
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(count) => config.with_count(count),
            Err(_) => {
                log::warn!("[background] ignoring {}={:?}", PARTICLE_COUNT_ATTR, raw);
                config
            }
        },
        None => config,
    }
}
