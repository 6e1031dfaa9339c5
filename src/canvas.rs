//! Drawing seam between the simulation and the window.
//!
//! Everything the scene draws goes through [`Canvas`]: filled circles,
//! polylines and text, all in pixel coordinates. [`Projection`] turns
//! simulation metres into those pixels.

use graphics::{Context, Transformed};
use nalgebra::Point2;
use opengl_graphics::{GlGraphics, GlyphCache};
use tracing::trace;

use crate::Float;

pub type Color = [f32; 4];

macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        [$r as f32 / 255.0, $g as f32 / 255.0, $b as f32 / 255.0, 1.0]
    };
}

pub const BLACK: Color = rgb!(0, 0, 0);
pub const WHITE: Color = rgb!(255, 255, 255);
pub const YELLOW: Color = rgb!(255, 255, 0);
pub const BLUE: Color = rgb!(100, 149, 237);
pub const RED: Color = rgb!(188, 39, 50);
pub const DARK_GREY: Color = rgb!(80, 78, 81);

pub trait Canvas {
    fn circle(&mut self, center: [f64; 2], radius: f64, color: Color);
    fn polyline(&mut self, points: &[[f64; 2]], width: f64, color: Color);
    fn text(&mut self, position: [f64; 2], size: u32, text: &str, color: Color);
}

/// Linear map from simulation space (metres) to screen space (pixels),
/// with the simulation origin at the centre of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: Float,
    center: [f64; 2],
}

impl Projection {
    pub fn new(scale: Float, screen_dims: (f64, f64)) -> Self {
        Self {
            scale,
            center: [screen_dims.0 / 2.0, screen_dims.1 / 2.0],
        }
    }

    #[inline]
    pub fn to_screen(&self, p: &Point2<Float>) -> [f64; 2] {
        [p.x * self.scale + self.center[0], p.y * self.scale + self.center[1]]
    }

    /// Length in metres to length in pixels.
    #[inline]
    pub fn length(&self, metres: Float) -> f64 {
        metres * self.scale
    }
}

/// [`Canvas`] over piston's OpenGL backend. Text is dropped when no glyph cache is loaded.
pub struct GlCanvas<'a, 'g> {
    context: Context,
    gl: &'a mut GlGraphics,
    glyphs: Option<&'a mut GlyphCache<'g>>,
}

impl<'a, 'g> GlCanvas<'a, 'g> {
    pub fn new(context: Context, gl: &'a mut GlGraphics, glyphs: Option<&'a mut GlyphCache<'g>>) -> Self {
        Self { context, gl, glyphs }
    }
}

impl<'a, 'g> Canvas for GlCanvas<'a, 'g> {
    fn circle(&mut self, center: [f64; 2], radius: f64, color: Color) {
        graphics::ellipse(
            color,
            graphics::ellipse::circle(center[0], center[1], radius),
            self.context.transform,
            self.gl,
        );
    }

    fn polyline(&mut self, points: &[[f64; 2]], width: f64, color: Color) {
        let line = graphics::Line::new_round(color, width / 2.0);
        for pair in points.windows(2) {
            line.draw(
                [pair[0][0], pair[0][1], pair[1][0], pair[1][1]],
                &self.context.draw_state,
                self.context.transform,
                self.gl,
            );
        }
    }

    fn text(&mut self, position: [f64; 2], size: u32, text: &str, color: Color) {
        if let Some(glyphs) = self.glyphs.as_mut() {
            let transform = self.context.transform.trans(position[0], position[1]);
            if let Err(e) = graphics::text(color, size, text, &mut **glyphs, transform, self.gl) {
                trace!("skipped label {:?}: {:?}", text, e);
            }
        }
    }
}
