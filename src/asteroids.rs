use std::f64::consts::PI;

use nalgebra::Point2;
use rand::Rng;

use crate::canvas::{Canvas, Projection, WHITE};
use crate::{tools, Float};

const ASTEROID_ANGLE_STEP: Float = PI / 100.0;
const ASTEROID_RADIUS: f64 = 1.0;

/// Static ring of asteroids. Built once, then drawn unchanged every frame.
#[derive(Debug, Clone, Default)]
pub struct AsteroidBelt {
    positions: Vec<Point2<Float>>,
}

impl AsteroidBelt {
    /// `count` asteroids at random distances in `[inner, outer]` metres from the origin,
    /// each one `ASTEROID_ANGLE_STEP` further round than the last.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, inner: Float, outer: Float) -> Self {
        let (inner, outer) = (inner.min(outer), inner.max(outer));
        let mut angle: Float = 0.0;

        let positions = (0..count)
            .map(|_| {
                let r = rng.gen_range(inner..=outer);
                angle += ASTEROID_ANGLE_STEP;
                Point2::from(tools::get_components(r, angle))
            })
            .collect();

        Self { positions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn positions(&self) -> &[Point2<Float>] {
        &self.positions
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, projection: &Projection) {
        for p in self.positions() {
            canvas.circle(projection.to_screen(p), ASTEROID_RADIUS, WHITE);
        }
    }
}
