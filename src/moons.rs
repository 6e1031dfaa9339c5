//! Decorative moons. They circle their planet's screen position at a fixed
//! radius and angular rate and take no part in the gravity step.

use std::f64::consts::PI;

use crate::canvas::{Canvas, Color, Projection, BLUE, RED, WHITE};
use crate::{tools, Float, AU};

const SINGLE_ORBIT: Float = 0.15 * AU;
const SINGLE_STEP: f64 = PI / 40.0;
const SINGLE_RADIUS: f64 = 4.0;

const OUTER_ORBIT: Float = 0.15 * AU;
const OUTER_STEP: f64 = PI / 50.0;
const OUTER_RADIUS: f64 = 2.0;

const INNER_ORBIT: Float = 0.10 * AU;
const INNER_STEP: f64 = PI / 30.0;
const INNER_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Moons {
    None,
    Single { phase: f64 },
    Dual { outer_phase: f64, inner_phase: f64 },
}

/// One moon ready to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Satellite {
    pub position: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Default for Moons {
    fn default() -> Self {
        Moons::None
    }
}

impl Moons {
    pub fn single() -> Self {
        Moons::Single { phase: 0.0 }
    }

    pub fn dual() -> Self {
        Moons::Dual { outer_phase: 0.0, inner_phase: 0.0 }
    }

    pub fn count(&self) -> usize {
        match self {
            Moons::None => 0,
            Moons::Single { .. } => 1,
            Moons::Dual { .. } => 2,
        }
    }

    /// Moves every moon one frame along its orbit (clockwise on screen).
    pub fn advance(&mut self) {
        match self {
            Moons::None => {}
            Moons::Single { phase } => *phase -= SINGLE_STEP,
            Moons::Dual { outer_phase, inner_phase } => {
                *outer_phase -= OUTER_STEP;
                *inner_phase -= INNER_STEP;
            }
        }
    }

    pub fn satellites(&self, center: [f64; 2], projection: &Projection) -> Vec<Satellite> {
        match *self {
            Moons::None => Vec::new(),
            Moons::Single { phase } => vec![Satellite {
                position: tools::orbit_point(center, projection.length(SINGLE_ORBIT), phase),
                radius: SINGLE_RADIUS,
                color: WHITE,
            }],
            Moons::Dual { outer_phase, inner_phase } => vec![
                Satellite {
                    position: tools::orbit_point(center, projection.length(OUTER_ORBIT), outer_phase),
                    radius: OUTER_RADIUS,
                    color: BLUE,
                },
                Satellite {
                    position: tools::orbit_point(center, projection.length(INNER_ORBIT), inner_phase),
                    radius: INNER_RADIUS,
                    color: RED,
                },
            ],
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, center: [f64; 2], projection: &Projection) {
        for moon in self.satellites(center, projection) {
            canvas.circle(moon.position, moon.radius, moon.color);
        }
    }
}
