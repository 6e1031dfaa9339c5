use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::canvas::{Canvas, Color, Projection, WHITE};
use crate::moons::Moons;
use crate::trails::Trail;
use crate::Float;

const LABEL_OFFSET: f64 = 4.0;

#[derive(new, Debug, Clone)]
pub struct Planet {
    pub name: &'static str,
    position: Point2<Float>,
    velocity: Vector2<Float>,
    mass: Float,
    pub radius: f64,    // Pixels, only for drawing
    pub color: Color,
    pub moons: Moons,
    #[new(default)]
    pub sun: bool,
    #[new(default)]
    pub distance_to_sun: Float,
    #[new(default)]
    pub trail: Trail,
}

impl Body for Planet {
    default_body_gets!(position, velocity, mass);
}

impl Planet {
    pub fn into_sun(mut self) -> Self {
        self.sun = true;
        self
    }

    /// Distance label shown next to the planet, in kilometres.
    pub fn distance_label(&self) -> String {
        format!("{:.1}km", self.distance_to_sun / 1000.0)
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, projection: &Projection, label_size: Option<u32>) {
        let center = projection.to_screen(&self.position);

        self.trail.draw(canvas, projection, self.color);
        canvas.circle(center, self.radius, self.color);
        self.moons.draw(canvas, center, projection);

        if let (false, Some(size)) = (self.sun, label_size) {
            canvas.text(
                [center[0] + self.radius + LABEL_OFFSET, center[1] - self.radius],
                size,
                &self.distance_label(),
                WHITE,
            );
        }
    }
}
