use nalgebra::{Point2, Vector2};

use crate::canvas::{Color, BLUE, DARK_GREY, RED, WHITE, YELLOW};
use crate::moons::Moons;
use crate::planet::Planet;
use crate::{Float, AU};

/// Literal starting conditions for one body. Every body starts on the x axis
/// moving along y.
struct InitialBody {
    name: &'static str,
    x_au: Float,
    mass: Float,
    vy_km_s: Float,
    radius: f64,
    color: Color,
    moons: Moons,
    sun: bool,
}

impl InitialBody {
    fn build(&self) -> Planet {
        let planet = Planet::new(
            self.name,
            Point2::new(self.x_au * AU, 0.0),
            Vector2::new(0.0, self.vy_km_s * 1000.0),
            self.mass,
            self.radius,
            self.color,
            self.moons,
        );

        if self.sun {
            planet.into_sun()
        } else {
            planet
        }
    }
}

/// Sun plus the four inner planets.
pub fn inner_solar_system() -> Vec<Planet> {
    let bodies = [
        InitialBody { name: "Sun", x_au: 0.0, mass: 1.98892e30, vy_km_s: 0.0, radius: 30.0, color: YELLOW, moons: Moons::None, sun: true },
        InitialBody { name: "Earth", x_au: -1.0, mass: 5.9742e24, vy_km_s: 29.783, radius: 16.0, color: BLUE, moons: Moons::single(), sun: false },
        InitialBody { name: "Mars", x_au: -1.524, mass: 6.39e23, vy_km_s: 24.077, radius: 12.0, color: RED, moons: Moons::dual(), sun: false },
        InitialBody { name: "Mercury", x_au: 0.387, mass: 3.30e23, vy_km_s: -47.4, radius: 8.0, color: DARK_GREY, moons: Moons::None, sun: false },
        InitialBody { name: "Venus", x_au: 0.723, mass: 4.8685e24, vy_km_s: 35.02, radius: 14.0, color: WHITE, moons: Moons::None, sun: false },
    ];

    bodies.iter().map(InitialBody::build).collect()
}
