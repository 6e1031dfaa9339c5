use nalgebra::{Point2, Vector2};

use crate::{tools, Float, GRAV_CONST};

/// Pull of one body on another, together with the separation it was computed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    pub force: Vector2<Float>,
    pub distance: Float,
}

pub trait Body {
    fn position(&self) -> &Point2<Float>;
    fn position_mut(&mut self) -> &mut Point2<Float>;
    fn velocity(&self) -> &Vector2<Float>;
    fn velocity_mut(&mut self) -> &mut Vector2<Float>;
    fn mass(&self) -> &Float;

    fn attraction_to(&self, other_position: &Point2<Float>, other_mass: Float) -> Attraction {
        // F = GmM/r^2, directed along atan2(dy, dx).
        // Coincident positions give r = 0 and a non-finite force; callers see NaN/inf.
        let r = other_position - self.position();
        let distance = r.norm();

        let force = GRAV_CONST * *self.mass() * other_mass / (distance * distance);
        Attraction {
            force: tools::get_components(force, tools::get_angle(&r)),
            distance,
        }
    }

    fn newtonian_force(&self, other: &dyn Body) -> Attraction {
        self.attraction_to(other.position(), *other.mass())
    }

    fn apply_force(&mut self, force: &Vector2<Float>, dt: Float) {
        // F = dp/dt
        // dp = m dv = F dt
        // dv = F dt/m
        let dv: Vector2<Float> = force * (dt / self.mass());
        *self.velocity_mut() += dv;
    }

    fn update_position(&mut self, dt: Float) {
        // v = dx/dt
        // v dt = dx
        let dr = self.velocity() * dt;
        *self.position_mut() += dr;
    }

    fn is_finite(&self) -> bool {
        let p = self.position();
        let v = self.velocity();
        p.x.is_finite() && p.y.is_finite() && v.x.is_finite() && v.y.is_finite()
    }
}

// Macro for implementing simple functions for Body trait
macro_rules! default_body_gets {
    ($position:ident, $velocity:ident, $mass:ident) => {
        fn position(&self) -> &Point2<Float> { &self.$position }
        fn position_mut(&mut self) -> &mut Point2<Float> { &mut self.$position }
        fn velocity(&self) -> &Vector2<Float> { &self.$velocity }
        fn velocity_mut(&mut self) -> &mut Vector2<Float> { &mut self.$velocity }
        fn mass(&self) -> &Float { &self.$mass }
    };
}
