//! The body registry and the per-frame gravity step.
//!
//! Every step sums the pairwise Newtonian pull on each body, then advances
//! velocity and position by explicit Euler. [`UpdateOrder`] decides whether
//! all pulls come from one frozen snapshot of positions, or whether bodies
//! later in the list see the already-moved earlier ones.

use nalgebra::Vector2;
use tracing::warn;

use crate::body::Body;
use crate::planet::Planet;
use crate::{Float, GRAV_CONST};

const SECONDS_PER_DAY: Float = 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOrder {
    /// Pulls for every body are computed before any body moves.
    Snapshot,
    /// Each body moves as soon as its own pull is known.
    Sequential,
}

impl Default for UpdateOrder {
    fn default() -> Self {
        UpdateOrder::Snapshot
    }
}

/// Net pull on one body for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pull {
    pub force: Vector2<Float>,
    pub distance_to_sun: Option<Float>,
}

impl Default for Pull {
    fn default() -> Self {
        Pull {
            force: Vector2::zeros(),
            distance_to_sun: None,
        }
    }
}

pub struct SolarSystem {
    planets: Vec<Planet>,
    order: UpdateOrder,
    steps: u64,
    elapsed: Float,
}

impl SolarSystem {
    pub fn new(planets: Vec<Planet>, order: UpdateOrder) -> Self {
        Self {
            planets,
            order,
            steps: 0,
            elapsed: 0.0,
        }
    }

    #[inline]
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    #[inline]
    pub fn order(&self) -> UpdateOrder {
        self.order
    }

    pub fn sun(&self) -> Option<&Planet> {
        self.planets.iter().find(|p| p.sun)
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[inline]
    pub fn elapsed_seconds(&self) -> Float {
        self.elapsed
    }

    #[inline]
    pub fn elapsed_days(&self) -> Float {
        self.elapsed / SECONDS_PER_DAY
    }

    /// Sum of the pulls of every other body on body `index`, at current positions.
    pub fn pull_on(&self, index: usize) -> Pull {
        let body = &self.planets[index];
        let mut pull = Pull::default();

        for (j, other) in self.planets.iter().enumerate() {
            if j == index {
                continue;
            }

            let attraction = body.newtonian_force(other);
            if other.sun {
                pull.distance_to_sun = Some(attraction.distance);
            }
            pull.force += attraction.force;
        }

        pull
    }

    /// Advances every body by `dt` seconds and appends its new position to its trail.
    pub fn step(&mut self, dt: Float) {
        match self.order {
            UpdateOrder::Snapshot => {
                let pulls: Vec<Pull> = (0..self.planets.len()).map(|i| self.pull_on(i)).collect();
                for (planet, pull) in self.planets.iter_mut().zip(pulls) {
                    Self::apply(planet, pull, dt);
                }
            }
            UpdateOrder::Sequential => {
                for i in 0..self.planets.len() {
                    let pull = self.pull_on(i);
                    Self::apply(&mut self.planets[i], pull, dt);
                }
            }
        }

        self.steps += 1;
        self.elapsed += dt;
    }

    fn apply(planet: &mut Planet, pull: Pull, dt: Float) {
        let was_finite = planet.is_finite();

        if let Some(distance) = pull.distance_to_sun {
            planet.distance_to_sun = distance;
        }
        planet.apply_force(&pull.force, dt);
        planet.update_position(dt);
        let position = *planet.position();
        planet.trail.add_node(position);
        planet.moons.advance();

        if was_finite && !planet.is_finite() {
            warn!(
                planet = planet.name,
                "state is no longer finite; two bodies likely share a position"
            );
        }
    }

    /// Kinetic plus pairwise potential energy, in joules.
    pub fn total_energy(&self) -> Float {
        let kinetic: Float = self
            .planets
            .iter()
            .map(|p| 0.5 * *p.mass() * p.velocity().norm_squared())
            .sum();

        let mut potential = 0.0;
        for (i, a) in self.planets.iter().enumerate() {
            for b in self.planets.iter().skip(i + 1) {
                let r = (b.position() - a.position()).norm();
                potential -= GRAV_CONST * *a.mass() * *b.mass() / r;
            }
        }

        kinetic + potential
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{BLUE, RED, WHITE, YELLOW};
    use crate::moons::Moons;
    use crate::{AU, TIMESTEP};
    use nalgebra::Point2;

    const SUN_MASS: Float = 1.989e30;
    const EARTH_MASS: Float = 5.9742e24;

    fn close(a: Float, b: Float, rel: Float) -> bool {
        (a - b).abs() <= rel * a.abs().max(b.abs())
    }

    fn sun() -> Planet {
        Planet::new("Sun", Point2::origin(), Vector2::zeros(), SUN_MASS, 30.0, YELLOW, Moons::None).into_sun()
    }

    fn earth() -> Planet {
        Planet::new("Earth", Point2::new(-AU, 0.0), Vector2::new(0.0, 29_783.0), EARTH_MASS, 16.0, BLUE, Moons::single())
    }

    fn still(name: &'static str, x: Float, y: Float, mass: Float) -> Planet {
        Planet::new(name, Point2::new(x, y), Vector2::zeros(), mass, 5.0, WHITE, Moons::None)
    }

    #[test]
    fn two_body_step_matches_hand_computation() {
        let mut system = SolarSystem::new(vec![sun(), earth()], UpdateOrder::Snapshot);
        system.step(TIMESTEP);

        // Earth sits on the -x axis, so the whole pull is along +x.
        let force = GRAV_CONST * SUN_MASS * EARTH_MASS / (AU * AU);
        let vx = force / EARTH_MASS * TIMESTEP;
        let vy = 29_783.0;
        let x = -AU + vx * TIMESTEP;
        let y = vy * TIMESTEP;

        let e = &system.planets()[1];
        assert!(close(e.velocity().x, vx, 1e-6), "vx {} vs {}", e.velocity().x, vx);
        assert!(close(e.velocity().y, vy, 1e-6));
        assert!(close(e.position().x, x, 1e-6));
        assert!(close(e.position().y, y, 1e-6));
        assert!(close(e.distance_to_sun, AU, 1e-12));
    }

    #[test]
    fn two_body_step_in_sequential_order_stays_close() {
        let mut system = SolarSystem::new(vec![sun(), earth()], UpdateOrder::Sequential);
        system.step(TIMESTEP);

        let force = GRAV_CONST * SUN_MASS * EARTH_MASS / (AU * AU);
        let vx = force / EARTH_MASS * TIMESTEP;

        let e = &system.planets()[1];
        assert!(close(e.velocity().x, vx, 1e-6));
        assert!(close(e.position().x, -AU + vx * TIMESTEP, 1e-6));
    }

    #[test]
    fn self_pull_is_never_counted() {
        let system = SolarSystem::new(
            vec![
                still("a", 0.0, 0.0, 3.0e24),
                still("b", 2.0e9, 1.0e9, 5.0e25),
                still("c", -4.0e9, 3.0e9, 7.0e23),
            ],
            UpdateOrder::Snapshot,
        );

        let bodies = system.planets();
        let expected = bodies[0].newtonian_force(&bodies[1]).force + bodies[0].newtonian_force(&bodies[2]).force;
        let pull = system.pull_on(0);

        assert!(pull.force.x.is_finite() && pull.force.y.is_finite());
        assert!((pull.force - expected).norm() <= 1e-12 * expected.norm());
        assert_eq!(pull.distance_to_sun, None);
    }

    #[test]
    fn distance_to_sun_is_euclidean() {
        let mut system = SolarSystem::new(
            vec![sun(), still("probe", 3.0e10, -4.0e10, 1.0e20)],
            UpdateOrder::Snapshot,
        );

        assert_eq!(system.pull_on(1).distance_to_sun, Some(5.0e10));
        assert_eq!(system.pull_on(0).distance_to_sun, None);

        system.step(1.0);
        let p = &system.planets()[1];
        assert_eq!(p.distance_to_sun, 5.0e10);
        assert_eq!(system.planets()[0].distance_to_sun, 0.0);
    }

    #[test]
    fn trail_grows_by_one_each_step() {
        let mut system = SolarSystem::new(vec![sun(), earth()], UpdateOrder::Snapshot);
        for frame in 1..=30 {
            system.step(TIMESTEP);
            for p in system.planets() {
                assert_eq!(p.trail.node_count(), frame);
                assert_eq!(p.trail.last(), Some(p.position()));
            }
        }
        assert_eq!(system.steps(), 30);
        assert!(close(system.elapsed_days(), 30.0, 1e-12));
    }

    #[test]
    fn snapshot_order_does_not_depend_on_list_order() {
        let bodies = || vec![sun(), earth(), still("mars", 1.524 * AU, 0.0, 6.39e23)];

        let mut forward = SolarSystem::new(bodies(), UpdateOrder::Snapshot);
        let mut reversed = SolarSystem::new(bodies().into_iter().rev().collect(), UpdateOrder::Snapshot);
        for _ in 0..10 {
            forward.step(TIMESTEP);
            reversed.step(TIMESTEP);
        }

        for (a, b) in forward.planets().iter().zip(reversed.planets().iter().rev()) {
            assert_eq!(a.name, b.name);
            assert!((a.position() - b.position()).norm() <= 1e-9 * AU);
        }
    }

    #[test]
    fn sequential_order_lets_later_bodies_see_moved_ones() {
        let bodies = || vec![still("a", -1.0e9, 0.0, 1.0e28), still("b", 1.0e9, 0.0, 1.0e28)];

        let mut snapshot = SolarSystem::new(bodies(), UpdateOrder::Snapshot);
        let mut sequential = SolarSystem::new(bodies(), UpdateOrder::Sequential);
        snapshot.step(TIMESTEP);
        sequential.step(TIMESTEP);

        // The first body sees the same unmoved partner either way.
        assert_eq!(snapshot.planets()[0].position(), sequential.planets()[0].position());
        // The second one is pulled harder because its partner already moved closer.
        assert!(sequential.planets()[1].velocity().x.abs() > snapshot.planets()[1].velocity().x.abs());
    }

    #[test]
    fn step_advances_moons() {
        let mut system = SolarSystem::new(vec![sun(), earth()], UpdateOrder::Snapshot);
        system.step(TIMESTEP);
        assert_ne!(system.planets()[1].moons, Moons::single());
    }

    #[test]
    fn coincident_bodies_are_left_unguarded() {
        let mut system = SolarSystem::new(
            vec![still("a", 1.0, 1.0, 1.0e20), still("b", 1.0, 1.0, 1.0e20)],
            UpdateOrder::Snapshot,
        );
        system.step(1.0);
        assert!(!system.planets()[0].is_finite());
        assert_eq!(system.planets()[0].trail.node_count(), 1);
    }

    #[test]
    fn energy_of_two_bodies() {
        let a = Planet::new("a", Point2::new(0.0, 0.0), Vector2::new(3.0, 4.0), 2.0, 1.0, RED, Moons::None);
        let b = still("b", 10.0, 0.0, 5.0);
        let system = SolarSystem::new(vec![a, b], UpdateOrder::Snapshot);

        let expected = 0.5 * 2.0 * 25.0 - GRAV_CONST * 2.0 * 5.0 / 10.0;
        assert!(close(system.total_energy(), expected, 1e-12));
    }

    #[test]
    fn sun_lookup() {
        let system = SolarSystem::new(vec![earth(), sun()], UpdateOrder::default());
        assert_eq!(system.sun().map(|s| s.name), Some("Sun"));
        assert_eq!(system.order(), UpdateOrder::Snapshot);
        assert_eq!(system.len(), 2);
    }
}
