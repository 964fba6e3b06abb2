//! Ballast weight: a small disc hanging under the gondola

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::settings::WeightSettings;
use crate::sim::body::{Body, apply_drag};
use crate::sim::collision::circle_ground_contact;
use crate::sim::object::{PhysicsState, Step};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub body: Body,
    pub cd: f64,
    pub radius: f64,
}

impl Weight {
    pub fn from_settings(settings: &WeightSettings, gravity: DVec2) -> Result<Self, SimError> {
        Ok(Self {
            body: Body::new(settings.mass, settings.inertia)?.with_gravity(gravity),
            cd: settings.cd,
            radius: settings.radius,
        })
    }

    pub fn with_position(mut self, position: DVec2) -> Self {
        self.body.position = position;
        self
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.body.position
    }
}

impl Step for Weight {
    fn pre_step(&mut self, state: &PhysicsState<'_>) {
        let contact = circle_ground_contact(
            self.body.position,
            self.radius,
            self.body.velocity,
            state.terrain,
        );
        self.body.add_force(contact.normal_force, DVec2::ZERO);
        apply_drag(&mut self.body, self.cd);
    }

    fn step(&mut self, state: &PhysicsState<'_>) {
        self.body.integrate(state.dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::KeyState;
    use crate::sim::terrain::Terrain;

    fn weight() -> Weight {
        Weight::from_settings(&WeightSettings::default(), DVec2::new(0.0, 10.0)).unwrap()
    }

    #[test]
    fn test_high_weight_gets_no_contact_force() {
        let terrain = Terrain::default();
        let input = KeyState::new();
        let state = PhysicsState::new(0.001, &terrain, &input);

        let mut w = weight().with_position(DVec2::new(0.0, 100.0));
        w.pre_step(&state);
        assert_eq!(w.body.force(), DVec2::ZERO);
    }

    #[test]
    fn test_resting_weight_sinks_then_contact_engages() {
        let terrain = Terrain::default();
        let input = KeyState::new();
        let state = PhysicsState::new(0.001, &terrain, &input);

        // Flat crest, resting a hair above the surface
        let x = std::f64::consts::FRAC_PI_2 / terrain.frequency;
        let start = DVec2::new(x, terrain.elevation(x) - 10.0 - 1e-9);
        let mut w = weight().with_position(start);

        // Touching but not penetrating: gravity alone
        w.pre_step(&state);
        assert_eq!(w.body.force(), DVec2::ZERO);
        w.step(&state);
        assert!((w.body.velocity.y - 0.01).abs() < 1e-12);
        assert_eq!(w.body.velocity.x, 0.0);

        // Now slightly below the surface: pushed back out
        w.pre_step(&state);
        let n = terrain.surface_normal(w.body.position.x);
        assert!(w.body.force().dot(n) > 0.0);
        assert!(w.body.force().y < 0.0);
    }
}
