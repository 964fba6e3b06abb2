//! Gondola: an oriented box with per-corner ground contact

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::ROTATIONAL_DAMPING;
use crate::error::SimError;
use crate::rotate;
use crate::settings::GondolaSettings;
use crate::sim::body::{Body, apply_drag};
use crate::sim::collision::corner_ground_contact;
use crate::sim::object::{PhysicsState, Step};

/// Box corner in the body frame (y-down, so "top" is negative y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Order in which contacts are evaluated
    pub const CONTACT_ORDER: [Corner; 4] = [
        Corner::TopRight,
        Corner::TopLeft,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Outline order for drawing (clockwise on screen)
    pub const OUTLINE: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Unit-box sign of this corner
    fn sign(self) -> DVec2 {
        match self {
            Corner::TopLeft => DVec2::new(-1.0, -1.0),
            Corner::TopRight => DVec2::new(1.0, -1.0),
            Corner::BottomLeft => DVec2::new(-1.0, 1.0),
            Corner::BottomRight => DVec2::new(1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gondola {
    pub body: Body,
    pub cd: f64,
    pub width: f64,
    pub height: f64,
    /// Net torque is clamped to +/- this before integration
    pub moment_limit: f64,
}

impl Gondola {
    pub fn from_settings(settings: &GondolaSettings, gravity: DVec2) -> Result<Self, SimError> {
        Ok(Self {
            body: Body::new(settings.mass, settings.inertia)?.with_gravity(gravity),
            cd: settings.cd,
            width: settings.width,
            height: settings.height,
            moment_limit: settings.moment_limit,
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

    /// World position of a corner
    pub fn corner(&self, corner: Corner) -> DVec2 {
        let half = DVec2::new(self.width, self.height) * 0.5;
        self.body.position + rotate(half * corner.sign(), self.body.rotation)
    }

    /// All four corners in outline order
    pub fn outline(&self) -> [DVec2; 4] {
        Corner::OUTLINE.map(|c| self.corner(c))
    }
}

impl Step for Gondola {
    fn pre_step(&mut self, state: &PhysicsState<'_>) {
        for corner in Corner::CONTACT_ORDER {
            let point = self.corner(corner);
            let contact = corner_ground_contact(&self.body, point, state.terrain);
            let offset = point - self.body.position;
            self.body.add_force(contact.normal_force, offset);
            self.body.add_force(contact.friction_force, offset);
        }

        let rotation = self.body.rotation;
        self.body.add_torque(-rotation * rotation * ROTATIONAL_DAMPING);
        apply_drag(&mut self.body, self.cd);
    }

    fn step(&mut self, state: &PhysicsState<'_>) {
        self.body.clamp_torque(self.moment_limit);
        self.body.integrate(state.dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::KeyState;
    use crate::sim::terrain::Terrain;

    fn gondola() -> Gondola {
        Gondola::from_settings(&GondolaSettings::default(), DVec2::new(0.0, 10.0)).unwrap()
    }

    #[test]
    fn test_corners_unrotated() {
        let g = gondola().with_position(DVec2::new(100.0, 200.0));
        assert_eq!(g.corner(Corner::TopLeft), DVec2::new(80.0, 185.0));
        assert_eq!(g.corner(Corner::BottomRight), DVec2::new(120.0, 215.0));
    }

    #[test]
    fn test_corners_follow_rotation() {
        let mut g = gondola();
        g.body.rotation = std::f64::consts::PI;
        let c = g.corner(Corner::TopLeft);
        assert!((c - DVec2::new(20.0, 15.0)).length() < 1e-9);
    }

    #[test]
    fn test_airborne_gondola_only_feels_drag() {
        let terrain = Terrain::default();
        let input = KeyState::new();
        let state = PhysicsState::new(0.001, &terrain, &input);

        let mut g = gondola().with_position(DVec2::new(0.0, 300.0));
        g.body.velocity = DVec2::new(10.0, 0.0);
        g.pre_step(&state);
        // 0.5 * 0.1 * 100 against +x
        assert!((g.body.force() - DVec2::new(-5.0, 0.0)).length() < 1e-9);
        assert_eq!(g.body.torque(), 0.0);
    }

    #[test]
    fn test_rotation_damping_is_negative_square() {
        let terrain = Terrain::default();
        let input = KeyState::new();
        let state = PhysicsState::new(0.001, &terrain, &input);

        // Same sign either way: -(0.5^2) * 0.1
        for rotation in [0.5, -0.5] {
            let mut g = gondola().with_position(DVec2::new(0.0, 300.0));
            g.body.rotation = rotation;
            g.pre_step(&state);
            assert!((g.body.torque() + 0.025).abs() < 1e-12);
        }
    }

    #[test]
    fn test_torque_clamped_before_integration() {
        let terrain = Terrain::default();
        let input = KeyState::new();
        let state = PhysicsState::new(0.001, &terrain, &input);

        let mut g = gondola();
        g.body.add_torque(1e6);
        g.step(&state);
        // 2000 / 3 * 0.001
        assert!((g.body.angular_velocity - 2000.0 / 3.0 * 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_buried_corners_push_up() {
        let terrain = Terrain::default();
        let input = KeyState::new();
        let state = PhysicsState::new(0.001, &terrain, &input);

        let x = std::f64::consts::FRAC_PI_2 / terrain.frequency;
        // Bottom edge 2 units under the flat crest
        let center = DVec2::new(x, terrain.elevation(x) - 13.0);
        let mut g = gondola().with_position(center);
        g.pre_step(&state);
        assert!(g.body.force().y < 0.0);
    }
}
