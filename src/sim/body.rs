//! Rigid body state and integration
//!
//! Forces enter only through [`Body::add_force`] during `pre_step` and are
//! drained by [`Body::integrate`] at the end of the same sub-step.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{DRAG_EPSILON, GRAVITY};
use crate::error::SimError;
use crate::rotate;

/// Mass, pose, velocity and accumulated loads of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: DVec2,
    /// Orientation (radians)
    pub rotation: f64,
    pub velocity: DVec2,
    pub angular_velocity: f64,
    mass: f64,
    inertia: f64,
    pub gravity: DVec2,
    force: DVec2,
    torque: f64,
}

impl Body {
    /// Create a body at rest at the origin
    ///
    /// Mass and inertia must be positive and finite.
    pub fn new(mass: f64, inertia: f64) -> Result<Self, SimError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::InvalidMass(mass));
        }
        if !(inertia.is_finite() && inertia > 0.0) {
            return Err(SimError::InvalidInertia(inertia));
        }
        Ok(Self {
            position: DVec2::ZERO,
            rotation: 0.0,
            velocity: DVec2::ZERO,
            angular_velocity: 0.0,
            mass,
            inertia,
            gravity: DVec2::from_array(GRAVITY),
            force: DVec2::ZERO,
            torque: 0.0,
        })
    }

    pub fn with_position(mut self, position: DVec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_gravity(mut self, gravity: DVec2) -> Self {
        self.gravity = gravity;
        self
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Force accumulated so far this sub-step
    #[inline]
    pub fn force(&self) -> DVec2 {
        self.force
    }

    /// Torque accumulated so far this sub-step
    #[inline]
    pub fn torque(&self) -> f64 {
        self.torque
    }

    /// Add a world-space force applied at `offset` from the center of mass
    pub fn add_force(&mut self, force: DVec2, offset: DVec2) {
        self.force += force;
        self.torque += offset.perp_dot(force);
    }

    /// Add a force given in the body frame, rotated into world space first
    pub fn add_relative_force(&mut self, force: DVec2, offset: DVec2) {
        self.add_force(rotate(force, self.rotation), offset);
    }

    /// Add a pure torque
    pub fn add_torque(&mut self, torque: f64) {
        self.torque += torque;
    }

    /// Clamp the accumulated torque to `[-limit, limit]`
    pub fn clamp_torque(&mut self, limit: f64) {
        self.torque = self.torque.clamp(-limit, limit);
    }

    /// Velocity of a world point rigidly attached to this body
    #[inline]
    pub fn point_velocity(&self, point: DVec2) -> DVec2 {
        self.velocity + (point - self.position).perp() * self.angular_velocity
    }

    /// Semi-implicit Euler step; clears the accumulators
    pub fn integrate(&mut self, dt: f64) {
        self.velocity += (self.force / self.mass + self.gravity) * dt;
        self.position += self.velocity * dt;

        self.angular_velocity += self.torque / self.inertia * dt;
        // Orientation is overwritten rather than accumulated
        self.rotation = self.angular_velocity * dt;

        self.force = DVec2::ZERO;
        self.torque = 0.0;
    }
}

/// Add quadratic drag `0.5 * cd * |v|^2` opposing the velocity
///
/// Skipped below [`DRAG_EPSILON`] squared speed.
pub fn apply_drag(body: &mut Body, cd: f64) {
    let speed_sq = body.velocity.length_squared();
    if speed_sq > DRAG_EPSILON {
        let drag = -0.5 * cd * speed_sq * body.velocity.normalize();
        body.add_force(drag, DVec2::ZERO);
    }
}
