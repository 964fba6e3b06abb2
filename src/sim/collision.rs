//! Ground contact response
//!
//! Contacts are penalty springs: a penetrating point is pushed out along
//! the terrain normal in proportion to its depth, with damping that only
//! resists motion into the ground. Box corners also pick up friction.

use glam::DVec2;

use super::body::Body;
use super::terrain::Terrain;
use crate::consts::{FRICTION_BAND, FRICTION_KINETIC, FRICTION_KINETIC_SPEED, FRICTION_STATIC};

/// Result of a ground contact check
#[derive(Debug, Clone, PartialEq)]
pub struct ContactResult {
    /// Whether the point is below the surface
    pub hit: bool,
    /// Terrain normal at the contact x
    pub normal: DVec2,
    /// Penetration depth (positive when below the surface)
    pub depth: f64,
    /// Spring-damper force pushing out of the ground
    pub normal_force: DVec2,
    /// Tangential friction force
    pub friction_force: DVec2,
}

impl ContactResult {
    pub fn miss(normal: DVec2) -> Self {
        Self {
            hit: false,
            normal,
            depth: 0.0,
            normal_force: DVec2::ZERO,
            friction_force: DVec2::ZERO,
        }
    }

    /// Sum of normal and friction forces
    pub fn total_force(&self) -> DVec2 {
        self.normal_force + self.friction_force
    }
}

/// Spring force out of the ground plus damping against inward velocity
#[inline]
fn penalty_force(depth: f64, normal: DVec2, velocity: DVec2, terrain: &Terrain) -> DVec2 {
    let spring = depth * terrain.spring_constant * normal;
    let damping = -normal.dot(velocity).min(0.0) * terrain.damping_coefficient * normal;
    spring + damping
}

/// Contact between a circle and the ground
///
/// The touch point is the circle's lowest point along the terrain normal.
/// Signed distance is measured along the normal from the surface point at
/// the circle's x.
pub fn circle_ground_contact(
    center: DVec2,
    radius: f64,
    velocity: DVec2,
    terrain: &Terrain,
) -> ContactResult {
    let normal = terrain.surface_normal(center.x);
    let surface = terrain.surface_point(center.x);
    let touch_point = center - normal * radius;
    let ground_dist = (touch_point - surface).dot(normal);

    if ground_dist >= 0.0 {
        return ContactResult::miss(normal);
    }

    let depth = -ground_dist;
    ContactResult {
        hit: true,
        normal,
        depth,
        normal_force: penalty_force(depth, normal, velocity, terrain),
        friction_force: DVec2::ZERO,
    }
}

/// Contact between one corner of a rigid box and the ground
///
/// Penetration uses the vertical distance below the surface. Friction acts
/// inside a slightly wider band than penetration so it engages just before
/// touchdown. Its direction opposes the body's along-terrain velocity,
/// scaled by that speed; the coefficient drops to kinetic when the corner
/// velocity projected on that scaled direction exceeds the sliding limit.
pub fn corner_ground_contact(body: &Body, corner: DVec2, terrain: &Terrain) -> ContactResult {
    let elevation = terrain.elevation(corner.x);
    let normal = terrain.surface_normal(corner.x);
    let point_vel = body.point_velocity(corner);

    let mut result = ContactResult::miss(normal);

    if corner.y > elevation {
        result.hit = true;
        result.depth = corner.y - elevation;
        result.normal_force = penalty_force(result.depth, normal, point_vel, terrain);
    }

    if corner.y > elevation - FRICTION_BAND {
        let tangent = normal.perp();
        let direction = tangent * -body.velocity.dot(tangent);

        let coefficient = if point_vel.dot(direction).abs() > FRICTION_KINETIC_SPEED {
            FRICTION_KINETIC
        } else {
            FRICTION_STATIC
        };
        result.friction_force = coefficient * result.normal_force.length() * direction;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_x(terrain: &Terrain) -> f64 {
        // sin' = 0 here, so the normal is exactly straight up
        std::f64::consts::FRAC_PI_2 / terrain.frequency
    }

    #[test]
    fn test_circle_above_ground_misses() {
        let terrain = Terrain::default();
        let x = 40.0;
        let center = terrain.surface_point(x) + terrain.surface_normal(x) * 15.0;
        let result = circle_ground_contact(center, 10.0, DVec2::new(0.0, 50.0), &terrain);
        assert!(!result.hit);
        assert_eq!(result.normal_force, DVec2::ZERO);
    }

    #[test]
    fn test_circle_touching_misses() {
        let terrain = Terrain::default();
        let x = flat_x(&terrain);
        // A hair above the surface
        let center = DVec2::new(x, terrain.elevation(x) - 10.0 - 1e-9);
        let result = circle_ground_contact(center, 10.0, DVec2::ZERO, &terrain);
        assert!(!result.hit);
        assert_eq!(result.total_force(), DVec2::ZERO);
    }

    #[test]
    fn test_circle_penetration_spring() {
        let terrain = Terrain::default();
        let x = flat_x(&terrain);
        // 2 units into the ground, not moving
        let center = DVec2::new(x, terrain.elevation(x) - 8.0);
        let result = circle_ground_contact(center, 10.0, DVec2::ZERO, &terrain);
        assert!(result.hit);
        assert!((result.depth - 2.0).abs() < 1e-9);
        // 2 * 500 upward
        assert!((result.normal_force - DVec2::new(0.0, -1000.0)).length() < 1e-6);
    }

    #[test]
    fn test_damping_only_resists_sinking() {
        let terrain = Terrain::default();
        let x = flat_x(&terrain);
        let center = DVec2::new(x, terrain.elevation(x) - 8.0);

        let sinking = circle_ground_contact(center, 10.0, DVec2::new(0.0, 1.0), &terrain);
        let rising = circle_ground_contact(center, 10.0, DVec2::new(0.0, -1.0), &terrain);
        let still = circle_ground_contact(center, 10.0, DVec2::ZERO, &terrain);

        // Sinking adds 250 * 1 on top of the spring
        assert!((sinking.normal_force.y - (still.normal_force.y - 250.0)).abs() < 1e-6);
        assert_eq!(rising.normal_force, still.normal_force);
    }

    #[test]
    fn test_corner_above_band_is_inert() {
        let terrain = Terrain::default();
        let body = Body::new(50.0, 3.0).unwrap();
        let x = flat_x(&terrain);
        let corner = DVec2::new(x, terrain.elevation(x) - 5.0);
        let result = corner_ground_contact(&body, corner, &terrain);
        assert!(!result.hit);
        assert_eq!(result.total_force(), DVec2::ZERO);
    }

    #[test]
    fn test_corner_in_band_has_no_normal_force() {
        let terrain = Terrain::default();
        let mut body = Body::new(50.0, 3.0).unwrap();
        body.velocity = DVec2::new(5.0, 0.0);
        let x = flat_x(&terrain);
        let corner = DVec2::new(x, terrain.elevation(x) - 0.5);
        let result = corner_ground_contact(&body, corner, &terrain);
        assert!(!result.hit);
        // Friction scales with the normal force, which is zero here
        assert_eq!(result.friction_force.length(), 0.0);
    }

    #[test]
    fn test_corner_friction_opposes_sliding() {
        let terrain = Terrain::default();
        let mut body = Body::new(50.0, 3.0).unwrap();
        body.velocity = DVec2::new(2.0, 0.0);
        let x = flat_x(&terrain);
        body.position = DVec2::new(x, terrain.elevation(x) - 14.0);
        let corner = DVec2::new(x, terrain.elevation(x) + 1.0);

        let result = corner_ground_contact(&body, corner, &terrain);
        assert!(result.hit);
        assert!((result.normal_force - DVec2::new(0.0, -500.0)).length() < 1e-6);
        // Sliding at 2 > 1: kinetic 0.15 * 500 * 2 against the motion
        assert!(result.friction_force.x < 0.0);
        assert!((result.friction_force.x + 0.15 * 500.0 * 2.0).abs() < 1e-6);
        assert!(result.friction_force.y.abs() < 1e-9);
    }

    #[test]
    fn test_corner_static_friction_at_low_speed() {
        let terrain = Terrain::default();
        let mut body = Body::new(50.0, 3.0).unwrap();
        body.velocity = DVec2::new(0.5, 0.0);
        let x = flat_x(&terrain);
        body.position = DVec2::new(x, terrain.elevation(x) - 14.0);
        let corner = DVec2::new(x, terrain.elevation(x) + 1.0);

        let result = corner_ground_contact(&body, corner, &terrain);
        assert!((result.friction_force.x + 0.25 * 500.0 * 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_friction_regime_uses_scaled_direction() {
        let terrain = Terrain::default();
        let mut body = Body::new(50.0, 3.0).unwrap();
        body.velocity = DVec2::new(2.0, 0.0);
        let x = flat_x(&terrain);
        body.position = DVec2::new(x, terrain.elevation(x) - 14.0);
        let corner = DVec2::new(x, terrain.elevation(x) + 1.0);
        // Spin so the corner slides at 0.6 along the ground: 2 - 15 * w = 0.6
        body.angular_velocity = 1.4 / 15.0;
        let point_vel = body.point_velocity(corner);
        assert!((point_vel.x - 0.6).abs() < 1e-9);

        // 0.6 * 2 = 1.2 > 1, so kinetic: 0.15 * 500 * 2 against +x
        let result = corner_ground_contact(&body, corner, &terrain);
        assert!((result.friction_force.x + 0.15 * 500.0 * 2.0).abs() < 1e-6);
        assert!(result.friction_force.y.abs() < 1e-9);
    }
}
