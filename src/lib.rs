//! Balloon Adventure - a hot-air balloon drifting over rolling terrain
//!
//! Core modules:
//! - `sim`: Physics simulation (bodies, ropes, terrain contact, fixed-step scheduler)
//! - `renderer`: Draw-surface abstraction, camera and vertex tessellation
//! - `platform`: Input and clock abstractions
//! - `settings`: Data-driven tuning of every physical constant

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
///
/// World units are screen pixels with y pointing down; time is in seconds.
pub mod consts {
    /// Fixed simulation sub-step (1 ms)
    pub const SIM_DT: f64 = 0.001;
    /// Sub-step cap per update so a long stall cannot freeze the frame
    pub const MAX_SUBSTEPS: u32 = 250;
    /// Gravity (y-down)
    pub const GRAVITY: [f64; 2] = [0.0, 10.0];
    /// Outer loop cadence for both the draw and step ticks
    pub const TICK_RATE_HZ: u32 = 30;

    /// Viewport defaults
    pub const SCREEN_WIDTH: f64 = 1280.0;
    pub const SCREEN_HEIGHT: f64 = 720.0;

    /// Terrain height field
    pub const TERRAIN_BASE_HEIGHT: f64 = 650.0;
    pub const TERRAIN_AMPLITUDE: f64 = 20.0;
    pub const TERRAIN_FREQUENCY: f64 = 0.01;
    /// Terrain contact response
    pub const TERRAIN_SPRING: f64 = 500.0;
    pub const TERRAIN_DAMPING: f64 = 250.0;
    pub const TERRAIN_FRICTION_DAMPING: f64 = 100.0;

    /// Squared speed below which drag is skipped
    pub const DRAG_EPSILON: f64 = 1e-6;

    /// Rope defaults
    pub const ROPE_SPRING: f64 = 100.0;
    pub const ROPE_BREAK_FORCE: f64 = 1500.0;

    /// Envelope (balloon bag)
    pub const ENVELOPE_MASS: f64 = 10.0;
    pub const ENVELOPE_INERTIA: f64 = 5.0;
    pub const ENVELOPE_RADIUS_MIN: f64 = 60.0;
    pub const ENVELOPE_RADIUS_MAX: f64 = 100.0;
    pub const ENVELOPE_CD_MIN: f64 = 0.4;
    pub const ENVELOPE_CD_MAX: f64 = 0.8;
    pub const ENVELOPE_BASE_LIFT: f64 = 300.0;
    pub const ENVELOPE_MAX_LIFT: f64 = 1500.0;
    pub const ENVELOPE_INITIAL_TEMP: f64 = 0.5;
    pub const ENVELOPE_LATERAL_FORCE: f64 = 200.0;
    /// Temperature change per second while the burner or valve is active
    pub const ENVELOPE_HEAT_RATE: f64 = 0.1;
    /// Proportional heat loss per second once decay is enabled
    pub const ENVELOPE_DECAY_RATE: f64 = 0.02;
    /// Anchor angle below the horizontal diameter (degrees)
    pub const ENVELOPE_ANCHOR_ANGLE_DEG: f64 = 30.0;
    pub const ENVELOPE_COLOR_COLD: [u8; 3] = [200, 100, 100];
    pub const ENVELOPE_COLOR_HOT: [u8; 3] = [200, 0, 0];

    /// Gondola (oriented box)
    pub const GONDOLA_MASS: f64 = 50.0;
    pub const GONDOLA_INERTIA: f64 = 3.0;
    pub const GONDOLA_CD: f64 = 0.1;
    pub const GONDOLA_WIDTH: f64 = 40.0;
    pub const GONDOLA_HEIGHT: f64 = 30.0;
    /// Net torque clamp applied before integration
    pub const GONDOLA_MOMENT_LIMIT: f64 = 2000.0;

    /// Friction engages this far above the surface
    pub const FRICTION_BAND: f64 = 1.0;
    /// Along-terrain point speed above which kinetic friction applies
    pub const FRICTION_KINETIC_SPEED: f64 = 1.0;
    pub const FRICTION_KINETIC: f64 = 0.15;
    pub const FRICTION_STATIC: f64 = 0.25;

    /// Rotational damping factor (applied to rotation squared)
    pub const ROTATIONAL_DAMPING: f64 = 0.1;

    /// Weight (point mass)
    pub const WEIGHT_MASS: f64 = 25.0;
    pub const WEIGHT_INERTIA: f64 = 0.5;
    pub const WEIGHT_CD: f64 = 0.1;
    pub const WEIGHT_RADIUS: f64 = 10.0;
    /// Weights hang this far below the gondola's bottom corners
    pub const WEIGHT_HANG_OFFSET: f64 = 30.0;

    /// Autopilot altitude band above ground
    pub const AUTOPILOT_ALTITUDE_LOW: f64 = 290.0;
    pub const AUTOPILOT_ALTITUDE_HIGH: f64 = 310.0;
}

/// Linear interpolation between `min` (t = 0) and `max` (t = 1)
#[inline]
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min * (1.0 - t) + max * t
}

/// Rotate a vector by an angle in radians (counter-clockwise in y-up terms)
#[inline]
pub fn rotate(v: DVec2, angle: f64) -> DVec2 {
    DVec2::from_angle(angle).rotate(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(60.0, 100.0, 0.0), 60.0);
        assert_eq!(lerp(60.0, 100.0, 1.0), 100.0);
        assert!((lerp(60.0, 100.0, 0.5) - 80.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = rotate(DVec2::new(1.0, 0.0), std::f64::consts::FRAC_PI_2);
        assert!(r.x.abs() < 1e-12);
        assert!((r.y - 1.0).abs() < 1e-12);
    }
}
