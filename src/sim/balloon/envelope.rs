//! Envelope: the hot-air bag
//!
//! Temperature in [0, 1] drives radius, drag coefficient, lift and color by
//! linear interpolation between the cold and hot settings.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::ROTATIONAL_DAMPING;
use crate::error::SimError;
use crate::settings::EnvelopeSettings;
use crate::sim::body::{Body, apply_drag};
use crate::sim::object::{PhysicsState, Step};
use crate::{lerp, rotate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub body: Body,
    /// Drag coefficient, refreshed from temperature every sub-step
    pub cd: f64,
    temp: f64,
    burner_on: bool,
    valve_open: bool,
    allow_temp_decay: bool,
    params: EnvelopeSettings,
}

impl Envelope {
    pub fn from_settings(settings: &EnvelopeSettings, gravity: DVec2) -> Result<Self, SimError> {
        let temp = settings.initial_temp.clamp(0.0, 1.0);
        Ok(Self {
            body: Body::new(settings.mass, settings.inertia)?.with_gravity(gravity),
            cd: lerp(settings.cd_min, settings.cd_max, temp),
            temp,
            burner_on: false,
            valve_open: false,
            allow_temp_decay: false,
            params: settings.clone(),
        })
    }

    pub fn with_position(mut self, position: DVec2) -> Self {
        self.body.position = position;
        self
    }

    /// Set the temperature, clamped to [0, 1]
    pub fn with_temperature(mut self, temp: f64) -> Self {
        self.temp = temp.clamp(0.0, 1.0);
        self.cd = self.drag_coefficient();
        self
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.body.position
    }

    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temp
    }

    /// Temperature as a whole percentage for display
    pub fn temp_percent(&self) -> u32 {
        (self.temp * 100.0).round() as u32
    }

    pub fn burner_on(&self) -> bool {
        self.burner_on
    }

    pub fn valve_open(&self) -> bool {
        self.valve_open
    }

    pub fn temp_decay_enabled(&self) -> bool {
        self.allow_temp_decay
    }

    /// Enable or disable passive cooling
    pub fn set_temp_decay(&mut self, enabled: bool) {
        self.allow_temp_decay = enabled;
    }

    pub fn radius(&self) -> f64 {
        lerp(self.params.radius_min, self.params.radius_max, self.temp)
    }

    pub fn drag_coefficient(&self) -> f64 {
        lerp(self.params.cd_min, self.params.cd_max, self.temp)
    }

    /// Buoyant lift magnitude (never negative)
    pub fn lift(&self) -> f64 {
        lerp(self.params.base_lift, self.params.max_lift, self.temp).max(0.0)
    }

    /// Fill color for the current temperature
    pub fn color(&self) -> [u8; 3] {
        let cold = self.params.color_cold;
        let hot = self.params.color_hot;
        std::array::from_fn(|i| {
            lerp(f64::from(cold[i]), f64::from(hot[i]), self.temp)
                .round()
                .clamp(0.0, 255.0) as u8
        })
    }

    /// Lower-left rope attachment on the rim
    pub fn left_anchor(&self) -> DVec2 {
        self.rim_point(DVec2::new(-self.radius(), 0.0), -self.anchor_angle())
    }

    /// Lower-right rope attachment on the rim
    pub fn right_anchor(&self) -> DVec2 {
        self.rim_point(DVec2::new(self.radius(), 0.0), self.anchor_angle())
    }

    fn anchor_angle(&self) -> f64 {
        crate::consts::ENVELOPE_ANCHOR_ANGLE_DEG.to_radians()
    }

    fn rim_point(&self, diameter_end: DVec2, angle: f64) -> DVec2 {
        self.body.position + rotate(rotate(diameter_end, angle), self.body.rotation)
    }
}

impl Step for Envelope {
    fn pre_step(&mut self, state: &PhysicsState<'_>) {
        let input = state.input;
        let dt = state.dt;

        self.cd = self.drag_coefficient();

        self.burner_on = input.up();
        if self.burner_on {
            self.temp += self.params.heat_rate * dt;
        }
        self.valve_open = input.down();
        if self.valve_open {
            self.temp -= self.params.heat_rate * dt;
        }
        if self.allow_temp_decay {
            self.temp -= self.params.decay_rate * self.temp * dt;
        }
        self.temp = self.temp.clamp(0.0, 1.0);

        self.body.add_force(DVec2::new(0.0, -self.lift()), DVec2::ZERO);
        if input.left() {
            self.body
                .add_force(DVec2::new(-self.params.lateral_force, 0.0), DVec2::ZERO);
        }
        if input.right() {
            self.body
                .add_force(DVec2::new(self.params.lateral_force, 0.0), DVec2::ZERO);
        }

        let rotation = self.body.rotation;
        self.body.add_torque(-rotation * rotation * ROTATIONAL_DAMPING);
        apply_drag(&mut self.body, self.cd);
    }

    fn step(&mut self, state: &PhysicsState<'_>) {
        self.body.integrate(state.dt);
    }
}
