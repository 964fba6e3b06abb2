//! Simulation settings and tuning
//!
//! Every physical constant the balloon uses can be overridden from a JSON
//! file. Missing fields fall back to the values in [`crate::consts`].

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Integrator and scheduler parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// Fixed sub-step duration in seconds
    pub dt: f64,
    /// Gravity applied to every body (y-down)
    pub gravity: DVec2,
    /// Upper bound on sub-steps per update (`None` = unbounded)
    pub max_substeps: Option<u32>,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            dt: SIM_DT,
            gravity: DVec2::from_array(GRAVITY),
            max_substeps: Some(MAX_SUBSTEPS),
        }
    }
}

/// Terrain shape and contact response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    pub base_height: f64,
    pub amplitude: f64,
    pub frequency: f64,
    pub spring_constant: f64,
    pub damping_coefficient: f64,
    pub friction_damping: f64,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            base_height: TERRAIN_BASE_HEIGHT,
            amplitude: TERRAIN_AMPLITUDE,
            frequency: TERRAIN_FREQUENCY,
            spring_constant: TERRAIN_SPRING,
            damping_coefficient: TERRAIN_DAMPING,
            friction_damping: TERRAIN_FRICTION_DAMPING,
        }
    }
}

/// Shared rope parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopeSettings {
    pub spring_constant: f64,
    /// Tension above which a rope snaps (`None` = unbreakable)
    pub break_force: Option<f64>,
}

impl Default for RopeSettings {
    fn default() -> Self {
        Self {
            spring_constant: ROPE_SPRING,
            break_force: Some(ROPE_BREAK_FORCE),
        }
    }
}

/// Envelope (balloon bag) parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeSettings {
    pub mass: f64,
    pub inertia: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    pub cd_min: f64,
    pub cd_max: f64,
    pub base_lift: f64,
    pub max_lift: f64,
    /// Starting temperature in [0, 1]
    pub initial_temp: f64,
    pub lateral_force: f64,
    /// Temperature change per second from burner or valve
    pub heat_rate: f64,
    /// Proportional temperature loss per second once decay is enabled
    pub decay_rate: f64,
    pub color_cold: [u8; 3],
    pub color_hot: [u8; 3],
}

impl Default for EnvelopeSettings {
    fn default() -> Self {
        Self {
            mass: ENVELOPE_MASS,
            inertia: ENVELOPE_INERTIA,
            radius_min: ENVELOPE_RADIUS_MIN,
            radius_max: ENVELOPE_RADIUS_MAX,
            cd_min: ENVELOPE_CD_MIN,
            cd_max: ENVELOPE_CD_MAX,
            base_lift: ENVELOPE_BASE_LIFT,
            max_lift: ENVELOPE_MAX_LIFT,
            initial_temp: ENVELOPE_INITIAL_TEMP,
            lateral_force: ENVELOPE_LATERAL_FORCE,
            heat_rate: ENVELOPE_HEAT_RATE,
            decay_rate: ENVELOPE_DECAY_RATE,
            color_cold: ENVELOPE_COLOR_COLD,
            color_hot: ENVELOPE_COLOR_HOT,
        }
    }
}

/// Gondola (basket) parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GondolaSettings {
    pub mass: f64,
    pub inertia: f64,
    pub cd: f64,
    pub width: f64,
    pub height: f64,
    pub moment_limit: f64,
}

impl Default for GondolaSettings {
    fn default() -> Self {
        Self {
            mass: GONDOLA_MASS,
            inertia: GONDOLA_INERTIA,
            cd: GONDOLA_CD,
            width: GONDOLA_WIDTH,
            height: GONDOLA_HEIGHT,
            moment_limit: GONDOLA_MOMENT_LIMIT,
        }
    }
}

/// Ballast weight parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightSettings {
    pub mass: f64,
    pub inertia: f64,
    pub cd: f64,
    pub radius: f64,
    /// Vertical distance below the gondola corner at spawn
    pub hang_offset: f64,
}

impl Default for WeightSettings {
    fn default() -> Self {
        Self {
            mass: WEIGHT_MASS,
            inertia: WEIGHT_INERTIA,
            cd: WEIGHT_CD,
            radius: WEIGHT_RADIUS,
            hang_offset: WEIGHT_HANG_OFFSET,
        }
    }
}

/// Altitude-hold autopilot used while the menu is open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotSettings {
    /// Lower edge of the hold band (height above ground)
    pub altitude_low: f64,
    /// Upper edge of the hold band
    pub altitude_high: f64,
}

impl Default for AutopilotSettings {
    fn default() -> Self {
        Self {
            altitude_low: AUTOPILOT_ALTITUDE_LOW,
            altitude_high: AUTOPILOT_ALTITUDE_HIGH,
        }
    }
}

/// Viewport and debug-drawing preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub width: f64,
    pub height: f64,
    /// Horizontal dead-zone margin as a fraction of the width
    pub camera_margin_x: f64,
    /// Vertical dead-zone margin as a fraction of the height
    pub camera_margin_y: f64,
    /// Draw rope anchor points
    pub draw_anchors: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            camera_margin_x: 0.2,
            camera_margin_y: 0.4,
            draw_anchors: false,
        }
    }
}

/// All simulation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: PhysicsSettings,
    pub terrain: TerrainSettings,
    pub rope: RopeSettings,
    pub envelope: EnvelopeSettings,
    pub gondola: GondolaSettings,
    pub weight: WeightSettings,
    pub autopilot: AutopilotSettings,
    pub display: DisplaySettings,
}

impl Settings {
    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings as pretty JSON
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings from a file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Viewport size as a vector
    pub fn viewport(&self) -> DVec2 {
        DVec2::new(self.display.width, self.display.height)
    }
}
