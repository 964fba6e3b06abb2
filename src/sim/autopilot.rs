//! Altitude-hold autopilot
//!
//! Flies the balloon while the menu is open. It is a bang-bang controller
//! with temperature hysteresis: it works the burner and valve keys to keep
//! the gondola inside an altitude band above the ground.

use crate::platform::input::{InputQuery, Key, KeyState};
use crate::settings::AutopilotSettings;

/// Burner on below the band while colder than this
const CLIMB_BURN_BELOW: f64 = 0.9;
/// Burner off below the band once hotter than this
const CLIMB_BURN_STOP: f64 = 0.95;
/// Above the band: valve closed while colder than this
const DESCEND_VALVE_STOP: f64 = 0.6;
/// Above the band: valve open once hotter than this
const DESCEND_VALVE_ABOVE: f64 = 0.8;
/// Above the band: keep the burner going while colder than this
const DESCEND_BURN_BELOW: f64 = 0.5;
/// Above the band: burner off once hotter than this
const DESCEND_BURN_STOP: f64 = 0.75;

#[derive(Debug, Clone)]
pub struct Autopilot {
    keys: KeyState,
    altitude_low: f64,
    altitude_high: f64,
}

impl Autopilot {
    pub fn new(settings: &AutopilotSettings) -> Self {
        Self {
            keys: KeyState::new(),
            altitude_low: settings.altitude_low,
            altitude_high: settings.altitude_high,
        }
    }

    /// Update the held keys from the gondola's height above ground and the
    /// envelope temperature in [0, 1]
    ///
    /// Inside the band the keys are left as they were.
    pub fn update(&mut self, altitude: f64, temp: f64) {
        if altitude < self.altitude_low {
            self.keys.release(Key::Down);

            if temp < CLIMB_BURN_BELOW {
                self.keys.press(Key::Up);
            } else if temp > CLIMB_BURN_STOP {
                self.keys.release(Key::Up);
            }
        } else if altitude > self.altitude_high {
            if temp < DESCEND_VALVE_STOP {
                self.keys.release(Key::Down);
            } else if temp > DESCEND_VALVE_ABOVE {
                self.keys.press(Key::Down);
            }

            if temp < DESCEND_BURN_BELOW {
                self.keys.press(Key::Up);
            } else if temp > DESCEND_BURN_STOP {
                self.keys.release(Key::Up);
            }
        }
    }

    /// Drop every held key
    pub fn reset(&mut self) {
        self.keys.clear();
    }
}

impl InputQuery for Autopilot {
    fn is_pressed(&self, key: Key) -> bool {
        self.keys.is_pressed(key)
    }
}
