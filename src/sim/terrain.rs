//! Analytic sine-wave ground
//!
//! The ground is the height field `y = base + amplitude * sin(frequency * x)`
//! (y-down, so larger y is lower). Contact response constants live here too.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::TerrainSettings;

/// Amplitude range for seeded terrain
const SEEDED_AMPLITUDE: (f64, f64) = (10.0, 30.0);
/// Frequency range for seeded terrain
const SEEDED_FREQUENCY: (f64, f64) = (0.005, 0.015);

/// Ground height field and contact coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    pub base_height: f64,
    pub amplitude: f64,
    pub frequency: f64,
    /// Normal spring stiffness for penetrating contacts
    pub spring_constant: f64,
    /// Normal damping resisting inward motion
    pub damping_coefficient: f64,
    pub friction_damping: f64,
}

impl Default for Terrain {
    fn default() -> Self {
        Self::from_settings(&TerrainSettings::default())
    }
}

impl Terrain {
    pub fn from_settings(settings: &TerrainSettings) -> Self {
        Self {
            base_height: settings.base_height,
            amplitude: settings.amplitude,
            frequency: settings.frequency,
            spring_constant: settings.spring_constant,
            damping_coefficient: settings.damping_coefficient,
            friction_damping: settings.friction_damping,
        }
    }

    /// Roll a new hill shape from a seed, keeping the contact coefficients
    pub fn from_seed(settings: &TerrainSettings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let amplitude = rng.random_range(SEEDED_AMPLITUDE.0..=SEEDED_AMPLITUDE.1);
        let frequency = rng.random_range(SEEDED_FREQUENCY.0..=SEEDED_FREQUENCY.1);
        log::info!(
            "Terrain seed {}: amplitude {:.2}, frequency {:.4}",
            seed,
            amplitude,
            frequency
        );
        Self {
            amplitude,
            frequency,
            ..Self::from_settings(settings)
        }
    }

    /// Ground height at `x`
    #[inline]
    pub fn elevation(&self, x: f64) -> f64 {
        self.base_height + self.amplitude * (self.frequency * x).sin()
    }

    /// Unit normal at `x`, pointing up out of the ground (negative y)
    #[inline]
    pub fn surface_normal(&self, x: f64) -> DVec2 {
        DVec2::new(
            self.amplitude * self.frequency * (self.frequency * x).cos(),
            -1.0,
        )
        .normalize()
    }

    /// Ground point directly below (or above) `x`
    #[inline]
    pub fn surface_point(&self, x: f64) -> DVec2 {
        DVec2::new(x, self.elevation(x))
    }

    /// Height of `p` above the ground (negative when below)
    #[inline]
    pub fn height_above(&self, p: DVec2) -> f64 {
        self.elevation(p.x) - p.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_elevation_at_origin_is_base() {
        let terrain = Terrain::default();
        assert_eq!(terrain.elevation(0.0), 650.0);
    }

    #[test]
    fn test_elevation_peak() {
        let terrain = Terrain::default();
        let x = std::f64::consts::FRAC_PI_2 / terrain.frequency;
        assert!((terrain.elevation(x) - 670.0).abs() < 1e-9);
    }

    #[test]
    fn test_normal_flat_at_extremum() {
        let terrain = Terrain::default();
        let x = std::f64::consts::FRAC_PI_2 / terrain.frequency;
        let n = terrain.surface_normal(x);
        assert!(n.x.abs() < 1e-9);
        assert!((n.y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_normal_perpendicular_to_slope() {
        let terrain = Terrain::default();
        for &x in &[0.0, 37.0, 123.4, -250.0] {
            let h = 1e-4;
            let tangent = terrain.surface_point(x + h) - terrain.surface_point(x - h);
            assert!(terrain.surface_normal(x).dot(tangent.normalize()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_height_above() {
        let terrain = Terrain::default();
        assert_eq!(terrain.height_above(DVec2::new(0.0, 350.0)), 300.0);
        assert_eq!(terrain.height_above(DVec2::new(0.0, 660.0)), -10.0);
    }

    #[test]
    fn test_seeded_terrain_is_reproducible() {
        let settings = TerrainSettings::default();
        let a = Terrain::from_seed(&settings, 7);
        let b = Terrain::from_seed(&settings, 7);
        assert_eq!(a, b);
        assert!(a.amplitude >= 10.0 && a.amplitude <= 30.0);
        assert!(a.frequency >= 0.005 && a.frequency <= 0.015);
        assert_eq!(a.spring_constant, settings.spring_constant);
    }

    proptest! {
        #[test]
        fn prop_normal_is_unit_and_points_up(x in -10_000.0f64..10_000.0) {
            let n = Terrain::default().surface_normal(x);
            prop_assert!((n.length() - 1.0).abs() < 1e-9);
            prop_assert!(n.y < 0.0);
        }
    }
}
