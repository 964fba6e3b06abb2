//! Fixed timestep scheduler
//!
//! Converts elapsed wall time into a whole number of fixed sub-steps and runs
//! each as a full pre_step -> step -> post_step cycle. Fractional leftover
//! time is dropped, not carried over.

use super::object::{PhysicsState, Step};
use super::terrain::Terrain;
use crate::error::SimError;
use crate::platform::input::InputQuery;

/// Absorbs float noise in `elapsed / dt` so exact multiples are not lost
const COUNT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    dt: f64,
    max_substeps: Option<u32>,
}

impl FixedStep {
    /// `dt` is in seconds and must be positive and finite
    pub fn new(dt: f64) -> Result<Self, SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidTimestep(dt));
        }
        Ok(Self {
            dt,
            max_substeps: None,
        })
    }

    /// Bound the catch-up after a stall
    pub fn with_max_substeps(mut self, max_substeps: Option<u32>) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn max_substeps(&self) -> Option<u32> {
        self.max_substeps
    }

    /// Whole sub-steps that fit in `elapsed_ms`, before any cap
    pub fn substeps_for(&self, elapsed_ms: u64) -> u32 {
        let count = (elapsed_ms as f64 / (self.dt * 1000.0) + COUNT_EPSILON).floor();
        count.min(f64::from(u32::MAX)) as u32
    }

    /// Advance `objects` by the sub-steps that fit in `elapsed_ms`
    ///
    /// Returns the number of sub-steps actually run.
    pub fn advance<S: Step + ?Sized>(
        &self,
        elapsed_ms: u64,
        terrain: &Terrain,
        input: &dyn InputQuery,
        objects: &mut S,
    ) -> u32 {
        let wanted = self.substeps_for(elapsed_ms);
        let count = match self.max_substeps {
            Some(cap) if wanted > cap => {
                log::warn!(
                    "Frame took {} ms; running {} of {} sub-steps",
                    elapsed_ms,
                    cap,
                    wanted
                );
                cap
            }
            _ => wanted,
        };

        let state = PhysicsState::new(self.dt, terrain, input);
        for _ in 0..count {
            substep(&state, objects);
        }
        log::debug!("Advanced {} sub-steps ({} ms)", count, elapsed_ms);
        count
    }
}

/// One full sub-step; each phase finishes for every object before the next
pub fn substep<S: Step + ?Sized>(state: &PhysicsState<'_>, objects: &mut S) {
    objects.pre_step(state);
    objects.step(state);
    objects.post_step(state);
}
