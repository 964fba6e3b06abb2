//! Step composition
//!
//! Every simulated object advances in three phases per sub-step:
//! `pre_step` accumulates forces, `step` integrates, `post_step` finalizes.
//! Phases run across all objects before the next phase starts.

use crate::platform::input::InputQuery;

use super::terrain::Terrain;

/// Context handed to every phase of a sub-step
#[derive(Clone, Copy)]
pub struct PhysicsState<'a> {
    /// Fixed sub-step duration (seconds)
    pub dt: f64,
    pub terrain: &'a Terrain,
    /// Active control source (player or autopilot)
    pub input: &'a dyn InputQuery,
}

impl<'a> PhysicsState<'a> {
    pub fn new(dt: f64, terrain: &'a Terrain, input: &'a dyn InputQuery) -> Self {
        Self { dt, terrain, input }
    }
}

/// A steppable object
///
/// All phases default to doing nothing.
pub trait Step {
    fn pre_step(&mut self, _state: &PhysicsState<'_>) {}

    fn step(&mut self, _state: &PhysicsState<'_>) {}

    fn post_step(&mut self, _state: &PhysicsState<'_>) {}
}

/// A list of steppables visits its children in insertion order
impl<T: Step> Step for [T] {
    fn pre_step(&mut self, state: &PhysicsState<'_>) {
        for obj in self.iter_mut() {
            obj.pre_step(state);
        }
    }

    fn step(&mut self, state: &PhysicsState<'_>) {
        for obj in self.iter_mut() {
            obj.step(state);
        }
    }

    fn post_step(&mut self, state: &PhysicsState<'_>) {
        for obj in self.iter_mut() {
            obj.post_step(state);
        }
    }
}

impl<T: Step> Step for Vec<T> {
    fn pre_step(&mut self, state: &PhysicsState<'_>) {
        self.as_mut_slice().pre_step(state);
    }

    fn step(&mut self, state: &PhysicsState<'_>) {
        self.as_mut_slice().step(state);
    }

    fn post_step(&mut self, state: &PhysicsState<'_>) {
        self.as_mut_slice().post_step(state);
    }
}
