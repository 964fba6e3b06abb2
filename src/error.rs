//! Simulation error types.
//!
//! The physics itself never fails at run time; these cover construction
//! contracts and settings I/O.

use thiserror::Error;

/// Errors raised while building or configuring the simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// Body mass must be strictly positive and finite.
    #[error("invalid mass {0}: must be positive and finite")]
    InvalidMass(f64),

    /// Body rotational inertia must be strictly positive and finite.
    #[error("invalid inertia {0}: must be positive and finite")]
    InvalidInertia(f64),

    /// Scheduler sub-step must be strictly positive and finite.
    #[error("invalid timestep {0}: must be positive and finite")]
    InvalidTimestep(f64),

    /// An anchor names a point its body does not have.
    #[error("anchor point {point} does not exist on {body}")]
    UnresolvedAnchor { body: String, point: String },

    /// Settings JSON could not be parsed or produced.
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Settings file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
