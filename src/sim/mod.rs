//! Physics simulation module
//!
//! All flight logic lives here. This module must stay deterministic:
//! - Fixed timestep only, elapsed time passed in explicitly
//! - Seeded RNG only
//! - Stable iteration order (insertion order of parts)
//! - No rendering or platform dependencies beyond the input query trait

pub mod autopilot;
pub mod balloon;
pub mod body;
pub mod collision;
pub mod menu;
pub mod object;
pub mod rope;
pub mod state;
pub mod terrain;
pub mod tick;

pub use autopilot::Autopilot;
pub use balloon::{Balloon, Corner, Envelope, Gondola, Part, Rig, Weight};
pub use body::{Body, apply_drag};
pub use collision::{ContactResult, circle_ground_contact, corner_ground_contact};
pub use menu::{MenuFlow, MenuScreen};
pub use object::{PhysicsState, Step};
pub use rope::{Anchor, AnchorPoint, BodyRef, BodySet, Rope};
pub use state::{ControlSource, GameState};
pub use terrain::Terrain;
pub use tick::{FixedStep, substep};
