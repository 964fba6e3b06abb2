//! The balloon assembly
//!
//! An envelope, a gondola and two ballast weights joined by four ropes:
//!
//! ```text
//!        ( envelope )
//!        /          \
//!   rope 0        rope 1
//!      [   gondola   ]
//!   rope 2        rope 3
//!      o              o
//!   weight 0      weight 1
//! ```
//!
//! The lower ropes can be cut by the pilot to drop ballast.

mod envelope;
mod gondola;
mod weight;

pub use envelope::Envelope;
pub use gondola::{Corner, Gondola};
pub use weight::Weight;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::object::{PhysicsState, Step};
use super::rope::{Anchor, AnchorPoint, BodyRef, BodySet, Rope};
use crate::error::SimError;
use crate::platform::input::Key;
use crate::settings::Settings;

/// Rope holding the left ballast weight
pub const LEFT_BALLAST_ROPE: usize = 2;
/// Rope holding the right ballast weight
pub const RIGHT_BALLAST_ROPE: usize = 3;

/// The bodies of a balloon, addressable by [`BodyRef`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rig {
    pub envelope: Envelope,
    pub gondola: Gondola,
    pub weights: [Weight; 2],
}

impl BodySet for Rig {
    fn body(&self, id: BodyRef) -> Option<&Body> {
        match id {
            BodyRef::Envelope => Some(&self.envelope.body),
            BodyRef::Gondola => Some(&self.gondola.body),
            BodyRef::Weight(i) => self.weights.get(i).map(|w| &w.body),
        }
    }

    fn body_mut(&mut self, id: BodyRef) -> Option<&mut Body> {
        match id {
            BodyRef::Envelope => Some(&mut self.envelope.body),
            BodyRef::Gondola => Some(&mut self.gondola.body),
            BodyRef::Weight(i) => self.weights.get_mut(i).map(|w| &mut w.body),
        }
    }

    fn anchor_point(&self, anchor: Anchor) -> Option<DVec2> {
        match (anchor.body, anchor.point) {
            (id, AnchorPoint::Center) => self.body(id).map(|b| b.position),
            (BodyRef::Envelope, AnchorPoint::EnvelopeLeft) => Some(self.envelope.left_anchor()),
            (BodyRef::Envelope, AnchorPoint::EnvelopeRight) => {
                Some(self.envelope.right_anchor())
            }
            (BodyRef::Gondola, AnchorPoint::Corner(c)) => Some(self.gondola.corner(c)),
            _ => None,
        }
    }
}

/// One entry in the balloon's step order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Part {
    Rope(usize),
    Envelope,
    Gondola,
    Weight(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balloon {
    rig: Rig,
    ropes: [Rope; 4],
    order: Vec<Part>,
}

impl Balloon {
    /// Build a balloon hanging from its gondola at `gondola_center`
    ///
    /// Rope rest lengths are the anchor distances in this initial pose.
    pub fn new(gondola_center: DVec2, settings: &Settings) -> Result<Self, SimError> {
        let gravity = settings.physics.gravity;

        let gondola =
            Gondola::from_settings(&settings.gondola, gravity)?.with_position(gondola_center);
        let envelope = Envelope::from_settings(&settings.envelope, gravity)?;
        let envelope_center = gondola_center - DVec2::new(0.0, 2.0 * envelope.radius());
        let envelope = envelope.with_position(envelope_center);

        let hang = DVec2::new(0.0, settings.weight.hang_offset);
        let weights = [
            Weight::from_settings(&settings.weight, gravity)?
                .with_position(gondola.corner(Corner::BottomLeft) + hang),
            Weight::from_settings(&settings.weight, gravity)?
                .with_position(gondola.corner(Corner::BottomRight) + hang),
        ];

        let rig = Rig {
            envelope,
            gondola,
            weights,
        };

        let k = settings.rope.spring_constant;
        let limit = settings.rope.break_force;
        let gondola_corner = |c| Anchor::new(BodyRef::Gondola, AnchorPoint::Corner(c));
        let ropes = [
            Rope::new(
                Anchor::new(BodyRef::Envelope, AnchorPoint::EnvelopeLeft),
                gondola_corner(Corner::TopLeft),
                k,
                limit,
                &rig,
            )?,
            Rope::new(
                Anchor::new(BodyRef::Envelope, AnchorPoint::EnvelopeRight),
                gondola_corner(Corner::TopRight),
                k,
                limit,
                &rig,
            )?,
            Rope::new(
                gondola_corner(Corner::BottomLeft),
                Anchor::center(BodyRef::Weight(0)),
                k,
                limit,
                &rig,
            )?,
            Rope::new(
                gondola_corner(Corner::BottomRight),
                Anchor::center(BodyRef::Weight(1)),
                k,
                limit,
                &rig,
            )?,
        ];

        let order = vec![
            Part::Rope(0),
            Part::Rope(1),
            Part::Rope(2),
            Part::Rope(3),
            Part::Envelope,
            Part::Gondola,
            Part::Weight(0),
            Part::Weight(1),
        ];

        log::info!(
            "Balloon built at ({:.0}, {:.0}), envelope radius {:.1}",
            gondola_center.x,
            gondola_center.y,
            rig.envelope.radius()
        );

        Ok(Self { rig, ropes, order })
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    pub fn envelope(&self) -> &Envelope {
        &self.rig.envelope
    }

    pub fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.rig.envelope
    }

    pub fn gondola(&self) -> &Gondola {
        &self.rig.gondola
    }

    pub fn weights(&self) -> &[Weight; 2] {
        &self.rig.weights
    }

    pub fn ropes(&self) -> &[Rope; 4] {
        &self.ropes
    }

    /// Step and draw order of the parts
    pub fn order(&self) -> &[Part] {
        &self.order
    }

    /// Cut a rope by index; out-of-range indices are ignored
    pub fn sever_rope(&mut self, index: usize) {
        if let Some(rope) = self.ropes.get_mut(index) {
            rope.sever();
        }
    }

    fn visit(&mut self, state: &PhysicsState<'_>, phase: fn(&mut dyn Step, &PhysicsState<'_>)) {
        for part in &self.order {
            match *part {
                // Ropes act only in pre_step, where they need the whole rig
                Part::Rope(_) => {}
                Part::Envelope => phase(&mut self.rig.envelope, state),
                Part::Gondola => phase(&mut self.rig.gondola, state),
                Part::Weight(i) => {
                    if let Some(w) = self.rig.weights.get_mut(i) {
                        phase(w, state);
                    }
                }
            }
        }
    }
}

impl Step for Balloon {
    fn pre_step(&mut self, state: &PhysicsState<'_>) {
        if state.input.is_pressed(Key::ReleaseLeft) {
            self.sever_rope(LEFT_BALLAST_ROPE);
        }
        if state.input.is_pressed(Key::ReleaseRight) {
            self.sever_rope(RIGHT_BALLAST_ROPE);
        }

        for part in &self.order {
            match *part {
                Part::Rope(i) => {
                    if let Some(rope) = self.ropes.get_mut(i) {
                        rope.pre_step(&mut self.rig);
                    }
                }
                Part::Envelope => self.rig.envelope.pre_step(state),
                Part::Gondola => self.rig.gondola.pre_step(state),
                Part::Weight(i) => {
                    if let Some(w) = self.rig.weights.get_mut(i) {
                        w.pre_step(state);
                    }
                }
            }
        }
    }

    fn step(&mut self, state: &PhysicsState<'_>) {
        self.visit(state, |obj, state| obj.step(state));
    }

    fn post_step(&mut self, state: &PhysicsState<'_>) {
        self.visit(state, |obj, state| obj.post_step(state));
    }
}
