//! Tension-only spring ropes between body anchor points
//!
//! Anchors are tagged accessors rather than stored points: the attachment
//! location is recomputed from the owning body every time it is needed, so
//! a rope follows its bodies as they move and rotate.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::balloon::Corner;
use super::body::Body;
use crate::error::SimError;

/// Names a body inside an assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyRef {
    Envelope,
    Gondola,
    /// Ballast weight by index
    Weight(usize),
}

/// Which point of a body a rope attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorPoint {
    /// Center of mass (any body)
    Center,
    /// Lower-left attachment on the envelope rim
    EnvelopeLeft,
    /// Lower-right attachment on the envelope rim
    EnvelopeRight,
    /// A gondola corner
    Corner(Corner),
}

/// A rope end: a body plus a point on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub body: BodyRef,
    pub point: AnchorPoint,
}

impl Anchor {
    pub const fn new(body: BodyRef, point: AnchorPoint) -> Self {
        Self { body, point }
    }

    /// Anchor at a body's center of mass
    pub const fn center(body: BodyRef) -> Self {
        Self::new(body, AnchorPoint::Center)
    }
}

/// Anything that can resolve anchors to bodies and world points
pub trait BodySet {
    fn body(&self, id: BodyRef) -> Option<&Body>;

    fn body_mut(&mut self, id: BodyRef) -> Option<&mut Body>;

    /// Current world position of an anchor, if the body has that point
    fn anchor_point(&self, anchor: Anchor) -> Option<DVec2>;

    /// Offset from the anchor's body center to the anchor point
    fn anchor_offset(&self, anchor: Anchor) -> Option<DVec2> {
        let point = self.anchor_point(anchor)?;
        Some(point - self.body(anchor.body)?.position)
    }
}

/// A one-sided spring that can snap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rope {
    a: Anchor,
    b: Anchor,
    spring_constant: f64,
    rest_length: f64,
    break_force: Option<f64>,
    broken: bool,
}

impl Rope {
    /// Create a rope whose rest length is the current anchor distance
    pub fn new<B: BodySet + ?Sized>(
        a: Anchor,
        b: Anchor,
        spring_constant: f64,
        break_force: Option<f64>,
        bodies: &B,
    ) -> Result<Self, SimError> {
        for anchor in [a, b] {
            if bodies.anchor_point(anchor).is_none() {
                return Err(SimError::UnresolvedAnchor {
                    body: format!("{:?}", anchor.body),
                    point: format!("{:?}", anchor.point),
                });
            }
        }

        let mut rope = Self {
            a,
            b,
            spring_constant,
            rest_length: 0.0,
            break_force,
            broken: false,
        };
        rope.rest_length = rope.length(bodies);
        Ok(rope)
    }

    pub fn anchors(&self) -> (Anchor, Anchor) {
        (self.a, self.b)
    }

    pub fn spring_constant(&self) -> f64 {
        self.spring_constant
    }

    pub fn rest_length(&self) -> f64 {
        self.rest_length
    }

    pub fn break_force(&self) -> Option<f64> {
        self.break_force
    }

    pub fn is_broken(&self) -> bool {
        self.broken
    }

    /// Cut the rope; it never reattaches
    pub fn sever(&mut self) {
        if !self.broken {
            log::info!("Rope {:?} -> {:?} severed", self.a.body, self.b.body);
        }
        self.broken = true;
    }

    /// Current world positions of both ends
    pub fn endpoints<B: BodySet + ?Sized>(&self, bodies: &B) -> Option<(DVec2, DVec2)> {
        Some((bodies.anchor_point(self.a)?, bodies.anchor_point(self.b)?))
    }

    /// Current distance between the anchors
    pub fn length<B: BodySet + ?Sized>(&self, bodies: &B) -> f64 {
        self.endpoints(bodies)
            .map_or(self.rest_length, |(pa, pb)| pa.distance(pb))
    }

    /// Spring tension at the current length; zero under compression
    pub fn tension<B: BodySet + ?Sized>(&self, bodies: &B) -> f64 {
        (self.spring_constant * (self.length(bodies) - self.rest_length)).max(0.0)
    }

    /// Apply tension to both bodies, snapping the rope if overloaded
    pub fn pre_step<B: BodySet + ?Sized>(&mut self, bodies: &mut B) {
        if self.broken {
            return;
        }

        let tension = self.tension(&*bodies);
        if let Some(limit) = self.break_force {
            if tension > limit {
                log::info!(
                    "Rope {:?} -> {:?} snapped at tension {:.1} (limit {:.1})",
                    self.a.body,
                    self.b.body,
                    tension,
                    limit
                );
                self.broken = true;
                return;
            }
        }
        if tension <= 0.0 {
            return;
        }

        let (Some((pa, pb)), Some(offset_a), Some(offset_b)) = (
            self.endpoints(&*bodies),
            bodies.anchor_offset(self.a),
            bodies.anchor_offset(self.b),
        ) else {
            return;
        };
        let force = (pb - pa).normalize_or_zero() * tension;

        if let Some(body) = bodies.body_mut(self.a.body) {
            body.add_force(force, offset_a);
        }
        if let Some(body) = bodies.body_mut(self.b.body) {
            body.add_force(-force, offset_b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Two free bodies: Envelope -> `a`, Gondola -> `b`
    struct Pair {
        a: Body,
        b: Body,
    }

    impl Pair {
        fn new(pa: DVec2, pb: DVec2) -> Self {
            Self {
                a: Body::new(1.0, 1.0).unwrap().with_position(pa),
                b: Body::new(1.0, 1.0).unwrap().with_position(pb),
            }
        }
    }

    impl BodySet for Pair {
        fn body(&self, id: BodyRef) -> Option<&Body> {
            match id {
                BodyRef::Envelope => Some(&self.a),
                BodyRef::Gondola => Some(&self.b),
                BodyRef::Weight(_) => None,
            }
        }

        fn body_mut(&mut self, id: BodyRef) -> Option<&mut Body> {
            match id {
                BodyRef::Envelope => Some(&mut self.a),
                BodyRef::Gondola => Some(&mut self.b),
                BodyRef::Weight(_) => None,
            }
        }

        fn anchor_point(&self, anchor: Anchor) -> Option<DVec2> {
            match anchor.point {
                AnchorPoint::Center => self.body(anchor.body).map(|b| b.position),
                _ => None,
            }
        }
    }

    const A: Anchor = Anchor::center(BodyRef::Envelope);
    const B: Anchor = Anchor::center(BodyRef::Gondola);

    fn rope(pair: &Pair, limit: Option<f64>) -> Rope {
        Rope::new(A, B, 100.0, limit, pair).unwrap()
    }

    #[test]
    fn test_rest_length_captured_at_construction() {
        let pair = Pair::new(DVec2::ZERO, DVec2::new(0.0, 50.0));
        assert_eq!(rope(&pair, None).rest_length(), 50.0);
    }

    #[test]
    fn test_unresolved_anchor_rejected() {
        let pair = Pair::new(DVec2::ZERO, DVec2::new(0.0, 50.0));
        let bad = Anchor::new(BodyRef::Gondola, AnchorPoint::EnvelopeLeft);
        assert!(matches!(
            Rope::new(A, bad, 100.0, None, &pair),
            Err(SimError::UnresolvedAnchor { .. })
        ));
        let missing = Anchor::center(BodyRef::Weight(3));
        assert!(Rope::new(missing, B, 100.0, None, &pair).is_err());
    }

    #[test]
    fn test_length_tracks_bodies() {
        let mut pair = Pair::new(DVec2::ZERO, DVec2::new(0.0, 50.0));
        let rope = rope(&pair, None);
        pair.b.position.y = 80.0;
        assert_eq!(rope.length(&pair), 80.0);
        assert_eq!(rope.rest_length(), 50.0);
    }

    #[test]
    fn test_at_rest_length_applies_nothing() {
        let mut pair = Pair::new(DVec2::new(3.0, 4.0), DVec2::new(30.0, 44.0));
        let mut rope = rope(&pair, Some(1500.0));
        assert_eq!(rope.tension(&pair), 0.0);
        rope.pre_step(&mut pair);
        assert_eq!(pair.a.force(), DVec2::ZERO);
        assert_eq!(pair.b.force(), DVec2::ZERO);
        assert_eq!(pair.a.torque(), 0.0);
        assert_eq!(pair.b.torque(), 0.0);
    }

    #[test]
    fn test_stretch_pulls_ends_together() {
        let mut pair = Pair::new(DVec2::ZERO, DVec2::new(0.0, 50.0));
        let mut rope = rope(&pair, None);
        pair.b.position.y = 52.0;
        rope.pre_step(&mut pair);
        // 100 * 2 = 200 along +y on A, -y on B
        assert!((pair.a.force() - DVec2::new(0.0, 200.0)).length() < 1e-9);
        assert!((pair.b.force() - DVec2::new(0.0, -200.0)).length() < 1e-9);
    }

    #[test]
    fn test_compression_gives_zero_tension() {
        let mut pair = Pair::new(DVec2::ZERO, DVec2::new(0.0, 50.0));
        let mut rope = rope(&pair, None);
        pair.b.position.y = 20.0;
        assert_eq!(rope.tension(&pair), 0.0);
        rope.pre_step(&mut pair);
        assert_eq!(pair.a.force(), DVec2::ZERO);
        assert_eq!(pair.b.force(), DVec2::ZERO);
    }

    #[test]
    fn test_break_once_and_stay_silent() {
        let mut pair = Pair::new(DVec2::ZERO, DVec2::new(0.0, 50.0));
        let mut rope = rope(&pair, Some(1500.0));

        // 100 * 20 = 2000 > 1500
        pair.b.position.y = 70.0;
        rope.pre_step(&mut pair);
        assert!(rope.is_broken());
        assert_eq!(pair.a.force(), DVec2::ZERO);
        assert_eq!(pair.b.force(), DVec2::ZERO);

        // Any later stretch or slack contributes nothing
        for y in [60.0, 500.0, 10.0] {
            pair.b.position.y = y;
            rope.pre_step(&mut pair);
            assert!(rope.is_broken());
            assert_eq!(pair.a.force(), DVec2::ZERO);
            assert_eq!(pair.b.force(), DVec2::ZERO);
        }
    }

    #[test]
    fn test_below_threshold_holds() {
        let mut pair = Pair::new(DVec2::ZERO, DVec2::new(0.0, 50.0));
        let mut rope = rope(&pair, Some(1500.0));
        pair.b.position.y = 64.0;
        rope.pre_step(&mut pair);
        assert!(!rope.is_broken());
        assert!(pair.a.force().y > 0.0);
    }

    #[test]
    fn test_sever_is_permanent() {
        let mut pair = Pair::new(DVec2::ZERO, DVec2::new(0.0, 50.0));
        let mut rope = rope(&pair, None);
        rope.sever();
        pair.b.position.y = 60.0;
        rope.pre_step(&mut pair);
        assert!(rope.is_broken());
        assert_eq!(pair.b.force(), DVec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_tension_never_negative(y in -500.0f64..500.0, x in -500.0f64..500.0) {
            let mut pair = Pair::new(DVec2::ZERO, DVec2::new(0.0, 50.0));
            let rope = rope(&pair, None);
            pair.b.position = DVec2::new(x, y);
            prop_assert!(rope.tension(&pair) >= 0.0);
        }
    }
}
