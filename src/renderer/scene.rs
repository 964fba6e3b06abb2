//! Scene drawing
//!
//! Draw order is painter's order: sky, terrain, then the balloon parts in
//! their step order (ropes behind bodies).

use glam::DVec2;

use super::surface::{Draw, DrawSurface};
use super::vertex::colors;
use crate::sim::balloon::{Balloon, Corner, Envelope, Gondola, Part, Rig, Weight};
use crate::sim::rope::Rope;
use crate::sim::state::GameState;
use crate::sim::terrain::Terrain;

/// Horizontal spacing of terrain samples in pixels
const TERRAIN_STEP: f64 = 4.0;
/// Radius of debug anchor dots
const ANCHOR_DOT_RADIUS: f64 = 3.0;

impl Draw for Terrain {
    /// Fill between the height field and the bottom of the viewport
    ///
    /// Emitted as vertical convex strips so any polygon filler can handle it.
    fn draw(&self, surface: &mut dyn DrawSurface, offset: DVec2) {
        let extent = surface.extent();
        let bottom = extent.y;
        let columns = (extent.x / TERRAIN_STEP).ceil().max(1.0) as usize;

        let ground = |sx: f64| {
            let y = self.elevation(sx + offset.x) - offset.y;
            DVec2::new(sx, y.min(bottom))
        };

        let mut left = ground(0.0);
        for i in 1..=columns {
            let right = ground((i as f64 * TERRAIN_STEP).min(extent.x));
            surface.filled_polygon(
                &[
                    left,
                    right,
                    DVec2::new(right.x, bottom),
                    DVec2::new(left.x, bottom),
                ],
                colors::TERRAIN,
            );
            left = right;
        }
    }
}

impl Draw for Weight {
    fn draw(&self, surface: &mut dyn DrawSurface, offset: DVec2) {
        surface.circle(self.position() - offset, self.radius, colors::WEIGHT);
    }
}

impl Draw for Gondola {
    fn draw(&self, surface: &mut dyn DrawSurface, offset: DVec2) {
        let outline = self.outline().map(|p| p - offset);
        surface.filled_polygon(&outline, colors::GONDOLA);
    }
}

impl Draw for Envelope {
    fn draw(&self, surface: &mut dyn DrawSurface, offset: DVec2) {
        surface.circle(self.position() - offset, self.radius(), self.color());
    }
}

/// Draw a rope as a straight line unless it has broken
pub fn draw_rope(rope: &Rope, rig: &Rig, surface: &mut dyn DrawSurface, offset: DVec2) {
    if rope.is_broken() {
        return;
    }
    if let Some((a, b)) = rope.endpoints(rig) {
        surface.line(a - offset, b - offset, colors::ROPE);
    }
}

/// Debug dots on every rope attachment point
pub fn draw_anchors(rig: &Rig, surface: &mut dyn DrawSurface, offset: DVec2) {
    for corner in Corner::OUTLINE {
        let color = match corner {
            Corner::TopLeft | Corner::TopRight => colors::TOP_ANCHOR,
            Corner::BottomLeft | Corner::BottomRight => colors::BOTTOM_ANCHOR,
        };
        surface.circle(rig.gondola.corner(corner) - offset, ANCHOR_DOT_RADIUS, color);
    }
    for point in [rig.envelope.left_anchor(), rig.envelope.right_anchor()] {
        surface.circle(point - offset, ANCHOR_DOT_RADIUS, colors::TOP_ANCHOR);
    }
}

impl Draw for Balloon {
    fn draw(&self, surface: &mut dyn DrawSurface, offset: DVec2) {
        let rig = self.rig();
        for part in self.order() {
            match *part {
                Part::Rope(i) => {
                    if let Some(rope) = self.ropes().get(i) {
                        draw_rope(rope, rig, surface, offset);
                    }
                }
                Part::Envelope => rig.envelope.draw(surface, offset),
                Part::Gondola => rig.gondola.draw(surface, offset),
                Part::Weight(i) => {
                    if let Some(w) = rig.weights.get(i) {
                        w.draw(surface, offset);
                    }
                }
            }
        }
    }
}

impl Draw for GameState {
    fn draw(&self, surface: &mut dyn DrawSurface, offset: DVec2) {
        let extent = surface.extent();
        surface.filled_polygon(
            &[
                DVec2::ZERO,
                DVec2::new(extent.x, 0.0),
                extent,
                DVec2::new(0.0, extent.y),
            ],
            colors::SKY,
        );

        self.terrain().draw(surface, offset);
        self.balloon().draw(surface, offset);

        if self.settings().display.draw_anchors {
            draw_anchors(self.balloon().rig(), surface, offset);
        }
    }
}
