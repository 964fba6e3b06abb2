//! Shape tessellation for 2D primitives
//!
//! Every shape becomes a plain triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a line as a thin quad
pub fn line(start: Vec2, end: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    // Direction from start to end
    let dir = (end - start).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = dir.perp() * (width * 0.5);

    // Quad corners
    let a0 = start + perp;
    let a1 = start - perp;
    let b0 = end + perp;
    let b1 = end - perp;

    // Two triangles
    vec![
        Vertex::new(a0.x, a0.y, color),
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b0.x, b0.y, color),
        Vertex::new(b0.x, b0.y, color),
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled convex polygon (triangle fan)
pub fn convex_polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut vertices = Vec::with_capacity(rest.len().saturating_sub(1) * 3);

    for pair in rest.windows(2) {
        vertices.push(Vertex::new(first.x, first.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }

    vertices
}

/// Segment count for a circle so edges stay around 4 px long
pub fn circle_segments(radius: f32) -> u32 {
    ((2.0 * PI * radius / 4.0).ceil() as u32).clamp(12, 96)
}
