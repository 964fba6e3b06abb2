//! Vertex types and the tessellating draw surface

use bytemuck::{Pod, Zeroable};
use glam::{DVec2, Vec2};

use super::shapes;
use super::surface::{DrawSurface, Rgb};

/// Rope and outline width in pixels
const LINE_WIDTH: f32 = 1.5;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Opaque float color from 8-bit RGB
pub fn rgba(color: Rgb) -> [f32; 4] {
    [
        f32::from(color[0]) / 255.0,
        f32::from(color[1]) / 255.0,
        f32::from(color[2]) / 255.0,
        1.0,
    ]
}

/// Colors for scene elements
pub mod colors {
    use super::Rgb;

    pub const SKY: Rgb = [124, 199, 231];
    pub const TERRAIN: Rgb = [50, 150, 75];
    pub const ROPE: Rgb = [0, 0, 0];
    pub const GONDOLA: Rgb = [100, 100, 100];
    pub const WEIGHT: Rgb = [123, 79, 44];
    /// Upper attachment points (gondola top, envelope)
    pub const TOP_ANCHOR: Rgb = [0, 100, 0];
    /// Gondola bottom corners, where the ballast hangs
    pub const BOTTOM_ANCHOR: Rgb = [100, 0, 0];
}

/// Surface that tessellates everything into one triangle list
#[derive(Debug, Clone)]
pub struct VertexSurface {
    extent: DVec2,
    vertices: Vec<Vertex>,
}

impl VertexSurface {
    pub fn new(extent: DVec2) -> Self {
        Self {
            extent,
            vertices: Vec::new(),
        }
    }

    /// Start a new frame
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn resize(&mut self, extent: DVec2) {
        self.extent = extent;
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw vertex bytes, ready for a buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl DrawSurface for VertexSurface {
    fn line(&mut self, start: DVec2, end: DVec2, color: Rgb) {
        self.vertices.extend(shapes::line(
            start.as_vec2(),
            end.as_vec2(),
            LINE_WIDTH,
            rgba(color),
        ));
    }

    fn circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        let radius = radius as f32;
        self.vertices.extend(shapes::circle(
            center.as_vec2(),
            radius,
            rgba(color),
            shapes::circle_segments(radius),
        ));
    }

    fn filled_polygon(&mut self, points: &[DVec2], color: Rgb) {
        let points: Vec<Vec2> = points.iter().map(|p| p.as_vec2()).collect();
        self.vertices
            .extend(shapes::convex_polygon(&points, rgba(color)));
    }

    fn extent(&self) -> DVec2 {
        self.extent
    }
}
