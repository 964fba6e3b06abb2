//! Drawing abstraction
//!
//! Scene objects draw themselves onto a [`DrawSurface`] in screen
//! coordinates: world position minus the camera offset. Hosts provide the
//! surface; [`CommandList`] records calls for tests and tooling.

use glam::DVec2;

/// 8-bit RGB color
pub type Rgb = [u8; 3];

/// Primitive drawing target
pub trait DrawSurface {
    fn line(&mut self, start: DVec2, end: DVec2, color: Rgb);

    /// Filled circle
    fn circle(&mut self, center: DVec2, radius: f64, color: Rgb);

    /// Filled convex polygon
    fn filled_polygon(&mut self, points: &[DVec2], color: Rgb);

    /// Viewport size in pixels
    fn extent(&self) -> DVec2;
}

/// Something that can draw itself
pub trait Draw {
    fn draw(&self, surface: &mut dyn DrawSurface, offset: DVec2);
}

/// Earlier entries are painted first and end up behind later ones
impl<T: Draw> Draw for [T] {
    fn draw(&self, surface: &mut dyn DrawSurface, offset: DVec2) {
        for item in self {
            item.draw(surface, offset);
        }
    }
}

impl<T: Draw> Draw for Vec<T> {
    fn draw(&self, surface: &mut dyn DrawSurface, offset: DVec2) {
        self.as_slice().draw(surface, offset);
    }
}

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        start: DVec2,
        end: DVec2,
        color: Rgb,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: Rgb,
    },
    Polygon {
        points: Vec<DVec2>,
        color: Rgb,
    },
}

/// Surface that records every call in order
#[derive(Debug, Clone)]
pub struct CommandList {
    extent: DVec2,
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new(extent: DVec2) -> Self {
        Self {
            extent,
            commands: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = (DVec2, DVec2, Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { start, end, color } => Some((*start, *end, *color)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (DVec2, f64, Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }
}

impl DrawSurface for CommandList {
    fn line(&mut self, start: DVec2, end: DVec2, color: Rgb) {
        self.commands.push(DrawCommand::Line { start, end, color });
    }

    fn circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn filled_polygon(&mut self, points: &[DVec2], color: Rgb) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn extent(&self) -> DVec2 {
        self.extent
    }
}
