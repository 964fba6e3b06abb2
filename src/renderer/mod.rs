//! Rendering module
//!
//! The scene draws through the [`DrawSurface`] trait; the vertex surface
//! tessellates it into triangle lists for a GPU backend to upload.

pub mod camera;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use camera::Camera;
pub use surface::{CommandList, Draw, DrawCommand, DrawSurface, Rgb};
pub use vertex::{Vertex, VertexSurface};
