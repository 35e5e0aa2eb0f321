//! Rendering
//!
//! The game state becomes a [`Frame`] of draw commands, the frame is
//! tessellated into colored triangles, and the WebGPU pipeline draws them
//! letterboxed into the canvas.

pub mod batch;
pub mod font;
pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod sprites;
pub mod vertex;

pub use frame::{DrawCommand, Frame, build_frame};
pub use pipeline::RenderState;
pub use vertex::Vertex;
