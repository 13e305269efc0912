//! WebGPU rendering module
//!
//! The simulation hands over a [`crate::sim::Snapshot`]; `scene` turns it into
//! colored triangles in canvas pixels and `pipeline` draws them.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{build_scene, canvas_to_ndc};
pub use vertex::Vertex;
