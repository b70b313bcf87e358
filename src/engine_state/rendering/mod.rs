//! Rendering side of the voxel core.
//!
//! This module turns chunk voxel data into meshes and defines the sink those
//! meshes are published to. It does not talk to a GPU: a renderer receives
//! [`MeshData`] through a [`MeshSink`] and can upload it as interleaved
//! [`Vertex`] data.

pub mod meshing;
mod render_slot;
mod vertex;

// Re-export commonly used types
pub use meshing::{Face, MeshData};
pub use render_slot::{Material, MeshSink, RenderObject, RenderSlot};
pub use vertex::Vertex;
