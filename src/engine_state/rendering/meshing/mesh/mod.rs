//! Mesh generation for voxel chunks.
//!
//! This module provides the pieces the chunk mesher assembles: one [`Face`] per
//! exposed voxel side and the [`MeshData`] buffers they are appended to.
//!
//! # Architecture
//! - [`Face`]: A single unit quad on one side of a voxel
//! - [`MeshData`]: Vertex, triangle, UV and normal buffers for a whole chunk
//!
//! # Usage
//! ```
//! use cgmath::Vector3;
//! use voxel_mesher::{Face, MeshData, VoxelSide};
//!
//! let mut mesh = MeshData::new();
//! mesh.add_face(&Face::new(Vector3::new(0.0, 0.0, 0.0), VoxelSide::UP));
//! mesh.recalculate_normals();
//! assert_eq!(mesh.vertices.len(), 4);
//! ```
//!
//! # Performance Considerations
//! - Coplanar neighbouring faces are not merged, so vertex count grows with the
//!   number of exposed faces rather than the number of visible surfaces

mod face;
mod mesh;

pub use face::{Face, FACE_TRIANGLES, FACE_UVS};
pub use mesh::*;
