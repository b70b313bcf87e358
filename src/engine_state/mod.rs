//! # Engine State Module
//!
//! The in-memory side of the voxel mesher.
//!
//! ## Key Components
//!
//! * `voxels` - Voxel data, chunks and the world lattice
//! * `rendering` - Mesh buffers and the sink meshes are published to
//! * `transform` - World-space placement of chunk and world nodes

pub mod rendering;
pub mod transform;
pub mod voxels;
