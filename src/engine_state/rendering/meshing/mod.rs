//! Conversion of voxel data into triangle meshes.
//!
//! Chunks build their meshes from the types in [`mesh`]; this module only
//! re-exports them for the rest of the crate.

pub mod mesh;

pub use mesh::{Face, MeshData};
