//! # Voxel Core
//!
//! This module contains the voxel data model and the chunk/world structure that
//! turns it into meshes.
//!
//! ## Architecture
//!
//! * **Voxel**: A single cell, active or inactive, and the six face directions
//! * **Chunk**: A fixed-size cube of voxels that culls hidden faces and builds its mesh
//! * **World**: A lattice of chunks keyed by chunk index, with world-space edit routing
//!
//! ## Data Flow
//!
//! 1. World creates every chunk on a regular lattice
//! 2. Each chunk fills its grid and meshes itself
//! 3. Meshes are published to each chunk's sink
//! 4. Edits land in one chunk, which regenerates its whole mesh
//!
//! ## Thread Safety
//!
//! Everything here is synchronous and single-threaded. Chunks never read each
//! other, so separate chunks could be meshed in parallel, but a single chunk
//! must not be edited concurrently.

pub mod chunk;
pub mod voxel;
pub mod world;
