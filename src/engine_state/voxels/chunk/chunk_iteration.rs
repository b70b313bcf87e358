//! # Chunk Iteration Module
//!
//! This module provides an iterator over the active voxels of a chunk in scan
//! order: x outermost, then y, then z. Mesh generation relies on this order to
//! produce identical buffers for identical grids.

use cgmath::Point3;

use crate::engine_state::voxels::voxel::Voxel;

use super::Chunk;

/// An iterator over all active voxels in a chunk, with their local coordinates.
pub struct ChunkVoxelIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Index of the next cell to inspect in the flat grid
    current_offset: usize,
}

impl<'a> ChunkVoxelIterator<'a> {
    /// Creates a new iterator positioned before the first cell of `chunk_ref`.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkVoxelIterator {
            chunk_ref,
            current_offset: 0,
        }
    }
}

impl<'a> Iterator for ChunkVoxelIterator<'a> {
    type Item = (Point3<usize>, &'a Voxel);

    fn next(&mut self) -> Option<Self::Item> {
        let voxels = self.chunk_ref.voxels();
        while self.current_offset < voxels.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let voxel = &voxels[offset];
            if voxel.active {
                return Some((self.chunk_ref.position_of(offset), voxel));
            }
        }
        None
    }
}
