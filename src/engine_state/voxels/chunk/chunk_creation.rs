//! # Chunk Creation Module
//!
//! This module provides the builder used to allocate and fill a chunk's voxel
//! grid. Voxels are pushed in scan order (x outermost, z innermost) and the
//! builder tracks the local coordinate of the next cell so it can stamp each
//! voxel with its world-space position. Cells left unset when the builder is
//! finished become active voxels.
//!
//! ## Allocation
//!
//! The grid is reserved up front with `try_reserve_exact`, so a chunk too large
//! for the allocator surfaces as [`VoxelError::GridAllocation`] instead of an abort
//! partway through filling.

use cgmath::Vector3;

use crate::config::{cube, MAX_CHUNK_SIZE};
use crate::engine_state::transform::Transform;
use crate::engine_state::voxels::voxel::Voxel;
use crate::error::{VoxelError, VoxelResult};

/// A builder that fills a voxel grid in scan order.
pub struct VoxelGridBuilder<'a> {
    /// Placement of the chunk being filled, used for voxel positions
    transform: &'a Transform,
    /// Edge length of the chunk
    size: usize,
    /// The grid filled so far
    voxels: Vec<Voxel>,
    /// Current X position within the chunk
    local_x: usize,
    /// Current Y position within the chunk
    local_y: usize,
    /// Current Z position within the chunk
    local_z: usize,
}

impl<'a> VoxelGridBuilder<'a> {
    /// Reserves a `size³` grid for a chunk placed at `transform`.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `size <= 0` or `size > MAX_CHUNK_SIZE`, and
    /// `GridAllocation` if the grid cannot be reserved.
    pub fn new(transform: &'a Transform, size: i32) -> VoxelResult<Self> {
        if size > MAX_CHUNK_SIZE {
            return Err(VoxelError::invalid(
                "chunk_size",
                size as i64,
                "mesh would exceed u32 vertex indices",
            ));
        }
        let voxel_count = cube(size, "chunk_size")?;

        let mut voxels = Vec::new();
        voxels
            .try_reserve_exact(voxel_count)
            .map_err(|_| VoxelError::GridAllocation {
                voxels: voxel_count,
            })?;

        Ok(VoxelGridBuilder {
            transform,
            size: size as usize,
            voxels,
            local_x: 0,
            local_y: 0,
            local_z: 0,
        })
    }

    /// Returns `true` once every cell has been pushed.
    pub fn is_full(&self) -> bool {
        self.local_x == self.size
    }

    /// Adds a voxel at the current position and advances the position.
    ///
    /// Pushes past the end of the grid are ignored.
    pub fn push_voxel(&mut self, active: Option<bool>) {
        if self.is_full() {
            return;
        }

        let local = Vector3::new(
            self.local_x as f32,
            self.local_y as f32,
            self.local_z as f32,
        );
        self.voxels
            .push(Voxel::new(active, self.transform.local_to_world(local)));

        self.local_z += 1;
        if self.local_z == self.size {
            self.local_z = 0;
            self.local_y += 1;
            if self.local_y == self.size {
                self.local_y = 0;
                self.local_x += 1;
            }
        }
    }

    /// Fills any remaining cells with active voxels and returns the grid.
    pub fn finish(mut self) -> Vec<Voxel> {
        while !self.is_full() {
            self.push_voxel(None);
        }
        self.voxels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point3;

    #[test]
    fn fills_in_scan_order_with_world_positions() {
        let transform = Transform::new("Chunk_1_0_0", Point3::new(2.0, 0.0, 0.0));
        let mut builder = VoxelGridBuilder::new(&transform, 2).unwrap();
        builder.push_voxel(None);
        builder.push_voxel(Some(false));

        let voxels = builder.finish();
        assert_eq!(voxels.len(), 8);
        assert_eq!(voxels[0].position, Point3::new(2.0, 0.0, 0.0));
        assert!(!voxels[1].active);
        assert_eq!(voxels[1].position, Point3::new(2.0, 0.0, 1.0));
        assert_eq!(voxels[4].position, Point3::new(3.0, 0.0, 0.0));
        assert_eq!(voxels[7].position, Point3::new(3.0, 1.0, 1.0));
        assert!(voxels[7].active);
    }

    #[test]
    fn extra_pushes_are_ignored() {
        let transform = Transform::at_origin("Chunk_0_0_0");
        let mut builder = VoxelGridBuilder::new(&transform, 1).unwrap();
        builder.push_voxel(None);
        assert!(builder.is_full());
        builder.push_voxel(Some(false));
        let voxels = builder.finish();
        assert_eq!(voxels.len(), 1);
        assert!(voxels[0].active);
    }

    #[test]
    fn non_positive_sizes_are_rejected() {
        let transform = Transform::at_origin("Chunk_0_0_0");
        assert!(matches!(
            VoxelGridBuilder::new(&transform, 0),
            Err(VoxelError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            VoxelGridBuilder::new(&transform, -3),
            Err(VoxelError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn finishing_an_empty_builder_fills_every_cell() {
        let transform = Transform::at_origin("Chunk_0_0_0");
        let voxels = VoxelGridBuilder::new(&transform, 3).unwrap().finish();
        assert_eq!(voxels.len(), 27);
        assert!(voxels.iter().all(|voxel| voxel.active));
        assert_eq!(voxels[5].position, Point3::new(0.0, 1.0, 2.0));
        assert_eq!(voxels[26].position, Point3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn oversized_chunks_are_rejected() {
        let transform = Transform::at_origin("Chunk_0_0_0");
        assert!(matches!(
            VoxelGridBuilder::new(&transform, MAX_CHUNK_SIZE + 1),
            Err(VoxelError::InvalidConfiguration { field: "chunk_size", .. })
        ));
        assert!(matches!(
            VoxelGridBuilder::new(&transform, 1 << 20),
            Err(VoxelError::InvalidConfiguration { .. })
        ));
    }
}
