//! # Chunk Module
//!
//! This module provides the `Chunk` struct, which owns a cubic grid of voxels
//! and turns it into a triangle mesh by face culling.
//!
//! ## Meshing
//!
//! Every active voxel checks its six neighbours. A face is emitted when the
//! neighbour is inactive or lies outside the chunk; there is no lookup into
//! adjacent chunks, so boundary voxels always emit their outward faces. Each
//! exposed face becomes its own quad, even when it is coplanar with the face
//! next to it.
//!
//! ## Edits
//!
//! `set_voxel_active` rebuilds the whole mesh before returning, so the mesh is
//! always consistent with the grid. That costs O(size³) per edit.
//!
//! ### Storage
//! - `voxels`: flat `size³` vector indexed `x * size² + y * size + z`
//! - `mesh`: the last mesh built from `voxels`

use cgmath::{Point3, Vector3};
use log::{debug, trace};
use web_time::Instant;

use chunk_creation::VoxelGridBuilder;
use chunk_iteration::ChunkVoxelIterator;

use super::voxel::{voxel_side::VoxelSide, Voxel};
use crate::engine_state::rendering::{Face, MeshData, MeshSink, RenderSlot};
use crate::engine_state::transform::Transform;
use crate::error::VoxelResult;

mod chunk_creation;
pub mod chunk_iteration;

/// A cubic block of voxels that meshes itself.
///
/// The grid always holds exactly `size³` voxels and the mesh always reflects the
/// current grid. The mesh is published to the chunk's [`MeshSink`] each time it
/// is rebuilt.
pub struct Chunk {
    /// Placement of this chunk in the world.
    transform: Transform,

    /// Edge length of the grid.
    size: usize,

    /// The voxel grid, `size³` cells in scan order.
    voxels: Vec<Voxel>,

    /// Mesh built from the current grid.
    mesh: MeshData,

    /// Receiver of every rebuilt mesh.
    sink: Box<dyn MeshSink>,
}

impl Chunk {
    /// Creates a fully active chunk of edge `size` that publishes into a [`RenderSlot`].
    ///
    /// # Errors
    /// See [`Chunk::initialize`].
    pub fn new(transform: Transform, size: i32) -> VoxelResult<Self> {
        Self::with_sink(transform, size, Box::new(RenderSlot::new()))
    }

    /// Creates a fully active chunk of edge `size` that publishes into `sink`.
    ///
    /// # Errors
    /// See [`Chunk::initialize`].
    pub fn with_sink(
        transform: Transform,
        size: i32,
        sink: Box<dyn MeshSink>,
    ) -> VoxelResult<Self> {
        let mut chunk = Chunk {
            transform,
            size: 0,
            voxels: Vec::new(),
            mesh: MeshData::new(),
            sink,
        };
        chunk.initialize(size)?;
        Ok(chunk)
    }

    /// Replaces the grid with `size³` active voxels and rebuilds the mesh.
    ///
    /// Voxel positions are `transform.position + (x, y, z)`.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `size <= 0` or `size > MAX_CHUNK_SIZE`, and
    /// `GridAllocation` if the grid cannot be allocated. On error the chunk is
    /// left unchanged.
    pub fn initialize(&mut self, size: i32) -> VoxelResult<()> {
        self.voxels = VoxelGridBuilder::new(&self.transform, size)?.finish();
        self.size = size as usize;

        debug!(
            "Initialized {} with {} voxels",
            self.transform.name,
            self.voxels.len()
        );

        self.generate_mesh();
        Ok(())
    }

    /// Returns `true` if a face bordering grid cell `(x, y, z)` should be drawn.
    ///
    /// Cells outside `[0, size)` on any axis always expose the face; otherwise
    /// the face is exposed when the cell is inactive.
    pub fn is_face_exposed(&self, x: i32, y: i32, z: i32) -> bool {
        match self.index_of(x, y, z) {
            Some(index) => !self.voxels[index].active,
            None => true,
        }
    }

    /// Rebuilds the mesh from the grid and publishes it.
    ///
    /// Active voxels are visited x, then y, then z, and each tests its sides in
    /// [`VoxelSide::all`] order, so equal grids give equal buffers.
    pub fn generate_mesh(&mut self) {
        let start = Instant::now();
        let mut mesh = MeshData::new();

        for (position, _) in ChunkVoxelIterator::new(self) {
            let (x, y, z) = (position.x as i32, position.y as i32, position.z as i32);
            let center = Vector3::new(position.x as f32, position.y as f32, position.z as f32);

            for side in VoxelSide::all() {
                let offset = side.offset();
                if self.is_face_exposed(x + offset.x, y + offset.y, z + offset.z) {
                    mesh.add_face(&Face::new(center, side));
                }
            }
        }

        mesh.recalculate_normals();
        self.sink.publish_mesh(&mesh);
        self.mesh = mesh;

        debug!(
            "Meshed {}: {} quads in {:?}",
            self.transform.name,
            self.mesh.quad_count(),
            start.elapsed()
        );
    }

    /// Sets the voxel at `(x, y, z)` active or inactive and rebuilds the mesh.
    ///
    /// Coordinates outside the grid are ignored.
    ///
    /// # Returns
    /// `true` if the coordinate was inside the grid and the edit was applied.
    pub fn set_voxel_active(&mut self, x: i32, y: i32, z: i32, active: bool) -> bool {
        let Some(index) = self.index_of(x, y, z) else {
            trace!(
                "Ignoring edit outside {} at ({}, {}, {})",
                self.transform.name,
                x,
                y,
                z
            );
            return false;
        };

        self.voxels[index].active = active;
        self.generate_mesh();
        true
    }

    /// The voxel at `(x, y, z)`, or `None` outside the grid.
    pub fn voxel(&self, x: i32, y: i32, z: i32) -> Option<&Voxel> {
        self.index_of(x, y, z).map(|index| &self.voxels[index])
    }

    /// All voxels in scan order.
    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Edge length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Placement of this chunk.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The mesh built from the current grid.
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Number of quads in the current mesh.
    pub fn quad_count(&self) -> usize {
        self.mesh.quad_count()
    }

    /// Number of active voxels.
    pub fn active_voxel_count(&self) -> usize {
        self.voxels.iter().filter(|voxel| voxel.active).count()
    }

    /// Flat grid index of `(x, y, z)`, or `None` outside the grid.
    fn index_of(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let size = self.size as i64;
        let in_range = |c: i32| (0..size).contains(&(c as i64));
        if !(in_range(x) && in_range(y) && in_range(z)) {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        Some(x * self.size * self.size + y * self.size + z)
    }

    /// Local coordinate of flat grid index `offset`.
    pub(crate) fn position_of(&self, offset: usize) -> Point3<usize> {
        let plane = self.size * self.size;
        Point3::new(offset / plane, (offset / self.size) % self.size, offset % self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn solid_chunk(size: i32) -> Chunk {
        Chunk::new(Transform::at_origin("Chunk_0_0_0"), size).unwrap()
    }

    /// Counts exposed faces straight from the predicate.
    fn exposed_face_count(chunk: &Chunk) -> usize {
        let size = chunk.size() as i32;
        let mut count = 0;
        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    if !chunk.voxel(x, y, z).unwrap().active {
                        continue;
                    }
                    for side in VoxelSide::all() {
                        let o = side.offset();
                        if chunk.is_face_exposed(x + o.x, y + o.y, z + o.z) {
                            count += 1;
                        }
                    }
                }
            }
        }
        count
    }

    #[derive(Default)]
    struct CountingSink {
        published: Rc<RefCell<Vec<usize>>>,
    }

    impl MeshSink for CountingSink {
        fn publish_mesh(&mut self, mesh: &MeshData) {
            self.published.borrow_mut().push(mesh.quad_count());
        }
    }

    #[test]
    fn outside_coordinates_are_exposed_and_interior_ones_are_not() {
        let chunk = solid_chunk(3);
        for a in 0..3 {
            for b in 0..3 {
                assert!(chunk.is_face_exposed(-1, a, b));
                assert!(chunk.is_face_exposed(3, a, b));
                assert!(chunk.is_face_exposed(a, -1, b));
                assert!(chunk.is_face_exposed(a, 3, b));
                assert!(chunk.is_face_exposed(a, b, -1));
                assert!(chunk.is_face_exposed(a, b, 3));
                assert!(!chunk.is_face_exposed(a, b, 1));
            }
        }
    }

    #[test]
    fn two_cubed_chunk_exposes_only_outward_faces() {
        // each voxel has three active in-bounds neighbours, so 8 * 3 faces remain
        let chunk = solid_chunk(2);
        let mesh = chunk.mesh();
        assert_eq!(chunk.quad_count(), 24);
        assert_eq!(mesh.vertices.len(), 96);
        assert_eq!(mesh.triangle_count(), 48);
        assert_eq!(mesh.uvs.len(), 96);
        assert_eq!(mesh.normals.len(), 96);
        assert!(mesh.is_consistent());
    }

    #[test]
    fn solid_chunks_only_mesh_their_shell() {
        for size in 1..=5 {
            let chunk = solid_chunk(size);
            let expected = exposed_face_count(&chunk);
            assert_eq!(chunk.quad_count(), expected);
            assert_eq!(expected, 6 * (size * size) as usize);
            assert!(chunk.mesh().is_consistent());
        }
    }

    #[test]
    fn single_voxel_chunk_is_a_unit_cube() {
        let chunk = solid_chunk(1);
        assert_eq!(chunk.quad_count(), 6);
        let mesh = chunk.mesh();
        for vertex in &mesh.vertices {
            assert_eq!(vertex.x.abs(), 0.5);
            assert_eq!(vertex.y.abs(), 0.5);
            assert_eq!(vertex.z.abs(), 0.5);
        }
    }

    #[test]
    fn faces_follow_side_order_for_each_voxel() {
        let chunk = solid_chunk(1);
        let mesh = chunk.mesh();
        for (quad, side) in VoxelSide::all().into_iter().enumerate() {
            let face = Face::new(Vector3::new(0.0, 0.0, 0.0), side);
            assert_eq!(&mesh.vertices[quad * 4..quad * 4 + 4], &face.corners);
            assert_eq!(mesh.normals[quad * 4], side.normal());
        }
    }

    #[test]
    fn removing_interior_voxel_exposes_its_neighbours() {
        let mut chunk = solid_chunk(3);
        let before = chunk.quad_count();

        assert!(chunk.set_voxel_active(1, 1, 1, false));
        let after = chunk.quad_count();
        assert_eq!(after, before + 6);
        assert!(after <= before + 12);
        assert_eq!(after, exposed_face_count(&chunk));

        let snapshot = chunk.mesh().clone();
        assert!(chunk.set_voxel_active(1, 1, 1, false));
        assert_eq!(chunk.mesh(), &snapshot);
    }

    #[test]
    fn toggling_a_voxel_restores_the_mesh() {
        let mut chunk = solid_chunk(4);
        chunk.set_voxel_active(2, 1, 3, false);
        let original = chunk.mesh().clone();

        chunk.set_voxel_active(2, 1, 3, true);
        assert_ne!(chunk.mesh(), &original);
        chunk.set_voxel_active(2, 1, 3, false);

        assert_eq!(chunk.mesh(), &original);
    }

    #[test]
    fn removing_a_corner_voxel_keeps_counts_consistent() {
        let mut chunk = solid_chunk(3);
        chunk.set_voxel_active(0, 0, 0, false);
        // 3 outward faces vanish and 3 neighbour faces appear
        assert_eq!(chunk.quad_count(), 54);
        assert_eq!(chunk.quad_count(), exposed_face_count(&chunk));
        assert_eq!(chunk.active_voxel_count(), 26);
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = CountingSink {
            published: published.clone(),
        };
        let mut chunk =
            Chunk::with_sink(Transform::at_origin("Chunk_0_0_0"), 2, Box::new(sink)).unwrap();
        let before = chunk.mesh().clone();

        assert!(!chunk.set_voxel_active(2, 0, 0, false));
        assert!(!chunk.set_voxel_active(0, -1, 0, false));
        assert!(!chunk.set_voxel_active(0, 0, i32::MAX, false));

        assert_eq!(chunk.mesh(), &before);
        assert_eq!(published.borrow().len(), 1);
    }

    #[test]
    fn every_rebuild_is_published() {
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = CountingSink {
            published: published.clone(),
        };
        let mut chunk =
            Chunk::with_sink(Transform::at_origin("Chunk_0_0_0"), 3, Box::new(sink)).unwrap();
        chunk.set_voxel_active(1, 1, 1, false);
        chunk.set_voxel_active(1, 1, 1, true);

        assert_eq!(*published.borrow(), vec![54, 60, 54]);
    }

    #[test]
    fn fully_inactive_chunk_has_empty_mesh() {
        let mut chunk = solid_chunk(2);
        for x in 0..2 {
            for y in 0..2 {
                for z in 0..2 {
                    chunk.set_voxel_active(x, y, z, false);
                }
            }
        }
        assert!(chunk.mesh().is_empty());
        assert_eq!(chunk.active_voxel_count(), 0);
    }

    #[test]
    fn invalid_sizes_fail_fast() {
        assert!(Chunk::new(Transform::at_origin("Chunk_0_0_0"), 0).is_err());
        assert!(Chunk::new(Transform::at_origin("Chunk_0_0_0"), -4).is_err());
    }

    #[test]
    fn failed_reinitialize_leaves_chunk_untouched() {
        let mut chunk = solid_chunk(2);
        chunk.set_voxel_active(1, 1, 1, false);
        let mesh = chunk.mesh().clone();

        assert!(chunk.initialize(0).is_err());
        assert_eq!(chunk.size(), 2);
        assert_eq!(chunk.mesh(), &mesh);

        chunk.initialize(3).unwrap();
        assert_eq!(chunk.size(), 3);
        assert_eq!(chunk.active_voxel_count(), 27);
    }

    #[test]
    fn voxel_positions_are_offset_by_chunk_origin() {
        let transform = Transform::new("Chunk_1_0_2", Point3::new(4.0, 0.0, 8.0));
        let chunk = Chunk::new(transform, 4).unwrap();
        assert_eq!(
            chunk.voxel(1, 2, 3).unwrap().position,
            Point3::new(5.0, 2.0, 11.0)
        );
        assert!(chunk.voxel(4, 0, 0).is_none());
    }

    #[test]
    fn mesh_stays_in_local_space() {
        let transform = Transform::new("Chunk_9_9_9", Point3::new(144.0, 144.0, 144.0));
        let moved = Chunk::new(transform, 2).unwrap();
        assert_eq!(moved.mesh(), solid_chunk(2).mesh());
    }

    #[test]
    fn grid_index_round_trips() {
        let chunk = solid_chunk(3);
        for offset in 0..27 {
            let p = chunk.position_of(offset);
            assert_eq!(
                chunk.index_of(p.x as i32, p.y as i32, p.z as i32),
                Some(offset)
            );
        }
    }
}
