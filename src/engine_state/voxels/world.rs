//! # World Module
//!
//! This module provides the `World` struct, which owns a cubic lattice of chunks
//! and routes voxel edits to the chunk that holds them.
//!
//! ## Architecture
//!
//! Chunks are stored in a hash map keyed by their integer chunk index
//! `(ix, iy, iz)`. A chunk's world-space origin is `index * chunk_size` and is
//! computed on demand, so lookups never compare floats.
//!
//! ## Chunk Generation
//!
//! `generate_world` eagerly creates all `world_size³` chunks, each fully active.
//! Every chunk meshes as if it were alone: faces on chunk boundaries are always
//! emitted, even when the neighbouring chunk is solid there.
//!
//! ## Performance Considerations
//!
//! - Total voxel count is `(world_size * chunk_size)³` and grows cubically
//! - An edit regenerates only the mesh of the chunk it lands in

use std::collections::HashMap;

use cgmath::{Point3, Vector3};
use log::{debug, info, warn};
use web_time::Instant;

use crate::config::WorldConfig;
use crate::engine_state::rendering::{MeshSink, RenderSlot};
use crate::engine_state::transform::Transform;
use crate::engine_state::voxels::chunk::Chunk;
use crate::error::{VoxelError, VoxelResult};

/// Integer index of a chunk on the world lattice.
pub type ChunkKey = Point3<i32>;

/// Builds the mesh sink for the chunk at a given key.
pub type SinkFactory = Box<dyn Fn(ChunkKey) -> Box<dyn MeshSink>>;

/// Worlds above this many voxels log a warning before generation.
pub const LARGE_WORLD_VOXEL_WARNING: usize = 1 << 24;

/// Represents a voxel world composed of a cubic lattice of chunks.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_mesher::{World, WorldConfig};
///
/// let mut world = World::new(WorldConfig::new(2, 4)).unwrap();
/// world.generate_world().unwrap();
/// assert_eq!(world.chunk_count(), 8);
///
/// // Knock out a voxel in the chunk at index (1, 0, 0)
/// assert!(world.set_voxel_active(Point3::new(5, 1, 1), false));
/// ```
pub struct World {
    /// Validated world dimensions.
    config: WorldConfig,

    /// Placement of the world node; chunks are parented to it.
    transform: Transform,

    /// A mapping from chunk index to chunk.
    chunks: HashMap<ChunkKey, Chunk>,

    /// Produces the sink each new chunk publishes into.
    sink_factory: SinkFactory,
}

impl World {
    /// Creates an empty world whose chunks publish into [`RenderSlot`]s.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `config` does not validate.
    pub fn new(config: WorldConfig) -> VoxelResult<Self> {
        Self::with_sink_factory(
            config,
            Box::new(|_: ChunkKey| -> Box<dyn MeshSink> { Box::new(RenderSlot::new()) }),
        )
    }

    /// Creates an empty world whose chunks publish into sinks built by `sink_factory`.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `config` does not validate.
    pub fn with_sink_factory(config: WorldConfig, sink_factory: SinkFactory) -> VoxelResult<Self> {
        config.validate()?;
        Ok(World {
            config,
            transform: Transform::at_origin("World"),
            chunks: HashMap::new(),
            sink_factory,
        })
    }

    /// Creates and meshes every chunk of the world.
    ///
    /// Chunks are created with x outermost and z innermost. Any chunks from a
    /// previous call are discarded first.
    ///
    /// # Errors
    /// `GridAllocation` if a chunk grid cannot be allocated. Chunks created
    /// before the failure are kept.
    pub fn generate_world(&mut self) -> VoxelResult<()> {
        let total_voxels = self.config.total_voxel_count()?;
        if total_voxels > LARGE_WORLD_VOXEL_WARNING {
            warn!(
                "Generating {} voxels ({}³ chunks of {}³); memory and time grow cubically",
                total_voxels, self.config.world_size, self.config.chunk_size
            );
        }
        if !self.chunks.is_empty() {
            debug!("Discarding {} existing chunks", self.chunks.len());
            self.chunks.clear();
        }

        let start = Instant::now();
        let world_size = self.config.world_size;
        self.chunks.reserve(self.config.total_chunk_count()?);

        for x in 0..world_size {
            for y in 0..world_size {
                for z in 0..world_size {
                    let key = Point3::new(x, y, z);
                    let origin = self.chunk_origin(key).ok_or_else(|| {
                        VoxelError::invalid("world_size", world_size as i64, "world edge overflows")
                    })?;
                    let transform = Transform::new(
                        format!("Chunk_{}_{}_{}", x, y, z),
                        Point3::new(origin.x as f32, origin.y as f32, origin.z as f32),
                    )
                    .with_parent(&self.transform);

                    let sink = (self.sink_factory)(key);
                    let chunk = Chunk::with_sink(transform, self.config.chunk_size, sink)?;
                    self.chunks.insert(key, chunk);
                }
            }
        }

        info!(
            "Generated {} chunks in {:?}",
            self.chunks.len(),
            start.elapsed()
        );
        Ok(())
    }

    /// World-space origin of the chunk at `key`.
    ///
    /// Keys need not be on the generated lattice. Returns `None` when the origin
    /// does not fit in an `i32`.
    pub fn chunk_origin(&self, key: ChunkKey) -> Option<Point3<i32>> {
        let size = self.config.chunk_size;
        Some(Point3::new(
            key.x.checked_mul(size)?,
            key.y.checked_mul(size)?,
            key.z.checked_mul(size)?,
        ))
    }

    /// Retrieves the chunk at the given chunk index.
    pub fn get_chunk_at(&self, key: ChunkKey) -> Option<&Chunk> {
        self.chunks.get(&key)
    }

    /// Retrieves the chunk at the given chunk index for editing.
    pub fn get_chunk_at_mut(&mut self, key: ChunkKey) -> Option<&mut Chunk> {
        self.chunks.get_mut(&key)
    }

    /// Retrieves the chunk whose world-space origin is exactly `origin`.
    ///
    /// Origins not on the chunk lattice return `None`.
    pub fn get_chunk_at_origin(&self, origin: Point3<i32>) -> Option<&Chunk> {
        let size = self.config.chunk_size;
        if origin.x % size != 0 || origin.y % size != 0 || origin.z % size != 0 {
            return None;
        }
        self.get_chunk_at(origin / size)
    }

    /// Splits a world-space voxel coordinate into chunk index and local coordinate.
    ///
    /// Uses Euclidean division, so negative coordinates map to negative chunk
    /// indices with non-negative local coordinates.
    pub fn chunk_key_for_voxel(&self, world_position: Point3<i32>) -> (ChunkKey, Vector3<i32>) {
        let size = self.config.chunk_size;
        let key = Point3::new(
            world_position.x.div_euclid(size),
            world_position.y.div_euclid(size),
            world_position.z.div_euclid(size),
        );
        let local = Vector3::new(
            world_position.x.rem_euclid(size),
            world_position.y.rem_euclid(size),
            world_position.z.rem_euclid(size),
        );
        (key, local)
    }

    /// Sets the voxel at a world-space coordinate and remeshes only its chunk.
    ///
    /// Coordinates outside every chunk are ignored.
    ///
    /// # Returns
    /// `true` if a chunk held the coordinate and the edit was applied.
    pub fn set_voxel_active(&mut self, world_position: Point3<i32>, active: bool) -> bool {
        let (key, local) = self.chunk_key_for_voxel(world_position);
        match self.chunks.get_mut(&key) {
            Some(chunk) => chunk.set_voxel_active(local.x, local.y, local.z, active),
            None => false,
        }
    }

    /// Iterates over all chunks with their indices, in no particular order.
    pub fn chunks(&self) -> impl Iterator<Item = (&ChunkKey, &Chunk)> {
        self.chunks.iter()
    }

    /// Number of chunks currently held.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of voxels across all held chunks.
    pub fn total_voxel_count(&self) -> usize {
        self.chunks.values().map(|chunk| chunk.voxels().len()).sum()
    }

    /// The configuration this world was built with.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Placement of the world node.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }
}
