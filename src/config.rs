//! # Configuration Module
//!
//! World dimensions, loaded from JSON or taken from defaults.
//!
//! The defaults reproduce the reference scene: 64 chunks per axis of 16³ voxels
//! each. That is roughly 1.07 billion voxels and is illustrative only; anything
//! that actually runs should pick far smaller numbers.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{VoxelError, VoxelResult};

/// Environment variable holding the path of a JSON world configuration.
pub const CONFIG_PATH_ENV: &str = "VOXEL_WORLD_CONFIG";

/// Number of chunks per axis in the reference scene.
pub const DEFAULT_WORLD_SIZE: i32 = 64;
/// Edge length of a chunk in the reference scene.
pub const DEFAULT_CHUNK_SIZE: i32 = 16;

/// Largest chunk edge whose worst-case mesh still indexes with `u32`.
///
/// See [`max_mesh_vertices`].
pub const MAX_CHUNK_SIZE: i32 = 709;

/// Upper bound on the vertices of one chunk mesh with edge `edge`.
///
/// Every interior quad separates an active voxel from an inactive one, so there
/// are at most `6 * min(active, inactive) <= 3 * edge³` of them, plus at most
/// `6 * edge²` on the chunk boundary. Each quad has 4 vertices.
pub fn max_mesh_vertices(edge: u64) -> u64 {
    4 * (3 * edge * edge * edge + 6 * edge * edge)
}

/// Dimensions of a voxel world.
///
/// Missing fields fall back to their defaults, so `{"world_size": 2}` is a valid
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Number of chunks along each axis.
    pub world_size: i32,
    /// Edge length of every chunk, in voxels.
    pub chunk_size: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            world_size: DEFAULT_WORLD_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl WorldConfig {
    /// Creates a configuration with the given dimensions. Not validated until
    /// [`WorldConfig::validate`] is called.
    pub fn new(world_size: i32, chunk_size: i32) -> Self {
        WorldConfig {
            world_size,
            chunk_size,
        }
    }

    /// Checks both sizes are positive, that `chunk_size <= MAX_CHUNK_SIZE`, and
    /// that the total voxel count fits in a `usize`.
    pub fn validate(&self) -> VoxelResult<()> {
        if self.world_size <= 0 {
            return Err(VoxelError::invalid(
                "world_size",
                self.world_size as i64,
                "must be positive",
            ));
        }
        if self.chunk_size <= 0 {
            return Err(VoxelError::invalid(
                "chunk_size",
                self.chunk_size as i64,
                "must be positive",
            ));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(VoxelError::invalid(
                "chunk_size",
                self.chunk_size as i64,
                "mesh would exceed u32 vertex indices",
            ));
        }
        self.total_voxel_count()?;
        Ok(())
    }

    /// Number of chunks the world will hold, `world_size³`.
    pub fn total_chunk_count(&self) -> VoxelResult<usize> {
        cube(self.world_size, "world_size")
    }

    /// Number of voxels the world will hold, `(world_size * chunk_size)³`.
    pub fn total_voxel_count(&self) -> VoxelResult<usize> {
        let edge = (self.world_size as i64) * (self.chunk_size as i64);
        let edge = i32::try_from(edge).map_err(|_| {
            VoxelError::invalid("world_size", self.world_size as i64, "world edge overflows")
        })?;
        cube(edge, "world_size")
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> VoxelResult<Self> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> VoxelResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Loads the file named by [`CONFIG_PATH_ENV`], or returns the defaults when unset.
    pub fn from_env() -> VoxelResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                log::info!("Loading world configuration from {}", path);
                Self::load(path)
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

/// `edge³` as a `usize`, rejecting non-positive edges and overflow.
pub(crate) fn cube(edge: i32, field: &'static str) -> VoxelResult<usize> {
    if edge <= 0 {
        return Err(VoxelError::invalid(field, edge as i64, "must be positive"));
    }
    let edge = edge as usize;
    edge.checked_mul(edge)
        .and_then(|plane| plane.checked_mul(edge))
        .ok_or_else(|| VoxelError::invalid(field, edge as i64, "voxel count overflows"))
}
