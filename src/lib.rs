#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Mesher
//!
//! Turns grids of on/off voxels into triangle meshes, one chunk at a time.
//!
//! A [`World`] holds a cubic lattice of [`Chunk`]s. Each chunk owns a `size³`
//! voxel grid and builds its own mesh by emitting one quad for every face of an
//! active voxel whose neighbour is inactive or outside the chunk. Editing a voxel
//! regenerates the mesh of that chunk only, and every new mesh is handed to the
//! chunk's [`MeshSink`].
//!
//! ## Key Modules
//!
//! * `config` - World dimensions, defaults and JSON loading
//! * `engine_state` - Voxels, chunks, the world, and mesh output
//! * `error` - The crate error type
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use voxel_mesher::{World, WorldConfig};
//!
//! let mut world = World::new(WorldConfig::new(2, 8)).unwrap();
//! world.generate_world().unwrap();
//!
//! world.set_voxel_active(Point3::new(3, 3, 3), false);
//! let chunk = world.get_chunk_at(Point3::new(0, 0, 0)).unwrap();
//! assert!(chunk.mesh().is_consistent());
//! ```
//!
//! ## Limitations
//!
//! * Faces are never merged, so meshes carry one quad per exposed face
//! * Chunks do not look at their neighbours; boundary faces are always emitted
//! * Every edit rebuilds the whole chunk mesh

pub mod config;
pub mod engine_state;
pub mod error;

pub use config::WorldConfig;
pub use engine_state::rendering::{
    Face, Material, MeshData, MeshSink, RenderObject, RenderSlot, Vertex,
};
pub use engine_state::transform::Transform;
pub use engine_state::voxels::chunk::Chunk;
pub use engine_state::voxels::voxel::{voxel_side::VoxelSide, Voxel};
pub use engine_state::voxels::world::{ChunkKey, SinkFactory, World};
pub use error::{VoxelError, VoxelResult};

use log::info;

/// Stopwatch label for whole-world generation in logs.
pub const WORLD_GENERATION_STOPWATCH: &str = "World Generation";

/// Initializes logging, loads the world configuration and generates the world.
///
/// Logging follows `RUST_LOG`. The configuration comes from the JSON file named
/// by `VOXEL_WORLD_CONFIG`, or the defaults when that is unset.
pub fn run() -> VoxelResult<()> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = WorldConfig::from_env()?;
    info!(
        "{}: {}³ chunks of {}³ voxels",
        WORLD_GENERATION_STOPWATCH, config.world_size, config.chunk_size
    );

    let mut world = World::new(config)?;
    world.generate_world()?;

    let quads: usize = world.chunks().map(|(_, chunk)| chunk.quad_count()).sum();
    info!(
        "{} chunks, {} voxels, {} quads",
        world.chunk_count(),
        world.total_voxel_count(),
        quads
    );
    Ok(())
}
