//! # Error Module
//!
//! Error types shared by chunk construction, world generation and configuration
//! loading. Meshing itself never fails; the only failure paths are bad sizes,
//! voxel grids too large to allocate, and unreadable configuration files.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type VoxelResult<T> = Result<T, VoxelError>;

/// Everything that can go wrong while building chunks or worlds.
#[derive(Debug, Error)]
pub enum VoxelError {
    /// A size parameter was zero, negative, or too large to mesh or count.
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        field: &'static str,
        /// The value that was rejected.
        value: i64,
        /// Human readable explanation.
        reason: &'static str,
    },

    /// The voxel grid could not be allocated. Treat as fatal.
    #[error("failed to allocate voxel grid of {voxels} voxels")]
    GridAllocation {
        /// Number of voxels requested.
        voxels: usize,
    },

    /// The configuration file was not valid JSON for `WorldConfig`.
    #[error("failed to parse world configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read world configuration: {0}")]
    ConfigIo(#[from] std::io::Error),
}

impl VoxelError {
    pub(crate) fn invalid(field: &'static str, value: i64, reason: &'static str) -> Self {
        VoxelError::InvalidConfiguration {
            field,
            value,
            reason,
        }
    }
}
