//! # Voxel Module
//!
//! The single-cell record stored in every chunk grid, plus the face directions
//! used by the mesher.

use cgmath::Point3;

pub mod voxel_side;

/// A single cell of a chunk grid.
///
/// `position` is the world-space location of the cell and is informational only;
/// meshing works in chunk-local grid coordinates. After construction only
/// `active` changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Voxel {
    /// Whether the cell is solid.
    pub active: bool,
    /// World-space position of the cell.
    pub position: Point3<f32>,
}

impl Voxel {
    /// Creates a voxel at `position`. An unset `active` means solid.
    pub fn new(active: Option<bool>, position: Point3<f32>) -> Self {
        Voxel {
            active: active.unwrap_or(true),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_activity_defaults_to_solid() {
        let voxel = Voxel::new(None, Point3::new(1.0, 2.0, 3.0));
        assert!(voxel.active);
        assert_eq!(voxel.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn explicit_activity_is_kept() {
        assert!(!Voxel::new(Some(false), Point3::new(0.0, 0.0, 0.0)).active);
    }
}
