//! # Voxel Side Module
//!
//! This module defines the six axis-aligned faces of a voxel and the neighbor
//! offsets used when deciding whether a face is exposed.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel.
///
/// The discriminants follow the order in which faces are tested while meshing,
/// so `VoxelSide::all()` and `side as usize` agree.
///
/// The order is: [UP, DOWN, LEFT, RIGHT, FORWARD, BACK]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum VoxelSide {
    /// The top face (facing positive Y)
    UP = 0,

    /// The bottom face (facing negative Y)
    DOWN = 1,

    /// The left face (facing negative X)
    LEFT = 2,

    /// The right face (facing positive X)
    RIGHT = 3,

    /// The front face (facing positive Z)
    FORWARD = 4,

    /// The back face (facing negative Z)
    BACK = 5,
}

impl VoxelSide {
    /// Returns all six faces in meshing order.
    ///
    /// The order is: [UP, DOWN, LEFT, RIGHT, FORWARD, BACK]
    pub fn all() -> [VoxelSide; 6] {
        [
            VoxelSide::UP,
            VoxelSide::DOWN,
            VoxelSide::LEFT,
            VoxelSide::RIGHT,
            VoxelSide::FORWARD,
            VoxelSide::BACK,
        ]
    }

    /// Grid offset of the neighbor that shares this face.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            VoxelSide::UP => Vector3::new(0, 1, 0),
            VoxelSide::DOWN => Vector3::new(0, -1, 0),
            VoxelSide::LEFT => Vector3::new(-1, 0, 0),
            VoxelSide::RIGHT => Vector3::new(1, 0, 0),
            VoxelSide::FORWARD => Vector3::new(0, 0, 1),
            VoxelSide::BACK => Vector3::new(0, 0, -1),
        }
    }

    /// Outward unit normal of this face.
    pub fn normal(self) -> Vector3<f32> {
        let offset = self.offset();
        Vector3::new(offset.x as f32, offset.y as f32, offset.z as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_follow_meshing_order() {
        for (index, side) in VoxelSide::all().into_iter().enumerate() {
            assert_eq!(side as usize, index);
        }
    }

    #[test]
    fn opposite_sides_cancel() {
        let pairs = [
            (VoxelSide::UP, VoxelSide::DOWN),
            (VoxelSide::LEFT, VoxelSide::RIGHT),
            (VoxelSide::FORWARD, VoxelSide::BACK),
        ];
        for (a, b) in pairs {
            assert_eq!(a.offset() + b.offset(), Vector3::new(0, 0, 0));
        }
    }

    #[test]
    fn normals_are_unit_axes() {
        use cgmath::InnerSpace;
        for side in VoxelSide::all() {
            assert_eq!(side.normal().magnitude2(), 1.0);
        }
    }
}
