use cgmath::{Vector2, Vector3};

use crate::engine_state::voxels::voxel::voxel_side::VoxelSide;

/// Texture coordinates of every quad, in vertex order.
pub const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Triangle indices of a quad relative to its first vertex.
pub const FACE_TRIANGLES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Corner offsets from a voxel center for each side, wound counter-clockwise
/// when viewed from outside along the outward normal.
///
/// Indexed by `VoxelSide as usize`.
const FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    // UP
    [
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [-0.5, 0.5, 0.5],
        [0.5, 0.5, 0.5],
    ],
    // DOWN
    [
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, -0.5, 0.5],
        [-0.5, -0.5, 0.5],
    ],
    // LEFT
    [
        [-0.5, -0.5, -0.5],
        [-0.5, -0.5, 0.5],
        [-0.5, 0.5, 0.5],
        [-0.5, 0.5, -0.5],
    ],
    // RIGHT
    [
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [0.5, 0.5, 0.5],
        [0.5, -0.5, 0.5],
    ],
    // FORWARD
    [
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
    ],
    // BACK
    [
        [-0.5, -0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [0.5, 0.5, -0.5],
        [0.5, -0.5, -0.5],
    ],
];

/// Represents a single unit quad on one side of a voxel.
///
/// Faces are never merged with their neighbours: every exposed side of every
/// active voxel becomes its own `Face`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// The four corners in chunk-local coordinates, in winding order.
    pub corners: [Vector3<f32>; 4],
    /// Which side of the voxel this face covers.
    pub voxel_side: VoxelSide,
}

impl Face {
    /// Creates the face on `voxel_side` of the voxel centred at `position`.
    ///
    /// # Arguments
    /// * `position` - The voxel center in chunk-local coordinates
    /// * `voxel_side` - Which side of the voxel to cover
    pub fn new(position: Vector3<f32>, voxel_side: VoxelSide) -> Self {
        let offsets = FACE_CORNERS[voxel_side as usize];
        Face {
            corners: offsets.map(|[x, y, z]| position + Vector3::new(x, y, z)),
            voxel_side,
        }
    }

    /// UV coordinates of every face, matching the order of `corners`.
    pub fn uvs() -> [Vector2<f32>; 4] {
        FACE_UVS.map(|[u, v]| Vector2::new(u, v))
    }

    /// Triangle indices for this face, given the vertex count before it was added.
    pub fn triangles(base_index: u32) -> [u32; 6] {
        FACE_TRIANGLES.map(|index| base_index + index)
    }
}
