//! Vertex data structures for handing chunk meshes to a renderer.
//!
//! This module defines the interleaved vertex format published alongside the
//! separate position/UV/index buffers, ready for `bytemuck::cast_slice` upload.

use cgmath::{Vector2, Vector3};

/// A vertex in the chunk mesh.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Normal: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 32 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in chunk-local space
    pub position: [f32; 3],
    /// Recalculated vertex normal
    pub normal: [f32; 3],
    /// UV texture coordinates
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Size of one vertex in bytes, the stride of an interleaved buffer.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Creates a new vertex with the given attributes.
    pub fn new(position: Vector3<f32>, normal: Vector3<f32>, uv: Vector2<f32>) -> Self {
        Vertex {
            position: position.into(),
            normal: normal.into(),
            tex_coords: uv.into(),
        }
    }
}
