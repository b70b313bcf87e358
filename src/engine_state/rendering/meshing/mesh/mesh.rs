//! Mesh buffers produced by chunk meshing.
//!
//! This module holds the output artifact of a chunk: flat vertex, index and UV
//! buffers plus per-vertex normals, and the conversion to the interleaved GPU
//! vertex format.

use cgmath::{InnerSpace, Vector2, Vector3, Zero};

use super::face::Face;
use crate::engine_state::rendering::Vertex;

/// Triangle mesh built from the exposed faces of a chunk.
///
/// Invariants, checked by [`MeshData::is_consistent`]:
/// - `triangles.len() % 3 == 0`
/// - every index is `< vertices.len()`
/// - `uvs.len() == vertices.len()`
/// - `normals` is either empty (not yet recalculated) or as long as `vertices`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions in chunk-local coordinates
    pub vertices: Vec<Vector3<f32>>,
    /// Triangle list, three indices per triangle
    pub triangles: Vec<u32>,
    /// One texture coordinate per vertex
    pub uvs: Vec<Vector2<f32>>,
    /// One normal per vertex, filled by `recalculate_normals`
    pub normals: Vec<Vector3<f32>>,
}

impl MeshData {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one face: 4 vertices, 2 triangles and 4 UVs.
    ///
    /// Triangle indices are offset by the number of vertices already present.
    /// Existing normals become stale; call `recalculate_normals` afterwards.
    ///
    /// Indices are `u32`, so a mesh holds at most `u32::MAX` vertices. Chunks
    /// no larger than [`MAX_CHUNK_SIZE`](crate::config::MAX_CHUNK_SIZE) always fit.
    pub fn add_face(&mut self, face: &Face) {
        debug_assert!(
            self.vertices.len() + 4 <= u32::MAX as usize,
            "mesh exceeds u32 vertex indices"
        );
        let base_index = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&face.corners);
        self.triangles.extend_from_slice(&Face::triangles(base_index));
        self.uvs.extend_from_slice(&Face::uvs());
    }

    /// Recomputes per-vertex normals as the normalized sum of adjacent triangle normals.
    ///
    /// Triangle normals are not normalized before summing, so larger triangles
    /// weigh more. Vertices are not welded: a vertex only sees triangles that
    /// index it directly.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vector3::zero(); self.vertices.len()];

        for triangle in self.triangles.chunks_exact(3) {
            let (a, b, c) = (
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            );
            let face_normal =
                (self.vertices[b] - self.vertices[a]).cross(self.vertices[c] - self.vertices[a]);
            normals[a] += face_normal;
            normals[b] += face_normal;
            normals[c] += face_normal;
        }

        for normal in normals.iter_mut() {
            if normal.magnitude2() > 0.0 {
                *normal = normal.normalize();
            }
        }

        self.normals = normals;
    }

    /// Number of quads, assuming the mesh was built from faces only.
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Returns `true` if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks the buffer invariants.
    pub fn is_consistent(&self) -> bool {
        let vertex_count = self.vertices.len();
        self.triangles.len() % 3 == 0
            && self.triangles.iter().all(|&index| (index as usize) < vertex_count)
            && self.uvs.len() == vertex_count
            && (self.normals.is_empty() || self.normals.len() == vertex_count)
    }

    /// Interleaves positions, normals and UVs into GPU vertices.
    ///
    /// Vertices without a computed normal get a zero normal.
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .zip(self.uvs.iter())
            .enumerate()
            .map(|(i, (position, uv))| {
                let normal = self.normals.get(i).copied().unwrap_or_else(Vector3::zero);
                Vertex::new(*position, normal, *uv)
            })
            .collect()
    }
}
