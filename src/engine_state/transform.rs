//! Spatial placement of chunks and worlds.
//!
//! The scene graph lives outside this crate. A `Transform` carries only what the
//! voxel core reads or writes: a name, a world-space position and the name of
//! the parent node.

use cgmath::{Point3, Vector3};

/// World-space placement of a chunk or world node.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    /// Node name, e.g. `Chunk_1_0_2`.
    pub name: String,
    /// World-space position of the node origin.
    pub position: Point3<f32>,
    /// Name of the parent node, if attached.
    pub parent: Option<String>,
}

impl Transform {
    /// Creates an unparented transform at `position`.
    pub fn new(name: impl Into<String>, position: Point3<f32>) -> Self {
        Transform {
            name: name.into(),
            position,
            parent: None,
        }
    }

    /// Creates an unparented transform at the world origin.
    pub fn at_origin(name: impl Into<String>) -> Self {
        Self::new(name, Point3::new(0.0, 0.0, 0.0))
    }

    /// Attaches this node under `parent`, keeping its world-space position.
    pub fn with_parent(mut self, parent: &Transform) -> Self {
        self.parent = Some(parent.name.clone());
        self
    }

    /// World-space position of a point given relative to this node.
    pub fn local_to_world(&self, local: Vector3<f32>) -> Point3<f32> {
        self.position + local
    }
}
