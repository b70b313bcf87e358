//! The boundary between chunk meshing and whatever draws the result.
//!
//! A chunk hands every regenerated mesh to a [`MeshSink`]. Engines plug in
//! their own sink; [`RenderSlot`] is the default, which keeps the latest mesh
//! together with a material and creates both lazily on first publish.

use log::debug;

use super::meshing::MeshData;

/// Receives every mesh a chunk produces.
///
/// Publishing is assumed never to fail.
pub trait MeshSink {
    /// Replaces whatever was previously published with `mesh`.
    fn publish_mesh(&mut self, mesh: &MeshData);
}

/// Surface appearance attached to a render object.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Name of the shader the backend should bind.
    pub shader: String,
    /// Linear RGBA base color.
    pub base_color: [f32; 4],
}

impl Material {
    /// Name of the default lit shader.
    pub const STANDARD_SHADER: &'static str = "Standard";

    /// The default opaque white material.
    pub fn standard() -> Self {
        Material {
            shader: Self::STANDARD_SHADER.to_string(),
            base_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// A mesh paired with the material it is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderObject {
    /// The most recently published mesh.
    pub mesh: MeshData,
    /// Material used for drawing.
    pub material: Material,
}

/// Default [`MeshSink`] that owns a single render object.
///
/// The object does not exist until the first publish. Later publishes swap the
/// mesh and keep the material.
#[derive(Debug, Default)]
pub struct RenderSlot {
    render_object: Option<RenderObject>,
    publish_count: usize,
}

impl RenderSlot {
    /// Creates an empty slot with no render object.
    pub fn new() -> Self {
        Self::default()
    }

    /// The render object, if anything has been published yet.
    pub fn render_object(&self) -> Option<&RenderObject> {
        self.render_object.as_ref()
    }

    /// How many meshes have been published into this slot.
    pub fn publish_count(&self) -> usize {
        self.publish_count
    }
}

impl MeshSink for RenderSlot {
    fn publish_mesh(&mut self, mesh: &MeshData) {
        self.publish_count += 1;
        match self.render_object.as_mut() {
            Some(render_object) => render_object.mesh.clone_from(mesh),
            None => {
                debug!("Creating render object with standard material");
                self.render_object = Some(RenderObject {
                    mesh: mesh.clone(),
                    material: Material::standard(),
                });
            }
        }
    }
}
