//! Scene assembler
//!
//! Compiles all materials first (building the name → index table), then every object in
//! source order against that table.

use crate::description::{ObjectLayout, SceneDescription};
use crate::materials::{CompiledMaterial, MaterialFactory};
use crate::objects::{ObjectBuffer, ObjectCompiler};

use super::scene_index::SceneIndex;

/// Output of one compile pass, ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledScene {
    /// Object records in source order
    pub objects: ObjectBuffer,
    /// Material records in source order
    pub materials: Vec<CompiledMaterial>,
    /// Positions of light objects in `objects`, first-encountered order
    pub light_indices: Vec<u32>,
    /// Material name → index table used for this pass
    pub material_index: SceneIndex,
}

impl CompiledScene {
    /// Object buffer contents
    pub fn objects_bytes(&self) -> &[u8] {
        self.objects.as_bytes()
    }

    /// Material buffer contents
    pub fn materials_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.materials.as_slice())
    }

    /// Light index buffer contents
    pub fn lights_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.light_indices.as_slice())
    }

    /// Encoding of the object records
    pub const fn object_layout(&self) -> ObjectLayout {
        self.objects.layout()
    }
}

/// Builds a [`CompiledScene`] from a validated description
pub struct SceneBuilder;

impl SceneBuilder {
    /// Compile `description`
    ///
    /// The description must already have passed validation. An object whose material cannot
    /// be resolved anyway falls back to material 0 with a warning.
    pub fn build(description: &SceneDescription) -> CompiledScene {
        log::info!("Building scene: {}", description.info.name);
        let (materials, material_index) = Self::build_materials(description);

        let layout = description.info.schema.object_layout();
        let mut compiler = ObjectCompiler::new(layout);
        for object in &description.objects {
            let material = Self::resolve_material_index(&object.material, &material_index);
            compiler.push(object, material);
        }
        let (objects, light_indices) = compiler.finish();

        log::info!(
            "Scene built: {} objects ({:?} layout), {} materials, {} lights",
            objects.len(),
            layout,
            materials.len(),
            light_indices.len()
        );

        CompiledScene {
            objects,
            materials,
            light_indices,
            material_index,
        }
    }

    fn build_materials(description: &SceneDescription) -> (Vec<CompiledMaterial>, SceneIndex) {
        let mut materials = Vec::with_capacity(description.materials.len());
        let mut index = SceneIndex::new();

        for material in &description.materials {
            let position = materials.len() as u32;
            materials.push(MaterialFactory::build_material(material));
            index.insert(&material.name, position);
            log::debug!(
                "  Material '{}' ({}) -> index {}",
                material.name,
                material.template.as_str(),
                position
            );
        }

        (materials, index)
    }

    fn resolve_material_index(name: &str, index: &SceneIndex) -> u32 {
        index.get(name).unwrap_or_else(|| {
            log::warn!("Material '{name}' not found, using material 0");
            0
        })
    }
}
