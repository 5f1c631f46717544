//! Object compiler
//!
//! Packs object descriptions into [`ObjectBuffer`] records and records the array position of
//! every light-flagged object in the order objects are pushed.

use crate::description::{Geometry, ObjectDescription, ObjectLayout, ObjectType};
use crate::foundation::math::{Vec3, Vec3Ext};

use super::object_record::{CompiledObject, LegacyObjectRecord, ObjectBuffer};

/// Accumulates compiled objects and light indices for one compile pass
#[derive(Debug)]
pub struct ObjectCompiler {
    objects: ObjectBuffer,
    light_indices: Vec<u32>,
}

impl ObjectCompiler {
    /// Compiler writing records in `layout`
    pub const fn new(layout: ObjectLayout) -> Self {
        Self {
            objects: ObjectBuffer::new(layout),
            light_indices: Vec::new(),
        }
    }

    /// Pack `description` with its resolved material index and append it
    ///
    /// Returns the record's position in the object array.
    pub fn push(&mut self, description: &ObjectDescription, material_index: u32) -> usize {
        let index = self.objects.len();
        match &mut self.objects {
            ObjectBuffer::Generic(records) => records.push(Self::pack(description, material_index)),
            ObjectBuffer::Legacy(records) => records.push(Self::pack_legacy(description, material_index)),
        }

        if description.is_light {
            if description.object_type == ObjectType::Plane {
                log::warn!("Object {index}: planes cannot be sampled as lights, ignoring isLight");
            } else {
                self.light_indices.push(index as u32);
            }
        }

        index
    }

    /// Number of objects pushed so far
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True before the first push
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Hand over the object array and light index list
    pub fn finish(self) -> (ObjectBuffer, Vec<u32>) {
        (self.objects, self.light_indices)
    }

    /// Pack one object into the generic four-vector record
    pub fn pack(description: &ObjectDescription, material_index: u32) -> CompiledObject {
        let geometry = &description.geometry;
        let object_type = description.object_type;
        let type_id = object_type.type_id() as f32;
        let material = material_index as f32;

        if object_type == ObjectType::Plane {
            return CompiledObject {
                bounds: geometry.normal.extend_to(geometry.distance),
                rotation: [0.0, 0.0, 0.0, material],
                scale: [0.0, 0.0, 0.0, type_id],
                reserved: [0.0; 4],
            };
        }

        let scale = Self::scale_for(object_type, geometry);
        CompiledObject {
            bounds: geometry.center.extend_to(Self::bounding_radius(object_type, scale)),
            rotation: geometry.rotation.extend_to(material),
            scale: scale.extend_to(type_id),
            reserved: [0.0; 4],
        }
    }

    /// Pack one object into the two-vector legacy record
    ///
    /// Only spheres and planes are valid in legacy scenes; anything else is written as its
    /// bounding sphere.
    pub fn pack_legacy(description: &ObjectDescription, material_index: u32) -> LegacyObjectRecord {
        let geometry = &description.geometry;
        let object_type = description.object_type;

        let data0 = match object_type {
            ObjectType::Plane => geometry.normal.extend_to(geometry.distance),
            ObjectType::Sphere => geometry.center.extend_to(geometry.radius),
            other => {
                let radius = Self::bounding_radius(other, Self::scale_for(other, geometry));
                geometry.center.extend_to(radius)
            }
        };

        LegacyObjectRecord {
            data0,
            data1: [material_index as f32, object_type.type_id() as f32, 0.0, 0.0],
        }
    }

    /// Extents vector written to `scale.xyz`
    ///
    /// Radial primitives broadcast the radius, boxes store half of `size`, and
    /// cylinder-like primitives store `(radius, height, radius)`.
    pub fn scale_for(object_type: ObjectType, geometry: &Geometry) -> Vec3 {
        match object_type {
            ObjectType::Box => geometry.size * 0.5,
            ObjectType::Cylinder | ObjectType::Cone | ObjectType::Prism => {
                Vec3::new(geometry.radius, geometry.height, geometry.radius)
            }
            ObjectType::Plane => Vec3::zeros(),
            ObjectType::Sphere
            | ObjectType::Pyramid
            | ObjectType::Tetrahedron
            | ObjectType::Dodecahedron
            | ObjectType::Icosahedron => Vec3::repeat(geometry.radius),
        }
    }

    /// Conservative bounding sphere radius around the object center
    fn bounding_radius(object_type: ObjectType, scale: Vec3) -> f32 {
        match object_type {
            ObjectType::Sphere => scale.x,
            _ => scale.norm(),
        }
    }
}
