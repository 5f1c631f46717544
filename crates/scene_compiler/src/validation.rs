//! Scene validation
//!
//! Runs once between parsing and compilation. Checks are ordered and fail fast: the first
//! violated rule is returned and nothing after it is inspected.
//!
//! 1. materials and objects are non-empty
//! 2. material names are non-empty and unique
//! 3. every object names a declared material
//! 4. per-type geometric sanity
//! 5. schema and capacity limits

use std::collections::HashSet;

use crate::config::CompilerConfig;
use crate::description::{ObjectDescription, ObjectLayout, ObjectType, SceneDescription};
use crate::error::ValidationError;
use crate::foundation::math::Vec3Ext;

/// Referential-integrity and geometry checker
#[derive(Debug, Clone)]
pub struct SceneValidator {
    plane_normal_epsilon: f32,
    max_objects: usize,
    max_materials: usize,
    max_lights: usize,
}

impl Default for SceneValidator {
    fn default() -> Self {
        Self::new(&CompilerConfig::default())
    }
}

impl SceneValidator {
    /// Validator using the thresholds and limits from `config`
    pub const fn new(config: &CompilerConfig) -> Self {
        Self {
            plane_normal_epsilon: config.plane_normal_epsilon,
            max_objects: config.max_objects,
            max_materials: config.max_materials,
            max_lights: config.max_lights,
        }
    }

    /// Check `scene`, returning the first violation found
    pub fn validate(&self, scene: &SceneDescription) -> Result<(), ValidationError> {
        if scene.materials.is_empty() {
            return Err(ValidationError::NoMaterials);
        }
        if scene.objects.is_empty() {
            return Err(ValidationError::NoObjects);
        }

        let mut names = HashSet::with_capacity(scene.materials.len());
        for (index, material) in scene.materials.iter().enumerate() {
            if material.name.is_empty() {
                return Err(ValidationError::EmptyMaterialName { index });
            }
            if !names.insert(material.name.as_str()) {
                return Err(ValidationError::DuplicateMaterialName {
                    name: material.name.clone(),
                });
            }
        }

        for (index, object) in scene.objects.iter().enumerate() {
            if object.material.is_empty() {
                return Err(ValidationError::MissingMaterialReference { object: index });
            }
            if !names.contains(object.material.as_str()) {
                return Err(ValidationError::UnknownMaterial {
                    object: index,
                    name: object.material.clone(),
                });
            }
        }

        for (index, object) in scene.objects.iter().enumerate() {
            self.check_geometry(index, object)?;
        }

        if scene.info.schema.object_layout() == ObjectLayout::Legacy {
            for (index, object) in scene.objects.iter().enumerate() {
                if !matches!(object.object_type, ObjectType::Sphere | ObjectType::Plane) {
                    return Err(ValidationError::UnsupportedLegacyType {
                        object: index,
                        object_type: object.object_type.as_str(),
                    });
                }
            }
        }

        check_capacity("materials", scene.materials.len(), self.max_materials)?;
        check_capacity("objects", scene.objects.len(), self.max_objects)?;
        let lights = scene
            .objects
            .iter()
            .filter(|object| object.is_light && object.object_type != ObjectType::Plane)
            .count();
        check_capacity("lights", lights, self.max_lights)?;

        Ok(())
    }

    fn check_geometry(&self, index: usize, object: &ObjectDescription) -> Result<(), ValidationError> {
        let geometry = &object.geometry;
        let non_finite = |field| ValidationError::NonFiniteGeometry { object: index, field };

        match object.object_type {
            ObjectType::Sphere => {
                if !is_positive(geometry.radius) {
                    return Err(ValidationError::InvalidRadius { object: index, radius: geometry.radius });
                }
            }
            ObjectType::Plane => {
                if !geometry.normal.all_finite() {
                    return Err(non_finite("normal"));
                }
                if !geometry.distance.is_finite() {
                    return Err(non_finite("distance"));
                }
                let length = geometry.normal.norm();
                if length < self.plane_normal_epsilon {
                    return Err(ValidationError::DegenerateNormal { object: index, length });
                }
                // Planes ignore center, rotation and scale.
                return Ok(());
            }
            ObjectType::Box => {
                let size = geometry.size;
                if !size.all_finite() {
                    return Err(non_finite("size"));
                }
                if size.iter().any(|extent| *extent <= 0.0) {
                    return Err(ValidationError::InvalidSize {
                        object: index,
                        size: [size.x, size.y, size.z],
                    });
                }
            }
            radial => {
                if !is_positive(geometry.radius) {
                    return Err(ValidationError::InvalidRadius { object: index, radius: geometry.radius });
                }
                if radial.uses_height() && !is_positive(geometry.height) {
                    return Err(ValidationError::InvalidHeight { object: index, height: geometry.height });
                }
            }
        }

        if object.object_type.uses_radius() && !geometry.radius.is_finite() {
            return Err(non_finite("radius"));
        }
        if object.object_type.uses_height() && !geometry.height.is_finite() {
            return Err(non_finite("height"));
        }
        if !geometry.center.all_finite() {
            return Err(non_finite("center"));
        }
        if !geometry.rotation.all_finite() {
            return Err(non_finite("rotation"));
        }
        Ok(())
    }
}

/// False for zero, negatives and NaN
fn is_positive(value: f32) -> bool {
    value > 0.0
}

fn check_capacity(kind: &'static str, count: usize, limit: usize) -> Result<(), ValidationError> {
    if count > limit {
        return Err(ValidationError::CapacityExceeded { kind, count, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::{
        CameraDescription, MaterialDescription, MaterialTemplate, RenderSettings, SceneInfo,
        SchemaVersion, SkyDescription,
    };
    use crate::foundation::math::Vec3;

    fn scene(materials: &[&str], objects: Vec<ObjectDescription>) -> SceneDescription {
        SceneDescription {
            info: SceneInfo::default(),
            camera: CameraDescription::default(),
            sky: SkyDescription::default(),
            render: RenderSettings::default(),
            materials: materials
                .iter()
                .map(|name| MaterialDescription::new(*name, MaterialTemplate::Lambertian))
                .collect(),
            objects,
        }
    }

    fn sphere(material: &str, radius: f32) -> ObjectDescription {
        let mut object = ObjectDescription::new(ObjectType::Sphere, material);
        object.geometry.radius = radius;
        object
    }

    fn validate(scene: &SceneDescription) -> Result<(), ValidationError> {
        SceneValidator::default().validate(scene)
    }

    #[test]
    fn test_valid_scene_passes() {
        let scene = scene(&["red", "blue"], vec![sphere("red", 0.5), sphere("blue", 1.0)]);
        assert_eq!(validate(&scene), Ok(()));
    }

    #[test]
    fn test_empty_lists_rejected_in_order() {
        assert_eq!(validate(&scene(&[], vec![])), Err(ValidationError::NoMaterials));
        assert_eq!(validate(&scene(&["red"], vec![])), Err(ValidationError::NoObjects));
    }

    #[test]
    fn test_duplicate_material_name() {
        let scene = scene(&["gold", "silver", "gold"], vec![sphere("gold", 1.0)]);
        assert_eq!(
            validate(&scene),
            Err(ValidationError::DuplicateMaterialName { name: "gold".into() })
        );
    }

    #[test]
    fn test_empty_material_name() {
        let scene = scene(&["red", ""], vec![sphere("red", 1.0)]);
        assert_eq!(validate(&scene), Err(ValidationError::EmptyMaterialName { index: 1 }));
    }

    #[test]
    fn test_unknown_material_reference() {
        let scene = scene(&["red"], vec![sphere("red", 1.0), sphere("unknown", 1.0)]);
        assert_eq!(
            validate(&scene),
            Err(ValidationError::UnknownMaterial { object: 1, name: "unknown".into() })
        );
    }

    #[test]
    fn test_missing_material_reference() {
        let scene = scene(&["red"], vec![sphere("", 1.0)]);
        assert_eq!(validate(&scene), Err(ValidationError::MissingMaterialReference { object: 0 }));
    }

    #[test]
    fn test_negative_sphere_radius() {
        let scene = scene(&["red"], vec![sphere("red", 1.0), sphere("red", -1.0)]);
        assert_eq!(
            validate(&scene),
            Err(ValidationError::InvalidRadius { object: 1, radius: -1.0 })
        );
    }

    #[test]
    fn test_reference_errors_win_over_geometry_errors() {
        let scene = scene(&["red"], vec![sphere("red", -1.0), sphere("missing", 1.0)]);
        assert!(matches!(validate(&scene), Err(ValidationError::UnknownMaterial { object: 1, .. })));
    }

    #[test]
    fn test_degenerate_plane_normal() {
        let mut plane = ObjectDescription::new(ObjectType::Plane, "red");
        plane.geometry.normal = Vec3::new(0.0, 0.0005, 0.0);
        let scene = scene(&["red"], vec![plane]);
        assert!(matches!(
            validate(&scene),
            Err(ValidationError::DegenerateNormal { object: 0, .. })
        ));
    }

    #[test]
    fn test_plane_ignores_radius() {
        let mut plane = ObjectDescription::new(ObjectType::Plane, "red");
        plane.geometry.radius = -3.0;
        assert_eq!(validate(&scene(&["red"], vec![plane])), Ok(()));
    }

    #[test]
    fn test_box_size_must_be_positive() {
        let mut cube = ObjectDescription::new(ObjectType::Box, "red");
        cube.geometry.size = Vec3::new(1.0, 0.0, 1.0);
        assert_eq!(
            validate(&scene(&["red"], vec![cube])),
            Err(ValidationError::InvalidSize { object: 0, size: [1.0, 0.0, 1.0] })
        );
    }

    #[test]
    fn test_cylinder_height_must_be_positive() {
        let mut cylinder = ObjectDescription::new(ObjectType::Cylinder, "red");
        cylinder.geometry.height = 0.0;
        assert_eq!(
            validate(&scene(&["red"], vec![cylinder])),
            Err(ValidationError::InvalidHeight { object: 0, height: 0.0 })
        );
    }

    #[test]
    fn test_non_finite_center() {
        let mut ball = sphere("red", 1.0);
        ball.geometry.center = Vec3::new(f32::NAN, 0.0, 0.0);
        assert_eq!(
            validate(&scene(&["red"], vec![ball])),
            Err(ValidationError::NonFiniteGeometry { object: 0, field: "center" })
        );
    }

    #[test]
    fn test_nan_radius_is_invalid() {
        let scene = scene(&["red"], vec![sphere("red", f32::NAN)]);
        assert!(matches!(validate(&scene), Err(ValidationError::InvalidRadius { object: 0, .. })));
    }

    #[test]
    fn test_legacy_schema_rejects_other_types() {
        let mut scene = scene(
            &["red"],
            vec![sphere("red", 1.0), ObjectDescription::new(ObjectType::Cone, "red")],
        );
        scene.info.schema = SchemaVersion { major: 0, minor: 1 };
        assert_eq!(
            validate(&scene),
            Err(ValidationError::UnsupportedLegacyType { object: 1, object_type: "cone" })
        );
    }

    #[test]
    fn test_capacity_limits() {
        let config = CompilerConfig {
            max_lights: 1,
            ..Default::default()
        };
        let mut first = sphere("red", 1.0);
        first.is_light = true;
        let mut second = sphere("red", 1.0);
        second.is_light = true;
        let scene = scene(&["red"], vec![first, second]);

        assert_eq!(
            SceneValidator::new(&config).validate(&scene),
            Err(ValidationError::CapacityExceeded { kind: "lights", count: 2, limit: 1 })
        );
    }
}
