//! Material compilation from scene descriptions
//!
//! `compiled = overlay(template_baseline, authored_overrides)`. Every override is applied
//! independently, so new optional fields only touch [`MaterialFactory::overlay`].

use crate::description::{MaterialDescription, MaterialOverrides, MaterialTemplate};
use crate::foundation::math::Vec3;

use super::material_builder::MaterialBuilder;
use super::material_record::{vec3_array, CompiledMaterial};

/// Turns material descriptions into compiled records
pub struct MaterialFactory;

impl MaterialFactory {
    /// Fully-populated baseline for a template
    pub fn from_template(template: MaterialTemplate) -> CompiledMaterial {
        let grey = Vec3::repeat(0.5);
        match template {
            MaterialTemplate::Default => MaterialBuilder::default_material(),
            MaterialTemplate::Lambertian => MaterialBuilder::lambertian(grey),
            MaterialTemplate::Metal => MaterialBuilder::metal(grey, 0.0),
            MaterialTemplate::Dielectric => MaterialBuilder::dielectric(1.5),
            MaterialTemplate::Emissive => MaterialBuilder::emissive(Vec3::repeat(1.0), 1.0),
            MaterialTemplate::Plastic => MaterialBuilder::plastic(grey, 0.5),
            MaterialTemplate::Velvet => MaterialBuilder::velvet(grey, 1.0),
            MaterialTemplate::Satin => MaterialBuilder::satin(grey),
            MaterialTemplate::Clearcoat => MaterialBuilder::clearcoat_material(grey, 0.5),
            MaterialTemplate::ColoredGlass => MaterialBuilder::colored_glass(Vec3::repeat(1.0), 1.5, 2.0),
            MaterialTemplate::ColorFilter => MaterialBuilder::color_filter(Vec3::repeat(1.0), 0.5),
            MaterialTemplate::DarkVoid => MaterialBuilder::dark_void(0.9),
        }
    }

    /// Apply the authored fields of `patch` on top of `baseline`
    pub fn overlay(baseline: CompiledMaterial, patch: &MaterialOverrides) -> CompiledMaterial {
        fn set<T: Copy>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        let mut material = baseline;
        set(&mut material.albedo, patch.albedo.map(vec3_array));
        set(&mut material.emission, patch.emission.map(vec3_array));
        set(&mut material.emission_strength, patch.emission_strength);
        set(&mut material.emission_mode, patch.emission_mode.map(|mode| mode as i32));
        set(&mut material.roughness, patch.roughness);
        set(&mut material.metallic, patch.metallic);
        set(&mut material.transmission, patch.transmission);
        set(&mut material.ior, patch.ior);
        set(&mut material.specular_tint, patch.specular_tint.map(vec3_array));
        set(&mut material.specular, patch.specular);
        set(&mut material.clearcoat, patch.clearcoat);
        set(&mut material.clearcoat_roughness, patch.clearcoat_roughness);
        set(&mut material.subsurface, patch.subsurface);
        set(&mut material.absorption, patch.absorption.map(vec3_array));
        set(&mut material.sheen, patch.sheen);
        set(&mut material.subsurface_radius, patch.subsurface_radius);
        set(&mut material.scattering_anisotropy, patch.scattering_anisotropy);
        material
    }

    /// Compile one material description
    pub fn build_material(description: &MaterialDescription) -> CompiledMaterial {
        Self::overlay(Self::from_template(description.template), &description.overrides)
    }

    /// List all template tags
    pub fn list_templates() -> Vec<&'static str> {
        MaterialTemplate::ALL.iter().map(|template| template.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::EmissionMode;
    use bytemuck::Zeroable;

    #[test]
    fn test_metal_template_without_overrides() {
        let material = MaterialFactory::build_material(&MaterialDescription::new("m", MaterialTemplate::Metal));
        assert_eq!(material.roughness, 0.0);
        assert_eq!(material.metallic, 1.0);
    }

    #[test]
    fn test_lambertian_template_is_rough() {
        let material = MaterialFactory::from_template(MaterialTemplate::Lambertian);
        assert_eq!(material.roughness, 1.0);
        assert_eq!(material.albedo, [0.5; 3]);
    }

    #[test]
    fn test_single_override_changes_only_that_field() {
        let baseline = MaterialFactory::from_template(MaterialTemplate::Plastic);
        let mut description = MaterialDescription::new("p", MaterialTemplate::Plastic);
        description.overrides.roughness = Some(0.9);

        let compiled = MaterialFactory::build_material(&description);
        assert_eq!(compiled.roughness, 0.9);

        let mut expected = baseline;
        expected.roughness = 0.9;
        assert_eq!(compiled, expected);
    }

    #[test]
    fn test_every_override_is_applied() {
        let patch = MaterialOverrides {
            albedo: Some(Vec3::new(0.1, 0.2, 0.3)),
            emission: Some(Vec3::new(1.0, 0.5, 0.0)),
            emission_strength: Some(4.0),
            emission_mode: Some(EmissionMode::Absolute),
            roughness: Some(0.11),
            metallic: Some(0.22),
            transmission: Some(0.33),
            ior: Some(1.33),
            specular_tint: Some(Vec3::new(0.9, 0.8, 0.7)),
            specular: Some(0.44),
            clearcoat: Some(0.55),
            clearcoat_roughness: Some(0.66),
            subsurface: Some(0.77),
            absorption: Some(Vec3::new(0.01, 0.02, 0.03)),
            sheen: Some(0.88),
            subsurface_radius: Some(2.5),
            scattering_anisotropy: Some(-0.4),
        };

        let material = MaterialFactory::overlay(CompiledMaterial::zeroed(), &patch);
        assert_eq!(material.albedo, [0.1, 0.2, 0.3]);
        assert_eq!(material.emission, [1.0, 0.5, 0.0]);
        assert_eq!(material.emission_strength, 4.0);
        assert_eq!(material.emission_mode(), EmissionMode::Absolute);
        assert_eq!(material.roughness, 0.11);
        assert_eq!(material.metallic, 0.22);
        assert_eq!(material.transmission, 0.33);
        assert_eq!(material.ior, 1.33);
        assert_eq!(material.specular_tint, [0.9, 0.8, 0.7]);
        assert_eq!(material.specular, 0.44);
        assert_eq!(material.clearcoat, 0.55);
        assert_eq!(material.clearcoat_roughness, 0.66);
        assert_eq!(material.subsurface, 0.77);
        assert_eq!(material.absorption, [0.01, 0.02, 0.03]);
        assert_eq!(material.sheen, 0.88);
        assert_eq!(material.subsurface_radius, 2.5);
        assert_eq!(material.scattering_anisotropy, -0.4);
        assert_eq!(material._pad0, 0.0);
    }

    #[test]
    fn test_empty_patch_keeps_baseline() {
        for template in MaterialTemplate::ALL {
            let baseline = MaterialFactory::from_template(template);
            assert_eq!(MaterialFactory::overlay(baseline, &MaterialOverrides::default()), baseline);
        }
    }

    #[test]
    fn test_list_templates() {
        let templates = MaterialFactory::list_templates();
        assert_eq!(templates.len(), 12);
        assert!(templates.contains(&"metal"));
        assert!(templates.contains(&"glass"));
    }
}
