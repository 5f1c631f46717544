//! Material builder and template presets
//!
//! Provides a builder pattern API for assembling [`CompiledMaterial`] records, with one
//! constructor per scene-file template.

use crate::description::EmissionMode;
use crate::foundation::math::Vec3;

use super::material_record::{vec3_array, CompiledMaterial};

/// Builder for compiled material records
///
/// # Examples
/// ```
/// use scene_compiler::materials::MaterialBuilder;
/// use scene_compiler::foundation::math::Vec3;
///
/// // Brushed copper
/// let copper = MaterialBuilder::new()
///     .albedo(Vec3::new(0.95, 0.64, 0.54))
///     .metallic(1.0)
///     .roughness(0.35)
///     .build();
/// assert_eq!(copper.metallic, 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MaterialBuilder {
    material: CompiledMaterial,
}

impl Default for MaterialBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialBuilder {
    /// Start from the neutral default preset
    pub fn new() -> Self {
        Self {
            material: CompiledMaterial {
                albedo: [0.5; 3],
                _pad0: 0.0,
                emission: [0.0; 3],
                emission_strength: 0.0,
                roughness: 0.5,
                metallic: 0.0,
                transmission: 0.0,
                ior: 1.45,
                specular_tint: [1.0; 3],
                specular: 0.5,
                clearcoat: 0.0,
                clearcoat_roughness: 0.03,
                subsurface: 0.0,
                emission_mode: EmissionMode::Physical as i32,
                absorption: [0.0; 3],
                sheen: 0.0,
                subsurface_radius: 1.0,
                scattering_anisotropy: 0.0,
                _pad1: 0.0,
                _pad2: 0.0,
            },
        }
    }

    /// Continue editing an existing record
    pub const fn from_material(material: CompiledMaterial) -> Self {
        Self { material }
    }

    /// Set the base color
    #[must_use]
    pub fn albedo(mut self, color: Vec3) -> Self {
        self.material.albedo = vec3_array(color);
        self
    }

    /// Set the emission color
    #[must_use]
    pub fn emission(mut self, color: Vec3) -> Self {
        self.material.emission = vec3_array(color);
        self
    }

    /// Set the emission strength multiplier
    #[must_use]
    pub const fn emission_strength(mut self, strength: f32) -> Self {
        self.material.emission_strength = strength;
        self
    }

    /// Set how emission combines with incoming light
    #[must_use]
    pub const fn emission_mode(mut self, mode: EmissionMode) -> Self {
        self.material.emission_mode = mode as i32;
        self
    }

    /// Set roughness (0.0 = mirror smooth, 1.0 = completely rough)
    #[must_use]
    pub const fn roughness(mut self, roughness: f32) -> Self {
        self.material.roughness = roughness;
        self
    }

    /// Set metallic factor (0.0 = dielectric, 1.0 = metallic)
    #[must_use]
    pub const fn metallic(mut self, metallic: f32) -> Self {
        self.material.metallic = metallic;
        self
    }

    /// Set transmission (0.0 = opaque, 1.0 = fully transmissive)
    #[must_use]
    pub const fn transmission(mut self, transmission: f32) -> Self {
        self.material.transmission = transmission;
        self
    }

    /// Set the index of refraction
    #[must_use]
    pub const fn ior(mut self, ior: f32) -> Self {
        self.material.ior = ior;
        self
    }

    /// Set the specular tint
    #[must_use]
    pub fn specular_tint(mut self, tint: Vec3) -> Self {
        self.material.specular_tint = vec3_array(tint);
        self
    }

    /// Set the specular strength
    #[must_use]
    pub const fn specular(mut self, specular: f32) -> Self {
        self.material.specular = specular;
        self
    }

    /// Set the clear coat layer strength
    #[must_use]
    pub const fn clearcoat(mut self, amount: f32) -> Self {
        self.material.clearcoat = amount;
        self
    }

    /// Set the clear coat roughness
    #[must_use]
    pub const fn clearcoat_roughness(mut self, roughness: f32) -> Self {
        self.material.clearcoat_roughness = roughness;
        self
    }

    /// Set the subsurface amount
    #[must_use]
    pub const fn subsurface(mut self, amount: f32) -> Self {
        self.material.subsurface = amount;
        self
    }

    /// Set Beer's law absorption
    #[must_use]
    pub fn absorption(mut self, absorption: Vec3) -> Self {
        self.material.absorption = vec3_array(absorption);
        self
    }

    /// Set sheen
    #[must_use]
    pub const fn sheen(mut self, sheen: f32) -> Self {
        self.material.sheen = sheen;
        self
    }

    /// Set the subsurface mean free path
    #[must_use]
    pub const fn subsurface_radius(mut self, radius: f32) -> Self {
        self.material.subsurface_radius = radius;
        self
    }

    /// Set the phase function asymmetry
    #[must_use]
    pub const fn scattering_anisotropy(mut self, anisotropy: f32) -> Self {
        self.material.scattering_anisotropy = anisotropy;
        self
    }

    /// Build the final record
    pub const fn build(self) -> CompiledMaterial {
        self.material
    }

    // ===== TEMPLATE PRESETS =====

    /// Neutral grey, medium roughness
    pub fn default_material() -> CompiledMaterial {
        Self::new().build()
    }

    /// Fully rough diffuse surface
    pub fn lambertian(albedo: Vec3) -> CompiledMaterial {
        Self::new()
            .albedo(albedo)
            .roughness(1.0)
            .metallic(0.0)
            .transmission(0.0)
            .build()
    }

    /// Conductor; `roughness` 0 is a perfect mirror
    pub fn metal(albedo: Vec3, roughness: f32) -> CompiledMaterial {
        Self::new()
            .albedo(albedo)
            .roughness(roughness)
            .metallic(1.0)
            .transmission(0.0)
            .build()
    }

    /// Clear glass-like dielectric
    pub fn dielectric(ior: f32) -> CompiledMaterial {
        Self::new()
            .albedo(Vec3::repeat(1.0))
            .roughness(0.0)
            .metallic(0.0)
            .transmission(1.0)
            .ior(ior)
            .build()
    }

    /// Additive light source
    pub fn emissive(color: Vec3, strength: f32) -> CompiledMaterial {
        Self::new()
            .emission(color)
            .emission_strength(strength)
            .emission_mode(EmissionMode::Physical)
            .albedo(Vec3::zeros())
            .roughness(1.0)
            .build()
    }

    /// Glossy dielectric
    pub fn plastic(albedo: Vec3, roughness: f32) -> CompiledMaterial {
        Self::new()
            .albedo(albedo)
            .roughness(roughness)
            .metallic(0.0)
            .ior(1.45)
            .specular(0.5)
            .build()
    }

    /// Rough fabric with strong grazing sheen
    pub fn velvet(albedo: Vec3, sheen: f32) -> CompiledMaterial {
        Self::new()
            .albedo(albedo)
            .roughness(1.0)
            .metallic(0.0)
            .sheen(sheen)
            .specular(0.1)
            .build()
    }

    /// Smoother fabric with moderate sheen and a soft highlight
    pub fn satin(albedo: Vec3) -> CompiledMaterial {
        Self::new()
            .albedo(albedo)
            .roughness(0.35)
            .metallic(0.0)
            .sheen(0.5)
            .specular(0.6)
            .build()
    }

    /// Diffuse base under a glossy coat
    pub fn clearcoat_material(albedo: Vec3, amount: f32) -> CompiledMaterial {
        Self::new()
            .albedo(albedo)
            .roughness(0.6)
            .metallic(0.0)
            .clearcoat(amount)
            .clearcoat_roughness(0.03)
            .ior(1.5)
            .build()
    }

    /// Refractive glass that absorbs the complement of `tint` with depth
    ///
    /// `density` scales absorption; a white tint absorbs nothing.
    pub fn colored_glass(tint: Vec3, ior: f32, density: f32) -> CompiledMaterial {
        let absorption = (Vec3::repeat(1.0) - tint).map(|c| c.max(0.0)) * density;
        Self::new()
            .albedo(Vec3::repeat(1.0))
            .roughness(0.0)
            .metallic(0.0)
            .transmission(1.0)
            .ior(ior)
            .absorption(absorption)
            .build()
    }

    /// Multiplicative tint volume
    pub fn color_filter(tint: Vec3, strength: f32) -> CompiledMaterial {
        Self::new()
            .emission(tint)
            .emission_strength(strength)
            .emission_mode(EmissionMode::Absolute)
            .albedo(Vec3::zeros())
            .build()
    }

    /// Darkening volume that swallows light
    pub fn dark_void(strength: f32) -> CompiledMaterial {
        Self::new()
            .emission(Vec3::zeros())
            .emission_strength(strength)
            .emission_mode(EmissionMode::Absolute)
            .albedo(Vec3::zeros())
            .build()
    }
}
