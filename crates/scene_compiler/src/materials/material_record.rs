//! GPU-side material record
//!
//! Uploaded as a tightly packed array to the material storage binding.
//! Layout must match the corresponding GLSL struct.

use bytemuck::{Pod, Zeroable};

use crate::description::EmissionMode;
use crate::foundation::math::Vec3;

/// Compiled material, 7 x 16 bytes
///
/// ```text
/// vec3 albedo;        float _pad0;
/// vec3 emission;      float emissionStrength;
/// float roughness, metallic, transmission, ior;
/// vec3 specularTint;  float specular;
/// float clearcoat, clearcoatRoughness, subsurface; int emissionMode;
/// vec3 absorption;    float sheen;
/// float subsurfaceRadius, scatteringAnisotropy, _pad1, _pad2;
/// ```
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CompiledMaterial {
    /// Base color
    pub albedo: [f32; 3],
    /// Padding to keep vec3 fields on 16-byte boundaries
    pub _pad0: f32,
    /// Emitted light color / tint color
    pub emission: [f32; 3],
    /// Intensity multiplier
    pub emission_strength: f32,
    /// 0 = mirror, 1 = matte
    pub roughness: f32,
    /// 0 = dielectric, 1 = metal
    pub metallic: f32,
    /// 0 = opaque, 1 = transparent
    pub transmission: f32,
    /// Index of refraction
    pub ior: f32,
    /// F0 color override
    pub specular_tint: [f32; 3],
    /// Specular strength multiplier
    pub specular: f32,
    /// Secondary glossy layer strength
    pub clearcoat: f32,
    /// Coating roughness
    pub clearcoat_roughness: f32,
    /// Translucency amount
    pub subsurface: f32,
    /// [`EmissionMode`] as its integer discriminant
    pub emission_mode: i32,
    /// Beer's law absorption coefficients
    pub absorption: [f32; 3],
    /// Fabric-like edge glow
    pub sheen: f32,
    /// Mean free path of subsurface scattering
    pub subsurface_radius: f32,
    /// Henyey-Greenstein phase asymmetry
    pub scattering_anisotropy: f32,
    /// Padding
    pub _pad1: f32,
    /// Padding
    pub _pad2: f32,
}

impl CompiledMaterial {
    /// Size of one record in the upload buffer
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Albedo as a vector
    pub fn albedo(&self) -> Vec3 {
        Vec3::from(self.albedo)
    }

    /// Emission mode decoded from the stored integer
    pub const fn emission_mode(&self) -> EmissionMode {
        if self.emission_mode == EmissionMode::Absolute as i32 {
            EmissionMode::Absolute
        } else {
            EmissionMode::Physical
        }
    }

    /// Raw bytes of this record
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Convert a description vector into a record triple
pub(crate) fn vec3_array(v: Vec3) -> [f32; 3] {
    [v.x, v.y, v.z]
}
