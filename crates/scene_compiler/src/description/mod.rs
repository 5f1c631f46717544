//! In-memory scene description
//!
//! The tree produced by [`SceneParser`] and consumed read-only by the validator and the two
//! compilers. Structural sections are always fully populated; material overrides stay sparse
//! so the template baseline can show through.

mod fields;
mod parser;

pub use parser::SceneParser;

use std::fmt;

use serde::Deserialize;

use crate::foundation::math::Vec3;

/// Root of a parsed scene file
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    /// Scene metadata
    pub info: SceneInfo,
    /// Camera placement and lens
    pub camera: CameraDescription,
    /// Sky gradient
    pub sky: SkyDescription,
    /// Render settings handed through to the host
    pub render: RenderSettings,
    /// Materials in declaration order
    pub materials: Vec<MaterialDescription>,
    /// Objects in declaration order
    pub objects: Vec<ObjectDescription>,
}

/// Scene metadata
#[derive(Debug, Clone, PartialEq)]
pub struct SceneInfo {
    /// Display name
    pub name: String,
    /// Version string as authored
    pub version: String,
    /// Parsed form of `version`
    pub schema: SchemaVersion,
}

impl Default for SceneInfo {
    fn default() -> Self {
        Self {
            name: "Untitled Scene".to_string(),
            version: "1.0".to_string(),
            schema: SchemaVersion::CURRENT,
        }
    }
}

/// Scene file schema version (`major[.minor]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SchemaVersion {
    /// Major version; 0 selects the legacy object record
    pub major: u32,
    /// Minor version
    pub minor: u32,
}

impl SchemaVersion {
    /// Version written by current tooling
    pub const CURRENT: Self = Self { major: 1, minor: 0 };

    /// Parse `"1"`, `"1.0"`, `"0.3"` or `"1.2.7"`
    ///
    /// Only the major and minor components are kept; anything after them is ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim().split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(minor) => minor.parse().ok()?,
            None => 0,
        };
        Some(Self { major, minor })
    }

    /// Object record layout this version selects
    pub const fn object_layout(self) -> ObjectLayout {
        if self.major == 0 {
            ObjectLayout::Legacy
        } else {
            ObjectLayout::Generic
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Which binary object encoding a scene compiles to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectLayout {
    /// Two-vector sphere/plane record (schema 0.x)
    Legacy,
    /// Four-vector record with type-dependent scale (schema 1.x and later)
    Generic,
}

/// Camera configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraDescription {
    /// World-space position
    #[serde(deserialize_with = "fields::camera_position")]
    pub position: Vec3,
    /// Pitch, yaw, roll in degrees
    #[serde(deserialize_with = "fields::vec3_or_zero")]
    pub rotation: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Lens aperture; 0 disables depth of field
    pub aperture: f32,
    /// Distance to the focal plane
    pub focus_dist: f32,
}

impl Default for CameraDescription {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.1, 0.5, 0.0),
            rotation: Vec3::zeros(),
            fov: 60.0,
            aperture: 0.0,
            focus_dist: 10.0,
        }
    }
}

/// Sky gradient
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkyDescription {
    /// Zenith color
    #[serde(deserialize_with = "fields::sky_top")]
    pub color_top: Vec3,
    /// Horizon color
    #[serde(deserialize_with = "fields::sky_bottom")]
    pub color_bottom: Vec3,
}

impl Default for SkyDescription {
    fn default() -> Self {
        Self {
            color_top: Vec3::new(0.5, 0.7, 1.0),
            color_bottom: Vec3::repeat(0.98),
        }
    }
}

/// Bloom post-process parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BloomSettings {
    /// Whether bloom runs at all
    pub enabled: bool,
    /// Luminance above which pixels bloom
    pub threshold: f32,
    /// Soft knee width, 0..1
    pub knee: f32,
    /// Blend strength of the bloom layer
    pub intensity: f32,
    /// Blur passes
    #[serde(deserialize_with = "fields::whole_u32")]
    pub iterations: u32,
    /// Resolution factor of the bloom buffers, 0.1..1
    pub downscale: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: 1.0,
            knee: 0.5,
            intensity: 0.8,
            iterations: 5,
            downscale: 0.5,
        }
    }
}

/// Render settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderSettings {
    /// Output width in pixels
    #[serde(deserialize_with = "fields::whole_u32")]
    pub width: u32,
    /// Output height in pixels
    #[serde(deserialize_with = "fields::whole_u32")]
    pub height: u32,
    /// Samples accumulated per dispatch
    #[serde(deserialize_with = "fields::whole_u32")]
    pub samples_per_frame: u32,
    /// Accumulation stops after this many samples
    #[serde(deserialize_with = "fields::whole_u32")]
    pub max_samples: u32,
    /// Path depth limit
    #[serde(deserialize_with = "fields::whole_u32")]
    pub max_bounces: u32,
    /// Bloom parameters
    pub bloom: BloomSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            samples_per_frame: 8,
            max_samples: 5000,
            max_bounces: 8,
            bloom: BloomSettings::default(),
        }
    }
}

/// Named material presets a material starts from before overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialTemplate {
    /// Neutral grey, medium roughness; used when no template is given
    #[default]
    Default,
    /// Fully rough diffuse
    Lambertian,
    /// Mirror-smooth conductor
    Metal,
    /// Clear refractive glass
    Dielectric,
    /// White area light
    Emissive,
    /// Glossy dielectric
    Plastic,
    /// Rough fabric with strong sheen
    Velvet,
    /// Smooth fabric with moderate sheen
    Satin,
    /// Diffuse base with a glossy coat
    Clearcoat,
    /// Refractive glass with absorption tint
    #[serde(rename = "glass", alias = "colored-glass", alias = "colored_glass")]
    ColoredGlass,
    /// Multiplicative tint volume
    #[serde(alias = "color_filter")]
    ColorFilter,
    /// Light-absorbing void
    #[serde(alias = "dark_void")]
    DarkVoid,
}

impl MaterialTemplate {
    /// Canonical scene-file tag
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Lambertian => "lambertian",
            Self::Metal => "metal",
            Self::Dielectric => "dielectric",
            Self::Emissive => "emissive",
            Self::Plastic => "plastic",
            Self::Velvet => "velvet",
            Self::Satin => "satin",
            Self::Clearcoat => "clearcoat",
            Self::ColoredGlass => "glass",
            Self::ColorFilter => "color-filter",
            Self::DarkVoid => "dark-void",
        }
    }

    /// Every template, in tag order
    pub const ALL: [Self; 12] = [
        Self::Default,
        Self::Lambertian,
        Self::Metal,
        Self::Dielectric,
        Self::Emissive,
        Self::Plastic,
        Self::Velvet,
        Self::Satin,
        Self::Clearcoat,
        Self::ColoredGlass,
        Self::ColorFilter,
        Self::DarkVoid,
    ];
}

/// How the consumer combines a material's emission with incoming light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionMode {
    /// Standard additive lighting
    #[default]
    Physical = 0,
    /// Multiplicative tinting/filtering
    Absolute = 1,
}

/// Explicitly authored material fields; `None` means "keep the template value"
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaterialOverrides {
    /// Base color
    #[serde(deserialize_with = "fields::sparse_vec3")]
    pub albedo: Option<Vec3>,
    /// Emitted light color, or tint color in absolute mode
    #[serde(deserialize_with = "fields::sparse_vec3")]
    pub emission: Option<Vec3>,
    /// Emission intensity multiplier
    pub emission_strength: Option<f32>,
    /// Additive or multiplicative emission
    pub emission_mode: Option<EmissionMode>,
    /// 0 = mirror, 1 = matte
    pub roughness: Option<f32>,
    /// 0 = dielectric, 1 = metal
    pub metallic: Option<f32>,
    /// 0 = opaque, 1 = transparent
    pub transmission: Option<f32>,
    /// Index of refraction
    pub ior: Option<f32>,
    /// F0 color override
    #[serde(deserialize_with = "fields::sparse_vec3")]
    pub specular_tint: Option<Vec3>,
    /// Specular strength multiplier
    pub specular: Option<f32>,
    /// Secondary glossy layer strength
    pub clearcoat: Option<f32>,
    /// Coating roughness
    pub clearcoat_roughness: Option<f32>,
    /// Translucency amount
    pub subsurface: Option<f32>,
    /// Beer's law absorption coefficients
    #[serde(deserialize_with = "fields::sparse_vec3")]
    pub absorption: Option<Vec3>,
    /// Fabric-like edge glow
    pub sheen: Option<f32>,
    /// Mean free path of subsurface scattering
    pub subsurface_radius: Option<f32>,
    /// Henyey-Greenstein phase asymmetry, -1..1
    pub scattering_anisotropy: Option<f32>,
}

/// One entry of the `materials` list
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDescription {
    /// Unique, non-empty name objects refer to
    pub name: String,
    /// Preset the overrides are applied on top of
    pub template: MaterialTemplate,
    /// Sparse authored fields
    pub overrides: MaterialOverrides,
}

impl MaterialDescription {
    /// Material with a template and no overrides
    pub fn new(name: impl Into<String>, template: MaterialTemplate) -> Self {
        Self {
            name: name.into(),
            template,
            overrides: MaterialOverrides::default(),
        }
    }
}

/// Closed set of primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Sphere (center, radius); also used when an object omits `type`
    #[default]
    Sphere,
    /// Infinite plane (normal, distance)
    Plane,
    /// Axis-aligned box before rotation (center, size); tags `box` and `cube`
    #[serde(alias = "cube")]
    Box,
    /// Capped cylinder (radius, height)
    Cylinder,
    /// Cone (radius, height)
    Cone,
    /// Square pyramid (radius)
    Pyramid,
    /// Regular tetrahedron (radius)
    Tetrahedron,
    /// Hexagonal prism (radius, height)
    Prism,
    /// Regular dodecahedron (radius)
    Dodecahedron,
    /// Regular icosahedron (radius)
    Icosahedron,
}

impl ObjectType {
    /// Canonical scene-file tag
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Plane => "plane",
            Self::Box => "box",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Pyramid => "pyramid",
            Self::Tetrahedron => "tetrahedron",
            Self::Prism => "prism",
            Self::Dodecahedron => "dodecahedron",
            Self::Icosahedron => "icosahedron",
        }
    }

    /// Dense type id written into compiled records; the consumer switches on it
    pub const fn type_id(self) -> u32 {
        match self {
            Self::Sphere => 0,
            Self::Plane => 1,
            Self::Box => 2,
            Self::Cylinder => 3,
            Self::Cone => 4,
            Self::Pyramid => 5,
            Self::Tetrahedron => 6,
            Self::Prism => 7,
            Self::Dodecahedron => 8,
            Self::Icosahedron => 9,
        }
    }

    /// Types whose size comes from `radius`
    pub const fn uses_radius(self) -> bool {
        !matches!(self, Self::Plane | Self::Box)
    }

    /// Types whose size also comes from `height`
    pub const fn uses_height(self) -> bool {
        matches!(self, Self::Cylinder | Self::Cone | Self::Prism)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry payload; which fields matter depends on [`ObjectType`]
///
/// Read from the same JSON object as the owning [`ObjectDescription`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Center, used by every type except plane
    #[serde(deserialize_with = "fields::vec3_or_zero")]
    pub center: Vec3,
    /// Sphere and radial primitive radius
    pub radius: f32,
    /// Plane normal
    #[serde(deserialize_with = "fields::vec3_or_up")]
    pub normal: Vec3,
    /// Plane offset along the normal
    pub distance: f32,
    /// Euler angles in degrees
    #[serde(deserialize_with = "fields::vec3_or_zero")]
    pub rotation: Vec3,
    /// Box extents (full size, not half)
    #[serde(deserialize_with = "fields::vec3_or_one")]
    pub size: Vec3,
    /// Height of cylinder-like primitives
    pub height: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            center: Vec3::zeros(),
            radius: 1.0,
            normal: Vec3::new(0.0, 1.0, 0.0),
            distance: 0.0,
            rotation: Vec3::zeros(),
            size: Vec3::repeat(1.0),
            height: 1.0,
        }
    }
}

/// One entry of the `objects` list
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectDescription {
    /// Primitive type
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    /// Name of the material to use
    pub material: String,
    /// Sampled for direct illumination
    pub is_light: bool,
    /// Type-dependent geometry, deserialized separately from the same entry
    #[serde(skip)]
    pub geometry: Geometry,
}

impl ObjectDescription {
    /// Object with default geometry
    pub fn new(object_type: ObjectType, material: impl Into<String>) -> Self {
        Self {
            object_type,
            material: material.into(),
            is_light: false,
            geometry: Geometry::default(),
        }
    }
}
