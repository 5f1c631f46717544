//! Scene loading and validation errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while turning a scene file into compiled records
#[derive(Error, Debug)]
pub enum SceneError {
    /// The scene file could not be opened or read
    #[error("Could not read scene file {path:?}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The scene file exists but contains nothing
    #[error("Scene file is empty: {path:?}")]
    EmptyFile {
        /// Path of the empty file
        path: PathBuf,
    },

    /// The scene text is malformed
    #[error("Syntax error at {location}: {message}")]
    Syntax {
        /// JSON path or line/column of the offending input
        location: String,
        /// What was wrong
        message: String,
    },

    /// The description parsed but breaks a referential or geometric rule
    #[error("Scene validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl SceneError {
    pub(crate) fn syntax(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Syntax {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(error: serde_json::Error) -> Self {
        Self::Syntax {
            location: format!("line {}, column {}", error.line(), error.column()),
            message: error.to_string(),
        }
    }
}

/// Rule violations found by the validator; the first one found is reported
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// No materials declared
    #[error("Scene has no materials defined")]
    NoMaterials,

    /// No objects declared
    #[error("Scene has no objects defined")]
    NoObjects,

    /// A material has an empty name
    #[error("Material {index} has an empty name")]
    EmptyMaterialName {
        /// Position in the materials list
        index: usize,
    },

    /// Two materials share a name
    #[error("Duplicate material name: {name}")]
    DuplicateMaterialName {
        /// The repeated name
        name: String,
    },

    /// An object does not name a material
    #[error("Object {object} has no material assigned")]
    MissingMaterialReference {
        /// Position in the objects list
        object: usize,
    },

    /// An object names a material that was never declared
    #[error("Object {object} references unknown material: {name}")]
    UnknownMaterial {
        /// Position in the objects list
        object: usize,
        /// The unresolved name
        name: String,
    },

    /// A radius that must be positive is not
    #[error("Object {object} has invalid radius {radius} (must be > 0)")]
    InvalidRadius {
        /// Position in the objects list
        object: usize,
        /// The offending value
        radius: f32,
    },

    /// A plane normal is too short to define an orientation
    #[error("Object {object} has degenerate plane normal (length {length})")]
    DegenerateNormal {
        /// Position in the objects list
        object: usize,
        /// Length of the normal as authored
        length: f32,
    },

    /// A height that must be positive is not
    #[error("Object {object} has invalid height {height} (must be > 0)")]
    InvalidHeight {
        /// Position in the objects list
        object: usize,
        /// The offending value
        height: f32,
    },

    /// A box extent that must be positive is not
    #[error("Object {object} has invalid size [{}, {}, {}] (all components must be > 0)", .size[0], .size[1], .size[2])]
    InvalidSize {
        /// Position in the objects list
        object: usize,
        /// The offending extents
        size: [f32; 3],
    },

    /// NaN or infinity in a geometry field
    #[error("Object {object} has a non-finite value in '{field}'")]
    NonFiniteGeometry {
        /// Position in the objects list
        object: usize,
        /// Name of the field
        field: &'static str,
    },

    /// A version 0 scene uses a type the two-vector record cannot encode
    #[error("Object {object} of type '{object_type}' is not supported by the legacy sphere/plane record")]
    UnsupportedLegacyType {
        /// Position in the objects list
        object: usize,
        /// Type tag of the object
        object_type: &'static str,
    },

    /// More entries than the downstream buffer holds
    #[error("Scene has {count} {kind} but at most {limit} are supported")]
    CapacityExceeded {
        /// Which list overflowed ("materials", "objects", "lights")
        kind: &'static str,
        /// How many were declared
        count: usize,
        /// Configured capacity
        limit: usize,
    },
}

/// Result alias for scene operations
pub type SceneResult<T> = Result<T, SceneError>;
