//! # Scene Compiler
//!
//! Turns declarative path-tracer scene files into fixed-layout binary records for a GPU
//! compute consumer.
//!
//! ## Pipeline
//!
//! - **Description Parser**: JSON scene text into a [`SceneDescription`] with structural
//!   defaults filled and material overrides left sparse
//! - **Validator**: referential integrity and geometric sanity, fail-fast
//! - **Material Compiler**: template baseline plus authored overrides
//! - **Object Compiler**: type dispatch into 64-byte (or legacy 32-byte) records, light tracking
//! - **Scene Assembler**: materials first, then objects against the name → index table
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_compiler::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let compiler = SceneCompiler::new(CompilerConfig::default());
//!     let scene = compiler.compile_file("scenes/cornell_box.json")?;
//!
//!     // Upload to bindings 1, 2 and 3
//!     let _objects: &[u8] = scene.compiled.objects_bytes();
//!     let _materials: &[u8] = scene.compiled.materials_bytes();
//!     let _lights: &[u8] = scene.compiled.lights_bytes();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]

pub mod foundation;
pub mod config;
pub mod description;
pub mod materials;
pub mod objects;
pub mod scene;
pub mod error;
pub mod validation;

pub use error::{SceneError, SceneResult, ValidationError};
pub use validation::SceneValidator;

pub use description::SceneDescription;
pub use scene::{CompiledScene, LoadedScene, SceneCompiler};

#[cfg(test)]
mod tests;

/// Common imports for compiler users
pub mod prelude {
    pub use crate::{
        SceneError, SceneResult, ValidationError, SceneValidator,
        config::{Config, ConfigError, CompilerConfig},
        description::{
            SceneDescription, SceneParser, MaterialDescription, MaterialTemplate,
            ObjectDescription, ObjectType, ObjectLayout, SchemaVersion,
        },
        materials::{CompiledMaterial, MaterialFactory},
        objects::{CompiledObject, LegacyObjectRecord, ObjectBuffer},
        scene::{CompiledScene, LoadedScene, SceneBuilder, SceneCompiler, SceneIndex},
    };
}
