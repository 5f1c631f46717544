//! Scene compiler entry points
//!
//! Parsing and validation are fail-stop; [`SceneBuilder`] only ever sees a validated
//! description.

use std::path::Path;

use crate::config::CompilerConfig;
use crate::description::{
    CameraDescription, RenderSettings, SceneDescription, SceneInfo, SceneParser, SkyDescription,
};
use crate::error::SceneResult;
use crate::validation::SceneValidator;

use super::scene_builder::{CompiledScene, SceneBuilder};

/// A compiled scene plus the structural settings the host still needs
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedScene {
    /// Scene metadata
    pub info: SceneInfo,
    /// Camera placement and lens
    pub camera: CameraDescription,
    /// Sky gradient
    pub sky: SkyDescription,
    /// Render settings
    pub render: RenderSettings,
    /// Upload-ready arrays
    pub compiled: CompiledScene,
}

/// Parse → validate → compile pipeline
#[derive(Debug, Clone, Default)]
pub struct SceneCompiler {
    config: CompilerConfig,
}

impl SceneCompiler {
    /// Compiler with the given settings
    pub const fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Active settings
    pub const fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Parser configured from the active settings
    pub const fn parser(&self) -> SceneParser {
        SceneParser::from_config(&self.config)
    }

    /// Validator configured from the active settings
    pub const fn validator(&self) -> SceneValidator {
        SceneValidator::new(&self.config)
    }

    /// Validate and compile an already parsed description
    pub fn compile(&self, description: &SceneDescription) -> SceneResult<CompiledScene> {
        self.validator().validate(description)?;
        Ok(SceneBuilder::build(description))
    }

    /// Parse, validate and compile scene text
    pub fn compile_str(&self, text: &str) -> SceneResult<LoadedScene> {
        let description = self.parser().parse_str(text)?;
        self.finish(description)
    }

    /// Read, parse, validate and compile a scene file
    pub fn compile_file(&self, path: impl AsRef<Path>) -> SceneResult<LoadedScene> {
        let description = self.parser().load_file(path)?;
        self.finish(description)
    }

    fn finish(&self, description: SceneDescription) -> SceneResult<LoadedScene> {
        let compiled = self.compile(&description)?;
        let SceneDescription {
            info,
            camera,
            sky,
            render,
            ..
        } = description;

        Ok(LoadedScene {
            info,
            camera,
            sky,
            render,
            compiled,
        })
    }
}
