//! Scene compiler settings

use serde::{Deserialize, Serialize};

use super::Config;

/// Settings that control parsing strictness and buffer capacity checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Treat an unrecognised material template as the default preset instead of an error
    pub template_fallback: bool,
    /// Plane normals shorter than this are rejected as degenerate
    pub plane_normal_epsilon: f32,
    /// Capacity of the downstream object buffer
    pub max_objects: usize,
    /// Capacity of the downstream material buffer
    pub max_materials: usize,
    /// Capacity of the downstream light index buffer
    pub max_lights: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            template_fallback: false,
            plane_normal_epsilon: 1e-3,
            max_objects: 1024,
            max_materials: 256,
            max_lights: 64,
        }
    }
}

impl CompilerConfig {
    /// Allow unknown material templates to fall back to the default preset
    #[must_use]
    pub fn with_template_fallback(mut self, enabled: bool) -> Self {
        self.template_fallback = enabled;
        self
    }
}

impl Config for CompilerConfig {}
