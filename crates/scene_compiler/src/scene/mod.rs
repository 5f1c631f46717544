//! Scene assembly
//!
//! Orchestrates material and object compilation into the three arrays handed to the GPU
//! buffer layer:
//!
//! ```text
//! scene file
//!      ↓  SceneParser
//! SceneDescription
//!      ↓  SceneValidator
//! SceneBuilder ── MaterialFactory → materials + SceneIndex
//!              └─ ObjectCompiler  → objects + light indices
//!      ↓
//! CompiledScene
//! ```

mod compiler;
mod scene_builder;
mod scene_index;

pub use compiler::{LoadedScene, SceneCompiler};
pub use scene_builder::{CompiledScene, SceneBuilder};
pub use scene_index::SceneIndex;
