//! Material compilation subsystem
//!
//! Template presets provide a fully-populated baseline; authored fields are overlaid on top.

pub mod material_builder;
pub mod material_factory;
pub mod material_record;

pub use material_builder::MaterialBuilder;
pub use material_factory::MaterialFactory;
pub use material_record::CompiledMaterial;
