//! Object compilation subsystem
//!
//! Dispatches each object by type into a fixed binary record and collects light indices.

pub mod object_compiler;
pub mod object_record;

pub use object_compiler::ObjectCompiler;
pub use object_record::{CompiledObject, LegacyObjectRecord, ObjectBuffer};
