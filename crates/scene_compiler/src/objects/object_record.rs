//! GPU-side object records
//!
//! Two encodings exist, selected by the scene schema version:
//!
//! ```text
//! Generic (schema >= 1), 64 bytes:
//!   vec4 bounds;     // xyz = center,   w = bounding radius
//!   vec4 rotation;   // xyz = euler deg, w = material index
//!   vec4 scale;      // xyz = extents,  w = type id
//!   vec4 reserved;
//!
//! Legacy (schema 0), 32 bytes, sphere and plane only:
//!   vec4 data0;      // sphere: center + radius, plane: normal + distance
//!   vec4 data1;      // x = material index, y = type id
//! ```
//!
//! Planes in the generic encoding keep their legacy packing: `bounds` holds normal + distance,
//! `rotation.w` the material index and `scale.w` the type id, with every other lane zero.

use bytemuck::{Pod, Zeroable};

use crate::description::ObjectLayout;

/// Generic four-vector object record
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CompiledObject {
    /// Center (xyz) and bounding radius (w); plane: normal and distance
    pub bounds: [f32; 4],
    /// Euler rotation in degrees (xyz) and material index (w)
    pub rotation: [f32; 4],
    /// Type-dependent extents (xyz) and type id (w)
    pub scale: [f32; 4],
    /// Reserved for future use
    pub reserved: [f32; 4],
}

impl CompiledObject {
    /// Size of one record in the upload buffer
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Material index stored in `rotation.w`
    pub fn material_index(&self) -> u32 {
        self.rotation[3] as u32
    }

    /// Type id stored in `scale.w`
    pub fn type_id(&self) -> u32 {
        self.scale[3] as u32
    }
}

/// Compact two-vector record for sphere/plane-only scenes
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LegacyObjectRecord {
    /// Sphere: center + radius; plane: normal + distance
    pub data0: [f32; 4],
    /// Material index, type id, unused, unused
    pub data1: [f32; 4],
}

impl LegacyObjectRecord {
    /// Size of one record in the upload buffer
    pub const SIZE: usize = std::mem::size_of::<Self>();
}

/// Compiled object array in whichever encoding the scene selected
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectBuffer {
    /// Four-vector records
    Generic(Vec<CompiledObject>),
    /// Two-vector records
    Legacy(Vec<LegacyObjectRecord>),
}

impl ObjectBuffer {
    /// Empty buffer for `layout`
    pub const fn new(layout: ObjectLayout) -> Self {
        match layout {
            ObjectLayout::Generic => Self::Generic(Vec::new()),
            ObjectLayout::Legacy => Self::Legacy(Vec::new()),
        }
    }

    /// Encoding of the records
    pub const fn layout(&self) -> ObjectLayout {
        match self {
            Self::Generic(_) => ObjectLayout::Generic,
            Self::Legacy(_) => ObjectLayout::Legacy,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        match self {
            Self::Generic(records) => records.len(),
            Self::Legacy(records) => records.len(),
        }
    }

    /// True when no records have been written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size in bytes of one record
    pub const fn stride(&self) -> usize {
        match self {
            Self::Generic(_) => CompiledObject::SIZE,
            Self::Legacy(_) => LegacyObjectRecord::SIZE,
        }
    }

    /// Records as raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Generic(records) => bytemuck::cast_slice(records.as_slice()),
            Self::Legacy(records) => bytemuck::cast_slice(records.as_slice()),
        }
    }

    /// Generic records, if this buffer uses that encoding
    pub fn generic(&self) -> Option<&[CompiledObject]> {
        match self {
            Self::Generic(records) => Some(records),
            Self::Legacy(_) => None,
        }
    }

    /// Legacy records, if this buffer uses that encoding
    pub fn legacy(&self) -> Option<&[LegacyObjectRecord]> {
        match self {
            Self::Legacy(records) => Some(records),
            Self::Generic(_) => None,
        }
    }
}
