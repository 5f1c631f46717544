//! Math utilities and types
//!
//! Description-side vectors use nalgebra; compiled records use plain arrays.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Extension helpers for packing vectors into GPU slots
pub trait Vec3Ext {
    /// Pack `xyz` plus an explicit `w` component into a 16-byte slot
    fn extend_to(&self, w: f32) -> [f32; 4];

    /// True when every component is a finite number
    fn all_finite(&self) -> bool;
}

impl Vec3Ext for Vec3 {
    fn extend_to(&self, w: f32) -> [f32; 4] {
        [self.x, self.y, self.z, w]
    }

    fn all_finite(&self) -> bool {
        self.iter().all(|c| c.is_finite())
    }
}
