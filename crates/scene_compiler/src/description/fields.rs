//! `deserialize_with` helpers for scene-file fields that need more than the derive
//!
//! Vectors are lenient: an array of at least three numbers is read from its first three,
//! anything else logs a warning and falls back (structural fields) or stays absent
//! (material overrides). Counts accept whole-number floats such as `800.0`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{CameraDescription, SkyDescription};
use crate::foundation::math::Vec3;

/// `[x, y, z, ...]` with numeric `x`, `y`, `z`; trailing entries are ignored
pub(super) fn parse_vec3(value: &Value) -> Option<Vec3> {
    match value.as_array()?.as_slice() {
        [x, y, z, ..] => Some(Vec3::new(
            x.as_f64()? as f32,
            y.as_f64()? as f32,
            z.as_f64()? as f32,
        )),
        _ => None,
    }
}

fn lenient_vec3(value: &Value) -> Option<Vec3> {
    let parsed = parse_vec3(value);
    if parsed.is_none() && !value.is_null() {
        log::warn!("Ignoring malformed vector {value}: expected [x, y, z]");
    }
    parsed
}

fn vec3_or<'de, D>(deserializer: D, fallback: Vec3) -> Result<Vec3, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_vec3(&value).unwrap_or(fallback))
}

pub(super) fn vec3_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
    vec3_or(deserializer, Vec3::zeros())
}

pub(super) fn vec3_or_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
    vec3_or(deserializer, Vec3::repeat(1.0))
}

pub(super) fn vec3_or_up<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
    vec3_or(deserializer, Vec3::y())
}

pub(super) fn camera_position<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec3, D::Error> {
    vec3_or(deserializer, CameraDescription::default().position)
}

pub(super) fn sky_top<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
    vec3_or(deserializer, SkyDescription::default().color_top)
}

pub(super) fn sky_bottom<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
    vec3_or(deserializer, SkyDescription::default().color_bottom)
}

/// Material override vector; `null` or malformed leaves the template value alone
pub(super) fn sparse_vec3<'de, D>(deserializer: D) -> Result<Option<Vec3>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_vec3(&value))
}

/// Non-negative count; `800` and `800.0` both read as 800
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub(super) fn whole_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = f64::deserialize(deserializer)?;
    if number.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&number) {
        Ok(number as u32)
    } else {
        Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {number}"
        )))
    }
}

#[derive(Deserialize)]
#[serde(untagged, expecting = "a version string or number")]
enum VersionTag {
    Text(String),
    Number(serde_json::Number),
}

/// `"1.0"` or `1`; numbers are kept as their JSON text
pub(super) fn version_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<VersionTag>::deserialize(deserializer)?.map(|tag| match tag {
        VersionTag::Text(text) => text,
        VersionTag::Number(number) => number.to_string(),
    }))
}
