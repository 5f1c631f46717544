//! Scene file parser
//!
//! Reads the JSON scene schema into a [`SceneDescription`]. Sections and list entries are
//! deserialized through serde with per-field defaults; material overrides are only recorded
//! when authored.
//!
//! Vector fields are lenient (see the `fields` helpers). Scalars are strict: a present value
//! of the wrong type is a syntax error pointing at its JSON path, e.g. `materials[1].roughness`.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{
    fields, Geometry, MaterialDescription, MaterialOverrides, MaterialTemplate,
    ObjectDescription, SceneDescription, SceneInfo, SchemaVersion,
};
use crate::config::CompilerConfig;
use crate::error::{SceneError, SceneResult};

/// The `scene` section before its version string is interpreted
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SceneHeader {
    name: Option<String>,
    #[serde(deserialize_with = "fields::version_text")]
    version: Option<String>,
}

/// Identity fields of a material entry; the rest of the entry is its overrides
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MaterialHeader {
    name: Option<String>,
    template: Option<TemplateTag>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged, expecting = "a material template name")]
enum TemplateTag {
    Known(MaterialTemplate),
    Unknown(String),
}

/// Parser for JSON scene files
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneParser {
    template_fallback: bool,
}

impl SceneParser {
    /// Strict parser: unknown material templates are rejected
    pub const fn new() -> Self {
        Self {
            template_fallback: false,
        }
    }

    /// Parser honouring the compiler settings
    pub const fn from_config(config: &CompilerConfig) -> Self {
        Self {
            template_fallback: config.template_fallback,
        }
    }

    /// Map unknown material templates to the default preset instead of failing
    #[must_use]
    pub const fn with_template_fallback(mut self, enabled: bool) -> Self {
        self.template_fallback = enabled;
        self
    }

    /// Read and parse a scene file
    ///
    /// A file holding only whitespace and comments is reported as empty.
    pub fn load_file(&self, path: impl AsRef<Path>) -> SceneResult<SceneDescription> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let stripped = strip_comments(&contents);
        if stripped.trim().is_empty() {
            return Err(SceneError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        log::info!("Loading scene file {}", path.display());
        self.parse_stripped(&stripped)
    }

    /// Parse scene text that has already been read
    pub fn parse_str(&self, text: &str) -> SceneResult<SceneDescription> {
        self.parse_stripped(&strip_comments(text))
    }

    fn parse_stripped(&self, json: &str) -> SceneResult<SceneDescription> {
        let root: Value = serde_json::from_str(json)?;
        let root = root
            .as_object()
            .ok_or_else(|| SceneError::syntax("$", "scene root must be a JSON object"))?;

        let info = parse_info(section(root, "scene")?)?;
        let camera = section(root, "camera")?;
        let sky = section(root, "sky")?;
        let render = section(root, "render")?;

        let materials = list(root, "materials")?
            .iter()
            .enumerate()
            .map(|(index, entry)| self.parse_material(entry, &format!("materials[{index}]")))
            .collect::<SceneResult<Vec<_>>>()?;

        let objects = list(root, "objects")?
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_object(entry, &format!("objects[{index}]")))
            .collect::<SceneResult<Vec<_>>>()?;

        log::debug!(
            "Parsed scene '{}' (schema {}): {} materials, {} objects",
            info.name,
            info.schema,
            materials.len(),
            objects.len()
        );

        Ok(SceneDescription {
            info,
            camera,
            sky,
            render,
            materials,
            objects,
        })
    }

    fn parse_material(&self, entry: &Value, path: &str) -> SceneResult<MaterialDescription> {
        let header: MaterialHeader = deserialize_at(entry, path)?;
        let name = header.name.unwrap_or_default();

        let template = match header.template {
            None => MaterialTemplate::Default,
            Some(TemplateTag::Known(template)) => template,
            Some(TemplateTag::Unknown(tag)) if self.template_fallback => {
                log::warn!("Material '{name}': unknown template '{tag}', using default preset");
                MaterialTemplate::Default
            }
            Some(TemplateTag::Unknown(tag)) => {
                return Err(SceneError::syntax(
                    format!("{path}.template"),
                    format!("unknown material template '{tag}'"),
                ))
            }
        };

        let overrides: MaterialOverrides = deserialize_at(entry, path)?;

        Ok(MaterialDescription {
            name,
            template,
            overrides,
        })
    }
}

fn parse_info(header: SceneHeader) -> SceneResult<SceneInfo> {
    let defaults = SceneInfo::default();
    let version = header.version.unwrap_or(defaults.version);
    let schema = SchemaVersion::parse(&version).ok_or_else(|| {
        SceneError::syntax(
            "scene.version",
            format!("'{version}' is not a 'major.minor' version"),
        )
    })?;

    Ok(SceneInfo {
        name: header.name.unwrap_or(defaults.name),
        version,
        schema,
    })
}

fn parse_object(entry: &Value, path: &str) -> SceneResult<ObjectDescription> {
    let mut object: ObjectDescription = deserialize_at(entry, path)?;
    object.geometry = deserialize_at::<Geometry>(entry, path)?;
    Ok(object)
}

/// Deserialize `value` as a JSON object, reporting failures at `path` plus the inner field path
fn deserialize_at<T: DeserializeOwned>(value: &Value, path: &str) -> SceneResult<T> {
    if !value.is_object() {
        return Err(SceneError::syntax(path, "expected an object"));
    }

    serde_path_to_error::deserialize(value).map_err(|error| {
        let inner = error.path().to_string();
        let location = match inner.as_str() {
            "." => path.to_string(),
            field => format!("{path}.{field}"),
        };
        SceneError::syntax(location, error.into_inner().to_string())
    })
}

/// Optional top-level section; absent or `null` yields the section defaults
fn section<T: DeserializeOwned + Default>(root: &Map<String, Value>, key: &str) -> SceneResult<T> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => deserialize_at(value, key),
    }
}

fn list<'a>(root: &'a Map<String, Value>, key: &str) -> SceneResult<&'a [Value]> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(SceneError::syntax(key, "expected an array")),
    }
}

/// Remove `//` and `/* */` comments outside of string literals
///
/// Newlines inside comments are kept so serde_json line numbers still match the file.
fn strip_comments(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            output.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        output.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                output.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        output.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        output.push('\n');
                    }
                    if previous == '*' && skipped == '/' {
                        break;
                    }
                    previous = skipped;
                }
            }
            _ => output.push(c),
        }
    }

    output
}
