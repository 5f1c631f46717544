use approx::assert_relative_eq;

use crate::config::CompilerConfig;
use crate::description::ObjectLayout;
use crate::error::{SceneError, ValidationError};
use crate::scene::{LoadedScene, SceneCompiler};

fn compile(text: &str) -> Result<LoadedScene, SceneError> {
    SceneCompiler::default().compile_str(text)
}

fn validation_error(text: &str) -> ValidationError {
    match compile(text) {
        Err(SceneError::Validation(error)) => error,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_red_lambertian_sphere() {
    let loaded = compile(
        r#"{
            "materials": [ { "name": "red", "template": "lambertian", "albedo": [1, 0, 0] } ],
            "objects": [ { "type": "sphere", "material": "red", "center": [0, 0, -1], "radius": 0.5 } ]
        }"#,
    )
    .unwrap();
    let scene = &loaded.compiled;

    assert_eq!(scene.materials.len(), 1);
    assert_eq!(scene.materials[0].roughness, 1.0);
    assert_eq!(scene.materials[0].albedo, [1.0, 0.0, 0.0]);

    let objects = scene.objects.generic().unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(&objects[0].bounds[..3], &[0.0, 0.0, -1.0]);
    assert_eq!(objects[0].material_index(), 0);
    assert_eq!(objects[0].type_id(), 0);
    assert_relative_eq!(objects[0].scale[0], 0.5);
    assert_relative_eq!(objects[0].scale[1], 0.5);
    assert_relative_eq!(objects[0].scale[2], 0.5);
    assert!(scene.light_indices.is_empty());
}

#[test]
fn test_compilation_is_deterministic() {
    let text = r#"{
        "materials": [
            { "name": "floor", "template": "plastic", "roughness": 0.3 },
            { "name": "lamp", "template": "emissive", "emissionStrength": 5 }
        ],
        "objects": [
            { "type": "plane", "material": "floor" },
            { "type": "cone", "material": "floor", "radius": 0.4, "height": 1.2, "rotation": [0, 45, 0] },
            { "type": "sphere", "material": "lamp", "center": [0, 3, 0], "isLight": true }
        ]
    }"#;

    let first = compile(text).unwrap().compiled;
    let second = compile(text).unwrap().compiled;
    assert_eq!(first.objects_bytes(), second.objects_bytes());
    assert_eq!(first.materials_bytes(), second.materials_bytes());
    assert_eq!(first.lights_bytes(), second.lights_bytes());
}

#[test]
fn test_material_index_is_source_position() {
    let loaded = compile(
        r#"{
            "materials": [
                { "name": "a", "template": "metal" },
                { "name": "b", "template": "velvet" },
                { "name": "c", "template": "satin" }
            ],
            "objects": [
                { "material": "c" },
                { "material": "a" },
                { "material": "b" }
            ]
        }"#,
    )
    .unwrap();

    let objects = loaded.compiled.objects.generic().unwrap();
    let indices: Vec<u32> = objects.iter().map(|object| object.material_index()).collect();
    assert_eq!(indices, vec![2, 0, 1]);
    assert_eq!(loaded.compiled.material_index.get("b"), Some(1));
}

#[test]
fn test_light_indices_follow_object_order() {
    let loaded = compile(
        r#"{
            "materials": [ { "name": "m" }, { "name": "lamp", "template": "emissive" } ],
            "objects": [
                { "material": "m" },
                { "material": "lamp", "isLight": true },
                { "type": "box", "material": "m" },
                { "type": "icosahedron", "material": "lamp", "isLight": true },
                { "material": "lamp", "isLight": true }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(loaded.compiled.light_indices, vec![1, 3, 4]);
    assert_eq!(loaded.compiled.lights_bytes().len(), 3 * 4);
}

#[test]
fn test_box_scale_is_half_size() {
    let loaded = compile(
        r#"{
            "materials": [ { "name": "m" } ],
            "objects": [ { "type": "box", "material": "m", "size": [2, 4, 6] } ]
        }"#,
    )
    .unwrap();

    let objects = loaded.compiled.objects.generic().unwrap();
    assert_eq!(&objects[0].scale[..3], &[1.0, 2.0, 3.0]);
    assert_eq!(objects[0].type_id(), 2);
}

#[test]
fn test_duplicate_material_name_is_rejected() {
    let error = validation_error(
        r#"{
            "materials": [ { "name": "gold" }, { "name": "gold" } ],
            "objects": [ { "material": "gold" } ]
        }"#,
    );
    assert_eq!(error, ValidationError::DuplicateMaterialName { name: "gold".to_string() });
}

#[test]
fn test_unknown_material_reference_is_rejected() {
    let error = validation_error(
        r#"{
            "materials": [ { "name": "m" } ],
            "objects": [ { "material": "m" }, { "material": "chrome" } ]
        }"#,
    );
    assert_eq!(
        error,
        ValidationError::UnknownMaterial {
            object: 1,
            name: "chrome".to_string()
        }
    );
}

#[test]
fn test_negative_radius_is_rejected() {
    let error = validation_error(
        r#"{
            "materials": [ { "name": "m" } ],
            "objects": [ { "type": "sphere", "material": "m", "radius": -1 } ]
        }"#,
    );
    assert_eq!(error, ValidationError::InvalidRadius { object: 0, radius: -1.0 });
}

#[test]
fn test_empty_lists_are_rejected() {
    assert_eq!(
        validation_error(r#"{ "objects": [ { "material": "m" } ] }"#),
        ValidationError::NoMaterials
    );
    assert_eq!(
        validation_error(r#"{ "materials": [ { "name": "m" } ] }"#),
        ValidationError::NoObjects
    );
}

#[test]
fn test_malformed_json_is_a_syntax_error() {
    let result = compile(r#"{ "materials": [ { "name": "m" } "#);
    assert!(matches!(result, Err(SceneError::Syntax { .. })));
}

#[test]
fn test_legacy_scene_uses_compact_records() {
    let loaded = compile(
        r#"{
            "scene": { "version": "0.3" },
            "materials": [ { "name": "m" } ],
            "objects": [
                { "type": "sphere", "material": "m", "center": [1, 2, 3], "radius": 0.5 },
                { "type": "plane", "material": "m", "normal": [0, 0, 1], "distance": 4 }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(loaded.compiled.object_layout(), ObjectLayout::Legacy);
    assert_eq!(loaded.compiled.objects_bytes().len(), 2 * 32);

    let records = loaded.compiled.objects.legacy().unwrap();
    assert_eq!(records[0].data0, [1.0, 2.0, 3.0, 0.5]);
    assert_eq!(records[1].data0, [0.0, 0.0, 1.0, 4.0]);
    assert_eq!(records[1].data1[1], 1.0);
}

#[test]
fn test_legacy_scene_rejects_new_primitives() {
    let error = validation_error(
        r#"{
            "scene": { "version": "0.1" },
            "materials": [ { "name": "m" } ],
            "objects": [ { "type": "box", "material": "m" } ]
        }"#,
    );
    assert!(matches!(error, ValidationError::UnsupportedLegacyType { object: 0, .. }));
}

#[test]
fn test_capacity_limits_come_from_config() {
    let config = CompilerConfig {
        max_objects: 2,
        ..CompilerConfig::default()
    };
    let result = SceneCompiler::new(config).compile_str(
        r#"{
            "materials": [ { "name": "m" } ],
            "objects": [ { "material": "m" }, { "material": "m" }, { "material": "m" } ]
        }"#,
    );

    assert!(matches!(
        result,
        Err(SceneError::Validation(ValidationError::CapacityExceeded { count: 3, limit: 2, .. }))
    ));
}

#[test]
fn test_compile_file_round_trip() {
    let path = std::env::temp_dir().join(format!("scene_compiler_e2e_{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            // comments are allowed in scene files
            "scene": { "name": "On Disk" },
            "materials": [ { "name": "m", "template": "clearcoat" } ],
            "objects": [ { "type": "tetrahedron", "material": "m", "radius": 2 } ]
        }"#,
    )
    .unwrap();

    let result = SceneCompiler::default().compile_file(&path);
    std::fs::remove_file(&path).ok();

    let loaded = result.unwrap();
    assert_eq!(loaded.info.name, "On Disk");
    let objects = loaded.compiled.objects.generic().unwrap();
    assert_eq!(objects[0].scale, [2.0, 2.0, 2.0, 6.0]);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = SceneCompiler::default().compile_file("definitely/not/here.json");
    assert!(matches!(result, Err(SceneError::Io { .. })));
}
