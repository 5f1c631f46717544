//! The sample scenes shipped in `scenes/` must always compile

use std::path::PathBuf;

use crate::config::{CompilerConfig, Config};
use crate::description::{MaterialTemplate, ObjectLayout, ObjectType};
use crate::scene::SceneCompiler;

fn scenes_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../scenes")
}

#[test]
fn test_cornell_box_compiles() {
    let loaded = SceneCompiler::default()
        .compile_file(scenes_dir().join("cornell_box.json"))
        .unwrap();

    assert_eq!(loaded.info.name, "Cornell Box");
    assert_eq!(loaded.render.width, 800);
    assert_eq!(loaded.compiled.objects.len(), 8);
    assert_eq!(loaded.compiled.materials.len(), 6);
    assert_eq!(loaded.compiled.light_indices, vec![5]);
}

#[test]
fn test_showcase_covers_every_type_and_template() {
    let description = SceneCompiler::default()
        .parser()
        .load_file(scenes_dir().join("showcase.json"))
        .unwrap();

    for object_type in [
        ObjectType::Sphere,
        ObjectType::Plane,
        ObjectType::Box,
        ObjectType::Cylinder,
        ObjectType::Cone,
        ObjectType::Pyramid,
        ObjectType::Tetrahedron,
        ObjectType::Prism,
        ObjectType::Dodecahedron,
        ObjectType::Icosahedron,
    ] {
        assert!(
            description.objects.iter().any(|object| object.object_type == object_type),
            "showcase is missing {object_type}"
        );
    }
    for template in MaterialTemplate::ALL {
        assert!(
            description.materials.iter().any(|material| material.template == template),
            "showcase is missing template {}",
            template.as_str()
        );
    }

    let compiled = SceneCompiler::default().compile(&description).unwrap();
    assert_eq!(compiled.objects.len(), description.objects.len());
    assert!(description.render.bloom.enabled);
}

#[test]
fn test_legacy_sample_uses_legacy_layout() {
    let loaded = SceneCompiler::default()
        .compile_file(scenes_dir().join("legacy_spheres.json"))
        .unwrap();

    assert_eq!(loaded.compiled.object_layout(), ObjectLayout::Legacy);
    assert_eq!(loaded.compiled.light_indices, vec![1]);
}

#[test]
fn test_sample_config_matches_defaults() {
    let config = CompilerConfig::load_from_file(scenes_dir().join("compiler.toml")).unwrap();
    assert_eq!(config, CompilerConfig::default());
}
