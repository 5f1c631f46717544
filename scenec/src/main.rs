//! `scenec`: compile a scene file into the binary arrays a path tracer uploads

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::fs;
use std::path::{Path, PathBuf};

use scene_compiler::config::{CompilerConfig, Config};
use scene_compiler::foundation::logging;
use scene_compiler::materials::MaterialFactory;
use scene_compiler::{LoadedScene, SceneCompiler};

const OBJECTS_FILE: &str = "objects.bin";
const MATERIALS_FILE: &str = "materials.bin";
const LIGHTS_FILE: &str = "lights.bin";

fn main() -> Result<()> {
    let matches = Command::new("scenec")
        .about("Compiles JSON scene descriptions into GPU-ready object, material and light arrays")
        .arg(
            Arg::new("scene")
                .value_name("SCENE")
                .help("Scene file to compile")
                .value_parser(clap::value_parser!(PathBuf))
                .required_unless_present("list-templates"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Compiler settings (.toml or .ron)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("out-dir")
                .short('o')
                .long("out-dir")
                .value_name("DIR")
                .help("Write objects.bin, materials.bin and lights.bin into this directory")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("lenient-templates")
                .long("lenient-templates")
                .help("Fall back to the default preset for unknown material templates")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-templates")
                .long("list-templates")
                .help("Print the known material templates and exit")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    logging::init();

    if matches.get_flag("list-templates") {
        for template in MaterialFactory::list_templates() {
            println!("{template}");
        }
        return Ok(());
    }

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CompilerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load compiler config {}", path.display()))?,
        None => CompilerConfig::default(),
    };
    if matches.get_flag("lenient-templates") {
        config.template_fallback = true;
    }

    let scene_path = matches
        .get_one::<PathBuf>("scene")
        .context("No scene file given")?;
    let loaded = SceneCompiler::new(config)
        .compile_file(scene_path)
        .with_context(|| format!("Failed to compile {}", scene_path.display()))?;

    print_summary(&loaded);

    if let Some(out_dir) = matches.get_one::<PathBuf>("out-dir") {
        write_arrays(&loaded, out_dir)?;
    }

    Ok(())
}

fn print_summary(loaded: &LoadedScene) {
    let compiled = &loaded.compiled;
    println!("Scene: {} (version {})", loaded.info.name, loaded.info.version);
    println!(
        "  Render: {}x{}, {} spp/frame, {} max samples, {} bounces",
        loaded.render.width,
        loaded.render.height,
        loaded.render.samples_per_frame,
        loaded.render.max_samples,
        loaded.render.max_bounces
    );
    println!(
        "  Objects: {} ({:?} layout, {} bytes each)",
        compiled.objects.len(),
        compiled.object_layout(),
        compiled.objects.stride()
    );
    println!("  Materials: {}", compiled.materials.len());
    for (name, index) in compiled.material_index.entries() {
        log::debug!("    [{index}] {name}");
    }
    println!("  Lights: {:?}", compiled.light_indices);
}

fn write_arrays(loaded: &LoadedScene, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let compiled = &loaded.compiled;
    for (file, bytes) in [
        (OBJECTS_FILE, compiled.objects_bytes()),
        (MATERIALS_FILE, compiled.materials_bytes()),
        (LIGHTS_FILE, compiled.lights_bytes()),
    ] {
        let path = out_dir.join(file);
        fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    }

    Ok(())
}
