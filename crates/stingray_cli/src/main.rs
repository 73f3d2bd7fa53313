//! Stingray command line renderer.
//!
//! Usage: `stingray <scene.json> [output.png]`

mod scene_file;

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use scene_file::SceneFile;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        bail!("Usage: stingray <scene.json> [output.png]");
    }

    let scene_path = PathBuf::from(&args[1]);
    let output = match args.get(2) {
        Some(path) => PathBuf::from(path),
        None => scene_path.with_extension("png"),
    };

    log::info!("Loading scene {}", scene_path.display());
    let scene = SceneFile::load(&scene_path)?;
    let stage = scene.to_stage()?;
    let config = scene.render_config();

    let name = scene_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stingray".to_string());

    log::info!(
        "Rendering {}x{} ({:?} anti-aliasing, depth {})",
        scene.render.width,
        scene.render.height,
        config.antialias,
        config.max_depth
    );

    let rendering = stage
        .render_with(&name, scene.render.width, scene.render.height, &config)
        .context("Render failed")?;

    rendering
        .save_png(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!("Saved {}", output.display());
    Ok(())
}
