use std::error::Error;
use std::path::Path;
use std::time::Instant;

use clap::Parser;
use log::info;

use glint::{SceneConfig, SceneError};

use crate::cli::Args;

mod cli;
mod logger;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logger::init(args.log_level.into());

    let mut config = SceneConfig::load(&args.scene)?;
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(resolution) = args.resolution {
        config.camera.resolution = resolution;
    }

    let base = args.scene.parent().unwrap_or_else(|| Path::new("."));
    let scene = config.build(base)?;

    let (res_x, res_y) = scene.camera.resolution();
    info!(
        "Start drawing {}: {} primitives, {} lights, {}x{} pixels, depth {}",
        args.scene.display(),
        scene.primitives.len(),
        scene.lights.len(),
        res_y,
        res_x,
        scene.depth
    );
    let now = Instant::now();

    let frame = scene.render();

    info!("Finished, elapsed: {:.3} ms", now.elapsed().as_secs_f64() * 1000.0);

    frame.to_image().save(&args.output).map_err(SceneError::from)?;
    info!("Saved {}", args.output.display());

    Ok(())
}
