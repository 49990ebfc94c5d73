use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Renders a JSON scene file to a PNG image.
#[derive(Debug, Parser)]
#[command(name = "glint", version)]
pub struct Args {
    /// Scene description.
    pub scene: PathBuf,

    /// Where to write the rendered image.
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Number of reflection/refraction bounces, overriding the scene.
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Pixels per unit of the image plane, overriding the scene camera.
    #[arg(short, long)]
    pub resolution: Option<f64>,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
