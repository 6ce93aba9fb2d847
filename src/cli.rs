//! Command line interface.

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Informational output (default)
    Info,
    /// Debug output
    Debug,
    /// Full trace output
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Built-in scene presets.
#[derive(Debug, Clone, ValueEnum)]
pub enum ScenePreset {
    /// The three-material demo: diffuse, metal and a hollow glass sphere.
    ThreeSpheres,
    /// The random sphere field from the book cover.
    Cover,
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "prismpath")]
#[command(about = "A stochastic sphere path tracer")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "400", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "200", help = "Image height in pixels")]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "100", help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Maximum number of ray bounces per sample
    #[arg(long, default_value = "50", help = "Maximum number of ray bounces per sample")]
    pub max_depth: u32,

    /// Seed for the per-pixel random streams
    #[arg(long, default_value = "0", help = "Seed for reproducible renders")]
    pub seed: u64,

    /// Scene preset to render
    #[arg(long, value_enum, default_value = "three-spheres", help = "Scene preset to render")]
    pub scene: ScenePreset,

    /// Output file path (.ppm or .png), or "-" for PPM on stdout
    #[arg(
        short,
        long,
        default_value = "image.ppm",
        help = "Output file path (.ppm or .png), or - for PPM on stdout"
    )]
    pub output: String,
}
