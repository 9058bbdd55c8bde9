//! Runtime configuration: scene tunables plus command-line overrides.

use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use crate::bodies::BeltSpec;

/// Command-line arguments.
///
/// Values given here override the [`SceneConfig`] defaults.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Orbital visualizer with a mouse-driven camera")]
pub struct CliArgs {
    /// Planet catalog file.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Number of belt asteroids.
    #[arg(long)]
    pub asteroids: Option<usize>,

    /// Seed for the asteroid belt.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Asset directory holding `<planet>.png` textures.
    #[arg(long)]
    pub textures: Option<PathBuf>,

    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,
}

/// Scene-wide settings.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Path of the planet catalog file.
    pub catalog_path: PathBuf,
    /// Asteroid belt parameters.
    pub belt: BeltSpec,
    /// Directory (relative to the asset root) with planet textures.
    /// `None` draws every planet in its flat color.
    pub texture_dir: Option<PathBuf>,
    /// Initial window size in logical pixels.
    pub window_size: UVec2,
    /// Segments per orbit ring.
    pub orbit_segments: usize,
    /// Gap between a selected planet and its highlight ring, in pixels.
    pub highlight_margin: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("planets.txt"),
            belt: BeltSpec::default(),
            texture_dir: None,
            window_size: UVec2::new(1600, 1000),
            orbit_segments: 48,
            highlight_margin: 6.0,
        }
    }
}

impl SceneConfig {
    /// Apply CLI overrides on top of the current values.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.catalog {
            self.catalog_path = path.clone();
        }
        if let Some(count) = args.asteroids {
            self.belt.count = count;
        }
        if let Some(seed) = args.seed {
            self.belt.seed = seed;
        }
        if let Some(ref dir) = args.textures {
            self.texture_dir = Some(dir.clone());
        }
        if let Some(w) = args.width {
            self.window_size.x = w;
        }
        if let Some(h) = args.height {
            self.window_size.y = h;
        }
    }

    /// Config from defaults plus parsed command-line arguments.
    pub fn from_cli(args: &CliArgs) -> Self {
        let mut config = Self::default();
        config.apply_cli_overrides(args);
        config
    }
}
