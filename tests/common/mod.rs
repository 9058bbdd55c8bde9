//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use orrery::camera::CameraPose;
use orrery::catalog::PlanetRecord;
use orrery::config::SceneConfig;
use orrery::input::PendingClick;
use orrery::scene::ScenePlugin;
use orrery::time::FrameStep;
use orrery::types::Rgb;

/// The bundled eight-planet catalog.
pub const SOLAR_CATALOG: &str = include_str!("../../planets.txt");

/// Write `text` to `planets.txt` inside `dir`.
pub fn write_catalog(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("planets.txt");
    fs::write(&path, text).unwrap();
    path
}

pub fn xen() -> PlanetRecord {
    PlanetRecord {
        name: "Xen".into(),
        orbit_radius: 500.0,
        angular_speed: 0.01,
        radius: 12.0,
        color: Rgb::new(10, 20, 30),
    }
}

/// A windowless app running the scene pipeline against `catalog`.
///
/// The frame step stays at zero unless a test sets it, so bodies hold still.
pub fn headless_app(catalog: PathBuf) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(SceneConfig {
            catalog_path: catalog,
            ..default()
        })
        .init_resource::<CameraPose>()
        .init_resource::<PendingClick>()
        .init_resource::<FrameStep>()
        .add_plugins(ScenePlugin);
    app
}
