//! Orrery - interactive solar-system visualizer
//!
//! A desktop application drawing planets, moons and an asteroid belt on
//! circular orbits, with a mouse-driven camera and an editable planet list.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use orrery::camera::CameraPlugin;
use orrery::config::{CliArgs, SceneConfig};
use orrery::input::InputPlugin;
use orrery::render::RenderPlugin;
use orrery::scene::ScenePlugin;
use orrery::time::TimePlugin;
use orrery::ui::UiPlugin;

fn main() -> AppExit {
    let config = SceneConfig::from_cli(&CliArgs::parse());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                resolution: (config.window_size.x, config.window_size.y).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(config)
        .add_plugins((
            CameraPlugin,
            TimePlugin,
            InputPlugin,
            ScenePlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run()
}
