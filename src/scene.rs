//! Frame orchestration: simulate → project → pick, once per frame.
//!
//! The pure pipeline lives in [`run_frame`] and [`project_scene`] so it can be
//! driven headless from tests. [`ScenePlugin`] wires the same pipeline into
//! the Bevy schedule, loads the planet catalog on startup and applies
//! add/remove edits coming from the UI.

use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::bodies::orbit_offset;
use crate::camera::CameraPose;
use crate::catalog::{CatalogError, PlanetCatalog, PlanetRecord};
use crate::config::SceneConfig;
use crate::input::PendingClick;
use crate::picking::{Selection, pick_planet};
use crate::projection::ViewTransform;
use crate::simulation::SceneState;
use crate::time::FrameStep;
use crate::types::{FrameSet, Rgb};

/// A body as it appears on screen this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBody {
    /// Center in screen pixels (origin top-left, y down)
    pub position: Vec2,
    /// Perspective-scaled radius in pixels
    pub radius: f32,
    pub depth: f32,
    pub color: Rgb,
}

/// Ring drawn around the selected planet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub planet: usize,
    pub center: Vec2,
    pub radius: f32,
}

/// Everything the renderer needs for one frame, in screen space.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct FrameSnapshot {
    pub star: Option<ScreenBody>,
    /// One entry per planet, in storage order
    pub planets: Vec<ScreenBody>,
    /// One entry per moon; `None` for moons with an unresolved parent
    pub moons: Vec<Option<ScreenBody>>,
    /// Closed polyline per planet orbit
    pub orbit_rings: Vec<Vec<Vec2>>,
    /// One point per asteroid
    pub asteroids: Vec<Vec2>,
    pub highlight: Option<Highlight>,
}

/// Snapshot layout settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOptions {
    pub orbit_segments: usize,
    pub highlight_margin: f32,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self::from(&SceneConfig::default())
    }
}

impl From<&SceneConfig> for FrameOptions {
    fn from(config: &SceneConfig) -> Self {
        Self {
            orbit_segments: config.orbit_segments,
            highlight_margin: config.highlight_margin,
        }
    }
}

/// Per-frame inputs to the pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Reference frames to simulate (0 while paused)
    pub step: f32,
    /// Viewport size in pixels
    pub viewport: Vec2,
    /// Click position in screen pixels, if the user clicked this frame
    pub click: Option<Vec2>,
}

/// Run one frame: advance the bodies, project them, then resolve a click.
pub fn run_frame(
    scene: &mut SceneState,
    pose: &CameraPose,
    selection: &mut Selection,
    input: &FrameInput,
    options: &FrameOptions,
) -> FrameSnapshot {
    scene.advance(input.step);

    let view = pose.view_transform(input.viewport);
    let mut snapshot = project_scene(scene, &view, options);

    if let Some(click) = input.click {
        selection.planet = pick_planet(&snapshot.planets, click);
    }
    if selection.planet.is_some_and(|i| i >= scene.planets.len()) {
        selection.clear();
    }
    snapshot.highlight = selection.planet.and_then(|i| {
        snapshot.planets.get(i).map(|body| Highlight {
            planet: i,
            center: body.position,
            radius: body.radius + options.highlight_margin,
        })
    });

    snapshot
}

/// Project the current world state into screen space.
///
/// Reads the scene only; projecting never changes world positions.
pub fn project_scene(scene: &SceneState, view: &ViewTransform, options: &FrameOptions) -> FrameSnapshot {
    let disc = |world: Vec2, base_radius: f32, color: Rgb| {
        let p = view.project(world);
        ScreenBody {
            position: p.screen,
            radius: view.screen_radius(base_radius, p.depth),
            depth: p.depth,
            color,
        }
    };

    let star = disc(Vec2::ZERO, scene.star.radius, scene.star.color);

    let planets = scene
        .planets
        .iter()
        .map(|p| disc(p.world, p.radius, p.color))
        .collect();

    let moons = scene
        .moons
        .iter()
        .map(|m| {
            m.parent
                .index()
                .filter(|&i| i < scene.planets.len())
                .map(|_| disc(m.world, m.radius, m.color))
        })
        .collect();

    let orbit_rings = scene
        .planets
        .iter()
        .map(|p| orbit_ring(view, p.orbit_radius, options.orbit_segments))
        .collect();

    let asteroids = scene
        .asteroids
        .iter()
        .map(|a| view.project(a.world()).screen)
        .collect();

    FrameSnapshot {
        star: Some(star),
        planets,
        moons,
        orbit_rings,
        asteroids,
        highlight: None,
    }
}

/// Closed polyline approximating the orbit circle of `radius`.
fn orbit_ring(view: &ViewTransform, radius: f32, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|seg| {
            let t = seg as f32 / segments as f32 * TAU;
            view.project(orbit_offset(t, radius)).screen
        })
        .collect()
}

/// Edit to the planet catalog requested by the UI.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum CatalogEdit {
    /// Append a new planet record
    Append(PlanetRecord),
    /// Remove the planet at this index
    Remove(usize),
}

/// Sent after the planet list has been (re)loaded and parents re-resolved.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct SceneReloaded;

/// Outcome of the most recent catalog edit, for display.
#[derive(Resource, Default, Debug)]
pub struct EditStatus {
    pub last_error: Option<String>,
}

/// Apply `edit` to the catalog file, then reload it into `scene`.
///
/// The scene is only touched once the file write succeeded.
pub fn apply_edit(
    catalog: &PlanetCatalog,
    scene: &mut SceneState,
    edit: &CatalogEdit,
) -> Result<(), CatalogError> {
    match edit {
        CatalogEdit::Append(record) => catalog.append(record)?,
        CatalogEdit::Remove(index) => {
            catalog.remove(*index)?;
        }
    }

    let records = catalog.load()?;
    scene.reload_planets(&records);
    Ok(())
}

/// Plugin loading the scene and running the per-frame pipeline.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneState>()
            .init_resource::<Selection>()
            .init_resource::<FrameSnapshot>()
            .init_resource::<EditStatus>()
            .add_message::<CatalogEdit>()
            .add_message::<SceneReloaded>()
            .configure_sets(
                Update,
                (FrameSet::Input, FrameSet::Step, FrameSet::Render).chain(),
            )
            .add_systems(Startup, load_scene)
            .add_systems(
                Update,
                (apply_catalog_edits, step_frame).chain().in_set(FrameSet::Step),
            );
    }
}

/// Load the catalog and build the scene. No planets is fatal.
fn load_scene(
    config: Res<SceneConfig>,
    mut scene: ResMut<SceneState>,
    mut reloaded: MessageWriter<SceneReloaded>,
    mut exit: MessageWriter<AppExit>,
) {
    let catalog = PlanetCatalog::new(config.catalog_path.clone());
    let records = match catalog.load_non_empty() {
        Ok(records) => records,
        Err(e) => {
            error!("No planets loaded, exiting: {e}");
            exit.write(AppExit::error());
            return;
        }
    };

    *scene = SceneState::with_default_moons(&records, config.belt.sample());
    info!(
        "Scene ready: {} planets, {}/{} moons resolved, {} asteroids",
        scene.planets.len(),
        scene.resolved_moon_count(),
        scene.moons.len(),
        scene.asteroids.len()
    );
    reloaded.write(SceneReloaded);
}

/// Write UI edits to the catalog and reload the planet list.
fn apply_catalog_edits(
    mut edits: MessageReader<CatalogEdit>,
    config: Res<SceneConfig>,
    mut scene: ResMut<SceneState>,
    mut selection: ResMut<Selection>,
    mut status: ResMut<EditStatus>,
    mut reloaded: MessageWriter<SceneReloaded>,
) {
    let catalog = PlanetCatalog::new(config.catalog_path.clone());
    for edit in edits.read() {
        match apply_edit(&catalog, &mut scene, edit) {
            Ok(()) => {
                status.last_error = None;
                selection.clear();
                reloaded.write(SceneReloaded);
            }
            Err(e) => {
                error!("Catalog edit failed: {e}");
                status.last_error = Some(e.to_string());
            }
        }
    }
}

/// The per-frame pipeline as a system.
fn step_frame(
    step: Res<FrameStep>,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<SceneConfig>,
    pose: Res<CameraPose>,
    mut scene: ResMut<SceneState>,
    mut selection: ResMut<Selection>,
    mut click: ResMut<PendingClick>,
    mut snapshot: ResMut<FrameSnapshot>,
) {
    let viewport = windows
        .single()
        .map(|w| Vec2::new(w.width(), w.height()))
        .unwrap_or_else(|_| config.window_size.as_vec2());

    let input = FrameInput {
        step: step.0,
        viewport,
        click: click.0.take(),
    };
    *snapshot = run_frame(
        &mut scene,
        &pose,
        &mut selection,
        &input,
        &FrameOptions::from(&*config),
    );
}
