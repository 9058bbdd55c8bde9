//! Body visuals: one entity per star, planet and moon.
//!
//! Entities are respawned whenever the planet list is reloaded. Planets with
//! a texture are sprites, everything else is a unit disc mesh scaled to its
//! screen radius.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::config::SceneConfig;
use crate::scene::SceneReloaded;
use crate::simulation::SceneState;
use crate::texture::PlanetTextures;
use crate::types::{FrameSet, Rgb};

/// Which body an entity draws.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyVisual {
    Star,
    /// Index into the planet list
    Planet(usize),
    /// Index into the moon list
    Moon(usize),
}

/// Shared radius-1 disc mesh, scaled per body.
#[derive(Resource)]
pub struct UnitDisc(pub Handle<Mesh>);

impl FromWorld for UnitDisc {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        Self(meshes.add(Circle::new(1.0)))
    }
}

/// Plugin providing body visual spawning functionality.
pub struct BodyVisualPlugin;

impl Plugin for BodyVisualPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UnitDisc>()
            .init_resource::<PlanetTextures>()
            .add_systems(
                Update,
                (spawn_body_visuals, fallback_failed_textures)
                    .chain()
                    .in_set(FrameSet::Render),
            );
    }
}

/// Color disc bundle for a body.
fn disc(
    mesh: &UnitDisc,
    materials: &mut Assets<ColorMaterial>,
    color: Rgb,
) -> (Mesh2d, MeshMaterial2d<ColorMaterial>) {
    (
        Mesh2d(mesh.0.clone()),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(color.to_color()))),
    )
}

/// Respawn every body visual after the scene was (re)loaded.
fn spawn_body_visuals(
    mut commands: Commands,
    mut reloaded: MessageReader<SceneReloaded>,
    existing: Query<Entity, With<BodyVisual>>,
    scene: Res<SceneState>,
    config: Res<SceneConfig>,
    asset_server: Res<AssetServer>,
    mesh: Res<UnitDisc>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut textures: ResMut<PlanetTextures>,
) {
    if reloaded.is_empty() {
        return;
    }
    reloaded.clear();

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    *textures = PlanetTextures::load(&asset_server, config.texture_dir.as_deref(), &scene.planets);

    commands.spawn((
        disc(&mesh, &mut materials, scene.star.color),
        Transform::from_xyz(0.0, 0.0, super::z_layers::STAR),
        BodyVisual::Star,
    ));

    for (i, planet) in scene.planets.iter().enumerate() {
        let transform = Transform::from_xyz(0.0, 0.0, super::z_layers::PLANET);
        match textures.get(i) {
            Some(image) => {
                commands.spawn((
                    Sprite::from_image(image.clone()),
                    transform,
                    BodyVisual::Planet(i),
                ));
            }
            None => {
                commands.spawn((
                    disc(&mesh, &mut materials, planet.color),
                    transform,
                    BodyVisual::Planet(i),
                ));
            }
        }
    }

    for (i, moon) in scene.moons.iter().enumerate() {
        commands.spawn((
            disc(&mesh, &mut materials, moon.color),
            Transform::from_xyz(0.0, 0.0, super::z_layers::MOON),
            BodyVisual::Moon(i),
        ));
    }

    info!(
        "Spawned visuals for {} planets ({} textured) and {} moons",
        scene.planets.len(),
        textures.textured_count(),
        scene.moons.len()
    );
}

/// Swap planets whose texture failed to load back to a flat color disc.
fn fallback_failed_textures(
    mut commands: Commands,
    sprites: Query<(Entity, &BodyVisual, &Sprite)>,
    scene: Res<SceneState>,
    asset_server: Res<AssetServer>,
    mesh: Res<UnitDisc>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut textures: ResMut<PlanetTextures>,
) {
    for (entity, visual, sprite) in &sprites {
        let BodyVisual::Planet(i) = *visual else {
            continue;
        };
        if !matches!(asset_server.load_state(sprite.image.id()), LoadState::Failed(_)) {
            continue;
        }
        let Some(planet) = scene.planets.get(i) else {
            continue;
        };

        warn!(
            "Failed to load texture for {}, using color fallback",
            planet.name
        );
        textures.mark_failed(i);
        commands
            .entity(entity)
            .remove::<Sprite>()
            .insert(disc(&mesh, &mut materials, planet.color));
    }
}
