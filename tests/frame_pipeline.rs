//! End-to-end frame tests: simulate, project, pick, highlight.

mod common;

use approx::assert_relative_eq;
use bevy::math::Vec2;
use orrery::bodies::{BeltSpec, Moon, orbit_offset};
use orrery::camera::{CameraPose, ROTATE_SENS};
use orrery::catalog::parse_catalog;
use orrery::picking::{Selection, pick_planet};
use orrery::scene::{FrameInput, FrameOptions, ScreenBody, run_frame};
use orrery::simulation::SceneState;
use orrery::types::Rgb;

use common::SOLAR_CATALOG;

fn solar_scene() -> SceneState {
    SceneState::with_default_moons(&parse_catalog(SOLAR_CATALOG), BeltSpec::default().sample())
}

fn input(step: f32, click: Option<Vec2>) -> FrameInput {
    FrameInput {
        step,
        viewport: Vec2::new(1600.0, 1000.0),
        click,
    }
}

#[test]
fn test_moon_tracks_displaced_parent() {
    let mut scene = solar_scene();
    let earth = scene.planets.iter().position(|p| p.name == "Earth").unwrap();
    scene.planets[earth].angle = 2.0;

    run_frame(
        &mut scene,
        &CameraPose::default(),
        &mut Selection::default(),
        &input(1.0, None),
        &FrameOptions::default(),
    );

    let parent = scene.planets[earth].world;
    for moon in scene.moons.iter().filter(|m| m.parent_name == "Earth") {
        let expected = parent + orbit_offset(moon.angle, moon.orbit_radius);
        assert_relative_eq!(moon.world.x, expected.x, epsilon = 1e-3);
        assert_relative_eq!(moon.world.y, expected.y, epsilon = 1e-3);
    }
}

#[test]
fn test_overlapping_planets_pick_last() {
    let disc = |x: f32| ScreenBody {
        position: Vec2::new(x, 100.0),
        radius: 10.0,
        depth: 1000.0,
        color: Rgb::WHITE,
    };
    let planets = [disc(100.0), disc(105.0)];
    assert_eq!(pick_planet(&planets, Vec2::new(103.0, 100.0)), Some(1));
}

#[test]
fn test_zoom_clamps_to_exactly_max() {
    let mut pose = CameraPose::default();
    for _ in 0..100 {
        pose.zoom_by(0.1);
    }
    assert_eq!(pose.zoom, 5.0);
}

#[test]
fn test_pitch_clamps_to_exactly_limit() {
    let mut pose = CameraPose::default();
    for _ in 0..10 {
        pose.rotate(0.0, 100.0);
    }
    assert_eq!(pose.pitch, 1.5);
    assert_relative_eq!(1000.0 * ROTATE_SENS, 5.0);
}

#[test]
fn test_frame_survives_unresolved_moons() {
    let records: Vec<_> = parse_catalog(SOLAR_CATALOG)
        .into_iter()
        .filter(|r| r.name != "Jupiter")
        .collect();
    let mut moons = orrery::bodies::default_moons();
    moons.push(Moon::new("Vulcan", 10.0, 0.0, 0.1, 2.0, Rgb::WHITE));
    let mut scene = SceneState::new(&records, moons, vec![]);

    let snapshot = run_frame(
        &mut scene,
        &CameraPose::default(),
        &mut Selection::default(),
        &input(1.0, None),
        &FrameOptions::default(),
    );

    assert_eq!(snapshot.moons.len(), scene.moons.len());
    for (moon, body) in scene.moons.iter().zip(&snapshot.moons) {
        assert_eq!(body.is_some(), moon.parent.index().is_some());
    }
    assert_eq!(snapshot.moons.iter().filter(|m| m.is_none()).count(), 5);
}

#[test]
fn test_click_selects_then_empty_click_clears() {
    let mut scene = solar_scene();
    let pose = CameraPose::default();
    let options = FrameOptions::default();
    let mut selection = Selection::default();

    let first = run_frame(&mut scene, &pose, &mut selection, &input(0.0, None), &options);
    let neptune = first.planets.len() - 1;
    let target = first.planets[neptune].position;

    let second = run_frame(&mut scene, &pose, &mut selection, &input(0.0, Some(target)), &options);
    assert_eq!(selection.planet, Some(neptune));
    let highlight = second.highlight.unwrap();
    assert_eq!(highlight.planet, neptune);
    assert_relative_eq!(highlight.radius, second.planets[neptune].radius + options.highlight_margin);

    let third = run_frame(
        &mut scene,
        &pose,
        &mut selection,
        &input(0.0, Some(Vec2::new(-100.0, -100.0))),
        &options,
    );
    assert_eq!(selection.planet, None);
    assert!(third.highlight.is_none());
}

#[test]
fn test_highlight_follows_moving_planet() {
    let mut scene = solar_scene();
    let pose = CameraPose::default();
    let options = FrameOptions::default();
    let mut selection = Selection { planet: Some(0) };

    let a = run_frame(&mut scene, &pose, &mut selection, &input(10.0, None), &options);
    let b = run_frame(&mut scene, &pose, &mut selection, &input(10.0, None), &options);

    assert_eq!(a.highlight.unwrap().center, a.planets[0].position);
    assert_eq!(b.highlight.unwrap().center, b.planets[0].position);
    assert_ne!(a.planets[0].position, b.planets[0].position);
}
