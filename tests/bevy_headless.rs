//! Headless Bevy integration tests.
//!
//! These tests run the scene plugin without a window or GPU.

mod common;

use bevy::prelude::*;
use orrery::input::PendingClick;
use orrery::picking::Selection;
use orrery::scene::{CatalogEdit, EditStatus, FrameSnapshot};
use orrery::simulation::SceneState;
use orrery::time::FrameStep;

use common::{SOLAR_CATALOG, headless_app, write_catalog, xen};

#[test]
fn test_startup_loads_catalog_and_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = headless_app(write_catalog(dir.path(), SOLAR_CATALOG));

    app.update();

    let scene = app.world().resource::<SceneState>();
    assert_eq!(scene.planets.len(), 8);
    assert_eq!(scene.resolved_moon_count(), scene.moons.len());

    let snapshot = app.world().resource::<FrameSnapshot>();
    assert_eq!(snapshot.planets.len(), 8);
    // No window: the configured size stands in for the viewport
    let star = snapshot.star.unwrap();
    assert_eq!(star.position, Vec2::new(800.0, 500.0));
    assert!(app.should_exit().is_none());
}

#[test]
fn test_empty_catalog_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = headless_app(write_catalog(dir.path(), "# no planets\n"));

    app.update();

    assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
}

#[test]
fn test_zero_step_holds_bodies_still() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = headless_app(write_catalog(dir.path(), SOLAR_CATALOG));
    app.update();
    let before = app.world().resource::<SceneState>().planets.clone();

    app.update();
    assert_eq!(app.world().resource::<SceneState>().planets, before);

    app.world_mut().resource_mut::<FrameStep>().0 = 3.0;
    app.update();
    let after = &app.world().resource::<SceneState>().planets;
    for (a, b) in after.iter().zip(&before) {
        assert!((a.angle - (b.angle + 3.0 * b.angular_speed)).abs() < 1e-5);
    }
}

#[test]
fn test_pending_click_selects_planet() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = headless_app(write_catalog(dir.path(), SOLAR_CATALOG));
    app.update();

    let target = app.world().resource::<FrameSnapshot>().planets[7].position;
    app.world_mut().resource_mut::<PendingClick>().0 = Some(target);
    app.update();

    assert_eq!(app.world().resource::<Selection>().planet, Some(7));
    assert!(app.world().resource::<PendingClick>().0.is_none());
    assert!(app.world().resource::<FrameSnapshot>().highlight.is_some());
}

#[test]
fn test_catalog_edit_reloads_scene() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), SOLAR_CATALOG);
    let mut app = headless_app(path.clone());
    app.update();
    app.world_mut().resource_mut::<Selection>().planet = Some(2);

    app.world_mut().write_message(CatalogEdit::Append(xen()));
    app.update();

    let scene = app.world().resource::<SceneState>();
    assert_eq!(scene.planets.len(), 9);
    assert_eq!(scene.planets[8].name, "Xen");
    assert_eq!(app.world().resource::<Selection>().planet, None);
    assert!(app.world().resource::<EditStatus>().last_error.is_none());
    assert!(std::fs::read_to_string(&path).unwrap().contains("Xen"));
}

#[test]
fn test_failed_edit_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = headless_app(write_catalog(dir.path(), SOLAR_CATALOG));
    app.update();

    app.world_mut().write_message(CatalogEdit::Remove(42));
    app.update();

    assert_eq!(app.world().resource::<SceneState>().planets.len(), 8);
    let status = app.world().resource::<EditStatus>();
    assert!(status.last_error.as_deref().unwrap().contains("42"));
}
