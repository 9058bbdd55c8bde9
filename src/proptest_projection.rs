//! Property-based tests for projection, picking and parent resolution.

use bevy::math::Vec2;
use proptest::prelude::*;

use crate::camera::{CameraPose, MAX_ZOOM, MIN_ZOOM, PITCH_LIMIT};
use crate::hierarchy::resolve_parents;
use crate::picking::pick_planet;
use crate::projection::{MIN_DEPTH, ViewTransform, screen_radius};
use crate::scene::ScreenBody;
use crate::test_utils::fixtures;
use crate::types::Rgb;

fn view(yaw: f32, pitch: f32, zoom: f32) -> ViewTransform {
    let pose = CameraPose {
        yaw,
        pitch,
        pan: Vec2::ZERO,
        zoom,
    };
    pose.view_transform(Vec2::new(1600.0, 1000.0))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Depth is clamped for any camera distance, even points behind the camera.
    #[test]
    fn prop_depth_never_below_minimum(
        x in -1.0e5f32..1.0e5,
        z in -1.0e5f32..1.0e5,
        yaw in -10.0f32..10.0,
        pitch in -PITCH_LIMIT..PITCH_LIMIT,
        camera_distance in -3000.0f32..3000.0,
        fov in 100.0f32..4000.0,
    ) {
        let view = ViewTransform::new(
            yaw,
            pitch,
            camera_distance,
            fov,
            Vec2::new(800.0, 500.0),
            Vec2::ZERO,
        );
        let p = view.project(Vec2::new(x, z));
        prop_assert!(p.depth >= MIN_DEPTH);
        prop_assert!(p.screen.is_finite());
    }

    /// Zero and negative camera distances still clamp.
    #[test]
    fn prop_depth_clamps_at_degenerate_distance(
        x in -1.0e4f32..1.0e4,
        z in -1.0e4f32..1.0e4,
        camera_distance in prop::sample::select(vec![0.0f32, -0.0, -1.0, -1500.0]),
    ) {
        let view = ViewTransform::new(0.5, 0.5, camera_distance, 560.0, Vec2::ZERO, Vec2::ZERO);
        prop_assert!(view.project(Vec2::new(x, z)).depth >= MIN_DEPTH);
    }

    /// Farther bodies are drawn smaller.
    #[test]
    fn prop_screen_radius_decreases_with_depth(
        base in 0.1f32..100.0,
        fov in 100.0f32..4000.0,
        near in 1.0f32..5000.0,
        gap in 1.0f32..5000.0,
    ) {
        prop_assert!(screen_radius(base, fov, near) > screen_radius(base, fov, near + gap));
    }

    /// Projection is a pure function of its inputs.
    #[test]
    fn prop_projection_is_deterministic(
        x in -2000.0f32..2000.0,
        z in -2000.0f32..2000.0,
        yaw in -10.0f32..10.0,
        pitch in -PITCH_LIMIT..PITCH_LIMIT,
        zoom in MIN_ZOOM..MAX_ZOOM,
    ) {
        let v = view(yaw, pitch, zoom);
        prop_assert_eq!(v.project(Vec2::new(x, z)), v.project(Vec2::new(x, z)));
    }

    /// Whatever the zoom and pitch input, the pose stays in range.
    #[test]
    fn prop_pose_stays_clamped(
        zooms in prop::collection::vec(-3.0f32..3.0, 0..40),
        drags in prop::collection::vec(-2000.0f32..2000.0, 0..40),
    ) {
        let mut pose = CameraPose::default();
        for dz in zooms {
            pose.zoom_by(dz);
        }
        for dy in drags {
            pose.rotate(0.0, dy);
        }
        prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&pose.zoom));
        prop_assert!(pose.pitch.abs() <= PITCH_LIMIT);
    }

    /// A hit is always a disc containing the point, and no later disc does.
    #[test]
    fn prop_pick_returns_last_containing_disc(
        discs in prop::collection::vec((0.0f32..200.0, 0.0f32..200.0, 0.0f32..40.0), 0..12),
        px in 0.0f32..200.0,
        py in 0.0f32..200.0,
    ) {
        let bodies: Vec<ScreenBody> = discs
            .iter()
            .map(|&(x, y, r)| ScreenBody {
                position: Vec2::new(x, y),
                radius: r,
                depth: 1000.0,
                color: Rgb::WHITE,
            })
            .collect();
        let point = Vec2::new(px, py);
        let contains = |b: &ScreenBody| b.radius > 0.0 && b.position.distance_squared(point) <= b.radius * b.radius;

        match pick_planet(&bodies, point) {
            Some(i) => {
                prop_assert!(contains(&bodies[i]));
                prop_assert!(!bodies[i + 1..].iter().any(contains));
            }
            None => prop_assert!(!bodies.iter().any(contains)),
        }
    }

    /// Moons always attach to the first planet carrying their parent's name.
    #[test]
    fn prop_parent_is_first_name_match(
        names in prop::collection::vec(prop::sample::select(vec!["A", "B", "C", "D"]), 0..10),
        parent in prop::sample::select(vec!["A", "B", "C", "D", "E"]),
    ) {
        let planets = fixtures::planets(&names);
        let mut moons = vec![fixtures::moon(parent)];
        resolve_parents(&planets, &mut moons);
        prop_assert_eq!(moons[0].parent.index(), names.iter().position(|n| *n == parent));
    }
}
