//! Orbit rings and the asteroid belt, drawn with gizmos.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::{ASTEROID_COLOR, ORBIT_COLOR, screen_to_world, viewport_size};
use crate::scene::FrameSnapshot;

/// Radius of an asteroid point in pixels.
const ASTEROID_POINT_RADIUS: f32 = 0.75;

/// Draw each planet's projected orbit as a closed polyline.
pub fn draw_orbit_rings(
    mut gizmos: Gizmos,
    snapshot: Res<FrameSnapshot>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(viewport) = viewport_size(window_query.single().ok()) else {
        return;
    };

    for ring in &snapshot.orbit_rings {
        gizmos.linestrip_2d(
            ring.iter().map(|&p| screen_to_world(p, viewport)),
            ORBIT_COLOR,
        );
    }
}

/// Draw one small point per asteroid.
pub fn draw_asteroid_belt(
    mut gizmos: Gizmos,
    snapshot: Res<FrameSnapshot>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(viewport) = viewport_size(window_query.single().ok()) else {
        return;
    };

    for &point in &snapshot.asteroids {
        gizmos.circle_2d(
            screen_to_world(point, viewport),
            ASTEROID_POINT_RADIUS,
            ASTEROID_COLOR,
        );
    }
}
