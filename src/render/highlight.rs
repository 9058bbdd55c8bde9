//! Selection ring around the selected planet.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::{screen_to_world, viewport_size};
use crate::scene::FrameSnapshot;

/// Draw the highlight ring requested by the snapshot, if any.
pub fn draw_selection_ring(
    mut gizmos: Gizmos,
    snapshot: Res<FrameSnapshot>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(highlight) = snapshot.highlight else {
        return;
    };
    let Some(viewport) = viewport_size(window_query.single().ok()) else {
        return;
    };

    gizmos
        .circle_2d(
            screen_to_world(highlight.center, viewport),
            highlight.radius,
            Color::WHITE,
        )
        .resolution(64);
}
