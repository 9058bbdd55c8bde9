//! Copy snapshot positions and radii onto body visuals.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::{BodyVisual, screen_to_world, viewport_size};
use crate::scene::{FrameSnapshot, ScreenBody};

/// Place each body visual at its projected screen position and size.
///
/// Bodies missing from the snapshot (unresolved moons, stale indices) or
/// with no visible radius are hidden.
pub fn sync_body_visuals(
    snapshot: Res<FrameSnapshot>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut visuals: Query<(&BodyVisual, &mut Transform, &mut Visibility, Option<&mut Sprite>)>,
) {
    let Some(viewport) = viewport_size(window_query.single().ok()) else {
        return;
    };

    for (visual, mut transform, mut visibility, sprite) in &mut visuals {
        let body: Option<ScreenBody> = match *visual {
            BodyVisual::Star => snapshot.star,
            BodyVisual::Planet(i) => snapshot.planets.get(i).copied(),
            BodyVisual::Moon(i) => snapshot.moons.get(i).copied().flatten(),
        };

        let Some(body) = body.filter(|b| b.radius > 0.0) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        *visibility = Visibility::Visible;
        let pos = screen_to_world(body.position, viewport);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;

        match sprite {
            Some(mut sprite) => {
                sprite.custom_size = Some(Vec2::splat(body.radius * 2.0));
                transform.scale = Vec3::ONE;
            }
            None => {
                transform.scale = Vec3::new(body.radius, body.radius, 1.0);
            }
        }
    }
}
