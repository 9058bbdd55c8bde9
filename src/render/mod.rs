//! Rendering systems for the orrery.
//!
//! Rendering never computes positions itself: it reads the screen-space
//! [`FrameSnapshot`](crate::scene::FrameSnapshot) produced each frame and
//! draws it through a plain 2D camera.

pub mod bodies;
mod highlight;
mod orbits;
mod sync;

use bevy::prelude::*;

use self::bodies::BodyVisualPlugin;
use self::highlight::draw_selection_ring;
use self::orbits::{draw_asteroid_belt, draw_orbit_rings};
use self::sync::sync_body_visuals;
use crate::types::FrameSet;

pub use self::bodies::BodyVisual;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_plugins(BodyVisualPlugin)
            // Orbit rings and the belt first so they sit under the highlight
            .add_systems(
                Update,
                (
                    sync_body_visuals,
                    (draw_orbit_rings, draw_asteroid_belt),
                    draw_selection_ring,
                )
                    .chain()
                    .in_set(FrameSet::Render),
            );
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// The star.
    pub const STAR: f32 = 1.0;
    /// Planets.
    pub const PLANET: f32 = 2.0;
    /// Moons, drawn over their planets.
    pub const MOON: f32 = 3.0;
}

/// Orbit ring color.
pub const ORBIT_COLOR: Color = Color::srgb(80.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0);

/// Asteroid point color.
pub const ASTEROID_COLOR: Color = Color::srgb(140.0 / 255.0, 140.0 / 255.0, 140.0 / 255.0);

/// Convert a snapshot position (pixels, origin top-left, y down) into 2D
/// camera world space (origin at the viewport center, y up).
pub fn screen_to_world(screen: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(screen.x - viewport.x * 0.5, viewport.y * 0.5 - screen.y)
}

/// Logical size of the primary window, if there is one.
pub(crate) fn viewport_size(window: Option<&Window>) -> Option<Vec2> {
    window.map(|w| Vec2::new(w.width(), w.height()))
}
