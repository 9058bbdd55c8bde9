//! Screen-space click selection of planets.

use bevy::prelude::*;

use crate::scene::ScreenBody;

/// Resource tracking the selected planet.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Index into the planet list, if any.
    pub planet: Option<usize>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.planet = None;
    }
}

/// Find the planet under `point`, using last frame's projected discs.
///
/// Planets are tested in storage order and a planet matches when the click
/// falls inside its screen radius. When discs overlap, the last match wins;
/// depth is not considered. `None` means the click hit empty space.
pub fn pick_planet(planets: &[ScreenBody], point: Vec2) -> Option<usize> {
    let mut picked = None;
    for (i, body) in planets.iter().enumerate() {
        let r = body.radius;
        if r > 0.0 && body.position.distance_squared(point) <= r * r {
            picked = Some(i);
        }
    }
    picked
}
