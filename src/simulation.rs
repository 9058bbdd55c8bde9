//! Orbital simulation of the body hierarchy.
//!
//! Every body moves on a circle at constant angular speed. Planets orbit the
//! star, moons orbit their parent planet, asteroids orbit the star. A step
//! advances all angles and rewrites derived world positions, planets first so
//! that moons always build on their parent's current position.

use bevy::prelude::*;

use crate::bodies::{Asteroid, Moon, Planet, Star, default_moons, orbit_offset};
use crate::catalog::PlanetRecord;
use crate::hierarchy::resolve_parents;

/// All simulated bodies. Owned by the frame loop and mutated in place.
#[derive(Resource, Clone, Debug, Default)]
pub struct SceneState {
    pub star: Star,
    pub planets: Vec<Planet>,
    pub moons: Vec<Moon>,
    pub asteroids: Vec<Asteroid>,
}

impl SceneState {
    /// Build a scene and resolve moon parents against `records`.
    pub fn new(records: &[PlanetRecord], moons: Vec<Moon>, asteroids: Vec<Asteroid>) -> Self {
        let mut scene = Self {
            star: Star::default(),
            planets: records.iter().map(Planet::from).collect(),
            moons,
            asteroids,
        };
        resolve_parents(&scene.planets, &mut scene.moons);
        scene
    }

    /// Scene with the default moon table and the given belt.
    pub fn with_default_moons(records: &[PlanetRecord], asteroids: Vec<Asteroid>) -> Self {
        Self::new(records, default_moons(), asteroids)
    }

    /// Replace the planet list and re-resolve every moon parent.
    ///
    /// Planets restart at angle zero; moons and asteroids keep their angles.
    pub fn reload_planets(&mut self, records: &[PlanetRecord]) {
        self.planets = records.iter().map(Planet::from).collect();
        resolve_parents(&self.planets, &mut self.moons);
    }

    /// Advance the whole hierarchy by `step` reference frames.
    pub fn advance(&mut self, step: f32) {
        advance(self, step);
    }

    /// Number of moons whose parent is currently loaded.
    pub fn resolved_moon_count(&self) -> usize {
        self.moons.iter().filter(|m| m.parent.index().is_some()).count()
    }
}

/// Advance every body by `step` reference frames.
///
/// Order matters: all planets are moved before any moon, so each moon is
/// placed relative to its parent's position for this step. Moons with an
/// unresolved parent are left untouched.
pub fn advance(scene: &mut SceneState, step: f32) {
    for planet in &mut scene.planets {
        planet.angle += planet.angular_speed * step;
        planet.update_world();
    }

    let planets = &scene.planets;
    for moon in &mut scene.moons {
        let Some(parent) = moon.parent.index().and_then(|i| planets.get(i)) else {
            continue;
        };
        moon.angle += moon.angular_speed * step;
        moon.world = parent.world + orbit_offset(moon.angle, moon.orbit_radius);
    }

    for asteroid in &mut scene.asteroids {
        asteroid.angle += asteroid.angular_speed * step;
    }
}
