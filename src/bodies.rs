//! Body data for the orrery: star, planets, moons and the asteroid belt.
//!
//! All positions are in the X/Z orbital plane, stored as `Vec2 { x: X, y: Z }`.
//! World positions of planets and moons are derived state, rewritten by the
//! simulator every step.

use std::f32::consts::TAU;
use std::ops::Range;

use bevy::math::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalog::PlanetRecord;
use crate::types::Rgb;

/// The central star. Fixed at the origin, never moves.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub radius: f32,
    pub color: Rgb,
}

impl Default for Star {
    fn default() -> Self {
        Self {
            radius: 30.0,
            color: Rgb::new(255, 255, 0),
        }
    }
}

/// A planet on a circular orbit around the star.
#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    /// Name, used as the key for moon parent resolution
    pub name: String,
    /// Distance from the star in world units
    pub orbit_radius: f32,
    /// Radians per reference frame; negative is retrograde
    pub angular_speed: f32,
    /// Current angle in radians, accumulated without wraparound
    pub angle: f32,
    /// World position, derived from angle and orbit radius
    pub world: Vec2,
    /// Render radius before perspective
    pub radius: f32,
    pub color: Rgb,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        orbit_radius: f32,
        angular_speed: f32,
        radius: f32,
        color: Rgb,
    ) -> Self {
        let mut planet = Self {
            name: name.into(),
            orbit_radius,
            angular_speed,
            angle: 0.0,
            world: Vec2::ZERO,
            radius,
            color,
        };
        planet.update_world();
        planet
    }

    /// Recompute the world position from the current angle.
    pub fn update_world(&mut self) {
        self.world = orbit_offset(self.angle, self.orbit_radius);
    }
}

impl From<&PlanetRecord> for Planet {
    fn from(record: &PlanetRecord) -> Self {
        Planet::new(
            record.name.clone(),
            record.orbit_radius,
            record.angular_speed,
            record.radius,
            record.color,
        )
    }
}

/// Where a moon's parent planet is in the current planet list.
///
/// Moons hold their parent by name; the index is a weak back-reference that
/// is only valid for the planet list it was resolved against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParentRef {
    /// Index into the planet list
    Resolved(usize),
    /// No planet with the parent's name is loaded
    #[default]
    Unresolved,
}

impl ParentRef {
    pub fn index(self) -> Option<usize> {
        match self {
            ParentRef::Resolved(i) => Some(i),
            ParentRef::Unresolved => None,
        }
    }
}

/// A moon orbiting a planet.
#[derive(Clone, Debug, PartialEq)]
pub struct Moon {
    /// Name of the planet this moon orbits
    pub parent_name: String,
    /// Resolved parent, see [`crate::hierarchy::resolve_parents`]
    pub parent: ParentRef,
    /// Distance from the parent planet in world units
    pub orbit_radius: f32,
    /// Radians per reference frame
    pub angular_speed: f32,
    pub angle: f32,
    /// World position: parent position plus orbital offset
    pub world: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

impl Moon {
    pub fn new(
        parent_name: impl Into<String>,
        orbit_radius: f32,
        angle: f32,
        angular_speed: f32,
        radius: f32,
        color: Rgb,
    ) -> Self {
        Self {
            parent_name: parent_name.into(),
            parent: ParentRef::Unresolved,
            orbit_radius,
            angular_speed,
            angle,
            world: Vec2::ZERO,
            radius,
            color,
        }
    }
}

/// A belt asteroid. Only the angle changes between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Asteroid {
    pub orbit_radius: f32,
    pub angular_speed: f32,
    pub angle: f32,
}

impl Asteroid {
    /// World position at the current angle, computed on demand.
    pub fn world(&self) -> Vec2 {
        orbit_offset(self.angle, self.orbit_radius)
    }
}

/// Parameters for sampling the asteroid belt.
#[derive(Clone, Debug, PartialEq)]
pub struct BeltSpec {
    pub count: usize,
    /// Orbit radius band (inner..outer)
    pub radius: Range<f32>,
    /// Angular speed band in radians per reference frame
    pub speed: Range<f32>,
    pub seed: u64,
}

impl Default for BeltSpec {
    fn default() -> Self {
        Self {
            count: 150,
            radius: 400.0..500.0,
            speed: 0.010..0.015,
            seed: 43,
        }
    }
}

impl BeltSpec {
    /// Sample the belt. Deterministic for a given seed.
    pub fn sample(&self) -> Vec<Asteroid> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        (0..self.count)
            .map(|_| {
                let orbit_radius = lerp(&self.radius, rng.random::<f32>());
                let angle = rng.random::<f32>() * TAU;
                let angular_speed = lerp(&self.speed, rng.random::<f32>());
                Asteroid {
                    orbit_radius,
                    angular_speed,
                    angle,
                }
            })
            .collect()
    }
}

fn lerp(range: &Range<f32>, t: f32) -> f32 {
    range.start + (range.end - range.start) * t
}

/// Offset on a circle of `radius` at `angle` in the orbital plane.
pub fn orbit_offset(angle: f32, radius: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(cos * radius, sin * radius)
}

/// The moons shipped with the orrery, parented by planet name.
pub fn default_moons() -> Vec<Moon> {
    vec![
        // Earth
        Moon::new("Earth", 18.0, 0.0, 0.08, 3.0, Rgb::new(210, 210, 210)),
        // Mars
        Moon::new("Mars", 10.0, 1.0, 0.10, 2.0, Rgb::new(200, 200, 200)),
        Moon::new("Mars", 15.0, 2.0, 0.07, 2.0, Rgb::new(160, 160, 160)),
        // Jupiter
        Moon::new("Jupiter", 30.0, 0.0, 0.09, 4.0, Rgb::new(255, 200, 180)),
        Moon::new("Jupiter", 40.0, 1.0, 0.07, 3.0, Rgb::new(180, 220, 255)),
        Moon::new("Jupiter", 52.0, 2.0, 0.05, 5.0, Rgb::new(220, 220, 220)),
        Moon::new("Jupiter", 65.0, 3.0, 0.04, 4.0, Rgb::new(200, 200, 200)),
        // Saturn
        Moon::new("Saturn", 28.0, 0.5, 0.06, 4.0, Rgb::new(230, 210, 160)),
        // Ice giants
        Moon::new("Uranus", 24.0, 1.2, 0.06, 3.0, Rgb::new(200, 220, 255)),
        Moon::new("Neptune", 22.0, 2.0, 0.06, 3.0, Rgb::new(180, 200, 255)),
    ]
}
