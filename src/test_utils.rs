//! Test utilities for scene, hierarchy and frame tests.
//!
//! Provides fixtures for planet records and a small solar system mirroring
//! the bundled `planets.txt`.

use crate::bodies::{BeltSpec, Moon, Planet, default_moons};
use crate::catalog::PlanetRecord;
use crate::simulation::SceneState;
use crate::types::Rgb;

/// Fixtures for creating test planets, moons and scenes.
pub mod fixtures {
    use super::*;

    /// A gray planet record with radius 8.
    pub fn record(name: &str, orbit_radius: f32, angular_speed: f32) -> PlanetRecord {
        PlanetRecord {
            name: name.to_string(),
            orbit_radius,
            angular_speed,
            radius: 8.0,
            color: Rgb::new(128, 128, 128),
        }
    }

    /// Planets with the given names on orbits 100, 200, ... apart.
    pub fn planets(names: &[&str]) -> Vec<Planet> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Planet::from(&record(name, 100.0 * (i + 1) as f32, 0.01)))
            .collect()
    }

    /// A small moon parented to `parent`, not yet resolved.
    pub fn moon(parent: &str) -> Moon {
        Moon::new(parent, 12.0, 0.0, 0.05, 2.0, Rgb::WHITE)
    }

    /// The eight planets of `planets.txt`.
    pub fn solar_records() -> Vec<PlanetRecord> {
        let planet = |name: &str, orbit, speed, radius, color| PlanetRecord {
            name: name.to_string(),
            orbit_radius: orbit,
            angular_speed: speed,
            radius,
            color,
        };
        vec![
            planet("Mercury", 80.0, 0.040, 4.0, Rgb::new(169, 169, 169)),
            planet("Venus", 130.0, 0.030, 7.0, Rgb::new(230, 190, 120)),
            planet("Earth", 190.0, 0.020, 8.0, Rgb::new(70, 130, 255)),
            planet("Mars", 260.0, 0.016, 6.0, Rgb::new(200, 80, 40)),
            planet("Jupiter", 580.0, 0.008, 18.0, Rgb::new(210, 170, 120)),
            planet("Saturn", 700.0, 0.006, 15.0, Rgb::new(230, 210, 150)),
            planet("Uranus", 800.0, 0.004, 11.0, Rgb::new(150, 220, 230)),
            planet("Neptune", 880.0, 0.003, 11.0, Rgb::new(70, 90, 220)),
        ]
    }

    /// Solar records, the default moons and the default belt.
    pub fn solar_scene() -> SceneState {
        SceneState::with_default_moons(&solar_records(), BeltSpec::default().sample())
    }
}
