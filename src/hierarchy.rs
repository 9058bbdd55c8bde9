//! Moon → planet parent resolution.

use std::collections::HashMap;

use bevy::log::warn;

use crate::bodies::{Moon, ParentRef, Planet};

/// Map each planet name to the index of its first occurrence.
///
/// Duplicate names keep the earliest index.
pub fn name_index(planets: &[Planet]) -> HashMap<&str, usize> {
    let mut index = HashMap::with_capacity(planets.len());
    for (i, planet) in planets.iter().enumerate() {
        index.entry(planet.name.as_str()).or_insert(i);
    }
    index
}

/// Resolve every moon's parent name against `planets`.
///
/// Must be re-run whenever the planet list changes, since indices shift.
/// Moons whose parent is missing are marked [`ParentRef::Unresolved`] and
/// logged. Returns the number of unresolved moons.
pub fn resolve_parents(planets: &[Planet], moons: &mut [Moon]) -> usize {
    let index = name_index(planets);
    let mut unresolved = 0;

    for moon in moons.iter_mut() {
        moon.parent = match index.get(moon.parent_name.as_str()) {
            Some(&i) => ParentRef::Resolved(i),
            None => {
                warn!(
                    "Moon with parent '{}' has no matching planet; it will not move",
                    moon.parent_name
                );
                unresolved += 1;
                ParentRef::Unresolved
            }
        };
    }

    unresolved
}
