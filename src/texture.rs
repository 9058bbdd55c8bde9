//! Optional planet textures, looked up by planet name.
//!
//! A texture is `<dir>/<lowercased name>.png` under the asset root. Missing
//! or undecodable images are not an error: the planet is drawn in its flat
//! catalog color instead.

use std::path::{Path, PathBuf};

use bevy::prelude::*;

use crate::bodies::Planet;

/// Texture handles aligned with the planet list; `None` means flat color.
#[derive(Resource, Default, Debug)]
pub struct PlanetTextures {
    handles: Vec<Option<Handle<Image>>>,
}

impl PlanetTextures {
    /// Start loading a texture for every planet. Without a directory, every
    /// planet falls back to its color.
    pub fn load(asset_server: &AssetServer, dir: Option<&Path>, planets: &[Planet]) -> Self {
        let handles = planets
            .iter()
            .map(|planet| dir.map(|dir| asset_server.load(texture_path(dir, &planet.name))))
            .collect();
        Self { handles }
    }

    pub fn get(&self, planet: usize) -> Option<&Handle<Image>> {
        self.handles.get(planet).and_then(Option::as_ref)
    }

    /// Drop the texture for `planet`, falling back to its color.
    pub fn mark_failed(&mut self, planet: usize) {
        if let Some(slot) = self.handles.get_mut(planet) {
            *slot = None;
        }
    }

    pub fn textured_count(&self) -> usize {
        self.handles.iter().filter(|h| h.is_some()).count()
    }
}

/// Asset path of the texture for `planet` inside `dir`.
pub fn texture_path(dir: &Path, planet: &str) -> PathBuf {
    dir.join(format!("{}.png", planet.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_path_lowercases_name() {
        assert_eq!(
            texture_path(Path::new("textures"), "Jupiter"),
            PathBuf::from("textures/jupiter.png")
        );
    }

    #[test]
    fn test_empty_textures_fall_back() {
        let mut textures = PlanetTextures::default();
        assert!(textures.get(0).is_none());
        textures.mark_failed(3);
        assert_eq!(textures.textured_count(), 0);
    }
}
