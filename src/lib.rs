//! Orrery - interactive solar-system visualizer
//!
//! A library crate providing the scene model, projection and picking
//! pipeline, and the Bevy plugins that drive them.

pub mod bodies;
pub mod camera;
pub mod catalog;
pub mod config;
pub mod hierarchy;
pub mod input;
pub mod picking;
pub mod projection;
pub mod render;
pub mod scene;
pub mod simulation;
pub mod texture;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod proptest_projection;
