//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Play icon (triangle pointing right)
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Pause icon (two vertical bars)
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Faster icon (double triangle right)
pub const FASTER: &str = egui_phosphor::regular::FAST_FORWARD;
/// Slower icon (double triangle left)
pub const SLOWER: &str = egui_phosphor::regular::REWIND;
/// Plus/add icon
pub const ADD: &str = egui_phosphor::regular::PLUS;
/// Delete/trash icon
pub const DELETE: &str = egui_phosphor::regular::TRASH;
/// Warning triangle for edit errors
pub const WARNING: &str = egui_phosphor::regular::WARNING;

// Celestial body icons
/// Planet/globe icon
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
/// Moon icon
pub const MOON: &str = egui_phosphor::regular::MOON;
