//! UI module providing the egui planet panel.

pub mod icons;
mod planet_panel;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::catalog::PlanetRecord;
use crate::input::PointerOverUi;
use crate::types::Rgb;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AddPlanetForm>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (planet_panel::planet_panel_system, track_pointer_over_ui)
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Record whether egui owns the pointer so viewport input can skip it.
fn track_pointer_over_ui(mut contexts: EguiContexts, mut over_ui: ResMut<PointerOverUi>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    over_ui.0 = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
}

/// Text fields of the "add planet" form.
#[derive(Resource, Debug, Clone)]
pub struct AddPlanetForm {
    pub name: String,
    pub orbit_radius: String,
    pub angular_speed: String,
    pub radius: String,
    pub color: [u8; 3],
    /// Last validation error shown under the form
    pub error: Option<String>,
}

impl Default for AddPlanetForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            orbit_radius: "200".into(),
            angular_speed: "0.01".into(),
            radius: "10".into(),
            color: [100, 150, 255],
            error: None,
        }
    }
}

impl AddPlanetForm {
    /// Parse and validate the form into a record.
    pub fn to_record(&self) -> Result<PlanetRecord, String> {
        let number = |field: &str, text: &str| {
            text.trim()
                .parse::<f32>()
                .map_err(|_| format!("{field} must be a number, got '{}'", text.trim()))
        };

        let record = PlanetRecord {
            name: self.name.trim().to_string(),
            orbit_radius: number("orbit radius", &self.orbit_radius)?,
            angular_speed: number("angular speed", &self.angular_speed)?,
            radius: number("radius", &self.radius)?,
            color: Rgb(self.color),
        };
        record.validate().map_err(|e| e.to_string())?;
        Ok(record)
    }

    /// Clear the name so the next planet starts fresh; numbers are kept.
    pub fn reset_name(&mut self) {
        self.name.clear();
        self.error = None;
    }
}
