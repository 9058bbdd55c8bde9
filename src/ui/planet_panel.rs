//! Side panel listing planets, with selection, removal and an "add" form.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::Planet;
use crate::picking::Selection;
use crate::scene::{CatalogEdit, EditStatus, FrameSnapshot};
use crate::simulation::SceneState;
use crate::types::{Rgb, SimulationClock};

use super::AddPlanetForm;
use super::icons;

/// Colors for the panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 230);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
    pub const ERROR: Color32 = Color32::from_rgb(235, 100, 100);
    pub const MUTED: Color32 = Color32::from_rgb(150, 150, 160);
}

fn swatch(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r(), color.g(), color.b())
}

/// System that renders the planet panel.
#[allow(clippy::too_many_arguments)]
pub fn planet_panel_system(
    mut contexts: EguiContexts,
    scene: Res<SceneState>,
    snapshot: Res<FrameSnapshot>,
    status: Res<EditStatus>,
    mut selection: ResMut<Selection>,
    mut clock: ResMut<SimulationClock>,
    mut form: ResMut<AddPlanetForm>,
    mut edits: MessageWriter<CatalogEdit>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("planet_panel")
        .resizable(false)
        .default_width(240.0)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            render_clock(ui, &mut clock);
            ui.separator();

            ui.heading(format!("{} Planets", icons::PLANET));
            render_planet_list(ui, &scene.planets, &mut selection);
            ui.separator();

            if let Some(index) = selection.planet
                && let Some(planet) = scene.planets.get(index)
            {
                render_selected(ui, &scene, &snapshot, index, planet, &mut edits);
                ui.separator();
            }

            render_add_form(ui, &mut form, &mut edits);

            if let Some(error) = &status.last_error {
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!("{} {error}", icons::WARNING))
                        .color(colors::ERROR),
                );
            }
        });
}

/// Play/pause toggle and time scale.
fn render_clock(ui: &mut egui::Ui, clock: &mut SimulationClock) {
    ui.horizontal(|ui| {
        let (icon, color, hint) = if clock.paused {
            (icons::PLAY, colors::PLAY_ICON, "Play (Space)")
        } else {
            (icons::PAUSE, colors::PAUSE_ICON, "Pause (Space)")
        };
        if ui
            .button(egui::RichText::new(icon).color(color).size(18.0))
            .on_hover_text(hint)
            .clicked()
        {
            clock.toggle_pause();
        }

        if ui.button(icons::SLOWER).on_hover_text("Slower ([)").clicked() {
            clock.slower();
        }
        ui.label(egui::RichText::new(format!("{}x", clock.scale)).monospace());
        if ui.button(icons::FASTER).on_hover_text("Faster (])").clicked() {
            clock.faster();
        }

        ui.separator();
        ui.label(
            egui::RichText::new(format!("frame {:.0}", clock.elapsed_frames))
                .monospace()
                .color(colors::MUTED),
        )
        .on_hover_text("Reference frames simulated since startup");
    });
}

fn render_planet_list(ui: &mut egui::Ui, planets: &[Planet], selection: &mut Selection) {
    egui::ScrollArea::vertical()
        .max_height(260.0)
        .show(ui, |ui| {
            for (i, planet) in planets.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("●").color(swatch(planet.color)));
                    let selected = selection.planet == Some(i);
                    if ui.selectable_label(selected, &planet.name).clicked() {
                        selection.planet = if selected { None } else { Some(i) };
                    }
                });
            }
        });
}

fn render_selected(
    ui: &mut egui::Ui,
    scene: &SceneState,
    snapshot: &FrameSnapshot,
    index: usize,
    planet: &Planet,
    edits: &mut MessageWriter<CatalogEdit>,
) {
    ui.heading(&planet.name);
    let moons = scene
        .moons
        .iter()
        .filter(|m| m.parent.index() == Some(index))
        .count();

    egui::Grid::new("planet_info").num_columns(2).show(ui, |ui| {
        ui.label("Orbit radius");
        ui.label(format!("{:.1}", planet.orbit_radius));
        ui.end_row();

        ui.label("Angular speed");
        ui.label(format!("{:.4} rad/frame", planet.angular_speed));
        ui.end_row();

        ui.label("Radius");
        ui.label(format!("{:.1}", planet.radius));
        ui.end_row();

        if let Some(body) = snapshot.planets.get(index) {
            ui.label("On screen");
            ui.label(format!("{:.1} px", body.radius));
            ui.end_row();
        }

        ui.label(format!("{} Moons", icons::MOON));
        ui.label(moons.to_string());
        ui.end_row();
    });

    ui.add_space(4.0);
    if ui
        .button(format!("{} Remove", icons::DELETE))
        .on_hover_text("Delete this planet from the catalog")
        .clicked()
    {
        edits.write(CatalogEdit::Remove(index));
    }
}

fn render_add_form(
    ui: &mut egui::Ui,
    form: &mut AddPlanetForm,
    edits: &mut MessageWriter<CatalogEdit>,
) {
    ui.label(egui::RichText::new(format!("{} Add planet", icons::ADD)).strong());

    egui::Grid::new("add_planet").num_columns(2).show(ui, |ui| {
        ui.label("Name");
        ui.text_edit_singleline(&mut form.name);
        ui.end_row();

        ui.label("Orbit radius");
        ui.text_edit_singleline(&mut form.orbit_radius);
        ui.end_row();

        ui.label("Angular speed");
        ui.text_edit_singleline(&mut form.angular_speed);
        ui.end_row();

        ui.label("Radius");
        ui.text_edit_singleline(&mut form.radius);
        ui.end_row();

        ui.label("Color");
        ui.color_edit_button_srgb(&mut form.color);
        ui.end_row();
    });

    if ui.button("Add").clicked() {
        match form.to_record() {
            Ok(record) => {
                edits.write(CatalogEdit::Append(record));
                form.reset_name();
            }
            Err(e) => form.error = Some(e),
        }
    }

    if let Some(error) = &form.error {
        ui.label(egui::RichText::new(error).color(colors::ERROR));
    } else {
        ui.label(
            egui::RichText::new("Names are one word; speed is radians per frame")
                .small()
                .color(colors::MUTED),
        );
    }
}
