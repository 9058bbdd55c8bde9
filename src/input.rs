//! Input handling for keyboard shortcuts and click selection.
//!
//! Provides keyboard controls for pause, time scale and camera reset, and
//! records viewport clicks for the hit-tester.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::CameraPose;
use crate::types::{FrameSet, SimulationClock};

/// Whether the pointer is over an egui panel.
///
/// Updated by the UI pass; viewport input is ignored while set.
#[derive(Resource, Default, Debug)]
pub struct PointerOverUi(pub bool);

/// Viewport click waiting for this frame's hit-test, in screen pixels.
#[derive(Resource, Default, Debug)]
pub struct PendingClick(pub Option<Vec2>);

/// Plugin providing keyboard shortcuts and click capture.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerOverUi>()
            .init_resource::<PendingClick>()
            .add_systems(
                Update,
                (keyboard_shortcuts, capture_click).in_set(FrameSet::Input),
            );
    }
}

/// Handle keyboard shortcuts for simulation and camera control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
    mut pose: ResMut<CameraPose>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.toggle_pause();
        info!("Simulation {}", if clock.paused { "paused" } else { "running" });
    }

    // [ and ]: halve / double simulation speed
    if keys.just_pressed(KeyCode::BracketLeft) {
        clock.slower();
        info!("Time scale: {}x", clock.scale);
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        clock.faster();
        info!("Time scale: {}x", clock.scale);
    }
    if keys.just_pressed(KeyCode::Digit1) {
        clock.scale = 1.0;
        info!("Time scale: 1x");
    }

    // R: reset camera
    if keys.just_pressed(KeyCode::KeyR) {
        pose.reset();
        info!("Camera reset");
    }
}

/// Buttons whose press runs the hit-test.
const SELECT_BUTTONS: [MouseButton; 2] = [MouseButton::Left, MouseButton::Right];

/// Whether a selecting button went down this frame.
fn select_pressed(mouse: &ButtonInput<MouseButton>) -> bool {
    mouse.any_just_pressed(SELECT_BUTTONS)
}

/// Record a left or right click in the viewport for the hit-tester.
fn capture_click(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    over_ui: Res<PointerOverUi>,
    mut click: ResMut<PendingClick>,
) {
    if !select_pressed(&mouse) || over_ui.0 {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };

    if let Some(cursor_pos) = window.cursor_position() {
        click.0 = Some(cursor_pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_and_right_press_select() {
        for button in [MouseButton::Left, MouseButton::Right] {
            let mut mouse = ButtonInput::<MouseButton>::default();
            mouse.press(button);
            assert!(select_pressed(&mouse), "{button:?}");
        }
    }

    #[test]
    fn test_middle_press_and_held_buttons_do_not_select() {
        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Middle);
        assert!(!select_pressed(&mouse));

        mouse.press(MouseButton::Left);
        mouse.clear();
        assert!(mouse.pressed(MouseButton::Left));
        assert!(!select_pressed(&mouse));
    }
}
