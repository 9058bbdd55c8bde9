//! Camera system for the orrery.
//!
//! The orbit camera is not a Bevy transform: it is a small pose (yaw, pitch,
//! pan, zoom) fed to the projection engine every frame. Bevy only gets a
//! plain 2D camera to draw the resulting screen-space snapshot.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, MouseWheel},
    prelude::*,
};

use crate::input::PointerOverUi;
use crate::projection::ViewTransform;
use crate::types::FrameSet;

/// Perspective strength at zoom 1.0.
pub const BASE_FOV: f32 = 800.0;

/// Distance from the camera to the star along the view axis.
pub const CAMERA_DISTANCE: f32 = 1500.0;

/// Minimum zoom factor (furthest out).
pub const MIN_ZOOM: f32 = 0.2;

/// Maximum zoom factor (closest in).
pub const MAX_ZOOM: f32 = 5.0;

/// Zoom change per scroll notch.
pub const ZOOM_STEP: f32 = 0.1;

/// Pitch limit in radians, either side of edge-on.
pub const PITCH_LIMIT: f32 = 1.5;

/// Radians of rotation per pixel of drag.
pub const ROTATE_SENS: f32 = 0.005;

/// Pixels of pan per pixel of drag.
pub const PAN_SENS: f32 = 1.0;

/// Zoom factor on startup and after reset.
pub const DEFAULT_ZOOM: f32 = 0.7;

/// Yaw on startup and after reset.
pub const DEFAULT_YAW: f32 = 0.5;

/// Pitch on startup and after reset.
pub const DEFAULT_PITCH: f32 = 0.5;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource holding the orbit camera pose.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub yaw: f32,
    pub pitch: f32,
    /// Screen-space pan offset in pixels
    pub pan: Vec2,
    pub zoom: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            pan: Vec2::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl CameraPose {
    /// Add `delta` to the zoom factor and clamp to [`MIN_ZOOM`, `MAX_ZOOM`].
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Orbit the camera by a pointer drag of (`dx`, `dy`) pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * ROTATE_SENS;
        self.pitch = (self.pitch + dy * ROTATE_SENS).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Shift the image by a pointer drag of (`dx`, `dy`) pixels.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.pan += Vec2::new(dx, dy) * PAN_SENS;
    }

    /// Effective field-of-view scale.
    pub fn fov(&self) -> f32 {
        BASE_FOV * self.zoom
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Projection parameters for a viewport of `viewport` pixels.
    pub fn view_transform(&self, viewport: Vec2) -> ViewTransform {
        ViewTransform::new(
            self.yaw,
            self.pitch,
            CAMERA_DISTANCE,
            self.fov(),
            viewport * 0.5,
            self.pan,
        )
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraPose>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_zoom, camera_drag).in_set(FrameSet::Input));
    }
}

/// Spawn the 2D camera used to draw the screen-space snapshot.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Handle mouse scroll wheel for zoom: one step per wheel message.
fn camera_zoom(
    mut wheel: MessageReader<MouseWheel>,
    over_ui: Res<PointerOverUi>,
    mut pose: ResMut<CameraPose>,
) {
    if over_ui.0 {
        wheel.clear();
        return;
    }

    for event in wheel.read() {
        if event.y != 0.0 {
            pose.zoom_by(ZOOM_STEP.copysign(event.y));
        }
    }
}

/// Left drag orbits the camera, right drag pans it.
fn camera_drag(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    over_ui: Res<PointerOverUi>,
    mut pose: ResMut<CameraPose>,
) {
    let delta = mouse_motion.delta;
    if delta == Vec2::ZERO || over_ui.0 {
        return;
    }

    if mouse_buttons.pressed(MouseButton::Left) {
        pose.rotate(delta.x, delta.y);
    }
    if mouse_buttons.pressed(MouseButton::Right) {
        pose.pan(delta.x, delta.y);
    }
}
