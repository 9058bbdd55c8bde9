//! Perspective projection of the orbital plane onto the screen.
//!
//! World points live in the X/Z orbital plane (stored as `Vec2 { x: X, y: Z }`).
//! The camera orbits the origin: the plane is rotated by yaw around the
//! vertical axis, then by pitch around the horizontal axis, pushed back by a
//! fixed camera distance, and perspective-divided into screen pixels.
//!
//! Everything here is pure; the same inputs always give the same output.

use bevy::math::Vec2;

/// Smallest depth a projected point can have.
///
/// Points at or behind the camera are clamped here instead of dividing by
/// zero or flipping sign.
pub const MIN_DEPTH: f32 = 1.0;

/// A projected point: screen position in pixels plus camera depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    pub depth: f32,
}

/// Camera parameters needed to project a point, with the trigonometry
/// precomputed once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub cos_yaw: f32,
    pub sin_yaw: f32,
    pub cos_pitch: f32,
    pub sin_pitch: f32,
    /// Distance from the camera to the origin along the view axis
    pub camera_distance: f32,
    /// Effective field-of-view scale (base fov × zoom)
    pub fov: f32,
    /// Screen center in pixels
    pub center: Vec2,
    /// Screen-space pan offset in pixels
    pub pan: Vec2,
}

impl ViewTransform {
    pub fn new(
        yaw: f32,
        pitch: f32,
        camera_distance: f32,
        fov: f32,
        center: Vec2,
        pan: Vec2,
    ) -> Self {
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();
        Self {
            cos_yaw,
            sin_yaw,
            cos_pitch,
            sin_pitch,
            camera_distance,
            fov,
            center,
            pan,
        }
    }

    /// Project an orbital-plane point to screen space.
    pub fn project(&self, world: Vec2) -> Projected {
        project_xz(world, self)
    }

    /// On-screen radius of a body with `base_radius` seen at `depth`.
    pub fn screen_radius(&self, base_radius: f32, depth: f32) -> f32 {
        screen_radius(base_radius, self.fov, depth)
    }
}

/// Project the orbital-plane point `world` (X, Z) through `view`.
pub fn project_xz(world: Vec2, view: &ViewTransform) -> Projected {
    let (wx, wz) = (world.x, world.y);

    // Yaw around the vertical axis
    let x1 = wx * view.cos_yaw + wz * view.sin_yaw;
    let z1 = -wx * view.sin_yaw + wz * view.cos_yaw;

    // Pitch around the horizontal axis; the plane has no height before rotation
    let y2 = -z1 * view.sin_pitch;
    let z2 = z1 * view.cos_pitch;

    let depth = (z2 + view.camera_distance).max(MIN_DEPTH);
    let inv = view.fov / depth;

    Projected {
        screen: view.center + view.pan + Vec2::new(x1, y2) * inv,
        depth,
    }
}

/// Perspective-scaled radius: `base_radius * fov / depth`.
pub fn screen_radius(base_radius: f32, fov: f32, depth: f32) -> f32 {
    base_radius * fov / depth.max(MIN_DEPTH)
}
