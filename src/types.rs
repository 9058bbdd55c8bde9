//! Shared value types and constants for the orrery.

use bevy::prelude::*;

/// Frame rate that catalog angular speeds are expressed against.
///
/// Speeds are stored as radians per displayed frame at this rate; the clock
/// converts wall-clock time into a (fractional) number of these frames.
pub const REFERENCE_FPS: f32 = 60.0;

/// Slowest selectable time scale.
pub const MIN_TIME_SCALE: f32 = 0.125;

/// Fastest selectable time scale.
pub const MAX_TIME_SCALE: f32 = 16.0;

/// System sets ordering one frame of the orrery.
///
/// Input mutates the camera pose and records clicks, Step runs the
/// simulate → project → pick pipeline, Render consumes the snapshot.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Pointer and keyboard handling
    Input,
    /// Simulation, projection and hit-testing
    Step,
    /// Drawing from the frame snapshot
    Render,
}

/// 8-bit RGB color, as stored in the planet catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn r(self) -> u8 {
        self.0[0]
    }

    pub fn g(self) -> u8 {
        self.0[1]
    }

    pub fn b(self) -> u8 {
        self.0[2]
    }

    /// Convert to a Bevy color (sRGB).
    pub fn to_color(self) -> Color {
        Color::srgb_u8(self.0[0], self.0[1], self.0[2])
    }
}

/// Simulation clock resource: pause state and time scale.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Time scale multiplier (1.0 = one reference frame per 1/60 s)
    pub scale: f32,
    /// Whether simulation is paused
    pub paused: bool,
    /// Total reference frames simulated since load
    pub elapsed_frames: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            scale: 1.0,
            paused: false,
            elapsed_frames: 0.0,
        }
    }
}

impl SimulationClock {
    /// Number of reference frames to simulate for `delta_secs` of wall time.
    ///
    /// Zero while paused.
    pub fn step_for(&self, delta_secs: f32) -> f32 {
        if self.paused {
            return 0.0;
        }
        delta_secs * REFERENCE_FPS * self.scale
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn faster(&mut self) {
        self.scale = (self.scale * 2.0).min(MAX_TIME_SCALE);
    }

    pub fn slower(&mut self) {
        self.scale = (self.scale * 0.5).max(MIN_TIME_SCALE);
    }
}
