//! Time advancement for the orrery.
//!
//! Converts the wall-clock frame delta into reference frames for the
//! simulator, honoring pause and time scale.

use bevy::prelude::*;

use crate::types::{FrameSet, SimulationClock};

/// Reference frames to simulate this tick. Written once per frame.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStep(pub f32);

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .init_resource::<FrameStep>()
            .add_systems(Update, advance_clock.in_set(FrameSet::Input));
    }
}

/// Compute this frame's simulation step from real elapsed time.
///
/// Speeds are per reference frame, so a 1/60 s frame at scale 1.0 is a
/// step of exactly one frame regardless of the display refresh rate.
fn advance_clock(
    time: Res<Time>,
    mut clock: ResMut<SimulationClock>,
    mut step: ResMut<FrameStep>,
) {
    step.0 = clock.step_for(time.delta_secs());
    clock.elapsed_frames += step.0 as f64;
}
