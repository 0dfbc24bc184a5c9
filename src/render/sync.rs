//! Per-frame visual state derived from the orbit simulation.
//!
//! Orbit translation is written by the orbit plugin; here the spinning child
//! mesh picks up the self-rotation and atmosphere shells pulse.

use bevy::prelude::*;

use crate::orbit::OrbitState;
use crate::render::bodies::{AtmosphereGlow, SpinningMesh};

/// Base scale of atmosphere shells relative to the body.
const ATMOSPHERE_SCALE: f32 = 1.2;

/// Pulse amplitude and angular frequency of atmosphere shells.
const ATMOSPHERE_PULSE: f32 = 0.02;
const ATMOSPHERE_PULSE_RATE: f32 = 2.0;

/// Rotate each spinning mesh to its parent's self-rotation.
pub fn sync_body_spin(
    mut meshes: Query<(&ChildOf, &mut Transform), With<SpinningMesh>>,
    states: Query<&OrbitState>,
) {
    for (child_of, mut transform) in meshes.iter_mut() {
        if let Ok(state) = states.get(child_of.parent()) {
            transform.rotation = Quat::from_rotation_y(state.spin as f32);
        }
    }
}

/// Gently breathe atmosphere shells.
pub fn pulse_atmospheres(
    time: Res<Time>,
    mut shells: Query<&mut Transform, With<AtmosphereGlow>>,
) {
    let scale = atmosphere_scale(time.elapsed_secs());
    for mut transform in shells.iter_mut() {
        transform.scale = Vec3::splat(scale);
    }
}

fn atmosphere_scale(elapsed: f32) -> f32 {
    ATMOSPHERE_SCALE + (elapsed * ATMOSPHERE_PULSE_RATE).sin() * ATMOSPHERE_PULSE
}
