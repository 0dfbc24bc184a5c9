//! Circular-orbit integrator.
//!
//! Each body carries an unbounded angular progress that advances by
//! `dt * speed_scale * speed` per tick unless the pause gate is closed, and a
//! self-rotation angle that advances by a fixed step every tick regardless.

use std::time::Duration;

use bevy::math::DVec3;
use bevy::prelude::*;

/// Global orbit speed scale (radians per second per unit speed multiplier).
pub const ORBIT_SPEED_SCALE: f64 = 0.1;

/// Self-rotation added to every body each tick (radians).
pub const SELF_ROTATION_STEP: f64 = 0.005;

/// Largest tick delta accepted before clamping (seconds).
///
/// A backgrounded window can deliver one huge delta on resume; capping it
/// keeps bodies from jumping across their orbits.
pub const MAX_TICK_DELTA: f64 = 1.0;

/// Height of the orbital plane.
pub const ORBITAL_PLANE_Y: f64 = 0.0;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for orbit integration.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    /// Global speed constant `k`. Default: 0.1.
    pub speed_scale: f64,
    /// Per-tick self-rotation increment. Default: 0.005 rad.
    pub self_rotation_step: f64,
    /// Upper bound on a single tick's delta. Default: 1 s.
    pub max_tick_delta: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            speed_scale: ORBIT_SPEED_SCALE,
            self_rotation_step: SELF_ROTATION_STEP,
            max_tick_delta: MAX_TICK_DELTA,
        }
    }
}

// =============================================================================
// Per-body state
// =============================================================================

/// Continuous motion state of one body.
///
/// `angle` is never wrapped; trigonometric evaluation wraps it implicitly.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitState {
    /// Angular progress along the orbit (radians).
    pub angle: f64,
    /// Self-rotation about the body's own axis (radians).
    pub spin: f64,
}

impl OrbitState {
    pub fn with_phase(angle: f64) -> Self {
        Self { angle, spin: 0.0 }
    }
}

/// Result of clamping a raw tick delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClampedDelta {
    /// Delta was within `[0, max]`.
    Accepted(f64),
    /// Delta was negative or not finite; replaced by 0.
    Dropped,
    /// Delta exceeded the cap and was reduced to it.
    Capped(f64),
}

impl ClampedDelta {
    pub fn seconds(self) -> f64 {
        match self {
            ClampedDelta::Accepted(dt) | ClampedDelta::Capped(dt) => dt,
            ClampedDelta::Dropped => 0.0,
        }
    }
}

// =============================================================================
// Integrator
// =============================================================================

/// Stateless integrator applying [`OrbitConfig`] to [`OrbitState`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrbitIntegrator {
    config: OrbitConfig,
}

impl OrbitIntegrator {
    pub fn new(config: OrbitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Clamp a raw delta in seconds into `[0, max_tick_delta]`.
    pub fn clamp_delta(&self, raw_seconds: f64) -> ClampedDelta {
        if !raw_seconds.is_finite() || raw_seconds < 0.0 {
            ClampedDelta::Dropped
        } else if raw_seconds > self.config.max_tick_delta {
            ClampedDelta::Capped(self.config.max_tick_delta)
        } else {
            ClampedDelta::Accepted(raw_seconds)
        }
    }

    /// Clamp a frame clock delta. Durations are never negative, so only the cap applies.
    pub fn clamp_duration(&self, elapsed: Duration) -> ClampedDelta {
        self.clamp_delta(elapsed.as_secs_f64())
    }

    /// Advance one body by an already clamped delta.
    ///
    /// With `paused` set the angle is left bit-for-bit unchanged; the spin
    /// always advances.
    pub fn advance(&self, state: &mut OrbitState, speed: f32, dt: ClampedDelta, paused: bool) {
        if !paused {
            let step = dt.seconds() * self.config.speed_scale * f64::from(speed);
            if step != 0.0 {
                state.angle += step;
            }
        }
        state.spin += self.config.self_rotation_step;
    }
}

/// Position on a circular orbit in the XZ plane.
pub fn orbital_position(orbit_radius: f32, angle: f64) -> Vec3 {
    orbital_position_f64(f64::from(orbit_radius), angle).as_vec3()
}

/// Double-precision variant of [`orbital_position`].
pub fn orbital_position_f64(orbit_radius: f64, angle: f64) -> DVec3 {
    DVec3::new(
        orbit_radius * angle.cos(),
        ORBITAL_PLANE_Y,
        orbit_radius * angle.sin(),
    )
}
