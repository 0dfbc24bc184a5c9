//! Rendering systems for the orrery.
//!
//! This module provides visual representation of the star, the orbiting
//! bodies, their orbit paths, the focus reticle and background elements.
//! Positions come from the orbit simulation; nothing here mutates it.

mod background;
pub mod bodies;
pub mod highlight;
mod orbits;
mod sync;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::BodyVisualPlugin;
use self::highlight::HighlightPlugin;
use self::orbits::OrbitPathPlugin;
use self::sync::{pulse_atmospheres, sync_body_spin};
use crate::camera::spawn_main_camera;
use crate::types::OrrerySet;

pub use self::bodies::{AtmosphereGlow, SpinningMesh};
pub use self::orbits::OrbitPathSettings;

/// Scene background color.
pub const BACKGROUND_COLOR: Color = Color::srgb(0.012, 0.012, 0.043);

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .add_plugins((BodyVisualPlugin, BackgroundPlugin, OrbitPathPlugin, HighlightPlugin))
            .add_systems(Startup, spawn_main_camera)
            .add_systems(
                Update,
                (sync_body_spin, pulse_atmospheres).in_set(OrrerySet::Present),
            );
    }
}
