//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use orrery::catalog::{BodyCatalog, BodyData};
use orrery::orbit::OrbitPhases;
use orrery::orrery::{Orrery, OrreryPlugin};
use orrery::types::OrreryConfig;

/// Catalog holding a single Earth-like body at radius 10, speed 1.
pub fn earth_only() -> BodyCatalog {
    BodyCatalog::new(vec![
        BodyData::new("earth", "Earth")
            .with_orbit(10.0, 1.0)
            .with_radius(1.0),
    ])
    .expect("valid catalog")
}

/// Catalog with two bodies on different orbits.
pub fn earth_and_mars() -> BodyCatalog {
    BodyCatalog::new(vec![
        BodyData::new("earth", "Earth")
            .with_orbit(10.0, 1.0)
            .with_radius(1.0),
        BodyData::new("mars", "Mars")
            .with_orbit(14.0, 0.53)
            .with_radius(0.6),
    ])
    .expect("valid catalog")
}

/// Facade with every body starting at phase 0.
pub fn orrery_at_zero(catalog: BodyCatalog) -> Orrery {
    Orrery::with_phases(
        catalog,
        OrreryConfig::default(),
        &OrbitPhases::Explicit(Vec::new()),
    )
}

/// Facade over the default solar system with seeded phases.
pub fn solar_orrery(seed: u64) -> Orrery {
    let config = OrreryConfig {
        seed,
        ..OrreryConfig::default()
    };
    Orrery::new(BodyCatalog::default(), config)
}

/// Headless app running the core plugin with a fixed frame delta.
pub fn headless_app(frame: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
        .add_plugins(OrreryPlugin::default());
    app
}

/// Run `frames` updates.
pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}
