//! Orbit simulation for catalog bodies.
//!
//! Every catalog body becomes an entity carrying an [`OrbitState`]. The state
//! advances in `Update` after selection changes are applied, so focusing a
//! body freezes all orbits on the same frame.

mod integrator;
mod phase;

#[cfg(test)]
mod proptest_orbit;

use std::collections::HashMap;

use bevy::prelude::*;

pub use integrator::{
    ClampedDelta, MAX_TICK_DELTA, ORBIT_SPEED_SCALE, ORBITAL_PLANE_Y, OrbitConfig,
    OrbitIntegrator, OrbitState, SELF_ROTATION_STEP, orbital_position, orbital_position_f64,
};
pub use phase::OrbitPhases;

use crate::catalog::BodyCatalog;
use crate::selection::Selection;
use crate::types::{BodyId, DEFAULT_SEED, OrrerySet};

/// Plugin providing orbit integration for catalog bodies.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitConfig>()
            .init_resource::<OrbitPhases>()
            .init_resource::<BodyCatalog>()
            .init_resource::<BodyIndex>()
            .add_systems(Startup, spawn_orbiting_bodies)
            .add_systems(Update, advance_orbits.in_set(OrrerySet::Orbit))
            .add_systems(Update, sync_orbit_positions.in_set(OrrerySet::Present));
    }
}

impl Default for OrbitPhases {
    fn default() -> Self {
        OrbitPhases::Seeded(DEFAULT_SEED)
    }
}

/// A simulated catalog body.
#[derive(Component, Clone, Debug)]
pub struct OrbitingBody {
    pub id: BodyId,
    pub orbit_radius: f32,
    pub speed: f32,
}

impl OrbitingBody {
    pub fn position(&self, state: &OrbitState) -> Vec3 {
        orbital_position(self.orbit_radius, state.angle)
    }
}

/// Lookup from body id to its simulated entity.
#[derive(Resource, Default, Debug)]
pub struct BodyIndex {
    entities: HashMap<BodyId, Entity>,
}

impl BodyIndex {
    pub fn register(&mut self, id: BodyId, entity: Entity) {
        self.entities.insert(id, entity);
    }

    pub fn entity(&self, id: &str) -> Option<Entity> {
        self.entities.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Spawn one entity per catalog body at its initial phase.
fn spawn_orbiting_bodies(
    mut commands: Commands,
    catalog: Res<BodyCatalog>,
    phases: Res<OrbitPhases>,
    mut index: ResMut<BodyIndex>,
) {
    let initial = phases.resolve(&catalog);

    for (body, phase) in catalog.iter().zip(initial) {
        let orbiting = OrbitingBody {
            id: body.id.clone(),
            orbit_radius: body.orbit_radius,
            speed: body.speed,
        };
        let state = OrbitState::with_phase(phase);
        let entity = commands
            .spawn((
                Name::new(body.name.clone()),
                Transform::from_translation(orbiting.position(&state)),
                Visibility::default(),
                state,
                orbiting,
            ))
            .id();
        index.register(body.id.clone(), entity);
    }

    info!("Spawned {} orbiting bodies", catalog.len());
}

/// Advance every body by this frame's clamped delta under the pause gate.
///
/// Reads the real clock: the virtual clock already trims long frames to its
/// own `max_delta`, which would leave `max_tick_delta` unreachable.
fn advance_orbits(
    time: Res<Time<Real>>,
    selection: Res<Selection>,
    config: Res<OrbitConfig>,
    mut bodies: Query<(&OrbitingBody, &mut OrbitState)>,
) {
    let integrator = OrbitIntegrator::new(config.clone());
    let dt = integrator.clamp_duration(time.delta());
    if let ClampedDelta::Capped(cap) = dt {
        warn!(
            "Frame delta {:.3}s exceeds {cap}s; orbits advanced by the cap",
            time.delta_secs_f64()
        );
    }

    let paused = selection.pause_gate();
    for (body, mut state) in bodies.iter_mut() {
        integrator.advance(&mut state, body.speed, dt, paused);
    }
}

/// Place each body entity at its current orbital position.
fn sync_orbit_positions(mut bodies: Query<(&OrbitingBody, &OrbitState, &mut Transform)>) {
    for (body, state, mut transform) in bodies.iter_mut() {
        transform.translation = body.position(state);
    }
}
