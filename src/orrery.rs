//! In-process boundary of the core.
//!
//! [`Orrery`] drives orbits, selection and the camera without an ECS world,
//! which is what tests and alternative front ends use. [`OrreryPlugin`] wires
//! the same pieces into a Bevy `App`.

use std::time::Duration;

use bevy::prelude::*;

use crate::camera::{CameraCommand, CameraDirector, CameraPlugin, CameraRig};
use crate::catalog::BodyCatalog;
use crate::error::SelectionError;
use crate::orbit::{
    ClampedDelta, OrbitIntegrator, OrbitPhases, OrbitPlugin, OrbitState, orbital_position,
};
use crate::selection::{Selection, SelectionPlugin, SelectionTransition};
use crate::types::{BodyId, OrreryConfig, configure_orrery_sets};

/// Orbit integrator, selection state machine and camera director in one value.
#[derive(Clone, Debug)]
pub struct Orrery {
    catalog: BodyCatalog,
    states: Vec<OrbitState>,
    integrator: OrbitIntegrator,
    selection: Selection,
    director: CameraDirector,
    rig: CameraRig,
    /// Issued by a transition, not yet consumed by a tick.
    pending_command: Option<CameraCommand>,
    /// Consumed by the latest tick.
    consumed_command: Option<CameraCommand>,
}

impl Orrery {
    /// Build with phases drawn from `config.seed`.
    pub fn new(catalog: BodyCatalog, config: OrreryConfig) -> Self {
        let phases = OrbitPhases::Seeded(config.seed);
        Self::with_phases(catalog, config, &phases)
    }

    /// Build with explicitly chosen initial phases.
    pub fn with_phases(catalog: BodyCatalog, config: OrreryConfig, phases: &OrbitPhases) -> Self {
        let states = phases
            .resolve(&catalog)
            .into_iter()
            .map(OrbitState::with_phase)
            .collect();
        let rig = CameraRig::new(&config.camera);
        Self {
            catalog,
            states,
            integrator: OrbitIntegrator::new(config.orbit),
            selection: Selection::default(),
            director: CameraDirector::new(config.camera),
            rig,
            pending_command: None,
            consumed_command: None,
        }
    }

    pub fn catalog(&self) -> &BodyCatalog {
        &self.catalog
    }

    /// Advance one frame by `elapsed_seconds`.
    ///
    /// Negative or non-finite deltas count as zero; deltas above the
    /// configured cap count as the cap. Selection changes made before this
    /// call already gate this tick.
    pub fn tick(&mut self, elapsed_seconds: f64) -> ClampedDelta {
        let dt = self.integrator.clamp_delta(elapsed_seconds);
        let paused = self.pause_gate();

        for (body, state) in self.catalog.iter().zip(self.states.iter_mut()) {
            self.integrator.advance(state, body.speed, dt, paused);
        }

        self.consumed_command = self.pending_command.take();
        if let Some(command) = &self.consumed_command {
            self.rig.apply(command);
        }
        self.rig.update(dt.seconds() as f32);

        dt
    }

    /// [`Orrery::tick`] for a frame clock duration.
    pub fn tick_duration(&mut self, elapsed: Duration) -> ClampedDelta {
        self.tick(elapsed.as_secs_f64())
    }

    /// Focus a body. Unknown ids are rejected and change nothing.
    pub fn pick(&mut self, id: &str) -> Result<SelectionTransition, SelectionError> {
        let transition = self.selection.pick(&self.catalog, id)?;
        self.issue(&transition);
        Ok(transition)
    }

    /// Drop the focus.
    pub fn clear(&mut self) -> SelectionTransition {
        let transition = self.selection.clear();
        self.issue(&transition);
        transition
    }

    fn issue(&mut self, transition: &SelectionTransition) {
        self.pending_command = Some(self.director.on_transition(transition));
    }

    /// Current position of a body in scene units.
    pub fn position(&self, id: &str) -> Option<Vec3> {
        let i = self.catalog.index_of(id)?;
        let body = self.catalog.get(id)?;
        Some(orbital_position(body.orbit_radius, self.states[i].angle))
    }

    /// Angular progress of a body (radians, unwrapped).
    pub fn angle(&self, id: &str) -> Option<f64> {
        let i = self.catalog.index_of(id)?;
        Some(self.states[i].angle)
    }

    /// Self-rotation of a body (radians).
    pub fn self_rotation(&self, id: &str) -> Option<f64> {
        let i = self.catalog.index_of(id)?;
        Some(self.states[i].spin)
    }

    pub fn selection(&self) -> Option<&BodyId> {
        self.selection.focused()
    }

    pub fn selection_state(&self) -> &Selection {
        &self.selection
    }

    /// Orbits are frozen while this is true.
    pub fn pause_gate(&self) -> bool {
        self.selection.pause_gate()
    }

    /// Command from the latest transition.
    ///
    /// `Some` from the transition until the end of the tick that consumes it;
    /// `None` on later ticks without a transition.
    pub fn camera_command(&self) -> Option<&CameraCommand> {
        self.pending_command
            .as_ref()
            .or(self.consumed_command.as_ref())
    }

    /// The viewpoint controller driven by the director.
    pub fn camera(&self) -> &CameraRig {
        &self.rig
    }

    /// User drag/zoom access to the viewpoint controller.
    pub fn camera_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }
}

/// Core plugin: catalog, orbit simulation, selection and camera director.
///
/// Rendering, pointer input and the egui overlay are separate plugins.
#[derive(Default)]
pub struct OrreryPlugin {
    pub config: OrreryConfig,
}

impl OrreryPlugin {
    pub fn new(config: OrreryConfig) -> Self {
        Self { config }
    }
}

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        configure_orrery_sets(app);
        app.insert_resource(self.config.clone())
            .insert_resource(self.config.orbit.clone())
            .insert_resource(self.config.camera.clone())
            .insert_resource(OrbitPhases::Seeded(self.config.seed))
            .add_plugins((SelectionPlugin, OrbitPlugin, CameraPlugin));
    }
}
