//! Camera director and viewpoint rig.
//!
//! The director turns selection transitions into [`CameraCommand`]s. The rig
//! owns the actual eye/look-at pair, interpolates toward its targets with a
//! critically damped spring, and keeps user orbit/zoom inside the active
//! distance bounds.
//!
//! Focusing a body only tightens the bounds. The camera is not re-aimed at the
//! body; the user frames it by dragging.

use bevy::prelude::*;

use crate::selection::{Selection, SelectionChanged, SelectionTransition};
use crate::types::OrrerySet;

/// Overview eye position.
pub const OVERVIEW_EYE: Vec3 = Vec3::new(0.0, 30.0, 50.0);

/// Overview look-at point (the star).
pub const OVERVIEW_LOOK_AT: Vec3 = Vec3::ZERO;

/// Distance bounds in overview mode.
pub const OVERVIEW_BOUNDS: DistanceBounds = DistanceBounds::new(10.0, 90.0);

/// Distance bounds while a body is focused.
pub const FOCUS_BOUNDS: DistanceBounds = DistanceBounds::new(5.0, 60.0);

/// Smoothing time for programmatic transitions (seconds).
pub const SMOOTH_TIME: f32 = 0.6;

/// Smoothing time while the user drags (seconds).
pub const DRAG_SMOOTH_TIME: f32 = 0.1;

/// Dolly speed multiplier for scroll zoom.
pub const DOLLY_SPEED: f32 = 0.5;

/// Zoom step per scroll unit at dolly speed 1.
pub const ZOOM_STEP: f32 = 0.1;

/// Orbit rotation per dragged pixel (radians).
pub const ROTATE_SPEED: f32 = 0.005;

/// Field of view of the main camera (degrees).
pub const FOV_DEGREES: f32 = 40.0;

/// Keeps the eye off the poles so `looking_at` stays well defined.
const MIN_POLAR: f32 = 0.01;

/// Below this the rig counts as settled.
const SETTLE_EPSILON: f32 = 1e-4;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Permitted eye distance from the look-at point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceBounds {
    pub min: f32,
    pub max: f32,
}

impl DistanceBounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, distance: f32) -> f32 {
        distance.clamp(self.min, self.max)
    }

    pub fn contains(&self, distance: f32) -> bool {
        (self.min..=self.max).contains(&distance)
    }
}

/// Eye position plus look-at point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.look_at)
    }
}

/// Camera tuning, fixed at construction.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub overview: CameraPose,
    pub overview_bounds: DistanceBounds,
    pub focus_bounds: DistanceBounds,
    pub smooth_time: f32,
    pub drag_smooth_time: f32,
    pub dolly_speed: f32,
    pub rotate_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            overview: CameraPose {
                eye: OVERVIEW_EYE,
                look_at: OVERVIEW_LOOK_AT,
            },
            overview_bounds: OVERVIEW_BOUNDS,
            focus_bounds: FOCUS_BOUNDS,
            smooth_time: SMOOTH_TIME,
            drag_smooth_time: DRAG_SMOOTH_TIME,
            dolly_speed: DOLLY_SPEED,
            rotate_speed: ROTATE_SPEED,
        }
    }
}

/// Instruction for the viewpoint controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraCommand {
    /// New pose target; `None` leaves the eye under user control.
    pub pose: Option<CameraPose>,
    pub bounds: DistanceBounds,
    /// Interpolate instead of jumping.
    pub smooth: bool,
}

// =============================================================================
// Director
// =============================================================================

/// Maps selection transitions to camera commands.
#[derive(Clone, Debug, Default)]
pub struct CameraDirector {
    config: CameraConfig,
}

impl CameraDirector {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Command for entering `selection`.
    pub fn command_for(&self, selection: &Selection) -> CameraCommand {
        match selection {
            Selection::Focused(_) => CameraCommand {
                pose: None,
                bounds: self.config.focus_bounds,
                smooth: true,
            },
            Selection::Unselected => CameraCommand {
                pose: Some(self.config.overview),
                bounds: self.config.overview_bounds,
                smooth: true,
            },
        }
    }

    pub fn on_transition(&self, transition: &SelectionTransition) -> CameraCommand {
        self.command_for(&transition.current)
    }
}

// =============================================================================
// Rig
// =============================================================================

/// Damped viewpoint controller.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct CameraRig {
    eye: Vec3,
    look_at: Vec3,
    target_eye: Vec3,
    target_look_at: Vec3,
    eye_velocity: Vec3,
    look_at_velocity: Vec3,
    bounds: DistanceBounds,
    smooth_time: f32,
    transition_smooth_time: f32,
    drag_smooth_time: f32,
    dolly_speed: f32,
    rotate_speed: f32,
}

impl CameraRig {
    /// Rig resting at the overview pose with overview bounds.
    pub fn new(config: &CameraConfig) -> Self {
        let pose = config.overview;
        Self {
            eye: pose.eye,
            look_at: pose.look_at,
            target_eye: pose.eye,
            target_look_at: pose.look_at,
            eye_velocity: Vec3::ZERO,
            look_at_velocity: Vec3::ZERO,
            bounds: config.overview_bounds,
            smooth_time: config.smooth_time,
            transition_smooth_time: config.smooth_time,
            drag_smooth_time: config.drag_smooth_time,
            dolly_speed: config.dolly_speed,
            rotate_speed: config.rotate_speed,
        }
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            eye: self.eye,
            look_at: self.look_at,
        }
    }

    pub fn target(&self) -> CameraPose {
        CameraPose {
            eye: self.target_eye,
            look_at: self.target_look_at,
        }
    }

    pub fn bounds(&self) -> DistanceBounds {
        self.bounds
    }

    /// Active smoothing time constant.
    pub fn smooth_time(&self) -> f32 {
        self.smooth_time
    }

    /// Take a new target and bounds.
    ///
    /// Current position and velocity are kept, so re-issuing a command while
    /// a move is in flight continues it without a jump.
    pub fn apply(&mut self, command: &CameraCommand) {
        if let Some(pose) = command.pose {
            self.target_eye = pose.eye;
            self.target_look_at = pose.look_at;
        }
        self.bounds = command.bounds;
        self.smooth_time = self.transition_smooth_time;
        self.clamp_target_distance();

        if !command.smooth {
            self.eye = self.target_eye;
            self.look_at = self.target_look_at;
            self.eye_velocity = Vec3::ZERO;
            self.look_at_velocity = Vec3::ZERO;
        }
    }

    /// Orbit the target eye around the target look-at point.
    ///
    /// `delta` is pointer travel in pixels; x turns about the vertical axis,
    /// y tilts toward or away from the pole.
    pub fn rotate(&mut self, delta: Vec2) {
        let offset = self.target_eye - self.target_look_at;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }

        let azimuth = offset.x.atan2(offset.z) - delta.x * self.rotate_speed;
        let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() - delta.y * self.rotate_speed)
            .clamp(MIN_POLAR, std::f32::consts::PI - MIN_POLAR);

        self.target_eye = self.target_look_at + spherical_offset(radius, polar, azimuth);
        self.smooth_time = self.drag_smooth_time;
    }

    /// Move the target eye toward (positive) or away from (negative) the look-at point.
    pub fn dolly(&mut self, scroll: f32) {
        let offset = self.target_eye - self.target_look_at;
        let radius = offset.length();
        if radius <= f32::EPSILON || scroll == 0.0 {
            return;
        }

        let factor = (1.0 - scroll * ZOOM_STEP * self.dolly_speed).clamp(0.1, 10.0);
        let new_radius = self.bounds.clamp(radius * factor);
        self.target_eye = self.target_look_at + offset * (new_radius / radius);
        self.smooth_time = self.drag_smooth_time;
    }

    /// Advance the interpolation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.eye = smooth_damp(
            self.eye,
            self.target_eye,
            &mut self.eye_velocity,
            self.smooth_time,
            dt,
        );
        self.look_at = smooth_damp(
            self.look_at,
            self.target_look_at,
            &mut self.look_at_velocity,
            self.smooth_time,
            dt,
        );
    }

    /// Whether the rig has reached its target.
    pub fn is_settled(&self) -> bool {
        self.eye.distance(self.target_eye) < SETTLE_EPSILON
            && self.look_at.distance(self.target_look_at) < SETTLE_EPSILON
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye).looking_at(self.look_at, Vec3::Y)
    }

    fn clamp_target_distance(&mut self) {
        let offset = self.target_eye - self.target_look_at;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let clamped = self.bounds.clamp(radius);
        if clamped != radius {
            self.target_eye = self.target_look_at + offset * (clamped / radius);
        }
    }
}

fn spherical_offset(radius: f32, polar: f32, azimuth: f32) -> Vec3 {
    Vec3::new(
        radius * polar.sin() * azimuth.sin(),
        radius * polar.cos(),
        radius * polar.sin() * azimuth.cos(),
    )
}

/// Critically damped approach of `current` toward `target`.
///
/// Never overshoots; with `dt <= 0` nothing moves.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let output = target + (change + temp) * decay;

    if (target - current).dot(output - target) > 0.0 {
        *velocity = Vec3::ZERO;
        return target;
    }
    output
}

// =============================================================================
// Plugin
// =============================================================================

/// Command issued by the most recent selection transition, for inspection.
#[derive(Resource, Default, Debug)]
pub struct LastCameraCommand(pub Option<CameraCommand>);

/// Plugin wiring the director and rig into the frame.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraConfig>()
            .init_resource::<LastCameraCommand>()
            .add_systems(
                Update,
                (direct_camera, animate_camera_rig)
                    .chain()
                    .in_set(OrrerySet::Camera),
            );
    }
}

/// Spawn the main perspective camera at the overview pose.
pub fn spawn_main_camera(mut commands: Commands, config: Res<CameraConfig>) {
    let rig = CameraRig::new(&config);
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            ..default()
        }),
        rig.transform(),
        rig,
        MainCamera,
    ));
}

/// Issue a command to every rig for each selection transition this frame.
fn direct_camera(
    mut transitions: MessageReader<SelectionChanged>,
    mut rigs: Query<&mut CameraRig>,
    mut last: ResMut<LastCameraCommand>,
    config: Res<CameraConfig>,
) {
    let director = CameraDirector::new(config.clone());
    for SelectionChanged(transition) in transitions.read() {
        let command = director.on_transition(transition);
        info!("Camera command {command:?}");
        for mut rig in rigs.iter_mut() {
            rig.apply(&command);
        }
        last.0 = Some(command);
    }
}

/// Step rig interpolation and write the camera transform.
fn animate_camera_rig(time: Res<Time>, mut rigs: Query<(&mut CameraRig, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut rig, mut transform) in rigs.iter_mut() {
        rig.update(dt);
        *transform = rig.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn run(rig: &mut CameraRig, seconds: f32) {
        let dt = 1.0 / 60.0;
        let steps = (seconds / dt).round() as usize;
        for _ in 0..steps {
            rig.update(dt);
        }
    }

    #[test]
    fn test_focus_command_keeps_pose() {
        let director = CameraDirector::default();
        let command = director.command_for(&Selection::Focused("earth".into()));
        assert!(command.pose.is_none());
        assert_eq!(command.bounds, FOCUS_BOUNDS);
        assert!(command.smooth);
    }

    #[test]
    fn test_unselected_command_resets_to_overview() {
        let director = CameraDirector::default();
        let command = director.command_for(&Selection::Unselected);
        let pose = command.pose.expect("overview pose");
        assert_eq!(pose.eye, OVERVIEW_EYE);
        assert_eq!(pose.look_at, OVERVIEW_LOOK_AT);
        assert_eq!(command.bounds, OVERVIEW_BOUNDS);
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let target = Vec3::new(10.0, 0.0, 0.0);
        let mut velocity = Vec3::ZERO;
        let mut current = Vec3::ZERO;
        for _ in 0..600 {
            current = smooth_damp(current, target, &mut velocity, SMOOTH_TIME, 1.0 / 60.0);
            assert!(current.x <= target.x + 1e-4);
        }
        assert_relative_eq!(current.x, target.x, epsilon = 1e-3);
    }

    #[test]
    fn test_smooth_damp_zero_dt_is_identity() {
        let mut velocity = Vec3::ONE;
        let current = Vec3::new(1.0, 2.0, 3.0);
        let out = smooth_damp(current, Vec3::ZERO, &mut velocity, SMOOTH_TIME, 0.0);
        assert_eq!(out, current);
        assert_eq!(velocity, Vec3::ONE);
    }

    #[test]
    fn test_focus_bounds_pull_distant_eye_inside() {
        let config = CameraConfig::default();
        let mut rig = CameraRig::new(&config);
        rig.dolly(-50.0); // zoom all the way out to the overview max
        assert_relative_eq!(rig.target().distance(), OVERVIEW_BOUNDS.max, epsilon = 1e-3);

        rig.apply(&CameraDirector::new(config).command_for(&Selection::Focused("earth".into())));
        assert!(FOCUS_BOUNDS.contains(rig.target().distance()));
    }

    #[test]
    fn test_dolly_clamped_to_bounds() {
        let mut rig = CameraRig::new(&CameraConfig::default());
        for _ in 0..100 {
            rig.dolly(5.0);
        }
        assert_relative_eq!(rig.target().distance(), OVERVIEW_BOUNDS.min, epsilon = 1e-3);
    }

    #[test]
    fn test_rotate_preserves_distance_and_uses_drag_smoothing() {
        let mut rig = CameraRig::new(&CameraConfig::default());
        let before = rig.target().distance();
        rig.rotate(Vec2::new(120.0, -40.0));
        assert_relative_eq!(rig.target().distance(), before, epsilon = 1e-3);
        assert_eq!(rig.smooth_time(), DRAG_SMOOTH_TIME);
        assert_ne!(rig.target().eye, OVERVIEW_EYE);
    }

    #[test]
    fn test_rotate_never_reaches_pole() {
        let mut rig = CameraRig::new(&CameraConfig::default());
        rig.rotate(Vec2::new(0.0, 10_000.0));
        let offset = rig.target().eye - rig.target().look_at;
        assert!(offset.x.abs() + offset.z.abs() > 0.0);
    }

    #[test]
    fn test_reissued_overview_continues_without_jump() {
        let config = CameraConfig::default();
        let director = CameraDirector::new(config.clone());
        let mut rig = CameraRig::new(&config);
        rig.rotate(Vec2::new(300.0, 0.0));
        run(&mut rig, 1.0);

        let overview = director.command_for(&Selection::Unselected);
        rig.apply(&overview);
        run(&mut rig, 0.2);
        let mid_flight = rig.pose();

        rig.apply(&overview);
        assert_eq!(rig.pose(), mid_flight);

        run(&mut rig, 6.0);
        assert!(rig.is_settled());
        assert_relative_eq!(rig.pose().eye.x, OVERVIEW_EYE.x, epsilon = 1e-3);
        assert_relative_eq!(rig.pose().eye.y, OVERVIEW_EYE.y, epsilon = 1e-3);
        assert_relative_eq!(rig.pose().eye.z, OVERVIEW_EYE.z, epsilon = 1e-3);
    }

    #[test]
    fn test_instant_command_snaps() {
        let config = CameraConfig::default();
        let mut rig = CameraRig::new(&config);
        rig.rotate(Vec2::new(200.0, 50.0));
        run(&mut rig, 1.0);

        rig.apply(&CameraCommand {
            pose: Some(config.overview),
            bounds: config.overview_bounds,
            smooth: false,
        });
        assert_eq!(rig.pose(), config.overview);
        assert!(rig.is_settled());
    }
}
