//! Pointer and keyboard input.
//!
//! Left click on a body picks it; left click on empty space clears the focus.
//! Left drag orbits the camera, the scroll wheel zooms, Escape closes the focus.
//! A press counts as a click only if the pointer barely moved before release.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::camera::{CameraRig, MainCamera};
use crate::catalog::BodyCatalog;
use crate::orbit::OrbitingBody;
use crate::selection::{Selection, SelectionRequest};
use crate::types::{BodyId, OrrerySet};

/// Hit sphere radius relative to the body's visual radius.
pub const HIT_RADIUS_SCALE: f32 = 1.5;

/// Pointer travel (pixels) above which a press is a drag, not a click.
pub const CLICK_TRAVEL_PX: f32 = 5.0;

/// Pixels per scroll line when the device reports pixel deltas.
const PIXELS_PER_LINE: f32 = 100.0;

/// Whether the pointer is over overlay UI this frame.
///
/// Written by the overlay, read here so clicks on panels never reach the scene.
#[derive(Resource, Default, Debug)]
pub struct PointerOverUi(pub bool);

/// Press-to-release tracking for click/drag discrimination.
#[derive(Resource, Default, Debug)]
pub struct ClickTracker {
    pressed: bool,
    travel: f32,
}

impl ClickTracker {
    pub fn press(&mut self) {
        self.pressed = true;
        self.travel = 0.0;
    }

    pub fn moved(&mut self, delta: Vec2) {
        if self.pressed {
            self.travel += delta.length();
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_drag(&self) -> bool {
        self.travel > CLICK_TRAVEL_PX
    }

    /// Finish the press; true when it was a click.
    pub fn release(&mut self) -> bool {
        let click = self.pressed && !self.is_drag();
        self.pressed = false;
        self.travel = 0.0;
        click
    }
}

/// A pickable sphere.
#[derive(Clone, Debug)]
pub struct PickTarget {
    pub id: BodyId,
    pub center: Vec3,
    pub radius: f32,
}

/// Distance along the ray to the first hit with a sphere.
///
/// `direction` must be normalized. Spheres behind the origin are ignored.
pub fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(direction);
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    let near = along - half_chord;
    let far = along + half_chord;
    if far < 0.0 {
        None
    } else if near < 0.0 {
        Some(0.0)
    } else {
        Some(near)
    }
}

/// Nearest target hit by the ray.
pub fn resolve_pick<'a>(
    origin: Vec3,
    direction: Vec3,
    targets: impl IntoIterator<Item = &'a PickTarget>,
) -> Option<&'a BodyId> {
    targets
        .into_iter()
        .filter_map(|t| {
            ray_sphere_distance(origin, direction, t.center, t.radius).map(|d| (&t.id, d))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Plugin providing pointer picking and camera controls.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerOverUi>()
            .init_resource::<ClickTracker>()
            .add_systems(
                Update,
                (pointer_pick, close_on_escape, camera_drag_and_zoom)
                    .chain()
                    .in_set(OrrerySet::Input),
            );
    }
}

/// Resolve left clicks into pick or clear requests.
fn pointer_pick(
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    over_ui: Res<PointerOverUi>,
    mut tracker: ResMut<ClickTracker>,
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(&OrbitingBody, &Transform)>,
    catalog: Res<BodyCatalog>,
    selection: Res<Selection>,
    mut requests: MessageWriter<SelectionRequest>,
) {
    if mouse.just_pressed(MouseButton::Left) && !over_ui.0 {
        tracker.press();
    }
    tracker.moved(motion.delta);

    if !mouse.just_released(MouseButton::Left) || !tracker.release() {
        return;
    }

    let Ok(window) = window.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let targets: Vec<PickTarget> = bodies
        .iter()
        .filter_map(|(body, transform)| {
            let data = catalog.get(body.id.as_str())?;
            Some(PickTarget {
                id: body.id.clone(),
                center: transform.translation,
                radius: data.radius * HIT_RADIUS_SCALE,
            })
        })
        .collect();

    match resolve_pick(ray.origin, *ray.direction, &targets) {
        Some(id) => {
            requests.write(SelectionRequest::Pick(id.clone()));
        }
        None if selection.pause_gate() => {
            requests.write(SelectionRequest::Clear);
        }
        None => {}
    }
}

/// Escape closes the focus.
fn close_on_escape(
    keys: Res<ButtonInput<KeyCode>>,
    selection: Res<Selection>,
    mut requests: MessageWriter<SelectionRequest>,
) {
    if keys.just_pressed(KeyCode::Escape) && selection.pause_gate() {
        requests.write(SelectionRequest::Clear);
    }
}

/// Pointer motion to orbit the camera by, once a held press has become a drag.
///
/// Motion under the click threshold never rotates, so a click leaves the view alone.
pub fn drag_rotation(tracker: &ClickTracker, held: bool, delta: Vec2) -> Option<Vec2> {
    (held && tracker.is_pressed() && tracker.is_drag() && delta != Vec2::ZERO).then_some(delta)
}

/// Left drag orbits the camera, scroll dollies it.
fn camera_drag_and_zoom(
    mouse: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    over_ui: Res<PointerOverUi>,
    tracker: Res<ClickTracker>,
    mut rigs: Query<&mut CameraRig, With<MainCamera>>,
) {
    let Ok(mut rig) = rigs.single_mut() else {
        return;
    };

    if let Some(delta) = drag_rotation(&tracker, mouse.pressed(MouseButton::Left), motion.delta) {
        rig.rotate(delta);
    }

    if scroll.delta.y != 0.0 && !over_ui.0 {
        let lines = match scroll.unit {
            MouseScrollUnit::Line => scroll.delta.y,
            MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_LINE,
        };
        rig.dolly(lines);
    }
}
