//! Orbit path rendering using Bevy Gizmos.
//!
//! Orbits are circles in the orbital plane, drawn as closed polylines. The
//! path of the focused body is dimmed so the body itself stands out.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::catalog::BodyCatalog;
use crate::orbit::ORBITAL_PLANE_Y;
use crate::selection::Selection;
use crate::types::OrrerySet;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Update, draw_orbit_paths.in_set(OrrerySet::Present));
    }
}

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Number of segments per circle (higher = smoother).
    pub segments: u32,
    /// Alpha of an ordinary orbit path.
    pub alpha: f32,
    /// Alpha of the focused body's orbit path.
    pub selected_alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 128,
            alpha: 0.15,
            selected_alpha: 0.05,
        }
    }
}

/// Points of a closed circle in the orbital plane; first and last coincide.
fn orbit_points(radius: f32, segments: u32) -> impl Iterator<Item = Vec3> {
    let segments = segments.max(16);
    (0..=segments).map(move |i| {
        let angle = (i % segments) as f32 / segments as f32 * TAU;
        Vec3::new(radius * angle.cos(), ORBITAL_PLANE_Y as f32, radius * angle.sin())
    })
}

fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    catalog: Res<BodyCatalog>,
    selection: Res<Selection>,
) {
    if !settings.visible {
        return;
    }

    for body in catalog.iter() {
        if body.orbit_radius <= 0.0 {
            continue;
        }

        let alpha = if selection.is_focused_on(body.id.as_str()) {
            settings.selected_alpha
        } else {
            settings.alpha
        };
        let color = Color::WHITE.with_alpha(alpha);

        let mut prev: Option<Vec3> = None;
        for point in orbit_points(body.orbit_radius, settings.segments) {
            if let Some(p0) = prev {
                gizmos.line(p0, point, color);
            }
            prev = Some(point);
        }
    }
}
