//! Focus reticle for the selected body.
//!
//! A slowly turning cyan ring, drawn with gizmos in the orbital plane around
//! the focused body. Nothing is drawn while the overview is active.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::catalog::BodyCatalog;
use crate::orbit::BodyIndex;
use crate::selection::Selection;
use crate::types::OrrerySet;

/// Reticle radius relative to the body radius.
const RETICLE_SCALE: f32 = 1.8;

/// Reticle turn rate (radians per second).
const RETICLE_SPIN: f32 = 0.8;

/// Drawn arcs and the gap between them (fraction of each quarter).
const RETICLE_ARCS: u32 = 4;
const RETICLE_ARC_FILL: f32 = 0.7;

const RETICLE_COLOR: Color = Color::srgba(0.0, 1.0, 1.0, 0.8);

/// Plugin providing the focus reticle.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_focus_reticle.in_set(OrrerySet::Present));
    }
}

/// Arc endpoints of the reticle, as (start, end) angle pairs.
fn reticle_arcs(rotation: f32) -> impl Iterator<Item = (f32, f32)> {
    let quarter = TAU / RETICLE_ARCS as f32;
    (0..RETICLE_ARCS).map(move |i| {
        let start = rotation + i as f32 * quarter;
        (start, start + quarter * RETICLE_ARC_FILL)
    })
}

fn draw_focus_reticle(
    mut gizmos: Gizmos,
    time: Res<Time>,
    selection: Res<Selection>,
    catalog: Res<BodyCatalog>,
    index: Res<BodyIndex>,
    bodies: Query<&Transform>,
) {
    let Some(id) = selection.focused() else {
        return;
    };
    let (Some(body), Some(entity)) = (catalog.get(id.as_str()), index.entity(id.as_str())) else {
        return;
    };
    let Ok(transform) = bodies.get(entity) else {
        return;
    };

    let center = transform.translation;
    let radius = body.radius * RETICLE_SCALE;
    let rotation = time.elapsed_secs() * RETICLE_SPIN;

    // Each arc as a short polyline.
    let steps = 12;
    for (start, end) in reticle_arcs(rotation) {
        for i in 0..steps {
            let t0 = start + (end - start) * i as f32 / steps as f32;
            let t1 = start + (end - start) * (i + 1) as f32 / steps as f32;
            let p0 = center + Vec3::new(radius * t0.cos(), 0.0, radius * t0.sin());
            let p1 = center + Vec3::new(radius * t1.cos(), 0.0, radius * t1.sin());
            gizmos.line(p0, p1, RETICLE_COLOR);
        }
    }
}
