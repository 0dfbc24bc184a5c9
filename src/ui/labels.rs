//! Body labels using egui for text rendering.
//!
//! Renders body names next to each orbiting body, except the focused one
//! whose name is already in the info panel.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::MainCamera;
use crate::catalog::BodyCatalog;
use crate::orbit::OrbitingBody;
use crate::selection::Selection;

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Hide labels of bodies farther than this from the camera.
    pub max_distance: f32,
    /// Offset from body center in screen pixels.
    pub offset: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            max_distance: 120.0,
            offset: 12.0,
        }
    }
}

/// Draw labels for all non-focused bodies.
pub fn draw_body_labels(
    mut contexts: EguiContexts,
    bodies: Query<(&OrbitingBody, &GlobalTransform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    catalog: Res<BodyCatalog>,
    selection: Res<Selection>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::background());
    let font = egui::FontId::proportional(13.0);

    for (body, transform) in bodies.iter() {
        if selection.is_focused_on(body.id.as_str()) {
            continue;
        }
        let Some(data) = catalog.get(body.id.as_str()) else {
            continue;
        };

        let world_pos = transform.translation();
        if world_pos.distance(camera_transform.translation()) > settings.max_distance {
            continue;
        }

        // Project world position to screen; fails for points behind the camera.
        let Ok(screen_pos) = camera.world_to_viewport(camera_transform, world_pos) else {
            continue;
        };

        let label_pos = egui::pos2(
            screen_pos.x + settings.offset,
            screen_pos.y - settings.offset,
        );

        // Shadow
        painter.text(
            label_pos + egui::vec2(1.0, 1.0),
            egui::Align2::LEFT_BOTTOM,
            &data.name,
            font.clone(),
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
        );

        painter.text(
            label_pos,
            egui::Align2::LEFT_BOTTOM,
            &data.name,
            font.clone(),
            egui::Color32::from_rgba_unmultiplied(220, 220, 220, 200),
        );
    }
}
