//! Persistent HUD: title, live/paused indicator and the idle prompt.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::{ActiveAction, colors, icons};
use crate::selection::Selection;

/// HUD opacity while something is focused.
const DIMMED_ALPHA: f32 = 0.4;

/// Title block in the top-left corner; prompt at the bottom when idle.
pub fn hud_system(
    mut contexts: EguiContexts,
    selection: Res<Selection>,
    active: Res<ActiveAction>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let paused = selection.pause_gate();
    let alpha = if paused || active.is_open() {
        DIMMED_ALPHA
    } else {
        1.0
    };

    egui::Area::new(egui::Id::new("hud_title"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(24.0, 24.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.multiply_opacity(alpha);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("COSMIC")
                        .size(32.0)
                        .strong()
                        .color(colors::TEXT),
                );
                ui.label(
                    egui::RichText::new("EXPLORER")
                        .size(32.0)
                        .strong()
                        .color(colors::ACCENT),
                );
            });

            let (icon, color, text) = if paused {
                (icons::PAUSED, colors::PAUSED, "ORBITS PAUSED")
            } else {
                (icons::LIVE, colors::LIVE, "LIVE SYSTEM SIMULATION")
            };
            ui.horizontal(|ui| {
                ui.label(icons::icon_colored(icon, 10.0, color));
                ui.label(
                    egui::RichText::new(text)
                        .size(10.0)
                        .monospace()
                        .color(colors::ACCENT_DIM),
                );
            });
        });

    if !paused {
        egui::Area::new(egui::Id::new("hud_prompt"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -40.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(colors::PANEL_BG)
                    .corner_radius(16.0)
                    .inner_margin(egui::Margin::symmetric(24, 8))
                    .stroke(egui::Stroke::new(1.0, colors::ACCENT.gamma_multiply(0.3)))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(icons::icon_colored(icons::POINTER, 12.0, colors::ACCENT));
                            ui.label(
                                egui::RichText::new("SYSTEM ACTIVE // 惑星を選択してください")
                                    .size(12.0)
                                    .monospace()
                                    .color(colors::ACCENT_DIM),
                            );
                        });
                    });
            });
    }
}
