//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Close/X icon
pub const CLOSE: &str = egui_phosphor::regular::X;
/// Planet icon for the body header
pub const PLANET: &str = egui_phosphor::regular::PLANET;
/// Live simulation indicator
pub const LIVE: &str = egui_phosphor::regular::PLAY;
/// Paused simulation indicator
pub const PAUSED: &str = egui_phosphor::regular::PAUSE;
/// Pointer hint in the idle prompt
pub const POINTER: &str = egui_phosphor::regular::CURSOR_CLICK;

// Action icons
/// News broadcast
pub const NEWS: &str = egui_phosphor::regular::BROADCAST;
/// Column/article
pub const COLUMN: &str = egui_phosphor::regular::BOOK_OPEN;
/// Quiz/brain
pub const QUIZ: &str = egui_phosphor::regular::BRAIN;
/// English/translation
pub const ENGLISH: &str = egui_phosphor::regular::TRANSLATE;

/// Create a RichText with an icon at a specific size and color.
pub fn icon_colored(icon: &str, size: f32, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(icon).size(size).color(color)
}
