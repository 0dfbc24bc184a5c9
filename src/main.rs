//! Orrery - interactive solar-system explorer
//!
//! A desktop application showing the planets on their orbits. Picking a
//! planet freezes the orbits and flies the camera in; closing the panel
//! resumes the motion and returns to the overview.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::input::InputPlugin;
use orrery::orrery::OrreryPlugin;
use orrery::render::RenderPlugin;
use orrery::types::OrreryConfig;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Cosmic Explorer".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Core first; presentation plugins read its resources
        .add_plugins(OrreryPlugin::new(OrreryConfig::from_env()))
        .add_plugins((InputPlugin, RenderPlugin, UiPlugin))
        .run();
}
