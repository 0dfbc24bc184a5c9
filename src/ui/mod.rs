//! UI module providing the egui overlay.
//!
//! The overlay reads the selection and writes selection requests; it never
//! touches orbit or camera state directly.

pub mod content;
pub mod icons;
mod hud;
mod info_panel;
mod labels;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass};

use crate::input::PointerOverUi;
use crate::selection::SelectionChanged;
use crate::types::OrrerySet;

pub use content::QuizState;
pub use labels::LabelSettings;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveAction>()
            .init_resource::<QuizState>()
            .init_resource::<LabelSettings>()
            .init_resource::<icons::FontsInitialized>()
            .init_resource::<PointerOverUi>()
            // Selection changes close any open detail window.
            .add_systems(Update, close_action_on_selection_change.after(OrrerySet::Selection))
            // Font initialization must run before any UI systems that use icons.
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    labels::draw_body_labels,
                    hud::hud_system,
                    info_panel::info_panel_system,
                    reset_quiz_on_action_change,
                    info_panel::detail_window_system,
                    track_pointer_over_ui,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// The four content actions offered for a focused body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    News,
    Column,
    Quiz,
    English,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::News,
        ActionKind::Column,
        ActionKind::Quiz,
        ActionKind::English,
    ];

    /// Button label in the info panel.
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::News => "NEWS",
            ActionKind::Column => "COLUMN",
            ActionKind::Quiz => "QUIZ",
            ActionKind::English => "ENGLISH",
        }
    }

    /// Button caption under the label.
    pub fn caption(self) -> &'static str {
        match self {
            ActionKind::News => "最新ニュース",
            ActionKind::Column => "宇宙コラム",
            ActionKind::Quiz => "クイズ挑戦",
            ActionKind::English => "英語解説",
        }
    }

    /// Detail window title.
    pub fn title(self) -> &'static str {
        match self {
            ActionKind::News => "PLANETARY NEWS",
            ActionKind::Column => "COSMIC COLUMN",
            ActionKind::Quiz => "KNOWLEDGE CHECK",
            ActionKind::English => "LEARNING DATA",
        }
    }

    /// Detail window subtitle.
    pub fn subtitle(self) -> &'static str {
        match self {
            ActionKind::News => "最新ニュース",
            ActionKind::Column => "宇宙コラム",
            ActionKind::Quiz => "クイズに挑戦",
            ActionKind::English => "英語で学ぶ",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ActionKind::News => icons::NEWS,
            ActionKind::Column => icons::COLUMN,
            ActionKind::Quiz => icons::QUIZ,
            ActionKind::English => icons::ENGLISH,
        }
    }

    pub fn color(self) -> bevy_egui::egui::Color32 {
        use bevy_egui::egui::Color32;
        match self {
            ActionKind::News => Color32::from_rgb(34, 211, 238),
            ActionKind::Column => Color32::from_rgb(96, 165, 250),
            ActionKind::Quiz => Color32::from_rgb(192, 132, 252),
            ActionKind::English => Color32::from_rgb(52, 211, 153),
        }
    }
}

/// The action window currently open, if any.
#[derive(Resource, Default, Debug)]
pub struct ActiveAction(pub Option<ActionKind>);

impl ActiveAction {
    pub fn open(&mut self, kind: ActionKind) {
        self.0 = Some(kind);
    }

    pub fn close(&mut self) {
        self.0 = None;
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }
}

/// Colors shared by the overlay panels.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(2, 6, 23, 210);
    pub const ACCENT: Color32 = Color32::from_rgb(34, 211, 238);
    pub const ACCENT_DIM: Color32 = Color32::from_rgb(103, 232, 249);
    pub const TEXT: Color32 = Color32::from_rgb(236, 254, 255);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(150, 150, 160);
    pub const LIVE: Color32 = Color32::from_rgb(34, 197, 94);
    pub const PAUSED: Color32 = Color32::from_rgb(221, 170, 85);
    pub const WRONG: Color32 = Color32::from_rgb(248, 113, 113);
}

fn close_action_on_selection_change(
    mut changes: MessageReader<SelectionChanged>,
    mut active: ResMut<ActiveAction>,
) {
    if changes.read().count() > 0 && active.is_open() {
        debug!("Selection changed; closing {:?} window", active.0);
        active.close();
    }
}

/// A new or closed action window starts its quiz unanswered.
fn reset_quiz_on_action_change(active: Res<ActiveAction>, mut quiz: ResMut<QuizState>) {
    if active.is_changed() && quiz.is_locked() {
        quiz.reset();
    }
}

/// Publish whether egui owns the pointer so scene input can ignore it.
fn track_pointer_over_ui(mut contexts: EguiContexts, mut over_ui: ResMut<PointerOverUi>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    over_ui.0 = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{SelectionPlugin, SelectionRequest};
    use crate::types::configure_orrery_sets;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        configure_orrery_sets(&mut app);
        app.init_resource::<ActiveAction>()
            .init_resource::<QuizState>()
            .add_plugins(SelectionPlugin)
            .add_systems(
                Update,
                (
                    close_action_on_selection_change.after(OrrerySet::Selection),
                    reset_quiz_on_action_change.after(close_action_on_selection_change),
                ),
            );
        app
    }

    #[test]
    fn test_action_titles_distinct() {
        for (i, a) in ActionKind::ALL.iter().enumerate() {
            for b in &ActionKind::ALL[i + 1..] {
                assert_ne!(a.title(), b.title());
            }
        }
    }

    #[test]
    fn test_selection_change_closes_action() {
        let mut app = app();
        app.world_mut()
            .write_message(SelectionRequest::Pick("earth".into()));
        app.update();

        app.world_mut().resource_mut::<ActiveAction>().open(ActionKind::Quiz);
        app.update();
        assert!(app.world().resource::<ActiveAction>().is_open());

        app.world_mut()
            .write_message(SelectionRequest::Pick("mars".into()));
        app.update();
        assert!(!app.world().resource::<ActiveAction>().is_open());
    }

    #[test]
    fn test_rejected_pick_keeps_action() {
        let mut app = app();
        app.world_mut().resource_mut::<ActiveAction>().open(ActionKind::News);
        app.world_mut()
            .write_message(SelectionRequest::Pick("pluto".into()));
        app.update();
        assert_eq!(app.world().resource::<ActiveAction>().0, Some(ActionKind::News));
    }

    fn answer_earth_quiz(app: &mut App) {
        let quiz = content::quiz_for(&crate::catalog::BodyData::new("earth", "Earth"));
        app.world_mut().resource_mut::<QuizState>().answer(&quiz, 0);
    }

    #[test]
    fn test_quiz_answer_survives_frames() {
        let mut app = app();
        app.world_mut().resource_mut::<ActiveAction>().open(ActionKind::Quiz);
        app.update();

        answer_earth_quiz(&mut app);
        app.update();
        app.update();
        assert_eq!(app.world().resource::<QuizState>().answered(), Some(0));
    }

    #[test]
    fn test_reopening_action_resets_quiz() {
        let mut app = app();
        app.world_mut().resource_mut::<ActiveAction>().open(ActionKind::Quiz);
        app.update();
        answer_earth_quiz(&mut app);
        app.update();

        app.world_mut().resource_mut::<ActiveAction>().close();
        app.update();
        assert!(!app.world().resource::<QuizState>().is_locked());

        app.world_mut().resource_mut::<ActiveAction>().open(ActionKind::Quiz);
        app.update();
        assert_eq!(app.world().resource::<QuizState>().answered(), None);
    }

    #[test]
    fn test_selection_change_resets_quiz() {
        let mut app = app();
        app.world_mut()
            .write_message(SelectionRequest::Pick("earth".into()));
        app.world_mut().resource_mut::<ActiveAction>().open(ActionKind::Quiz);
        app.update();
        answer_earth_quiz(&mut app);

        app.world_mut()
            .write_message(SelectionRequest::Pick("mars".into()));
        app.update();
        assert!(!app.world().resource::<ActiveAction>().is_open());
        assert!(!app.world().resource::<QuizState>().is_locked());
    }
}
