//! Info panel for the focused body and the action detail window.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::content::{self, QuizOutcome, QuizState};
use super::{ActionKind, ActiveAction, colors, icons};
use crate::catalog::{BodyCatalog, BodyData};
use crate::selection::{Selection, SelectionRequest};

/// Panel height as a fraction of the screen.
const PANEL_HEIGHT_FRACTION: f32 = 0.35;

/// Detail window content height as a fraction of the screen.
const DETAIL_HEIGHT_FRACTION: f32 = 0.6;

/// System that renders the bottom info panel while a body is focused.
///
/// Hidden while an action window is open.
pub fn info_panel_system(
    mut contexts: EguiContexts,
    selection: Res<Selection>,
    catalog: Res<BodyCatalog>,
    mut active: ResMut<ActiveAction>,
    mut requests: MessageWriter<SelectionRequest>,
) {
    if active.is_open() {
        return;
    }
    let Some(body) = selection.focused().and_then(|id| catalog.get(id.as_str())) else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let height = ctx.viewport_rect().height() * PANEL_HEIGHT_FRACTION;

    egui::TopBottomPanel::bottom("info_panel")
        .exact_height(height)
        .resizable(false)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(24, 16))
                .stroke(egui::Stroke::new(1.0, colors::ACCENT.gamma_multiply(0.3))),
        )
        .show(ctx, |ui| {
            render_header(ui, body, &mut requests);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                render_descriptions(ui, body);
                ui.add_space(12.0);
                if let Some(kind) = render_action_buttons(ui) {
                    info!("Opening {} for {}", kind.title(), body.id);
                    active.open(kind);
                }
            });
        });
}

/// Name, distance and the close button.
fn render_header(
    ui: &mut egui::Ui,
    body: &BodyData,
    requests: &mut MessageWriter<SelectionRequest>,
) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new("DESIGNATION")
                    .size(10.0)
                    .monospace()
                    .color(colors::ACCENT),
            );
            ui.horizontal(|ui| {
                ui.label(icons::icon_colored(icons::PLANET, 28.0, colors::ACCENT));
                ui.label(
                    egui::RichText::new(body.name.to_uppercase())
                        .size(32.0)
                        .strong()
                        .color(colors::TEXT),
                );
            });
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let close = egui::Button::new(icons::icon_colored(icons::CLOSE, 18.0, colors::TEXT))
                .min_size(egui::vec2(32.0, 32.0));
            if ui.add(close).on_hover_text("Close (Esc)").clicked() {
                requests.write(SelectionRequest::Clear);
            }

            ui.add_space(16.0);
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("DISTANCE")
                        .size(10.0)
                        .monospace()
                        .color(colors::ACCENT),
                );
                ui.label(
                    egui::RichText::new(format!("{} AU", body.orbit_radius))
                        .size(18.0)
                        .monospace()
                        .color(colors::TEXT),
                );
            });
        });
    });
}

fn render_descriptions(ui: &mut egui::Ui, body: &BodyData) {
    ui.columns(2, |columns| {
        columns[0].label(
            egui::RichText::new(&body.description_ja)
                .size(14.0)
                .color(colors::TEXT),
        );
        columns[1].label(
            egui::RichText::new(&body.description_en)
                .size(14.0)
                .italics()
                .color(colors::TEXT_MUTED),
        );
    });
}

/// The four action buttons; returns the clicked one.
fn render_action_buttons(ui: &mut egui::Ui) -> Option<ActionKind> {
    let mut clicked = None;
    ui.columns(ActionKind::ALL.len(), |columns| {
        for (column, kind) in columns.iter_mut().zip(ActionKind::ALL) {
            let text = format!("{}\n{}\n{}", kind.icon(), kind.label(), kind.caption());
            let button = egui::Button::new(egui::RichText::new(text).color(kind.color()))
                .stroke(egui::Stroke::new(1.0, kind.color().gamma_multiply(0.5)))
                .fill(egui::Color32::TRANSPARENT)
                .min_size(egui::vec2(column.available_width(), 72.0));
            if column.add(button).clicked() {
                clicked = Some(kind);
            }
        }
    });
    clicked
}

/// Modal-style window for the open action.
pub fn detail_window_system(
    mut contexts: EguiContexts,
    selection: Res<Selection>,
    catalog: Res<BodyCatalog>,
    mut active: ResMut<ActiveAction>,
    mut quiz_state: ResMut<QuizState>,
) {
    let Some(kind) = active.0 else {
        return;
    };
    let Some(body) = selection.focused().and_then(|id| catalog.get(id.as_str())) else {
        active.close();
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let max_height = ctx.viewport_rect().height() * DETAIL_HEIGHT_FRACTION;
    let mut open = true;
    egui::Window::new(kind.title())
        .id(egui::Id::new("action_detail"))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .default_width(560.0)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .corner_radius(12.0)
                .inner_margin(egui::Margin::same(20))
                .stroke(egui::Stroke::new(2.0, kind.color())),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(icons::icon_colored(kind.icon(), 24.0, kind.color()));
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{}  {}", kind.title(), kind.subtitle()))
                            .size(10.0)
                            .monospace()
                            .color(colors::TEXT_MUTED),
                    );
                    ui.label(
                        egui::RichText::new(&body.name)
                            .size(22.0)
                            .strong()
                            .color(colors::TEXT),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui
                        .button(icons::icon_colored(icons::CLOSE, 18.0, colors::TEXT))
                        .clicked()
                    {
                        open = false;
                    }
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(max_height)
                .show(ui, |ui| match kind {
                    ActionKind::News => render_news(ui, body),
                    ActionKind::Column => render_column(ui, body),
                    ActionKind::Quiz => render_quiz(ui, body, &mut quiz_state),
                    ActionKind::English => render_english(ui, body),
                });
        });

    if !open {
        active.close();
    }
}

fn render_news(ui: &mut egui::Ui, body: &BodyData) {
    let accent = ActionKind::News.color();
    let mut items = content::news_for(body).into_iter();

    if let Some(lead) = items.next() {
        egui::Frame::NONE
            .fill(accent.gamma_multiply(0.08))
            .stroke(egui::Stroke::new(1.0, accent.gamma_multiply(0.3)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("BREAKING NEWS")
                            .size(10.0)
                            .monospace()
                            .color(accent),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new("2時間前").size(11.0).color(colors::TEXT_MUTED));
                    });
                });
                ui.label(egui::RichText::new(&lead.title).size(17.0).strong().color(colors::TEXT));
                ui.label(
                    egui::RichText::new(format!("{} {}", lead.body, content::LEAD_FOOTNOTE))
                        .size(13.0)
                        .color(colors::TEXT_MUTED),
                );
            });
    }

    ui.add_space(12.0);
    for item in items {
        ui.horizontal(|ui| {
            ui.label(icons::icon_colored(icons::NEWS, 28.0, accent.gamma_multiply(0.5)));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&item.title).size(14.0).color(colors::TEXT));
                ui.label(egui::RichText::new(&item.body).size(11.0).color(colors::TEXT_MUTED));
            });
        });
        ui.add_space(8.0);
    }
}

fn render_column(ui: &mut egui::Ui, body: &BodyData) {
    let accent = ActionKind::Column.color();
    let article = content::column_for(body);

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(article.initial.to_string())
                .size(32.0)
                .strong()
                .color(accent),
        );
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&article.heading).size(18.0).strong().color(colors::TEXT));
            ui.label(egui::RichText::new(article.byline).size(11.0).color(colors::TEXT_MUTED));
        });
    });
    ui.add_space(12.0);

    ui.label(egui::RichText::new(&article.intro).color(colors::TEXT));
    ui.add_space(8.0);
    egui::Frame::NONE
        .fill(accent.gamma_multiply(0.08))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(&article.quote).italics().color(accent));
        });
    ui.add_space(8.0);
    ui.label(egui::RichText::new(&article.observation).color(colors::TEXT));
    ui.add_space(12.0);
    ui.label(egui::RichText::new(article.section).strong().color(accent));
    ui.label(egui::RichText::new(&article.outlook).color(colors::TEXT));
}

fn render_quiz(ui: &mut egui::Ui, body: &BodyData, state: &mut QuizState) {
    let accent = ActionKind::Quiz.color();
    let quiz = content::quiz_for(body);

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("QUESTION").size(11.0).strong().color(accent));
        ui.label(egui::RichText::new(&quiz.question).size(20.0).strong().color(colors::TEXT));
    });
    ui.add_space(12.0);

    let outcome = state.outcome(&quiz);
    for (i, option) in quiz.options.iter().enumerate() {
        let chosen = state.answered() == Some(i);
        let tint = match outcome {
            Some(QuizOutcome::Correct) if chosen => colors::LIVE,
            Some(QuizOutcome::Incorrect { .. }) if chosen => colors::WRONG,
            _ => colors::TEXT,
        };
        let text = format!("{}. {}", content::option_letter(i), option);
        let button = egui::Button::new(egui::RichText::new(text).color(tint))
            .stroke(egui::Stroke::new(1.0, tint.gamma_multiply(0.4)))
            .min_size(egui::vec2(ui.available_width(), 40.0));
        let response = ui.add_enabled(!state.is_locked() || chosen, button);
        if response.clicked() {
            if let Some(result) = state.answer(&quiz, i) {
                info!("Quiz answered for {}: {result:?}", body.id);
            }
        }
        ui.add_space(4.0);
    }

    if let Some(result) = state.outcome(&quiz) {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| match result {
            QuizOutcome::Correct => {
                ui.label(egui::RichText::new("正解！").size(18.0).strong().color(colors::LIVE));
                ui.label(
                    egui::RichText::new(format!("{}についてよく知っていますね！", body.name))
                        .size(12.0)
                        .color(colors::TEXT_MUTED),
                );
            }
            QuizOutcome::Incorrect { answer } => {
                ui.label(egui::RichText::new("残念...").size(18.0).strong().color(colors::WRONG));
                ui.label(
                    egui::RichText::new(format!(
                        "正解は {} でした。",
                        content::option_letter(answer)
                    ))
                    .size(12.0)
                    .color(colors::TEXT_MUTED),
                );
            }
        });
    }
}

fn render_english(ui: &mut egui::Ui, body: &BodyData) {
    let accent = ActionKind::English.color();

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("TODAY'S KEYWORD").size(11.0).color(accent));
        ui.label(egui::RichText::new(&body.name).size(34.0).strong().color(colors::TEXT));
        ui.label(egui::RichText::new("名詞 • 天体").italics().color(colors::TEXT_MUTED));
    });
    ui.add_space(12.0);

    ui.label(egui::RichText::new("ENGLISH DESCRIPTION").size(10.0).color(colors::TEXT_MUTED));
    ui.label(
        egui::RichText::new(format!("\"{}\"", body.description_en))
            .size(16.0)
            .color(accent),
    );
    ui.add_space(8.0);
    ui.label(egui::RichText::new("日本語訳").size(10.0).color(colors::TEXT_MUTED));
    ui.label(egui::RichText::new(&body.description_ja).size(13.0).color(colors::TEXT));
    ui.add_space(12.0);

    egui::Grid::new("vocabulary")
        .num_columns(2)
        .spacing(egui::vec2(24.0, 8.0))
        .show(ui, |ui| {
            for (i, (en, ja)) in content::VOCABULARY.iter().enumerate() {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(*en).strong().color(accent));
                    ui.label(egui::RichText::new(*ja).size(10.0).color(colors::TEXT_MUTED));
                });
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}
