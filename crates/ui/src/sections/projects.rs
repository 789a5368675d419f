use egui::{CornerRadius, FontId, RichText, Sense, Stroke};
use verdant_protocol::{Portfolio, Project, SectionId, ThemeToken};

use crate::app::PageState;
use crate::sections;
use crate::theme::{self, FONT_EMPHASIS, FONT_TITLE, ThemeMode};
use crate::widgets;

/// Decorative glyph per project card, in data order.
const GLYPHS: [&str; 4] = ["🛡", "🩺", "🧠", "🏦"];

fn glyph(index: usize) -> &'static str {
    GLYPHS.get(index).copied().unwrap_or("🛠")
}

pub(crate) fn show(ui: &mut egui::Ui, page: &mut PageState, data: &Portfolio) {
    let mode = page.mode;
    let mut clicked = None;

    sections::band(ui, mode, ThemeToken::Background, |ui| {
        widgets::section_heading(ui, mode, "Featured Projects");

        ui.columns(2, |columns| {
            for (index, project) in data.projects.iter().enumerate() {
                let column = &mut columns[index % 2];
                let alpha = page.card_alpha(SectionId::Projects, index);
                column.scope(|ui| {
                    ui.multiply_opacity(alpha);
                    if card(ui, mode, index, project).clicked() {
                        clicked = Some(index);
                    }
                });
                column.add_space(14.0);
            }
        });
    });

    if clicked.is_some() {
        page.selected_project = clicked;
    }
}

fn card(ui: &mut egui::Ui, mode: ThemeMode, index: usize, project: &Project) -> egui::Response {
    let response = widgets::card_frame(mode)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(glyph(index)).font(FontId::proportional(20.0)));
                ui.add_space(4.0);
                ui.label(
                    RichText::new(project.title)
                        .strong()
                        .font(FontId::proportional(FONT_TITLE))
                        .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                );
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(project.description)
                    .color(theme::resolve(ThemeToken::TextSecondary, mode)),
            );
            ui.add_space(10.0);

            ui.columns(3, |tiles| {
                for (metric, tile) in project.metrics.iter().zip(tiles.iter_mut()) {
                    widgets::metric_tile(tile, mode, metric);
                }
            });
            ui.add_space(10.0);

            ui.label(
                RichText::new("Key Features")
                    .strong()
                    .color(theme::resolve(ThemeToken::TextPrimary, mode)),
            );
            ui.horizontal_wrapped(|ui| {
                for feature in project.features.iter().take(3) {
                    widgets::outline_badge(ui, mode, feature);
                }
                let more = project.features.len().saturating_sub(3);
                if more > 0 {
                    widgets::outline_badge(ui, mode, &format!("+{more} more"));
                }
            });
        })
        .response;

    let response = response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    if response.hovered() {
        ui.painter().rect_filled(
            response.rect,
            CornerRadius::same(8),
            theme::resolve(ThemeToken::CardHover, mode),
        );
        ui.painter().rect_stroke(
            response.rect,
            CornerRadius::same(8),
            Stroke::new(1.5, theme::resolve(ThemeToken::Accent, mode)),
            egui::StrokeKind::Outside,
        );
    }
    response
}

/// Expanded view shown in the detail dialog.
pub(crate) fn detail(ui: &mut egui::Ui, mode: ThemeMode, project: &Project) {
    ui.label(
        RichText::new(project.long_description)
            .color(theme::resolve(ThemeToken::TextSecondary, mode)),
    );
    ui.add_space(12.0);

    ui.columns(3, |tiles| {
        for (metric, tile) in project.metrics.iter().zip(tiles.iter_mut()) {
            widgets::metric_tile(tile, mode, metric);
        }
    });
    ui.add_space(12.0);

    ui.label(
        RichText::new("Key Features")
            .strong()
            .font(FontId::proportional(FONT_EMPHASIS))
            .color(theme::resolve(ThemeToken::TextPrimary, mode)),
    );
    ui.horizontal_wrapped(|ui| {
        for feature in &project.features {
            widgets::outline_badge(ui, mode, feature);
        }
    });
    ui.add_space(10.0);

    ui.label(
        RichText::new("Technologies Used")
            .strong()
            .font(FontId::proportional(FONT_EMPHASIS))
            .color(theme::resolve(ThemeToken::TextPrimary, mode)),
    );
    ui.horizontal_wrapped(|ui| {
        for tech in &project.technologies {
            widgets::badge(ui, mode, tech);
        }
    });
    ui.add_space(14.0);

    ui.horizontal(|ui| {
        if widgets::accent_button(ui, mode, "View Code").clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(project.github_url));
        }
        ui.add_space(8.0);
        if widgets::outline_button(ui, mode, "Live Demo").clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(project.demo_url));
        }
    });
}
