use egui::{FontId, RichText};
use verdant_protocol::{Portfolio, SectionId, ThemeToken};

use crate::app::PageState;
use crate::sections;
use crate::theme::{self, FONT_EMPHASIS, FONT_TITLE};
use crate::widgets;

pub(crate) fn show(ui: &mut egui::Ui, page: &mut PageState, data: &Portfolio) {
    let mode = page.mode;
    sections::band(ui, mode, ThemeToken::Surface, |ui| {
        widgets::section_heading(ui, mode, "Experience");

        for (index, role) in data.experience.iter().enumerate() {
            let alpha = page.card_alpha(SectionId::Experience, index);
            ui.scope(|ui| {
                ui.multiply_opacity(alpha);
                widgets::card_frame(mode).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(role.title)
                                    .strong()
                                    .font(FontId::proportional(FONT_TITLE))
                                    .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                            );
                            ui.label(
                                RichText::new(role.organization)
                                    .font(FontId::proportional(FONT_EMPHASIS))
                                    .color(theme::resolve(ThemeToken::Accent, mode)),
                            );
                            ui.label(
                                RichText::new(role.location)
                                    .color(theme::resolve(ThemeToken::TextMuted, mode)),
                            );
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Min),
                            |ui| {
                                widgets::badge(ui, mode, role.period);
                            },
                        );
                    });
                    ui.add_space(8.0);
                    for highlight in &role.highlights {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(
                                RichText::new("⚡")
                                    .color(theme::resolve(ThemeToken::Accent, mode)),
                            );
                            ui.label(
                                RichText::new(*highlight)
                                    .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                            );
                        });
                    }
                });
            });
            ui.add_space(14.0);
        }
    });
}
