use egui::{FontId, RichText};
use verdant_protocol::{Portfolio, SectionId, ThemeToken};

use crate::app::PageState;
use crate::sections;
use crate::theme::{self, FONT_EMPHASIS, FONT_TITLE};
use crate::widgets;

pub(crate) fn show(ui: &mut egui::Ui, page: &mut PageState, data: &Portfolio) {
    let mode = page.mode;
    sections::band(ui, mode, ThemeToken::Background, |ui| {
        widgets::section_heading(ui, mode, "Education");

        for (index, entry) in data.education.iter().enumerate() {
            let alpha = page.card_alpha(SectionId::Education, index);
            ui.scope(|ui| {
                ui.multiply_opacity(alpha);
                widgets::card_frame(mode).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(entry.degree)
                                    .strong()
                                    .font(FontId::proportional(FONT_TITLE))
                                    .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                            );
                            ui.label(
                                RichText::new(entry.field)
                                    .font(FontId::proportional(FONT_EMPHASIS))
                                    .color(theme::resolve(ThemeToken::Accent, mode)),
                            );
                            ui.label(
                                RichText::new(entry.institution)
                                    .color(theme::resolve(ThemeToken::TextMuted, mode)),
                            );
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Min),
                            |ui| {
                                widgets::badge(ui, mode, entry.period);
                            },
                        );
                    });
                    if !entry.note.is_empty() {
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(entry.note)
                                .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                        );
                    }
                });
            });
            ui.add_space(12.0);
        }
    });
}
