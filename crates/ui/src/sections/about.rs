use egui::{FontId, RichText};
use verdant_protocol::{Portfolio, ThemeToken};

use crate::app::PageState;
use crate::sections;
use crate::theme::{self, FONT_EMPHASIS, ThemeMode};
use crate::widgets;

pub(crate) fn show(ui: &mut egui::Ui, page: &mut PageState, data: &Portfolio) {
    let mode = page.mode;
    sections::band(ui, mode, ThemeToken::Surface, |ui| {
        widgets::section_heading(ui, mode, "About Me");

        ui.columns(2, |columns| {
            let left = &mut columns[0];
            for paragraph in &data.about_paragraphs {
                left.label(
                    RichText::new(*paragraph)
                        .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                );
                left.add_space(10.0);
            }
            left.horizontal_wrapped(|ui| {
                for tag in &data.about_badges {
                    widgets::badge(ui, mode, tag);
                }
            });

            let right = &mut columns[1];
            info_card(right, mode, "📍", "Location", data.identity.location);
            right.add_space(12.0);
            info_card(right, mode, "📅", "Current Status", data.identity.status);
        });
    });
}

fn info_card(ui: &mut egui::Ui, mode: ThemeMode, glyph: &str, title: &str, body: &str) {
    widgets::card_frame(mode).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(glyph).font(FontId::proportional(20.0)));
            ui.add_space(6.0);
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(title)
                        .strong()
                        .font(FontId::proportional(FONT_EMPHASIS))
                        .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                );
                ui.label(
                    RichText::new(body).color(theme::resolve(ThemeToken::TextMuted, mode)),
                );
            });
        });
    });
}
