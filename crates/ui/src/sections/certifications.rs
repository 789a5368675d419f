use egui::{FontId, RichText};
use verdant_protocol::{Portfolio, SectionId, ThemeToken};

use crate::app::PageState;
use crate::sections;
use crate::theme::{self, FONT_EMPHASIS};
use crate::widgets;

pub(crate) fn show(ui: &mut egui::Ui, page: &mut PageState, data: &Portfolio) {
    let mode = page.mode;
    sections::band(ui, mode, ThemeToken::Background, |ui| {
        widgets::section_heading(ui, mode, "Certifications");

        ui.columns(3, |columns| {
            for (index, cert) in data.certifications.iter().enumerate() {
                let column = &mut columns[index % 3];
                let alpha = page.card_alpha(SectionId::Certifications, index / 3);
                column.scope(|ui| {
                    ui.multiply_opacity(alpha);
                    widgets::card_frame(mode).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new("🏅").font(FontId::proportional(18.0)));
                            ui.label(
                                RichText::new(cert.name)
                                    .strong()
                                    .font(FontId::proportional(FONT_EMPHASIS))
                                    .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                            );
                        });
                        ui.label(
                            RichText::new(cert.issuer)
                                .color(theme::resolve(ThemeToken::Accent, mode)),
                        );
                        ui.label(
                            RichText::new(cert.description)
                                .color(theme::resolve(ThemeToken::TextMuted, mode)),
                        );
                        ui.add_space(6.0);
                        ui.horizontal_wrapped(|ui| {
                            widgets::badge(ui, mode, cert.year);
                            if !cert.credential_id.is_empty() {
                                widgets::outline_badge(ui, mode, cert.credential_id);
                            }
                        });
                    });
                });
                column.add_space(12.0);
            }
        });
    });
}
