//! One renderer per page section, in page order. Each `show` draws the
//! full-width band for its section and returns through the caller's
//! scope so the section's extent can be measured for the tracker.

pub mod about;
pub mod achievements;
pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

use egui::{FontId, Margin, RichText, Stroke};
use verdant_protocol::ThemeToken;

use crate::theme::{self, FONT_CAPTION, ThemeMode};
use crate::widgets;

/// Content column width shared by every section.
pub(crate) const COLUMN_WIDTH: f32 = 960.0;
/// Vertical padding above and below each section's content.
pub(crate) const SECTION_PADDING: f32 = 56.0;

/// Full-width band with the given background, content centered inside.
pub(crate) fn band(
    ui: &mut egui::Ui,
    mode: ThemeMode,
    background: ThemeToken,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::new()
        .fill(theme::resolve(background, mode))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add_space(SECTION_PADDING);
            widgets::centered_column(ui, COLUMN_WIDTH, add_contents);
            ui.add_space(SECTION_PADDING);
        });
}

/// Thin bottom strip under the last section.
pub(crate) fn footer(ui: &mut egui::Ui, mode: ThemeMode, text: &str) {
    let border = theme::resolve(ThemeToken::Border, mode);
    egui::Frame::new()
        .fill(theme::resolve(ThemeToken::Background, mode))
        .inner_margin(Margin::symmetric(0, 24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let top = ui.cursor().top();
            ui.painter().hline(
                ui.max_rect().x_range(),
                top - 24.0,
                Stroke::new(1.0, border),
            );
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(text)
                        .font(FontId::proportional(FONT_CAPTION))
                        .color(theme::resolve(ThemeToken::TextMuted, mode)),
                );
            });
        });
}
