use egui::{FontId, RichText, Sense, Stroke};
use verdant_core::motion;
use verdant_protocol::{Portfolio, SectionId, ThemeToken};

use crate::app::PageState;
use crate::theme::{self, FONT_DISPLAY, FONT_EMPHASIS, FONT_TITLE};
use crate::widgets;

const AVATAR_RADIUS: f32 = 56.0;

pub(crate) fn show(ui: &mut egui::Ui, page: &mut PageState, data: &Portfolio) {
    let mode = page.mode;
    let accent = theme::resolve(ThemeToken::Accent, mode);

    egui::Frame::new()
        .fill(theme::resolve(ThemeToken::Background, mode))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let min_height = (page.viewport_height - 48.0).max(420.0);
            ui.set_min_height(min_height);

            // Soft background glows, echoing the original's blurred blobs.
            let band = egui::Rect::from_min_size(
                ui.cursor().min,
                egui::vec2(ui.available_width(), min_height),
            );
            let painter = ui.painter();
            painter.circle_filled(
                band.lerp_inside(egui::vec2(0.25, 0.35)),
                180.0,
                theme::resolve(ThemeToken::HeroGlowWarm, mode),
            );
            painter.circle_filled(
                band.lerp_inside(egui::vec2(0.75, 0.7)),
                230.0,
                theme::resolve(ThemeToken::HeroGlowCool, mode),
            );

            ui.vertical_centered(|ui| {
                ui.add_space(min_height * 0.16);
                avatar(ui, page, data.identity.initials);
                ui.add_space(24.0);

                // Typewriter name with a blinking caret.
                let typed = motion::typed_prefix(data.identity.name, page.shown_for());
                let caret_on = typed.len() < data.identity.name.len()
                    || motion::pulse(page.now, 1.0, 0.0) > 0.5;
                let caret = if caret_on { "|" } else { " " };
                ui.label(
                    RichText::new(format!("{typed}{caret}"))
                        .font(FontId::proportional(FONT_DISPLAY))
                        .strong()
                        .color(accent),
                );
                ui.add_space(10.0);

                ui.label(
                    RichText::new(data.identity.tagline)
                        .font(FontId::proportional(FONT_EMPHASIS))
                        .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                );
                ui.add_space(28.0);

                ui.horizontal_top(|ui| {
                    let buttons_width = 330.0_f32.min(ui.available_width());
                    ui.add_space((ui.available_width() - buttons_width) / 2.0);
                    if widgets::accent_button(ui, mode, "View My Work  ⌄").clicked() {
                        page.scroll_target = Some(SectionId::Projects);
                    }
                    ui.add_space(10.0);
                    if widgets::outline_button(ui, mode, "⬇  Download Resume").clicked() {
                        ui.ctx()
                            .open_url(egui::OpenUrl::new_tab(data.identity.resume_url));
                    }
                });
                ui.add_space(24.0);

                ui.horizontal_top(|ui| {
                    let links_width = 300.0_f32.min(ui.available_width());
                    ui.add_space((ui.available_width() - links_width) / 2.0);
                    for social in &data.identity.socials {
                        ui.hyperlink_to(social.label, social.url);
                        ui.add_space(10.0);
                    }
                    ui.hyperlink_to("Email", format!("mailto:{}", data.identity.email));
                    ui.add_space(10.0);
                    ui.hyperlink_to("Phone", format!("tel:{}", data.identity.phone));
                });
            });
        });
}

fn avatar(ui: &mut egui::Ui, page: &PageState, initials: &str) {
    let mode = page.mode;
    let size = egui::vec2(AVATAR_RADIUS * 2.0 + 8.0, AVATAR_RADIUS * 2.0 + 8.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    let center = rect.center();
    // Ring widens and brightens on hover, like the original's scale-up.
    let (ring, ring_token) = if response.hovered() {
        (4.0, ThemeToken::AccentHover)
    } else {
        (3.0, ThemeToken::Accent)
    };
    let painter = ui.painter();
    painter.circle_filled(
        center,
        AVATAR_RADIUS,
        theme::resolve(ThemeToken::AccentSoft, mode),
    );
    painter.circle_stroke(
        center,
        AVATAR_RADIUS,
        Stroke::new(ring, theme::resolve(ring_token, mode)),
    );
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        initials,
        FontId::proportional(FONT_TITLE + 8.0),
        theme::resolve(ThemeToken::TextPrimary, mode),
    );
}
