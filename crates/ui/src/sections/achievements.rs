use egui::{CornerRadius, FontId, Margin, RichText};
use verdant_protocol::{Portfolio, SectionId, ThemeToken};

use crate::app::PageState;
use crate::sections;
use crate::theme::{self, FONT_EMPHASIS, FONT_HEADING, FONT_TITLE, ThemeMode};
use crate::widgets;

pub(crate) fn show(ui: &mut egui::Ui, page: &mut PageState, data: &Portfolio) {
    let mode = page.mode;
    let mut view_projects = false;

    sections::band(ui, mode, ThemeToken::SurfaceAlt, |ui| {
        widgets::section_heading(ui, mode, "Achievements & Recognition");
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(
                    "Celebrating wins in hackathons, competitions, and recognition for \
                     innovative projects",
                )
                .color(theme::resolve(ThemeToken::TextSecondary, mode)),
            );
        });
        ui.add_space(24.0);

        ui.columns(data.achievement_stats.len().max(1), |columns| {
            for (stat, column) in data.achievement_stats.iter().zip(columns.iter_mut()) {
                widgets::card_frame(mode).show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(stat.glyph).font(FontId::proportional(22.0)));
                        ui.label(
                            RichText::new(stat.number)
                                .strong()
                                .font(FontId::proportional(FONT_HEADING - 6.0))
                                .color(theme::resolve(ThemeToken::Accent, mode)),
                        );
                        ui.label(
                            RichText::new(stat.label)
                                .color(theme::resolve(ThemeToken::TextMuted, mode)),
                        );
                    });
                });
            }
        });
        ui.add_space(24.0);

        for (index, achievement) in data.achievements.iter().enumerate() {
            let alpha = page.card_alpha(SectionId::Achievements, index);
            ui.scope(|ui| {
                ui.multiply_opacity(alpha);
                widgets::card_frame(mode).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        widgets::badge(ui, mode, achievement.position);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Min),
                            |ui| {
                                ui.vertical(|ui| {
                                    ui.label(
                                        RichText::new(achievement.date).color(
                                            theme::resolve(ThemeToken::TextMuted, mode),
                                        ),
                                    );
                                    ui.label(
                                        RichText::new(achievement.impact)
                                            .color(theme::resolve(ThemeToken::Accent, mode)),
                                    );
                                });
                            },
                        );
                    });
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(achievement.title)
                            .strong()
                            .font(FontId::proportional(FONT_TITLE))
                            .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                    );
                    ui.horizontal_wrapped(|ui| {
                        widgets::outline_badge(ui, mode, achievement.category);
                    });
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(achievement.description)
                            .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                    );
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("🏆"));
                        ui.label(
                            RichText::new(achievement.position)
                                .strong()
                                .color(theme::resolve(ThemeToken::Accent, mode)),
                        );
                    });
                });
            });
            ui.add_space(14.0);
        }

        ui.add_space(12.0);
        if call_to_action(ui, mode) {
            view_projects = true;
        }
    });

    if view_projects {
        page.scroll_target = Some(SectionId::Projects);
    }
}

/// Accent banner at the bottom of the section. Returns true when the
/// "View All Projects" button is clicked.
fn call_to_action(ui: &mut egui::Ui, mode: ThemeMode) -> bool {
    let mut clicked = false;
    ui.vertical_centered(|ui| {
        egui::Frame::new()
            .fill(theme::resolve(ThemeToken::Accent, mode))
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::same(20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let on_accent = theme::resolve(ThemeToken::AccentOnAccent, mode);
                    ui.label(
                        RichText::new("Ready for New Challenges")
                            .strong()
                            .font(FontId::proportional(FONT_EMPHASIS + 2.0))
                            .color(on_accent),
                    );
                    ui.label(
                        RichText::new("Always looking for opportunities to compete and innovate")
                            .color(on_accent),
                    );
                    ui.add_space(8.0);
                    // Inverted button so it stays readable on the accent fill.
                    clicked = ui
                        .add(
                            egui::Button::new(
                                RichText::new("View All Projects")
                                    .strong()
                                    .color(theme::resolve(ThemeToken::Accent, mode)),
                            )
                            .fill(on_accent)
                            .corner_radius(CornerRadius::same(6)),
                        )
                        .on_hover_cursor(egui::CursorIcon::PointingHand)
                        .clicked();
                });
            });
    });
    clicked
}
