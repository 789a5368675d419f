use egui::{FontId, RichText};
use verdant_core::motion;
use verdant_protocol::{Portfolio, SectionId, Skill, ThemeToken};

use crate::app::PageState;
use crate::sections;
use crate::theme::{self, FONT_CAPTION, FONT_TITLE, ThemeMode};
use crate::widgets;

pub(crate) fn show(ui: &mut egui::Ui, page: &mut PageState, data: &Portfolio) {
    let mode = page.mode;
    let entered = page.entered_at.get(&SectionId::Skills).copied();

    sections::band(ui, mode, ThemeToken::Surface, |ui| {
        widgets::section_heading(ui, mode, "Technical Skills");

        for (category_index, category) in data.skill_categories.iter().enumerate() {
            ui.label(
                RichText::new(category.name)
                    .strong()
                    .font(FontId::proportional(FONT_TITLE))
                    .color(theme::resolve(ThemeToken::Accent, mode)),
            );
            ui.add_space(10.0);

            ui.columns(2, |columns| {
                for (skill_index, skill) in category.skills.iter().enumerate() {
                    let column = &mut columns[skill_index % 2];
                    // Bars fill with the same stagger the cards use:
                    // category first, then each skill inside it.
                    let delay = motion::stagger_delay(category_index)
                        + motion::stagger_delay(skill_index) / 2.0
                        + 0.5;
                    let fill = match entered {
                        Some(t0) => {
                            motion::ease_out_cubic(motion::progress(
                                page.now,
                                t0 + delay,
                                motion::REVEAL_DURATION,
                            )) * f32::from(skill.level)
                                / 100.0
                        }
                        None => 0.0,
                    };
                    bar(column, mode, skill, fill);
                    column.add_space(12.0);
                }
            });
            ui.add_space(18.0);
        }
    });
}

fn bar(ui: &mut egui::Ui, mode: ThemeMode, skill: &Skill, fill: f32) {
    let response = ui
        .scope(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(skill.name)
                        .strong()
                        .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{}%", skill.level))
                            .font(FontId::proportional(FONT_CAPTION))
                            .color(theme::resolve(ThemeToken::TextMuted, mode)),
                    );
                });
            });
            widgets::progress_bar(ui, mode, fill);
        })
        .response;
    // Description surfaces on hover, like the original's reveal-on-hover.
    response.on_hover_text(skill.description);
}
