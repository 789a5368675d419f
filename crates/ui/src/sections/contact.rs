use egui::{FontId, RichText, TextEdit};
use verdant_core::motion;
use verdant_protocol::{Portfolio, ThemeToken};

use crate::app::PageState;
use crate::sections;
use crate::theme::{self, FONT_TITLE, ThemeMode};
use crate::widgets;

/// Seconds the "message sent" acknowledgement stays on screen.
const SENT_FEEDBACK_SECONDS: f64 = 4.0;

pub(crate) fn show(ui: &mut egui::Ui, page: &mut PageState, data: &Portfolio) {
    let mode = page.mode;
    sections::band(ui, mode, ThemeToken::Surface, |ui| {
        widgets::section_heading(ui, mode, "Get In Touch");

        ui.columns(2, |columns| {
            details(&mut columns[0], mode, data);
            form(&mut columns[1], page);
        });
    });
}

fn details(ui: &mut egui::Ui, mode: ThemeMode, data: &Portfolio) {
    ui.label(
        RichText::new("Let's Connect")
            .strong()
            .font(FontId::proportional(FONT_TITLE))
            .color(theme::resolve(ThemeToken::TextPrimary, mode)),
    );
    ui.add_space(8.0);
    ui.label(
        RichText::new(data.contact_blurb).color(theme::resolve(ThemeToken::TextSecondary, mode)),
    );
    ui.add_space(14.0);

    ui.horizontal(|ui| {
        ui.label(RichText::new("✉").color(theme::resolve(ThemeToken::Accent, mode)));
        ui.hyperlink_to(
            data.identity.email,
            format!("mailto:{}", data.identity.email),
        );
    });
    ui.horizontal(|ui| {
        ui.label(RichText::new("📞").color(theme::resolve(ThemeToken::Accent, mode)));
        ui.hyperlink_to(data.identity.phone, format!("tel:{}", data.identity.phone));
    });
    ui.add_space(14.0);

    ui.horizontal(|ui| {
        for social in &data.identity.socials {
            if widgets::outline_button(ui, mode, social.label).clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(social.url));
            }
            ui.add_space(6.0);
        }
    });
}

fn form(ui: &mut egui::Ui, page: &mut PageState) {
    let mode = page.mode;
    widgets::card_frame(mode).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new("Send a Message")
                .strong()
                .font(FontId::proportional(FONT_TITLE))
                .color(theme::resolve(ThemeToken::TextPrimary, mode)),
        );
        ui.label(
            RichText::new("I'll get back to you as soon as possible")
                .color(theme::resolve(ThemeToken::TextMuted, mode)),
        );
        ui.add_space(10.0);

        ui.columns(2, |columns| {
            field(&mut columns[0], mode, "First Name", |ui| {
                ui.add(
                    TextEdit::singleline(&mut page.draft.first_name)
                        .hint_text("John")
                        .desired_width(f32::INFINITY),
                );
            });
            field(&mut columns[1], mode, "Last Name", |ui| {
                ui.add(
                    TextEdit::singleline(&mut page.draft.last_name)
                        .hint_text("Doe")
                        .desired_width(f32::INFINITY),
                );
            });
        });
        field(ui, mode, "Email", |ui| {
            ui.add(
                TextEdit::singleline(&mut page.draft.email)
                    .hint_text("john@example.com")
                    .desired_width(f32::INFINITY),
            );
        });
        field(ui, mode, "Subject", |ui| {
            ui.add(
                TextEdit::singleline(&mut page.draft.subject)
                    .hint_text("Project Collaboration")
                    .desired_width(f32::INFINITY),
            );
        });
        field(ui, mode, "Message", |ui| {
            ui.add(
                TextEdit::multiline(&mut page.draft.body)
                    .hint_text("Tell me about your project or how we can work together...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
        });
        ui.add_space(10.0);

        let send = ui.add_sized(
            [ui.available_width(), 30.0],
            egui::Button::new(
                RichText::new("Send Message")
                    .strong()
                    .color(theme::resolve(ThemeToken::AccentOnAccent, mode)),
            )
            .fill(theme::resolve(ThemeToken::Accent, mode)),
        );
        if send.clicked() {
            submit(page);
        }

        if let Some(error) = page.draft_error {
            ui.add_space(6.0);
            ui.label(
                RichText::new(error.to_string())
                    .color(theme::resolve(ThemeToken::Danger, mode)),
            );
        }
        if let Some(sent) = page.sent_at {
            let fade = 1.0 - motion::progress(page.now, sent + SENT_FEEDBACK_SECONDS - 1.0, 1.0);
            if fade > 0.0 {
                ui.add_space(6.0);
                ui.label(
                    RichText::new("✓ Message sent. I'll get back to you soon.")
                        .color(theme::resolve(ThemeToken::Accent, mode).gamma_multiply(fade)),
                );
            } else {
                page.sent_at = None;
            }
        }
    });
}

fn field(
    ui: &mut egui::Ui,
    mode: ThemeMode,
    label: &str,
    add_input: impl FnOnce(&mut egui::Ui),
) {
    ui.label(RichText::new(label).color(theme::resolve(ThemeToken::TextSecondary, mode)));
    add_input(ui);
    ui.add_space(6.0);
}

/// Fire-and-forget submission: a valid draft is acknowledged and cleared,
/// nothing leaves the page.
fn submit(page: &mut PageState) {
    match page.draft.validate() {
        Ok(()) => {
            #[cfg(target_arch = "wasm32")]
            if let Ok(json) = serde_json::to_string(&page.draft) {
                web_sys::console::log_1(
                    &format!("verdant: simulated contact submission {json}").into(),
                );
            }
            page.draft.clear();
            page.draft_error = None;
            page.sent_at = Some(page.now);
        }
        Err(error) => {
            page.draft_error = Some(error);
            page.sent_at = None;
        }
    }
}
