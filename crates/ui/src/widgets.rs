use egui::{CornerRadius, FontId, Margin, RichText, Sense, Stroke, Vec2};
use verdant_protocol::{Metric, ThemeToken};

use crate::theme::{self, FONT_CAPTION, FONT_EMPHASIS, FONT_HEADING, ThemeMode};

/// Standard card chrome: filled, bordered, rounded, padded.
pub fn card_frame(mode: ThemeMode) -> egui::Frame {
    egui::Frame::new()
        .fill(theme::resolve(ThemeToken::CardBackground, mode))
        .stroke(Stroke::new(
            1.0,
            theme::resolve(ThemeToken::CardBorder, mode),
        ))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(16))
}

/// Lay out `add_contents` in a column of at most `max_width`, centered
/// inside the available row.
pub fn centered_column(
    ui: &mut egui::Ui,
    max_width: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let width = ui.available_width().min(max_width);
    let indent = (ui.available_width() - width) / 2.0;
    ui.horizontal(|ui| {
        ui.add_space(indent);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui);
        });
    });
}

/// Large centered section heading.
pub fn section_heading(ui: &mut egui::Ui, mode: ThemeMode, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(text)
                .font(FontId::proportional(FONT_HEADING))
                .strong()
                .color(theme::resolve(ThemeToken::TextPrimary, mode)),
        );
    });
    ui.add_space(28.0);
}

fn pill(
    ui: &mut egui::Ui,
    text: &str,
    fill: egui::Color32,
    text_color: egui::Color32,
    stroke: Stroke,
) -> egui::Response {
    egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(
                RichText::new(text)
                    .font(FontId::proportional(FONT_CAPTION))
                    .color(text_color),
            );
        })
        .response
}

/// Small filled pill label.
pub fn badge(ui: &mut egui::Ui, mode: ThemeMode, text: &str) {
    pill(
        ui,
        text,
        theme::resolve(ThemeToken::BadgeBackground, mode),
        theme::resolve(ThemeToken::BadgeText, mode),
        Stroke::NONE,
    );
}

/// Bordered pill without a fill.
pub fn outline_badge(ui: &mut egui::Ui, mode: ThemeMode, text: &str) {
    pill(
        ui,
        text,
        egui::Color32::TRANSPARENT,
        theme::resolve(ThemeToken::TextSecondary, mode),
        Stroke::new(1.0, theme::resolve(ThemeToken::BadgeOutline, mode)),
    );
}

/// Accent-filled call-to-action button.
pub fn accent_button(ui: &mut egui::Ui, mode: ThemeMode, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(
            RichText::new(text)
                .strong()
                .color(theme::resolve(ThemeToken::AccentOnAccent, mode)),
        )
        .fill(theme::resolve(ThemeToken::Accent, mode))
        .corner_radius(CornerRadius::same(6)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Accent-bordered button with a transparent fill.
pub fn outline_button(ui: &mut egui::Ui, mode: ThemeMode, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).color(theme::resolve(ThemeToken::Accent, mode)))
            .fill(egui::Color32::TRANSPARENT)
            .stroke(Stroke::new(1.0, theme::resolve(ThemeToken::Accent, mode)))
            .corner_radius(CornerRadius::same(6)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// One metric tile: a highlighted value over a muted label.
pub fn metric_tile(ui: &mut egui::Ui, mode: ThemeMode, metric: &Metric) {
    egui::Frame::new()
        .fill(theme::resolve(ThemeToken::SurfaceAlt, mode))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(metric.value)
                        .strong()
                        .font(FontId::proportional(FONT_EMPHASIS))
                        .color(theme::resolve(ThemeToken::Accent, mode)),
                );
                ui.label(
                    RichText::new(metric.label)
                        .font(FontId::proportional(FONT_CAPTION))
                        .color(theme::resolve(ThemeToken::TextMuted, mode)),
                );
            });
        });
}

/// Painted progress bar; `fraction` is the current animated fill.
pub fn progress_bar(ui: &mut egui::Ui, mode: ThemeMode, fraction: f32) {
    let desired = Vec2::new(ui.available_width(), 8.0);
    let (rect, _response) = ui.allocate_exact_size(desired, Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(
        rect,
        CornerRadius::same(4),
        theme::resolve(ThemeToken::ProgressTrack, mode),
    );
    let mut fill = rect;
    fill.set_width(rect.width() * fraction.clamp(0.0, 1.0));
    painter.rect_filled(
        fill,
        CornerRadius::same(4),
        theme::resolve(ThemeToken::ProgressFill, mode),
    );
}
