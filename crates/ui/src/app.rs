use std::collections::BTreeMap;

use eframe::egui;
use egui::{Align, Button, FontId, Layout, Margin, RichText};
use verdant_core::contact::{DraftError, MessageDraft};
use verdant_core::content;
use verdant_core::motion;
use verdant_core::tracker::{
    SectionExtent, SectionLayout, TrackerConfig, ViewportBand, ViewportTracker,
};
use verdant_protocol::{Portfolio, SectionId, ThemeToken};

use crate::sections;
use crate::theme::{self, ThemeMode};

/// Section extents measured while laying out the previous frame. The
/// tracker reads layout through this; one frame of staleness is fine
/// because every event recomputes from current truth.
#[derive(Debug, Default, Clone)]
struct MeasuredLayout {
    extents: BTreeMap<SectionId, SectionExtent>,
}

impl MeasuredLayout {
    fn record(&mut self, id: SectionId, extent: SectionExtent) {
        self.extents.insert(id, extent);
    }
}

impl SectionLayout for MeasuredLayout {
    fn extent(&self, id: SectionId) -> Option<SectionExtent> {
        self.extents.get(&id).copied()
    }
}

/// Interaction state shared with the section renderers.
pub(crate) struct PageState {
    pub mode: ThemeMode,
    /// Current frame time, seconds since app start.
    pub now: f64,
    /// When the loading screen finished and the page became visible.
    pub page_shown_at: Option<f64>,
    /// When each section's entrance animation began.
    pub entered_at: BTreeMap<SectionId, f64>,
    pub viewport_height: f32,
    pub scroll_target: Option<SectionId>,
    pub selected_project: Option<usize>,
    pub draft: MessageDraft,
    pub draft_error: Option<DraftError>,
    pub sent_at: Option<f64>,
}

impl PageState {
    /// Per-card entrance opacity inside a revealed section, staggered by
    /// the card's index. Pre-reveal cards are fully transparent.
    pub fn card_alpha(&self, id: SectionId, index: usize) -> f32 {
        match self.entered_at.get(&id) {
            Some(t0) => motion::ease_out_cubic(motion::progress(
                self.now,
                t0 + motion::stagger_delay(index),
                motion::REVEAL_DURATION,
            )),
            None => 0.0,
        }
    }

    /// Seconds the page content has been on screen.
    pub fn shown_for(&self) -> f64 {
        self.page_shown_at.map_or(0.0, |t| self.now - t)
    }
}

/// Main application state.
pub struct PortfolioApp {
    data: Portfolio,
    config: TrackerConfig,
    tracker: ViewportTracker,
    layout: MeasuredLayout,
    started_at: Option<f64>,
    page: PageState,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::apply(&cc.egui_ctx, ThemeMode::Dark);

        let config = TrackerConfig::default();
        Self {
            data: content::portfolio(),
            config,
            tracker: ViewportTracker::with_config(config, 0.0),
            layout: MeasuredLayout::default(),
            started_at: None,
            page: PageState {
                mode: ThemeMode::Dark,
                now: 0.0,
                page_shown_at: None,
                entered_at: BTreeMap::new(),
                viewport_height: 0.0,
                scroll_target: None,
                selected_project: None,
                draft: MessageDraft::default(),
                draft_error: None,
                sent_at: None,
            },
        }
    }

    fn show_loading(&self, ctx: &egui::Context, elapsed: f64) {
        let mode = self.page.mode;
        let accent = theme::resolve(ThemeToken::Accent, mode);
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::resolve(ThemeToken::Background, mode)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.35);
                    ui.add(egui::Spinner::new().size(56.0).color(accent));
                    ui.add_space(16.0);
                    let glow = 0.5 + 0.5 * motion::pulse(elapsed, 1.6, 0.0);
                    ui.label(
                        RichText::new(self.data.identity.brand)
                            .font(FontId::proportional(theme::FONT_HEADING))
                            .strong()
                            .color(accent.gamma_multiply(glow)),
                    );
                    ui.add_space(10.0);

                    // Three bouncing dots, phase-shifted.
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(64.0, 18.0), egui::Sense::hover());
                    let painter = ui.painter();
                    for dot in 0..3 {
                        let bounce = motion::pulse(elapsed, 0.9, f64::from(dot) * 0.15);
                        let x = rect.center().x + (f32::from(dot as u8) - 1.0) * 20.0;
                        let y = rect.bottom() - 5.0 - bounce * 6.0;
                        painter.circle_filled(egui::pos2(x, y), 4.0, accent);
                    }

                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("Loading portfolio...")
                            .color(theme::resolve(ThemeToken::TextMuted, mode)),
                    );
                });
            });
    }

    fn show_nav(&mut self, ctx: &egui::Context) {
        let mode = self.page.mode;
        let active = self.tracker.active();
        egui::TopBottomPanel::top("nav")
            .frame(
                egui::Frame::new()
                    .fill(theme::resolve(ThemeToken::NavBackground, mode))
                    .inner_margin(Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(self.data.identity.brand)
                            .font(FontId::proportional(theme::FONT_TITLE))
                            .strong()
                            .color(theme::resolve(ThemeToken::Accent, mode)),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let toggle_label = match mode {
                            ThemeMode::Dark => "🌙",
                            ThemeMode::Light => "☀",
                        };
                        if ui.button(toggle_label).clicked() {
                            self.page.mode = mode.toggled();
                            theme::apply(ctx, self.page.mode);
                        }
                        ui.add_space(8.0);

                        for id in SectionId::NAV.iter().rev() {
                            let color = if active == *id {
                                theme::resolve(ThemeToken::NavActive, mode)
                            } else {
                                theme::resolve(ThemeToken::NavText, mode)
                            };
                            let response = ui
                                .add(
                                    Button::new(RichText::new(id.label()).color(color))
                                        .frame(false),
                                )
                                .on_hover_cursor(egui::CursorIcon::PointingHand);
                            if response.clicked() {
                                self.page.scroll_target = Some(*id);
                            }
                        }
                    });
                });
            });
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        let Self {
            data,
            tracker,
            layout,
            page,
            ..
        } = self;
        let mode = page.mode;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::resolve(ThemeToken::Background, mode)))
            .show(ctx, |ui| {
                page.viewport_height = ui.available_height();

                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let content_top = ui.cursor().top();
                        let mut measured = MeasuredLayout::default();

                        for id in SectionId::ALL {
                            let entrance = section_entrance(page, id);
                            let rect = show_section(ui, id, data, page, entrance);
                            measured.record(
                                id,
                                SectionExtent::new(rect.top() - content_top, rect.height()),
                            );
                            if page.scroll_target == Some(id) {
                                ui.scroll_to_rect(rect, Some(Align::Min));
                                page.scroll_target = None;
                            }
                        }

                        sections::footer(ui, mode, data.footer);
                        *layout = measured;
                    });

                let band = ViewportBand::new(output.state.offset.y, output.inner_rect.height());
                tracker.on_frame(page.now, band, layout);
            });
    }

    fn show_project_dialog(&mut self, ctx: &egui::Context) {
        let Some(index) = self.page.selected_project else {
            return;
        };
        let Some(project) = self.data.projects.get(index) else {
            self.page.selected_project = None;
            return;
        };
        let mode = self.page.mode;

        let mut open = true;
        egui::Window::new(RichText::new(project.title).strong())
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .max_width(560.0)
            .show(ctx, |ui| {
                sections::projects::detail(ui, mode, project);
            });
        if !open {
            self.page.selected_project = None;
        }
    }

    /// Whether anything on screen still needs per-frame repaints.
    fn is_animating(&self, now: f64, started: f64) -> bool {
        // Between page-shown and arming, the first reveals are imminent.
        if now - started < self.config.reveal.arm_delay + 0.2 {
            return true;
        }
        // Typewriter and caret keep the hero alive while it is in focus.
        if self.tracker.active() == SectionId::Hero {
            return true;
        }
        let longest_stagger =
            motion::REVEAL_DURATION + motion::stagger_delay(8);
        if self
            .page
            .entered_at
            .values()
            .any(|t0| now - t0 < longest_stagger)
        {
            return true;
        }
        self.page.sent_at.is_some_and(|t| now - t < 4.5)
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        if self.started_at.is_none() {
            self.started_at = Some(now);
            self.tracker = ViewportTracker::with_config(self.config, now);
        }
        let started = self.started_at.unwrap_or(0.0);
        self.page.now = now;

        if !motion::loading_done(now, started) {
            self.show_loading(ctx, now - started);
            ctx.request_repaint();
            return;
        }
        if self.page.page_shown_at.is_none() {
            self.page.page_shown_at = Some(now);
        }

        // Stamp entrance times for sections that just entered the
        // visibility set, so their fade-in-up starts this frame.
        for id in self.tracker.revealed() {
            self.page.entered_at.entry(*id).or_insert(now);
        }

        self.show_nav(ctx);
        self.show_page(ctx);
        self.show_project_dialog(ctx);

        if self.is_animating(now, started) {
            ctx.request_repaint();
        }
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        // Page unmount: no event delivered after this may mutate tracker
        // state.
        self.tracker.dispose();
    }
}

/// Opacity and downward offset for a section's one-time entrance. The
/// hero is exempt; it is visible from the first post-loading frame.
fn section_entrance(page: &PageState, id: SectionId) -> (f32, f32) {
    if id == SectionId::Hero {
        return (1.0, 0.0);
    }
    match page.entered_at.get(&id) {
        Some(t0) => {
            motion::fade_in_up(motion::progress(page.now, *t0, motion::REVEAL_DURATION))
        }
        None => motion::fade_in_up(0.0),
    }
}

fn show_section(
    ui: &mut egui::Ui,
    id: SectionId,
    data: &Portfolio,
    page: &mut PageState,
    (alpha, rise): (f32, f32),
) -> egui::Rect {
    ui.scope(|ui| {
        if rise > 0.0 {
            ui.add_space(rise);
        }
        ui.multiply_opacity(alpha);
        match id {
            SectionId::Hero => sections::hero::show(ui, page, data),
            SectionId::About => sections::about::show(ui, page, data),
            SectionId::Projects => sections::projects::show(ui, page, data),
            SectionId::Experience => sections::experience::show(ui, page, data),
            SectionId::Education => sections::education::show(ui, page, data),
            SectionId::Skills => sections::skills::show(ui, page, data),
            SectionId::Certifications => sections::certifications::show(ui, page, data),
            SectionId::Achievements => sections::achievements::show(ui, page, data),
            SectionId::Contact => sections::contact::show(ui, page, data),
        }
    })
    .response
    .rect
}
