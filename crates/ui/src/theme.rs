use verdant_protocol::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x0c, 0x12, 0x10),
        Surface => ResolvedColor::rgb(0x11, 0x19, 0x17),
        SurfaceAlt => ResolvedColor::rgb(0x15, 0x1f, 0x1b),
        Border => ResolvedColor::rgb(0x27, 0x35, 0x2f),

        TextPrimary => ResolvedColor::rgb(0xe6, 0xec, 0xe9),
        TextSecondary => ResolvedColor::rgb(0xb7, 0xc4, 0xbe),
        TextMuted => ResolvedColor::rgb(0x8b, 0x9a, 0x93),

        Accent => ResolvedColor::rgb(0x34, 0xd3, 0x99), // Emerald
        AccentHover => ResolvedColor::rgb(0x6e, 0xe7, 0xb7),
        AccentSoft => ResolvedColor::rgba(0x34, 0xd3, 0x99, 36),
        AccentOnAccent => ResolvedColor::rgb(0x06, 0x28, 0x1c),

        NavBackground => ResolvedColor::rgba(0x0c, 0x12, 0x10, 235),
        NavText => ResolvedColor::rgb(0x8b, 0x9a, 0x93),
        NavActive => ResolvedColor::rgb(0x34, 0xd3, 0x99),

        CardBackground => ResolvedColor::rgb(0x13, 0x1c, 0x19),
        CardBorder => ResolvedColor::rgb(0x24, 0x31, 0x2b),
        CardHover => ResolvedColor::rgba(0x34, 0xd3, 0x99, 18),

        BadgeBackground => ResolvedColor::rgb(0x12, 0x3a, 0x2c),
        BadgeText => ResolvedColor::rgb(0x86, 0xef, 0xac),
        BadgeOutline => ResolvedColor::rgb(0x2f, 0x4f, 0x42),

        ProgressTrack => ResolvedColor::rgb(0x1d, 0x29, 0x25),
        ProgressFill => ResolvedColor::rgb(0x10, 0xb9, 0x81),

        HeroGlowWarm => ResolvedColor::rgba(0x10, 0xb9, 0x81, 26),
        HeroGlowCool => ResolvedColor::rgba(0x3b, 0x82, 0xf6, 22),

        Danger => ResolvedColor::rgb(0xf8, 0x71, 0x71),
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0xff, 0xff, 0xff),
        Surface => ResolvedColor::rgb(0xf6, 0xf8, 0xf7),
        SurfaceAlt => ResolvedColor::rgb(0xec, 0xf5, 0xf0),
        Border => ResolvedColor::rgb(0xdc, 0xe3, 0xe0),

        TextPrimary => ResolvedColor::rgb(0x1a, 0x23, 0x1f),
        TextSecondary => ResolvedColor::rgb(0x44, 0x53, 0x4c),
        TextMuted => ResolvedColor::rgb(0x6b, 0x7a, 0x73),

        Accent => ResolvedColor::rgb(0x05, 0x96, 0x69), // Emerald
        AccentHover => ResolvedColor::rgb(0x04, 0x78, 0x57),
        AccentSoft => ResolvedColor::rgba(0x05, 0x96, 0x69, 24),
        AccentOnAccent => ResolvedColor::rgb(0xff, 0xff, 0xff),

        NavBackground => ResolvedColor::rgba(0xff, 0xff, 0xff, 235),
        NavText => ResolvedColor::rgb(0x6b, 0x7a, 0x73),
        NavActive => ResolvedColor::rgb(0x05, 0x96, 0x69),

        CardBackground => ResolvedColor::rgb(0xff, 0xff, 0xff),
        CardBorder => ResolvedColor::rgb(0xe2, 0xe8, 0xe5),
        CardHover => ResolvedColor::rgba(0x05, 0x96, 0x69, 14),

        BadgeBackground => ResolvedColor::rgb(0xd1, 0xfa, 0xe5),
        BadgeText => ResolvedColor::rgb(0x06, 0x5f, 0x46),
        BadgeOutline => ResolvedColor::rgb(0xa7, 0xf3, 0xd0),

        ProgressTrack => ResolvedColor::rgb(0xe5, 0xeb, 0xe8),
        ProgressFill => ResolvedColor::rgb(0x05, 0x96, 0x69),

        HeroGlowWarm => ResolvedColor::rgba(0x6e, 0xe7, 0xb7, 60),
        HeroGlowCool => ResolvedColor::rgba(0x93, 0xc5, 0xfd, 55),

        Danger => ResolvedColor::rgb(0xdc, 0x26, 0x26),
    }
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_DISPLAY: f32 = 40.0;
pub const FONT_HEADING: f32 = 28.0;
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_EMPHASIS: f32 = 15.0;
pub const FONT_BODY: f32 = 13.0;
pub const FONT_CAPTION: f32 = 11.0;

// ── egui visual presets ────────────────────────────────────────────────────

/// Emerald-tinted dark visuals for egui widgets.
pub fn dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = egui::Color32::from_rgb(0x0c, 0x12, 0x10);
    v.window_fill = egui::Color32::from_rgb(0x13, 0x1c, 0x19);
    v.extreme_bg_color = egui::Color32::from_rgb(0x0a, 0x0f, 0x0d);
    v.faint_bg_color = egui::Color32::from_rgb(0x15, 0x1f, 0x1b);
    v.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(0x15, 0x1f, 0x1b);
    v.widgets.noninteractive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0xb7, 0xc4, 0xbe));
    v.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0x27, 0x35, 0x2f));
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(0x1d, 0x29, 0x25);
    v.widgets.inactive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0xb7, 0xc4, 0xbe));
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(0x27, 0x35, 0x2f);
    v.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0xe6, 0xec, 0xe9));
    v.widgets.active.bg_fill = egui::Color32::from_rgb(0x34, 0xd3, 0x99);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0x06, 0x28, 0x1c));
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0x34, 0xd3, 0x99, 60);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0x34, 0xd3, 0x99));
    v.window_corner_radius = egui::CornerRadius::same(8);
    v.menu_corner_radius = egui::CornerRadius::same(6);
    v.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    v.widgets.active.corner_radius = egui::CornerRadius::same(6);
    v.widgets.open.corner_radius = egui::CornerRadius::same(6);
    v.hyperlink_color = egui::Color32::from_rgb(0x34, 0xd3, 0x99);
    v.warn_fg_color = egui::Color32::from_rgb(0xfb, 0xbf, 0x24);
    v.error_fg_color = egui::Color32::from_rgb(0xf8, 0x71, 0x71);
    v
}

/// Light visuals for egui widgets.
pub fn light_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = egui::Color32::from_rgb(0xff, 0xff, 0xff);
    v.window_fill = egui::Color32::from_rgb(0xff, 0xff, 0xff);
    v.extreme_bg_color = egui::Color32::from_rgb(0xf6, 0xf8, 0xf7);
    v.faint_bg_color = egui::Color32::from_rgb(0xf6, 0xf8, 0xf7);
    v.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(0xec, 0xf5, 0xf0);
    v.widgets.noninteractive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0x44, 0x53, 0x4c));
    v.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0xdc, 0xe3, 0xe0));
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(0xec, 0xf2, 0xef);
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(0xdf, 0xea, 0xe5);
    v.widgets.active.bg_fill = egui::Color32::from_rgb(0x05, 0x96, 0x69);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0x05, 0x96, 0x69, 50);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0x05, 0x96, 0x69));
    v.window_corner_radius = egui::CornerRadius::same(8);
    v.menu_corner_radius = egui::CornerRadius::same(6);
    v.widgets.noninteractive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    v.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    v.widgets.active.corner_radius = egui::CornerRadius::same(6);
    v.widgets.open.corner_radius = egui::CornerRadius::same(6);
    v.hyperlink_color = egui::Color32::from_rgb(0x05, 0x96, 0x69);
    v.warn_fg_color = egui::Color32::from_rgb(0xd9, 0x77, 0x06);
    v.error_fg_color = egui::Color32::from_rgb(0xdc, 0x26, 0x26);
    v
}

/// Apply the active palette and the typography scale to egui styles.
pub fn apply(ctx: &egui::Context, mode: ThemeMode) {
    ctx.set_visuals(match mode {
        ThemeMode::Dark => dark_visuals(),
        ThemeMode::Light => light_visuals(),
    });
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(FONT_TITLE),
    );
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(FONT_CAPTION),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::monospace(FONT_CAPTION),
    );
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.spacing.interact_size.y = 26.0;
    ctx.set_style(style);
}
