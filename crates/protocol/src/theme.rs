use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    SurfaceAlt,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,

    Accent,
    AccentHover,
    AccentSoft,
    AccentOnAccent,

    NavBackground,
    NavText,
    NavActive,

    CardBackground,
    CardBorder,
    CardHover,

    BadgeBackground,
    BadgeText,
    BadgeOutline,

    ProgressTrack,
    ProgressFill,

    HeroGlowWarm,
    HeroGlowCool,

    Danger,
}
