use verdant_protocol::SectionId;

use super::SectionLayout;

/// Added to the raw scroll offset before matching, so the section sitting
/// under the fixed nav bar counts as active slightly before it reaches the
/// top of the viewport.
pub const DEFAULT_LOOKAHEAD: f32 = 100.0;

/// Keeps the "active" section synchronized with the scroll position.
///
/// On every scroll event the enumerated sections are scanned in declared
/// order and the first one whose extent contains the effective offset
/// becomes active. Sections without a mounted extent are skipped. When no
/// section matches, the previous value is kept; the active section is
/// never cleared.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    lookahead: f32,
    active: SectionId,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::with_lookahead(DEFAULT_LOOKAHEAD)
    }

    pub fn with_lookahead(lookahead: f32) -> Self {
        Self {
            lookahead,
            active: SectionId::Hero,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn lookahead(&self) -> f32 {
        self.lookahead
    }

    /// Process one scroll event and return the resulting active section.
    pub fn on_scroll(&mut self, scroll_top: f32, layout: &impl SectionLayout) -> SectionId {
        let effective = scroll_top + self.lookahead;
        for id in SectionId::ALL {
            let Some(extent) = layout.extent(id) else {
                continue;
            };
            if extent.contains(effective) {
                self.active = id;
                break;
            }
        }
        self.active
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::SectionExtent;

    /// hero [0,800), about [800,1600), projects [1600,2400); later
    /// sections unmounted.
    fn three_sections(id: SectionId) -> Option<SectionExtent> {
        match id {
            SectionId::Hero => Some(SectionExtent::new(0.0, 800.0)),
            SectionId::About => Some(SectionExtent::new(800.0, 800.0)),
            SectionId::Projects => Some(SectionExtent::new(1600.0, 800.0)),
            _ => None,
        }
    }

    #[test]
    fn starts_on_hero() {
        assert_eq!(ScrollSpy::new().active(), SectionId::Hero);
    }

    #[test]
    fn matches_section_under_effective_offset() {
        let mut spy = ScrollSpy::new();
        // 750 + 100 lookahead = 850, inside about's extent
        assert_eq!(spy.on_scroll(750.0, &three_sections), SectionId::About);
        // 50 + 100 = 150, back inside hero
        assert_eq!(spy.on_scroll(50.0, &three_sections), SectionId::Hero);
    }

    #[test]
    fn keeps_previous_value_when_nothing_matches() {
        let mut spy = ScrollSpy::new();
        spy.on_scroll(1700.0, &three_sections);
        assert_eq!(spy.active(), SectionId::Projects);
        // Past the end of the page: no section contains the offset.
        assert_eq!(spy.on_scroll(5000.0, &three_sections), SectionId::Projects);
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let gap = |id: SectionId| match id {
            SectionId::About => Some(SectionExtent::new(0.0, 500.0)),
            _ => None,
        };
        let mut spy = ScrollSpy::new();
        assert_eq!(spy.on_scroll(0.0, &gap), SectionId::About);
    }

    #[test]
    fn first_in_declared_order_wins_on_overlap() {
        let overlapping = |id: SectionId| match id {
            SectionId::Hero => Some(SectionExtent::new(0.0, 1000.0)),
            SectionId::About => Some(SectionExtent::new(0.0, 1000.0)),
            _ => None,
        };
        let mut spy = ScrollSpy::new();
        assert_eq!(spy.on_scroll(400.0, &overlapping), SectionId::Hero);
    }

    #[test]
    fn lookahead_is_configurable() {
        let mut spy = ScrollSpy::with_lookahead(0.0);
        assert_eq!(spy.on_scroll(750.0, &three_sections), SectionId::Hero);
        assert_eq!(spy.on_scroll(800.0, &three_sections), SectionId::About);
    }
}
