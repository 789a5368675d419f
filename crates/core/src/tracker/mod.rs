mod reveal;
mod scroll_spy;

pub use reveal::{RevealConfig, RevealSet};
pub use scroll_spy::{DEFAULT_LOOKAHEAD, ScrollSpy};

use verdant_protocol::SectionId;

/// Vertical extent of one mounted section, measured from live layout
/// at read time. `top` is the distance from the top of the page content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f32,
    pub height: f32,
}

impl SectionExtent {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(self) -> f32 {
        self.top + self.height
    }

    /// Whether `offset` falls inside `[top, top + height)`.
    pub fn contains(self, offset: f32) -> bool {
        offset >= self.top && offset < self.bottom()
    }
}

/// The vertical slice of the page currently inside the viewport, in the
/// same page coordinates as `SectionExtent`. `top` equals the scroll
/// offset of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBand {
    pub top: f32,
    pub height: f32,
}

impl ViewportBand {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }
}

/// Read access to the current layout of mounted sections.
///
/// Implemented by the rendering layer. A section that is not mounted this
/// frame reports `None` and is silently skipped by both observers; absence
/// is tolerated, never an error.
pub trait SectionLayout {
    fn extent(&self, id: SectionId) -> Option<SectionExtent>;
}

impl<F> SectionLayout for F
where
    F: Fn(SectionId) -> Option<SectionExtent>,
{
    fn extent(&self, id: SectionId) -> Option<SectionExtent> {
        self(id)
    }
}

/// Tuning for the whole tracker. Both constants the original page
/// hardcoded (nav lookahead, arm delay) are configurable here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    pub lookahead: f32,
    pub reveal: RevealConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
            reveal: RevealConfig::default(),
        }
    }
}

/// The two viewport observers behind one lifecycle.
///
/// Owns the scroll position monitor and the visibility set accumulator;
/// both read the same layout and are driven from the single UI event
/// context, once per frame. Disposal is terminal: afterwards no scroll or
/// intersection event mutates either piece of state.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    spy: ScrollSpy,
    reveals: RevealSet,
    disposed: bool,
}

impl ViewportTracker {
    /// `now` is the page-load timestamp the reveal arm delay counts from.
    pub fn new(now: f64) -> Self {
        Self::with_config(TrackerConfig::default(), now)
    }

    pub fn with_config(config: TrackerConfig, now: f64) -> Self {
        Self {
            spy: ScrollSpy::with_lookahead(config.lookahead),
            reveals: RevealSet::new(config.reveal, now),
            disposed: false,
        }
    }

    /// Process one frame: refresh the active section from the scroll
    /// offset and fold newly intersecting sections into the reveal set.
    pub fn on_frame(&mut self, now: f64, band: ViewportBand, layout: &impl SectionLayout) {
        if self.disposed {
            return;
        }
        self.spy.on_scroll(band.top, layout);
        self.reveals.observe_layout(now, band, layout);
    }

    /// The section currently considered in focus for navigation.
    pub fn active(&self) -> SectionId {
        self.spy.active()
    }

    /// Whether `id` has ever been scrolled into view.
    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.reveals.contains(id)
    }

    pub fn revealed(&self) -> &std::collections::BTreeSet<SectionId> {
        self.reveals.revealed()
    }

    /// Tear down both observers. No later event mutates any state.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.reveals.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_layout(id: SectionId) -> Option<SectionExtent> {
        let index = SectionId::ALL.iter().position(|s| *s == id)? as f32;
        Some(SectionExtent::new(index * 800.0, 800.0))
    }

    #[test]
    fn frame_drives_both_observers() {
        let mut tracker = ViewportTracker::new(0.0);
        tracker.on_frame(5.0, ViewportBand::new(750.0, 800.0), &stacked_layout);
        assert_eq!(tracker.active(), SectionId::About);
        assert!(tracker.is_revealed(SectionId::Hero));
        assert!(tracker.is_revealed(SectionId::About));
    }

    #[test]
    fn dispose_freezes_all_state() {
        let mut tracker = ViewportTracker::new(0.0);
        tracker.on_frame(5.0, ViewportBand::new(0.0, 800.0), &stacked_layout);
        let active = tracker.active();
        let revealed = tracker.revealed().clone();

        tracker.dispose();
        tracker.on_frame(6.0, ViewportBand::new(3000.0, 800.0), &stacked_layout);

        assert_eq!(tracker.active(), active);
        assert_eq!(*tracker.revealed(), revealed);
    }

    #[test]
    fn extent_contains_is_half_open() {
        let extent = SectionExtent::new(100.0, 50.0);
        assert!(extent.contains(100.0));
        assert!(extent.contains(149.9));
        assert!(!extent.contains(150.0));
        assert!(!extent.contains(99.9));
    }
}
