use std::collections::BTreeSet;

use verdant_protocol::SectionId;

use super::{SectionExtent, SectionLayout, ViewportBand};

/// Tuning for the visibility set accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Seconds after page load before any section is tracked. The default
    /// lands just after the loading-screen animation finishes.
    pub arm_delay: f64,
    /// Fraction of a section's height that must be visible to count.
    pub threshold: f32,
    /// The viewport band is expanded by this much on both ends, so a
    /// section registers slightly before it physically scrolls in.
    pub margin: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            arm_delay: 2.1,
            threshold: 0.1,
            margin: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Armed,
    Disposed,
}

/// Records, once, that a section has been scrolled into view.
///
/// The set is monotonic: ids are only ever added, never removed, for the
/// life of the page session. Per section the lifecycle is
/// `Unseen → Seen`, and `Seen` is terminal. Reports delivered before the
/// arm delay elapses or after disposal are discarded without mutation.
#[derive(Debug, Clone)]
pub struct RevealSet {
    config: RevealConfig,
    started_at: f64,
    phase: Phase,
    seen: BTreeSet<SectionId>,
}

impl RevealSet {
    /// `now` is the page-load timestamp the arm delay counts from.
    pub fn new(config: RevealConfig, now: f64) -> Self {
        Self {
            config,
            started_at: now,
            phase: Phase::Pending,
            seen: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> RevealConfig {
        self.config
    }

    fn arm_if_due(&mut self, now: f64) {
        if self.phase == Phase::Pending && now - self.started_at >= self.config.arm_delay {
            self.phase = Phase::Armed;
        }
    }

    /// Apply one intersection report: the ids currently intersecting.
    /// Idempotent union; ids already present are left untouched.
    pub fn observe<I>(&mut self, now: f64, intersecting: I)
    where
        I: IntoIterator<Item = SectionId>,
    {
        self.arm_if_due(now);
        if self.phase != Phase::Armed {
            return;
        }
        self.seen.extend(intersecting);
    }

    /// Compute the intersection report from live layout and apply it.
    /// Unmounted sections are never observed.
    pub fn observe_layout(&mut self, now: f64, band: ViewportBand, layout: &impl SectionLayout) {
        self.arm_if_due(now);
        if self.phase != Phase::Armed {
            return;
        }
        for id in SectionId::ALL {
            if self.seen.contains(&id) {
                continue;
            }
            let Some(extent) = layout.extent(id) else {
                continue;
            };
            if intersection_ratio(extent, band, self.config.margin) >= self.config.threshold {
                self.seen.insert(id);
            }
        }
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.seen.contains(&id)
    }

    pub fn revealed(&self) -> &BTreeSet<SectionId> {
        &self.seen
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Stop observing. Terminal: later reports never mutate the set.
    pub fn dispose(&mut self) {
        self.phase = Phase::Disposed;
    }
}

/// Fraction of `extent` covered by `band` after expanding the band by
/// `margin` on both ends. Zero-height extents never intersect.
fn intersection_ratio(extent: SectionExtent, band: ViewportBand, margin: f32) -> f32 {
    if extent.height <= 0.0 {
        return 0.0;
    }
    let band_top = band.top - margin;
    let band_bottom = band.top + band.height + margin;
    let overlap = (extent.bottom().min(band_bottom) - extent.top.max(band_top)).max(0.0);
    overlap / extent.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(id: SectionId) -> Option<SectionExtent> {
        let index = SectionId::ALL.iter().position(|s| *s == id)? as f32;
        Some(SectionExtent::new(index * 800.0, 800.0))
    }

    fn band_at(top: f32) -> ViewportBand {
        ViewportBand::new(top, 800.0)
    }

    #[test]
    fn empty_before_arm_delay() {
        let mut set = RevealSet::new(RevealConfig::default(), 0.0);
        set.observe_layout(1.0, band_at(0.0), &stacked);
        set.observe_layout(2.0, band_at(2000.0), &stacked);
        assert!(set.is_empty());
    }

    #[test]
    fn accumulates_after_arming() {
        let mut set = RevealSet::new(RevealConfig::default(), 0.0);
        set.observe(3.0, [SectionId::Projects]);
        assert_eq!(
            set.revealed().iter().copied().collect::<Vec<_>>(),
            [SectionId::Projects]
        );
        set.observe(4.0, [SectionId::Hero]);
        assert!(set.contains(SectionId::Projects));
        assert!(set.contains(SectionId::Hero));
    }

    #[test]
    fn observe_is_idempotent() {
        let mut set = RevealSet::new(RevealConfig::default(), 0.0);
        set.observe(3.0, [SectionId::About]);
        let before = set.revealed().clone();
        set.observe(3.5, [SectionId::About]);
        assert_eq!(*set.revealed(), before);
    }

    #[test]
    fn set_grows_monotonically() {
        let mut set = RevealSet::new(RevealConfig::default(), 0.0);
        let mut last = 0;
        for step in 0..SectionId::ALL.len() {
            set.observe_layout(3.0 + step as f64, band_at(step as f32 * 800.0), &stacked);
            assert!(set.revealed().len() >= last);
            last = set.revealed().len();
        }
        assert!(set.contains(SectionId::Hero));
        assert!(set.contains(SectionId::Contact));
    }

    #[test]
    fn margin_pre_triggers_just_below_viewport() {
        // About starts at 800; viewport shows [0, 760). Expanded by the
        // 50-unit margin the band reaches 810, only 10 units of overlap,
        // 10/800 is under the 0.1 threshold, so not yet revealed.
        let mut set = RevealSet::new(RevealConfig::default(), 0.0);
        set.observe_layout(3.0, ViewportBand::new(0.0, 760.0), &stacked);
        assert!(!set.contains(SectionId::About));

        // Scroll down 100: overlap becomes 110 units, 110/800 > 0.1.
        set.observe_layout(3.1, ViewportBand::new(100.0, 760.0), &stacked);
        assert!(set.contains(SectionId::About));
    }

    #[test]
    fn dispose_is_terminal() {
        let mut set = RevealSet::new(RevealConfig::default(), 0.0);
        set.observe(3.0, [SectionId::Hero]);
        set.dispose();
        set.observe(4.0, [SectionId::Contact]);
        set.observe_layout(5.0, band_at(2000.0), &stacked);
        assert!(set.contains(SectionId::Hero));
        assert!(!set.contains(SectionId::Contact));
        assert_eq!(set.revealed().len(), 1);
    }

    #[test]
    fn unmounted_sections_never_enter_the_set() {
        let only_hero = |id: SectionId| match id {
            SectionId::Hero => Some(SectionExtent::new(0.0, 800.0)),
            _ => None,
        };
        let mut set = RevealSet::new(RevealConfig::default(), 0.0);
        set.observe_layout(3.0, band_at(0.0), &only_hero);
        assert_eq!(set.revealed().len(), 1);
    }

    #[test]
    fn arm_delay_is_configurable() {
        let config = RevealConfig {
            arm_delay: 0.0,
            ..RevealConfig::default()
        };
        let mut set = RevealSet::new(config, 10.0);
        set.observe(10.0, [SectionId::Hero]);
        assert!(set.contains(SectionId::Hero));
    }

    #[test]
    fn intersection_ratio_handles_degenerate_extents() {
        let band = band_at(0.0);
        assert_eq!(
            intersection_ratio(SectionExtent::new(0.0, 0.0), band, 50.0),
            0.0
        );
        // Fully visible section has ratio 1.
        let ratio = intersection_ratio(SectionExtent::new(100.0, 200.0), band, 0.0);
        assert!((ratio - 1.0).abs() < f32::EPSILON);
    }
}
