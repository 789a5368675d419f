//! Drives the viewport tracker through a whole simulated page session:
//! load, idle during the loading screen, scroll to the bottom, tear down.

use verdant_core::motion;
use verdant_core::tracker::{
    SectionExtent, TrackerConfig, ViewportBand, ViewportTracker,
};
use verdant_protocol::SectionId;

const VIEWPORT_HEIGHT: f32 = 900.0;

/// Every section mounted, stacked with uneven heights like the real page.
fn page_layout(id: SectionId) -> Option<SectionExtent> {
    let mut top = 0.0;
    for section in SectionId::ALL {
        let height = match section {
            SectionId::Hero => 900.0,
            SectionId::Projects | SectionId::Achievements => 1400.0,
            _ => 700.0,
        };
        if section == id {
            return Some(SectionExtent::new(top, height));
        }
        top += height;
    }
    None
}

fn page_bottom() -> f32 {
    SectionId::ALL
        .iter()
        .filter_map(|id| page_layout(*id))
        .map(SectionExtent::bottom)
        .fold(0.0, f32::max)
}

#[test]
fn session_reveals_everything_on_a_full_scroll() {
    let mut tracker = ViewportTracker::new(0.0);

    // Loading screen is still up; nothing may be tracked yet.
    let mut now = 0.5;
    while !motion::loading_done(now, 0.0) {
        tracker.on_frame(now, ViewportBand::new(0.0, VIEWPORT_HEIGHT), &page_layout);
        now += 0.5;
    }
    assert!(tracker.revealed().is_empty());
    assert_eq!(tracker.active(), SectionId::Hero);

    // Scroll steadily to the bottom after the accumulator arms.
    now = 3.0;
    let mut offset = 0.0;
    while offset < page_bottom() {
        tracker.on_frame(now, ViewportBand::new(offset, VIEWPORT_HEIGHT), &page_layout);
        offset += 300.0;
        now += 0.1;
    }

    for id in SectionId::ALL {
        assert!(tracker.is_revealed(id), "{id} never revealed");
    }
    assert_eq!(tracker.active(), SectionId::Contact);
}

#[test]
fn active_section_follows_scroll_in_both_directions() {
    let mut tracker = ViewportTracker::new(0.0);
    let band = |top| ViewportBand::new(top, VIEWPORT_HEIGHT);

    tracker.on_frame(3.0, band(0.0), &page_layout);
    assert_eq!(tracker.active(), SectionId::Hero);

    // About spans [900, 1600); 850 + 100 lookahead lands inside it.
    tracker.on_frame(3.1, band(850.0), &page_layout);
    assert_eq!(tracker.active(), SectionId::About);

    tracker.on_frame(3.2, band(850.0 + 700.0), &page_layout);
    assert_eq!(tracker.active(), SectionId::Projects);

    // Back up again; the monitor recomputes from current truth every event.
    tracker.on_frame(3.3, band(0.0), &page_layout);
    assert_eq!(tracker.active(), SectionId::Hero);
}

#[test]
fn reveals_survive_scrolling_away() {
    let mut tracker = ViewportTracker::new(0.0);
    tracker.on_frame(3.0, ViewportBand::new(2000.0, VIEWPORT_HEIGHT), &page_layout);
    let revealed = tracker.revealed().clone();
    assert!(!revealed.is_empty());

    tracker.on_frame(4.0, ViewportBand::new(0.0, VIEWPORT_HEIGHT), &page_layout);
    assert!(
        tracker.revealed().is_superset(&revealed),
        "reveal set must never shrink"
    );
}

#[test]
fn custom_config_shifts_arm_time_and_lookahead() {
    let config = TrackerConfig {
        lookahead: 0.0,
        reveal: verdant_core::tracker::RevealConfig {
            arm_delay: 10.0,
            ..Default::default()
        },
    };
    let mut tracker = ViewportTracker::with_config(config, 0.0);

    tracker.on_frame(5.0, ViewportBand::new(850.0, VIEWPORT_HEIGHT), &page_layout);
    // Without lookahead 850 is still inside hero's [0, 900).
    assert_eq!(tracker.active(), SectionId::Hero);
    // And the accumulator has not armed yet.
    assert!(tracker.revealed().is_empty());

    tracker.on_frame(10.0, ViewportBand::new(850.0, VIEWPORT_HEIGHT), &page_layout);
    assert!(!tracker.revealed().is_empty());
}

#[test]
fn teardown_ends_the_session() {
    let mut tracker = ViewportTracker::new(0.0);
    tracker.on_frame(3.0, ViewportBand::new(0.0, VIEWPORT_HEIGHT), &page_layout);
    tracker.dispose();
    assert!(tracker.is_disposed());

    let active = tracker.active();
    let revealed = tracker.revealed().clone();
    tracker.on_frame(9.0, ViewportBand::new(4000.0, VIEWPORT_HEIGHT), &page_layout);
    assert_eq!(tracker.active(), active);
    assert_eq!(*tracker.revealed(), revealed);
}
