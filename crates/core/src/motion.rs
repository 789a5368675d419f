//! Pure timing transforms for the page's entrance and idle animations.
//!
//! Everything here is a function of time already sampled by the caller,
//! nothing reads a clock, so the curves are deterministic and testable.

/// Seconds the loading screen stays up after launch.
pub const LOADING_DURATION: f64 = 2.0;
/// Seconds a section's fade-in-up entrance takes.
pub const REVEAL_DURATION: f64 = 1.0;
/// How far below its resting position a section starts, in points.
pub const REVEAL_RISE: f32 = 40.0;
/// Seconds between staggered cards inside one section.
pub const STAGGER_STEP: f64 = 0.2;
/// Characters per second for the hero typewriter.
pub const TYPEWRITER_CPS: f64 = 14.0;

pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - clamp01(t);
    1.0 - u * u * u
}

/// Linear progress of an animation started at `started`, clamped to [0, 1].
pub fn progress(now: f64, started: f64, duration: f64) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    clamp01(((now - started) / duration) as f32)
}

/// Opacity and downward offset for a fade-in-up entrance at progress `t`.
/// At 0 the element is invisible and `REVEAL_RISE` points low; at 1 it is
/// fully opaque in its resting position.
pub fn fade_in_up(t: f32) -> (f32, f32) {
    let eased = ease_out_cubic(t);
    (eased, (1.0 - eased) * REVEAL_RISE)
}

/// Entrance delay for the `index`-th card in a staggered group.
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_STEP
}

/// Whether the loading screen has finished.
pub fn loading_done(now: f64, started: f64) -> bool {
    now - started >= LOADING_DURATION
}

/// The typed prefix of `text` after `elapsed` seconds, cut on a char
/// boundary. Returns the whole string once the animation has caught up.
pub fn typed_prefix(text: &str, elapsed: f64) -> &str {
    if elapsed <= 0.0 {
        return "";
    }
    let typed = (elapsed * TYPEWRITER_CPS) as usize;
    match text.char_indices().nth(typed) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

/// Symmetric 0 → 1 → 0 pulse with the given period, for blinking carets
/// and idle loading dots. `offset` shifts the phase, staggering siblings.
pub fn pulse(now: f64, period: f64, offset: f64) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    let phase = ((now + offset) / period).fract() as f32;
    1.0 - (2.0 * phase - 1.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn progress_clamps_and_tolerates_zero_duration() {
        assert_eq!(progress(0.0, 1.0, 1.0), 0.0);
        assert_eq!(progress(5.0, 1.0, 1.0), 1.0);
        assert!((progress(1.5, 1.0, 1.0) - 0.5).abs() < 1e-6);
        assert_eq!(progress(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn fade_in_up_starts_low_and_lands_in_place() {
        let (alpha, rise) = fade_in_up(0.0);
        assert_eq!(alpha, 0.0);
        assert_eq!(rise, REVEAL_RISE);
        let (alpha, rise) = fade_in_up(1.0);
        assert!((alpha - 1.0).abs() < f32::EPSILON);
        assert!(rise.abs() < 1e-4);
    }

    #[test]
    fn typed_prefix_respects_char_boundaries() {
        let text = "Ghöurav";
        for step in 0..40 {
            let prefix = typed_prefix(text, f64::from(step) * 0.05);
            assert!(text.starts_with(prefix));
        }
        assert_eq!(typed_prefix(text, 100.0), text);
        assert_eq!(typed_prefix(text, 0.0), "");
    }

    #[test]
    fn pulse_stays_in_unit_range() {
        for step in 0..100 {
            let v = pulse(f64::from(step) * 0.1, 1.2, 0.3);
            assert!((0.0..=1.0).contains(&v));
        }
        assert_eq!(pulse(1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay(0), 0.0);
        assert!((stagger_delay(3) - 3.0 * STAGGER_STEP).abs() < f64::EPSILON);
    }

    #[test]
    fn loading_finishes_after_duration() {
        assert!(!loading_done(1.9, 0.0));
        assert!(loading_done(LOADING_DURATION, 0.0));
    }
}
