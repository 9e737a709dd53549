//! Timing logic behind the landing page animations
//!
//! Everything here is pure and runs the same on the server and in the browser:
//! - Word-by-word text reveal delays
//! - One-shot viewport reveal latch
//! - Ease-out quartic counter animation
//!
//! # Usage Example
//!
//! ```rust
//! use learnbridge::core::motion::CounterAnimation;
//! use std::time::Duration;
//!
//! let counter = CounterAnimation::new(100, Duration::from_secs(2));
//! assert_eq!(counter.value_at(Duration::from_secs(1)), 93);
//! assert_eq!(counter.value_at(Duration::from_secs(2)), 100);
//! ```

use std::time::Duration;

/// Delay added per word in a word reveal (100ms)
pub const WORD_STAGGER: Duration = Duration::from_millis(100);

/// Default counter run time (2s)
pub const DEFAULT_COUNTER_DURATION: Duration = Duration::from_secs(2);

/// Share of an element that must be visible before it counts as entered
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so elements reveal slightly after they appear
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Format a duration as a CSS time value, e.g. `0.35s`
pub fn css_seconds(delay: Duration) -> String {
    format!("{:.2}s", delay.as_secs_f64())
}

// ============================================================================
// Word reveal
// ============================================================================

/// A single word of a word reveal with its entrance delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedWord {
    pub text: String,
    pub delay: Duration,
}

impl RevealedWord {
    /// Inline style for the word's span
    pub fn style(&self) -> String {
        format!("animation-delay: {};", css_seconds(self.delay))
    }
}

/// Split `text` into words, staggering each one by [`WORD_STAGGER`]
///
/// Word `i` enters at `base_delay + i * WORD_STAGGER`. Empty or
/// whitespace-only input produces no words.
///
/// # Example
/// ```
/// # use learnbridge::core::motion::{reveal_words, WORD_STAGGER};
/// # use std::time::Duration;
/// let words = reveal_words("Learn without limits", Duration::ZERO);
/// assert_eq!(words.len(), 3);
/// assert_eq!(words[2].delay, WORD_STAGGER * 2);
/// ```
pub fn reveal_words(text: &str, base_delay: Duration) -> Vec<RevealedWord> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| RevealedWord {
            text: word.to_string(),
            delay: base_delay + WORD_STAGGER * index as u32,
        })
        .collect()
}

// ============================================================================
// Reveal latch
// ============================================================================

/// Result of feeding a viewport observation into a [`RevealLatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealChange {
    /// The element just became revealed
    Revealed,
    /// Nothing changed
    Unchanged,
}

/// Latches the first viewport entry of an element
///
/// Once revealed it stays revealed for the lifetime of the latch, no matter
/// how often the element leaves and re-enters the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection observation
    pub fn observe(&mut self, is_intersecting: bool) -> RevealChange {
        if self.revealed || !is_intersecting {
            return RevealChange::Unchanged;
        }
        self.revealed = true;
        RevealChange::Revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

// ============================================================================
// Counter animation
// ============================================================================

/// Ease-out quartic curve: `1 - (1 - p)^4`
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// One animation frame of a counter run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    /// Value to display
    pub value: u64,
    /// Whether the run has reached its target; no further frames are needed
    pub finished: bool,
}

/// Counts from zero up to `target` over `duration` with ease-out quartic easing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    duration: Duration,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Linear progress in `[0, 1]`; a zero duration is always complete
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed value: `floor(target * ease_out_quart(progress))`
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.target;
        }
        let eased = (self.target as f64 * ease_out_quart(progress)).floor() as u64;
        eased.min(self.target)
    }

    pub fn frame(&self, elapsed: Duration) -> CounterFrame {
        CounterFrame {
            value: self.value_at(elapsed),
            finished: self.progress(elapsed) >= 1.0,
        }
    }
}

impl Default for CounterAnimation {
    fn default() -> Self {
        Self::new(0, DEFAULT_COUNTER_DURATION)
    }
}

/// Render a counter value with its prefix and suffix, e.g. `$1200+`
pub fn format_counter(prefix: &str, value: u64, suffix: &str) -> String {
    format!("{prefix}{value}{suffix}")
}

/// Turn two `performance.now()` readings (milliseconds) into an elapsed duration
pub fn elapsed_between(started_ms: f64, now_ms: f64) -> Duration {
    let millis = (now_ms - started_ms).max(0.0);
    Duration::from_secs_f64(millis / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Word reveal
    // ========================================================================

    #[test]
    fn test_reveal_words_one_unit_per_word() {
        let words = reveal_words("Ace the  SAT\twith\nconfidence", Duration::ZERO);
        let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["Ace", "the", "SAT", "with", "confidence"]);
    }

    #[test]
    fn test_reveal_words_strictly_increasing_delays() {
        let base = Duration::from_millis(250);
        let words = reveal_words("Tutoring that fits your family", base);

        assert_eq!(words[0].delay, base);
        for pair in words.windows(2) {
            assert!(pair[1].delay > pair[0].delay);
            assert_eq!(pair[1].delay - pair[0].delay, WORD_STAGGER);
        }
    }

    #[test]
    fn test_reveal_words_empty_input() {
        assert!(reveal_words("", Duration::from_secs(1)).is_empty());
        assert!(reveal_words("   \n\t ", Duration::ZERO).is_empty());
    }

    #[test]
    fn test_revealed_word_style() {
        let word = RevealedWord {
            text: "Learn".to_string(),
            delay: Duration::from_millis(350),
        };
        assert_eq!(word.style(), "animation-delay: 0.35s;");
    }

    #[test]
    fn test_css_seconds() {
        assert_eq!(css_seconds(Duration::ZERO), "0.00s");
        assert_eq!(css_seconds(Duration::from_millis(1500)), "1.50s");
    }

    // ========================================================================
    // Reveal latch
    // ========================================================================

    #[test]
    fn test_latch_ignores_observations_outside_viewport() {
        let mut latch = RevealLatch::new();
        assert_eq!(latch.observe(false), RevealChange::Unchanged);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn test_latch_transitions_once() {
        let mut latch = RevealLatch::new();
        assert_eq!(latch.observe(true), RevealChange::Revealed);

        for visible in [false, true, false, true, true] {
            assert_eq!(latch.observe(visible), RevealChange::Unchanged);
            assert!(latch.is_revealed());
        }
    }

    // ========================================================================
    // Counter
    // ========================================================================

    #[test]
    fn test_ease_out_quart_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(0.5), 0.9375);
        assert_eq!(ease_out_quart(2.0), 1.0);
        assert_eq!(ease_out_quart(-1.0), 0.0);
    }

    #[test]
    fn test_counter_example_values() {
        let counter = CounterAnimation::new(100, Duration::from_secs(2));
        assert_eq!(counter.progress(Duration::from_secs(1)), 0.5);
        assert_eq!(counter.value_at(Duration::from_secs(1)), 93);
        assert_eq!(counter.value_at(Duration::from_secs(2)), 100);
        assert_eq!(counter.value_at(Duration::from_secs(5)), 100);
    }

    #[test]
    fn test_counter_is_monotonic_and_bounded() {
        let counter = CounterAnimation::new(12_500, Duration::from_millis(1800));
        let mut previous = 0;

        for ms in (0..=2_000).step_by(16) {
            let value = counter.value_at(Duration::from_millis(ms));
            assert!(value >= previous, "value dropped at {ms}ms");
            assert!(value <= counter.target());
            previous = value;
        }
        assert_eq!(previous, 12_500);
    }

    #[test]
    fn test_counter_finishes_only_at_full_progress() {
        let counter = CounterAnimation::new(98, Duration::from_secs(2));

        let early = counter.frame(Duration::from_millis(1999));
        assert!(!early.finished);
        assert!(early.value <= 98);

        let done = counter.frame(Duration::from_secs(2));
        assert!(done.finished);
        assert_eq!(done.value, 98);
    }

    #[test]
    fn test_counter_zero_duration_is_immediately_done() {
        let counter = CounterAnimation::new(42, Duration::ZERO);
        assert_eq!(
            counter.frame(Duration::ZERO),
            CounterFrame {
                value: 42,
                finished: true
            }
        );
    }

    #[test]
    fn test_counter_zero_target() {
        let counter = CounterAnimation::new(0, Duration::from_secs(1));
        assert_eq!(counter.value_at(Duration::from_millis(500)), 0);
        assert!(counter.frame(Duration::from_secs(1)).finished);
    }

    #[test]
    fn test_format_counter() {
        assert_eq!(format_counter("", 500, "+"), "500+");
        assert_eq!(format_counter("$", 30, "/hr"), "$30/hr");
    }

    #[test]
    fn test_elapsed_between_clamps_clock_skew() {
        assert_eq!(elapsed_between(1000.0, 1500.0), Duration::from_millis(500));
        assert_eq!(elapsed_between(1000.0, 900.0), Duration::ZERO);
    }
}
