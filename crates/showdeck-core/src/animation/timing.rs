//! Time calculation utilities for counter animations
//!
//! Pure functions for calculating animation progress and interpolation.
//! `now` is always an explicit argument so tests can drive animations with
//! simulated time instead of sleeping.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) from start time and duration
///
/// A zero duration is already complete (progress 1.0), never a division by
/// zero. A `now` earlier than `start` clamps to 0.0.
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation started at `start` has run its full duration
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
