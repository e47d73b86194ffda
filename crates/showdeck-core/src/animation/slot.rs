//! Display-slot ownership for counter animations
//!
//! A [`DisplaySlot`] is the single mutable "currently displayed value" for
//! one on-screen counter. At most one animation owns a slot at a time:
//! beginning a new animation cancels whatever was still running, so two
//! animations can never fight over the same displayed value.

use std::time::{Duration, Instant};

use super::counter::CounterAnimator;
use super::easing::EasingType;

/// One on-screen counter value and the animation that owns it
#[derive(Debug, Clone, Default)]
pub struct DisplaySlot {
    animator: Option<CounterAnimator>,
    value: f64,
}

impl DisplaySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh animation toward `to`, replacing any in-flight one
    ///
    /// The previous animation (if still running) is cancelled before the
    /// new one starts, on every path.
    pub fn begin(
        &mut self,
        from: f64,
        to: f64,
        duration: Duration,
        easing: EasingType,
        now: Instant,
    ) {
        if let Some(mut old) = self.animator.take() {
            old.cancel();
        }
        let mut animator = CounterAnimator::new(from, to, duration, easing);
        animator.start(now);
        self.value = animator.value();
        if animator.is_finished() {
            // Settled instantly (zero duration or equal endpoints)
            self.animator = None;
        } else {
            self.animator = Some(animator);
        }
    }

    /// Advance the owning animation to `now` and return the displayed value
    pub fn tick(&mut self, now: Instant) -> f64 {
        if let Some(animator) = &mut self.animator {
            self.value = animator.sample(now);
            if animator.is_finished() {
                self.animator = None;
            }
        }
        self.value
    }

    /// Cancel the owning animation, freezing the displayed value
    ///
    /// Idempotent; cancelling an empty slot is a no-op.
    pub fn cancel(&mut self) {
        if let Some(mut animator) = self.animator.take() {
            animator.cancel();
        }
    }

    /// The value currently displayed
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_some()
    }
}

/// One-shot viewport-entry latch
///
/// Counters on the original site start when their element first scrolls
/// into view, at most once. The gate is that contract and nothing more:
/// [`enter`](Self::enter) reports the first crossing and latches.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityGate {
    entered: bool,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a viewport entry; true exactly once
    pub fn enter(&mut self) -> bool {
        if self.entered {
            false
        } else {
            self.entered = true;
            true
        }
    }

    #[inline]
    pub fn has_entered(&self) -> bool {
        self.entered
    }
}
