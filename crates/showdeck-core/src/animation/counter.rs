//! Counter animation state machine
//!
//! A [`CounterAnimator`] drives one numeric value from a start to a target
//! over a fixed duration, sampled once per frame by the owning loop. The
//! animator never schedules anything itself; the caller ticks it with the
//! current time, which keeps the whole lifecycle testable with simulated
//! clocks.

use std::time::{Duration, Instant};

use tracing::trace;

use super::easing::EasingType;
use super::timing::{is_complete, lerp, progress};

/// Lifecycle phase of a counter animation
///
/// `Idle -> Running -> Completed`, with `Running -> Cancelled` as the
/// alternate terminal transition. Terminal phases never re-enter `Running`;
/// a fresh animation means a fresh animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// One in-flight numeric counter animation
#[derive(Debug, Clone)]
pub struct CounterAnimator {
    /// Value at animation start
    from: f64,
    /// Final value the animation converges to
    to: f64,
    /// Total animation length
    duration: Duration,
    /// Easing curve applied to progress
    easing: EasingType,
    /// Wall-clock time the animation began (None until started)
    started_at: Option<Instant>,
    /// The value currently displayed
    current: f64,
    /// Highest eased progress seen so far, so clock jitter can never move
    /// the displayed value away from the target
    peak: f64,
    phase: AnimationPhase,
}

impl CounterAnimator {
    /// Create an idle animator; call [`start`](Self::start) to begin
    pub fn new(from: f64, to: f64, duration: Duration, easing: EasingType) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            started_at: None,
            current: from,
            peak: 0.0,
            phase: AnimationPhase::Idle,
        }
    }

    /// Begin the animation at `now`
    ///
    /// A zero duration or equal endpoints settle immediately: the current
    /// value becomes the target and the animator completes without any
    /// further work. Only an `Idle` animator can start; starting from any
    /// other phase is a no-op.
    pub fn start(&mut self, now: Instant) {
        if self.phase != AnimationPhase::Idle {
            return;
        }
        if self.duration.is_zero() || self.from == self.to {
            self.current = self.to;
            self.phase = AnimationPhase::Completed;
            return;
        }
        self.started_at = Some(now);
        self.phase = AnimationPhase::Running;
        trace!(from = self.from, to = self.to, "counter animation started");
    }

    /// Advance to `now` and return the current value
    ///
    /// While running, the value moves monotonically from the start toward
    /// the target and never leaves `[min(from, to), max(from, to)]`. At or
    /// beyond the duration the sample is exactly the target and the
    /// animator completes. Sampling an idle or terminal animator returns
    /// its settled value unchanged.
    pub fn sample(&mut self, now: Instant) -> f64 {
        if self.phase != AnimationPhase::Running {
            return self.current;
        }
        // Running implies a start time was recorded
        let started = match self.started_at {
            Some(t) => t,
            None => return self.current,
        };
        if is_complete(started, now, self.duration) {
            self.current = self.to;
            self.phase = AnimationPhase::Completed;
            trace!(value = self.to, "counter animation completed");
        } else {
            let eased = self.easing.apply(progress(started, now, self.duration));
            self.peak = self.peak.max(eased);
            self.current = lerp(self.from, self.to, self.peak);
        }
        self.current
    }

    /// Cancel the animation, freezing the current value
    ///
    /// Idempotent: cancelling twice, or after natural completion, is a
    /// no-op. A completed animator stays `Completed`.
    pub fn cancel(&mut self) {
        match self.phase {
            AnimationPhase::Idle | AnimationPhase::Running => {
                self.phase = AnimationPhase::Cancelled;
                trace!(value = self.current, "counter animation cancelled");
            }
            AnimationPhase::Completed | AnimationPhase::Cancelled => {}
        }
    }

    /// The value currently displayed
    #[inline]
    pub fn value(&self) -> f64 {
        self.current
    }

    /// The target value
    #[inline]
    pub fn target(&self) -> f64 {
        self.to
    }

    #[inline]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == AnimationPhase::Running
    }

    /// True once the animator reached a terminal phase
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(
            self.phase,
            AnimationPhase::Completed | AnimationPhase::Cancelled
        )
    }
}
