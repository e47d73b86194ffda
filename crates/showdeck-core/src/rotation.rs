//! Case-study rotation controller
//!
//! Maintains an active index into a fixed record list and re-triggers the
//! counter animations whenever the active record changes, either from the
//! auto-advance timer or from manual navigation. Every successful index
//! change first cancels the outgoing record's animations, then starts fresh
//! ones toward the incoming record's values — the display slots guarantee
//! no two animations ever overlap on one figure.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::{DisplaySlot, EasingType};
use crate::config::{AnimationConfig, RotationConfig};
use crate::error::{Error, Result};

/// Projects the animated numeric fields out of a record
///
/// The controller only ever sees targets, not the record's content; the
/// rendering layer reads labels and formatting off the record itself.
pub trait MetricSource {
    fn targets(&self) -> Vec<f64>;
}

/// Where a field's counter restarts from on rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    /// Count up from zero on every rotation
    Zero,
    /// Continue from the value currently displayed
    Current,
}

impl Default for RestartPolicy {
    fn default() -> Self {
        RestartPolicy::Zero
    }
}

#[derive(Debug, Clone)]
struct AutoAdvance {
    interval: Duration,
    next_fire: Instant,
}

/// Cycles through a fixed record list, driving one display slot per field
/// of the active record
#[derive(Debug, Clone)]
pub struct RotationController<R: MetricSource> {
    records: Vec<R>,
    active: usize,
    slots: Vec<DisplaySlot>,
    duration: Duration,
    easing: EasingType,
    restart: RestartPolicy,
    /// Manual navigation reschedules the timer only when this is set.
    /// The observed site behavior is that it does not: the interval keeps
    /// firing on its original cadence regardless of clicks.
    reset_timer_on_manual_nav: bool,
    auto: Option<AutoAdvance>,
}

impl<R: MetricSource> RotationController<R> {
    /// Create a controller over `records` and start animating record 0
    ///
    /// Fails with [`Error::EmptyRecordSet`] when there is nothing to rotate.
    pub fn new(
        records: Vec<R>,
        animation: &AnimationConfig,
        rotation: &RotationConfig,
        now: Instant,
    ) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyRecordSet);
        }
        let auto = rotation.auto_advance().map(|interval| AutoAdvance {
            interval,
            next_fire: now + interval,
        });
        let mut controller = Self {
            records,
            active: 0,
            slots: Vec::new(),
            duration: animation.duration(),
            easing: animation.easing,
            restart: rotation.restart,
            reset_timer_on_manual_nav: rotation.reset_timer_on_manual_nav,
            auto,
        };
        controller.retrigger(now);
        Ok(controller)
    }

    /// Advance to the next record, wrapping at the end
    pub fn next(&mut self, now: Instant) {
        let next = (self.active + 1) % self.records.len();
        self.rotate_to(next, now, true);
    }

    /// Step back to the previous record, wrapping at the front
    pub fn previous(&mut self, now: Instant) {
        let len = self.records.len();
        let prev = (self.active + len - 1) % len;
        self.rotate_to(prev, now, true);
    }

    /// Jump straight to record `index`
    ///
    /// An out-of-range index is a validation error and leaves the active
    /// index untouched; it is never clamped.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> Result<()> {
        if index >= self.records.len() {
            return Err(Error::OutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.rotate_to(index, now, true);
        Ok(())
    }

    /// Restart the active record's animations without changing the index
    pub fn replay(&mut self, now: Instant) {
        self.retrigger(now);
    }

    /// Drive the timer and all slots forward to `now`
    ///
    /// Fires any due auto-advances on their fixed cadence (catching up if
    /// the caller stalled across several intervals), then advances every
    /// counter.
    pub fn tick(&mut self, now: Instant) {
        let mut fires = 0usize;
        if let Some(auto) = &mut self.auto {
            while now >= auto.next_fire {
                auto.next_fire += auto.interval;
                fires += 1;
            }
        }
        if fires > 0 {
            let next = (self.active + fires) % self.records.len();
            self.rotate_to(next, now, false);
        }
        for slot in &mut self.slots {
            slot.tick(now);
        }
    }

    /// Enable or disable the auto-advance timer
    pub fn set_auto_advance(&mut self, interval: Option<Duration>, now: Instant) {
        self.auto = interval
            .filter(|i| !i.is_zero())
            .map(|interval| AutoAdvance {
                interval,
                next_fire: now + interval,
            });
    }

    #[inline]
    pub fn auto_advance_enabled(&self) -> bool {
        self.auto.is_some()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active record
    pub fn active(&self) -> &R {
        &self.records[self.active]
    }

    #[inline]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Currently displayed value of each field of the active record
    pub fn values(&self) -> Vec<f64> {
        self.slots.iter().map(|s| s.value()).collect()
    }

    /// True while any field is still counting
    pub fn is_animating(&self) -> bool {
        self.slots.iter().any(|s| s.is_animating())
    }

    fn rotate_to(&mut self, index: usize, now: Instant, manual: bool) {
        self.active = index;
        self.retrigger(now);
        if manual && self.reset_timer_on_manual_nav {
            if let Some(auto) = &mut self.auto {
                auto.next_fire = now + auto.interval;
            }
        }
        debug!(index, manual, "rotated to record");
    }

    /// Cancel whatever is running and start fresh animations toward the
    /// active record's targets
    fn retrigger(&mut self, now: Instant) {
        let targets = self.records[self.active].targets();
        self.slots.resize_with(targets.len(), DisplaySlot::new);
        for (slot, target) in self.slots.iter_mut().zip(targets) {
            let from = match self.restart {
                RestartPolicy::Zero => 0.0,
                RestartPolicy::Current => slot.value(),
            };
            slot.begin(from, target, self.duration, self.easing, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stat(f64);

    impl MetricSource for Stat {
        fn targets(&self) -> Vec<f64> {
            vec![self.0]
        }
    }

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    fn animation() -> AnimationConfig {
        AnimationConfig {
            duration_ms: 1500,
            easing: EasingType::Quart,
            fps: 60,
        }
    }

    fn no_auto() -> RotationConfig {
        RotationConfig {
            auto_advance_ms: None,
            reset_timer_on_manual_nav: false,
            restart: RestartPolicy::Zero,
        }
    }

    fn controller(values: &[f64], rotation: RotationConfig, now: Instant) -> RotationController<Stat> {
        let records = values.iter().map(|&v| Stat(v)).collect();
        RotationController::new(records, &animation(), &rotation, now).unwrap()
    }

    #[test]
    fn test_empty_records_rejected() {
        let result = RotationController::<Stat>::new(vec![], &animation(), &no_auto(), Instant::now());
        assert!(matches!(result, Err(Error::EmptyRecordSet)));
    }

    #[test]
    fn test_next_wraps_around() {
        let t0 = Instant::now();
        let mut c = controller(&[1.0, 2.0, 3.0, 4.0], no_auto(), t0);
        for _ in 0..4 {
            c.next(t0);
        }
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn test_previous_wraps_from_zero() {
        let t0 = Instant::now();
        let mut c = controller(&[1.0, 2.0, 3.0], no_auto(), t0);
        c.previous(t0);
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn test_jump_to_out_of_range() {
        let t0 = Instant::now();
        let mut c = controller(&[1.0, 2.0, 3.0], no_auto(), t0);
        c.next(t0);
        assert_eq!(c.active_index(), 1);

        assert!(matches!(
            c.jump_to(3, t0),
            Err(Error::OutOfRange { index: 3, len: 3 })
        ));
        assert!(c.jump_to(usize::MAX, t0).is_err());
        // Failed jumps leave the index untouched
        assert_eq!(c.active_index(), 1);

        assert!(c.jump_to(0, t0).is_ok());
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn test_end_to_end_rotation_reanimates() {
        let t0 = Instant::now();
        let mut c = controller(&[425.0, 280.0], no_auto(), t0);

        c.tick(t0);
        assert_eq!(c.values(), vec![0.0]);

        c.tick(at(t0, 1500));
        assert_eq!(c.values(), vec![425.0]);

        // Switch records: the old animation must leave no residue
        let t1 = at(t0, 2000);
        c.next(t1);
        c.tick(t1);
        assert_eq!(c.values(), vec![0.0]);

        c.tick(at(t0, 3500));
        assert_eq!(c.values(), vec![280.0]);
    }

    #[test]
    fn test_values_stay_in_range_during_rotation() {
        let t0 = Instant::now();
        let mut c = controller(&[425.0, 280.0], no_auto(), t0);
        // Interrupt mid-animation
        c.tick(at(t0, 700));
        let t1 = at(t0, 700);
        c.next(t1);
        for ms in (0..=1500).step_by(50) {
            c.tick(at(t1, ms));
            let v = c.values()[0];
            assert!((0.0..=280.0).contains(&v), "residual value {}", v);
        }
        assert_eq!(c.values(), vec![280.0]);
    }

    #[test]
    fn test_restart_from_current_value() {
        let t0 = Instant::now();
        let rotation = RotationConfig {
            restart: RestartPolicy::Current,
            ..no_auto()
        };
        let mut c = controller(&[100.0, 40.0], rotation, t0);
        c.tick(at(t0, 1500));
        assert_eq!(c.values(), vec![100.0]);

        let t1 = at(t0, 2000);
        c.next(t1);
        // Counts down from where it left off rather than snapping to zero
        c.tick(t1);
        assert_eq!(c.values(), vec![100.0]);
        c.tick(at(t1, 1500));
        assert_eq!(c.values(), vec![40.0]);
    }

    #[test]
    fn test_auto_advance_fires_on_cadence() {
        let t0 = Instant::now();
        let rotation = RotationConfig {
            auto_advance_ms: Some(6000),
            ..no_auto()
        };
        let mut c = controller(&[1.0, 2.0, 3.0], rotation, t0);

        c.tick(at(t0, 5999));
        assert_eq!(c.active_index(), 0);
        c.tick(at(t0, 6000));
        assert_eq!(c.active_index(), 1);
        c.tick(at(t0, 12000));
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn test_auto_advance_catches_up_after_stall() {
        let t0 = Instant::now();
        let rotation = RotationConfig {
            auto_advance_ms: Some(1000),
            ..no_auto()
        };
        let mut c = controller(&[1.0, 2.0, 3.0], rotation, t0);
        // Three intervals elapse in one tick
        c.tick(at(t0, 3000));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn test_manual_nav_keeps_timer_cadence() {
        let t0 = Instant::now();
        let rotation = RotationConfig {
            auto_advance_ms: Some(6000),
            ..no_auto()
        };
        let mut c = controller(&[1.0, 2.0, 3.0], rotation, t0);

        // Manual click just before the timer fires
        c.next(at(t0, 5900));
        assert_eq!(c.active_index(), 1);
        // The timer still fires on its original schedule: double-advance
        c.tick(at(t0, 6000));
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn test_manual_nav_resets_timer_when_configured() {
        let t0 = Instant::now();
        let rotation = RotationConfig {
            auto_advance_ms: Some(6000),
            reset_timer_on_manual_nav: true,
            ..no_auto()
        };
        let mut c = controller(&[1.0, 2.0, 3.0], rotation, t0);

        c.next(at(t0, 5900));
        assert_eq!(c.active_index(), 1);
        // Rescheduled: nothing fires at the original deadline
        c.tick(at(t0, 6000));
        assert_eq!(c.active_index(), 1);
        // Fires a full interval after the manual click
        c.tick(at(t0, 11900));
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn test_set_auto_advance_toggle() {
        let t0 = Instant::now();
        let rotation = RotationConfig {
            auto_advance_ms: Some(1000),
            ..no_auto()
        };
        let mut c = controller(&[1.0, 2.0], rotation, t0);
        assert!(c.auto_advance_enabled());

        c.set_auto_advance(None, t0);
        assert!(!c.auto_advance_enabled());
        c.tick(at(t0, 10000));
        assert_eq!(c.active_index(), 0);

        let t1 = at(t0, 10000);
        c.set_auto_advance(Some(Duration::from_millis(1000)), t1);
        c.tick(at(t1, 1000));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn test_slot_count_follows_record_shape() {
        struct Wide(Vec<f64>);
        impl MetricSource for Wide {
            fn targets(&self) -> Vec<f64> {
                self.0.clone()
            }
        }
        let t0 = Instant::now();
        let records = vec![Wide(vec![1.0, 2.0, 3.0]), Wide(vec![4.0])];
        let mut c = RotationController::new(records, &animation(), &no_auto(), t0).unwrap();
        assert_eq!(c.values().len(), 3);
        c.next(t0);
        assert_eq!(c.values().len(), 1);
    }
}
