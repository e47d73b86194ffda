//! Pure easing functions for counter animations
//!
//! Provides mathematical easing functions that map input [0, 1] to output
//! [0, 1] with various deceleration curves. All variants are ease-out: fast
//! initial movement that settles smoothly into the target, which is what
//! makes large numeric jumps (0 -> 500) feel energetic without an abrupt
//! stop.

use serde::{Deserialize, Serialize};

/// Easing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Constant speed (no easing)
    Linear,
    /// Quadratic ease-out
    Quad,
    /// Cubic ease-out
    Cubic,
    /// Quartic ease-out (default for counters)
    Quart,
    /// Quintic ease-out
    Quint,
    /// Exponential ease-out
    Expo,
}

impl Default for EasingType {
    fn default() -> Self {
        EasingType::Quart
    }
}

impl EasingType {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::Quad => quad_ease_out(t),
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quart => quart_ease_out(t),
            EasingType::Quint => quint_ease_out(t),
            EasingType::Expo => exponential_ease_out(t),
        }
    }
}

/// Quadratic ease-out: f(t) = 1 - (1-t)²
#[inline]
fn quad_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quartic ease-out: f(t) = 1 - (1-t)⁴
#[inline]
fn quart_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quint_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 6] = [
        EasingType::Linear,
        EasingType::Quad,
        EasingType::Cubic,
        EasingType::Quart,
        EasingType::Quint,
        EasingType::Expo,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=100 {
                let t = i as f64 / 100.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_quart_matches_formula() {
        let t: f64 = 0.3;
        let expected = 1.0 - (1.0 - t).powi(4);
        assert!((EasingType::Quart.apply(t) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_apply_clamps_input() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), easing.apply(0.0));
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }
}
