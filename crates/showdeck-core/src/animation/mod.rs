//! Counter animation system for Showdeck
//!
//! Time-based numeric counters: each animation interpolates from a start
//! value to a target over a fixed duration with an ease-out curve, sampled
//! once per frame by the render loop.
//!
//! - `easing` - Pure easing functions (quad through expo ease-out)
//! - `timing` - Progress and interpolation helpers with explicit clocks
//! - `counter` - The per-animation state machine
//! - `slot` - Display-slot ownership and the viewport-entry latch
//!
//! # Usage
//!
//! ```ignore
//! use std::time::{Duration, Instant};
//! use showdeck_core::animation::{DisplaySlot, EasingType};
//!
//! let mut slot = DisplaySlot::new();
//! slot.begin(0.0, 425.0, Duration::from_millis(1500), EasingType::Quart, Instant::now());
//!
//! // In the frame loop:
//! let value = slot.tick(Instant::now());
//! ```

mod counter;
mod easing;
mod slot;
pub mod timing;

pub use counter::{AnimationPhase, CounterAnimator};
pub use easing::EasingType;
pub use slot::{DisplaySlot, VisibilityGate};
