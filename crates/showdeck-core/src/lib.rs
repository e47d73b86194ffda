pub mod animation;
pub mod config;
pub mod deck;
pub mod error;
pub mod format;
pub mod rotation;

pub use animation::{AnimationPhase, CounterAnimator, DisplaySlot, EasingType, VisibilityGate};
pub use config::{AnimationConfig, AppConfig, RotationConfig, UiConfig};
pub use deck::{CaseStudy, Deck, Metric};
pub use error::{Error, Result};
pub use format::DisplayFormat;
pub use rotation::{MetricSource, RestartPolicy, RotationController};
