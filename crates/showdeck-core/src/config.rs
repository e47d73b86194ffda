//! Application configuration
//!
//! Loaded from `~/.config/showdeck/config.toml`. Every field has a default
//! so a missing or partial file always produces a working configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::EasingType;
use crate::error::{Error, Result};
use crate::rotation::RestartPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Counter animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Counter animation length in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Target animation frame rate
    #[serde(default = "default_fps")]
    pub fps: u16,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            easing: EasingType::default(),
            fps: default_fps(),
        }
    }
}

impl AnimationConfig {
    /// Counter animation length
    #[inline]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Configured durations must be positive; the animator itself treats a
    /// zero duration as already settled, but a config asking for it is a
    /// mistake worth surfacing.
    pub fn validate(&self) -> Result<()> {
        if self.duration_ms == 0 {
            return Err(Error::Config("animation.duration_ms must be positive".into()));
        }
        if self.fps == 0 {
            return Err(Error::Config("animation.fps must be positive".into()));
        }
        Ok(())
    }
}

/// Case-study rotation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Auto-advance interval in milliseconds; absent or 0 disables it
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: Option<u64>,
    /// Reschedule the auto-advance timer after manual navigation. Off by
    /// default: the original behavior lets the timer keep its cadence, so
    /// a click just before the deadline double-advances.
    #[serde(default)]
    pub reset_timer_on_manual_nav: bool,
    /// Where counters restart from on rotation
    #[serde(default)]
    pub restart: RestartPolicy,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            reset_timer_on_manual_nav: false,
            restart: RestartPolicy::default(),
        }
    }
}

impl RotationConfig {
    /// Effective auto-advance interval; `Some(0)` counts as disabled
    pub fn auto_advance(&self) -> Option<Duration> {
        self.auto_advance_ms
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the key-hint line in the status bar
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_hints: default_true(),
        }
    }
}

fn default_duration_ms() -> u64 {
    1500
}

fn default_fps() -> u16 {
    60
}

fn default_auto_advance_ms() -> Option<u64> {
    Some(6000)
}

fn default_tick_rate() -> u64 {
    16
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from the config file, or defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?
        } else {
            Self::default()
        };
        config.animation.validate()?;
        Ok(config)
    }

    /// Write the current configuration to the config file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Always uses ~/.config/showdeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("showdeck")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.animation.duration_ms, 1500);
        assert_eq!(config.animation.easing, EasingType::Quart);
        assert_eq!(config.animation.fps, 60);
        assert_eq!(config.rotation.auto_advance_ms, Some(6000));
        assert!(!config.rotation.reset_timer_on_manual_nav);
        assert_eq!(config.rotation.restart, RestartPolicy::Zero);
        assert_eq!(config.ui.tick_rate_ms, 16);
        assert!(config.ui.show_hints);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [animation]
            duration_ms = 800
            easing = "cubic"
            "#,
        )
        .unwrap();
        assert_eq!(config.animation.duration_ms, 800);
        assert_eq!(config.animation.easing, EasingType::Cubic);
        assert_eq!(config.animation.fps, 60);
        assert_eq!(config.rotation.auto_advance_ms, Some(6000));
    }

    #[test]
    fn test_validate_rejects_zero_duration() {
        let config = AnimationConfig {
            duration_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_auto_advance_zero_is_disabled() {
        let config = RotationConfig {
            auto_advance_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(config.auto_advance(), None);

        let config = RotationConfig {
            auto_advance_ms: None,
            ..Default::default()
        };
        assert_eq!(config.auto_advance(), None);

        let config = RotationConfig::default();
        assert_eq!(config.auto_advance(), Some(Duration::from_millis(6000)));
    }
}
