//! Display formatting policy for animated values
//!
//! Callers decide how an in-flight floating-point value is shown: whole
//! counters floor or round, small currency/ratio figures keep a decimal
//! place. The policy travels with the metric instead of being inferred at
//! each call site.

use serde::{Deserialize, Serialize};

/// Rounding policy applied when rendering an animated value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayFormat {
    /// Truncate toward negative infinity
    Floor,
    /// Round to the nearest whole number
    Round,
    /// Fixed number of decimal places
    Fixed(u8),
}

impl DisplayFormat {
    /// Render a value under this policy
    pub fn apply(&self, value: f64) -> String {
        match self {
            DisplayFormat::Floor => format!("{}", value.floor() as i64),
            DisplayFormat::Round => format!("{}", value.round() as i64),
            DisplayFormat::Fixed(decimals) => format!("{:.*}", *decimals as usize, value),
        }
    }

    /// The site's observed default: small targets (ratios, currency in
    /// millions) keep one decimal place, everything else rounds whole.
    pub fn default_for(target: f64) -> Self {
        if target.abs() < 10.0 {
            DisplayFormat::Fixed(1)
        } else {
            DisplayFormat::Round
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor() {
        assert_eq!(DisplayFormat::Floor.apply(424.9), "424");
        assert_eq!(DisplayFormat::Floor.apply(425.0), "425");
    }

    #[test]
    fn test_round() {
        assert_eq!(DisplayFormat::Round.apply(424.5), "425");
        assert_eq!(DisplayFormat::Round.apply(424.4), "424");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(DisplayFormat::Fixed(1).apply(4.25), "4.2");
        assert_eq!(DisplayFormat::Fixed(2).apply(4.256), "4.26");
        assert_eq!(DisplayFormat::Fixed(0).apply(4.6), "5");
    }

    #[test]
    fn test_default_policy() {
        assert_eq!(DisplayFormat::default_for(4.2), DisplayFormat::Fixed(1));
        assert_eq!(DisplayFormat::default_for(9.9), DisplayFormat::Fixed(1));
        assert_eq!(DisplayFormat::default_for(10.0), DisplayFormat::Round);
        assert_eq!(DisplayFormat::default_for(425.0), DisplayFormat::Round);
    }

    #[test]
    fn test_toml_representations() {
        #[derive(Deserialize)]
        struct Holder {
            format: DisplayFormat,
        }
        let unit: Holder = toml::from_str(r#"format = "round""#).unwrap();
        assert_eq!(unit.format, DisplayFormat::Round);
        let fixed: Holder = toml::from_str("format = { fixed = 1 }").unwrap();
        assert_eq!(fixed.format, DisplayFormat::Fixed(1));
    }
}
