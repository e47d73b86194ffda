//! Deck data model
//!
//! A deck is the static content the board plays: a set of hero statistics
//! and an ordered list of case-study cards, each carrying the numeric
//! metrics that get animated. Decks are plain TOML files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::format::DisplayFormat;
use crate::rotation::MetricSource;

/// One animated figure with its display formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    /// Caption shown under the number
    pub label: String,
    /// Target value the counter converges to
    pub value: f64,
    /// Text rendered before the number (e.g. "$")
    #[serde(default)]
    pub prefix: String,
    /// Text rendered after the number (e.g. "%", "M", "x")
    #[serde(default)]
    pub suffix: String,
    /// Rounding policy; defaults from the target's magnitude when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DisplayFormat>,
}

impl Metric {
    /// Effective rounding policy for this metric
    pub fn format(&self) -> DisplayFormat {
        self.format.unwrap_or_else(|| DisplayFormat::default_for(self.value))
    }

    /// Render an in-flight value as `prefix + number + suffix`
    pub fn display(&self, current: f64) -> String {
        format!("{}{}{}", self.prefix, self.format().apply(current), self.suffix)
    }
}

/// One case-study card in the rotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
    /// Client name shown as the card title
    pub client: String,
    /// Industry tag
    #[serde(default)]
    pub industry: String,
    /// One-paragraph result summary
    pub summary: String,
    /// Animated result figures
    pub metrics: Vec<Metric>,
}

impl MetricSource for CaseStudy {
    fn targets(&self) -> Vec<f64> {
        self.metrics.iter().map(|m| m.value).collect()
    }
}

/// A complete presentation deck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    /// Stats animated once, when the board first appears
    #[serde(default)]
    pub hero_stats: Vec<Metric>,
    /// Cards cycled by the rotation controller
    pub case_studies: Vec<CaseStudy>,
}

impl Deck {
    /// Load a deck from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let deck: Deck =
            toml::from_str(&content).map_err(|e| Error::DeckParse(e.to_string()))?;
        deck.validate()?;
        debug!(path = %path.display(), cards = deck.case_studies.len(), "deck loaded");
        Ok(deck)
    }

    /// Check the deck is playable
    pub fn validate(&self) -> Result<()> {
        if self.case_studies.is_empty() {
            return Err(Error::InvalidDeck("deck has no case studies".into()));
        }
        for (i, case) in self.case_studies.iter().enumerate() {
            if case.metrics.is_empty() {
                return Err(Error::InvalidDeck(format!(
                    "case study {} ({}) has no metrics",
                    i, case.client
                )));
            }
            for metric in &case.metrics {
                if !metric.value.is_finite() {
                    return Err(Error::InvalidDeck(format!(
                        "metric '{}' of {} has a non-finite value",
                        metric.label, case.client
                    )));
                }
            }
        }
        for metric in &self.hero_stats {
            if !metric.value.is_finite() {
                return Err(Error::InvalidDeck(format!(
                    "hero stat '{}' has a non-finite value",
                    metric.label
                )));
            }
        }
        Ok(())
    }

    /// Built-in demo deck
    pub fn sample() -> Self {
        Deck {
            title: "AlgoVision".into(),
            tagline: "Marketing technology that proves itself".into(),
            hero_stats: vec![
                Metric {
                    label: "Campaigns optimized".into(),
                    value: 1200.0,
                    prefix: String::new(),
                    suffix: "+".into(),
                    format: None,
                },
                Metric {
                    label: "Average ROAS lift".into(),
                    value: 4.2,
                    prefix: String::new(),
                    suffix: "x".into(),
                    format: None,
                },
                Metric {
                    label: "Client retention".into(),
                    value: 97.0,
                    prefix: String::new(),
                    suffix: "%".into(),
                    format: None,
                },
            ],
            case_studies: vec![
                CaseStudy {
                    client: "Brightline Retail".into(),
                    industry: "E-commerce".into(),
                    summary: "Full-funnel ad-platform management across search and \
                              social cut wasted spend and compounded returns within \
                              two quarters."
                        .into(),
                    metrics: vec![
                        Metric {
                            label: "Return on ad spend".into(),
                            value: 425.0,
                            prefix: "+".into(),
                            suffix: "%".into(),
                            format: None,
                        },
                        Metric {
                            label: "Incremental revenue".into(),
                            value: 2.8,
                            prefix: "$".into(),
                            suffix: "M".into(),
                            format: Some(DisplayFormat::Fixed(1)),
                        },
                        Metric {
                            label: "Cost per acquisition".into(),
                            value: 38.0,
                            prefix: "-".into(),
                            suffix: "%".into(),
                            format: None,
                        },
                    ],
                },
                CaseStudy {
                    client: "NordWell Health".into(),
                    industry: "Healthcare".into(),
                    summary: "A triage chatbot took over first-line patient questions, \
                              freeing coordinators for the conversations that need a \
                              human."
                        .into(),
                    metrics: vec![
                        Metric {
                            label: "Qualified-lead volume".into(),
                            value: 280.0,
                            prefix: "+".into(),
                            suffix: "%".into(),
                            format: None,
                        },
                        Metric {
                            label: "Tickets deflected".into(),
                            value: 62.0,
                            prefix: String::new(),
                            suffix: "%".into(),
                            format: None,
                        },
                        Metric {
                            label: "Patient satisfaction".into(),
                            value: 4.8,
                            prefix: String::new(),
                            suffix: "/5".into(),
                            format: None,
                        },
                    ],
                },
                CaseStudy {
                    client: "Atlas Ventures".into(),
                    industry: "B2B SaaS".into(),
                    summary: "A focused PR and thought-leadership program put the \
                              founding team in front of the trade press that matters."
                        .into(),
                    metrics: vec![
                        Metric {
                            label: "Share of voice".into(),
                            value: 150.0,
                            prefix: "+".into(),
                            suffix: "%".into(),
                            format: None,
                        },
                        Metric {
                            label: "Media placements".into(),
                            value: 75.0,
                            prefix: String::new(),
                            suffix: "+".into(),
                            format: None,
                        },
                        Metric {
                            label: "Pipeline growth".into(),
                            value: 3.5,
                            prefix: String::new(),
                            suffix: "x".into(),
                            format: None,
                        },
                    ],
                },
            ],
        }
    }
}
