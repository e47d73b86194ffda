use std::time::Instant;

use tracing::warn;

use showdeck_core::animation::{DisplaySlot, VisibilityGate};
use showdeck_core::config::{AnimationConfig, AppConfig};
use showdeck_core::deck::{CaseStudy, Deck};
use showdeck_core::rotation::RotationController;
use showdeck_core::Result;

/// Board state: the deck being played, the case-study rotation, and the
/// hero counters that fire once when the board first appears
pub struct App {
    pub deck: Deck,
    pub rotation: RotationController<CaseStudy>,
    hero_slots: Vec<DisplaySlot>,
    hero_gate: VisibilityGate,
    animation: AnimationConfig,
    auto_advance_ms: Option<u64>,
    pub show_hints: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(deck: Deck, config: &AppConfig, now: Instant) -> Result<Self> {
        deck.validate()?;
        let rotation = RotationController::new(
            deck.case_studies.clone(),
            &config.animation,
            &config.rotation,
            now,
        )?;
        let hero_slots = deck.hero_stats.iter().map(|_| DisplaySlot::new()).collect();
        Ok(Self {
            deck,
            rotation,
            hero_slots,
            hero_gate: VisibilityGate::new(),
            animation: config.animation.clone(),
            auto_advance_ms: config.rotation.auto_advance_ms,
            show_hints: config.ui.show_hints,
            status_message: None,
            should_quit: false,
        })
    }

    /// Advance all animations to `now`
    ///
    /// The first tick counts as the board entering the viewport, which is
    /// when the hero counters start — exactly once.
    pub fn tick(&mut self, now: Instant) {
        if self.hero_gate.enter() {
            for (slot, stat) in self.hero_slots.iter_mut().zip(&self.deck.hero_stats) {
                slot.begin(
                    0.0,
                    stat.value,
                    self.animation.duration(),
                    self.animation.easing,
                    now,
                );
            }
        }
        for slot in &mut self.hero_slots {
            slot.tick(now);
        }
        self.rotation.tick(now);
    }

    pub fn next_card(&mut self, now: Instant) {
        self.status_message = None;
        self.rotation.next(now);
    }

    pub fn previous_card(&mut self, now: Instant) {
        self.status_message = None;
        self.rotation.previous(now);
    }

    pub fn jump_to_card(&mut self, index: usize, now: Instant) {
        match self.rotation.jump_to(index, now) {
            Ok(()) => self.status_message = None,
            Err(e) => {
                warn!(index, "jump rejected: {e}");
                self.status_message = Some(format!("No card {}", index + 1));
            }
        }
    }

    pub fn toggle_auto_advance(&mut self, now: Instant) {
        if self.rotation.auto_advance_enabled() {
            self.rotation.set_auto_advance(None, now);
            self.status_message = Some("Paused".into());
        } else {
            let interval = self
                .auto_advance_ms
                .filter(|&ms| ms > 0)
                .map(std::time::Duration::from_millis);
            self.rotation.set_auto_advance(interval, now);
            self.status_message = interval.map(|_| "Playing".into());
        }
    }

    /// Restart the active card's counters
    pub fn replay(&mut self, now: Instant) {
        self.status_message = None;
        self.rotation.replay(now);
    }

    pub fn toggle_hints(&mut self) {
        self.show_hints = !self.show_hints;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Hero stats as (formatted value, label) pairs
    pub fn hero_display(&self) -> Vec<(String, String)> {
        self.hero_slots
            .iter()
            .zip(&self.deck.hero_stats)
            .map(|(slot, stat)| (stat.display(slot.value()), stat.label.clone()))
            .collect()
    }

    /// Active card metrics as (formatted value, label) pairs
    pub fn card_display(&self) -> Vec<(String, String)> {
        let card = self.rotation.active();
        self.rotation
            .values()
            .into_iter()
            .zip(&card.metrics)
            .map(|(value, metric)| (metric.display(value), metric.label.clone()))
            .collect()
    }
}
