//! Random notification generator.

use dashboard::model::notification::{NotificationDraft, NotificationKind};
use dashboard::model::quote::LiveQuotes;
use dashboard::traits::alert_source::AlertSource;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Absolute change above which a quote is reported as volatile.
pub const VOLATILITY_THRESHOLD: f64 = 0.0008;

/// Emits a notification on roughly `probability` of the ticks it is polled on.
pub struct RandomAlertFeed<R: Rng = StdRng> {
    probability: f64,
    rng: R,
}

impl RandomAlertFeed<StdRng> {
    pub fn new(probability: f64) -> Self {
        Self::with_rng(probability, StdRng::from_entropy())
    }

    pub fn seeded(probability: f64, seed: u64) -> Self {
        Self::with_rng(probability, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomAlertFeed<R> {
    /// `probability` is clamped into `[0, 1]`; NaN counts as zero.
    pub fn with_rng(probability: f64, rng: R) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self { probability, rng }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl<R: Rng> AlertSource for RandomAlertFeed<R> {
    fn next_alert(&mut self, quotes: &LiveQuotes) -> Option<NotificationDraft> {
        if quotes.is_empty() || !self.rng.gen_bool(self.probability) {
            return None;
        }

        let symbols = quotes.symbols();
        let symbol = *symbols.choose(&mut self.rng)?;
        let quote = quotes.get(symbol)?;

        if quote.change.abs() > VOLATILITY_THRESHOLD {
            return Some(NotificationDraft::new(
                NotificationKind::Warning,
                "Volatility Alert",
                format!("{} moved {:+.5} on the last tick", symbol, quote.change),
            ));
        }

        let draft = match self.rng.gen_range(0..2) {
            0 => NotificationDraft::new(
                NotificationKind::Info,
                "Price Update",
                format!("{} bid {:.5} / ask {:.5}", symbol, quote.bid, quote.ask),
            ),
            _ => NotificationDraft::new(
                NotificationKind::Success,
                "Analysis Complete",
                format!("{} analysis is ready", symbol),
            ),
        };
        Some(draft)
    }
}
