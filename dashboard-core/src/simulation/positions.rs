//! Mock open positions for the dashboard view.
//!
//! This generator is deliberately unrelated to the quote feed: `current` and
//! `pnl` drift by their own random deltas and never read the live quote table.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Largest per-tick move of `current`, as a fraction of its value.
const MAX_PRICE_DRIFT: f64 = 0.0005;

/// Largest per-tick move of `pnl`, in account currency.
const MAX_PNL_DRIFT: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockPosition {
    pub symbol: String,
    pub entry: f64,
    pub current: f64,
    pub pnl: f64,
}

impl MockPosition {
    pub fn new(symbol: impl Into<String>, entry: f64, pnl: f64) -> Self {
        Self {
            symbol: symbol.into(),
            entry,
            current: entry,
            pnl,
        }
    }
}

/// The three positions the dashboard opens with.
pub fn demo_positions() -> Vec<MockPosition> {
    vec![
        MockPosition::new("EURUSD", 1.0842, 312.50),
        MockPosition::new("GBPUSD", 1.2671, -84.20),
        MockPosition::new("USDJPY", 149.12, 1_045.00),
    ]
}

pub struct PositionSimulator<R: Rng = StdRng> {
    positions: Vec<MockPosition>,
    rng: R,
}

impl PositionSimulator<StdRng> {
    pub fn new(positions: Vec<MockPosition>) -> Self {
        Self::with_rng(positions, StdRng::from_entropy())
    }

    pub fn seeded(positions: Vec<MockPosition>, seed: u64) -> Self {
        Self::with_rng(positions, StdRng::seed_from_u64(seed))
    }

    pub fn demo() -> Self {
        Self::new(demo_positions())
    }
}

impl<R: Rng> PositionSimulator<R> {
    pub fn with_rng(positions: Vec<MockPosition>, rng: R) -> Self {
        Self { positions, rng }
    }

    /// Applies one round of independent random deltas to every position.
    pub fn tick(&mut self) -> &[MockPosition] {
        for position in self.positions.iter_mut() {
            let drift = self.rng.gen_range(-MAX_PRICE_DRIFT..=MAX_PRICE_DRIFT);
            position.current *= 1.0 + drift;
            position.pnl += self.rng.gen_range(-MAX_PNL_DRIFT..=MAX_PNL_DRIFT);
        }
        &self.positions
    }

    pub fn positions(&self) -> &[MockPosition] {
        &self.positions
    }

    pub fn total_pnl(&self) -> f64 {
        self.positions.iter().map(|p| p.pnl).sum()
    }
}
