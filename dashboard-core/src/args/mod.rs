//! Command-line arguments shared by the dashboard binaries.
//!
//! Every tuning flag is optional: when absent, the value from `dashboard.json`
//! (or its built-in default) is kept.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct CommonArgs {
    /// Directory that may contain a dashboard.json file
    #[arg(long, default_value = "./config")]
    config_dir: PathBuf,

    /// Milliseconds between quote ticks
    #[arg(long)]
    quote_interval_ms: Option<u64>,

    /// Milliseconds between alert ticks
    #[arg(long)]
    alert_interval_ms: Option<u64>,

    /// Comma-separated symbols, e.g. EURUSD,GBPUSD
    #[arg(long, value_delimiter = ',')]
    watchlist: Option<Vec<String>>,

    /// Stop after this many quote ticks (0 runs until Ctrl-C)
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Seed for the mock generators; omit for a random seed
    #[arg(long)]
    seed: Option<u64>,

    /// light, dark or pro
    #[arg(long)]
    theme: Option<String>,

    /// en, es, zh or ar
    #[arg(long)]
    language: Option<String>,
}

impl CommonArgs {
    /// Parses arguments from an explicit list (the first item is the program name).
    ///
    /// Handles `--help` and `--version` and exits on invalid input, like `clap` does.
    pub fn parse_args(args: Vec<String>) -> Self {
        CommonArgs::parse_from(args)
    }

    pub fn get_config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    pub fn get_quote_interval_ms(&self) -> Option<u64> {
        self.quote_interval_ms
    }

    pub fn get_alert_interval_ms(&self) -> Option<u64> {
        self.alert_interval_ms
    }

    pub fn get_watchlist(&self) -> Option<Vec<String>> {
        self.watchlist.clone()
    }

    /// `None` when the driver should run until interrupted.
    pub fn get_tick_limit(&self) -> Option<u64> {
        (self.ticks > 0).then_some(self.ticks)
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn get_language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}
