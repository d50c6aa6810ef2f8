//! The optional `dashboard.json` configuration file.
//!
//! Every field has a default, so an empty object (or no file at all) yields a
//! working setup. Command-line flags are applied on top via [`DashboardConfig::apply_args`].

use crate::args::CommonArgs;
use crate::driver::DriverSettings;
use crate::simulation::quotes::default_base_prices;
use anyhow::{Context, Result};
use dashboard::model::preferences::{Language, Theme, UiPreferences};
use dashboard::model::watchlist::Watchlist;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// File name looked up inside the config directory.
pub const CONFIG_FILE: &str = "dashboard.json";

fn default_quote_interval_ms() -> u64 {
    1_000
}

fn default_alert_interval_ms() -> u64 {
    3_000
}

fn default_alert_probability() -> f64 {
    0.3
}

fn default_watchlist() -> Vec<String> {
    ["EURUSD", "GBPUSD", "USDJPY", "AUDUSD"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Rejected configuration values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },

    #[error("alert_probability must be within [0, 1], got {0}")]
    Probability(f64),

    #[error("base price for {symbol} must be positive and finite, got {price}")]
    BasePrice { symbol: String, price: f64 },

    #[error(transparent)]
    Domain(#[from] dashboard::DashboardError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_quote_interval_ms")]
    quote_interval_ms: u64,

    #[serde(default = "default_alert_interval_ms")]
    alert_interval_ms: u64,

    /// Chance that an alert tick produces a notification.
    #[serde(default = "default_alert_probability")]
    alert_probability: f64,

    #[serde(default = "default_watchlist")]
    watchlist: Vec<String>,

    /// Overrides and additions to the built-in base price table.
    #[serde(default)]
    base_prices: HashMap<String, f64>,

    #[serde(default)]
    theme: Theme,

    #[serde(default)]
    language: Language,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            quote_interval_ms: default_quote_interval_ms(),
            alert_interval_ms: default_alert_interval_ms(),
            alert_probability: default_alert_probability(),
            watchlist: default_watchlist(),
            base_prices: HashMap::new(),
            theme: Theme::default(),
            language: Language::default(),
        }
    }
}

impl DashboardConfig {
    /// Loads `dashboard.json` from `config_dir`, falling back to defaults when absent.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read, parsed, or validated.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            info!("No {} found in {}. Using defaults.", CONFIG_FILE, config_dir.display());
            return Ok(Self::default());
        }

        info!("Loading configuration from {}", path.display());
        let file = std::fs::File::open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let reader = std::io::BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.quote_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "quote_interval_ms",
            });
        }
        if self.alert_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "alert_interval_ms",
            });
        }
        if !(0.0..=1.0).contains(&self.alert_probability) {
            return Err(ConfigError::Probability(self.alert_probability));
        }
        for (symbol, &price) in &self.base_prices {
            if !price.is_finite() || price <= 0.0 {
                return Err(ConfigError::BasePrice {
                    symbol: symbol.clone(),
                    price,
                });
            }
        }
        Watchlist::from_symbols(&self.watchlist)?;
        Ok(())
    }

    /// Overlays the flags given on the command line.
    pub fn apply_args(&mut self, args: &CommonArgs) -> std::result::Result<(), ConfigError> {
        if let Some(ms) = args.get_quote_interval_ms() {
            self.quote_interval_ms = ms;
        }
        if let Some(ms) = args.get_alert_interval_ms() {
            self.alert_interval_ms = ms;
        }
        if let Some(symbols) = args.get_watchlist() {
            self.watchlist = symbols;
        }
        if let Some(theme) = args.get_theme() {
            self.theme = theme.parse()?;
        }
        if let Some(language) = args.get_language() {
            self.language = language.parse()?;
        }
        self.validate()
    }

    pub fn quote_interval(&self) -> Duration {
        Duration::from_millis(self.quote_interval_ms)
    }

    pub fn alert_interval(&self) -> Duration {
        Duration::from_millis(self.alert_interval_ms)
    }

    pub fn alert_probability(&self) -> f64 {
        self.alert_probability
    }

    pub fn watchlist(&self) -> std::result::Result<Watchlist, ConfigError> {
        Ok(Watchlist::from_symbols(&self.watchlist)?)
    }

    pub fn preferences(&self) -> UiPreferences {
        UiPreferences::new(self.theme, self.language)
    }

    /// Built-in table with this file's overrides applied. Keys are upper-cased.
    pub fn base_prices(&self) -> HashMap<String, f64> {
        let mut prices = default_base_prices();
        for (symbol, &price) in &self.base_prices {
            prices.insert(symbol.trim().to_uppercase(), price);
        }
        prices
    }

    pub fn driver_settings(&self, quote_tick_limit: Option<u64>) -> DriverSettings {
        DriverSettings {
            quote_interval: self.quote_interval(),
            alert_interval: self.alert_interval(),
            quote_tick_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.quote_interval(), Duration::from_secs(1));
        assert_eq!(config.alert_interval(), Duration::from_secs(3));
        assert_eq!(config.watchlist().unwrap().len(), 4);
        assert_eq!(config.preferences().theme(), Theme::Dark);
    }

    #[test]
    fn test_partial_file() {
        let config = DashboardConfig::from_json(
            r#"{"quote_interval_ms": 250, "theme": "pro", "watchlist": ["eurusd", "XAUUSD"]}"#,
        )
        .unwrap();

        assert_eq!(config.quote_interval(), Duration::from_millis(250));
        assert_eq!(config.preferences().theme(), Theme::Pro);
        assert_eq!(config.watchlist().unwrap().as_slice(), &["EURUSD", "XAUUSD"]);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(DashboardConfig::from_json(r#"{"quote_interval_ms": 0}"#).is_err());
        assert!(DashboardConfig::from_json(r#"{"alert_probability": 1.5}"#).is_err());
        assert!(DashboardConfig::from_json(r#"{"base_prices": {"EURUSD": -1.0}}"#).is_err());
        assert!(DashboardConfig::from_json(r#"{"watchlist": ["EURUSD", " "]}"#).is_err());
        assert!(DashboardConfig::from_json(r#"{"theme": "neon"}"#).is_err());
    }

    #[test]
    fn test_base_price_overrides() {
        let config =
            DashboardConfig::from_json(r#"{"base_prices": {"eurusd": 1.1, "XAUUSD": 2400.0}}"#)
                .unwrap();
        let prices = config.base_prices();

        assert_eq!(prices["EURUSD"], 1.1);
        assert_eq!(prices["XAUUSD"], 2400.0);
        assert_eq!(prices["USDJPY"], 149.50);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = std::env::temp_dir().join("dashboard_core_missing_config");
        let _ = std::fs::remove_dir_all(&dir);
        let config = DashboardConfig::load(&dir).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("dashboard_core_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), r#"{"alert_probability": 0.9}"#).unwrap();

        let config = DashboardConfig::load(&dir).unwrap();
        assert_eq!(config.alert_probability(), 0.9);

        std::fs::write(dir.join(CONFIG_FILE), "not json").unwrap();
        assert!(DashboardConfig::load(&dir).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
