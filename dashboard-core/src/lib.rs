//! # Dashboard Core Library
//!
//! The in-process state container behind the FX dashboard views, plus the
//! mock feeds and timers that keep it moving.
//!
//! ## Modules
//! - `store`: `DashboardStore` (notification queue, live quotes, watchlist, UI preferences).
//! - `simulation`: Random quote, alert and position generators.
//! - `driver`: Cancelable periodic tasks that push generated data into a shared store.
//! - `config`: The optional `dashboard.json` file and its defaults.
//! - `args`: Command-line arguments shared by the binaries.

pub mod args;
pub mod config;
pub mod driver;
pub mod simulation;
pub mod store;

pub use store::{create_store, DashboardStore, SharedStore};

/// Initializes `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
