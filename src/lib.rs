//! # Cat Contest
//!
//! Statistics over a roster of contest entrants: best and worst totals,
//! breed averages, the winner, the leaders, and completeness checks.
//!
//! This crate ties the workspace together:
//!
//! - `core-types` (Layer 0): `ContestResult`, `Breed`, `Cat` and the `Contestant` trait.
//! - `configuration`: loading and validating `contest.toml`.
//! - `analyzer` (Layer 1): the stateless `ContestAnalyzer` and its `ContestReport`.

pub use analyzer::{AnalyzerError, ContestAnalyzer, ContestReport, NO_RESULT};
pub use configuration::{
    AnalysisConfig, ConfigError, ContestConfig, load_config, load_config_from_str,
};
pub use core_types::{Breed, Cat, ContestResult, Contestant, CoreError};

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Fails if another global subscriber has already been set.
pub fn init_tracing() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
