use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{AnalysisConfig, ContestConfig, DEFAULT_LEADERBOARD_SIZE};

/// Environment variables with this prefix override file values,
/// e.g. `CONTEST_ANALYSIS__LEADERBOARD_SIZE=5`.
pub const ENV_PREFIX: &str = "CONTEST";

/// Loads the contest configuration from a TOML file, with environment overrides.
///
/// The file is read, overlaid with `CONTEST_*` variables, deserialized into
/// our strongly-typed `ContestConfig` struct and validated.
pub fn load_config(path: impl AsRef<Path>) -> Result<ContestConfig, ConfigError> {
    let path = path.as_ref();
    let builder = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = builder.try_deserialize::<ContestConfig>()?;
    config.validate()?;

    tracing::info!(
        path = %path.display(),
        leaderboard_size = config.analysis.leaderboard_size,
        "Loaded contest configuration."
    );
    Ok(config)
}

/// Parses a configuration from an in-memory TOML document. No environment overlay.
pub fn load_config_from_str(toml: &str) -> Result<ContestConfig, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    let config = builder.try_deserialize::<ContestConfig>()?;
    config.validate()?;
    Ok(config)
}
