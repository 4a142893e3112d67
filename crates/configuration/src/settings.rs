use crate::error::ConfigError;
use serde::Deserialize;

/// The number of leaders reported when nothing else is configured.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 3;

/// The root configuration structure for the contest tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContestConfig {
    #[serde(default)] // Use default values if the [analysis] section is missing
    pub analysis: AnalysisConfig,
}

/// Settings that shape what the analyzer reports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many participants the leaderboard keeps.
    pub leaderboard_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
        }
    }
}

impl ContestConfig {
    /// Rejects settings the analyzer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.leaderboard_size == 0 {
            return Err(ConfigError::ValidationError(
                "analysis.leaderboard_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ContestConfig::default();
        assert_eq!(config.analysis.leaderboard_size, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_leaderboard_is_rejected() {
        let config = ContestConfig {
            analysis: AnalysisConfig { leaderboard_size: 0 },
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("leaderboard_size"));
    }
}
