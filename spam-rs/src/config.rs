//! Configuration for spam-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bayes::model::DEFAULT_SAMPLES;
use crate::error::{Result, SpamError};

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Model tunables
    #[serde(default)]
    pub model: ModelConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Model tunables, fixed at construction time
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Margin kept between returned probabilities and 0 / 1
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Multiplier applied to spam-side word counts
    #[serde(default = "default_spam_bonus")]
    pub spam_bonus: u32,
    /// Multiplier applied to ham-side word counts
    #[serde(default = "default_ham_bonus")]
    pub ham_bonus: u32,
    /// Number of most interesting words combined per message
    #[serde(default = "default_n_samples")]
    pub n_samples: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Max level (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,
    /// Output format (pretty, compact, json)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_epsilon() -> f64 {
    1e-16
}

fn default_spam_bonus() -> u32 {
    1
}

fn default_ham_bonus() -> u32 {
    2
}

fn default_n_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const FORMATS: &[&str] = &["pretty", "compact", "json"];

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
            spam_bonus: default_spam_bonus(),
            ham_bonus: default_ham_bonus(),
            n_samples: default_n_samples(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl ModelConfig {
    /// Validate tunables
    pub fn validate(&self) -> Result<()> {
        // NaN fails both comparisons
        if !(self.epsilon > 0.0 && self.epsilon < 0.5) {
            return Err(SpamError::Config(format!(
                "epsilon must be in (0, 0.5), got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SpamError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| SpamError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.model.validate()?;

        let level = self.logging.level.to_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(SpamError::Config(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        if !FORMATS.contains(&self.logging.format.as_str()) {
            return Err(SpamError::Config(format!(
                "Unknown log format '{}'",
                self.logging.format
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.epsilon, 1e-16);
        assert_eq!(config.model.spam_bonus, 1);
        assert_eq!(config.model.ham_bonus, 2);
        assert_eq!(config.model.n_samples, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[model]
epsilon = 0.01
ham_bonus = 3

[logging]
level = "debug"
format = "json"
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.model.epsilon, 0.01);
        assert_eq!(config.model.spam_bonus, 1);
        assert_eq!(config.model.ham_bonus, 3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.model, ModelConfig::default());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_invalid_epsilon() {
        for bad in ["0.0", "0.5", "-1.0", "nan"] {
            let toml = format!("[model]\nepsilon = {}\n", bad);
            assert!(
                matches!(Config::parse(&toml), Err(SpamError::Config(_))),
                "epsilon {} accepted",
                bad
            );
        }
    }

    #[test]
    fn test_invalid_logging() {
        let toml = "[logging]\nformat = \"xml\"\n";
        assert!(matches!(Config::parse(toml), Err(SpamError::Config(_))));

        let toml = "[logging]\nlevel = \"loud\"\n";
        assert!(matches!(Config::parse(toml), Err(SpamError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spam.toml");
        std::fs::write(&path, "[model]\nspam_bonus = 2\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.model.spam_bonus, 2);

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Config::from_file(&missing),
            Err(SpamError::Config(_))
        ));
    }
}
