use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

use crate::models::ScoringParams;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub io: IoSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IoSettings {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for IoSettings {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

fn default_input() -> PathBuf { PathBuf::from("reviews.csv") }
fn default_output() -> PathBuf { PathBuf::from("sitters.csv") }

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScoringSettings {
    #[serde(default = "default_profile_scale")]
    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    pub profile_scale: f64,
    #[serde(default = "default_ratings_threshold")]
    #[validate(range(min = 1))]
    pub ratings_threshold: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            profile_scale: default_profile_scale(),
            ratings_threshold: default_ratings_threshold(),
        }
    }
}

impl From<&ScoringSettings> for ScoringParams {
    fn from(settings: &ScoringSettings) -> Self {
        Self {
            profile_scale: settings.profile_scale,
            ratings_threshold: settings.ratings_threshold,
        }
    }
}

// `range` lets NaN through, every comparison with it is false
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

fn default_profile_scale() -> f64 { ScoringParams::default().profile_scale }
fn default_ratings_threshold() -> usize { ScoringParams::default().ratings_threshold }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SITTER_RANK)
    /// 5. `extra`, if given
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(extra, environment())
    }

    fn load_with(extra: Option<&Path>, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SITTER_RANK__IO__INPUT -> io.input
            .add_source(environment);

        if let Some(path) = extra {
            builder = builder.add_source(File::from(path));
        }

        builder.build()?.try_deserialize()
    }

    /// Load configuration from a custom path, ignoring config/
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn scoring_params(&self) -> ScoringParams {
        ScoringParams::from(&self.scoring)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SITTER_RANK")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring() {
        let scoring = ScoringSettings::default();
        assert_eq!(scoring.profile_scale, 5.0);
        assert_eq!(scoring.ratings_threshold, 10);
        assert!(scoring.validate().is_ok());
    }

    #[test]
    fn test_default_io() {
        let io = IoSettings::default();
        assert_eq!(io.input, PathBuf::from("reviews.csv"));
        assert_eq!(io.output, PathBuf::from("sitters.csv"));
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }

    #[test]
    fn test_invalid_scoring_rejected() {
        let zero_threshold = ScoringSettings { ratings_threshold: 0, ..ScoringSettings::default() };
        assert!(zero_threshold.validate().is_err());

        let negative_scale = ScoringSettings { profile_scale: -1.0, ..ScoringSettings::default() };
        assert!(negative_scale.validate().is_err());

        for scale in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let settings = ScoringSettings { profile_scale: scale, ..ScoringSettings::default() };
            assert!(settings.validate().is_err(), "accepted profile_scale {}", scale);
        }
    }

    #[test]
    fn test_environment_overrides_files() {
        let variables = std::collections::HashMap::from([
            ("SITTER_RANK__IO__INPUT".to_string(), "env.csv".to_string()),
            ("SITTER_RANK__SCORING__RATINGS_THRESHOLD".to_string(), "4".to_string()),
        ]);

        let settings = Settings::load_with(None, environment().source(Some(variables))).unwrap();

        assert_eq!(settings.io.input, PathBuf::from("env.csv"));
        assert_eq!(settings.io.output, PathBuf::from("sitters.csv"));
        assert_eq!(settings.scoring.ratings_threshold, 4);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("sitter-rank-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[io]\ninput = \"in.csv\"\n\n[scoring]\nratings_threshold = 5\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.io.input, PathBuf::from("in.csv"));
        assert_eq!(settings.io.output, PathBuf::from("sitters.csv"));
        assert_eq!(settings.scoring_params().ratings_threshold, 5);
        assert_eq!(settings.scoring_params().profile_scale, 5.0);
    }
}
