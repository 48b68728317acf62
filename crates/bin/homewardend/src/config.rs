//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `homewarden.toml` in the working directory (or the path in
//! `HOMEWARDEN_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::collections::HashSet;
use std::time::Duration;

use homewarden_app::history::DEFAULT_CAPACITY;
use homewarden_domain::device::CameraSpec;
use homewarden_domain::error::ValidationError;
use homewarden_domain::registry::default_cameras;
use homewarden_domain::thresholds::Thresholds;
use serde::Deserialize;

const DEFAULT_PATH: &str = "homewarden.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Polling loop settings.
    pub controller: ControllerConfig,
    /// Rule thresholds.
    pub thresholds: Thresholds,
    /// Simulated sensor settings.
    pub simulation: SimulationConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Cameras of the zone, in narration order.
    pub cameras: Vec<CameraSpec>,
}

/// Polling loop configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Seconds between two sensor readings.
    pub poll_interval_secs: u64,
    /// Stop after this many ticks; run until interrupted when unset.
    pub max_ticks: Option<u64>,
    /// Number of readings kept for the trend summary.
    pub history_size: usize,
}

/// Simulated sensor configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for reproducible readings.
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("HOMEWARDEN_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOMEWARDEN_POLL_INTERVAL_SECS")
            && let Ok(secs) = val.parse()
        {
            self.controller.poll_interval_secs = secs;
        }
        if let Ok(val) = std::env::var("HOMEWARDEN_MAX_TICKS")
            && let Ok(max) = val.parse()
        {
            self.controller.max_ticks = Some(max);
        }
        if let Ok(val) = std::env::var("HOMEWARDEN_SEED")
            && let Ok(seed) = val.parse()
        {
            self.simulation.seed = Some(seed);
        }
        if let Ok(val) = std::env::var("HOMEWARDEN_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.controller.poll_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        self.thresholds.validate()?;
        let mut seen = HashSet::new();
        for camera in &self.cameras {
            if !seen.insert(&camera.id) {
                return Err(ValidationError::DuplicateCamera(camera.id.to_string()).into());
            }
        }
        Ok(())
    }

    /// Time between two polling ticks.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.controller.poll_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            controller: ControllerConfig::default(),
            thresholds: Thresholds::default(),
            simulation: SimulationConfig::default(),
            logging: LoggingConfig::default(),
            cameras: default_cameras(),
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 7,
            max_ticks: None,
            history_size: DEFAULT_CAPACITY,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homewardend=info,homewarden_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A domain value in the file is invalid.
    #[error("invalid configuration")]
    Invalid(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use homewarden_domain::device::CameraRole;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.controller.poll_interval_secs, 7);
        assert_eq!(config.controller.max_ticks, None);
        assert_eq!(config.controller.history_size, 20);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.cameras.len(), 4);
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.controller.poll_interval_secs, 7);
        assert_eq!(config.cameras, default_cameras());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [controller]
            poll_interval_secs = 2
            max_ticks = 10
            history_size = 50

            [thresholds]
            ideal_temperature = 21.5
            humidity_high = 60.0
            comfort_band = 0.5

            [simulation]
            seed = 42

            [logging]
            filter = 'debug'

            [[cameras]]
            id = 'garage'
            role = 'perimeter'

            [[cameras]]
            id = 'attic'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.controller.poll_interval_secs, 2);
        assert_eq!(config.controller.max_ticks, Some(10));
        assert_eq!(config.controller.history_size, 50);
        assert!((config.thresholds.ideal_temperature - 21.5).abs() < f64::EPSILON);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.cameras.len(), 2);
        assert_eq!(config.cameras[0].id.as_str(), "garage");
        assert_eq!(config.cameras[0].role, CameraRole::Perimeter);
        assert_eq!(config.cameras[1].role, CameraRole::Interior);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [thresholds]
            humidity_high = 65.0
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!((config.thresholds.humidity_high - 65.0).abs() < f64::EPSILON);
        assert!((config.thresholds.ideal_temperature - 24.0).abs() < f64::EPSILON);
        assert_eq!(config.controller.poll_interval_secs, 7);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.controller.poll_interval_secs, 7);
    }

    #[test]
    fn should_reject_zero_poll_interval() {
        let mut config = Config::default();
        config.controller.poll_interval_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_negative_comfort_band() {
        let mut config = Config::default();
        config.thresholds.comfort_band = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(ValidationError::InvalidComfortBand))
        ));
    }

    #[test]
    fn should_reject_non_finite_thresholds_from_toml() {
        let toml = "
            [thresholds]
            ideal_temperature = nan
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.thresholds.ideal_temperature.is_nan());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(ValidationError::NonFiniteThreshold {
                field: "ideal_temperature"
            }))
        ));
    }

    #[test]
    fn should_reject_duplicate_cameras() {
        let toml = "
            [[cameras]]
            id = 'door'

            [[cameras]]
            id = 'DOOR'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(ValidationError::DuplicateCamera(_)))
        ));
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_convert_poll_interval_to_duration() {
        let config = Config::default();
        assert_eq!(config.poll_interval(), Duration::from_secs(7));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_report_parse_error_for_empty_camera_id() {
        let result: Result<Config, _> = toml::from_str("[[cameras]]\nid = ''");
        assert!(result.is_err());
    }
}
