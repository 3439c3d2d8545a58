//! Simulation configuration.
//!
//! Every tuning constant of the pipeline lives in [`SimConfig`]. Configs can
//! be built in code or loaded from JSON; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// How the vertical axis of gravity-affected entities is integrated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalIntegration {
    /// Gravity commits the vertical move; the velocity pass only moves the
    /// vertical axis of entities gravity did not handle this frame.
    #[default]
    GravityOwnsVertical,
    /// The velocity pass adds vertical velocity again after gravity already
    /// did, so falling entities move twice per frame.
    Legacy,
}

/// Tuning constants for the frame pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Steering speed, scaled by the frame delta.
    pub input_speed: f32,
    /// Fraction of horizontal velocity removed every frame, in `[0, 1]`.
    pub input_smoothing: f32,
    /// Vertical acceleration added once per tick (not scaled by delta).
    pub gravity: f32,
    /// Vertical integration mode.
    pub vertical_integration: VerticalIntegration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            input_speed: 10.0,
            input_smoothing: 0.2,
            gravity: 0.5,
            vertical_integration: VerticalIntegration::GravityOwnsVertical,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON and
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// the errors of [`SimConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input_speed.is_finite() {
            return Err(ConfigError::Invalid {
                field: "input_speed",
                reason: "must be finite".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.input_smoothing) {
            return Err(ConfigError::Invalid {
                field: "input_smoothing",
                reason: format!("{} is outside [0, 1]", self.input_smoothing),
            });
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::Invalid {
                field: "gravity",
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Override the vertical integration mode.
    #[must_use]
    pub fn with_vertical_integration(mut self, mode: VerticalIntegration) -> Self {
        self.vertical_integration = mode;
        self
    }

    /// Override the per-tick gravity.
    #[must_use]
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }
}

/// Errors that can occur while loading a [`SimConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid JSON for [`SimConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds an unusable value.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.input_speed, 10.0);
        assert_eq!(config.input_smoothing, 0.2);
        assert_eq!(config.gravity, 0.5);
        assert_eq!(
            config.vertical_integration,
            VerticalIntegration::GravityOwnsVertical
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimConfig::from_json_str(r#"{ "gravity": 1.5 }"#).unwrap();
        assert_eq!(config.gravity, 1.5);
        assert_eq!(config.input_speed, 10.0);
    }

    #[test]
    fn test_legacy_mode_from_json() {
        let config = SimConfig::from_json_str(r#"{ "vertical_integration": "legacy" }"#).unwrap();
        assert_eq!(config.vertical_integration, VerticalIntegration::Legacy);
    }

    #[test]
    fn test_rejects_out_of_range_smoothing() {
        let err = SimConfig::from_json_str(r#"{ "input_smoothing": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "input_smoothing",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SimConfig::from_json_str("{ gravity: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SimConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_builders() {
        let config = SimConfig::default()
            .with_gravity(2.0)
            .with_vertical_integration(VerticalIntegration::Legacy);
        assert_eq!(config.gravity, 2.0);
        assert_eq!(config.vertical_integration, VerticalIntegration::Legacy);
    }
}
