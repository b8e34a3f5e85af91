//! Qualifier configuration, built in code or loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::qualifier::error::ConfigError;

/// Number of classification calls a vacated identity keeps being reported as
/// `LEFT` unless configured otherwise.
pub const DEFAULT_LEFT_TRACKING_ITERATIONS: u32 = 260;

/// When the recent-leaver countdown advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaverCountdown {
    /// Once per classified frame, after every identity has been labelled.
    #[default]
    PerFrame,
    /// Once after each labelled identity. A frame with N identities advances
    /// the countdown N times, and a leaver that expires mid-frame is no longer
    /// flagged for the identities that follow it.
    PerObservation,
}

/// Configuration for the StateQualifier.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifierConfig {
    pub monitored_region: Rect,
    pub left_tracking_iterations: u32,
    pub countdown: LeaverCountdown,
    /// Whether a frame without detections still advances the countdown.
    pub decay_on_empty_frames: bool,
}

#[derive(Debug, Deserialize, Default)]
struct QualifierConfigFile {
    monitored_region: Option<Rect>,
    left_tracking_iterations: Option<i64>,
    countdown: Option<LeaverCountdown>,
    decay_on_empty_frames: Option<bool>,
}

impl QualifierConfig {
    pub fn new(monitored_region: Rect) -> Self {
        Self {
            monitored_region,
            left_tracking_iterations: DEFAULT_LEFT_TRACKING_ITERATIONS,
            countdown: LeaverCountdown::default(),
            decay_on_empty_frames: false,
        }
    }

    pub fn with_left_tracking_iterations(mut self, iterations: u32) -> Self {
        self.left_tracking_iterations = iterations;
        self
    }

    pub fn with_countdown(mut self, countdown: LeaverCountdown) -> Self {
        self.countdown = countdown;
        self
    }

    pub fn with_decay_on_empty_frames(mut self, decay: bool) -> Self {
        self.decay_on_empty_frames = decay;
        self
    }

    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file: QualifierConfigFile = toml::from_str(raw)?;
        Self::from_file(file)
    }

    fn from_file(file: QualifierConfigFile) -> Result<Self, ConfigError> {
        let monitored_region = file.monitored_region.ok_or(ConfigError::MissingRegion)?;
        let left_tracking_iterations = match file.left_tracking_iterations {
            Some(n) if n < 0 => return Err(ConfigError::NegativeLeftTrackingIterations(n)),
            Some(n) => {
                u32::try_from(n).map_err(|_| ConfigError::LeftTrackingIterationsOutOfRange(n))?
            }
            None => DEFAULT_LEFT_TRACKING_ITERATIONS,
        };

        let cfg = Self {
            monitored_region,
            left_tracking_iterations,
            countdown: file.countdown.unwrap_or_default(),
            decay_on_empty_frames: file.decay_on_empty_frames.unwrap_or(false),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.monitored_region.is_well_formed() {
            return Err(ConfigError::MalformedRegion(self.monitored_region));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGION: &str = r#"
        [monitored_region]
        x1 = 100.0
        y1 = 200.0
        x2 = 260.0
        y2 = 420.0
    "#;

    #[test]
    fn test_defaults() {
        let cfg = QualifierConfig::from_toml_str(REGION).unwrap();
        assert_eq!(cfg.monitored_region, Rect::new(100.0, 200.0, 260.0, 420.0));
        assert_eq!(cfg.left_tracking_iterations, 260);
        assert_eq!(cfg.countdown, LeaverCountdown::PerFrame);
        assert!(!cfg.decay_on_empty_frames);
        assert_eq!(cfg, QualifierConfig::new(cfg.monitored_region));
    }

    #[test]
    fn test_all_fields() {
        let raw = format!(
            "left_tracking_iterations = 30\ncountdown = \"per_observation\"\ndecay_on_empty_frames = true\n{REGION}"
        );
        let cfg = QualifierConfig::from_toml_str(&raw).unwrap();
        assert_eq!(cfg.left_tracking_iterations, 30);
        assert_eq!(cfg.countdown, LeaverCountdown::PerObservation);
        assert!(cfg.decay_on_empty_frames);
    }

    #[test]
    fn test_zero_iterations_allowed() {
        let raw = format!("left_tracking_iterations = 0\n{REGION}");
        let cfg = QualifierConfig::from_toml_str(&raw).unwrap();
        assert_eq!(cfg.left_tracking_iterations, 0);
    }

    #[test]
    fn test_negative_iterations_rejected() {
        let raw = format!("left_tracking_iterations = -1\n{REGION}");
        let err = QualifierConfig::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeLeftTrackingIterations(-1)));
    }

    #[test]
    fn test_oversized_iterations_rejected() {
        let raw = format!("left_tracking_iterations = 5000000000\n{REGION}");
        let err = QualifierConfig::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::LeftTrackingIterationsOutOfRange(_)));
    }

    #[test]
    fn test_missing_region() {
        let err = QualifierConfig::from_toml_str("left_tracking_iterations = 5").unwrap_err();
        assert!(matches!(err, ConfigError::MissingRegion));
    }

    #[test]
    fn test_inverted_region() {
        let raw = "[monitored_region]\nx1 = 10.0\ny1 = 0.0\nx2 = 0.0\ny2 = 10.0\n";
        let err = QualifierConfig::from_toml_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedRegion(_)));
    }

    #[test]
    fn test_unknown_countdown() {
        let raw = format!("countdown = \"hourly\"\n{REGION}");
        let err = QualifierConfig::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
