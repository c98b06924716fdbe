//! Pulse calibration configuration.
//!
//! Calibrations are loaded from a YAML file with a `calibrations` list. The
//! file is picked with this precedence (highest first):
//! 1. `--calibration <path>`
//! 2. `QUTRIT_CALIBRATION` environment variable
//! 3. The built-in file shipped with the binary
//!
//! The values are hardware data only. Gate matrices never depend on them.

use qutrit_gates::Subspace;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Calibration file compiled into the binary.
pub const BUILTIN_CALIBRATIONS: &str = include_str!("../calibrations/default.yaml");

/// Environment variable naming a calibration file.
pub const CALIBRATION_ENV: &str = "QUTRIT_CALIBRATION";

/// A calibrated Gaussian drive pulse on one transition of one qubit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseCalibration {
    /// Backend name, e.g. `ibmq_manila`.
    pub backend: String,

    /// Physical qubit index on the backend.
    pub qubit: u32,

    /// Transition the pulse drives.
    pub transition: Subspace,

    /// Pulse name, e.g. `x_pi`.
    #[serde(default = "default_pulse")]
    pub pulse: String,

    /// Distinguishes several calibrations of the same pulse (`slow`, `fast`).
    #[serde(default = "default_variant")]
    pub variant: String,

    /// Pulse length in samples.
    pub duration: u32,

    /// Gaussian width in samples.
    pub sigma: f64,

    /// Drive amplitude, at most 1 in magnitude.
    pub amplitude: f64,

    /// Drive frequency in Hz, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<f64>,

    /// Date the values were last measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

fn default_pulse() -> String {
    "x_pi".to_string()
}

fn default_variant() -> String {
    "default".to_string()
}

impl PulseCalibration {
    fn validate(&self) -> Result<(), ConfigError> {
        let id = self.key();
        if self.backend.is_empty() {
            return Err(ConfigError::ValidationError(
                "backend must not be empty".to_string(),
            ));
        }
        if self.duration == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{id}: duration must be greater than 0"
            )));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "{id}: sigma must be positive, got {}",
                self.sigma
            )));
        }
        if !(self.amplitude.is_finite() && self.amplitude.abs() <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "{id}: amplitude must lie in [-1, 1], got {}",
                self.amplitude
            )));
        }
        if let Some(freq) = self.frequency_hz {
            if !(freq.is_finite() && freq > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{id}: frequency_hz must be positive, got {freq}"
                )));
            }
        }
        Ok(())
    }

    /// Identifier used for duplicate detection and messages.
    pub fn key(&self) -> String {
        format!(
            "{}/q{}/{}/{}/{}",
            self.backend, self.qubit, self.transition, self.pulse, self.variant
        )
    }
}

/// A set of pulse calibrations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalibrationFile {
    /// All calibration records.
    #[serde(default)]
    pub calibrations: Vec<PulseCalibration>,
}

impl CalibrationFile {
    /// Load calibrations from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate calibrations from YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: CalibrationFile = serde_yaml_ng::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        file.validate()?;
        Ok(file)
    }

    /// The calibrations shipped with the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml_str(BUILTIN_CALIBRATIONS)
    }

    /// Load from `path` if given, otherwise fall back to the built-in file.
    ///
    /// Also returns a description of where the data came from.
    pub fn load(path: Option<&Path>) -> Result<(Self, String), ConfigError> {
        match path {
            Some(p) => {
                debug!(path = %p.display(), "loading calibration file");
                Ok((Self::from_file(p)?, p.display().to_string()))
            }
            None => {
                debug!("using built-in calibrations");
                Ok((Self::builtin()?, "built-in".to_string()))
            }
        }
    }

    /// Validate every record and reject duplicates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for cal in &self.calibrations {
            cal.validate()?;
            let key = cal.key();
            if !seen.insert(key.clone()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate calibration {key}"
                )));
            }
        }
        Ok(())
    }

    /// Records matching the optional backend and transition filters.
    pub fn select(
        &self,
        backend: Option<&str>,
        transition: Option<Subspace>,
    ) -> Vec<&PulseCalibration> {
        self.calibrations
            .iter()
            .filter(|c| backend.is_none_or(|b| c.backend.eq_ignore_ascii_case(b)))
            .filter(|c| transition.is_none_or(|t| c.transition == t))
            .collect()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
calibrations:
  - backend: test_device
    qubit: 3
    transition: "12"
    duration: 160
    sigma: 40
    amplitude: 0.2
"#;

    #[test]
    fn test_builtin_calibrations_load() {
        let file = CalibrationFile::builtin().unwrap();
        assert_eq!(file.calibrations.len(), 4);
        let manila = file.select(Some("ibmq_manila"), Some(Subspace::S01));
        assert_eq!(manila.len(), 2);
        assert!(manila.iter().any(|c| c.variant == "fast" && c.duration == 160));
    }

    #[test]
    fn test_defaults_applied() {
        let file = CalibrationFile::from_yaml_str(MINIMAL).unwrap();
        let cal = &file.calibrations[0];
        assert_eq!(cal.pulse, "x_pi");
        assert_eq!(cal.variant, "default");
        assert_eq!(cal.transition, Subspace::S12);
        assert!(cal.frequency_hz.is_none());
        assert!((cal.sigma - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_select_filters() {
        let file = CalibrationFile::builtin().unwrap();
        assert_eq!(file.select(None, None).len(), 4);
        assert_eq!(file.select(None, Some(Subspace::S12)).len(), 1);
        assert_eq!(file.select(Some("IBM_OSLO"), None).len(), 1);
        assert!(file.select(Some("ibm_nowhere"), None).is_empty());
    }

    #[test]
    fn test_rejects_amplitude_above_one() {
        let yaml = MINIMAL.replace("amplitude: 0.2", "amplitude: 1.5");
        let err = CalibrationFile::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("amplitude"));
    }

    #[test]
    fn test_rejects_zero_duration() {
        let yaml = MINIMAL.replace("duration: 160", "duration: 0");
        assert!(matches!(
            CalibrationFile::from_yaml_str(&yaml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_transition() {
        let yaml = MINIMAL.replace("\"12\"", "\"02\"");
        assert!(matches!(
            CalibrationFile::from_yaml_str(&yaml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let body = MINIMAL.trim_start_matches("\ncalibrations:\n");
        let yaml = format!("calibrations:\n{body}{body}");
        let err = CalibrationFile::from_yaml_str(&yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CalibrationFile::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
