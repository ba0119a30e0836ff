//! Application configuration
//!
//! JSON file read through `BufReader`, every field optional. Command-line
//! flags override whatever the file sets.
//!
//! ```json
//! {
//!   "width": 120,
//!   "height": 40,
//!   "start_scene": 2,
//!   "march": { "max_steps": 64 },
//!   "chaos": "sierpinski"
//! }
//! ```
//!
//! Author: Moroya Sakamoto

use crate::chaos::ChaosPreset;
use crate::raycast::MarchConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

/// Configuration I/O errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or wrong field types
    #[error("Parse error: {0}")]
    Parse(String),

    /// Values that cannot produce a frame
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Everything the frame driver needs to start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Canvas columns
    pub width: usize,
    /// Canvas rows
    pub height: usize,
    /// Fixed camera position
    pub camera: [f32; 3],
    /// Seconds between FPS reports
    pub profiler_interval: f32,
    /// Index into the preset list
    pub start_scene: usize,
    /// Ray marcher thresholds
    pub march: MarchConfig,
    /// Optional chaos-game overlay
    pub chaos: Option<ChaosPreset>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            width: 190,
            height: 50,
            camera: [0.0, 0.0, -7.0],
            profiler_interval: 0.5,
            start_scene: 0,
            march: MarchConfig::default(),
            chaos: None,
        }
    }
}

impl AppConfig {
    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let config: AppConfig =
            serde_json::from_reader(reader).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        log::info!("config: loaded {}", path.display());
        Ok(config)
    }

    /// Parse a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject sizes and thresholds that cannot render
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas size {}x{}",
                self.width, self.height
            )));
        }
        if self.march.max_distance.is_nan() || self.march.max_distance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_distance {}",
                self.march.max_distance
            )));
        }
        if self.profiler_interval.is_nan() || self.profiler_interval <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "profiler_interval {}",
                self.profiler_interval
            )));
        }
        Ok(())
    }

    /// Camera position as a vector
    pub fn camera_position(&self) -> glam::Vec3 {
        glam::Vec3::from_array(self.camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("ascii_raymarch_config_{}", name));
        path
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.width, 190);
        assert_eq!(config.height, 50);
        assert_eq!(config.camera_position(), glam::Vec3::new(0.0, 0.0, -7.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = AppConfig::from_json_str(
            r#"{ "width": 80, "march": { "max_steps": 32 }, "chaos": "pentagon" }"#,
        )
        .unwrap();
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 50);
        assert_eq!(config.march.max_steps, 32);
        assert_eq!(config.march.hit_threshold, 0.1);
        assert_eq!(config.chaos, Some(ChaosPreset::Pentagon));
    }

    #[test]
    fn test_invalid_size() {
        let err = AppConfig::from_json_str(r#"{ "height": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = AppConfig::from_json_str("{ width: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_load() {
        let path = temp_path("save_load.json");
        let config = AppConfig {
            start_scene: 2,
            chaos: Some(ChaosPreset::Square),
            ..Default::default()
        };
        config.save(&path).unwrap();
        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load(temp_path("does_not_exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
