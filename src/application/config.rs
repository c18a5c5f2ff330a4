//! Runtime settings, loaded from TOML and overridable from the command line.

use std::f32::consts::FRAC_PI_4;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::simulation::{MAX_UPDATE_INTERVAL_MS, MIN_UPDATE_INTERVAL_MS};
use crate::domain::StepStrategy;
use crate::error::ConfigError;
use crate::math::perspective;

/// Top-level settings. Missing keys fall back to [`Config::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Edge length of the voxel cube
    pub edge: usize,
    /// Chance each cell starts alive
    pub live_probability: f64,
    /// Fixed RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Rendered cube edge in world units
    pub cell_size: f32,
    /// Gap between neighboring cubes in world units
    pub spacing: f32,
    /// Minimum time between generations while running, within
    /// [`MIN_UPDATE_INTERVAL_MS`, `MAX_UPDATE_INTERVAL_MS`]
    pub update_interval_ms: f32,
    pub step_strategy: StepStrategy,
    pub camera: CameraConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Initial orbit distance
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Radians per pixel of mouse drag
    pub rotate_sensitivity: f32,
    /// Zoom units per wheel unit
    pub zoom_sensitivity: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edge: 10,
            live_probability: 0.5,
            seed: None,
            cell_size: 2.0,
            spacing: 0.3,
            update_interval_ms: 1000.0,
            step_strategy: StepStrategy::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y: FRAC_PI_4,
            near: 0.1,
            far: 100.0,
            zoom: 25.0,
            min_zoom: 5.0,
            max_zoom: 30.0,
            rotate_sensitivity: 0.01,
            zoom_sensitivity: 0.01,
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject settings that would produce an empty grid or a degenerate camera
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.edge == 0 || self.edge.checked_pow(3).is_none() {
            return Err(ConfigError::InvalidEdge(self.edge));
        }
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(ConfigError::InvalidProbability(self.live_probability));
        }
        let interval_range = MIN_UPDATE_INTERVAL_MS..=MAX_UPDATE_INTERVAL_MS;
        if !interval_range.contains(&self.update_interval_ms) {
            return Err(ConfigError::InvalidInterval(self.update_interval_ms));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0)
            || !(self.spacing.is_finite() && self.spacing >= 0.0)
        {
            return Err(ConfigError::InvalidCellLayout {
                cell_size: self.cell_size,
                spacing: self.spacing,
            });
        }
        self.camera.validate()
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_zoom, self.max_zoom);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) || !self.zoom.is_finite()
        {
            return Err(ConfigError::InvalidZoomRange { min, max });
        }
        // aspect is only known per frame; any positive value checks the rest
        perspective(self.fov_y, 1.0, self.near, self.far)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_viewer() {
        let config = Config::default();
        assert_eq!(config.edge, 10);
        assert_eq!(config.live_probability, 0.5);
        assert_eq!(config.update_interval_ms, 1000.0);
        assert_eq!(config.camera.zoom, 25.0);
        assert_eq!((config.camera.min_zoom, config.camera.max_zoom), (5.0, 30.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            edge = 16
            seed = 7
            step_strategy = "parallel"

            [camera]
            zoom = 12.0
            "#,
        )
        .unwrap();
        assert_eq!(config.edge, 16);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.step_strategy, StepStrategy::Parallel);
        assert_eq!(config.camera.zoom, 12.0);
        assert_eq!(config.camera.far, 100.0);
        assert_eq!(config.spacing, 0.3);
    }

    #[test]
    fn test_invalid_values_fail_fast() {
        assert!(matches!(
            Config::from_toml_str("edge = 0"),
            Err(ConfigError::InvalidEdge(0))
        ));
        assert!(matches!(
            Config::from_toml_str("live_probability = 1.5"),
            Err(ConfigError::InvalidProbability(_))
        ));
        assert!(matches!(
            Config::from_toml_str("update_interval_ms = 0.0"),
            Err(ConfigError::InvalidInterval(_))
        ));
        assert!(matches!(
            Config::from_toml_str("cell_size = -1.0"),
            Err(ConfigError::InvalidCellLayout { .. })
        ));
        assert!(matches!(
            Config::from_toml_str("[camera]\nmin_zoom = 40.0"),
            Err(ConfigError::InvalidZoomRange { .. })
        ));
        assert!(matches!(
            Config::from_toml_str("[camera]\nnear = 0.0"),
            Err(ConfigError::InvalidProjection { .. })
        ));
        assert!(matches!(
            Config::from_toml_str("[camera]\nfov_y = 3.5"),
            Err(ConfigError::InvalidProjection { .. })
        ));
    }

    #[test]
    fn test_interval_outside_adjustable_range_rejected() {
        for ms in [1.0, MIN_UPDATE_INTERVAL_MS - 0.5, MAX_UPDATE_INTERVAL_MS + 1.0, 10_000.0] {
            let config = Config {
                update_interval_ms: ms,
                ..Config::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidInterval(v)) if v == ms),
                "{ms} ms accepted"
            );
        }
        for ms in [MIN_UPDATE_INTERVAL_MS, MAX_UPDATE_INTERVAL_MS] {
            let config = Config {
                update_interval_ms: ms,
                ..Config::default()
            };
            assert!(config.validate().is_ok(), "{ms} ms rejected");
        }
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(
            Config::from_toml_str("edge = \"ten\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_serialized_defaults_round_trip() {
        let text = toml::to_string(&Config::default()).unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), Config::default());
    }
}
