//! Error types for configuration and camera geometry.
//!
//! Stepping and neighbor counting are total over any valid grid and have no
//! error type of their own.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected settings. Raised at construction time, never mid-simulation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid edge must be at least 1, got {0}")]
    InvalidEdge(usize),

    #[error("live probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("invalid projection: {reason}")]
    InvalidProjection { reason: &'static str },

    #[error("zoom range [{min}, {max}] is empty or not positive")]
    InvalidZoomRange { min: f32, max: f32 },

    #[error("update interval must be within [16, 5000] ms, got {0} ms")]
    InvalidInterval(f32),

    #[error("cell size {cell_size} must be positive and spacing {spacing} non-negative")]
    InvalidCellLayout { cell_size: f32, spacing: f32 },

    #[error("failed to read config {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}

/// Camera placement that has no well-defined view basis.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("eye coincides with the look-at target")]
    CoincidentEyeAndTarget,

    #[error("up vector is parallel to the view direction")]
    UpParallelToView,

    #[error("camera vectors contain non-finite components")]
    NonFinite,
}

/// Failure to build a frame's view-projection matrix.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error(transparent)]
    Projection(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
