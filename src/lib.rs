// Domain layer - the voxel automaton
pub mod domain;

// Camera and projection math
pub mod math;

// Application layer - simulation lifecycle, camera state, settings
pub mod application;

pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, StepStrategy, VoxelGrid};
pub use application::{
    CameraConfig, CameraState, CellLayout, Config, Phase, Simulation, camera_eye_from_angles,
    cell_mvp, live_cell_mvps,
};
pub use error::{CameraError, ConfigError, GeometryError};
pub use math::{Mat4, Vec3};
