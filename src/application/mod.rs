mod camera;
mod config;
mod simulation;

pub use camera::{CameraState, CellLayout, camera_eye_from_angles, cell_mvp, live_cell_mvps};
pub use config::{CameraConfig, Config};
pub use simulation::{MAX_UPDATE_INTERVAL_MS, MIN_UPDATE_INTERVAL_MS, Phase, Simulation};
