use crate::application::config::{CameraConfig, Config};
use crate::domain::VoxelGrid;
use crate::error::{CameraError, ConfigError};
use crate::math::{Mat4, Vec3, identity, look_at, multiply, perspective, translate};

/// Height gained per radian of vertical drag.
const VERTICAL_SCALE: f32 = 2.0;

/// Orbit camera around the grid center, driven by drag and wheel input.
/// Zoom is kept within `[min_zoom, max_zoom]` after every update.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraState {
    pub angle_x: f32,
    pub angle_y: f32,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
    rotate_sensitivity: f32,
    zoom_sensitivity: f32,
    fov_y: f32,
    near: f32,
    far: f32,
}

impl CameraState {
    pub fn new(config: &CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            angle_x: 0.0,
            angle_y: 0.0,
            zoom: config.zoom.clamp(config.min_zoom, config.max_zoom),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            rotate_sensitivity: config.rotate_sensitivity,
            zoom_sensitivity: config.zoom_sensitivity,
            fov_y: config.fov_y,
            near: config.near,
            far: config.far,
        })
    }

    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    pub const fn zoom_range(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    /// Set orbit distance, clamped to the configured range
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        }
    }

    /// Apply a wheel delta
    pub fn zoom_by(&mut self, wheel_delta: f32) {
        self.set_zoom(self.zoom + wheel_delta * self.zoom_sensitivity);
    }

    /// Apply a mouse drag in pixels: horizontal motion orbits around Y,
    /// vertical motion raises or lowers the eye.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.angle_y += dx * self.rotate_sensitivity;
        self.angle_x += dy * self.rotate_sensitivity;
    }

    /// Reset orientation and zoom to `config`'s starting values
    pub fn reset(&mut self, config: &CameraConfig) {
        self.angle_x = 0.0;
        self.angle_y = 0.0;
        self.set_zoom(config.zoom);
    }

    pub fn eye(&self) -> Vec3 {
        camera_eye_from_angles(self.angle_x, self.angle_y, self.zoom)
    }

    /// Combined projection * view for the current orbit position
    pub fn view_projection(&self, aspect: f32) -> Result<Mat4, CameraError> {
        let projection = perspective(self.fov_y, aspect, self.near, self.far)?;
        let view = look_at(self.eye(), Vec3::ZERO, Vec3::Y)?;
        Ok(multiply(&projection, &view))
    }
}

/// Eye position orbiting the origin.
///
/// `angle_y` sweeps the eye around the Y axis at horizontal distance `zoom`;
/// `angle_x` lifts it linearly to `2 * angle_x`. With `zoom > 0` the eye never
/// reaches the origin or the Y axis, so `look_at` with a +Y up vector stays
/// well defined.
pub fn camera_eye_from_angles(angle_x: f32, angle_y: f32, zoom: f32) -> Vec3 {
    Vec3::new(
        zoom * angle_y.sin(),
        angle_x * VERTICAL_SCALE,
        zoom * angle_y.cos(),
    )
}

/// Maps grid coordinates to world space, centering the cube on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellLayout {
    pub edge: usize,
    pub cell_size: f32,
    pub spacing: f32,
}

impl CellLayout {
    pub fn from_config(config: &Config) -> Self {
        Self {
            edge: config.edge,
            cell_size: config.cell_size,
            spacing: config.spacing,
        }
    }

    /// `(coord - edge/2) * (cell_size + spacing)` on every axis
    pub fn world_position(&self, x: usize, y: usize, z: usize) -> Vec3 {
        let half = self.edge as f32 / 2.0;
        let pitch = self.cell_size + self.spacing;
        let axis = |c: usize| (c as f32 - half) * pitch;
        Vec3::new(axis(x), axis(y), axis(z))
    }
}

/// Model-view-projection for one cell
pub fn cell_mvp(view_projection: &Mat4, world_position: Vec3) -> Mat4 {
    multiply(view_projection, &translate(&identity(), world_position))
}

/// Per-cell MVP for every live cell, in grid index order
pub fn live_cell_mvps<'a>(
    grid: &'a VoxelGrid,
    layout: &'a CellLayout,
    view_projection: &'a Mat4,
) -> impl Iterator<Item = Mat4> + 'a {
    grid.live_cells()
        .map(move |(x, y, z)| cell_mvp(view_projection, layout.world_position(x, y, z)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    const EPS: f32 = 1e-4;

    fn camera() -> CameraState {
        CameraState::new(&CameraConfig::default()).unwrap()
    }

    #[test]
    fn test_zoom_clamped_on_every_update() {
        let mut cam = camera();
        assert_eq!(cam.zoom(), 25.0);
        cam.zoom_by(10_000.0);
        assert_eq!(cam.zoom(), 30.0);
        cam.zoom_by(-10_000.0);
        assert_eq!(cam.zoom(), 5.0);
        cam.set_zoom(f32::NAN);
        assert_eq!(cam.zoom(), 5.0);
    }

    #[test]
    fn test_initial_zoom_clamped() {
        let config = CameraConfig {
            zoom: 100.0,
            ..CameraConfig::default()
        };
        assert_eq!(CameraState::new(&config).unwrap().zoom(), 30.0);
    }

    #[test]
    fn test_rotate_scales_by_sensitivity() {
        let mut cam = camera();
        cam.rotate(100.0, -50.0);
        assert!((cam.angle_y - 1.0).abs() < 1e-6);
        assert!((cam.angle_x + 0.5).abs() < 1e-6);
        cam.reset(&CameraConfig::default());
        assert_eq!((cam.angle_x, cam.angle_y, cam.zoom()), (0.0, 0.0, 25.0));
    }

    #[test]
    fn test_eye_from_angles() {
        let eye = camera_eye_from_angles(0.0, 0.0, 25.0);
        assert_eq!(eye, Vec3::new(0.0, 0.0, 25.0));

        let eye = camera_eye_from_angles(1.5, std::f32::consts::FRAC_PI_2, 10.0);
        assert!((eye.x - 10.0).abs() < EPS);
        assert!((eye.y - 3.0).abs() < EPS);
        assert!(eye.z.abs() < EPS);
    }

    #[test]
    fn test_view_projection_centers_origin() {
        let mut cam = camera();
        cam.rotate(37.0, 120.0);
        let vp = cam.view_projection(16.0 / 9.0).unwrap();
        let clip = vp.transform_point(Vec3::ZERO);
        assert!((clip[0] / clip[3]).abs() < EPS);
        assert!((clip[1] / clip[3]).abs() < EPS);
        assert!(clip[3] > 0.0);
    }

    #[test]
    fn test_view_projection_rejects_bad_aspect() {
        assert!(matches!(
            camera().view_projection(0.0),
            Err(CameraError::Projection(_))
        ));
    }

    #[test]
    fn test_world_position_centers_grid() {
        let layout = CellLayout {
            edge: 10,
            cell_size: 2.0,
            spacing: 0.3,
        };
        assert_eq!(layout.world_position(5, 5, 5), Vec3::ZERO);
        let p = layout.world_position(0, 9, 5);
        assert!((p.x + 11.5).abs() < EPS);
        assert!((p.y - 9.2).abs() < EPS);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_cell_mvp_composes_translation() {
        let vp = camera().view_projection(1.0).unwrap();
        let offset = Vec3::new(2.3, -4.6, 0.0);
        let mvp = cell_mvp(&vp, offset);
        let direct = vp.transform_point(offset);
        let via_model = mvp.transform_point(Vec3::ZERO);
        for (a, b) in direct.iter().zip(via_model.iter()) {
            assert!((a - b).abs() < EPS);
        }
    }

    #[test]
    fn test_one_mvp_per_live_cell() {
        let mut grid = VoxelGrid::new(4).unwrap();
        grid.set(0, 0, 0, Cell::Alive);
        grid.set(3, 2, 1, Cell::Alive);
        let layout = CellLayout {
            edge: 4,
            cell_size: 1.0,
            spacing: 0.0,
        };
        let vp = identity();
        let mvps: Vec<_> = live_cell_mvps(&grid, &layout, &vp).collect();
        assert_eq!(mvps.len(), 2);
        assert_eq!(mvps[0].translation(), Vec3::new(-2.0, -2.0, -2.0));
        assert_eq!(mvps[1].translation(), Vec3::new(1.0, 0.0, -1.0));
    }
}
