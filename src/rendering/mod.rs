use macroquad::prelude::*;
use macroquad::texture::RenderPass;
use macroquad::window::get_internal_gl;

use crate::application::{CameraState, CellLayout, Phase, Simulation, live_cell_mvps};
use crate::math;
use crate::ui::{Button, PANEL_WIDTH, Slider, panel_x};

/// Passes vertices through untouched: each cube carries its full
/// model-view-projection as the model matrix.
struct ClipSpaceCamera {
    viewport: (i32, i32, i32, i32),
}

impl Camera for ClipSpaceCamera {
    fn matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    fn depth_enabled(&self) -> bool {
        true
    }

    fn render_pass(&self) -> Option<RenderPass> {
        None
    }

    fn viewport(&self) -> Option<(i32, i32, i32, i32)> {
        Some(self.viewport)
    }
}

fn to_gpu(m: &math::Mat4) -> Mat4 {
    Mat4::from_cols_array(&m.to_cols_array())
}

/// Draw one cube per live cell. A frame whose camera cannot be built is
/// skipped rather than drawn with a degenerate matrix.
pub fn draw_cells(sim: &Simulation, camera: &CameraState, layout: &CellLayout) {
    let (width, height) = (panel_x(), screen_height());
    let view_projection = match camera.view_projection(width / height) {
        Ok(vp) => vp,
        Err(err) => {
            log::warn!("Skipping frame: {err}");
            return;
        }
    };

    let dpi = screen_dpi_scale();
    // macroquad viewports are in physical pixels with a bottom-left origin
    set_camera(&ClipSpaceCamera {
        viewport: (0, 0, (width * dpi) as i32, (height * dpi) as i32),
    });

    let size = Vec3::splat(layout.cell_size);
    let face = Color::from_rgba(235, 235, 235, 255);
    let edge = Color::from_rgba(90, 90, 90, 255);

    for mvp in live_cell_mvps(&sim.grid, layout, &view_projection) {
        // SAFETY: only used between frames on the main thread, no other
        // borrow of the internal context is alive.
        let gl = unsafe { get_internal_gl() };
        gl.quad_gl.push_model_matrix(to_gpu(&mvp));
        draw_cube(Vec3::ZERO, size, None, face);
        draw_cube_wires(Vec3::ZERO, size, edge);
        let gl = unsafe { get_internal_gl() };
        gl.quad_gl.pop_model_matrix();
    }

    set_default_camera();
}

fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons, slider and status
pub fn draw_controls(
    sim: &Simulation,
    camera: &CameraState,
    buttons: &[(crate::ui::Action, Button)],
    slider: &Slider,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));
    slider.draw();

    let px = panel_x();
    let edge = sim.grid.edge();
    let (status, status_color) = match sim.phase() {
        Phase::Idle => ("Idle", GRAY),
        Phase::Running => ("Running", Color::from_rgba(0, 255, 0, 255)),
        Phase::Paused => ("Paused", Color::from_rgba(255, 165, 0, 255)),
    };

    let labels = [
        (format!("{:.0} ms / gen", sim.update_interval_ms()), 235.0, 14.0, LIGHTGRAY),
        (format!("Grid: {edge}x{edge}x{edge}"), 275.0, 14.0, LIGHTGRAY),
        (format!("Alive: {}", sim.population()), 292.0, 14.0, LIGHTGRAY),
        (format!("Generation: {}", sim.generation()), 320.0, 18.0, WHITE),
        (status.to_string(), 342.0, 18.0, status_color),
        (
            format!("Step: {:.2} ms ({})", sim.last_step_time_ms, sim.step_strategy.name()),
            370.0,
            12.0,
            GRAY,
        ),
        (format!("Zoom: {:.1}", camera.zoom()), 385.0, 12.0, GRAY),
        (format!("FPS: {}", get_fps()), 400.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px + 4.0, *y, *size, *color);
    });

    let controls = [
        "Controls:",
        "LMB drag: Orbit",
        "Wheel: Zoom",
        "Space: Start/Pause",
        "N: Step  R: Reset",
        "Up/Down: Speed",
        "H: Home camera",
    ];
    controls.iter().enumerate().for_each(|(i, text)| {
        let size = if i == 0 { 14.0 } else { 12.0 };
        draw_text(text, px + 4.0, 440.0 + i as f32 * 14.0, size, GRAY);
    });
}
