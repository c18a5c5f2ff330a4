use ::rand::Rng;
use macroquad::prelude::*;

use crate::application::{CameraConfig, CameraState, Simulation};
use crate::error::ConfigError;
use crate::ui::{Action, Button, panel_x};

/// Wheel units per notch differ by platform; scale to roughly match a
/// browser's `deltaY` of 100 per notch.
const WHEEL_SCALE: f32 = 100.0;

/// Step applied to the generation interval by the arrow keys
const INTERVAL_KEY_STEP_MS: f32 = 100.0;

/// Remembers the previous cursor position while the left button is held.
#[derive(Default)]
pub struct DragTracker {
    last: Option<(f32, f32)>,
}

impl DragTracker {
    /// Left-drag inside the 3D view orbits the camera
    pub fn handle_orbit(&mut self, camera: &mut CameraState, mouse_pos: (f32, f32), blocked: bool) {
        if blocked || !is_mouse_button_down(MouseButton::Left) {
            self.last = None;
            return;
        }
        match self.last {
            Some(last) => camera.rotate(mouse_pos.0 - last.0, mouse_pos.1 - last.1),
            // drags that begin on the panel never orbit
            None if mouse_pos.0 >= panel_x() => return,
            None => {}
        }
        self.last = Some(mouse_pos);
    }
}

/// Wheel zoom; scrolling down moves the eye away like the browser viewer
pub fn handle_zoom(camera: &mut CameraState) {
    let wheel = mouse_wheel().1;
    if wheel != 0.0 {
        camera.zoom_by(-wheel * WHEEL_SCALE);
    }
}

/// Keyboard shortcuts mirroring the panel controls
pub fn process_keyboard_input<R: Rng + ?Sized>(
    sim: Simulation,
    camera: &mut CameraState,
    camera_config: &CameraConfig,
    rng: &mut R,
) -> Result<Simulation, ConfigError> {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::N, Simulation::step),
        (KeyCode::Up, |s| s.adjust_update_interval(-INTERVAL_KEY_STEP_MS)),
        (KeyCode::Down, |s| s.adjust_update_interval(INTERVAL_KEY_STEP_MS)),
    ];

    let mut sim = actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if is_key_pressed(KeyCode::R) {
        sim = sim.reset(rng)?;
    }
    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset(camera_config);
    }
    Ok(sim)
}

/// Apply whichever panel button was clicked this frame
pub fn process_button_clicks<R: Rng + ?Sized>(
    sim: Simulation,
    buttons: &[(Action, Button)],
    mouse_pos: (f32, f32),
    rng: &mut R,
) -> Result<Simulation, ConfigError> {
    let clicked = buttons
        .iter()
        .find(|(_, btn)| btn.is_clicked(mouse_pos))
        .map(|(action, _)| *action);

    match clicked {
        Some(Action::StartPause) => Ok(sim.toggle_running()),
        Some(Action::Step) => Ok(sim.step()),
        Some(Action::Reset) => sim.reset(rng),
        None => Ok(sim),
    }
}
