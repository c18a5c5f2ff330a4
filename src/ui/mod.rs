mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

use macroquad::prelude::screen_width;

use crate::application::{MAX_UPDATE_INTERVAL_MS, MIN_UPDATE_INTERVAL_MS, Phase};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// X position where the panel starts; the 3D view fills everything left of it
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Panel actions, in button order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    StartPause,
    Step,
    Reset,
}

/// Create the panel buttons; the first label follows the simulation phase
pub fn create_buttons(phase: Phase) -> Vec<(Action, Button)> {
    let px = panel_x();
    let primary = match phase {
        Phase::Idle => "Start",
        Phase::Running => "Pause",
        Phase::Paused => "Resume",
    };
    vec![
        (Action::StartPause, Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, primary)),
        (Action::Step, Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step")),
        (Action::Reset, Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset")),
    ]
}

/// Slider for the generation interval in milliseconds
pub fn create_interval_slider(initial_ms: f32) -> Slider {
    let mut slider = Slider::new(
        panel_x() + 10.0,
        210.0,
        PANEL_WIDTH - 20.0,
        "Interval (ms)",
        MIN_UPDATE_INTERVAL_MS,
        MAX_UPDATE_INTERVAL_MS,
    );
    slider.set_value(initial_ms);
    slider
}
