use macroquad::prelude::*;

/// Horizontal slider over `[min, max]`, dragged with the left mouse button.
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    label: &'static str,
    min: f32,
    max: f32,
    value: f32,
    dragging: bool,
}

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 8.0;

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: &'static str, min: f32, max: f32) -> Self {
        Self {
            x,
            y,
            width,
            label,
            min,
            max,
            value: min,
            dragging: false,
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }

    fn knob_x(&self) -> f32 {
        let t = (self.value - self.min) / (self.max - self.min);
        self.x + t * self.width
    }

    fn hit(&self, mouse_pos: (f32, f32)) -> bool {
        let (mx, my) = mouse_pos;
        mx >= self.x - KNOB_RADIUS
            && mx <= self.x + self.width + KNOB_RADIUS
            && (my - self.y).abs() <= KNOB_RADIUS
    }

    /// Returns the new value when the user moved the knob this frame
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<f32> {
        if is_mouse_button_pressed(MouseButton::Left) && self.hit(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return None;
        }

        let t = ((mouse_pos.0 - self.x) / self.width).clamp(0.0, 1.0);
        let value = self.min + t * (self.max - self.min);
        if (value - self.value).abs() > f32::EPSILON {
            self.value = value;
            Some(value)
        } else {
            None
        }
    }

    /// True while the knob is held, so drags don't also orbit the camera
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn draw(&self) {
        draw_text(self.label, self.x, self.y - 12.0, 16.0, WHITE);
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            Color::from_rgba(60, 60, 60, 255),
        );
        let color = if self.dragging {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_circle(self.knob_x(), self.y, KNOB_RADIUS, color);
    }
}
