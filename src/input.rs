//! Pointer and viewport input for one frame

use macroquad::prelude::{
    is_mouse_button_down, is_mouse_button_pressed, is_mouse_button_released, mouse_position,
    mouse_wheel, screen_height, screen_width, MouseButton,
};

/// Pointer state sampled at the start of a frame
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    /// Movement since last frame
    pub dx: f32,
    pub dy: f32,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub left_released: bool, // Just released this frame
    /// Wheel notches, positive = away from the user
    pub scroll: f32,
}

impl PointerState {
    /// Read macroquad's input, computing deltas from the previous frame
    pub fn poll(prev: &PointerState) -> Self {
        let (x, y) = mouse_position();
        let (_, wheel_y) = mouse_wheel();
        Self {
            x,
            y,
            dx: x - prev.x,
            dy: y - prev.y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
            scroll: if wheel_y == 0.0 { 0.0 } else { wheel_y.signum() },
        }
    }

    pub fn moved(&self) -> bool {
        self.dx != 0.0 || self.dy != 0.0
    }
}

/// Output surface size, tracked so resizes can be reported once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn current() -> Self {
        Self {
            width: screen_width(),
            height: screen_height(),
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Adopt `next` if it differs. Returns true on change.
    pub fn resize(&mut self, next: Viewport) -> bool {
        if *self == next {
            return false;
        }
        *self = next;
        true
    }
}
