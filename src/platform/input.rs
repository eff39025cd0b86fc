//! Window event to `FrameInput` translation
//!
//! Held keys persist across frames; presses and close requests are one-shot
//! and cleared each time a frame is taken.

use glam::IVec2;
use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};

use crate::screen::FrameInput;

#[derive(Debug, Default)]
pub struct InputTracker {
    mouse_pos: Option<IVec2>,
    mouse_pressed: bool,
    left_down: bool,
    right_down: bool,
    escape_pressed: bool,
    close_requested: bool,
}

impl InputTracker {
    /// Pointer moved; `None` when it left the canvas
    pub fn cursor_moved(&mut self, pos: Option<IVec2>) {
        self.mouse_pos = pos;
    }

    pub fn key(&mut self, key: VirtualKeyCode, state: ElementState) {
        let down = state == ElementState::Pressed;
        match key {
            VirtualKeyCode::Left => self.left_down = down,
            VirtualKeyCode::Right => self.right_down = down,
            VirtualKeyCode::Escape if down => self.escape_pressed = true,
            _ => {}
        }
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left && state == ElementState::Pressed {
            self.mouse_pressed = true;
        }
    }

    /// Drop held keys, e.g. when focus moves elsewhere and releases go missing
    pub fn release_all(&mut self) {
        self.left_down = false;
        self.right_down = false;
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Window events that don't need pixel-space conversion
    pub fn handle_window_event(&mut self, event: &WindowEvent<'_>) {
        match event {
            WindowEvent::CloseRequested => self.request_close(),
            WindowEvent::Focused(false) => self.release_all(),
            WindowEvent::CursorLeft { .. } => self.cursor_moved(None),
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            } => self.key(*key, *state),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_button(*button, *state),
            _ => {}
        }
    }

    /// Snapshot for this frame, clearing one-shot flags
    pub fn take_frame(&mut self) -> FrameInput {
        let frame = FrameInput {
            mouse_pos: self.mouse_pos,
            mouse_pressed: self.mouse_pressed,
            left: self.left_down,
            right: self.right_down,
            escape_pressed: self.escape_pressed,
            close_requested: self.close_requested,
        };
        self.mouse_pressed = false;
        self.escape_pressed = false;
        self.close_requested = false;
        frame
    }
}
