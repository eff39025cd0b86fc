//! Menu buttons
//!
//! Layout for the clickable buttons on the menu and scores screens.

use glam::IVec2;

use crate::consts::{HEIGHT, WIDTH};
use crate::sim::Rect;

/// A labelled rectangle that reacts to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub rect: Rect,
}

impl Button {
    pub const fn new(label: &'static str, rect: Rect) -> Self {
        Self { label, rect }
    }

    pub fn hovered(&self, mouse: Option<IVec2>) -> bool {
        mouse.is_some_and(|p| self.rect.contains_point(p))
    }

    /// Fires on the frame the mouse button goes down over the button
    pub fn clicked(&self, mouse: Option<IVec2>, pressed: bool) -> bool {
        pressed && self.hovered(mouse)
    }
}

const MENU_BUTTON_W: i32 = 150;
const MENU_BUTTON_H: i32 = 50;
const MENU_BUTTON_X: i32 = WIDTH / 2 - MENU_BUTTON_W / 2;

pub const PLAY_BUTTON: Button = Button::new(
    "Play",
    Rect::new(MENU_BUTTON_X, HEIGHT / 2 - 30, MENU_BUTTON_W, MENU_BUTTON_H),
);

pub const SCORES_BUTTON: Button = Button::new(
    "High Scores",
    Rect::new(MENU_BUTTON_X, HEIGHT / 2 + 40, MENU_BUTTON_W, MENU_BUTTON_H),
);

pub const QUIT_BUTTON: Button = Button::new(
    "Quit",
    Rect::new(MENU_BUTTON_X, HEIGHT / 2 + 110, MENU_BUTTON_W, MENU_BUTTON_H),
);

pub const BACK_BUTTON: Button = Button::new(
    "Back",
    Rect::new(WIDTH / 2 - 50, HEIGHT - 100, 100, 50),
);

/// Menu buttons, top to bottom
pub const MENU_BUTTONS: [Button; 3] = [PLAY_BUTTON, SCORES_BUTTON, QUIT_BUTTON];
