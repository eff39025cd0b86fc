//! Brick Breaker - paddle, ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, collisions, level progression)
//! - `screen`: Menu / play / scores state machine driven by per-frame input
//! - `highscores`: Top-5 leaderboard backed by a flat score file
//! - `persistence`: Score file encoding and I/O
//! - `renderer`: CPU drawing into an RGBA frame
//! - `platform`: Native window, event pump and frame pacing

pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod screen;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{Error, Result};
pub use highscores::{HighScores, SavedScore, ScoreStore};
pub use screen::{FrameInput, Game, Screen};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (pixels)
    pub const WIDTH: i32 = 800;
    pub const HEIGHT: i32 = 600;

    /// Target frame rate; the simulation advances exactly one step per frame
    pub const TARGET_FPS: u32 = 60;

    /// Reserved strip at the top of the play field for the score readout
    pub const SCORE_HEIGHT: i32 = 50;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 120;
    pub const PADDLE_HEIGHT: i32 = 15;
    pub const PADDLE_SPEED: i32 = 8;
    /// Gap between paddle top and canvas bottom
    pub const PADDLE_BOTTOM_OFFSET: i32 = 30;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 12;
    pub const BALL_START_SPEED: i32 = 4;

    /// Brick grid layout
    pub const BRICK_ROWS: i32 = 5;
    pub const BRICK_COLUMNS: i32 = 10;
    pub const BRICK_CELL_WIDTH: i32 = WIDTH / BRICK_COLUMNS;
    pub const BRICK_CELL_HEIGHT: i32 = 30;
    /// Visible gap between neighbouring bricks
    pub const BRICK_GAP: i32 = 5;
    pub const BRICK_START_Y: i32 = SCORE_HEIGHT + 20;

    /// Points awarded per destroyed brick
    pub const POINTS_PER_BRICK: u64 = 10;

    /// Leaderboard capacity
    pub const MAX_HIGH_SCORES: usize = 5;

    /// Default score file, relative to the working directory
    pub const SCORE_FILE: &str = "highscores.txt";
}
