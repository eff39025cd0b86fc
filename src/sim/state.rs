//! Play state and entity types
//!
//! Everything the play screen owns between frames lives here.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal speed (pixels per frame)
    pub speed: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                WIDTH / 2 - PADDLE_WIDTH / 2,
                HEIGHT - PADDLE_BOTTOM_OFFSET,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            speed: PADDLE_SPEED,
        }
    }
}

impl Paddle {
    /// Move by `direction` steps (-1 left, +1 right), clamped to the canvas
    pub fn shift(&mut self, direction: i32) {
        let x = self.rect.x + direction * self.speed;
        self.rect.x = x.clamp(0, WIDTH - self.rect.w);
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    /// Per-frame displacement; each component is always `±speed`
    pub vel: IVec2,
    /// Speed for this level
    pub speed: i32,
}

impl Ball {
    /// Spawn at the canvas centre heading up, horizontally left or right at random
    pub fn spawn(speed: i32, rng: &mut Pcg32) -> Self {
        let dx = if rng.random_bool(0.5) { -speed } else { speed };
        Self {
            rect: Rect::new(WIDTH / 2, HEIGHT / 2, BALL_SIZE, BALL_SIZE),
            vel: IVec2::new(dx, -speed),
            speed,
        }
    }
}

/// Brick colour tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickColor {
    Red,
    Green,
    Blue,
}

impl BrickColor {
    pub const ALL: [BrickColor; 3] = [BrickColor::Red, BrickColor::Green, BrickColor::Blue];

    pub fn random(rng: &mut Pcg32) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brick {
    pub rect: Rect,
    pub color: BrickColor,
}

/// Things that happened during a tick, drained by the screen layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Horizontal velocity flipped off a side wall
    SideWallBounce,
    /// Vertical velocity flipped off the score bar
    TopWallBounce,
    PaddleBounce,
    BrickDestroyed { index: usize },
    /// Grid cleared; carries the level now being played
    LevelCleared { level: u32 },
    /// Ball crossed the bottom edge; carries the final score
    BallLost { score: u64 },
}

/// Complete play state for one game
#[derive(Debug, Clone)]
pub struct PlayState {
    /// Current level (1-based)
    pub level: u32,
    /// Score
    pub score: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Remaining bricks in grid order (column-major)
    pub bricks: Vec<Brick>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    /// Simulation frame counter
    pub frames: u64,
    rng: Pcg32,
}

impl PlayState {
    /// Start a fresh game at level 1
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::spawn(BALL_START_SPEED, &mut rng);
        let bricks = super::tick::generate_bricks(&mut rng);
        Self {
            level: 1,
            score: 0,
            paddle: Paddle::default(),
            ball,
            bricks,
            events: Vec::new(),
            frames: 0,
            rng,
        }
    }

    /// Advance to the next level: new grid, new paddle, ball one step faster
    pub fn next_level(&mut self) {
        self.level += 1;
        let speed = self.ball.speed + 1;
        self.ball = Ball::spawn(speed, &mut self.rng);
        self.paddle = Paddle::default();
        self.bricks = super::tick::generate_bricks(&mut self.rng);
    }

    pub fn is_cleared(&self) -> bool {
        self.bricks.is_empty()
    }
}
