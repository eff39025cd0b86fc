//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One step per frame, integer pixel positions
//! - Seeded RNG only (ball launch direction, brick colours)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{WallContact, ball_paddle_collision, ball_wall_collision, first_brick_hit};
pub use rect::Rect;
pub use state::{Ball, Brick, BrickColor, GameEvent, Paddle, PlayState};
pub use tick::{TickInput, TickOutcome, generate_bricks, tick};
