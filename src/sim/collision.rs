//! Collision detection and response
//!
//! Everything is axis-aligned. A response is a sign flip of one velocity
//! component; there is no angle change and no position correction.

use glam::IVec2;

use super::rect::Rect;
use super::state::{Ball, Brick, Paddle};
use crate::consts::{SCORE_HEIGHT, WIDTH};

/// Which boundaries the ball bounced off this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub side: bool,
    pub top: bool,
}

/// Flip horizontal velocity
#[inline]
pub fn reflect_horizontal(vel: IVec2) -> IVec2 {
    IVec2::new(-vel.x, vel.y)
}

/// Flip vertical velocity
#[inline]
pub fn reflect_vertical(vel: IVec2) -> IVec2 {
    IVec2::new(vel.x, -vel.y)
}

/// Bounce off the side walls and the bottom of the score bar.
///
/// A component only flips while the ball is still heading into the boundary,
/// so a ball that overshoots flips once and then leaves.
pub fn ball_wall_collision(ball: &mut Ball) -> WallContact {
    let mut contact = WallContact::default();

    let into_left = ball.rect.left() <= 0 && ball.vel.x < 0;
    let into_right = ball.rect.right() >= WIDTH && ball.vel.x > 0;
    if into_left || into_right {
        ball.vel = reflect_horizontal(ball.vel);
        contact.side = true;
    }

    if ball.rect.top() <= SCORE_HEIGHT && ball.vel.y < 0 {
        ball.vel = reflect_vertical(ball.vel);
        contact.top = true;
    }

    contact
}

/// Bounce off the paddle. Only a descending ball is sent back up, so a ball
/// clipping the paddle's side doesn't rattle inside it.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    if ball.vel.y > 0 && ball.rect.overlaps(&paddle.rect) {
        ball.vel = reflect_vertical(ball.vel);
        return true;
    }
    false
}

/// Index of the first brick (in grid order) the ball overlaps
pub fn first_brick_hit(ball: &Rect, bricks: &[Brick]) -> Option<usize> {
    bricks.iter().position(|brick| ball.overlaps(&brick.rect))
}

/// Check if the ball has dropped past the bottom edge
pub fn ball_lost(ball: &Ball, floor: i32) -> bool {
    ball.rect.bottom() >= floor
}
