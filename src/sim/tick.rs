//! Fixed timestep simulation tick
//!
//! One call advances the play state by exactly one frame.

use rand_pcg::Pcg32;

use super::collision::{
    ball_lost, ball_paddle_collision, ball_wall_collision, first_brick_hit, reflect_vertical,
};
use super::rect::Rect;
use super::state::{Brick, BrickColor, GameEvent, PlayState};
use crate::consts::*;

/// Held keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Net paddle direction; opposing keys cancel out
    pub fn direction(&self) -> i32 {
        self.right as i32 - self.left as i32
    }
}

/// Whether play continues after this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// Ball left through the bottom; the game is over
    BallLost,
}

/// Advance the play state by one frame
pub fn tick(state: &mut PlayState, input: &TickInput) -> TickOutcome {
    state.events.clear();
    state.frames += 1;

    let direction = input.direction();
    if direction != 0 {
        state.paddle.shift(direction);
    }

    let vel = state.ball.vel;
    state.ball.rect.translate(vel);
    let contact = ball_wall_collision(&mut state.ball);
    if contact.side {
        state.events.push(GameEvent::SideWallBounce);
    }
    if contact.top {
        state.events.push(GameEvent::TopWallBounce);
    }
    if ball_paddle_collision(&mut state.ball, &state.paddle) {
        state.events.push(GameEvent::PaddleBounce);
    }

    // First hit wins; at most one brick goes per frame
    if let Some(index) = first_brick_hit(&state.ball.rect, &state.bricks) {
        state.bricks.remove(index);
        state.ball.vel = reflect_vertical(state.ball.vel);
        state.score += POINTS_PER_BRICK;
        state.events.push(GameEvent::BrickDestroyed { index });
    }

    if state.is_cleared() {
        state.next_level();
        log::info!(
            "Level {} reached, ball speed {}",
            state.level,
            state.ball.speed
        );
        state.events.push(GameEvent::LevelCleared { level: state.level });
    }

    if ball_lost(&state.ball, HEIGHT) {
        state.events.push(GameEvent::BallLost { score: state.score });
        return TickOutcome::BallLost;
    }

    TickOutcome::Running
}

/// Build the full brick grid, column by column
pub fn generate_bricks(rng: &mut Pcg32) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity((BRICK_ROWS * BRICK_COLUMNS) as usize);
    for col in 0..BRICK_COLUMNS {
        for row in 0..BRICK_ROWS {
            bricks.push(Brick {
                rect: Rect::new(
                    col * BRICK_CELL_WIDTH,
                    BRICK_START_Y + row * BRICK_CELL_HEIGHT,
                    BRICK_CELL_WIDTH - BRICK_GAP,
                    BRICK_CELL_HEIGHT - BRICK_GAP,
                ),
                color: BrickColor::random(rng),
            });
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use rand::SeedableRng;

    /// Park the ball mid-field, clear of everything, moving down-right
    fn quiet_state(seed: u64) -> PlayState {
        let mut state = PlayState::new(seed);
        state.ball.rect = Rect::new(200, 400, BALL_SIZE, BALL_SIZE);
        state.ball.vel = IVec2::new(4, 4);
        state
    }

    #[test]
    fn test_grid_layout() {
        let mut rng = Pcg32::seed_from_u64(9);
        let bricks = generate_bricks(&mut rng);
        assert_eq!(bricks.len(), 50);
        assert_eq!(bricks[0].rect, Rect::new(0, 70, 75, 25));
        // Column-major: second brick is the next row down
        assert_eq!(bricks[1].rect, Rect::new(0, 100, 75, 25));
        assert_eq!(bricks[5].rect, Rect::new(80, 70, 75, 25));
        assert_eq!(bricks[49].rect, Rect::new(720, 190, 75, 25));
    }

    const LEFT: TickInput = TickInput {
        left: true,
        right: false,
    };
    const RIGHT: TickInput = TickInput {
        left: false,
        right: true,
    };
    const BOTH: TickInput = TickInput {
        left: true,
        right: true,
    };

    #[test]
    fn test_paddle_follows_keys() {
        let mut state = quiet_state(1);
        let x0 = state.paddle.rect.x;
        tick(&mut state, &LEFT);
        assert_eq!(state.paddle.rect.x, x0 - PADDLE_SPEED);
        tick(&mut state, &BOTH);
        assert_eq!(state.paddle.rect.x, x0 - PADDLE_SPEED);
        tick(&mut state, &RIGHT);
        assert_eq!(state.paddle.rect.x, x0);
    }

    #[test]
    fn test_ball_advances_by_velocity() {
        let mut state = quiet_state(1);
        assert_eq!(tick(&mut state, &TickInput::default()), TickOutcome::Running);
        assert_eq!(state.ball.rect.x, 204);
        assert_eq!(state.ball.rect.y, 404);
        assert_eq!(state.frames, 1);
    }

    #[test]
    fn test_one_brick_per_frame() {
        let mut state = quiet_state(5);
        let before = state.bricks.len();
        // After moving up 4px the ball straddles bricks 0 and 5 (columns 0 and 1)
        state.ball.rect = Rect::new(70, 84, BALL_SIZE, BALL_SIZE);
        state.ball.vel = IVec2::new(0, -4);
        let expected = state.bricks[0].clone();

        tick(&mut state, &TickInput::default());
        assert_eq!(state.bricks.len(), before - 1);
        assert!(!state.bricks.contains(&expected));
        assert_eq!(state.score, POINTS_PER_BRICK);
        assert_eq!(state.ball.vel.y, 4);
        assert_eq!(state.events, vec![GameEvent::BrickDestroyed { index: 0 }]);
    }

    #[test]
    fn test_score_ten_per_brick() {
        let mut state = quiet_state(5);
        let mut destroyed = 0u64;
        for target in 0..3 {
            let brick = state.bricks[0].rect;
            state.ball.rect = Rect::new(brick.x + 30, brick.bottom() + 2, BALL_SIZE, BALL_SIZE);
            state.ball.vel = IVec2::new(4, -4);
            tick(&mut state, &TickInput::default());
            destroyed += 1;
            assert_eq!(state.score, destroyed * POINTS_PER_BRICK, "hit {target}");
        }
        assert_eq!(state.bricks.len(), 47);
    }

    #[test]
    fn test_last_brick_clears_level() {
        let mut state = quiet_state(8);
        state.bricks.truncate(1);
        let brick = state.bricks[0].rect;
        state.ball.rect = Rect::new(brick.x + 30, brick.bottom() + 2, BALL_SIZE, BALL_SIZE);
        state.ball.vel = IVec2::new(4, -4);
        let speed = state.ball.speed;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.level, 2);
        assert_eq!(state.ball.speed, speed + 1);
        assert_eq!(state.bricks.len(), 50);
        assert_eq!(state.score, POINTS_PER_BRICK);
        assert!(state.events.contains(&GameEvent::LevelCleared { level: 2 }));
    }

    #[test]
    fn test_ball_lost_at_bottom() {
        let mut state = quiet_state(2);
        state.score = 120;
        // Away from the paddle so nothing saves it
        state.paddle.rect.x = 600;
        state.ball.rect = Rect::new(100, HEIGHT - BALL_SIZE - 2, BALL_SIZE, BALL_SIZE);
        state.ball.vel = IVec2::new(4, 4);

        assert_eq!(tick(&mut state, &TickInput::default()), TickOutcome::BallLost);
        assert_eq!(state.events, vec![GameEvent::BallLost { score: 120 }]);
    }

    #[test]
    fn test_paddle_saves_ball() {
        let mut state = quiet_state(2);
        let paddle = state.paddle.rect;
        state.ball.rect = Rect::new(paddle.x + 40, paddle.y - BALL_SIZE - 2, BALL_SIZE, BALL_SIZE);
        state.ball.vel = IVec2::new(4, 4);

        assert_eq!(tick(&mut state, &TickInput::default()), TickOutcome::Running);
        assert_eq!(state.ball.vel.y, -4);
        assert_eq!(state.events, vec![GameEvent::PaddleBounce]);
    }

    #[test]
    fn test_wall_contacts_become_events() {
        let mut state = quiet_state(3);
        state.ball.rect = Rect::new(WIDTH - BALL_SIZE - 2, 300, BALL_SIZE, BALL_SIZE);
        state.ball.vel = IVec2::new(4, 4);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel, IVec2::new(-4, 4));
        assert_eq!(state.events, vec![GameEvent::SideWallBounce]);

        // Next frame moves away from the wall: no repeat
        tick(&mut state, &TickInput::default());
        assert!(state.events.is_empty());

        // Left column of the field, under the score bar and clear of bricks
        state.bricks.clear();
        state.bricks.push(Brick {
            rect: Rect::new(720, 190, 75, 25),
            color: BrickColor::Red,
        });
        state.ball.rect = Rect::new(2, SCORE_HEIGHT + 2, BALL_SIZE, BALL_SIZE);
        state.ball.vel = IVec2::new(-4, -4);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel, IVec2::new(4, 4));
        assert_eq!(
            state.events,
            vec![GameEvent::SideWallBounce, GameEvent::TopWallBounce]
        );
    }

    #[test]
    fn test_determinism() {
        let mut a = PlayState::new(99999);
        let mut b = PlayState::new(99999);
        let inputs = [LEFT, TickInput::default(), RIGHT];
        for i in 0..600 {
            let input = inputs[i % inputs.len()];
            let ra = tick(&mut a, &input);
            let rb = tick(&mut b, &input);
            assert_eq!(ra, rb);
            if ra == TickOutcome::BallLost {
                break;
            }
        }
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.score, b.score);
        assert_eq!(a.bricks, b.bricks);
    }
}
