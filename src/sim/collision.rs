//! Collision detection and response
//!
//! All responses are velocity-only: positions are never pushed back out of a
//! wall, paddle or block. Walls reflect, the paddle forces the ball upward,
//! and at most one block is destroyed per tick.

use super::state::{Ball, Block, Paddle};
use crate::config::Config;
use crate::floor_div;

/// Which walls reflected the ball this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallBounce {
    pub horizontal: bool,
    pub top: bool,
}

/// Reflect off the side walls and the ceiling.
///
/// The side test is inclusive on `[0, field_width - diameter]`; only the
/// velocity sign flips, magnitude is preserved.
pub fn bounce_walls(ball: &mut Ball, config: &Config) -> WallBounce {
    let mut bounce = WallBounce::default();
    let max_x = config.field_width as f32 - ball.diameter();

    if ball.pos.x <= 0.0 || ball.pos.x >= max_x {
        ball.vel.x = -ball.vel.x;
        bounce.horizontal = true;
    }

    if ball.pos.y <= 0.0 {
        ball.vel.y = -ball.vel.y;
        bounce.top = true;
    }

    bounce
}

/// Bounce off the paddle if the boxes overlap.
///
/// The vertical velocity is forced upward rather than negated so a ball
/// overlapping the paddle for several ticks cannot oscillate inside it.
/// Horizontal velocity gains `floor(hit_offset / (paddle_width / 10))` and is
/// clamped to `±max_ball_dx`.
pub fn paddle_collision(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    if !paddle.rect().intersects(&ball.bounds()) {
        return false;
    }

    ball.vel.y = -ball.vel.y.abs();

    let paddle_mid = paddle.x + (config.paddle_width / 2) as f32;
    let hit_offset = (ball.pos.x + ball.radius) - paddle_mid;
    let deflection = floor_div(hit_offset, config.deflection_divisor());
    ball.vel.x = (ball.vel.x + deflection).clamp(-config.max_ball_dx, config.max_ball_dx);

    true
}

/// Index of the first block (in creation order) overlapping the ball
pub fn first_block_hit(ball: &Ball, blocks: &[Block]) -> Option<usize> {
    let bounds = ball.bounds();
    blocks.iter().position(|block| block.rect.intersects(&bounds))
}

/// Destroy the first overlapping block and flip the vertical velocity.
///
/// Scanning stops at the first hit even if the ball overlaps several blocks.
pub fn block_collision(ball: &mut Ball, blocks: &mut Vec<Block>) -> Option<Block> {
    let index = first_block_hit(ball, blocks)?;
    let block = blocks.remove(index);
    ball.vel.y = -ball.vel.y;
    Some(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use glam::{IVec2, Vec2};

    fn ball_at(x: f32, y: f32, vel: IVec2) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel,
            radius: 10.0,
        }
    }

    #[test]
    fn test_side_wall_flips_dx() {
        let config = Config::default();

        let mut ball = ball_at(781.0, 300.0, IVec2::new(4, -4));
        let bounce = bounce_walls(&mut ball, &config);
        assert!(bounce.horizontal);
        assert_eq!(ball.vel, IVec2::new(-4, -4));
        // Reflect only, no clamp
        assert_eq!(ball.pos.x, 781.0);

        let mut ball = ball_at(-3.0, 300.0, IVec2::new(-6, 2));
        bounce_walls(&mut ball, &config);
        assert_eq!(ball.vel, IVec2::new(6, 2));
    }

    #[test]
    fn test_ceiling_flips_dy() {
        let config = Config::default();
        let mut ball = ball_at(400.0, 0.0, IVec2::new(4, -4));
        let bounce = bounce_walls(&mut ball, &config);
        assert!(bounce.top);
        assert!(!bounce.horizontal);
        assert_eq!(ball.vel, IVec2::new(4, 4));
    }

    #[test]
    fn test_no_bounce_in_open_field() {
        let config = Config::default();
        let mut ball = ball_at(404.0, 296.0, IVec2::new(4, -4));
        assert_eq!(bounce_walls(&mut ball, &config), WallBounce::default());
        assert_eq!(ball.vel, IVec2::new(4, -4));
    }

    #[test]
    fn test_paddle_center_hit_goes_up() {
        let config = Config::default();
        let paddle = Paddle::centered(&config);
        // Ball center exactly over paddle center (400)
        let mut ball = ball_at(390.0, 555.0, IVec2::new(2, 4));
        assert!(paddle_collision(&mut ball, &paddle, &config));
        assert_eq!(ball.vel, IVec2::new(2, -4));
    }

    #[test]
    fn test_paddle_edge_hit_deflects_and_clamps() {
        let config = Config::default();
        let paddle = Paddle::centered(&config);

        // Right edge: offset 45 -> +4, 6 + 4 clamps to 7
        let mut ball = ball_at(435.0, 555.0, IVec2::new(6, 4));
        assert!(paddle_collision(&mut ball, &paddle, &config));
        assert_eq!(ball.vel, IVec2::new(7, -4));

        // Left edge: offset -45 floors to -5
        let mut ball = ball_at(345.0, 555.0, IVec2::new(-4, 4));
        assert!(paddle_collision(&mut ball, &paddle, &config));
        assert_eq!(ball.vel, IVec2::new(-7, -4));
    }

    #[test]
    fn test_paddle_keeps_upward_ball_upward() {
        let config = Config::default();
        let paddle = Paddle::centered(&config);
        let mut ball = ball_at(390.0, 560.0, IVec2::new(0, -4));
        assert!(paddle_collision(&mut ball, &paddle, &config));
        assert_eq!(ball.vel.y, -4);
    }

    #[test]
    fn test_paddle_miss() {
        let config = Config::default();
        let paddle = Paddle::centered(&config);
        let mut ball = ball_at(100.0, 555.0, IVec2::new(2, 4));
        assert!(!paddle_collision(&mut ball, &paddle, &config));
        assert_eq!(ball.vel, IVec2::new(2, 4));
    }

    #[test]
    fn test_single_block_per_tick() {
        let mut blocks = vec![
            Block {
                id: 0,
                rect: Rect::new(0.0, 0.0, 80.0, 20.0),
            },
            Block {
                id: 1,
                rect: Rect::new(80.0, 0.0, 80.0, 20.0),
            },
        ];
        // Overlaps both blocks
        let mut ball = ball_at(75.0, 10.0, IVec2::new(4, -4));

        let hit = block_collision(&mut ball, &mut blocks).unwrap();
        assert_eq!(hit.id, 0);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, 1);
        assert_eq!(ball.vel, IVec2::new(4, 4));
    }

    #[test]
    fn test_block_miss() {
        let mut blocks = vec![Block {
            id: 0,
            rect: Rect::new(0.0, 0.0, 80.0, 20.0),
        }];
        let mut ball = ball_at(200.0, 200.0, IVec2::new(4, -4));
        assert!(block_collision(&mut ball, &mut blocks).is_none());
        assert_eq!(blocks.len(), 1);
        assert_eq!(ball.vel, IVec2::new(4, -4));
    }
}
