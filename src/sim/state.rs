//! Game state and core simulation types
//!
//! Everything one episode mutates lives in `GameState`. It is rebuilt from the
//! `Config` on every reset; nothing carries over between episodes.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::Config;

/// Episode lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodePhase {
    /// Ball in play
    Running,
    /// Ball fell past the bottom edge; only `reset` is valid
    Terminated,
}

/// The player's paddle (fixed y, moves horizontally)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Centered horizontally at the configured bottom offset
    pub fn centered(config: &Config) -> Self {
        Self {
            x: (config.field_width / 2 - config.paddle_width / 2) as f32,
            y: config.paddle_y(),
            width: config.paddle_width as f32,
            height: config.paddle_height as f32,
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Shift by `direction * speed`, clamped to `[0, max_x]`
    pub fn shift(&mut self, direction: f32, speed: f32, max_x: f32) {
        self.x = (self.x + direction * speed).clamp(0.0, max_x);
    }
}

/// The ball. Position is continuous, velocity is whole pixels per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left of the collision box
    pub pos: Vec2,
    pub vel: IVec2,
    pub radius: f32,
}

impl Ball {
    /// Centered in the field with the configured launch velocity
    pub fn launch(config: &Config) -> Self {
        Self {
            pos: Vec2::new(
                (config.field_width / 2) as f32,
                (config.field_height / 2) as f32,
            ),
            vel: config.ball_initial_velocity,
            radius: config.ball_radius as f32,
        }
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Collision box anchored at `pos`
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.diameter(), self.diameter())
    }

    /// Center of the collision box
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    /// Move by one tick of velocity
    pub fn advance(&mut self) {
        self.pos += self.vel.as_vec2();
    }
}

/// A destructible block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Creation index (row-major), stable for the whole episode
    pub id: u32,
    pub rect: Rect,
}

/// Complete per-episode state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: EpisodePhase,
    /// Ticks since the last reset
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Remaining blocks, kept in creation order
    pub blocks: Vec<Block>,
    /// Paddle-center to ball-x distance at the end of the previous tick
    pub prev_distance: f32,
    /// Block count at the end of the previous tick
    pub prev_block_count: usize,
}

impl GameState {
    /// Fresh episode: centered paddle and ball, full block grid
    pub fn new(config: &Config) -> Self {
        let paddle = Paddle::centered(config);
        let ball = Ball::launch(config);
        let blocks = generate_blocks(config);
        let mut state = Self {
            phase: EpisodePhase::Running,
            time_ticks: 0,
            prev_distance: 0.0,
            prev_block_count: blocks.len(),
            paddle,
            ball,
            blocks,
        };
        state.prev_distance = state.paddle_ball_distance();
        state
    }

    /// Horizontal gap between the paddle center and the ball x
    pub fn paddle_ball_distance(&self) -> f32 {
        (self.paddle.center_x() - self.ball.pos.x).abs()
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == EpisodePhase::Terminated
    }

    /// All blocks destroyed
    pub fn is_cleared(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Build the tightly packed block grid, row-major from the top-left
pub fn generate_blocks(config: &Config) -> Vec<Block> {
    let width = config.block_width() as f32;
    let height = config.block_height as f32;
    let mut blocks = Vec::with_capacity(config.block_count());

    for row in 0..config.block_rows {
        for col in 0..config.block_cols {
            blocks.push(Block {
                id: row * config.block_cols + col,
                rect: Rect::new(col as f32 * width, row as f32 * height, width, height),
            });
        }
    }

    log::debug!(
        "Generated {} blocks ({}x{}, {}x{} px)",
        blocks.len(),
        config.block_rows,
        config.block_cols,
        width,
        height
    );
    blocks
}
