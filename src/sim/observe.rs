//! Observation encoding for agents
//!
//! Layout (fixed, part of the agent contract):
//! `[paddle_x/W, ball_x/W, ball_y/H, dx/scale, dy/scale, (ball_x - paddle_center)/W]`

use super::state::GameState;
use crate::config::Config;

/// Length of the observation vector
pub const OBSERVATION_DIM: usize = 6;

/// Normalized state vector
pub type Observation = [f32; OBSERVATION_DIM];

pub fn encode(state: &GameState, config: &Config) -> Observation {
    let width = config.field_width as f32;
    let height = config.field_height as f32;
    let ball = &state.ball;

    [
        state.paddle.x / width,
        ball.pos.x / width,
        ball.pos.y / height,
        ball.vel.x as f32 / config.velocity_scale,
        ball.vel.y as f32 / config.velocity_scale,
        (ball.pos.x - state.paddle.center_x()) / width,
    ]
}
