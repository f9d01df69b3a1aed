//! Reward shaping
//!
//! Pure function of the pre/post tick measurements. Precedence:
//! 1. Ball lost: exactly `loss_penalty`, episode done.
//! 2. Otherwise `block_bonus` if the block count dropped, plus the dense
//!    shaping term `(prev_distance - current_distance) * shaping_scale`.
//!
//! A full clear earns nothing extra; drivers end the episode on their own.

use crate::config::Config;

/// Measurements taken around one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardInput {
    pub ball_lost: bool,
    pub prev_block_count: usize,
    pub block_count: usize,
    pub prev_distance: f32,
    pub current_distance: f32,
}

/// Reward for the tick and whether it ended the episode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardOutcome {
    pub reward: f32,
    pub done: bool,
}

pub fn compute_reward(input: &RewardInput, config: &Config) -> RewardOutcome {
    if input.ball_lost {
        return RewardOutcome {
            reward: config.loss_penalty,
            done: true,
        };
    }

    let mut reward = 0.0;
    if input.block_count < input.prev_block_count {
        reward += config.block_bonus;
    }
    reward += (input.prev_distance - input.current_distance) * config.shaping_scale;

    RewardOutcome {
        reward,
        done: false,
    }
}
