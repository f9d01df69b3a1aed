//! Fixed timestep simulation tick
//!
//! Advances the game state by exactly one tick, in order: paddle move, ball
//! advance, wall bounce, paddle bounce, block hit, reward, cache refresh.

use super::collision::{block_collision, bounce_walls, paddle_collision};
use super::reward::{RewardInput, compute_reward};
use super::state::{EpisodePhase, GameState};
use crate::action::Action;
use crate::config::Config;

/// What happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    pub reward: f32,
    pub done: bool,
    /// Id of the block destroyed this tick, if any
    pub destroyed_block: Option<u32>,
    pub paddle_hit: bool,
}

/// Advance a running game state by one tick.
///
/// A terminated state is left untouched and reports `done` with zero reward.
pub fn tick(state: &mut GameState, config: &Config, action: Action) -> TickResult {
    if state.is_terminated() {
        return TickResult {
            reward: 0.0,
            done: true,
            destroyed_block: None,
            paddle_hit: false,
        };
    }
    state.time_ticks += 1;

    // Paddle
    state.paddle.shift(
        action.direction(),
        config.paddle_speed as f32,
        config.paddle_max_x(),
    );

    // Ball
    state.ball.advance();
    bounce_walls(&mut state.ball, config);
    let paddle_hit = paddle_collision(&mut state.ball, &state.paddle, config);
    let destroyed = block_collision(&mut state.ball, &mut state.blocks);
    if let Some(block) = &destroyed {
        log::debug!(
            "Tick {}: block {} destroyed, {} left",
            state.time_ticks,
            block.id,
            state.blocks.len()
        );
    }

    // Reward
    let current_distance = state.paddle_ball_distance();
    let outcome = compute_reward(
        &RewardInput {
            ball_lost: state.ball.pos.y > config.field_height as f32,
            prev_block_count: state.prev_block_count,
            block_count: state.blocks.len(),
            prev_distance: state.prev_distance,
            current_distance,
        },
        config,
    );

    state.prev_distance = current_distance;
    state.prev_block_count = state.blocks.len();

    if outcome.done {
        state.phase = EpisodePhase::Terminated;
        log::debug!(
            "Tick {}: ball lost at ({}, {})",
            state.time_ticks,
            state.ball.pos.x,
            state.ball.pos.y
        );
    }

    TickResult {
        reward: outcome.reward,
        done: outcome.done,
        destroyed_block: destroyed.map(|b| b.id),
        paddle_hit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{IVec2, Vec2};

    #[test]
    fn test_first_tick_from_reset() {
        let config = Config::default();
        let mut state = GameState::new(&config);

        let result = tick(&mut state, &config, Action::Hold);

        assert_eq!(state.ball.pos, Vec2::new(404.0, 296.0));
        assert_eq!(state.ball.vel, IVec2::new(4, -4));
        assert!(!result.done);
        assert!(result.destroyed_block.is_none());
        // Gap grew from 0 to 4
        assert!((result.reward + 0.04).abs() < 1e-6);
        assert_eq!(state.prev_distance, 4.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_paddle_moves_before_reward() {
        let config = Config::default();
        let mut state = GameState::new(&config);

        let result = tick(&mut state, &config, Action::MoveRight);
        assert_eq!(state.paddle.x, 380.0);
        // Gap went from 0 to |430 - 404| = 26
        assert!((result.reward + 0.26).abs() < 1e-6);
    }

    #[test]
    fn test_determinism() {
        // Identical action sequences produce identical states
        let config = Config::default();
        let mut state1 = GameState::new(&config);
        let mut state2 = GameState::new(&config);

        let actions = [Action::MoveLeft, Action::Hold, Action::MoveRight, Action::MoveRight];
        for i in 0..400 {
            if state1.is_terminated() {
                break;
            }
            let action = actions[i % actions.len()];
            let r1 = tick(&mut state1, &config, action);
            let r2 = tick(&mut state2, &config, action);
            assert_eq!(r1, r2);
        }

        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.blocks.len(), state2.blocks.len());
        assert_eq!(state1.phase, state2.phase);
    }

    #[test]
    fn test_loss_terminates() {
        let config = Config::default();
        let mut state = GameState::new(&config);
        state.ball.pos = Vec2::new(100.0, 597.0);
        state.ball.vel = IVec2::new(0, 4);
        state.prev_distance = state.paddle_ball_distance();

        let result = tick(&mut state, &config, Action::Hold);
        assert_eq!(state.ball.pos.y, 601.0);
        assert_eq!(result.reward, -2.0);
        assert!(result.done);
        assert_eq!(state.phase, EpisodePhase::Terminated);
    }

    #[test]
    fn test_terminated_state_does_not_advance() {
        let config = Config::default();
        let mut state = GameState::new(&config);
        state.ball.pos = Vec2::new(100.0, 597.0);
        state.ball.vel = IVec2::new(0, 4);
        assert!(tick(&mut state, &config, Action::Hold).done);

        let ticks = state.time_ticks;
        let result = tick(&mut state, &config, Action::MoveLeft);
        assert!(result.done);
        assert_eq!(result.reward, 0.0);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.ball.pos, Vec2::new(100.0, 601.0));
        assert_eq!(state.paddle.x, 350.0);
    }
}
