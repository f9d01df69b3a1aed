//! Learning environment
//!
//! Owns the configuration and the episode state. Drivers call `observe`,
//! pick an action, call `step`, and react to the reward/done pair. Rendering
//! layers read the accessors after `step` returns and never mutate anything.

use glam::{IVec2, Vec2};

use crate::action::Action;
use crate::config::Config;
use crate::error::{ConfigError, EnvError};
use crate::sim::{self, Block, EpisodePhase, GameState, Observation, Rect};

/// Result of one `step`
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub reward: f32,
    /// Ball lost; the environment must be reset before stepping again
    pub done: bool,
    /// Block destroyed on this tick, if any
    pub destroyed_block: Option<u32>,
    pub paddle_hit: bool,
}

/// A single Breakout environment instance
#[derive(Debug, Clone)]
pub struct Environment {
    config: Config,
    state: GameState,
}

impl Environment {
    /// Validate the config and start the first episode
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        Ok(Self { config, state })
    }

    /// Start a new episode and return its first observation
    pub fn reset(&mut self) -> Observation {
        self.state = GameState::new(&self.config);
        log::debug!(
            "Episode reset: {} blocks, ball at ({}, {})",
            self.state.blocks.len(),
            self.state.ball.pos.x,
            self.state.ball.pos.y
        );
        self.observe()
    }

    /// Advance one tick.
    ///
    /// Stepping a terminated episode is rejected with
    /// `EnvError::EnvironmentTerminated` and leaves the state untouched.
    pub fn step(&mut self, action: Action) -> Result<StepOutcome, EnvError> {
        if self.state.is_terminated() {
            return Err(EnvError::EnvironmentTerminated);
        }

        let result = sim::tick(&mut self.state, &self.config, action);
        Ok(StepOutcome {
            reward: result.reward,
            done: result.done,
            destroyed_block: result.destroyed_block,
            paddle_hit: result.paddle_hit,
        })
    }

    /// Step with a raw action index; out-of-range indices hold
    pub fn step_index(&mut self, index: i64) -> Result<StepOutcome, EnvError> {
        self.step(Action::from_index(index))
    }

    /// Current normalized observation
    pub fn observe(&self) -> Observation {
        sim::encode(&self.state, &self.config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read-only view of the whole episode state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> EpisodePhase {
        self.state.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }

    /// Every block destroyed. No reward is attached; drivers end the episode.
    pub fn is_cleared(&self) -> bool {
        self.state.is_cleared()
    }

    /// Ticks since the last reset
    pub fn tick_count(&self) -> u64 {
        self.state.time_ticks
    }

    pub fn block_count(&self) -> usize {
        self.state.blocks.len()
    }

    // === Render accessors ===

    pub fn paddle_rect(&self) -> Rect {
        self.state.paddle.rect()
    }

    pub fn ball_center(&self) -> Vec2 {
        self.state.ball.center()
    }

    pub fn ball_radius(&self) -> f32 {
        self.state.ball.radius
    }

    /// Remaining blocks in creation order
    pub fn blocks(&self) -> &[Block] {
        &self.state.blocks
    }

    pub fn block_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.state.blocks.iter().map(|b| b.rect)
    }

    // === Scripted scenarios ===

    /// Teleport the ball (scripted scenarios, curriculum starts).
    ///
    /// Refreshes the cached paddle distance so the next tick's shaping term
    /// only measures movement from the new position.
    pub fn place_ball(&mut self, pos: Vec2, vel: IVec2) {
        self.state.ball.pos = pos;
        self.state.ball.vel = vel;
        self.state.prev_distance = self.state.paddle_ball_distance();
    }

    /// Move the paddle's left edge, clamped to the field
    pub fn place_paddle(&mut self, x: f32) {
        self.state.paddle.x = x.clamp(0.0, self.config.paddle_max_x());
        self.state.prev_distance = self.state.paddle_ball_distance();
    }
}

impl Default for Environment {
    fn default() -> Self {
        let config = Config::default();
        let state = GameState::new(&config);
        Self { config, state }
    }
}
