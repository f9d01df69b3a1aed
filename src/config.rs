//! Game configuration
//!
//! Fixed constants shared by the engine, any renderer and any agent. The
//! observation normalization depends on the field dimensions, so every party
//! must agree on the same `Config`.

use std::time::Duration;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound on the block grid size
pub const MAX_BLOCKS: u64 = 65_536;

/// Immutable configuration, built once and moved into an `Environment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Field ===
    pub field_width: u32,
    pub field_height: u32,

    // === Paddle ===
    pub paddle_width: u32,
    pub paddle_height: u32,
    /// Horizontal shift per move action
    pub paddle_speed: u32,
    /// Distance from the bottom of the field to the paddle's top edge
    pub paddle_bottom_offset: u32,

    // === Ball ===
    pub ball_radius: u32,
    /// Velocity on reset, in whole pixels per tick
    pub ball_initial_velocity: IVec2,
    /// Horizontal speed clamp applied after a paddle hit
    pub max_ball_dx: i32,

    // === Blocks ===
    pub block_rows: u32,
    pub block_cols: u32,
    pub block_height: u32,

    // === Observation / reward ===
    /// Divisor for ball velocity components in the observation
    pub velocity_scale: f32,
    pub loss_penalty: f32,
    pub block_bonus: f32,
    /// Multiplier on the paddle-to-ball distance change
    pub shaping_scale: f32,

    /// Ticks per second for real-time drivers (the engine itself is untimed)
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: 800,
            field_height: 600,

            paddle_width: 100,
            paddle_height: 10,
            paddle_speed: 30,
            paddle_bottom_offset: 30,

            ball_radius: 10,
            ball_initial_velocity: IVec2::new(4, -4),
            max_ball_dx: 7,

            block_rows: 5,
            block_cols: 10,
            block_height: 20,

            velocity_scale: 5.0,
            loss_penalty: -2.0,
            block_bonus: 5.0,
            shaping_scale: 0.01,

            tick_rate: 60,
        }
    }
}

impl Config {
    /// Parse a config from JSON. Missing fields keep their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the constants describe a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width == 0 || self.field_height == 0 {
            return Err(ConfigError::Invalid("field dimensions must be non-zero"));
        }
        if self.paddle_width == 0 || self.paddle_width > self.field_width {
            return Err(ConfigError::Invalid("paddle must fit inside the field"));
        }
        if self.ball_diameter() >= self.field_width {
            return Err(ConfigError::Invalid("ball must be narrower than the field"));
        }
        if self.paddle_bottom_offset > self.field_height {
            return Err(ConfigError::Invalid("paddle offset exceeds field height"));
        }
        if self.block_cols == 0 || self.block_cols > self.field_width {
            return Err(ConfigError::Invalid("block columns must be in 1..=field_width"));
        }
        if self.velocity_scale == 0.0 {
            return Err(ConfigError::Invalid("velocity scale must be non-zero"));
        }
        if self.max_ball_dx < 0 {
            return Err(ConfigError::Invalid("max ball dx must be non-negative"));
        }
        if self.block_rows as u64 * self.block_cols as u64 > MAX_BLOCKS {
            return Err(ConfigError::Invalid("block grid exceeds MAX_BLOCKS"));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick rate must be non-zero"));
        }
        Ok(())
    }

    /// Width of each block cell (integer division of the field width)
    #[inline]
    pub fn block_width(&self) -> u32 {
        self.field_width / self.block_cols
    }

    /// Saturates so oversized radii fail validation instead of overflowing
    #[inline]
    pub fn ball_diameter(&self) -> u32 {
        self.ball_radius.saturating_mul(2)
    }

    /// Rightmost legal paddle x
    #[inline]
    pub fn paddle_max_x(&self) -> f32 {
        (self.field_width - self.paddle_width) as f32
    }

    /// Fixed y of the paddle's top edge
    #[inline]
    pub fn paddle_y(&self) -> f32 {
        (self.field_height - self.paddle_bottom_offset) as f32
    }

    /// Divisor applied to the paddle hit offset when deflecting the ball
    #[inline]
    pub fn deflection_divisor(&self) -> i32 {
        (self.paddle_width / 10).max(1) as i32
    }

    /// Total blocks in a freshly generated grid
    #[inline]
    pub fn block_count(&self) -> usize {
        (self.block_rows as u64 * self.block_cols as u64) as usize
    }

    /// Wall-clock length of one tick for paced (human-play) drivers
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }
}
