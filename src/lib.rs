//! Breakout RL - A minimal Breakout simulation driven as a learning environment
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, reward, observation)
//! - `env`: Episode lifecycle (`reset` / `step` / `observe`) and render accessors
//! - `config`: Immutable game configuration
//! - `action`: Discrete action space and keyboard snapshot mapping
//! - `agent`: Capability interface for external learning agents
//! - `rollout`: Training/evaluation driver

pub mod action;
pub mod agent;
pub mod config;
pub mod env;
pub mod error;
pub mod rollout;
pub mod sim;

pub use action::{Action, HeldKeys};
pub use agent::{Agent, RandomAgent, TrackingAgent, Transition};
pub use config::Config;
pub use env::{Environment, StepOutcome};
pub use error::{ConfigError, EnvError};
pub use rollout::{EpisodeOutcome, EpisodeSummary, TrainingReport, TrainingSchedule};
pub use sim::{EpisodePhase, OBSERVATION_DIM, Observation};

/// Floor division for the paddle deflection term.
///
/// Mirrors integer floor semantics for negative offsets (-5 / 10 == -1).
#[inline]
pub fn floor_div(value: f32, divisor: i32) -> i32 {
    (value / divisor.max(1) as f32).floor() as i32
}
