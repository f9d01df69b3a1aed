//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per step, no wall-clock time
//! - Integer velocities, float positions
//! - Stable block iteration order (creation order)
//! - No rendering, input or agent dependencies

pub mod collision;
pub mod geometry;
pub mod observe;
pub mod reward;
pub mod state;
pub mod tick;

pub use collision::{WallBounce, block_collision, bounce_walls, first_block_hit, paddle_collision};
pub use geometry::Rect;
pub use observe::{OBSERVATION_DIM, Observation, encode};
pub use reward::{RewardInput, RewardOutcome, compute_reward};
pub use state::{Ball, Block, EpisodePhase, GameState, Paddle, generate_blocks};
pub use tick::{TickResult, tick};
