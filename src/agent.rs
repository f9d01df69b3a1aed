//! Agent capability interface
//!
//! The engine knows nothing about learning algorithms. A driver connects an
//! `Environment` to anything implementing `Agent`: it asks for actions,
//! hands back transitions, and schedules training and target syncs.
//!
//! Two algorithm-free baselines live here for demos and smoke tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::action::{ACTION_COUNT, Action};
use crate::config::Config;
use crate::sim::Observation;

/// One experience tuple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub state: Observation,
    pub action: Action,
    pub reward: f32,
    pub next_state: Observation,
    pub done: bool,
}

/// What a driver needs from a learning agent
pub trait Agent {
    /// Pick the action for the current observation
    fn select_action(&mut self, observation: &Observation) -> Action;

    /// Store one experience tuple
    fn record_transition(&mut self, _transition: Transition) {}

    /// Run one training pass over a sampled batch
    fn train_on_batch(&mut self, _batch_size: usize) {}

    /// Copy online weights into the target network
    fn sync_target(&mut self) {}

    /// Transitions currently held for replay
    fn stored_transitions(&self) -> usize {
        0
    }

    /// Current exploration rate, reported in episode summaries
    fn exploration(&self) -> f64 {
        0.0
    }
}

/// Heuristic: steer the paddle center toward where the ball is heading
#[derive(Debug, Clone)]
pub struct TrackingAgent {
    /// Ignore gaps smaller than this (normalized by field width)
    dead_zone: f32,
    /// Ticks of ball motion to lead by
    lead_ticks: f32,
    velocity_scale: f32,
    field_width: f32,
}

impl TrackingAgent {
    pub fn new(config: &Config) -> Self {
        Self {
            dead_zone: config.paddle_speed as f32 / 2.0 / config.field_width as f32,
            lead_ticks: 2.0,
            velocity_scale: config.velocity_scale,
            field_width: config.field_width as f32,
        }
    }

    /// Set how many ticks ahead to aim
    pub fn with_lead(mut self, lead_ticks: f32) -> Self {
        self.lead_ticks = lead_ticks;
        self
    }
}

impl Agent for TrackingAgent {
    fn select_action(&mut self, observation: &Observation) -> Action {
        let dx = observation[3] * self.velocity_scale;
        let gap = observation[5] + dx * self.lead_ticks / self.field_width;

        if gap > self.dead_zone {
            Action::MoveRight
        } else if gap < -self.dead_zone {
            Action::MoveLeft
        } else {
            Action::Hold
        }
    }
}

/// Uniformly random actions from a seeded RNG
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: Pcg32,
    seen: usize,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seen: 0,
        }
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, _observation: &Observation) -> Action {
        Action::from(self.rng.random_range(0..ACTION_COUNT))
    }

    fn record_transition(&mut self, _transition: Transition) {
        self.seen += 1;
    }

    fn stored_transitions(&self) -> usize {
        self.seen
    }

    fn exploration(&self) -> f64 {
        1.0
    }
}
