//! Training driver
//!
//! Runs episodes of an `Environment` against an `Agent`: observe, act, step,
//! record. Between episodes it trains on a batch once enough transitions are
//! stored, and syncs the target network on a fixed cadence.

use serde::{Deserialize, Serialize};

use crate::action::{Action, HeldKeys};
use crate::agent::{Agent, Transition};
use crate::env::{Environment, StepOutcome};
use crate::error::EnvError;

/// Episode loop and training cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSchedule {
    pub episodes: u32,
    pub batch_size: usize,
    /// Sync the target network every N episodes (0 disables)
    pub target_update_freq: u32,
    /// Truncate episodes that run this long (None = only ball loss or clear)
    pub max_steps_per_episode: Option<u64>,
}

impl Default for TrainingSchedule {
    fn default() -> Self {
        Self {
            episodes: 1000,
            batch_size: 32,
            target_update_freq: 10,
            max_steps_per_episode: Some(10_000),
        }
    }
}

/// How an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeOutcome {
    /// Ball fell past the paddle
    Lost,
    /// Every block destroyed
    Cleared,
    /// Step cap reached
    Truncated,
}

/// Per-episode statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// 1-based episode number
    pub episode: u32,
    pub steps: u64,
    pub total_reward: f32,
    pub blocks_destroyed: usize,
    pub outcome: EpisodeOutcome,
    pub exploration: f64,
}

/// Aggregate over a training run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingReport {
    pub episodes: Vec<EpisodeSummary>,
    pub batches_trained: u32,
    pub target_syncs: u32,
}

impl TrainingReport {
    pub fn best_return(&self) -> Option<f32> {
        self.episodes.iter().map(|e| e.total_reward).reduce(f32::max)
    }

    pub fn mean_return(&self) -> Option<f32> {
        if self.episodes.is_empty() {
            return None;
        }
        let sum: f32 = self.episodes.iter().map(|e| e.total_reward).sum();
        Some(sum / self.episodes.len() as f32)
    }

    pub fn clears(&self) -> usize {
        self.episodes
            .iter()
            .filter(|e| e.outcome == EpisodeOutcome::Cleared)
            .count()
    }
}

/// Play one episode from a fresh reset, feeding every transition to the agent
pub fn run_episode<A: Agent>(
    env: &mut Environment,
    agent: &mut A,
    episode: u32,
    max_steps: Option<u64>,
) -> Result<EpisodeSummary, EnvError> {
    let mut state = env.reset();
    let initial_blocks = env.block_count();
    let mut total_reward = 0.0;
    let mut steps = 0u64;

    let outcome = loop {
        let action = agent.select_action(&state);
        let StepOutcome { reward, done, .. } = env.step(action)?;
        let next_state = env.observe();
        steps += 1;
        total_reward += reward;

        agent.record_transition(Transition {
            state,
            action,
            reward,
            next_state,
            done,
        });
        state = next_state;

        if done {
            break EpisodeOutcome::Lost;
        }
        if env.is_cleared() {
            break EpisodeOutcome::Cleared;
        }
        if max_steps.is_some_and(|cap| steps >= cap) {
            log::warn!("Episode {} truncated after {} steps", episode, steps);
            break EpisodeOutcome::Truncated;
        }
    };

    Ok(EpisodeSummary {
        episode,
        steps,
        total_reward,
        blocks_destroyed: initial_blocks - env.block_count(),
        outcome,
        exploration: agent.exploration(),
    })
}

/// Run the full schedule
pub fn train<A: Agent>(
    env: &mut Environment,
    agent: &mut A,
    schedule: &TrainingSchedule,
) -> Result<TrainingReport, EnvError> {
    let mut report = TrainingReport::default();

    for e in 0..schedule.episodes {
        let summary = run_episode(env, agent, e + 1, schedule.max_steps_per_episode)?;
        log::info!(
            "Episode: {}/{}, reward: {:.2}, steps: {}, blocks: {}, {:?}, epsilon: {:.2}",
            summary.episode,
            schedule.episodes,
            summary.total_reward,
            summary.steps,
            summary.blocks_destroyed,
            summary.outcome,
            summary.exploration
        );
        report.episodes.push(summary);

        if agent.stored_transitions() > schedule.batch_size {
            agent.train_on_batch(schedule.batch_size);
            report.batches_trained += 1;
        }

        if schedule.target_update_freq > 0 && e % schedule.target_update_freq == 0 {
            agent.sync_target();
            report.target_syncs += 1;
        }
    }

    Ok(report)
}

/// Human play: map the held keys to an action and advance one tick
pub fn run_human_tick(env: &mut Environment, keys: HeldKeys) -> Result<StepOutcome, EnvError> {
    env.step(Action::from(keys))
}
