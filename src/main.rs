//! Breakout RL headless driver
//!
//! Runs the training loop against a baseline agent and prints the report as
//! JSON. An optional first argument names a JSON config file.

use std::error::Error;

use breakout_rl::rollout::{self, TrainingSchedule};
use breakout_rl::{Config, Environment, TrackingAgent};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout RL (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            log::info!("Loaded config from {}", path);
            Config::from_json(&json)?
        }
        None => Config::default(),
    };

    let schedule = TrainingSchedule {
        episodes: 10,
        ..Default::default()
    };

    let tick_interval = config.tick_interval();
    let mut agent = TrackingAgent::new(&config);
    let mut env = Environment::new(config)?;
    let report = rollout::train(&mut env, &mut agent, &schedule)?;

    log::info!(
        "Done: {} episodes, best {:.2}, mean {:.2}, {} clears",
        report.episodes.len(),
        report.best_return().unwrap_or_default(),
        report.mean_return().unwrap_or_default(),
        report.clears()
    );
    let ticks: u64 = report.episodes.iter().map(|e| e.steps).sum();
    log::info!(
        "Simulated {:.1}s of play at {} ticks/s",
        tick_interval.as_secs_f64() * ticks as f64,
        env.config().tick_rate
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
