//! Error types

use thiserror::Error;

/// Misuse of the environment lifecycle
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvError {
    /// `step` was called after the ball was lost without an intervening `reset`
    #[error("environment terminated: call reset() before stepping again")]
    EnvironmentTerminated,
}

/// Configuration could not be loaded or is inconsistent
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
