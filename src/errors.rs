use thiserror::Error;

/// Errors from building a single match simulation.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum MatchSimulationError {
    #[error("builder needs both strategies")]
    NeedStrategies,

    #[error("a match needs at least one turn")]
    NoTurns,

    #[error("noise must be a probability in [0, 1], got {0}")]
    InvalidNoise(f64),
}

/// Errors surfaced by the tournament layer.
///
/// Strategy faults are deliberately not represented here: a strategy that
/// panics while deciding aborts only its own match, which is recorded as
/// faulted and reported in the final result instead of failing the run.
#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    #[error("aggregation invariant violated: {0}")]
    Aggregation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Result type for tournament operations.
pub type Result<T> = std::result::Result<T, TournamentError>;
