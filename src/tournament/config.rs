use serde::{Deserialize, Serialize};

use crate::action::PayoffMatrix;
use crate::errors::{Result, TournamentError};

/// Configuration for running a round-robin tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Rounds per match.
    pub turns: usize,
    /// Independent replays of each pairing.
    pub repetitions: usize,
    /// Per-round payoff constants.
    pub payoff: PayoffMatrix,
    /// Probability that each enacted move is flipped, in `[0, 1]`.
    pub noise: f64,
    /// Optional random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            turns: 200,
            repetitions: 5,
            payoff: PayoffMatrix::default(),
            noise: 0.0,
            seed: None,
        }
    }
}

impl TournamentConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration against the roster size. Runs before any
    /// match is scheduled; an invalid configuration never starts a
    /// tournament.
    pub fn validate(&self, num_players: usize) -> Result<()> {
        if num_players < 2 {
            return Err(TournamentError::InvalidConfig(format!(
                "a tournament needs at least 2 players, got {num_players}"
            )));
        }

        if self.turns == 0 {
            return Err(TournamentError::InvalidConfig(
                "turns must be positive".to_string(),
            ));
        }

        if self.repetitions == 0 {
            return Err(TournamentError::InvalidConfig(
                "repetitions must be positive".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.noise) || self.noise.is_nan() {
            return Err(TournamentError::InvalidConfig(format!(
                "noise must be a probability in [0, 1], got {}",
                self.noise
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TournamentConfig::default();
        assert_eq!(config.turns, 200);
        assert_eq!(config.repetitions, 5);
        assert_eq!(config.payoff, PayoffMatrix::new(3.0, 0.0, 5.0, 1.0));
        assert_eq!(config.noise, 0.0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = TournamentConfig::default();
        assert!(config.validate(2).is_ok());
    }

    #[test]
    fn test_validate_too_few_players() {
        let config = TournamentConfig::default();
        assert!(config.validate(1).is_err());
        assert!(config.validate(0).is_err());
    }

    #[test]
    fn test_validate_zero_turns() {
        let config = TournamentConfig {
            turns: 0,
            ..Default::default()
        };
        assert!(config.validate(3).is_err());
    }

    #[test]
    fn test_validate_zero_repetitions() {
        let config = TournamentConfig {
            repetitions: 0,
            ..Default::default()
        };
        assert!(config.validate(3).is_err());
    }

    #[test]
    fn test_validate_noise_out_of_range() {
        for noise in [-0.1, 1.1, f64::NAN] {
            let config = TournamentConfig {
                noise,
                ..Default::default()
            };
            assert!(config.validate(3).is_err(), "noise {noise} should fail");
        }
    }
}
