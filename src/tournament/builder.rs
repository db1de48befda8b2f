use crate::errors::Result;
use crate::strategy::StrategyGenerator;

use super::config::TournamentConfig;
use super::runner::Tournament;

/// # TournamentBuilder
///
/// Builder for a round-robin tournament. Collect a roster of strategy
/// generators, tweak the configuration, and call [`TournamentBuilder::build`]
/// to validate everything and get a runnable [`Tournament`].
///
/// ## Examples
///
/// ```
/// use dilemma_arena::strategy::{CooperatorGenerator, DefectorGenerator};
/// use dilemma_arena::tournament::TournamentBuilder;
///
/// let tournament = TournamentBuilder::new()
///     .turns(10)
///     .repetitions(2)
///     .seed(42)
///     .add_strategy(CooperatorGenerator::default())
///     .add_strategy(DefectorGenerator::default())
///     .build()
///     .unwrap();
/// let result = tournament.run().unwrap();
/// assert!(result.is_complete());
/// ```
#[derive(Default)]
pub struct TournamentBuilder {
    config: TournamentConfig,
    roster: Vec<Box<dyn StrategyGenerator>>,
}

impl TournamentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration at once.
    pub fn config(mut self, config: TournamentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn turns(mut self, turns: usize) -> Self {
        self.config.turns = turns;
        self
    }

    pub fn repetitions(mut self, repetitions: usize) -> Self {
        self.config.repetitions = repetitions;
        self
    }

    pub fn payoff(mut self, payoff: crate::action::PayoffMatrix) -> Self {
        self.config.payoff = payoff;
        self
    }

    pub fn noise(mut self, noise: f64) -> Self {
        self.config.noise = noise;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Add one strategy to the roster.
    pub fn add_strategy<G: StrategyGenerator + 'static>(mut self, generator: G) -> Self {
        self.roster.push(Box::new(generator));
        self
    }

    /// Replace the roster with an already-boxed list of generators.
    pub fn strategies(mut self, roster: Vec<Box<dyn StrategyGenerator>>) -> Self {
        self.roster = roster;
        self
    }

    /// Validate the configuration against the roster and build the
    /// tournament. Fails fast on an invalid configuration so no match is
    /// ever scheduled from one.
    pub fn build(self) -> Result<Tournament> {
        self.config.validate(self.roster.len())?;
        Ok(Tournament::new(self.config, self.roster))
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::TournamentError;
    use crate::strategy::{classic_roster, CooperatorGenerator, DefectorGenerator};

    use super::*;

    #[test]
    fn test_build_with_valid_roster() {
        let tournament = TournamentBuilder::new()
            .add_strategy(CooperatorGenerator::default())
            .add_strategy(DefectorGenerator::default())
            .build()
            .unwrap();

        assert_eq!(tournament.num_players(), 2);
        assert_eq!(tournament.config().turns, 200);
        assert_eq!(tournament.config().repetitions, 5);
    }

    #[test]
    fn test_build_rejects_small_roster() {
        let err = TournamentBuilder::new()
            .add_strategy(CooperatorGenerator::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, TournamentError::InvalidConfig(_)));
    }

    #[test]
    fn test_build_rejects_invalid_noise() {
        let err = TournamentBuilder::new()
            .noise(2.0)
            .add_strategy(CooperatorGenerator::default())
            .add_strategy(DefectorGenerator::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, TournamentError::InvalidConfig(_)));
    }

    #[test]
    fn test_strategies_replaces_roster() {
        let tournament = TournamentBuilder::new()
            .strategies(classic_roster())
            .build()
            .unwrap();
        assert_eq!(
            tournament.num_players(),
            crate::strategy::strategy_names().len()
        );
    }

    #[test]
    fn test_config_replaces_everything() {
        let config = TournamentConfig {
            turns: 7,
            repetitions: 2,
            noise: 0.25,
            seed: Some(11),
            ..Default::default()
        };
        let tournament = TournamentBuilder::new()
            .config(config)
            .add_strategy(CooperatorGenerator::default())
            .add_strategy(DefectorGenerator::default())
            .build()
            .unwrap();

        assert_eq!(tournament.config().turns, 7);
        assert_eq!(tournament.config().seed, Some(11));
        assert_eq!(tournament.total_matches(), 6);
    }
}
