//! The per-pair repeated-match executor.
//!
//! A `MatchSimulation` plays a fixed number of rounds between two strategy
//! instances, optionally flipping enacted moves with a configured noise
//! probability, and produces a [`MatchResult`] with the full move sequence
//! and both cumulative scores.

use rand::{Rng, RngCore};
use tracing::trace;

use crate::action::{Action, PayoffMatrix};
use crate::errors::MatchSimulationError;
use crate::strategy::Strategy;

/// One completed match: the enacted `(a, b)` move per round plus the two
/// accumulated scores.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    moves: Vec<(Action, Action)>,
    scores: (f64, f64),
}

impl MatchResult {
    /// Assemble a result from an enacted move sequence and the two
    /// accumulated scores. Useful for replaying externally recorded
    /// matches through the aggregator.
    pub fn new(moves: Vec<(Action, Action)>, scores: (f64, f64)) -> Self {
        Self { moves, scores }
    }

    /// The enacted move sequence, first element of each pair belonging to
    /// player A.
    pub fn moves(&self) -> &[(Action, Action)] {
        &self.moves
    }

    pub fn scores(&self) -> (f64, f64) {
        self.scores
    }

    pub fn score_a(&self) -> f64 {
        self.scores.0
    }

    pub fn score_b(&self) -> f64 {
        self.scores.1
    }

    pub fn turns(&self) -> usize {
        self.moves.len()
    }
}

/// # MatchSimulationBuilder
///
/// Builder for a single repeated match between two strategies. Strategies
/// are required; turns, payoff matrix, and noise have the conventional
/// defaults (200 turns, `(3, 0, 5, 1)`, no noise).
///
/// ## Examples
///
/// ```
/// use dilemma_arena::sim::MatchSimulationBuilder;
/// use dilemma_arena::strategy::{Cooperator, TitForTat};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut sim = MatchSimulationBuilder::default()
///     .strategies(Box::new(Cooperator), Box::new(TitForTat))
///     .turns(10)
///     .build()
///     .unwrap();
/// let result = sim.run(&mut rng);
/// assert_eq!(result.scores(), (30.0, 30.0));
/// ```
pub struct MatchSimulationBuilder {
    strategies: Option<(Box<dyn Strategy>, Box<dyn Strategy>)>,
    turns: usize,
    payoff: PayoffMatrix,
    noise: f64,
}

impl MatchSimulationBuilder {
    /// Set the two fresh strategy instances for this match.
    pub fn strategies(mut self, a: Box<dyn Strategy>, b: Box<dyn Strategy>) -> Self {
        self.strategies = Some((a, b));
        self
    }

    pub fn turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    pub fn payoff(mut self, payoff: PayoffMatrix) -> Self {
        self.payoff = payoff;
        self
    }

    /// Probability that each enacted move is flipped from the decided one.
    pub fn noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn build(self) -> Result<MatchSimulation, MatchSimulationError> {
        let (strategy_a, strategy_b) = self
            .strategies
            .ok_or(MatchSimulationError::NeedStrategies)?;

        if self.turns == 0 {
            return Err(MatchSimulationError::NoTurns);
        }
        if !(0.0..=1.0).contains(&self.noise) || self.noise.is_nan() {
            return Err(MatchSimulationError::InvalidNoise(self.noise));
        }

        Ok(MatchSimulation {
            strategy_a,
            strategy_b,
            turns: self.turns,
            payoff: self.payoff,
            noise: self.noise,
        })
    }
}

impl Default for MatchSimulationBuilder {
    fn default() -> Self {
        Self {
            strategies: None,
            turns: 200,
            payoff: PayoffMatrix::default(),
            noise: 0.0,
        }
    }
}

/// A single repeated match, ready to run.
pub struct MatchSimulation {
    strategy_a: Box<dyn Strategy>,
    strategy_b: Box<dyn Strategy>,
    turns: usize,
    payoff: PayoffMatrix,
    noise: f64,
}

impl std::fmt::Debug for MatchSimulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchSimulation")
            .field("strategy_a", &self.strategy_a.name())
            .field("strategy_b", &self.strategy_b.name())
            .field("turns", &self.turns)
            .field("payoff", &self.payoff)
            .field("noise", &self.noise)
            .finish()
    }
}

impl MatchSimulation {
    /// Play every round and return the completed result.
    ///
    /// Each round both strategies decide from pre-round history, so neither
    /// sees the other's current move. Noise is applied after the decision
    /// and before scoring, and the flipped move is what lands in history;
    /// strategies are judged on enacted moves, not intentions.
    pub fn run<R: RngCore>(&mut self, rng: &mut R) -> MatchResult {
        let mut history_a: Vec<Action> = Vec::with_capacity(self.turns);
        let mut history_b: Vec<Action> = Vec::with_capacity(self.turns);
        let mut moves = Vec::with_capacity(self.turns);
        let mut scores = (0.0, 0.0);

        for _ in 0..self.turns {
            let decided_a = self.strategy_a.decide(&history_a, &history_b, rng);
            let decided_b = self.strategy_b.decide(&history_b, &history_a, rng);

            let (a, b) = if self.noise > 0.0 {
                (self.enact(decided_a, rng), self.enact(decided_b, rng))
            } else {
                (decided_a, decided_b)
            };

            let (score_a, score_b) = self.payoff.score(a, b);
            scores.0 += score_a;
            scores.1 += score_b;

            history_a.push(a);
            history_b.push(b);
            moves.push((a, b));
        }

        trace!(
            strategy_a = self.strategy_a.name(),
            strategy_b = self.strategy_b.name(),
            turns = self.turns,
            score_a = scores.0,
            score_b = scores.1,
            "match complete"
        );

        MatchResult { moves, scores }
    }

    fn enact<R: RngCore>(&self, decided: Action, rng: &mut R) -> Action {
        if rng.random_bool(self.noise) {
            decided.flip()
        } else {
            decided
        }
    }
}
