use rand::{Rng, RngCore};

use crate::action::Action;

use super::{Strategy, StrategyGenerator};

/// Cooperates with a fixed probability on every round, independent of
/// history. The default leans cooperative at 80/20.
///
/// Draws come from the match-scoped RNG, so runs with the same tournament
/// seed reproduce the same sequence of moves.
#[derive(Debug, Clone, Copy)]
pub struct Random {
    p_cooperate: f64,
}

impl Random {
    /// `p_cooperate` must be a probability in `[0, 1]`; values outside the
    /// range would panic at decision time.
    pub fn new(p_cooperate: f64) -> Self {
        Self { p_cooperate }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl Strategy for Random {
    fn decide(&mut self, _own: &[Action], _opponent: &[Action], rng: &mut dyn RngCore) -> Action {
        if rng.random_bool(self.p_cooperate) {
            Action::Cooperate
        } else {
            Action::Defect
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Generator for `Random` with a configurable cooperation probability.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    name: String,
    p_cooperate: f64,
}

impl RandomGenerator {
    pub fn new(p_cooperate: f64) -> Self {
        Self {
            name: "Random".to_string(),
            p_cooperate,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl StrategyGenerator for RandomGenerator {
    fn generate(&self) -> Box<dyn Strategy> {
        Box::new(Random::new(self.p_cooperate))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_extremes_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut always = Random::new(1.0);
        let mut never = Random::new(0.0);
        for _ in 0..20 {
            assert_eq!(always.decide(&[], &[], &mut rng), Action::Cooperate);
            assert_eq!(never.decide(&[], &[], &mut rng), Action::Defect);
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let moves = |seed: u64| -> Vec<Action> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut strategy = Random::default();
            (0..50).map(|_| strategy.decide(&[], &[], &mut rng)).collect()
        };

        assert_eq!(moves(42), moves(42));
    }

    #[test]
    fn test_default_leans_cooperative() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut strategy = Random::default();
        let cooperations = (0..1000)
            .filter(|_| strategy.decide(&[], &[], &mut rng).is_cooperate())
            .count();

        // 80% of 1000 with a generous band.
        assert!(
            (700..=900).contains(&cooperations),
            "expected roughly 800 cooperations, got {cooperations}"
        );
    }

    #[test]
    fn test_generator_carries_probability() {
        let mut rng = StdRng::seed_from_u64(7);
        let generator = RandomGenerator::new(0.0).with_name("Chaos");
        assert_eq!(generator.name(), "Chaos");

        let mut strategy = generator.generate();
        assert_eq!(strategy.decide(&[], &[], &mut rng), Action::Defect);
    }
}
