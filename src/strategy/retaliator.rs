use rand::RngCore;

use crate::action::Action;

use super::{Strategy, StrategyGenerator};

/// Cooperates first. Defects only in the round immediately after its own
/// cooperation was met with a defection, then returns to cooperation to try
/// to re-establish a cooperative phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct Retaliator;

impl Strategy for Retaliator {
    fn decide(&mut self, own: &[Action], opponent: &[Action], _rng: &mut dyn RngCore) -> Action {
        match (own.last(), opponent.last()) {
            (Some(&Action::Cooperate), Some(&Action::Defect)) => Action::Defect,
            _ => Action::Cooperate,
        }
    }

    fn name(&self) -> &str {
        "Retaliator"
    }
}

/// Default generator for `Retaliator`.
#[derive(Debug, Clone)]
pub struct RetaliatorGenerator {
    name: String,
}

impl RetaliatorGenerator {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for RetaliatorGenerator {
    fn default() -> Self {
        Self::with_name("Retaliator")
    }
}

impl StrategyGenerator for RetaliatorGenerator {
    fn generate(&self) -> Box<dyn Strategy> {
        Box::new(Retaliator)
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
    fn test_punishes_betrayal_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut strategy = Retaliator;

        assert_eq!(strategy.decide(&[], &[], &mut rng), Action::Cooperate);
        // Cooperated and got defected on: retaliate.
        assert_eq!(
            strategy.decide(&[Action::Cooperate], &[Action::Defect], &mut rng),
            Action::Defect
        );
        // Own last move was a defection: revert to cooperation.
        assert_eq!(
            strategy.decide(
                &[Action::Cooperate, Action::Defect],
                &[Action::Defect, Action::Defect],
                &mut rng
            ),
            Action::Cooperate
        );
    }

    #[test]
    fn test_keeps_cooperating_in_peace() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut strategy = Retaliator;

        assert_eq!(
            strategy.decide(&[Action::Cooperate], &[Action::Cooperate], &mut rng),
            Action::Cooperate
        );
    }
}
