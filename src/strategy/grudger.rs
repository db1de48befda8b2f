use rand::RngCore;

use crate::action::Action;

use super::{Strategy, StrategyGenerator};

/// Cooperates until the opponent's first defection, then defects for the
/// rest of the match.
///
/// The trigger is latched in private state, so a later run of cooperation
/// from the opponent does not reset it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grudger {
    provoked: bool,
}

impl Strategy for Grudger {
    fn decide(&mut self, _own: &[Action], opponent: &[Action], _rng: &mut dyn RngCore) -> Action {
        if opponent.last() == Some(&Action::Defect) {
            self.provoked = true;
        }
        if self.provoked {
            Action::Defect
        } else {
            Action::Cooperate
        }
    }

    fn name(&self) -> &str {
        "Grudger"
    }
}

/// Default generator for `Grudger`.
#[derive(Debug, Clone)]
pub struct GrudgerGenerator {
    name: String,
}

impl GrudgerGenerator {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for GrudgerGenerator {
    fn default() -> Self {
        Self::with_name("Grudger")
    }
}

impl StrategyGenerator for GrudgerGenerator {
    fn generate(&self) -> Box<dyn Strategy> {
        Box::new(Grudger::default())
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
    fn test_cooperates_until_provoked() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut strategy = Grudger::default();

        assert_eq!(strategy.decide(&[], &[], &mut rng), Action::Cooperate);
        assert_eq!(
            strategy.decide(&[Action::Cooperate], &[Action::Cooperate], &mut rng),
            Action::Cooperate
        );
    }

    #[test]
    fn test_defection_is_latched() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut strategy = Grudger::default();

        assert_eq!(
            strategy.decide(&[Action::Cooperate], &[Action::Defect], &mut rng),
            Action::Defect
        );
        // Opponent returning to cooperation does not unlatch the grudge.
        assert_eq!(
            strategy.decide(
                &[Action::Cooperate, Action::Defect],
                &[Action::Defect, Action::Cooperate],
                &mut rng
            ),
            Action::Defect
        );
    }

    #[test]
    fn test_fresh_instance_forgets_the_grudge() {
        let mut rng = StdRng::seed_from_u64(7);
        let generator = GrudgerGenerator::default();

        let mut first = generator.generate();
        first.decide(&[Action::Cooperate], &[Action::Defect], &mut rng);

        // A new match gets a new instance with no carried-over state.
        let mut second = generator.generate();
        assert_eq!(second.decide(&[], &[], &mut rng), Action::Cooperate);
    }
}
