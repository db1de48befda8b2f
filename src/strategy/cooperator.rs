use rand::RngCore;

use crate::action::Action;

use super::{Strategy, StrategyGenerator};

/// Cooperates unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cooperator;

impl Strategy for Cooperator {
    fn decide(&mut self, _own: &[Action], _opponent: &[Action], _rng: &mut dyn RngCore) -> Action {
        Action::Cooperate
    }

    fn name(&self) -> &str {
        "Cooperator"
    }
}

/// Default generator for `Cooperator`.
#[derive(Debug, Clone)]
pub struct CooperatorGenerator {
    name: String,
}

impl CooperatorGenerator {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for CooperatorGenerator {
    fn default() -> Self {
        Self::with_name("Cooperator")
    }
}

impl StrategyGenerator for CooperatorGenerator {
    fn generate(&self) -> Box<dyn Strategy> {
        Box::new(Cooperator)
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
    fn test_always_cooperates() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut strategy = CooperatorGenerator::default().generate();

        assert_eq!(strategy.decide(&[], &[], &mut rng), Action::Cooperate);
        assert_eq!(
            strategy.decide(&[Action::Cooperate], &[Action::Defect], &mut rng),
            Action::Cooperate
        );
    }

    #[test]
    fn test_generator_uses_custom_name() {
        let generator = CooperatorGenerator::with_name("Sunshine");
        assert_eq!(generator.name(), "Sunshine");
        assert_eq!(generator.generate().name(), "Cooperator");
    }
}
