use rand::RngCore;

use crate::action::Action;

use super::{Strategy, StrategyGenerator};

/// Defects unconditionally, regardless of the opponent's history.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defector;

impl Strategy for Defector {
    fn decide(&mut self, _own: &[Action], _opponent: &[Action], _rng: &mut dyn RngCore) -> Action {
        Action::Defect
    }

    fn name(&self) -> &str {
        "Defector"
    }
}

/// Default generator for `Defector`.
#[derive(Debug, Clone)]
pub struct DefectorGenerator {
    name: String,
}

impl DefectorGenerator {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for DefectorGenerator {
    fn default() -> Self {
        Self::with_name("Defector")
    }
}

impl StrategyGenerator for DefectorGenerator {
    fn generate(&self) -> Box<dyn Strategy> {
        Box::new(Defector)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
