use rand::RngCore;

use crate::action::Action;

use super::{Strategy, StrategyGenerator};

/// Cooperates in the first round, then mirrors the opponent's last enacted
/// move.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitForTat;

impl Strategy for TitForTat {
    fn decide(&mut self, _own: &[Action], opponent: &[Action], _rng: &mut dyn RngCore) -> Action {
        match opponent.last() {
            Some(&last) => last,
            None => Action::Cooperate,
        }
    }

    fn name(&self) -> &str {
        "TitForTat"
    }
}

/// Default generator for `TitForTat`.
#[derive(Debug, Clone)]
pub struct TitForTatGenerator {
    name: String,
}

impl TitForTatGenerator {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for TitForTatGenerator {
    fn default() -> Self {
        Self::with_name("TitForTat")
    }
}

impl StrategyGenerator for TitForTatGenerator {
    fn generate(&self) -> Box<dyn Strategy> {
        Box::new(TitForTat)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
