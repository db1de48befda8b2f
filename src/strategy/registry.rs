//! Static registry of the built-in strategies.
//!
//! Strategies are named, statically registered variants rather than code
//! loaded at runtime; adding a new one means adding a generator here.

use super::{
    CooperatorGenerator, DefectorGenerator, GrudgerGenerator, RandomGenerator,
    RetaliatorGenerator, StrategyGenerator, TitForTatGenerator,
};

/// Names of every registered strategy, in registry order.
pub fn strategy_names() -> Vec<&'static str> {
    vec![
        "Cooperator",
        "Defector",
        "TitForTat",
        "Grudger",
        "Random",
        "Retaliator",
    ]
}

/// Look up a registered strategy by name.
///
/// Returns `None` for unknown names so callers can report which submitted
/// name was bad instead of aborting a whole roster.
pub fn generator_for(name: &str) -> Option<Box<dyn StrategyGenerator>> {
    match name {
        "Cooperator" => Some(Box::new(CooperatorGenerator::default())),
        "Defector" => Some(Box::new(DefectorGenerator::default())),
        "TitForTat" => Some(Box::new(TitForTatGenerator::default())),
        "Grudger" => Some(Box::new(GrudgerGenerator::default())),
        "Random" => Some(Box::new(RandomGenerator::default())),
        "Retaliator" => Some(Box::new(RetaliatorGenerator::default())),
        _ => None,
    }
}

/// The full built-in roster, one generator per registered strategy.
pub fn classic_roster() -> Vec<Box<dyn StrategyGenerator>> {
    strategy_names()
        .into_iter()
        .filter_map(generator_for)
        .collect()
}
