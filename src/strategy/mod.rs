//! `Strategy`s are the automatic players in the dilemma simulations. They
//! carry the decision logic and any private per-match state.
//!
//! The classic roster is provided as a way of testing baseline behavior.
mod cooperator;
mod defector;
mod grudger;
mod random;
mod registry;
mod retaliator;
mod tit_for_tat;

use rand::RngCore;

use crate::action::Action;

/// This is the trait that you need to implement in order to add a new
/// strategy. It's up to you to implement the logic and state.
///
/// Both histories hold enacted moves only, in round order, for the current
/// match; neither includes the round being decided. Any private state a
/// strategy keeps lives for one match and is never shared, since every match
/// gets a fresh instance from a [`StrategyGenerator`].
pub trait Strategy {
    /// Decide the next move given this player's own enacted history and the
    /// opponent's. Stochastic strategies draw from `rng`, which is scoped to
    /// the current match and deterministically seeded.
    fn decide(&mut self, own: &[Action], opponent: &[Action], rng: &mut dyn RngCore) -> Action;

    fn name(&self) -> &str;
}

/// `StrategyGenerator` is used to mint strategies for tournaments where each
/// match needs a fresh instance with independent state.
pub trait StrategyGenerator: Send + Sync {
    /// Called before each match to build a new strategy instance.
    fn generate(&self) -> Box<dyn Strategy>;

    /// The display name used for this player in results.
    fn name(&self) -> &str;
}

pub use cooperator::{Cooperator, CooperatorGenerator};
pub use defector::{Defector, DefectorGenerator};
pub use grudger::{Grudger, GrudgerGenerator};
pub use random::{Random, RandomGenerator};
pub use registry::{classic_roster, generator_for, strategy_names};
pub use retaliator::{Retaliator, RetaliatorGenerator};
pub use tit_for_tat::{TitForTat, TitForTatGenerator};
