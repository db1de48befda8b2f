//! Round-robin tournament scheduling, execution, and aggregation.
//!
//! A tournament plays every unordered pairing of a roster (self-play
//! included) for a configured number of repetitions, runs the matches on a
//! rayon worker pool, and reduces the outcomes into ranked per-player
//! summaries.
//!
//! The usual entry points are [`TournamentBuilder`] for full control, or
//! [`run`] when a roster and a config are all you have:
//!
//! ```
//! use dilemma_arena::strategy::classic_roster;
//! use dilemma_arena::tournament::{self, TournamentConfig};
//!
//! let config = TournamentConfig {
//!     turns: 10,
//!     repetitions: 1,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let result = tournament::run(classic_roster(), config).unwrap();
//! assert!(result.is_complete());
//! println!("{}", result.to_markdown());
//! ```

mod builder;
mod config;
mod results;
mod runner;

pub use builder::TournamentBuilder;
pub use config::TournamentConfig;
pub use results::{PlayerSummary, ResultsBuilder, TournamentResult};
pub use runner::{CancellationToken, MatchOutcome, MatchRecord, Tournament};

use crate::errors::Result;
use crate::strategy::StrategyGenerator;

/// Run a full tournament over `roster` with `config` and return the ranked
/// result. Convenience facade over [`TournamentBuilder`].
pub fn run(
    roster: Vec<Box<dyn StrategyGenerator>>,
    config: TournamentConfig,
) -> Result<TournamentResult> {
    TournamentBuilder::new()
        .config(config)
        .strategies(roster)
        .build()?
        .run()
}
