//! # Dilemma Arena
//!
//! A library for running iterated prisoner's dilemma matches and
//! round-robin tournaments between pluggable strategies.
//!
//! The crate is split into a few layers:
//!
//! - [`action`] holds the per-round move and the payoff matrix.
//! - [`strategy`] defines the [`strategy::Strategy`] trait, a registry of
//!   classic strategies, and [`strategy::StrategyGenerator`] for minting a
//!   fresh stateful instance per match.
//! - [`sim`] plays a single repeated match between two strategies, with
//!   optional execution noise.
//! - [`tournament`] schedules every pairing (self-play included) across a
//!   worker pool, aggregates the outcomes, and ranks the players.
//!
//! ## Quick start
//!
//! ```
//! use dilemma_arena::strategy::classic_roster;
//! use dilemma_arena::tournament::{self, TournamentConfig};
//!
//! let config = TournamentConfig {
//!     turns: 20,
//!     repetitions: 2,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let result = tournament::run(classic_roster(), config).unwrap();
//! for summary in result.rankings() {
//!     println!("{}. {} ({:.1})", summary.rank, summary.name, summary.total_score);
//! }
//! ```

pub mod action;
pub mod errors;
pub mod sim;
pub mod strategy;
pub mod tournament;
