use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use tracing::event;

use crate::errors::{MatchSimulationError, Result};
use crate::sim::{MatchResult, MatchSimulationBuilder};
use crate::strategy::StrategyGenerator;

use super::config::TournamentConfig;
use super::results::{ResultsBuilder, TournamentResult};

/// How one scheduled match ended.
#[derive(Debug, Clone)]
pub enum MatchOutcome {
    Completed(MatchResult),
    /// The match was aborted by a strategy fault; the payload is the panic
    /// message. Faulted matches are excluded from scoring.
    Faulted(String),
}

/// One scheduled match's result, tagged with the pairing it came from.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    /// Roster indices `(i, j)` with `i <= j`; `i == j` is self-play.
    pub pair: (usize, usize),
    /// Which repetition of this pairing the match was.
    pub repetition: usize,
    pub outcome: MatchOutcome,
}

/// Cooperative cancellation flag for a running tournament.
///
/// Cancelling stops dispatch of not-yet-started matches; matches already in
/// flight finish normally. The returned result is then marked incomplete.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy)]
struct MatchJob {
    pair: (usize, usize),
    repetition: usize,
    /// Global index across the whole schedule, used to derive the
    /// match-scoped RNG seed.
    match_index: usize,
}

/// Runs a full round-robin tournament over a roster of strategies.
///
/// Every unordered pairing `{i, j}` with `i <= j` is played, so each player
/// also meets an independent fresh copy of itself. Matches are independent
/// and are dispatched across a rayon worker pool; each gets its own
/// `StdRng` seeded from the tournament seed plus the match index, so a
/// seeded run is reproducible regardless of scheduling order.
pub struct Tournament {
    config: TournamentConfig,
    roster: Vec<Box<dyn StrategyGenerator>>,
}

impl std::fmt::Debug for Tournament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tournament")
            .field("config", &self.config)
            .field(
                "roster",
                &self.roster.iter().map(|g| g.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Tournament {
    /// Create a new Tournament (internal - use TournamentBuilder instead).
    pub(crate) fn new(config: TournamentConfig, roster: Vec<Box<dyn StrategyGenerator>>) -> Self {
        Self { config, roster }
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn num_players(&self) -> usize {
        self.roster.len()
    }

    pub fn player_names(&self) -> Vec<String> {
        self.roster.iter().map(|g| g.name().to_string()).collect()
    }

    /// Unordered pairings including self-play once: `N(N+1)/2`.
    pub fn pair_count(&self) -> usize {
        let n = self.roster.len();
        n * (n + 1) / 2
    }

    /// Matches in the full schedule: `pair_count × repetitions`.
    pub fn total_matches(&self) -> usize {
        self.pair_count() * self.config.repetitions
    }

    /// Run the whole schedule and aggregate the results.
    pub fn run(&self) -> Result<TournamentResult> {
        self.run_with_token(&CancellationToken::new())
    }

    /// Run the schedule, skipping matches not yet started once `token` is
    /// cancelled. A cancelled run returns a partial result with
    /// `is_complete() == false`.
    pub fn run_with_token(&self, token: &CancellationToken) -> Result<TournamentResult> {
        let base_seed = self.config.seed.unwrap_or_else(rand::random::<u64>);

        event!(
            tracing::Level::INFO,
            num_players = self.roster.len(),
            pairings = self.pair_count(),
            total_matches = self.total_matches(),
            turns = self.config.turns,
            noise = self.config.noise,
            "starting tournament"
        );

        let jobs = self.enumerate_jobs();
        let records: Vec<Option<MatchRecord>> = jobs
            .par_iter()
            .map(|job| {
                if token.is_cancelled() {
                    None
                } else {
                    Some(self.play_match(job, base_seed))
                }
            })
            .collect();

        let complete = records.iter().all(Option::is_some);

        // The reduction is order-independent, so it does not matter how the
        // worker pool interleaved the records.
        let mut builder = ResultsBuilder::new(self.player_names());
        for record in records.into_iter().flatten() {
            builder.record(&record);
        }
        builder.build(self.config.clone(), complete)
    }

    fn enumerate_jobs(&self) -> Vec<MatchJob> {
        let n = self.roster.len();
        let mut jobs = Vec::with_capacity(self.total_matches());
        let mut match_index = 0;
        for i in 0..n {
            for j in i..n {
                for repetition in 0..self.config.repetitions {
                    jobs.push(MatchJob {
                        pair: (i, j),
                        repetition,
                        match_index,
                    });
                    match_index += 1;
                }
            }
        }
        jobs
    }

    fn play_match(&self, job: &MatchJob, base_seed: u64) -> MatchRecord {
        let (i, j) = job.pair;

        let played = std::panic::catch_unwind(AssertUnwindSafe(|| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(job.match_index as u64));
            let mut sim = MatchSimulationBuilder::default()
                .strategies(self.roster[i].generate(), self.roster[j].generate())
                .turns(self.config.turns)
                .payoff(self.config.payoff)
                .noise(self.config.noise)
                .build()?;
            Ok::<MatchResult, MatchSimulationError>(sim.run(&mut rng))
        }));

        let outcome = match played {
            Ok(Ok(result)) => MatchOutcome::Completed(result),
            Ok(Err(build_error)) => {
                event!(
                    tracing::Level::WARN,
                    player_a = self.roster[i].name(),
                    player_b = self.roster[j].name(),
                    repetition = job.repetition,
                    %build_error,
                    "match could not be built"
                );
                MatchOutcome::Faulted(build_error.to_string())
            }
            Err(payload) => {
                let message = panic_message(payload);
                event!(
                    tracing::Level::WARN,
                    player_a = self.roster[i].name(),
                    player_b = self.roster[j].name(),
                    repetition = job.repetition,
                    message = %message,
                    "strategy fault aborted match"
                );
                MatchOutcome::Faulted(message)
            }
        };

        MatchRecord {
            pair: job.pair,
            repetition: job.repetition,
            outcome,
        }
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "strategy panicked".to_string()
    }
}
