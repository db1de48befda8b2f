use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::errors::{Result, TournamentError};

use super::config::TournamentConfig;
use super::runner::{MatchOutcome, MatchRecord};

/// Aggregated statistics for a single player across the whole tournament.
///
/// Self-play matches are scheduled and recorded but excluded from these
/// summaries, so a player's numbers describe how it fared against everyone
/// else. Ranks are 1-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// Display name of the player.
    pub name: String,
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Sum of per-turn scores across all matches and repetitions.
    pub total_score: f64,
    /// Median of per-match total scores.
    pub median_score: f64,
    /// Matches where this player's score strictly exceeded the opponent's.
    pub wins: usize,
    /// Completed matches this player was scored on.
    pub matches_played: usize,
    /// Matches lost to a strategy fault in this player's pairings.
    pub faulted_matches: usize,
    /// True when no match of this player's completed; such a player carries
    /// no scores and ranks after every scored player.
    pub excluded: bool,
    /// Fraction of this player's turns that were mutual cooperation.
    pub cc_rate: f64,
    /// Fraction where this player cooperated and the opponent defected.
    pub cd_rate: f64,
    /// Fraction where this player defected and the opponent cooperated.
    pub dc_rate: f64,
    /// Fraction of mutual defection.
    pub dd_rate: f64,
    /// Fraction of this player's own turns where it cooperated.
    pub cooperation_rating: f64,
}

#[derive(Debug, Clone, Default)]
struct PlayerTally {
    total_score: f64,
    match_scores: Vec<f64>,
    wins: usize,
    faults: usize,
    cc: u64,
    cd: u64,
    dc: u64,
    dd: u64,
}

impl PlayerTally {
    fn record_side(&mut self, my_score: f64, opponent_score: f64) {
        self.total_score += my_score;
        self.match_scores.push(my_score);
        if my_score > opponent_score {
            self.wins += 1;
        }
    }

    fn record_turn(&mut self, mine: Action, theirs: Action) {
        match (mine, theirs) {
            (Action::Cooperate, Action::Cooperate) => self.cc += 1,
            (Action::Cooperate, Action::Defect) => self.cd += 1,
            (Action::Defect, Action::Cooperate) => self.dc += 1,
            (Action::Defect, Action::Defect) => self.dd += 1,
        }
    }
}

/// Builder that reduces match records into one [`TournamentResult`].
///
/// Records may arrive in any order; everything accumulated here is a sum or
/// a list append, and the order-sensitive work (median, ranking) happens
/// once in [`ResultsBuilder::build`].
pub struct ResultsBuilder {
    names: Vec<String>,
    tallies: Vec<PlayerTally>,
    completed_matches: usize,
    faulted_matches: usize,
}

impl ResultsBuilder {
    pub fn new(names: Vec<String>) -> Self {
        let tallies = names.iter().map(|_| PlayerTally::default()).collect();
        Self {
            names,
            tallies,
            completed_matches: 0,
            faulted_matches: 0,
        }
    }

    /// Fold one match record into the running tallies.
    pub fn record(&mut self, record: &MatchRecord) {
        let (i, j) = record.pair;
        match &record.outcome {
            MatchOutcome::Faulted(_) => {
                // The panic payload does not say which side misbehaved, so
                // the fault is attached to both participants' rows.
                self.faulted_matches += 1;
                self.tallies[i].faults += 1;
                if i != j {
                    self.tallies[j].faults += 1;
                }
            }
            MatchOutcome::Completed(result) => {
                self.completed_matches += 1;
                if i == j {
                    // Self-play stays out of the summary statistics.
                    return;
                }

                self.tallies[i].record_side(result.score_a(), result.score_b());
                self.tallies[j].record_side(result.score_b(), result.score_a());
                for &(a, b) in result.moves() {
                    self.tallies[i].record_turn(a, b);
                    self.tallies[j].record_turn(b, a);
                }
            }
        }
    }

    /// Consume the builder and produce the final ranked result.
    ///
    /// `complete` is false when the run was cancelled before every match
    /// was dispatched. In a complete run, a player with no recorded matches
    /// at all indicates a scheduling bug and refuses to rank.
    pub fn build(self, config: TournamentConfig, complete: bool) -> Result<TournamentResult> {
        let mut summaries = Vec::with_capacity(self.names.len());

        for (name, tally) in self.names.into_iter().zip(self.tallies.into_iter()) {
            if complete && tally.match_scores.is_empty() && tally.faults == 0 {
                return Err(TournamentError::Aggregation(format!(
                    "player {name} reached ranking with no recorded matches"
                )));
            }

            let turns = tally.cc + tally.cd + tally.dc + tally.dd;
            let rate = |count: u64| {
                if turns > 0 {
                    count as f64 / turns as f64
                } else {
                    0.0
                }
            };

            summaries.push(PlayerSummary {
                name,
                rank: 0,
                total_score: tally.total_score,
                median_score: median(&tally.match_scores),
                wins: tally.wins,
                matches_played: tally.match_scores.len(),
                faulted_matches: tally.faults,
                excluded: tally.match_scores.is_empty(),
                cc_rate: rate(tally.cc),
                cd_rate: rate(tally.cd),
                dc_rate: rate(tally.dc),
                dd_rate: rate(tally.dd),
                cooperation_rating: rate(tally.cc + tally.cd),
            });
        }

        assign_ranks(&mut summaries);

        Ok(TournamentResult {
            summaries,
            config,
            complete,
            completed_matches: self.completed_matches,
            faulted_matches: self.faulted_matches,
        })
    }
}

/// Median of per-match scores; 0 for a player with no scored matches.
fn median(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Order: total score descending, then median descending, then insertion
/// order (the sort is stable). Excluded players rank after every scored
/// player, keeping their own insertion order.
fn assign_ranks(summaries: &mut [PlayerSummary]) {
    use std::cmp::Ordering;

    let mut order: Vec<usize> = (0..summaries.len()).collect();
    order.sort_by(|&a, &b| {
        let (sa, sb) = (&summaries[a], &summaries[b]);
        match (sa.excluded, sb.excluded) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => Ordering::Equal,
            (false, false) => sb
                .total_score
                .partial_cmp(&sa.total_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    sb.median_score
                        .partial_cmp(&sa.median_score)
                        .unwrap_or(Ordering::Equal)
                }),
        }
    });

    for (position, &idx) in order.iter().enumerate() {
        summaries[idx].rank = position + 1;
    }
}

/// Results of a tournament run: every player's summary plus the ranking.
///
/// Immutable after construction; everything the caller needs to render a
/// table and bar chart is here without recomputing.
#[derive(Debug, Clone)]
pub struct TournamentResult {
    summaries: Vec<PlayerSummary>,
    config: TournamentConfig,
    complete: bool,
    completed_matches: usize,
    faulted_matches: usize,
}

impl TournamentResult {
    /// Player summaries in roster (insertion) order.
    pub fn summaries(&self) -> &[PlayerSummary] {
        &self.summaries
    }

    /// Player summaries in rank order.
    pub fn rankings(&self) -> Vec<&PlayerSummary> {
        let mut ranked: Vec<&PlayerSummary> = self.summaries.iter().collect();
        ranked.sort_by_key(|s| s.rank);
        ranked
    }

    /// Summary for a specific player.
    pub fn summary(&self, name: &str) -> Option<&PlayerSummary> {
        self.summaries.iter().find(|s| s.name == name)
    }

    /// False when the run was cancelled and not every scheduled match ran.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Matches that ran to completion, self-play included.
    pub fn completed_matches(&self) -> usize {
        self.completed_matches
    }

    /// Matches aborted by a strategy fault.
    pub fn faulted_matches(&self) -> usize {
        self.faulted_matches
    }

    /// Serialize the ranked summaries to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.rankings()).map_err(TournamentError::from)
    }

    /// Format results as a Markdown report.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Tournament Results\n\n");
        if !self.complete {
            output.push_str("**Partial results**: the run was cancelled before every scheduled match was played.\n\n");
        }

        output.push_str("## Configuration\n\n");
        output.push_str(&format!("- **Turns per Match**: {}\n", self.config.turns));
        output.push_str(&format!(
            "- **Repetitions per Pairing**: {}\n",
            self.config.repetitions
        ));
        let m = &self.config.payoff;
        output.push_str(&format!(
            "- **Payoff (R, S, T, P)**: ({}, {}, {}, {})\n",
            m.r, m.s, m.t, m.p
        ));
        output.push_str(&format!("- **Noise**: {}\n", self.config.noise));
        if let Some(seed) = self.config.seed {
            output.push_str(&format!("- **Random Seed**: {seed}\n"));
        }
        output.push_str(&format!(
            "- **Matches Completed**: {}\n",
            self.completed_matches
        ));
        if self.faulted_matches > 0 {
            output.push_str(&format!(
                "- **Matches Faulted**: {}\n",
                self.faulted_matches
            ));
        }
        output.push('\n');

        output.push_str("## Rankings\n\n");
        output.push_str("| Rank | Player | Total | Median | Wins | Cooperation |\n");
        output.push_str("|------|--------|-------|--------|------|-------------|\n");
        for summary in self.rankings() {
            if summary.excluded {
                output.push_str(&format!(
                    "| {} | {} (excluded) | - | - | - | - |\n",
                    summary.rank, summary.name
                ));
            } else {
                output.push_str(&format!(
                    "| {} | {} | {:.1} | {:.1} | {} | {:.1}% |\n",
                    summary.rank,
                    summary.name,
                    summary.total_score,
                    summary.median_score,
                    summary.wins,
                    100.0 * summary.cooperation_rating
                ));
            }
        }
        output.push('\n');

        output.push_str("## Move-Pair Rates\n\n");
        output.push_str("| Player | CC | CD | DC | DD | Faults |\n");
        output.push_str("|--------|----|----|----|----|--------|\n");
        for summary in self.rankings() {
            output.push_str(&format!(
                "| {} | {:.3} | {:.3} | {:.3} | {:.3} | {} |\n",
                summary.name,
                summary.cc_rate,
                summary.cd_rate,
                summary.dc_rate,
                summary.dd_rate,
                summary.faulted_matches
            ));
        }

        output
    }

    /// Save results to JSON and Markdown files in `output_dir`.
    pub fn save_to_dir(&self, output_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(output_dir)?;
        std::fs::write(output_dir.join("results.json"), self.to_json()?)?;
        std::fs::write(output_dir.join("results.md"), self.to_markdown())?;
        Ok(())
    }
}
