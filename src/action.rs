use serde::{Deserialize, Serialize};

/// A single round's move in the iterated prisoner's dilemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Cooperate,
    Defect,
}

impl Action {
    /// The opposite move. Used by the match executor to model execution
    /// noise, where an enacted move is flipped from the decided one.
    pub fn flip(self) -> Self {
        match self {
            Action::Cooperate => Action::Defect,
            Action::Defect => Action::Cooperate,
        }
    }

    pub fn is_cooperate(self) -> bool {
        self == Action::Cooperate
    }
}

/// The four payoff constants `(R, S, T, P)` that define per-round scoring.
///
/// A proper dilemma usually has `T > R > P > S`, but that is not enforced;
/// callers may configure degenerate matrices for testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    /// Reward for mutual cooperation.
    pub r: f64,
    /// Sucker's payoff for cooperating against a defection.
    pub s: f64,
    /// Temptation payoff for defecting against a cooperation.
    pub t: f64,
    /// Punishment for mutual defection.
    pub p: f64,
}

impl PayoffMatrix {
    pub fn new(r: f64, s: f64, t: f64, p: f64) -> Self {
        Self { r, s, t, p }
    }

    /// Score one round, returning `(a_score, b_score)`.
    pub fn score(&self, a: Action, b: Action) -> (f64, f64) {
        match (a, b) {
            (Action::Cooperate, Action::Cooperate) => (self.r, self.r),
            (Action::Cooperate, Action::Defect) => (self.s, self.t),
            (Action::Defect, Action::Cooperate) => (self.t, self.s),
            (Action::Defect, Action::Defect) => (self.p, self.p),
        }
    }
}

impl Default for PayoffMatrix {
    /// The conventional `(3, 0, 5, 1)` matrix.
    fn default() -> Self {
        Self::new(3.0, 0.0, 5.0, 1.0)
    }
}
