//! Market quotes module
//!
//! Live decimal prices, bookmaker margin removal, model/market blending and
//! the target-scoreline token format.

mod blend;
mod targets;

pub use blend::{fair_odds, implied_probability, MarketBlender};
pub use targets::{parse_targets, TargetParseError, TargetScore};

use crate::model::{Outcome, OutcomeProbs};
use serde::{Deserialize, Serialize};

/// Live decimal odds for the three match-result outcomes
///
/// A price at or below zero means the outcome has no market.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchOdds {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl MatchOdds {
    pub fn new(home: f64, draw: f64, away: f64) -> Self {
        Self { home, draw, away }
    }

    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }

    /// Raw implied probabilities, margin included
    pub fn implied_raw(&self) -> OutcomeProbs {
        OutcomeProbs::new(
            implied_probability(self.home),
            implied_probability(self.draw),
            implied_probability(self.away),
        )
    }

    /// Implied probabilities with the overround removed
    pub fn implied(&self) -> OutcomeProbs {
        self.implied_raw().normalized()
    }

    /// Bookmaker margin: sum of raw implied probabilities minus one
    pub fn overround(&self) -> f64 {
        self.implied_raw().sum() - 1.0
    }
}

/// All live prices supplied with a parameter set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketQuotes {
    pub match_odds: MatchOdds,
    /// Over side of the goal line
    pub over: f64,
    /// Under side of the goal line
    pub under: f64,
    /// Correct-score prices to evaluate
    pub targets: Vec<TargetScore>,
}
