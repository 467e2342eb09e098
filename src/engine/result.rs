//! Calculation output

use super::{Profile, RecommendationSet};
use crate::market::{fair_odds, MatchOdds};
use crate::model::{ExpectedGoals, Outcome, OutcomeProbs, ScorelineCell};
use crate::risk::Recommendation;
use serde::{Deserialize, Serialize};

/// Model probability alongside fair and live prices
///
/// `fair` is infinite when `probability` is 0; `live` at or below 0 means
/// the selection has no market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub probability: f64,
    pub fair: f64,
    pub live: f64,
}

impl PriceQuote {
    pub fn new(probability: f64, live: f64) -> Self {
        Self {
            probability,
            fair: fair_odds(probability),
            live,
        }
    }

    pub fn has_market(&self) -> bool {
        self.live > 0.0
    }
}

/// Match-result prices from the blended probabilities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOddsQuote {
    pub home: PriceQuote,
    pub draw: PriceQuote,
    pub away: PriceQuote,
}

impl MatchOddsQuote {
    pub fn new(probs: &OutcomeProbs, live: &MatchOdds) -> Self {
        Self {
            home: PriceQuote::new(probs.home, live.home),
            draw: PriceQuote::new(probs.draw, live.draw),
            away: PriceQuote::new(probs.away, live.away),
        }
    }

    pub fn get(&self, outcome: Outcome) -> &PriceQuote {
        match outcome {
            Outcome::Home => &self.home,
            Outcome::Draw => &self.draw,
            Outcome::Away => &self.away,
        }
    }
}

/// Total-goals line prices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalLineQuote {
    /// Line in goals, e.g. 2.5
    pub line: f64,
    pub under: PriceQuote,
    /// Absent for under-only markets
    pub over: Option<PriceQuote>,
}

/// A ranked final scoreline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorelineQuote {
    pub home: u32,
    pub away: u32,
    pub probability: f64,
    pub fair_odds: f64,
}

impl From<ScorelineCell> for ScorelineQuote {
    fn from(cell: ScorelineCell) -> Self {
        Self {
            home: cell.home,
            away: cell.away,
            probability: cell.probability,
            fair_odds: fair_odds(cell.probability),
        }
    }
}

/// A quoted correct score priced by the scoreline table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetQuote {
    pub home: u32,
    pub away: u32,
    pub price: PriceQuote,
}

/// Everything one calculation produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub profile: Profile,
    /// Goals expected before full time
    pub expected_goals: ExpectedGoals,
    /// Outcome probabilities from the goal model alone
    pub model_probs: OutcomeProbs,
    /// Outcome probabilities after blending with the market
    pub blended_probs: OutcomeProbs,
    pub match_odds: MatchOddsQuote,
    pub top_scorelines: Vec<ScorelineQuote>,
    pub goal_line: GoalLineQuote,
    /// Quoted correct scores, in input order
    pub targets: Vec<TargetQuote>,
    /// Recommendations that were evaluated
    pub checked: RecommendationSet,
    /// Recommendations with positive edge, in evaluation order
    pub recommendations: Vec<Recommendation>,
}
