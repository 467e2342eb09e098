//! Model/market probability blending

use super::MatchOdds;
use crate::model::OutcomeProbs;

/// Default weight given to the de-margined market
pub const DEFAULT_MARKET_WEIGHT: f64 = 0.3;

/// Implied probability of a decimal price, 0 when there is no market
pub fn implied_probability(odds: f64) -> f64 {
    if odds > 0.0 {
        1.0 / odds
    } else {
        0.0
    }
}

/// Break-even decimal price for a probability; infinite when `p` is 0
pub fn fair_odds(p: f64) -> f64 {
    if p > 0.0 {
        1.0 / p
    } else {
        f64::INFINITY
    }
}

/// Convex combination of model and market probabilities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketBlender {
    /// Share of the market in the blend, 0..=1
    pub market_weight: f64,
}

impl MarketBlender {
    pub fn new(market_weight: f64) -> Self {
        Self { market_weight }
    }

    /// Blend then renormalize. An unpriced market leaves the model as is.
    pub fn blend(&self, model: &OutcomeProbs, odds: &MatchOdds) -> OutcomeProbs {
        let market = odds.implied();
        let w = self.market_weight;
        OutcomeProbs::new(
            (1.0 - w) * model.home + w * market.home,
            (1.0 - w) * model.draw + w * market.draw,
            (1.0 - w) * model.away + w * market.away,
        )
        .normalized()
    }
}

impl Default for MarketBlender {
    fn default() -> Self {
        Self::new(DEFAULT_MARKET_WEIGHT)
    }
}
