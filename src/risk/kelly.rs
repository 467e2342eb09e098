//! Fractional Kelly staking
//!
//! Edge is measured so that it is positive exactly when the quoted price
//! beats the fair price for the exposure taken:
//! - lay:  (fair - live) / fair, the market over-rates the outcome
//! - back: (live - fair) / live, the market under-rates the outcome
//!
//! The stake fraction is `kelly × edge`. A lay risks `balance × fraction` as
//! liability (optionally capped) and accepts `liability / (live - 1)` of
//! backers' money; a back stakes `balance × fraction` directly.

use super::{ExposureSide, Recommendation, Subject};
use crate::market::fair_odds;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Share of the Kelly-optimal stake to bet, e.g. 0.125 for an eighth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Serialize, Deserialize)]
pub struct KellyFraction(Decimal);

impl KellyFraction {
    /// From a percentage; `None` unless strictly positive
    pub fn from_percent(pct: Decimal) -> Option<Self> {
        (pct > Decimal::ZERO).then(|| Self(pct / dec!(100)))
    }

    /// From user text, using `fallback` when blank, non-numeric or not positive
    pub fn from_percent_input(input: Option<&str>, fallback: KellyFraction) -> Self {
        input
            .and_then(|s| s.trim().parse::<Decimal>().ok())
            .and_then(Self::from_percent)
            .unwrap_or(fallback)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Default for KellyFraction {
    fn default() -> Self {
        Self(dec!(0.125))
    }
}

/// Lay edge relative to the fair price; 1 when the model gives no chance
pub fn lay_edge(fair_odds: f64, live_odds: f64) -> f64 {
    if fair_odds.is_infinite() {
        1.0
    } else {
        (fair_odds - live_odds) / fair_odds
    }
}

/// Back edge relative to the quoted price
pub fn back_edge(fair_odds: f64, live_odds: f64) -> f64 {
    (live_odds - fair_odds) / live_odds
}

/// Positive edge for taking `side` at `live_odds`, `None` without a market
/// or without an edge
pub fn positive_edge(side: ExposureSide, fair_odds: f64, live_odds: f64) -> Option<f64> {
    if live_odds <= 0.0 {
        return None;
    }
    let edge = match side {
        ExposureSide::Lay => lay_edge(fair_odds, live_odds),
        ExposureSide::Back => back_edge(fair_odds, live_odds),
    };
    // NaN and non-positive edges both fail this test
    (edge > 0.0).then_some(edge)
}

/// Turns fair probabilities and live prices into stakes
#[derive(Debug, Clone, Copy)]
pub struct StakingAdvisor {
    /// Kelly multiplier applied to the edge
    pub kelly: KellyFraction,
    /// Cap on lay liability as a fraction of balance
    pub max_liability_pct: Option<Decimal>,
}

impl StakingAdvisor {
    /// Create a new staking advisor
    pub fn new(kelly: KellyFraction, max_liability_pct: Option<Decimal>) -> Self {
        Self {
            kelly,
            max_liability_pct,
        }
    }

    /// Recommend a stake, or `None` when there is no market or no edge
    pub fn recommend(
        &self,
        subject: Subject,
        fair_probability: f64,
        live_odds: f64,
        balance: Decimal,
        side: ExposureSide,
    ) -> Option<Recommendation> {
        let fair = fair_odds(fair_probability);
        let edge = positive_edge(side, fair, live_odds)?;
        let balance = balance.max(Decimal::ZERO);

        let fraction = (self.kelly.value() * to_decimal(edge)).max(Decimal::ZERO);
        let exposure = balance * fraction;

        let (stake, liability) = match side {
            ExposureSide::Lay => {
                let liability = match self.max_liability_pct {
                    Some(cap) => exposure.min(balance * cap),
                    None => exposure,
                };
                let stake = if live_odds > 1.0 {
                    let payout = to_decimal(live_odds - 1.0);
                    if payout > Decimal::ZERO {
                        liability / payout
                    } else {
                        Decimal::ZERO
                    }
                } else {
                    Decimal::ZERO
                };
                (stake, Some(liability))
            }
            ExposureSide::Back => (exposure, None),
        };

        tracing::debug!(
            %subject,
            %side,
            edge,
            fair_odds = fair,
            live_odds,
            %stake,
            "Edge found"
        );

        Some(Recommendation {
            side,
            subject,
            edge,
            fair_odds: fair,
            live_odds,
            stake,
            liability,
        })
    }
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}
