//! Staking recommendation types

use crate::model::Outcome;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of exposure on an exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExposureSide {
    /// Bet for the outcome
    Back,
    /// Bet against the outcome
    Lay,
}

impl fmt::Display for ExposureSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExposureSide::Back => write!(f, "Back"),
            ExposureSide::Lay => write!(f, "Lay"),
        }
    }
}

/// What a recommendation is on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "market", rename_all = "snake_case")]
pub enum Subject {
    /// Home, draw or away in the match-result market
    MatchOdds { outcome: Outcome },
    /// Under side of a goal line such as 2.5
    Under { line: f64 },
    /// Over side of a goal line
    Over { line: f64 },
    /// A correct score
    Scoreline { home: u32, away: u32 },
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::MatchOdds { outcome } => write!(f, "{}", outcome.label()),
            Subject::Under { line } => write!(f, "Under {line}"),
            Subject::Over { line } => write!(f, "Over {line}"),
            Subject::Scoreline { home, away } => write!(f, "{home}-{away}"),
        }
    }
}

/// A positive-edge staking suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub side: ExposureSide,
    pub subject: Subject,
    /// Edge as a fraction, always positive
    pub edge: f64,
    /// Model fair price, infinite when the model gives no chance
    pub fair_odds: f64,
    /// Quoted price
    pub live_odds: f64,
    /// Amount to stake (for a lay, the backer's stake to accept)
    pub stake: Decimal,
    /// Maximum loss on a lay; backs have none beyond the stake
    pub liability: Option<Decimal>,
}
