//! Target scoreline tokens
//!
//! Format: comma-separated `<home>-<away>@<decimal odds>`, e.g.
//! `1-0@3.4,2-1@5.2`. Tokens that do not parse are dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A correct-score selection and its live price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetScore {
    pub home: u32,
    pub away: u32,
    pub odds: f64,
}

/// Why a target token was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetParseError {
    #[error("expected <home>-<away>@<odds>")]
    Format,
    #[error("invalid goal count {0:?}")]
    Goals(String),
    #[error("invalid odds {0:?}")]
    Odds(String),
}

impl FromStr for TargetScore {
    type Err = TargetParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (score, odds) = token.trim().split_once('@').ok_or(TargetParseError::Format)?;
        let (home, away) = score.split_once('-').ok_or(TargetParseError::Format)?;
        let odds = odds.trim();
        let price: f64 = odds.parse().map_err(|_| TargetParseError::Odds(odds.to_string()))?;
        if !price.is_finite() {
            return Err(TargetParseError::Odds(odds.to_string()));
        }
        Ok(Self {
            home: goals(home)?,
            away: goals(away)?,
            odds: price,
        })
    }
}

fn goals(text: &str) -> Result<u32, TargetParseError> {
    let text = text.trim();
    text.parse().map_err(|_| TargetParseError::Goals(text.to_string()))
}

impl fmt::Display for TargetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}@{}", self.home, self.away, self.odds)
    }
}

/// Parse a target list, skipping malformed tokens
pub fn parse_targets(input: &str) -> Vec<TargetScore> {
    input
        .split(',')
        .filter(|t| !t.trim().is_empty())
        .filter_map(|token| match token.parse::<TargetScore>() {
            Ok(target) => Some(target),
            Err(e) => {
                tracing::debug!(
                    token = token.trim(),
                    error = %e,
                    "Skipping malformed target score"
                );
                None
            }
        })
        .collect()
}
