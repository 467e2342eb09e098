//! Match parameter set
//!
//! The immutable input to one calculation, plus the boundary that turns a
//! flat map of text fields into it.

mod fields;
mod types;

pub use fields::{FieldMap, InputParser, FIELD_NAMES};
pub use types::ValidationError;

use crate::market::MarketQuotes;
use crate::model::{Score, MATCH_MINUTES, MAX_GOALS};
use crate::risk::KellyFraction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Season form for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamForm {
    /// Average goals scored per match
    pub avg_scored: f64,
    /// Average goals conceded per match
    pub avg_conceded: f64,
    /// Expected goals for per match
    pub xg_for: f64,
    /// Expected goals against per match
    pub xg_against: f64,
}

/// Live match signals for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InPlayStats {
    pub in_game_xg: f64,
    /// Possession percentage, 0-100
    pub possession: f64,
    pub shots_on_target: u32,
    /// Touches in the opponent's box
    pub box_touches: f64,
    pub corners: f64,
}

/// Pre-match squad news for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadFactors {
    /// Players unavailable through injury
    pub injuries: u32,
    /// Current league position (1 = top)
    pub league_position: u32,
    /// Recent form points, may be negative
    pub form: i32,
}

/// Everything known about one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub form: TeamForm,
    pub live: InPlayStats,
    pub squad: SquadFactors,
}

/// Clock and score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Minutes played, 0-90
    pub elapsed_minutes: f64,
    pub score: Score,
}

/// Staking inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bankroll {
    /// Account balance, never negative
    pub balance: Decimal,
    pub kelly: KellyFraction,
}

impl Bankroll {
    /// Negative balances are clamped to zero
    pub fn new(balance: Decimal, kelly: KellyFraction) -> Self {
        Self {
            balance: balance.max(Decimal::ZERO),
            kelly,
        }
    }
}

/// Immutable input to one calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub home: TeamStats,
    pub away: TeamStats,
    pub state: MatchState,
    pub bankroll: Bankroll,
    pub market: MarketQuotes,
}

impl ParameterSet {
    /// Check range invariants. Parsed inputs already pass; this guards sets
    /// built in code.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check("elapsed_minutes", self.state.elapsed_minutes, 0.0, MATCH_MINUTES)?;
        let max_goals = f64::from(MAX_GOALS);
        check("home_goals", f64::from(self.state.score.home), 0.0, max_goals)?;
        check("away_goals", f64::from(self.state.score.away), 0.0, max_goals)?;

        if self.bankroll.balance < Decimal::ZERO {
            return Err(ValidationError::Negative {
                field: "account_balance",
                value: self.bankroll.balance,
            });
        }

        for (names, side) in [(&HOME_FIELDS, &self.home), (&AWAY_FIELDS, &self.away)] {
            let f = &side.form;
            check(names.avg_scored, f.avg_scored, 0.0, f64::INFINITY)?;
            check(names.avg_conceded, f.avg_conceded, 0.0, f64::INFINITY)?;
            check(names.xg_for, f.xg_for, 0.0, f64::INFINITY)?;
            check(names.xg_against, f.xg_against, 0.0, f64::INFINITY)?;

            let l = &side.live;
            check(names.in_game_xg, l.in_game_xg, 0.0, f64::INFINITY)?;
            check(names.possession, l.possession, 0.0, 100.0)?;
            check(names.box_touches, l.box_touches, 0.0, f64::INFINITY)?;
            check(names.corners, l.corners, 0.0, f64::INFINITY)?;
        }

        let odds = &self.market;
        for (name, value) in [
            ("live_home_odds", odds.match_odds.home),
            ("live_draw_odds", odds.match_odds.draw),
            ("live_away_odds", odds.match_odds.away),
            ("live_over_odds", odds.over),
            ("live_under_odds", odds.under),
        ] {
            check(name, value, f64::NEG_INFINITY, f64::INFINITY)?;
        }

        Ok(())
    }
}

/// Input field names for one side's checked values
struct SideFieldNames {
    avg_scored: &'static str,
    avg_conceded: &'static str,
    xg_for: &'static str,
    xg_against: &'static str,
    in_game_xg: &'static str,
    possession: &'static str,
    box_touches: &'static str,
    corners: &'static str,
}

const HOME_FIELDS: SideFieldNames = SideFieldNames {
    avg_scored: "home_avg_scored",
    avg_conceded: "home_avg_conceded",
    xg_for: "home_xg",
    xg_against: "home_xg_against",
    in_game_xg: "in_game_home_xg",
    possession: "home_possession",
    box_touches: "home_opp_box",
    corners: "home_corners",
};

const AWAY_FIELDS: SideFieldNames = SideFieldNames {
    avg_scored: "away_avg_scored",
    avg_conceded: "away_avg_conceded",
    xg_for: "away_xg",
    xg_against: "away_xg_against",
    in_game_xg: "in_game_away_xg",
    possession: "away_possession",
    box_touches: "away_opp_box",
    corners: "away_corners",
};

/// Finite and within `[min, max]`
fn check(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: name,
            value,
            min,
            max,
        })
    }
}
