//! Expected-goals estimators
//!
//! The in-play estimator turns season form plus live match signals into the
//! goals each side is expected to add before full time. The pre-match
//! estimator averages attacking and defensive form and applies squad factors.
//!
//! Situational signals use raw deviations from fixed pivots (possession 50,
//! box touches 20, corners 4, shots 0). An omitted field parsed as 0 is not
//! neutral for possession, box touches or corners and lowers the estimate.

use super::{ExpectedGoals, Score, MATCH_MINUTES, XG_FLOOR};
use crate::params::{ParameterSet, TeamStats};
use tracing::debug;

const DECAY_RATE: f64 = 0.003;
const DECAY_FLOOR: f64 = 0.5;
const CLOSING_MINUTES: f64 = 10.0;
const CLOSING_DECAY: f64 = 0.75;
const LATE_GAME_MINUTE: f64 = 75.0;

const SEASON_WEIGHT: f64 = 0.15;
const MIN_OPPONENT_CONCEDED: f64 = 0.75;

const IN_GAME_XG_TRIGGER: f64 = 1.2;
const IN_GAME_XG_BOOST: f64 = 0.15;

const INJURY_PENALTY: f64 = 0.03;
const FORM_WEIGHT: f64 = 0.1;
const POSITION_WEIGHT: f64 = 0.01;

/// Trait for expected-goals estimators
pub trait ExpectedGoalsEstimator: Send + Sync {
    /// Expected goals for the remainder of the match, both at least `XG_FLOOR`
    fn estimate(&self, params: &ParameterSet) -> ExpectedGoals;
}

/// Live-match estimator with time decay and game-state adjustments
#[derive(Debug, Clone, Copy, Default)]
pub struct InPlayEstimator;

impl InPlayEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl ExpectedGoalsEstimator for InPlayEstimator {
    fn estimate(&self, params: &ParameterSet) -> ExpectedGoals {
        let elapsed = params.state.elapsed_minutes;
        let frac = remaining_fraction(elapsed);

        let decayed = ExpectedGoals::new(
            time_decay(params.home.form.xg_for * frac, elapsed),
            time_decay(params.away.form.xg_for * frac, elapsed),
        );
        let adjusted = adjust_for_scoreline(decayed, params.state.score, elapsed);
        debug!(
            home = adjusted.home,
            away = adjusted.away,
            frac,
            "Scoreline-adjusted expected goals"
        );

        let home = side_rate(adjusted.home, &params.home, &params.away, frac);
        let away = side_rate(adjusted.away, &params.away, &params.home, frac);

        ExpectedGoals::new(home.max(XG_FLOOR), away.max(XG_FLOOR))
    }
}

/// Share of regulation time still to play, in [0, 1]
pub fn remaining_fraction(elapsed: f64) -> f64 {
    ((MATCH_MINUTES - elapsed) / MATCH_MINUTES).max(0.0)
}

fn time_decay(xg: f64, elapsed: f64) -> f64 {
    let mut decay = (-DECAY_RATE * elapsed).exp().max(DECAY_FLOOR);
    if MATCH_MINUTES - elapsed < CLOSING_MINUTES {
        decay *= CLOSING_DECAY;
    }
    (xg * decay).max(XG_FLOOR)
}

/// Game-state correction. A home side trailing by two or more sees both
/// rates suppressed, unlike the mirrored away case.
fn adjust_for_scoreline(xg: ExpectedGoals, score: Score, elapsed: f64) -> ExpectedGoals {
    let d = score.difference();
    let (mut home, mut away) = (xg.home, xg.away);

    match d {
        1 => {
            home *= 0.9;
            away *= 1.2;
        }
        -1 => {
            home *= 1.2;
            away *= 0.9;
        }
        d if d >= 2 => {
            home *= 0.8;
            away *= 1.3;
        }
        d if d <= -2 => {
            home *= 0.8;
            away *= 0.8;
        }
        _ => {}
    }

    if elapsed > LATE_GAME_MINUTE && d != 0 {
        if d > 0 {
            home *= 0.85;
            away *= 1.15;
        } else {
            home *= 1.15;
            away *= 0.85;
        }
    }

    ExpectedGoals::new(home, away)
}

/// Seasonal blend, situational multipliers and opponent defensive quality
fn side_rate(lambda: f64, side: &TeamStats, opponent: &TeamStats, frac: f64) -> f64 {
    let pressure = side.form.avg_scored / opponent.form.avg_conceded.max(MIN_OPPONENT_CONCEDED);
    let mut lambda = lambda * (1.0 - SEASON_WEIGHT) + pressure * SEASON_WEIGHT * frac;

    let live = &side.live;
    lambda *= 1.0 + ((live.possession - 50.0) / 200.0) * frac;
    if live.in_game_xg > IN_GAME_XG_TRIGGER {
        lambda *= 1.0 + IN_GAME_XG_BOOST * frac;
    }
    lambda *= 1.0 + (f64::from(live.shots_on_target) / 20.0) * frac;
    lambda *= 1.0 + ((live.box_touches - 20.0) / 200.0) * frac;
    lambda *= 1.0 + ((live.corners - 4.0) / 50.0) * frac;

    lambda * (1.0 + (opponent.form.xg_against - 1.0) * 0.1 * frac)
}

/// Pre-match estimator from season averages and squad news
#[derive(Debug, Clone, Copy, Default)]
pub struct PreMatchEstimator;

impl PreMatchEstimator {
    pub fn new() -> Self {
        Self
    }

    fn side(side: &TeamStats, opponent: &TeamStats) -> f64 {
        let base = (side.form.avg_scored
            + side.form.xg_for
            + opponent.form.avg_conceded
            + opponent.form.xg_against)
            / 4.0;
        let squad = &side.squad;
        let lambda = base * (1.0 - INJURY_PENALTY * f64::from(squad.injuries))
            + f64::from(squad.form) * FORM_WEIGHT
            - f64::from(squad.league_position) * POSITION_WEIGHT;
        lambda.max(XG_FLOOR)
    }
}

impl ExpectedGoalsEstimator for PreMatchEstimator {
    fn estimate(&self, params: &ParameterSet) -> ExpectedGoals {
        ExpectedGoals::new(
            Self::side(&params.home, &params.away),
            Self::side(&params.away, &params.home),
        )
    }
}
