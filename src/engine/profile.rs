//! Run profiles
//!
//! A profile selects which estimator, outcome kernel, goal-line market and
//! recommendations a calculation uses. Presets mirror the four ways the
//! calculator is run; any numeric setting can be overridden from config.

use crate::config::Config;
use crate::model::{Score, ScorelineTable};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Before kick-off, from season averages and squad news
    PreMatch,
    /// Live match with lay-draw and match-odds backs
    #[default]
    InPlay,
    /// Live match, lay and back quoted correct scores
    CorrectScore,
    /// Live match, lay the next-goal under line
    UnderOnly,
}

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::PreMatch,
        Profile::InPlay,
        Profile::CorrectScore,
        Profile::UnderOnly,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Profile::PreMatch => "pre-match",
            Profile::InPlay => "in-play",
            Profile::CorrectScore => "correct-score",
            Profile::UnderOnly => "under-only",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which expected-goals estimator and input fields apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureSet {
    PreMatch,
    InPlay,
}

/// Source of win/draw/loss probabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutcomeKernel {
    /// Negative binomial over the outcome goal window
    NegativeBinomial { dispersion: u32 },
    /// Summed from the zero-inflated Poisson scoreline table
    ScorelineTable,
}

/// Total-goals market to price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalLine {
    /// Fixed line with both sides priced; `max_goals` 2 is the 2.5 line
    OverUnder { max_goals: u32 },
    /// Under only, at the current total plus `additional_goals` plus a half
    DynamicUnder { additional_goals: u32 },
}

impl GoalLine {
    /// Quoted line, e.g. 2.5
    pub fn line(&self, score: Score) -> f64 {
        match self {
            GoalLine::OverUnder { max_goals } => f64::from(*max_goals) + 0.5,
            GoalLine::DynamicUnder { additional_goals } => {
                f64::from(score.total() + additional_goals) + 0.5
            }
        }
    }

    /// Probability the under side wins
    pub fn under_probability(&self, table: &ScorelineTable) -> f64 {
        match self {
            GoalLine::OverUnder { max_goals } => table.total_goals_at_most(*max_goals),
            GoalLine::DynamicUnder { additional_goals } => {
                table.additional_goals_at_most(*additional_goals)
            }
        }
    }

    pub fn prices_over(&self) -> bool {
        matches!(self, GoalLine::OverUnder { .. })
    }
}

/// Which staking recommendations to evaluate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub lay_draw: bool,
    pub back_match_odds: bool,
    pub lay_under: bool,
    pub lay_targets: bool,
    pub back_targets: bool,
}

/// Fully resolved settings for one engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub profile: Profile,
    pub feature_set: FeatureSet,
    pub outcome_kernel: OutcomeKernel,
    /// Additional goals enumerated per side for outcome probabilities
    pub outcome_goal_window: u32,
    /// Additional goals enumerated per side for the scoreline table
    pub scoreline_grid: u32,
    /// Extra mass at zero goals in the scoreline kernel
    pub zero_inflation: f64,
    /// Market share of the model/market blend
    pub market_weight: f64,
    pub top_scorelines: usize,
    pub goal_line: GoalLine,
    pub recommendations: RecommendationSet,
    /// Lay liability cap as a fraction of balance
    pub max_liability_pct: Option<Decimal>,
}

impl EngineConfig {
    /// Built-in settings for a profile
    pub fn preset(profile: Profile) -> Self {
        let in_play = Self {
            profile,
            feature_set: FeatureSet::InPlay,
            outcome_kernel: OutcomeKernel::NegativeBinomial { dispersion: 3 },
            outcome_goal_window: 6,
            scoreline_grid: 10,
            zero_inflation: 0.0,
            market_weight: 0.3,
            top_scorelines: 5,
            goal_line: GoalLine::OverUnder { max_goals: 2 },
            recommendations: RecommendationSet {
                lay_draw: true,
                back_match_odds: true,
                ..Default::default()
            },
            max_liability_pct: Some(dec!(0.10)),
        };

        match profile {
            Profile::InPlay => in_play,
            Profile::PreMatch => Self {
                feature_set: FeatureSet::PreMatch,
                outcome_kernel: OutcomeKernel::ScorelineTable,
                recommendations: RecommendationSet {
                    lay_draw: true,
                    ..Default::default()
                },
                ..in_play
            },
            Profile::CorrectScore => Self {
                recommendations: RecommendationSet {
                    lay_targets: true,
                    back_targets: true,
                    ..Default::default()
                },
                max_liability_pct: None,
                ..in_play
            },
            Profile::UnderOnly => Self {
                goal_line: GoalLine::DynamicUnder {
                    additional_goals: 1,
                },
                recommendations: RecommendationSet {
                    lay_under: true,
                    ..Default::default()
                },
                max_liability_pct: None,
                ..in_play
            },
        }
    }

    /// Preset for `profile` with the config file's overrides applied
    pub fn from_config(config: &Config, profile: Profile) -> Self {
        let mut resolved = Self::preset(profile);
        let model = &config.model;

        if let (Some(r), OutcomeKernel::NegativeBinomial { .. }) =
            (model.dispersion, resolved.outcome_kernel)
        {
            resolved.outcome_kernel = OutcomeKernel::NegativeBinomial { dispersion: r };
        }
        if let Some(window) = model.outcome_goal_window {
            resolved.outcome_goal_window = window;
        }
        if let Some(grid) = model.scoreline_grid {
            resolved.scoreline_grid = grid;
        }
        if let Some(p0) = model.zero_inflation {
            resolved.zero_inflation = p0;
        }
        if let Some(weight) = model.market_weight {
            resolved.market_weight = weight;
        }
        if let Some(n) = config.engine.top_scorelines {
            resolved.top_scorelines = n;
        }
        if let Some(cap) = config.risk.max_liability_pct {
            resolved.max_liability_pct = (cap > Decimal::ZERO).then_some(cap);
        }

        resolved
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::preset(Profile::default())
    }
}
