//! Goal model module
//!
//! Expected-goals estimation, goal-count kernels, match outcome probabilities
//! and the scoreline distribution.

mod kernel;
mod outcome;
mod scoreline;
mod xg;

pub use kernel::{GoalCountKernel, NegativeBinomial, ZeroInflatedPoisson};
pub use outcome::OutcomeModel;
pub use scoreline::{ScorelineCell, ScorelineTable};
pub use xg::{ExpectedGoalsEstimator, InPlayEstimator, PreMatchEstimator};

use serde::{Deserialize, Serialize};

/// Lower bound applied to every expected-goals value
pub const XG_FLOOR: f64 = 0.1;

/// Regulation match length in minutes
pub const MATCH_MINUTES: f64 = 90.0;

/// Largest goal count a side may have on the scoreboard
pub const MAX_GOALS: u32 = 99;

/// Largest per-side enumeration window for outcome and scoreline grids
pub const MAX_GOAL_WINDOW: u32 = 100;

/// Current score of a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Goals scored so far by both sides
    pub fn total(&self) -> u32 {
        self.home + self.away
    }

    /// Home goals minus away goals
    pub fn difference(&self) -> i64 {
        i64::from(self.home) - i64::from(self.away)
    }
}

/// Expected goals for the remainder of the match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpectedGoals {
    pub home: f64,
    pub away: f64,
}

impl ExpectedGoals {
    pub fn new(home: f64, away: f64) -> Self {
        Self { home, away }
    }

    pub fn total(&self) -> f64 {
        self.home + self.away
    }
}

/// Match result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Home, Outcome::Draw, Outcome::Away];

    /// Classify a final score
    pub fn from_final(home: u32, away: u32) -> Self {
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Outcome::Home,
            std::cmp::Ordering::Less => Outcome::Away,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Home => "Home",
            Outcome::Draw => "Draw",
            Outcome::Away => "Away",
        }
    }
}

/// Home/draw/away probability triple
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomeProbs {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl OutcomeProbs {
    pub fn new(home: f64, draw: f64, away: f64) -> Self {
        Self { home, draw, away }
    }

    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }

    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }

    /// Add mass to one bucket
    pub fn accumulate(&mut self, outcome: Outcome, p: f64) {
        match outcome {
            Outcome::Home => self.home += p,
            Outcome::Draw => self.draw += p,
            Outcome::Away => self.away += p,
        }
    }

    /// Rescale to sum to one. A triple with no mass is returned unchanged.
    pub fn normalized(self) -> Self {
        let sum = self.sum();
        if sum > 0.0 {
            Self {
                home: self.home / sum,
                draw: self.draw / sum,
                away: self.away / sum,
            }
        } else {
            self
        }
    }

    /// Probability that the match does not end level
    pub fn non_draw(&self) -> f64 {
        self.home + self.away
    }
}
