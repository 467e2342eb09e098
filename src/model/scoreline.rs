//! Joint scoreline distribution
//!
//! Cells are stored in enumeration order (additional home goals outer,
//! additional away goals inner), which is also the tie-break order for
//! ranking.

use super::{ExpectedGoals, GoalCountKernel, Outcome, OutcomeProbs, Score, ZeroInflatedPoisson};
use serde::{Deserialize, Serialize};

/// Default enumeration grid for additional goals per side
pub const DEFAULT_SCORELINE_GRID: u32 = 10;

/// One final scoreline and its probability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorelineCell {
    /// Final home goals
    pub home: u32,
    /// Final away goals
    pub away: u32,
    pub probability: f64,
}

/// Probability table over final scorelines reachable from the current score
#[derive(Debug, Clone)]
pub struct ScorelineTable {
    cells: Vec<ScorelineCell>,
    score: Score,
    grid: u32,
}

impl ScorelineTable {
    /// Build the table from independent per-side goal counts
    pub fn build(kernel: &ZeroInflatedPoisson, xg: ExpectedGoals, score: Score, grid: u32) -> Self {
        let home_pmf: Vec<f64> = (0..grid).map(|k| kernel.pmf(xg.home, k)).collect();
        let away_pmf: Vec<f64> = (0..grid).map(|k| kernel.pmf(xg.away, k)).collect();

        let mut cells = Vec::with_capacity((grid * grid) as usize);
        for (i, ph) in (0u32..).zip(&home_pmf) {
            for (j, pa) in (0u32..).zip(&away_pmf) {
                cells.push(ScorelineCell {
                    home: score.home + i,
                    away: score.away + j,
                    probability: ph * pa,
                });
            }
        }

        Self { cells, score, grid }
    }

    pub fn cells(&self) -> &[ScorelineCell] {
        &self.cells
    }

    pub fn grid(&self) -> u32 {
        self.grid
    }

    /// Probability of a final scoreline, 0 if it is unreachable or off-grid
    pub fn probability(&self, home: u32, away: u32) -> f64 {
        if home < self.score.home || away < self.score.away {
            return 0.0;
        }
        let (i, j) = (home - self.score.home, away - self.score.away);
        if i >= self.grid || j >= self.grid {
            return 0.0;
        }
        self.cells[(i * self.grid + j) as usize].probability
    }

    /// The `n` most likely scorelines, descending. Ties keep table order.
    pub fn top(&self, n: usize) -> Vec<ScorelineCell> {
        let mut ranked = self.cells.clone();
        // stable sort preserves enumeration order among equal probabilities
        ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        ranked.truncate(n);
        ranked
    }

    /// Probability that the match total stays at or below `threshold` goals
    pub fn total_goals_at_most(&self, threshold: u32) -> f64 {
        self.cells
            .iter()
            .filter(|c| c.home + c.away <= threshold)
            .map(|c| c.probability)
            .sum()
    }

    /// Probability that at most `extra` more goals are scored
    pub fn additional_goals_at_most(&self, extra: u32) -> f64 {
        self.total_goals_at_most(self.score.total() + extra)
    }

    /// Win/draw/loss probabilities summed over the table and renormalized
    pub fn outcome_probs(&self) -> OutcomeProbs {
        let mut probs = OutcomeProbs::default();
        for cell in &self.cells {
            probs.accumulate(Outcome::from_final(cell.home, cell.away), cell.probability);
        }
        probs.normalized()
    }

    /// Mass captured by the grid; approaches 1 as the grid grows
    pub fn total_mass(&self) -> f64 {
        self.cells.iter().map(|c| c.probability).sum()
    }
}
