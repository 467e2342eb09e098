//! Match outcome probabilities from a goal-count kernel
//!
//! Additional goals for each side are enumerated over `[0, goal_window)`,
//! each cell is classified by the final score it produces, and the captured
//! mass is renormalized. Mass beyond the window is discarded; with a window
//! of 6 and remaining-match rates below ~3 goals the loss is well under 1%.

use super::{ExpectedGoals, GoalCountKernel, NegativeBinomial, Outcome, OutcomeProbs, Score};

/// Default enumeration window for additional goals per side
pub const DEFAULT_GOAL_WINDOW: u32 = 6;

/// Win/draw/loss model over a truncated goal-count grid
#[derive(Debug, Clone)]
pub struct OutcomeModel<K> {
    kernel: K,
    goal_window: u32,
}

impl<K: GoalCountKernel> OutcomeModel<K> {
    pub fn new(kernel: K, goal_window: u32) -> Self {
        Self {
            kernel,
            goal_window,
        }
    }

    pub fn goal_window(&self) -> u32 {
        self.goal_window
    }

    /// Home/draw/away probabilities given remaining expected goals and the
    /// current score. All-zero if the window captures no mass.
    pub fn outcome_probs(&self, xg: ExpectedGoals, score: Score) -> OutcomeProbs {
        let home_pmf: Vec<f64> = (0..self.goal_window)
            .map(|k| self.kernel.pmf(xg.home, k))
            .collect();
        let away_pmf: Vec<f64> = (0..self.goal_window)
            .map(|k| self.kernel.pmf(xg.away, k))
            .collect();

        let mut probs = OutcomeProbs::default();
        for (gh, ph) in (0u32..).zip(&home_pmf) {
            for (ga, pa) in (0u32..).zip(&away_pmf) {
                let outcome = Outcome::from_final(score.home + gh, score.away + ga);
                probs.accumulate(outcome, ph * pa);
            }
        }

        probs.normalized()
    }
}

impl Default for OutcomeModel<NegativeBinomial> {
    fn default() -> Self {
        Self::new(NegativeBinomial::default(), DEFAULT_GOAL_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ZeroInflatedPoisson;

    #[test]
    fn test_symmetric_rates_give_symmetric_probs() {
        let model = OutcomeModel::default();
        let probs = model.outcome_probs(ExpectedGoals::new(1.2, 1.2), Score::default());
        assert!((probs.home - probs.away).abs() < 1e-12);
        assert!((probs.sum() - 1.0).abs() < 1e-12);
        assert!(probs.draw > 0.2);
    }

    #[test]
    fn test_leader_favoured_late() {
        let model = OutcomeModel::default();
        let probs = model.outcome_probs(ExpectedGoals::new(0.1, 0.1), Score::new(1, 0));
        assert!(probs.home > 0.85);
        assert!(probs.away < 0.02);
    }

    #[test]
    fn test_stronger_side_more_likely_to_win() {
        let model = OutcomeModel::default();
        let probs = model.outcome_probs(ExpectedGoals::new(2.2, 0.6), Score::default());
        assert!(probs.home > probs.away);
        assert!(probs.home > probs.draw);
    }

    #[test]
    fn test_empty_window_yields_zero_vector() {
        let model = OutcomeModel::new(NegativeBinomial::new(3), 0);
        let probs = model.outcome_probs(ExpectedGoals::new(1.0, 1.0), Score::default());
        assert_eq!(probs, OutcomeProbs::default());
    }

    #[test]
    fn test_dispersion_two_is_wider_than_three() {
        let xg = ExpectedGoals::new(1.5, 1.5);
        let r2 = OutcomeModel::new(NegativeBinomial::new(2), 6).outcome_probs(xg, Score::default());
        let r3 = OutcomeModel::new(NegativeBinomial::new(3), 6).outcome_probs(xg, Score::default());
        // More overdispersion puts more weight on lopsided counts, including 0-0
        assert!((r2.draw - r3.draw).abs() > 1e-4);
        assert!((r2.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_poisson_kernel_over_wide_window() {
        let model = OutcomeModel::new(ZeroInflatedPoisson::default(), 10);
        let probs = model.outcome_probs(ExpectedGoals::new(1.6, 1.1), Score::default());
        assert!(probs.home > probs.away);
        assert!((probs.sum() - 1.0).abs() < 1e-12);
    }
}
