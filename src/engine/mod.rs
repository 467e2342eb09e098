//! Odds engine
//!
//! Runs one calculation: expected goals, outcome and scoreline
//! probabilities, market blend, then staking recommendations. The engine
//! holds only its settings; every call is independent.

mod profile;
mod result;

pub use profile::{EngineConfig, FeatureSet, GoalLine, OutcomeKernel, Profile, RecommendationSet};
pub use result::{
    GoalLineQuote, MatchOddsQuote, PriceQuote, ResultBundle, ScorelineQuote, TargetQuote,
};

use crate::market::MarketBlender;
use crate::model::{
    ExpectedGoalsEstimator, InPlayEstimator, NegativeBinomial, Outcome, OutcomeModel,
    OutcomeProbs, PreMatchEstimator, Score, ScorelineTable, ZeroInflatedPoisson,
};
use crate::params::{ParameterSet, ValidationError};
use crate::risk::{ExposureSide, Recommendation, StakingAdvisor, Subject};
use std::time::Instant;
use tracing::{debug, info};

/// Stateless calculator configured by an `EngineConfig`
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline. Invalid parameters abort before any output.
    pub fn calculate(&self, params: &ParameterSet) -> Result<ResultBundle, ValidationError> {
        let started = Instant::now();
        params.validate()?;
        let cfg = &self.config;

        let (expected_goals, score) = match cfg.feature_set {
            FeatureSet::InPlay => (InPlayEstimator::new().estimate(params), params.state.score),
            FeatureSet::PreMatch => (PreMatchEstimator::new().estimate(params), Score::default()),
        };
        debug!(
            home = expected_goals.home,
            away = expected_goals.away,
            "Expected goals remaining"
        );

        let table = ScorelineTable::build(
            &ZeroInflatedPoisson::new(cfg.zero_inflation),
            expected_goals,
            score,
            cfg.scoreline_grid,
        );

        let model_probs = match cfg.outcome_kernel {
            OutcomeKernel::NegativeBinomial { dispersion } => {
                OutcomeModel::new(NegativeBinomial::new(dispersion), cfg.outcome_goal_window)
                    .outcome_probs(expected_goals, score)
            }
            OutcomeKernel::ScorelineTable => table.outcome_probs(),
        };
        let blended_probs = MarketBlender::new(cfg.market_weight)
            .blend(&model_probs, &params.market.match_odds);

        let under_probability = cfg.goal_line.under_probability(&table);
        let goal_line = GoalLineQuote {
            line: cfg.goal_line.line(score),
            under: PriceQuote::new(under_probability, params.market.under),
            over: cfg
                .goal_line
                .prices_over()
                .then(|| PriceQuote::new(1.0 - under_probability, params.market.over)),
        };

        let recommendations = self.recommend(params, &blended_probs, &table, &goal_line);

        let bundle = ResultBundle {
            profile: cfg.profile,
            expected_goals,
            model_probs,
            blended_probs,
            match_odds: MatchOddsQuote::new(&blended_probs, &params.market.match_odds),
            top_scorelines: table
                .top(cfg.top_scorelines)
                .into_iter()
                .map(ScorelineQuote::from)
                .collect(),
            goal_line,
            targets: params
                .market
                .targets
                .iter()
                .map(|t| TargetQuote {
                    home: t.home,
                    away: t.away,
                    price: PriceQuote::new(table.probability(t.home, t.away), t.odds),
                })
                .collect(),
            checked: cfg.recommendations,
            recommendations,
        };

        info!(
            profile = %cfg.profile,
            xg_home = expected_goals.home,
            xg_away = expected_goals.away,
            p_home = blended_probs.home,
            p_draw = blended_probs.draw,
            p_away = blended_probs.away,
            recommendations = bundle.recommendations.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Calculation complete"
        );

        Ok(bundle)
    }

    fn recommend(
        &self,
        params: &ParameterSet,
        blended: &OutcomeProbs,
        table: &ScorelineTable,
        goal_line: &GoalLineQuote,
    ) -> Vec<Recommendation> {
        let wanted = self.config.recommendations;
        let advisor = StakingAdvisor::new(params.bankroll.kelly, self.config.max_liability_pct);
        let balance = params.bankroll.balance;
        let odds = &params.market.match_odds;
        let mut out = Vec::new();

        if wanted.lay_draw {
            let subject = Subject::MatchOdds {
                outcome: Outcome::Draw,
            };
            out.extend(advisor.recommend(
                subject,
                blended.draw,
                odds.draw,
                balance,
                ExposureSide::Lay,
            ));
        }

        if wanted.back_match_odds {
            for outcome in Outcome::ALL {
                let subject = Subject::MatchOdds { outcome };
                out.extend(advisor.recommend(
                    subject,
                    blended.get(outcome),
                    odds.get(outcome),
                    balance,
                    ExposureSide::Back,
                ));
            }
        }

        if wanted.lay_under {
            let subject = Subject::Under {
                line: goal_line.line,
            };
            out.extend(advisor.recommend(
                subject,
                goal_line.under.probability,
                goal_line.under.live,
                balance,
                ExposureSide::Lay,
            ));
        }

        for target in &params.market.targets {
            let subject = Subject::Scoreline {
                home: target.home,
                away: target.away,
            };
            let p = table.probability(target.home, target.away);
            if wanted.lay_targets {
                let lay = advisor.recommend(subject, p, target.odds, balance, ExposureSide::Lay);
                out.extend(lay);
            }
            if wanted.back_targets {
                let back = advisor.recommend(subject, p, target.odds, balance, ExposureSide::Back);
                out.extend(back);
            }
        }

        out
    }
}
