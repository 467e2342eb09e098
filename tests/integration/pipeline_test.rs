//! End-to-end pipeline tests

use odds_apex::engine::{Engine, EngineConfig, Profile, ResultBundle};
use odds_apex::market::{fair_odds, parse_targets, MatchOdds};
use odds_apex::model::{ExpectedGoalsEstimator, InPlayEstimator, Score, XG_FLOOR};
use odds_apex::params::ParameterSet;
use odds_apex::report::{LineTag, Report};
use odds_apex::risk::{ExposureSide, Subject};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn match_at(elapsed: f64, score: Score) -> ParameterSet {
    let mut params = ParameterSet::default();
    params.home.form.xg_for = 1.7;
    params.away.form.xg_for = 1.2;
    params.home.form.avg_scored = 1.8;
    params.home.form.avg_conceded = 1.0;
    params.away.form.avg_scored = 1.2;
    params.away.form.avg_conceded = 1.4;
    params.home.form.xg_against = 1.1;
    params.away.form.xg_against = 1.3;
    params.home.live.possession = 55.0;
    params.away.live.possession = 45.0;
    params.home.live.box_touches = 22.0;
    params.away.live.box_touches = 15.0;
    params.home.live.corners = 5.0;
    params.away.live.corners = 3.0;
    params.state.elapsed_minutes = elapsed;
    params.state.score = score;
    params.bankroll.balance = dec!(1000);
    params.market.match_odds = MatchOdds::new(2.1, 3.3, 3.9);
    params.market.over = 2.0;
    params.market.under = 1.85;
    params.market.targets = parse_targets("0-0@9.5, 1-0@7.0, 1-1@6.5, 5-5@1000");
    params
}

fn run(profile: Profile, params: &ParameterSet) -> ResultBundle {
    Engine::new(EngineConfig::preset(profile))
        .calculate(params)
        .unwrap()
}

#[test]
fn test_probabilities_sum_to_one_for_every_profile() {
    let params = match_at(40.0, Score::new(0, 1));
    for profile in Profile::ALL {
        let bundle = run(profile, &params);
        assert!((bundle.model_probs.sum() - 1.0).abs() < 1e-9, "{profile}");
        assert!((bundle.blended_probs.sum() - 1.0).abs() < 1e-9, "{profile}");
        for cell in &bundle.top_scorelines {
            assert!(cell.probability >= 0.0);
            assert_eq!(cell.fair_odds, fair_odds(cell.probability));
        }
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let params = match_at(67.0, Score::new(2, 1));
    for profile in Profile::ALL {
        let engine = Engine::new(EngineConfig::preset(profile));
        let first = engine.calculate(&params).unwrap();
        let second = engine.calculate(&params).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            Report::from_bundle(&first).to_string(),
            Report::from_bundle(&second).to_string()
        );
    }
}

#[test]
fn test_lambda_floor_at_full_time() {
    let params = match_at(90.0, Score::new(0, 3));
    let bundle = run(Profile::InPlay, &params);
    assert_eq!(bundle.expected_goals.home, XG_FLOOR);
    assert_eq!(bundle.expected_goals.away, XG_FLOOR);
}

#[test]
fn test_zero_default_signals_lower_estimate() {
    // Omitted possession, box touches and corners read as 0, not as neutral
    let mut params = ParameterSet::default();
    params.home.form.xg_for = 2.0;
    params.away.form.xg_for = 2.0;
    let xg = InPlayEstimator::new().estimate(&params);
    assert!((xg.home - 1.7 * 0.75 * 0.9 * 0.92 * 0.9).abs() < 1e-9);
    assert!(xg.home < 1.7);
}

#[test]
fn test_blend_pulls_toward_market() {
    let mut params = match_at(30.0, Score::default());
    params.market.match_odds = MatchOdds::default();
    let unpriced = run(Profile::InPlay, &params);
    for outcome in odds_apex::model::Outcome::ALL {
        let diff = unpriced.model_probs.get(outcome) - unpriced.blended_probs.get(outcome);
        assert!(diff.abs() < 1e-12);
    }

    params.market.match_odds = MatchOdds::new(1.25, 6.0, 12.0);
    let priced = run(Profile::InPlay, &params);
    assert!(priced.blended_probs.home > priced.model_probs.home);
}

#[test]
fn test_over_under_complement() {
    let bundle = run(Profile::InPlay, &match_at(50.0, Score::new(1, 0)));
    let over = bundle.goal_line.over.unwrap();
    assert!((over.probability + bundle.goal_line.under.probability - 1.0).abs() < 1e-12);
}

#[test]
fn test_correct_score_recommendations() {
    let bundle = run(Profile::CorrectScore, &match_at(70.0, Score::new(1, 0)));

    // 0-0 can no longer happen
    let nil_nil = Subject::Scoreline { home: 0, away: 0 };
    let lay = bundle
        .recommendations
        .iter()
        .find(|r| r.subject == nil_nil)
        .unwrap();
    assert_eq!(lay.side, ExposureSide::Lay);
    assert_eq!(lay.edge, 1.0);
    assert!(lay.fair_odds.is_infinite());

    // 5-5 is still far too short at 1000
    let five_all = Subject::Scoreline { home: 5, away: 5 };
    assert!(bundle
        .recommendations
        .iter()
        .any(|r| r.subject == five_all && r.side == ExposureSide::Lay));

    for rec in &bundle.recommendations {
        assert!(rec.edge > 0.0);
        assert!(matches!(rec.subject, Subject::Scoreline { .. }));
    }
}

#[test]
fn test_liability_cap_respected() {
    let mut params = match_at(80.0, Score::new(1, 1));
    params.bankroll.kelly = odds_apex::risk::KellyFraction::from_percent(dec!(100)).unwrap();
    params.market.match_odds = MatchOdds::new(8.0, 1.05, 9.0);
    let bundle = run(Profile::InPlay, &params);

    let lay = bundle
        .recommendations
        .iter()
        .find(|r| r.side == ExposureSide::Lay)
        .unwrap();
    assert!(lay.liability.unwrap() <= dec!(100));
    assert!(lay.stake > Decimal::ZERO);
}

#[test]
fn test_under_only_line_follows_score() {
    let bundle = run(Profile::UnderOnly, &match_at(60.0, Score::new(2, 1)));
    assert_eq!(bundle.goal_line.line, 4.5);
    assert!(bundle.goal_line.over.is_none());
    for rec in &bundle.recommendations {
        assert_eq!(rec.subject, Subject::Under { line: 4.5 });
        assert_eq!(rec.side, ExposureSide::Lay);
    }
}

#[test]
fn test_pre_match_profile() {
    let mut params = match_at(0.0, Score::default());
    params.home.squad.injuries = 3;
    params.away.squad.league_position = 18;
    let bundle = run(Profile::PreMatch, &params);

    // ((1.8 + 1.7 + 1.4 + 1.3) / 4) * (1 - 0.09) = 1.4105
    assert!((bundle.expected_goals.home - 1.4105).abs() < 1e-9);
    assert!(bundle.recommendations.iter().all(|r| r.subject
        == Subject::MatchOdds {
            outcome: odds_apex::model::Outcome::Draw
        }));
}

#[test]
fn test_report_tags_recommendations() {
    let bundle = run(Profile::CorrectScore, &match_at(70.0, Score::new(1, 0)));
    let report = Report::from_bundle(&bundle);
    let lays = report
        .lines()
        .iter()
        .filter(|l| l.tag == LineTag::Lay)
        .count();
    let backs = report
        .lines()
        .iter()
        .filter(|l| l.tag == LineTag::Back)
        .count();
    let expected_lays = bundle
        .recommendations
        .iter()
        .filter(|r| r.side == ExposureSide::Lay)
        .count();
    assert_eq!(lays, expected_lays);
    assert_eq!(backs, bundle.recommendations.len() - expected_lays);
}

#[test]
fn test_json_output_serializes() {
    let bundle = run(Profile::InPlay, &match_at(30.0, Score::default()));
    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["profile"], "in-play");
    assert!(json["top_scorelines"].as_array().unwrap().len() == 5);
}
