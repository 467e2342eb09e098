//! Integration tests for the text field boundary

use odds_apex::engine::FeatureSet;
use odds_apex::params::{FieldMap, InputParser, ValidationError};
use odds_apex::risk::KellyFraction;
use rust_decimal_macros::dec;

fn fields(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_full_in_play_form() {
    let map = fields(&[
        ("home_xg", "1.7"),
        ("away_xg", "1.2"),
        ("elapsed_minutes", "62"),
        ("home_goals", "1"),
        ("away_goals", "1"),
        ("home_possession", "58"),
        ("away_possession", "42"),
        ("home_sot", "5"),
        ("account_balance", "250.50"),
        ("kelly_fraction", "25"),
        ("live_draw_odds", "2.9"),
        ("target_scores", "1-1@3.1, bad, 2-1@6.5"),
    ]);
    let parser = InputParser::new(FeatureSet::InPlay, KellyFraction::default());
    let params = parser.parse(&map).unwrap();

    assert_eq!(params.state.score.total(), 2);
    assert_eq!(params.home.live.shots_on_target, 5);
    assert_eq!(params.bankroll.balance, dec!(250.50));
    assert_eq!(params.bankroll.kelly.value(), dec!(0.25));
    assert_eq!(params.market.match_odds.draw, 2.9);
    assert_eq!(params.market.match_odds.home, 0.0);
    assert_eq!(params.market.targets.len(), 2);
}

#[test]
fn test_pre_match_requires_form_fields() {
    let map = fields(&[("home_xg", "1.7"), ("away_xg", "1.2")]);
    let parser = InputParser::new(FeatureSet::PreMatch, KellyFraction::default());
    assert_eq!(
        parser.parse(&map).unwrap_err(),
        ValidationError::Missing("home_avg_scored")
    );
}

#[test]
fn test_pre_match_does_not_require_clock() {
    let map = fields(&[
        ("home_avg_scored", "1.8"),
        ("home_avg_conceded", "0.9"),
        ("away_avg_scored", "1.1"),
        ("away_avg_conceded", "1.5"),
        ("home_xg", "1.7"),
        ("away_xg", "1.0"),
        ("home_xg_against", "1.0"),
        ("away_xg_against", "1.6"),
        ("home_injuries", "2"),
        ("away_position", "14"),
        ("home_form", "-1"),
    ]);
    let parser = InputParser::new(FeatureSet::PreMatch, KellyFraction::default());
    let params = parser.parse(&map).unwrap();
    assert_eq!(params.home.squad.injuries, 2);
    assert_eq!(params.away.squad.league_position, 14);
    assert_eq!(params.home.squad.form, -1);
}

#[test]
fn test_rejections() {
    let parser = InputParser::new(FeatureSet::InPlay, KellyFraction::default());
    let base = [("home_xg", "1.7"), ("away_xg", "1.2")];

    let mut map = fields(&base);
    map.insert("elapsed_minutes".into(), "95".into());
    assert!(matches!(
        parser.parse(&map),
        Err(ValidationError::OutOfRange { field: "elapsed_minutes", .. })
    ));

    let mut map = fields(&base);
    map.insert("elapsed_minutes".into(), "half".into());
    assert!(matches!(
        parser.parse(&map),
        Err(ValidationError::NotNumeric { .. })
    ));

    let mut map = fields(&base);
    map.insert("elapsed_minutes".into(), "10".into());
    map.insert("home_shots".into(), "4".into());
    assert_eq!(
        parser.parse(&map),
        Err(ValidationError::UnknownField("home_shots".into()))
    );
}
