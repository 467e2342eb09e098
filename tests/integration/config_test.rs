//! Integration tests for configuration and profile resolution

use odds_apex::config::Config;
use odds_apex::engine::{EngineConfig, OutcomeKernel, Profile};
use rust_decimal_macros::dec;
use std::io::Write;

#[test]
fn test_example_config_loads() {
    let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example")).unwrap();
    assert_eq!(config.engine.profile, Profile::InPlay);
    assert_eq!(config.engine.top_scorelines, Some(5));
    assert_eq!(config.risk.default_kelly_pct, dec!(12.5));
}

#[test]
fn test_overrides_apply_to_preset() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [engine]
        top_scorelines = 3

        [model]
        dispersion = 5
        scoreline_grid = 12
        market_weight = 0.0

        [risk]
        max_liability_pct = 0.2
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let resolved = EngineConfig::from_config(&config, Profile::InPlay);
    assert_eq!(
        resolved.outcome_kernel,
        OutcomeKernel::NegativeBinomial { dispersion: 5 }
    );
    assert_eq!(resolved.scoreline_grid, 12);
    assert_eq!(resolved.market_weight, 0.0);
    assert_eq!(resolved.top_scorelines, 3);
    assert_eq!(resolved.max_liability_pct, Some(dec!(0.2)));
}

#[test]
fn test_dispersion_does_not_change_table_kernel() {
    let config = Config::parse("[model]\ndispersion = 5").unwrap();
    let resolved = EngineConfig::from_config(&config, Profile::PreMatch);
    assert_eq!(resolved.outcome_kernel, OutcomeKernel::ScorelineTable);
}

#[test]
fn test_zero_cap_disables_liability_cap() {
    let config = Config::parse("[risk]\nmax_liability_pct = 0").unwrap();
    let resolved = EngineConfig::from_config(&config, Profile::InPlay);
    assert_eq!(resolved.max_liability_pct, None);
}

#[test]
fn test_invalid_config_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[model]\nmarket_weight = -0.1").unwrap();
    assert!(Config::load(file.path()).is_err());
}
