//! Text field boundary
//!
//! Front ends collect inputs as named text fields. Required fields must hold
//! a number; optional fields left blank read as 0. The Kelly percentage falls
//! back to its default when blank, non-numeric or not positive, and target
//! scorelines that fail to parse are skipped.

use super::{
    Bankroll, InPlayStats, MatchState, ParameterSet, SquadFactors, TeamForm, TeamStats,
    ValidationError,
};
use crate::engine::FeatureSet;
use crate::market::{parse_targets, MarketQuotes, MatchOdds};
use crate::model::Score;
use crate::risk::KellyFraction;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Field name to raw text
pub type FieldMap = BTreeMap<String, String>;

/// Every field name the parser understands
pub const FIELD_NAMES: &[&str] = &[
    "home_avg_scored",
    "home_avg_conceded",
    "away_avg_scored",
    "away_avg_conceded",
    "home_xg",
    "away_xg",
    "home_xg_against",
    "away_xg_against",
    "elapsed_minutes",
    "home_goals",
    "away_goals",
    "in_game_home_xg",
    "in_game_away_xg",
    "home_possession",
    "away_possession",
    "home_sot",
    "away_sot",
    "home_opp_box",
    "away_opp_box",
    "home_corners",
    "away_corners",
    "home_injuries",
    "away_injuries",
    "home_position",
    "away_position",
    "home_form",
    "away_form",
    "account_balance",
    "kelly_fraction",
    "live_home_odds",
    "live_draw_odds",
    "live_away_odds",
    "live_over_odds",
    "live_under_odds",
    "target_scores",
];

const IN_PLAY_REQUIRED: &[&str] = &["home_xg", "away_xg", "elapsed_minutes"];

const PRE_MATCH_REQUIRED: &[&str] = &[
    "home_avg_scored",
    "home_avg_conceded",
    "away_avg_scored",
    "away_avg_conceded",
    "home_xg",
    "away_xg",
    "home_xg_against",
    "away_xg_against",
];

/// Parses a field map into a validated `ParameterSet`
#[derive(Debug, Clone, Copy)]
pub struct InputParser {
    feature_set: FeatureSet,
    default_kelly: KellyFraction,
}

impl InputParser {
    pub fn new(feature_set: FeatureSet, default_kelly: KellyFraction) -> Self {
        Self {
            feature_set,
            default_kelly,
        }
    }

    fn required(&self) -> &'static [&'static str] {
        match self.feature_set {
            FeatureSet::InPlay => IN_PLAY_REQUIRED,
            FeatureSet::PreMatch => PRE_MATCH_REQUIRED,
        }
    }

    /// Parse and validate. The first offending field aborts the parse.
    pub fn parse(&self, fields: &FieldMap) -> Result<ParameterSet, ValidationError> {
        if let Some(unknown) = fields.keys().find(|k| !FIELD_NAMES.contains(&k.as_str())) {
            return Err(ValidationError::UnknownField(unknown.clone()));
        }

        let reader = Reader {
            fields,
            required: self.required(),
        };

        let kelly =
            KellyFraction::from_percent_input(reader.text("kelly_fraction"), self.default_kelly);
        let params = ParameterSet {
            home: TeamStats {
                form: TeamForm {
                    avg_scored: reader.f64("home_avg_scored")?,
                    avg_conceded: reader.f64("home_avg_conceded")?,
                    xg_for: reader.f64("home_xg")?,
                    xg_against: reader.f64("home_xg_against")?,
                },
                live: InPlayStats {
                    in_game_xg: reader.f64("in_game_home_xg")?,
                    possession: reader.f64("home_possession")?,
                    shots_on_target: reader.parsed("home_sot")?,
                    box_touches: reader.f64("home_opp_box")?,
                    corners: reader.f64("home_corners")?,
                },
                squad: SquadFactors {
                    injuries: reader.parsed("home_injuries")?,
                    league_position: reader.parsed("home_position")?,
                    form: reader.parsed("home_form")?,
                },
            },
            away: TeamStats {
                form: TeamForm {
                    avg_scored: reader.f64("away_avg_scored")?,
                    avg_conceded: reader.f64("away_avg_conceded")?,
                    xg_for: reader.f64("away_xg")?,
                    xg_against: reader.f64("away_xg_against")?,
                },
                live: InPlayStats {
                    in_game_xg: reader.f64("in_game_away_xg")?,
                    possession: reader.f64("away_possession")?,
                    shots_on_target: reader.parsed("away_sot")?,
                    box_touches: reader.f64("away_opp_box")?,
                    corners: reader.f64("away_corners")?,
                },
                squad: SquadFactors {
                    injuries: reader.parsed("away_injuries")?,
                    league_position: reader.parsed("away_position")?,
                    form: reader.parsed("away_form")?,
                },
            },
            state: MatchState {
                elapsed_minutes: reader.f64("elapsed_minutes")?,
                score: Score::new(reader.parsed("home_goals")?, reader.parsed("away_goals")?),
            },
            bankroll: Bankroll::new(
                reader.parsed::<Decimal>("account_balance")?,
                kelly,
            ),
            market: MarketQuotes {
                match_odds: MatchOdds::new(
                    reader.f64("live_home_odds")?,
                    reader.f64("live_draw_odds")?,
                    reader.f64("live_away_odds")?,
                ),
                over: reader.f64("live_over_odds")?,
                under: reader.f64("live_under_odds")?,
                targets: reader.text("target_scores").map(parse_targets).unwrap_or_default(),
            },
        };

        params.validate()?;
        Ok(params)
    }
}

struct Reader<'a> {
    fields: &'a FieldMap,
    required: &'static [&'static str],
}

impl Reader<'_> {
    /// Trimmed, non-blank text for a field
    fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    fn parsed<T: FromStr + Default>(&self, name: &'static str) -> Result<T, ValidationError> {
        match self.text(name) {
            Some(raw) => raw.parse().map_err(|_| ValidationError::NotNumeric {
                field: name.to_string(),
                value: raw.to_string(),
            }),
            None if self.required.contains(&name) => Err(ValidationError::Missing(name)),
            None => Ok(T::default()),
        }
    }

    /// Like `parsed`, rejecting inf and NaN spellings
    fn f64(&self, name: &'static str) -> Result<f64, ValidationError> {
        let value: f64 = self.parsed(name)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ValidationError::NotNumeric {
                field: name.to_string(),
                value: value.to_string(),
            })
        }
    }
}
