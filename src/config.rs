//! Configuration types for odds-apex

use crate::engine::Profile;
use crate::model::MAX_GOAL_WINDOW;
use crate::risk::KellyFraction;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineSection,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub risk: RiskConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Engine selection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineSection {
    /// Profile used when the command line does not name one
    #[serde(default)]
    pub profile: Profile,

    /// Number of ranked scorelines to report
    pub top_scorelines: Option<usize>,
}

/// Model overrides; unset values keep the profile preset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    /// Negative binomial dispersion `r`
    pub dispersion: Option<u32>,

    /// Additional goals per side enumerated for outcome probabilities
    pub outcome_goal_window: Option<u32>,

    /// Additional goals per side enumerated for the scoreline table
    pub scoreline_grid: Option<u32>,

    /// Zero inflation of the scoreline kernel, in [0, 1)
    pub zero_inflation: Option<f64>,

    /// Market share of the probability blend, in [0, 1]
    pub market_weight: Option<f64>,
}

/// Risk management configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RiskConfig {
    /// Kelly percentage used when the input leaves it blank
    #[serde(default = "default_kelly_pct")]
    pub default_kelly_pct: Decimal,

    /// Lay liability cap as a fraction of balance; 0 disables the cap
    pub max_liability_pct: Option<Decimal>,
}

fn default_kelly_pct() -> Decimal {
    Decimal::new(125, 1) // 12.5%
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            default_kelly_pct: default_kelly_pct(),
            max_liability_pct: None,
        }
    }
}

impl RiskConfig {
    /// Fallback Kelly fraction for inputs that omit one
    pub fn default_kelly(&self) -> KellyFraction {
        KellyFraction::from_percent(self.default_kelly_pct).unwrap_or_default()
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the models cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        let model = &self.model;
        if model.dispersion == Some(0) {
            anyhow::bail!("model.dispersion must be at least 1");
        }
        for (name, window) in [
            ("outcome_goal_window", model.outcome_goal_window),
            ("scoreline_grid", model.scoreline_grid),
        ] {
            if let Some(window) = window {
                if !(1..=MAX_GOAL_WINDOW).contains(&window) {
                    anyhow::bail!(
                        "model.{} must be in [1, {}], got {}",
                        name,
                        MAX_GOAL_WINDOW,
                        window
                    );
                }
            }
        }
        if let Some(p0) = model.zero_inflation {
            if !(0.0..1.0).contains(&p0) {
                anyhow::bail!("model.zero_inflation must be in [0, 1), got {}", p0);
            }
        }
        if let Some(weight) = model.market_weight {
            if !(0.0..=1.0).contains(&weight) {
                anyhow::bail!("model.market_weight must be in [0, 1], got {}", weight);
            }
        }
        if self.risk.default_kelly_pct <= Decimal::ZERO {
            anyhow::bail!("risk.default_kelly_pct must be positive");
        }
        if let Some(cap) = self.risk.max_liability_pct {
            if cap < Decimal::ZERO || cap > Decimal::ONE {
                anyhow::bail!("risk.max_liability_pct must be in [0, 1], got {}", cap);
            }
        }
        Ok(())
    }
}
