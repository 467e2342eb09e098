//! Calc command implementation

use crate::config::Config;
use crate::engine::{Engine, EngineConfig, Profile, ResultBundle};
use crate::params::{FieldMap, InputParser};
use crate::report::Report;
use anyhow::Context;
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// TOML file of flat `field = value` inputs
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Set or override one input, e.g. `--set home_xg=1.6`
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub overrides: Vec<String>,

    /// Profile to run; defaults to the configured one
    #[arg(long, value_enum)]
    pub profile: Option<Profile>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// How `calc` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl CalcArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let bundle = self.calculate(config)?;
        match self.format {
            OutputFormat::Table => print!("{}", Report::from_bundle(&bundle)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bundle)?),
        }
        Ok(())
    }

    /// Gather inputs and run the engine
    pub fn calculate(&self, config: &Config) -> anyhow::Result<ResultBundle> {
        let profile = self.profile.unwrap_or(config.engine.profile);
        let engine_config = EngineConfig::from_config(config, profile);

        let mut fields = match &self.params {
            Some(path) => read_fields(path)?,
            None => FieldMap::new(),
        };
        for entry in &self.overrides {
            let (name, value) = parse_override(entry)?;
            fields.insert(name, value);
        }
        tracing::debug!(%profile, fields = fields.len(), "Inputs collected");

        let parser = InputParser::new(engine_config.feature_set, config.risk.default_kelly());
        let params = parser.parse(&fields)?;
        Ok(Engine::new(engine_config).calculate(&params)?)
    }
}

/// Read a flat TOML table into text fields
pub fn read_fields(path: &Path) -> anyhow::Result<FieldMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    fields_from_toml(&content).with_context(|| format!("Invalid input file {}", path.display()))
}

/// Flatten `field = value` pairs; strings, integers and floats are accepted
pub fn fields_from_toml(content: &str) -> anyhow::Result<FieldMap> {
    let table: toml::Table = toml::from_str(content)?;
    let mut fields = FieldMap::new();
    for (name, value) in table {
        let text = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            other => anyhow::bail!("Field {} has unsupported type {}", name, other.type_str()),
        };
        fields.insert(name, text);
    }
    Ok(fields)
}

fn parse_override(entry: &str) -> anyhow::Result<(String, String)> {
    let (name, value) = entry
        .split_once('=')
        .with_context(|| format!("Expected FIELD=VALUE, got {:?}", entry))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}
