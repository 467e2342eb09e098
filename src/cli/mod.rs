//! CLI interface for odds-apex
//!
//! Provides subcommands for:
//! - `calc`: Price one match from input fields
//! - `config`: Show the resolved configuration
//! - `profiles`: List the built-in profiles

mod calc;

pub use calc::{fields_from_toml, read_fields, CalcArgs, OutputFormat};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "odds-apex")]
#[command(about = "Football fair odds and lay/back staking calculator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a match and recommend stakes
    Calc(CalcArgs),
    /// Show the resolved configuration
    Config,
    /// List built-in profiles
    Profiles,
}
