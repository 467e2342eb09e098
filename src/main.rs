use clap::Parser;
use odds_apex::cli::{Cli, Commands};
use odds_apex::config::Config;
use odds_apex::engine::{EngineConfig, Profile};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::parse(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    let _guard = odds_apex::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Calc(args) => {
            args.execute(&config)?;
        }
        Commands::Config => {
            let engine = EngineConfig::from_config(&config, config.engine.profile);
            println!("Current configuration:");
            println!("  Profile: {}", engine.profile);
            println!(
                "  Model: kernel={:?}, outcome window={}, scoreline grid={}",
                engine.outcome_kernel, engine.outcome_goal_window, engine.scoreline_grid
            );
            println!(
                "  Blend: market weight={}, zero inflation={}",
                engine.market_weight, engine.zero_inflation
            );
            println!(
                "  Risk: Kelly={}%, MaxLiability={}",
                config.risk.default_kelly_pct,
                engine
                    .max_liability_pct
                    .map(|cap| format!("{}%", cap * rust_decimal_macros::dec!(100)))
                    .unwrap_or_else(|| "none".to_string())
            );
            println!(
                "  Telemetry: level={}, format={:?}",
                config.telemetry.log_level, config.telemetry.format
            );
        }
        Commands::Profiles => {
            for profile in Profile::ALL {
                let preset = EngineConfig::preset(profile);
                println!(
                    "{:<14} features={:?} kernel={:?} goal_line={:?}",
                    profile.name(),
                    preset.feature_set,
                    preset.outcome_kernel,
                    preset.goal_line
                );
            }
        }
    }

    Ok(())
}
