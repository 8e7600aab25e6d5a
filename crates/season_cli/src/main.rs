//! Season Simulator CLI
//!
//! Projects a team's final league position by completing the remaining
//! season many times over.

mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use season_core::engine::is_progress_step;
use season_core::{
    default_standings, load_standings, MonteCarloRunner, SimulationConfig, TeamRecord,
};

use report::{render_text, SimulationReport};

#[derive(Parser)]
#[command(name = "season_cli")]
#[command(about = "Monte Carlo projection of final league standings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate the rest of the season for one team
    Simulate {
        /// Team to track (must match a name in the standings exactly)
        #[arg(long)]
        team: String,

        /// Number of simulated seasons
        #[arg(long, default_value_t = 1000)]
        trials: usize,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Games per team in a full season
        #[arg(long)]
        season_length: Option<u32>,

        /// Top places that qualify for Europe
        #[arg(long)]
        europe_places: Option<usize>,

        /// Bottom places that are relegated
        #[arg(long)]
        relegation_places: Option<usize>,

        /// Run trials on all cores
        #[arg(long, default_value = "false")]
        parallel: bool,

        /// Standings file (.json or .csv); embedded LaLiga table when omitted
        #[arg(long)]
        standings: Option<PathBuf>,

        /// Simulation config JSON (overrides SEASON_SIM_CONFIG_PATH)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the full report as JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,

        /// Also write the JSON report to this file
        #[arg(long)]
        out: Option<PathBuf>,

        /// Suppress progress output
        #[arg(long, default_value = "false")]
        quiet: bool,
    },

    /// List the teams of a standings table in table order
    Teams {
        /// Standings file (.json or .csv); embedded LaLiga table when omitted
        #[arg(long)]
        standings: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            team,
            trials,
            seed,
            season_length,
            europe_places,
            relegation_places,
            parallel,
            standings,
            config,
            json,
            out,
            quiet,
        } => {
            let mut config = resolve_config(config.as_deref())?;
            if let Some(seed) = seed {
                config.seed = Some(seed);
            }
            if let Some(season_length) = season_length {
                config.season_length = season_length;
            }
            if let Some(places) = europe_places {
                config.zones.europe_places = places;
            }
            if let Some(places) = relegation_places {
                config.zones.relegation_places = places;
            }
            config.parallel |= parallel;

            let teams = resolve_standings(standings.as_deref())?;
            let runner = MonteCarloRunner::new(config.clone())?;

            let show_progress = !quiet && !json;
            if show_progress {
                println!("🎲 Simulating {} seasons for {}...", trials, team);
            }
            let progress = |done: usize, total: usize| {
                if show_progress && is_progress_step(done, total, 10) {
                    println!("   {:>3}% ({}/{})", done * 100 / total, done, total);
                }
            };

            let result = runner
                .run_with_progress(&teams, &team, trials, &progress)
                .with_context(|| format!("Simulation for '{}' failed", team))?;

            let report = SimulationReport::new(config, result);
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", render_text(&report.result));
            }

            if let Some(path) = out {
                report.save(&path)?;
                if !json {
                    println!("\n📄 Report saved to: {}", path.display());
                }
            }
        }

        Commands::Teams { standings } => {
            let teams = resolve_standings(standings.as_deref())?;
            for (idx, record) in teams.iter().enumerate() {
                println!(
                    "{:>3}. {:<24} GP {:>2}  W {:>2}  D {:>2}  L {:>2}  Pts {:>3}",
                    idx + 1,
                    record.name,
                    record.games_played,
                    record.wins,
                    record.draws,
                    record.losses,
                    record.points
                );
            }
        }
    }

    Ok(())
}

/// `--config` file, then `SEASON_SIM_CONFIG_PATH`, then defaults.
fn resolve_config(path: Option<&Path>) -> Result<SimulationConfig> {
    if let Some(path) = path {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = SimulationConfig::from_json(&content)?;
        config.validate()?;
        return Ok(config);
    }

    Ok(SimulationConfig::from_env()?.unwrap_or_default())
}

fn resolve_standings(path: Option<&Path>) -> Result<Vec<TeamRecord>> {
    match path {
        Some(path) => load_standings(path)
            .with_context(|| format!("Failed to load standings: {}", path.display())),
        None => Ok(default_standings()),
    }
}
