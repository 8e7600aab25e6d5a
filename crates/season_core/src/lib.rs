//! # season_core - Deterministic Season Outcome Simulation Engine
//!
//! This library estimates where a team will finish a league season by
//! completing the remaining games many times over and aggregating the final
//! tables.
//!
//! ## Features
//! - 100% deterministic runs (same seed = same result, sequential or parallel)
//! - Per-team win/draw/loss rates taken from the current record
//! - Stable points/wins ranking
//! - Rank, points, relegation and European-qualification statistics
//! - JSON API for easy integration with host applications

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{simulate_season_json, SeasonRequest, SeasonResponse};
pub use data::{default_standings, load_standings};
pub use engine::{
    run, MonteCarloRunner, NoProgress, OutcomeProbabilities, ProgressObserver, SimulationConfig,
};
pub use error::{Result, SimulationError};
pub use models::{AggregateResult, LeagueTable, OutcomeSummary, TeamRecord, ZoneRules};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
