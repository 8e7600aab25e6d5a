//! Standings data
//!
//! - Embedded default standings (LaLiga, matchday 17)
//! - JSON / CSV loaders for externally supplied tables

pub mod embedded;
pub mod loader;

pub use embedded::{default_standings, get_default_dataset, StandingsDataset, LALIGA_STANDINGS_JSON};
pub use loader::{
    load_standings, load_standings_csv, load_standings_json, parse_standings_csv,
    parse_standings_json,
};
