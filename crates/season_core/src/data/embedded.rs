//! Embedded standings
//!
//! The default dataset is compiled into the binary with `include_str!` so the
//! engine can run without any file I/O.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::models::TeamRecord;

/// LaLiga table after matchday 17 of 2025-26.
pub const LALIGA_STANDINGS_JSON: &str = include_str!("../../../../data/laliga_standings.json");

/// A standings snapshot with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsDataset {
    pub league: String,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub matchday: Option<u32>,
    pub teams: Vec<TeamRecord>,
}

static LALIGA_STANDINGS: OnceLock<StandingsDataset> = OnceLock::new();

pub fn get_default_dataset() -> &'static StandingsDataset {
    LALIGA_STANDINGS.get_or_init(|| {
        serde_json::from_str(LALIGA_STANDINGS_JSON).expect("Embedded standings JSON is corrupted")
    })
}

/// Fresh copy of the default standings, in table order.
pub fn default_standings() -> Vec<TeamRecord> {
    get_default_dataset().teams.clone()
}
