//! Standings loaders (JSON and CSV)

use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

use super::embedded::StandingsDataset;
use crate::error::{Result, SimulationError};
use crate::models::TeamRecord;

/// Accepted JSON layouts: a full dataset object or a bare array of teams.
#[derive(Deserialize)]
#[serde(untagged)]
enum StandingsFile {
    Dataset(StandingsDataset),
    Teams(Vec<TeamRecord>),
}

pub fn parse_standings_json(json: &str) -> Result<Vec<TeamRecord>> {
    let file: StandingsFile = serde_json::from_str(json)?;
    Ok(match file {
        StandingsFile::Dataset(dataset) => dataset.teams,
        StandingsFile::Teams(teams) => teams,
    })
}

/// Parse CSV with a header row (`name,games_played,points,wins,draws,losses`
/// or the short `name,pj,pts,w,d,l`).
pub fn parse_standings_csv<R: Read>(reader: R) -> Result<Vec<TeamRecord>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut teams = Vec::new();
    for row in reader.deserialize() {
        teams.push(row?);
    }
    Ok(teams)
}

pub fn load_standings_json(path: &Path) -> Result<Vec<TeamRecord>> {
    let content = fs::read_to_string(path).map_err(|e| {
        SimulationError::Dataset(format!("failed to read {}: {e}", path.display()))
    })?;
    parse_standings_json(&content)
}

pub fn load_standings_csv(path: &Path) -> Result<Vec<TeamRecord>> {
    let file = fs::File::open(path).map_err(|e| {
        SimulationError::Dataset(format!("failed to open {}: {e}", path.display()))
    })?;
    parse_standings_csv(file)
}

/// Load standings, picking the format from the file extension.
pub fn load_standings(path: &Path) -> Result<Vec<TeamRecord>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => load_standings_json(path),
        Some("csv") => load_standings_csv(path),
        _ => Err(SimulationError::Dataset(format!(
            "unsupported standings file (expected .json or .csv): {}",
            path.display()
        ))),
    }
}
