// Season simulation JSON API
use serde::{Deserialize, Serialize};

use crate::data::default_standings;
use crate::engine::{MonteCarloRunner, SimulationConfig};
use crate::error::{Result, SimulationError};
use crate::models::{AggregateResult, OutcomeSummary, TeamRecord, ZoneRules};
use crate::SCHEMA_VERSION;

/// Season simulation request - sent by the host application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRequest {
    pub schema_version: u8,
    pub target_team: String,
    pub num_trials: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub season_length: Option<u32>,
    #[serde(default)]
    pub zones: Option<ZoneRules>,
    #[serde(default)]
    pub parallel: bool,
    /// Starting standings; the embedded default table when omitted.
    #[serde(default)]
    pub standings: Option<Vec<TeamRecord>>,
}

impl SeasonRequest {
    pub fn config(&self) -> SimulationConfig {
        let defaults = SimulationConfig::default();
        SimulationConfig {
            season_length: self.season_length.unwrap_or(defaults.season_length),
            seed: self.seed,
            zones: self.zones.unwrap_or(defaults.zones),
            parallel: self.parallel,
        }
    }
}

/// Season simulation response - returned to the host application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonResponse {
    pub schema_version: u8,
    pub success: bool,
    pub generated_at: String,
    pub summary: Option<OutcomeSummary>,
    pub result: Option<AggregateResult>,
    pub error_message: Option<String>,
}

impl SeasonResponse {
    fn completed(result: AggregateResult) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            success: true,
            generated_at: chrono::Utc::now().to_rfc3339(),
            summary: Some(result.summary()),
            result: Some(result),
            error_message: None,
        }
    }

    fn failed(err: &SimulationError) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            success: false,
            generated_at: chrono::Utc::now().to_rfc3339(),
            summary: None,
            result: None,
            error_message: Some(err.to_string()),
        }
    }
}

/// Run a season simulation described by a JSON request.
///
/// Malformed JSON and unsupported schema versions are returned as `Err`;
/// simulation input errors come back as a response with `success: false`.
pub fn simulate_season_json(request_json: &str) -> Result<String> {
    let request: SeasonRequest = serde_json::from_str(request_json)
        .map_err(|e| SimulationError::InvalidConfig(format!("invalid JSON request: {e}")))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(SimulationError::InvalidConfig(format!(
            "unsupported schema version: {}",
            request.schema_version
        )));
    }

    let response = match run_request(&request) {
        Ok(result) => SeasonResponse::completed(result),
        Err(err) => {
            if err.is_request_error() {
                tracing::warn!(error = %err, target_team = %request.target_team, "season request rejected");
            } else {
                tracing::error!(error = %err, target_team = %request.target_team, "season standings rejected");
            }
            SeasonResponse::failed(&err)
        }
    };

    Ok(serde_json::to_string(&response)?)
}

fn run_request(request: &SeasonRequest) -> Result<AggregateResult> {
    let runner = MonteCarloRunner::new(request.config())?;
    match &request.standings {
        Some(standings) => runner.run(standings, &request.target_team, request.num_trials),
        None => runner.run(&default_standings(), &request.target_team, request.num_trials),
    }
}
