use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Unknown team: {name}")]
    UnknownTeam { name: String },

    #[error("Invalid trial count: {requested} (at least 1 trial is required)")]
    InvalidTrialCount { requested: usize },

    #[error("Invalid record for {team}: {reason}")]
    InvalidRecord { team: String, reason: String },

    #[error("Standings contain no teams")]
    EmptyStandings,

    #[error("Duplicate team name: {name}")]
    DuplicateTeam { name: String },

    #[error("Invalid outcome probabilities: {0}")]
    InvalidProbabilities(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Dataset error: {0}")]
    Dataset(String),
}

impl SimulationError {
    /// Errors caused by the caller's request rather than the standings data.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            SimulationError::UnknownTeam { .. }
                | SimulationError::InvalidTrialCount { .. }
                | SimulationError::InvalidConfig(_)
        )
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        SimulationError::Dataset(err.to_string())
    }
}

impl From<csv::Error> for SimulationError {
    fn from(err: csv::Error) -> Self {
        SimulationError::Dataset(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SimulationError::UnknownTeam { name: "Atlantis FC".to_string() };
        assert_eq!(err.to_string(), "Unknown team: Atlantis FC");

        let err = SimulationError::InvalidRecord {
            team: "Levante".to_string(),
            reason: "wins + draws + losses (14) != games played (15)".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid record for Levante"));
    }

    #[test]
    fn test_request_error_classification() {
        assert!(SimulationError::InvalidTrialCount { requested: 0 }.is_request_error());
        assert!(!SimulationError::EmptyStandings.is_request_error());
        assert!(!SimulationError::Dataset("bad".into()).is_request_error());
        assert!(SimulationError::UnknownTeam { name: "Atlantis FC".into() }.is_request_error());
        assert!(!SimulationError::InvalidRecord { team: "Alpha".into(), reason: "x".into() }.is_request_error());
    }

    #[test]
    fn test_json_error_converts_to_dataset() {
        let err: SimulationError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, SimulationError::Dataset(_)));
    }
}
