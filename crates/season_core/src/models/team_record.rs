use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Result of a single simulated game from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    /// Sampling order used by the outcome distribution.
    pub const ALL: [MatchOutcome; 3] = [MatchOutcome::Win, MatchOutcome::Draw, MatchOutcome::Loss];

    pub fn points(self) -> u32 {
        match self {
            MatchOutcome::Win => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 0,
        }
    }
}

/// One team's season state.
///
/// The short column names used by published standings sheets (`pj`, `pts`, `w`,
/// `d`, `l`) are accepted as aliases when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    #[serde(alias = "pj")]
    pub games_played: u32,
    #[serde(alias = "pts")]
    pub points: u32,
    #[serde(alias = "w")]
    pub wins: u32,
    #[serde(alias = "d")]
    pub draws: u32,
    #[serde(alias = "l")]
    pub losses: u32,
}

impl TeamRecord {
    /// Build a record from results alone; games played and points are derived.
    pub fn new(name: impl Into<String>, wins: u32, draws: u32, losses: u32) -> Self {
        Self {
            name: name.into(),
            games_played: wins + draws + losses,
            points: wins * 3 + draws,
            wins,
            draws,
            losses,
        }
    }

    /// A team that has not played yet.
    pub fn unplayed(name: impl Into<String>) -> Self {
        Self::new(name, 0, 0, 0)
    }

    /// Total of decided results (`wins + draws + losses`), widened so corrupt
    /// input cannot overflow.
    pub fn decided_games(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.draws) + u64::from(self.losses)
    }

    pub fn remaining_games(&self, season_length: u32) -> u32 {
        season_length.saturating_sub(self.games_played)
    }

    /// Check the record can seed a season of `season_length` games.
    pub fn validate(&self, season_length: u32) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SimulationError::InvalidRecord {
                team: self.name.clone(),
                reason: "team name is empty".to_string(),
            });
        }

        let decided = self.decided_games();
        if decided != u64::from(self.games_played) {
            return Err(SimulationError::InvalidRecord {
                team: self.name.clone(),
                reason: format!(
                    "wins + draws + losses ({}) != games played ({})",
                    decided, self.games_played
                ),
            });
        }

        if self.games_played > season_length {
            return Err(SimulationError::InvalidRecord {
                team: self.name.clone(),
                reason: format!(
                    "games played ({}) exceeds season length ({})",
                    self.games_played, season_length
                ),
            });
        }

        let ceiling = u64::from(self.points)
            + u64::from(self.remaining_games(season_length)) * u64::from(MatchOutcome::Win.points());
        if ceiling > u64::from(u32::MAX) {
            return Err(SimulationError::InvalidRecord {
                team: self.name.clone(),
                reason: format!("points ({}) overflow over the remaining season", self.points),
            });
        }

        Ok(())
    }

    /// Apply one game's result.
    pub fn apply(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Loss => self.losses += 1,
        }
        self.points += outcome.points();
        self.games_played += 1;
    }
}
