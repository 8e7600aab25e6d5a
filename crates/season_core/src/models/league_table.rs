use serde::{Deserialize, Serialize};

use super::TeamRecord;

/// Final standings of one trial. Rank is the 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    entries: Vec<TeamRecord>,
}

impl LeagueTable {
    /// Wrap records that are already in final order.
    pub fn from_ranked(entries: Vec<TeamRecord>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TeamRecord] {
        &self.entries
    }

    /// Iterate `(rank, record)` pairs from the top of the table.
    pub fn iter_ranked(&self) -> impl Iterator<Item = (usize, &TeamRecord)> {
        self.entries.iter().enumerate().map(|(idx, record)| (idx + 1, record))
    }

    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|r| r.name == name).map(|idx| idx + 1)
    }

    pub fn at_rank(&self, rank: usize) -> Option<&TeamRecord> {
        rank.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }
}
