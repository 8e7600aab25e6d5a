use serde::{Deserialize, Serialize};

use super::ZoneRules;

/// Target team's final position in one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub rank: usize,
    pub points: u32,
}

/// Accumulated outcomes of one simulation run for a single target team.
///
/// `ranks` and `points` are in trial order. The Europe band overlaps the safe
/// band, so `relegated_count + safe_count` always equals the trial count while
/// `europe_count` is counted independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub target_team: String,
    pub team_count: usize,
    /// Seed the run was keyed with; rerunning with it reproduces the result.
    pub seed: u64,
    pub ranks: Vec<usize>,
    pub points: Vec<u32>,
    pub relegated_count: usize,
    pub safe_count: usize,
    pub europe_count: usize,
}

impl AggregateResult {
    pub(crate) fn new(target_team: &str, team_count: usize, seed: u64, capacity: usize) -> Self {
        Self {
            target_team: target_team.to_string(),
            team_count,
            seed,
            ranks: Vec::with_capacity(capacity),
            points: Vec::with_capacity(capacity),
            relegated_count: 0,
            safe_count: 0,
            europe_count: 0,
        }
    }

    /// Fold one completed trial into the totals.
    pub(crate) fn record(&mut self, outcome: TrialOutcome, zones: &ZoneRules) {
        self.ranks.push(outcome.rank);
        self.points.push(outcome.points);

        if zones.is_europe(outcome.rank) {
            self.europe_count += 1;
        }
        if zones.is_relegated(outcome.rank, self.team_count) {
            self.relegated_count += 1;
        } else {
            self.safe_count += 1;
        }
    }

    pub fn trials(&self) -> usize {
        self.ranks.len()
    }

    /// Number of trials finishing at each rank; index 0 is rank 1.
    pub fn rank_histogram(&self) -> Vec<usize> {
        let mut histogram = vec![0; self.team_count];
        for &rank in &self.ranks {
            if let Some(bucket) = rank.checked_sub(1).and_then(|idx| histogram.get_mut(idx)) {
                *bucket += 1;
            }
        }
        histogram
    }

    pub fn summary(&self) -> OutcomeSummary {
        let trials = self.trials();
        let pct = |count: usize| {
            if trials == 0 {
                0.0
            } else {
                count as f64 / trials as f64 * 100.0
            }
        };
        let mean = |total: u64| if trials == 0 { 0.0 } else { total as f64 / trials as f64 };

        OutcomeSummary {
            trials,
            safe_pct: pct(self.safe_count),
            relegation_pct: pct(self.relegated_count),
            europe_pct: pct(self.europe_count),
            average_rank: mean(self.ranks.iter().map(|&r| r as u64).sum()),
            best_rank: self.ranks.iter().min().copied(),
            worst_rank: self.ranks.iter().max().copied(),
            average_points: mean(self.points.iter().map(|&p| u64::from(p)).sum()),
            min_points: self.points.iter().min().copied(),
            max_points: self.points.iter().max().copied(),
            rank_histogram: self.rank_histogram(),
        }
    }
}

/// Headline figures derived from an [`AggregateResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    pub trials: usize,
    pub safe_pct: f64,
    pub relegation_pct: f64,
    pub europe_pct: f64,
    pub average_rank: f64,
    pub best_rank: Option<usize>,
    pub worst_rank: Option<usize>,
    pub average_points: f64,
    pub min_points: Option<u32>,
    pub max_points: Option<u32>,
    pub rank_histogram: Vec<usize>,
}
