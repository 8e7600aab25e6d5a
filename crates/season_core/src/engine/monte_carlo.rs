//! Monte Carlo trial aggregation
//!
//! Runs many independent completions of the same season and tracks where the
//! target team finishes in each one.
//!
//! Key properties:
//! - Inputs are validated before the first trial; trials themselves cannot fail
//! - Every trial starts from a fresh copy of the standings
//! - Trial `i` draws from ChaCha8 stream `i` of the run seed, so results are
//!   identical whether trials run sequentially or on the rayon pool

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info, trace};

use super::config::SimulationConfig;
use super::probability::OutcomeSampler;
use super::progress::{NoProgress, ProgressObserver};
use super::ranking::{final_rank, rank_standings};
use super::season::simulate_remaining;
use crate::error::{Result, SimulationError};
use crate::models::{AggregateResult, LeagueTable, TeamRecord, TrialOutcome};

/// Generator for one trial: the run seed keys it, the trial index picks the stream.
pub fn trial_rng(seed: u64, trial_index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(trial_index);
    rng
}

// ============================================================================
// League plan
// ============================================================================

/// Validated starting standings plus each team's frozen outcome sampler.
#[derive(Debug, Clone)]
pub struct LeaguePlan<'a> {
    teams: &'a [TeamRecord],
    samplers: Vec<OutcomeSampler>,
    target_index: usize,
    season_length: u32,
}

impl<'a> LeaguePlan<'a> {
    /// Validate the standings and target, then freeze every team's distribution.
    pub fn prepare(teams: &'a [TeamRecord], target_team: &str, season_length: u32) -> Result<Self> {
        if teams.is_empty() {
            return Err(SimulationError::EmptyStandings);
        }

        let mut seen = HashSet::with_capacity(teams.len());
        for record in teams {
            if !seen.insert(record.name.as_str()) {
                return Err(SimulationError::DuplicateTeam { name: record.name.clone() });
            }
        }

        let target_index = teams
            .iter()
            .position(|r| r.name == target_team)
            .ok_or_else(|| SimulationError::UnknownTeam { name: target_team.to_string() })?;

        let samplers = teams
            .iter()
            .map(|record| -> Result<OutcomeSampler> {
                record.validate(season_length)?;
                let sampler = OutcomeSampler::for_record(record)?;
                let p = sampler.probabilities();
                trace!(
                    team = %record.name,
                    win = p.win,
                    draw = p.draw,
                    loss = p.loss,
                    expected_ppg = p.expected_points(),
                    "frozen outcome rates"
                );
                Ok(sampler)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { teams, samplers, target_index, season_length })
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    fn complete_season(&self, seed: u64, trial_index: u64) -> Vec<TeamRecord> {
        let mut rng = trial_rng(seed, trial_index);
        let mut season = self.teams.to_vec();

        for (record, sampler) in season.iter_mut().zip(&self.samplers) {
            simulate_remaining(record, sampler, self.season_length, &mut rng);
        }

        season
    }

    /// Complete the season once from a fresh copy of the standings.
    pub fn play_trial(&self, seed: u64, trial_index: u64) -> LeagueTable {
        rank_standings(self.complete_season(seed, trial_index))
    }

    /// Complete the season once and report only where the target finished.
    pub fn play_target_trial(&self, seed: u64, trial_index: u64) -> TrialOutcome {
        let season = self.complete_season(seed, trial_index);
        TrialOutcome {
            rank: final_rank(&season, self.target_index),
            points: season[self.target_index].points,
        }
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Drives repeated season trials for one configuration.
#[derive(Debug, Clone)]
pub struct MonteCarloRunner {
    config: SimulationConfig,
}

impl MonteCarloRunner {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn run(
        &self,
        standings: &[TeamRecord],
        target_team: &str,
        num_trials: usize,
    ) -> Result<AggregateResult> {
        self.run_with_progress(standings, target_team, num_trials, &NoProgress)
    }

    /// Run `num_trials` trials, notifying `progress` after each one.
    pub fn run_with_progress<P: ProgressObserver + ?Sized>(
        &self,
        standings: &[TeamRecord],
        target_team: &str,
        num_trials: usize,
        progress: &P,
    ) -> Result<AggregateResult> {
        if num_trials < 1 {
            return Err(SimulationError::InvalidTrialCount { requested: num_trials });
        }
        let plan = LeaguePlan::prepare(standings, target_team, self.config.season_length)?;

        let seed = self.config.seed.unwrap_or_else(rand::random);
        debug!(
            target_team,
            teams = plan.team_count(),
            num_trials,
            seed,
            season_length = self.config.season_length,
            parallel = self.config.parallel,
            "starting season simulation"
        );

        let started = Instant::now();
        let mut result = AggregateResult::new(target_team, plan.team_count(), seed, num_trials);

        if self.config.parallel {
            let completed = AtomicUsize::new(0);
            let outcomes = (0..num_trials)
                .into_par_iter()
                .map(|trial| {
                    let outcome = trial_outcome(&plan, seed, trial);
                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    progress.on_trial_complete(done, num_trials);
                    outcome
                })
                .collect::<Vec<_>>();

            for outcome in outcomes {
                result.record(outcome, &self.config.zones);
            }
        } else {
            for trial in 0..num_trials {
                let outcome = trial_outcome(&plan, seed, trial);
                result.record(outcome, &self.config.zones);
                progress.on_trial_complete(trial + 1, num_trials);
            }
        }

        info!(
            target_team,
            num_trials,
            relegated = result.relegated_count,
            safe = result.safe_count,
            europe = result.europe_count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "season simulation complete"
        );

        Ok(result)
    }
}

fn trial_outcome(plan: &LeaguePlan<'_>, seed: u64, trial: usize) -> TrialOutcome {
    let outcome = plan.play_target_trial(seed, trial as u64);
    trace!(trial, rank = outcome.rank, points = outcome.points, "trial finished");
    outcome
}

/// Convenience entry point with the default zone rules.
pub fn run(
    standings: &[TeamRecord],
    target_team: &str,
    num_trials: usize,
    season_length: u32,
    seed: Option<u64>,
) -> Result<AggregateResult> {
    let config = SimulationConfig { season_length, seed, ..SimulationConfig::default() };
    MonteCarloRunner::new(config)?.run(standings, target_team, num_trials)
}
