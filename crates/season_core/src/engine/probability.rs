//! Outcome probability model
//!
//! Turns a team's historical record into a win/draw/loss distribution.
//! The estimate is the team's own empirical rate; opponents are not modelled.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{MatchOutcome, TeamRecord};

// ============================================================================
// Probabilities
// ============================================================================

/// Categorical distribution over [`MatchOutcome::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeProbabilities {
    pub win: f64,
    pub draw: f64,
    pub loss: f64,
}

impl OutcomeProbabilities {
    /// Used for a team with no decided games.
    pub const FALLBACK: OutcomeProbabilities =
        OutcomeProbabilities { win: 0.33, draw: 0.33, loss: 0.34 };

    /// Empirical rates of the record (pure function).
    pub fn from_record(record: &TeamRecord) -> Self {
        let total = record.decided_games();
        if total == 0 {
            return Self::FALLBACK;
        }

        let total = total as f64;
        Self {
            win: f64::from(record.wins) / total,
            draw: f64::from(record.draws) / total,
            loss: f64::from(record.losses) / total,
        }
    }

    pub fn weights(&self) -> [f64; 3] {
        [self.win, self.draw, self.loss]
    }

    pub fn total(&self) -> f64 {
        self.win + self.draw + self.loss
    }

    /// Expected points per game under this distribution.
    pub fn expected_points(&self) -> f64 {
        self.win * 3.0 + self.draw
    }
}

// ============================================================================
// Sampler
// ============================================================================

/// Frozen sampler for one team.
///
/// Built once from the record at the start of the run and never updated, so
/// simulated results do not feed back into the estimate.
#[derive(Debug, Clone)]
pub struct OutcomeSampler {
    probabilities: OutcomeProbabilities,
    index: WeightedIndex<f64>,
}

impl OutcomeSampler {
    pub fn new(probabilities: OutcomeProbabilities) -> Result<Self> {
        let index = WeightedIndex::new(probabilities.weights())
            .map_err(|e| SimulationError::InvalidProbabilities(e.to_string()))?;
        Ok(Self { probabilities, index })
    }

    pub fn for_record(record: &TeamRecord) -> Result<Self> {
        Self::new(OutcomeProbabilities::from_record(record)).map_err(|err| {
            SimulationError::InvalidRecord { team: record.name.clone(), reason: err.to_string() }
        })
    }

    pub fn probabilities(&self) -> &OutcomeProbabilities {
        &self.probabilities
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MatchOutcome {
        MatchOutcome::ALL[self.index.sample(rng)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fallback_for_unplayed_team() {
        let probs = OutcomeProbabilities::from_record(&TeamRecord::unplayed("New Club"));
        assert_eq!(probs, OutcomeProbabilities { win: 0.33, draw: 0.33, loss: 0.34 });
    }

    #[test]
    fn test_empirical_rates() {
        let probs = OutcomeProbabilities::from_record(&TeamRecord::new("Levante", 2, 3, 10));
        assert!((probs.win - 2.0 / 15.0).abs() < 1e-12);
        assert!((probs.draw - 3.0 / 15.0).abs() < 1e-12);
        assert!((probs.loss - 10.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_expected_points() {
        let probs = OutcomeProbabilities { win: 0.5, draw: 0.25, loss: 0.25 };
        assert!((probs.expected_points() - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_unbeaten_team_never_loses() {
        let sampler = OutcomeSampler::for_record(&TeamRecord::new("Invincibles", 10, 5, 0)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1_000 {
            assert_ne!(sampler.sample(&mut rng), MatchOutcome::Loss);
        }
    }

    #[test]
    fn test_all_draw_team_always_draws() {
        let sampler = OutcomeSampler::for_record(&TeamRecord::new("Stalemate", 0, 8, 0)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        assert!((0..500).all(|_| sampler.sample(&mut rng) == MatchOutcome::Draw));
    }

    #[test]
    fn test_sampler_rejects_degenerate_weights() {
        let zero = OutcomeProbabilities { win: 0.0, draw: 0.0, loss: 0.0 };
        assert!(matches!(OutcomeSampler::new(zero), Err(SimulationError::InvalidProbabilities(_))));

        let negative = OutcomeProbabilities { win: -0.5, draw: 1.0, loss: 0.5 };
        assert!(matches!(OutcomeSampler::new(negative), Err(SimulationError::InvalidProbabilities(_))));
    }

    proptest! {
        #[test]
        fn prop_probabilities_form_distribution(wins in 0u32..60, draws in 0u32..60, losses in 0u32..60) {
            let probs = OutcomeProbabilities::from_record(&TeamRecord::new("Prop", wins, draws, losses));
            prop_assert!(probs.win >= 0.0 && probs.draw >= 0.0 && probs.loss >= 0.0);
            prop_assert!((probs.total() - 1.0).abs() < 1e-9);
            prop_assert!(OutcomeSampler::new(probs).is_ok());
        }
    }
}
