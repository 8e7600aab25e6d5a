use rand::Rng;

use super::probability::OutcomeSampler;
use crate::models::TeamRecord;

/// Play out the rest of one team's season.
///
/// Every remaining game is an independent draw from `sampler`; there is no
/// momentum and no opponent. Returns the number of games simulated, which is
/// always `season_length - games_played` at entry (or zero).
pub fn simulate_remaining<R: Rng + ?Sized>(
    record: &mut TeamRecord,
    sampler: &OutcomeSampler,
    season_length: u32,
    rng: &mut R,
) -> u32 {
    let remaining = record.remaining_games(season_length);
    for _ in 0..remaining {
        record.apply(sampler.sample(rng));
    }
    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::probability::OutcomeProbabilities;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_runs_to_season_length() {
        let mut record = TeamRecord::new("Villarreal", 11, 2, 2);
        let sampler = OutcomeSampler::for_record(&record).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let simulated = simulate_remaining(&mut record, &sampler, 38, &mut rng);

        assert_eq!(simulated, 23);
        assert_eq!(record.games_played, 38);
        assert_eq!(record.decided_games(), 38);
    }

    #[test]
    fn test_points_track_results() {
        let mut record = TeamRecord::new("Real Betis", 6, 6, 3);
        let sampler = OutcomeSampler::for_record(&record).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        simulate_remaining(&mut record, &sampler, 38, &mut rng);

        assert_eq!(record.points, record.wins * 3 + record.draws);
    }

    #[test]
    fn test_complete_record_is_untouched() {
        let mut record = TeamRecord::new("Finished", 20, 10, 8);
        let before = record.clone();
        let sampler = OutcomeSampler::for_record(&record).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(simulate_remaining(&mut record, &sampler, 38, &mut rng), 0);
        assert_eq!(record, before);
    }

    #[test]
    fn test_perfect_record_keeps_winning() {
        let mut record = TeamRecord::new("Perfect", 5, 0, 0);
        let sampler = OutcomeSampler::for_record(&record).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        simulate_remaining(&mut record, &sampler, 10, &mut rng);

        assert_eq!(record.wins, 10);
        assert_eq!(record.points, 30);
    }

    #[test]
    fn test_fallback_win_rate() {
        let sampler = OutcomeSampler::new(OutcomeProbabilities::FALLBACK).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut wins = 0u64;
        let mut games = 0u64;

        for _ in 0..2_000 {
            let mut record = TeamRecord::unplayed("Newcomers");
            games += u64::from(simulate_remaining(&mut record, &sampler, 38, &mut rng));
            wins += u64::from(record.wins);
        }

        let win_rate = wins as f64 / games as f64;
        assert!((win_rate - 0.33).abs() < 0.01, "win rate {win_rate}");
    }
}
