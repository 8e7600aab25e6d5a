use serde::{Deserialize, Serialize};

/// Size of the qualification and relegation bands of a league table.
///
/// Bands are measured from the ends of the table, so the same rules apply to
/// leagues of any size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneRules {
    /// Top places that qualify for European competition.
    pub europe_places: usize,
    /// Bottom places that are relegated.
    pub relegation_places: usize,
}

impl Default for ZoneRules {
    fn default() -> Self {
        Self { europe_places: 6, relegation_places: 3 }
    }
}

impl ZoneRules {
    pub fn is_europe(&self, rank: usize) -> bool {
        (1..=self.europe_places).contains(&rank)
    }

    /// `rank >= team_count - (relegation_places - 1)`, written without
    /// underflow for small tables.
    pub fn is_relegated(&self, rank: usize, team_count: usize) -> bool {
        rank + self.relegation_places > team_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_team_bands() {
        let zones = ZoneRules::default();
        assert!(!zones.is_europe(0));
        assert!(zones.is_europe(1));
        assert!(zones.is_europe(6));
        assert!(!zones.is_europe(7));

        assert!(!zones.is_relegated(17, 20));
        assert!(zones.is_relegated(18, 20));
        assert!(zones.is_relegated(20, 20));
    }

    #[test]
    fn test_relegation_band_follows_table_size() {
        let zones = ZoneRules::default();
        assert!(!zones.is_relegated(15, 18));
        assert!(zones.is_relegated(16, 18));
    }

    #[test]
    fn test_small_table_is_all_relegation_zone() {
        let zones = ZoneRules::default();
        for rank in 1..=3 {
            assert!(zones.is_relegated(rank, 3));
        }
    }

    #[test]
    fn test_zero_sized_bands() {
        let zones = ZoneRules { europe_places: 0, relegation_places: 0 };
        assert!(!zones.is_europe(1));
        assert!(!zones.is_relegated(20, 20));
    }
}
