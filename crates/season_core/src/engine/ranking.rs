use std::cmp::Ordering;

use crate::models::{LeagueTable, TeamRecord};

/// Table order: points descending, then wins descending.
///
/// Anything still tied compares equal and keeps its input order.
pub fn compare_standing(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.points.cmp(&a.points).then_with(|| b.wins.cmp(&a.wins))
}

/// Sort completed records into the final table.
pub fn rank_standings(mut records: Vec<TeamRecord>) -> LeagueTable {
    // `sort_by` is stable; reproducibility depends on it.
    records.sort_by(compare_standing);
    LeagueTable::from_ranked(records)
}

/// 1-based final rank of `records[index]`, equal to its position in
/// `rank_standings(records)` but without sorting.
pub fn final_rank(records: &[TeamRecord], index: usize) -> usize {
    let target = &records[index];
    let ahead = records
        .iter()
        .enumerate()
        .filter(|&(i, other)| match compare_standing(other, target) {
            Ordering::Less => true,
            Ordering::Equal => i < index,
            Ordering::Greater => false,
        })
        .count();
    ahead + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(table: &LeagueTable) -> Vec<&str> {
        table.entries().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_points_then_wins() {
        let table = rank_standings(vec![
            TeamRecord::new("Sevilla", 6, 2, 8),  // 20 pts, 6 wins
            TeamRecord::new("Elche", 4, 7, 5),    // 19 pts
            TeamRecord::new("Valencia", 3, 6, 7), // 15 pts, 3 wins
            TeamRecord::new("Osasuna", 4, 3, 9),  // 15 pts, 4 wins
        ]);

        assert_eq!(names(&table), vec!["Sevilla", "Elche", "Osasuna", "Valencia"]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let table = rank_standings(vec![
            TeamRecord::new("Valencia C. F.", 3, 6, 7),
            TeamRecord::new("Girona", 3, 6, 7),
            TeamRecord::new("Leader", 9, 0, 7),
        ]);

        assert_eq!(names(&table), vec!["Leader", "Valencia C. F.", "Girona"]);
    }

    #[test]
    fn test_final_rank_of_tied_teams() {
        let records = vec![
            TeamRecord::new("Valencia C. F.", 3, 6, 7),
            TeamRecord::new("Girona", 3, 6, 7),
            TeamRecord::new("Leader", 9, 0, 7),
        ];
        assert_eq!(final_rank(&records, 2), 1);
        assert_eq!(final_rank(&records, 0), 2);
        assert_eq!(final_rank(&records, 1), 3);
    }

    proptest! {
        #[test]
        fn prop_ranking_is_sorted_and_stable(
            results in prop::collection::vec((0u32..12, 0u32..12, 0u32..12), 1..24)
        ) {
            let records: Vec<TeamRecord> = results
                .iter()
                .enumerate()
                .map(|(i, &(w, d, l))| TeamRecord::new(format!("team-{i}"), w, d, l))
                .collect();
            let input_pos = |name: &str| records.iter().position(|r| r.name == name).unwrap();

            let table = rank_standings(records.clone());
            prop_assert_eq!(table.len(), records.len());

            for pair in table.entries().windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(compare_standing(a, b) != Ordering::Greater);
                if a.points == b.points && a.wins == b.wins {
                    prop_assert!(input_pos(&a.name) < input_pos(&b.name));
                }
            }

            for (index, record) in records.iter().enumerate() {
                prop_assert_eq!(Some(final_rank(&records, index)), table.rank_of(&record.name));
            }
        }
    }
}
