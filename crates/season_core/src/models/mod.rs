pub mod aggregate;
pub mod league_table;
pub mod team_record;
pub mod zones;

pub use aggregate::{AggregateResult, OutcomeSummary, TrialOutcome};
pub use league_table::LeagueTable;
pub use team_record::{MatchOutcome, TeamRecord};
pub use zones::ZoneRules;
