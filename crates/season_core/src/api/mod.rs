pub mod season_json;

pub use season_json::{simulate_season_json, SeasonRequest, SeasonResponse};
