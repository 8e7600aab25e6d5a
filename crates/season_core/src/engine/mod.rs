//! Season simulation engine: probability model, per-team season simulation,
//! standings ranking and Monte Carlo aggregation.

pub mod config;
pub mod monte_carlo;
pub mod probability;
pub mod progress;
pub mod ranking;
pub mod season;

pub use config::{SimulationConfig, CONFIG_PATH_ENV, DEFAULT_SEASON_LENGTH};
pub use monte_carlo::{run, trial_rng, LeaguePlan, MonteCarloRunner};
pub use probability::{OutcomeProbabilities, OutcomeSampler};
pub use progress::{is_progress_step, NoProgress, ProgressObserver};
pub use ranking::{compare_standing, final_rank, rank_standings};
pub use season::simulate_remaining;
