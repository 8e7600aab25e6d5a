//! Run report written by `simulate --out` and printed by `simulate --json`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use season_core::{AggregateResult, OutcomeSummary, SimulationConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// RFC3339 timestamp
    pub generated_at: String,
    pub engine_version: String,
    pub config: SimulationConfig,
    pub summary: OutcomeSummary,
    pub result: AggregateResult,
}

impl SimulationReport {
    pub fn new(config: SimulationConfig, result: AggregateResult) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            engine_version: season_core::VERSION.to_string(),
            config,
            summary: result.summary(),
            result,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "report written");
        Ok(())
    }
}

/// Human-readable summary with a rank histogram.
pub fn render_text(result: &AggregateResult) -> String {
    const BAR_WIDTH: usize = 40;

    let summary = result.summary();
    let mut out = String::new();

    out.push_str(&format!("\n📊 {} after {} simulated seasons\n", result.target_team, summary.trials));
    out.push_str(&format!("   Seed:            {}\n", result.seed));
    out.push_str(&format!("   Safe:            {:.1}%\n", summary.safe_pct));
    out.push_str(&format!("   Relegated:       {:.1}%\n", summary.relegation_pct));
    out.push_str(&format!("   Europe:          {:.1}%\n", summary.europe_pct));
    out.push_str(&format!("   Average rank:    {:.2}\n", summary.average_rank));
    if let (Some(best), Some(worst)) = (summary.best_rank, summary.worst_rank) {
        out.push_str(&format!("   Best / worst:    {best} / {worst}\n"));
    }
    out.push_str(&format!("   Average points:  {:.1}\n", summary.average_points));
    if let (Some(min), Some(max)) = (summary.min_points, summary.max_points) {
        out.push_str(&format!("   Points range:    {min} - {max}\n"));
    }

    let peak = summary.rank_histogram.iter().copied().max().unwrap_or(0);
    out.push_str("\n   Rank distribution\n");
    for (idx, &count) in summary.rank_histogram.iter().enumerate() {
        let width = if peak == 0 { 0 } else { count * BAR_WIDTH / peak };
        let share = if summary.trials == 0 { 0.0 } else { count as f64 / summary.trials as f64 * 100.0 };
        out.push_str(&format!(
            "   {:>3} | {:<w$} {:>5.1}%\n",
            idx + 1,
            "█".repeat(width),
            share,
            w = BAR_WIDTH
        ));
    }

    out
}
