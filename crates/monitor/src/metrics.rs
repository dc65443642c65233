//! This module contains a [DetectorMetricer] that emits detection results as structured log events.

use crate::DetectorMetricer;

/// The [TracingMetricer] is a [DetectorMetricer] that emits every report as an `info` event. It is intended for
/// deployments without a metrics registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMetricer;

impl DetectorMetricer for TracingMetricer {
    fn record_games_status(&self, in_progress: usize, defender_won: usize, challenger_won: usize) {
        tracing::info!(
            target: "dispute-mon-metrics",
            in_progress,
            defender_won,
            challenger_won,
            "Games status"
        );
    }

    fn record_game_agreement(&self, category: &str, count: usize) {
        tracing::info!(target: "dispute-mon-metrics", category, count, "Game agreement");
    }
}
