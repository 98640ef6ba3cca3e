use serde::{Deserialize, Serialize};
use xornet_network::Network;

/// A population member and its accumulated fitness for the current
/// generation.
#[derive(Clone, Debug)]
pub struct Scored {
    pub network: Network,
    pub score: i64,
}

impl Scored {
    pub fn new(network: Network) -> Self {
        Self { network, score: 0 }
    }
}

/// What the engine reports after each generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Zero-based generation index.
    pub generation: u64,
    pub best_score: i64,
    pub mean_score: f64,
    pub worst_score: i64,
    /// Output of the top-ranked network on the last board of the generation.
    pub best_output: Vec<u8>,
    /// Moves committed across all members and rounds.
    pub commits: u64,
}

/// Totals for a finished [`run`](crate::EvolutionEngine::run).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub generations: u64,
    pub best_ever: Option<i64>,
    pub total_commits: u64,
}
