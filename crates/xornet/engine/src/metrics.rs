use crate::types::GenerationReport;
use serde::{Deserialize, Serialize};

/// Running totals across generations.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EngineMetrics {
    pub generations: u64,
    pub total_commits: u64,
    pub best_ever: Option<i64>,
    /// Best score of each recent generation, oldest first.
    pub best_history: Vec<i64>,
    max_history: usize,
}

impl EngineMetrics {
    pub fn new(max_history: usize) -> Self {
        Self {
            max_history,
            ..Default::default()
        }
    }

    pub fn record(&mut self, report: &GenerationReport) {
        self.generations += 1;
        self.total_commits += report.commits;
        self.best_ever = Some(
            self.best_ever
                .map_or(report.best_score, |b| b.max(report.best_score)),
        );
        self.best_history.push(report.best_score);
        if self.best_history.len() > self.max_history {
            self.best_history.remove(0);
        }
    }

    pub fn avg_recent_best(&self) -> f64 {
        if self.best_history.is_empty() {
            return 0.0;
        }
        self.best_history.iter().sum::<i64>() as f64 / self.best_history.len() as f64
    }

    pub fn commits_per_generation(&self) -> f64 {
        if self.generations == 0 {
            return 0.0;
        }
        self.total_commits as f64 / self.generations as f64
    }
}
