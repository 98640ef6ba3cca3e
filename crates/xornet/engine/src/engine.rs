use crate::config::{EvolutionConfig, MutationPolicy};
use crate::error::EngineResult;
use crate::metrics::EngineMetrics;
use crate::observer::GenerationObserver;
use crate::types::{GenerationReport, RunSummary, Scored};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};
use xornet_fitness::{Environment, Scorer};
use xornet_network::{InputRegister, Network};

/// Generational evolution loop over a population of bitwise networks.
///
/// The engine owns the random source, the shared input register, the board
/// and the population. Each call to [`step_generation`] evaluates, ranks and
/// reproduces once.
///
/// [`step_generation`]: EvolutionEngine::step_generation
pub struct EvolutionEngine<R: Rng = StdRng> {
    config: EvolutionConfig,
    scorer: Scorer,
    register: InputRegister,
    environment: Environment,
    population: Vec<Scored>,
    rng: R,
    metrics: EngineMetrics,
    generation: u64,
    stop: Arc<AtomicBool>,
}

impl EvolutionEngine<StdRng> {
    /// Engine with a reproducible random source.
    pub fn with_seed(config: EvolutionConfig, seed: u64) -> EngineResult<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> EvolutionEngine<R> {
    /// Validate `config` and build the initial random population.
    pub fn new(config: EvolutionConfig, mut rng: R) -> EngineResult<Self> {
        config.validate()?;

        let register = InputRegister::new(config.input_width);
        let population = (0..config.population_size)
            .map(|_| Network::random(&register, &config.layer_widths, &mut rng).map(Scored::new))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            scorer: config.scorer(),
            environment: Environment::new(config.input_width),
            register,
            population,
            rng,
            metrics: EngineMetrics::new(100),
            generation: 0,
            stop: Arc::new(AtomicBool::new(false)),
            config,
        })
    }

    /// Handle that stops [`run`](Self::run) before its next generation.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    /// Score every member over `evaluations_per_generation` fresh boards.
    /// Returns the number of committed moves.
    pub fn evaluate(&mut self) -> EngineResult<u64> {
        for member in &mut self.population {
            member.score = 0;
        }

        let mut commits = 0u64;
        for round in 0..self.config.evaluations_per_generation {
            self.environment.randomize(&mut self.rng);
            self.register.load(self.environment.cells());
            let board = self.register.snapshot();

            let mut round_commits = 0u64;
            for member in &mut self.population {
                if let MutationPolicy::Online { rarity } = self.config.mutation_policy {
                    member.network.mutate(rarity, &mut self.rng);
                }
                let output = member.network.values();
                let outcome = self.scorer.step(
                    &board,
                    &output,
                    self.environment.cells_mut(),
                    &mut self.rng,
                )?;
                member.score += outcome.score;
                if outcome.committed.is_some() {
                    round_commits += 1;
                }
            }
            trace!(round, commits = round_commits, board = ?board, "evaluation round");
            commits += round_commits;
        }
        Ok(commits)
    }

    /// Sort by score, best first. Equal scores keep their current order.
    pub fn rank(&mut self) {
        self.population.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Refill the population below the survivors: elite clones first, then
    /// fresh random networks. Expects a ranked population.
    pub fn reproduce(&mut self) -> EngineResult<()> {
        let mut slot = self.config.survivors;
        for (rank, tier) in self.config.elite_tiers.iter().enumerate() {
            for _ in 0..tier.size {
                let mut network = self.population[rank].network.clone();
                if self.config.mutation_policy == MutationPolicy::Deferred {
                    network.mutate(tier.rarity, &mut self.rng);
                }
                self.population[slot] = Scored::new(network);
                slot += 1;
            }
        }

        for member in &mut self.population[slot..] {
            *member = Scored::new(Network::random(
                &self.register,
                &self.config.layer_widths,
                &mut self.rng,
            )?);
        }
        Ok(())
    }

    /// Evaluate, rank, report and reproduce once.
    pub fn step_generation(&mut self) -> EngineResult<GenerationReport> {
        let commits = self.evaluate()?;
        self.rank();
        let report = self.report(commits);
        self.reproduce()?;

        self.metrics.record(&report);
        self.generation += 1;
        debug!(
            generation = report.generation,
            best = report.best_score,
            mean = report.mean_score,
            worst = report.worst_score,
            commits = report.commits,
            "generation complete"
        );
        Ok(report)
    }

    /// Run generations until `limit` is reached or a stop is requested.
    /// With no limit the loop is open-ended.
    pub fn run<O>(&mut self, observer: &mut O, limit: Option<u64>) -> EngineResult<RunSummary>
    where
        O: GenerationObserver + ?Sized,
    {
        info!(
            population = self.config.population_size,
            layers = ?self.config.layer_widths,
            variant = ?self.config.fitness_variant,
            policy = ?self.config.mutation_policy,
            "starting evolution"
        );

        let mut ran = 0u64;
        while limit.map_or(true, |l| ran < l) && !self.is_stopped() {
            let report = self.step_generation().map_err(|e| {
                warn!(error = %e, generation = self.generation, "evolution aborted");
                e
            })?;
            observer.on_generation(&report)?;
            ran += 1;
        }

        Ok(RunSummary {
            generations: ran,
            best_ever: self.metrics.best_ever,
            total_commits: self.metrics.total_commits,
        })
    }

    fn report(&self, commits: u64) -> GenerationReport {
        let n = self.population.len().max(1) as f64;
        let total: i64 = self.population.iter().map(|m| m.score).sum();
        let best = self.population.first();
        GenerationReport {
            generation: self.generation,
            best_score: best.map_or(0, |m| m.score),
            mean_score: total as f64 / n,
            worst_score: self.population.last().map_or(0, |m| m.score),
            best_output: best.map(|m| m.network.values()).unwrap_or_default(),
            commits,
        }
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn population(&self) -> &[Scored] {
        &self.population
    }

    /// Top-ranked member as of the last ranking.
    pub fn best(&self) -> Option<&Scored> {
        self.population.first()
    }

    pub fn register(&self) -> &InputRegister {
        &self.register
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    /// Generations completed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
