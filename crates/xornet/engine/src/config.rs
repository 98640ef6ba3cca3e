use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use xornet_fitness::{FitnessVariant, Scorer, ScoringWeights};

/// A block of population slots filled with clones of one ranked survivor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliteTier {
    /// Number of clones.
    pub size: usize,
    /// Inverse per-edge mutation probability applied to each clone.
    pub rarity: u32,
}

impl EliteTier {
    pub fn new(size: usize, rarity: u32) -> Self {
        Self { size, rarity }
    }
}

/// When mutation happens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum MutationPolicy {
    /// Every member is mutated right before each evaluation; elite clones
    /// are copied verbatim.
    Online { rarity: u32 },
    /// Only elite clones are mutated, once, with their tier's rarity.
    #[default]
    Deferred,
}

/// Evolution parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    /// Width of the board and of the input register.
    pub input_width: usize,
    /// Inferred layer widths from the input side outwards. The last one is
    /// the output width and must equal `input_width`.
    pub layer_widths: Vec<usize>,
    /// Evaluation rounds, each on a fresh board, per generation.
    pub evaluations_per_generation: usize,
    /// Top-ranked members carried over unchanged.
    pub survivors: usize,
    /// Tier `k` clones the member ranked `k`.
    pub elite_tiers: Vec<EliteTier>,
    pub fitness_variant: FitnessVariant,
    pub mutation_policy: MutationPolicy,
    /// Overrides the variant's default weights.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<ScoringWeights>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            input_width: 9,
            layer_widths: vec![18, 18, 18, 9],
            evaluations_per_generation: 50,
            survivors: 10,
            elite_tiers: vec![
                EliteTier::new(10, 8),
                EliteTier::new(5, 32),
                EliteTier::new(5, 64),
            ],
            fitness_variant: FitnessVariant::Discrete,
            mutation_policy: MutationPolicy::Deferred,
            weights: None,
        }
    }
}

impl EvolutionConfig {
    /// Long exploratory run: continuous scoring with slow online
    /// mutation and verbatim elite copies.
    pub fn reference() -> Self {
        Self {
            fitness_variant: FitnessVariant::Continuous,
            mutation_policy: MutationPolicy::Online { rarity: 10_000 },
            ..Self::default()
        }
    }

    /// Small, fast configuration for tests and demos.
    pub fn small() -> Self {
        Self {
            population_size: 30,
            input_width: 9,
            layer_widths: vec![9],
            evaluations_per_generation: 10,
            survivors: 5,
            elite_tiers: vec![
                EliteTier::new(5, 4),
                EliteTier::new(3, 16),
                EliteTier::new(2, 32),
            ],
            fitness_variant: FitnessVariant::Discrete,
            mutation_policy: MutationPolicy::Deferred,
            weights: None,
        }
    }

    /// Width of the network output.
    pub fn output_width(&self) -> usize {
        self.layer_widths.last().copied().unwrap_or(0)
    }

    /// Slots taken by survivors and elite clones; the rest are refilled
    /// with fresh networks each generation.
    pub fn reserved_slots(&self) -> usize {
        self.survivors + self.elite_tiers.iter().map(|t| t.size).sum::<usize>()
    }

    pub fn scorer(&self) -> Scorer {
        let scorer = Scorer::new(self.fitness_variant);
        match self.weights {
            Some(weights) => scorer.with_weights(weights),
            None => scorer,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.input_width == 0 {
            return Err(ConfigError::ZeroInputWidth);
        }
        if self.layer_widths.is_empty() {
            return Err(ConfigError::NoLayers);
        }
        if let Some(index) = self.layer_widths.iter().position(|&w| w == 0) {
            return Err(ConfigError::ZeroLayerWidth { index });
        }
        if self.output_width() != self.input_width {
            return Err(ConfigError::OutputWidthMismatch {
                output: self.output_width(),
                input: self.input_width,
            });
        }
        if self.evaluations_per_generation == 0 {
            return Err(ConfigError::NoEvaluations);
        }
        let online_zero = matches!(self.mutation_policy, MutationPolicy::Online { rarity: 0 });
        if online_zero || self.elite_tiers.iter().any(|t| t.rarity == 0) {
            return Err(ConfigError::ZeroRarity);
        }
        if self.elite_tiers.len() > self.survivors {
            return Err(ConfigError::TooManyTiers {
                tiers: self.elite_tiers.len(),
                survivors: self.survivors,
            });
        }
        if self.reserved_slots() > self.population_size {
            return Err(ConfigError::PopulationTooSmall {
                required: self.reserved_slots(),
                population: self.population_size,
            });
        }
        Ok(())
    }
}
