use xornet_fitness::FitnessError;
use xornet_network::NetworkError;

/// Problems with an [`EvolutionConfig`](crate::EvolutionConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("population size must be at least 1")]
    EmptyPopulation,
    #[error("input width must be at least 1")]
    ZeroInputWidth,
    #[error("at least one layer width is required")]
    NoLayers,
    #[error("layer {index} has width 0")]
    ZeroLayerWidth { index: usize },
    #[error("output width {output} does not match input width {input}")]
    OutputWidthMismatch { output: usize, input: usize },
    #[error("evaluations per generation must be at least 1")]
    NoEvaluations,
    #[error("mutation rarity must be at least 1")]
    ZeroRarity,
    #[error("{tiers} elite tiers need at least {tiers} survivors, got {survivors}")]
    TooManyTiers { tiers: usize, survivors: usize },
    #[error("survivors and elite tiers need {required} slots, population has {population}")]
    PopulationTooSmall { required: usize, population: usize },
}

/// Errors from the evolution engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("network construction failed: {0}")]
    Network(#[from] NetworkError),
    #[error("fitness evaluation failed: {0}")]
    Fitness(#[from] FitnessError),
    #[error("observer failed: {0}")]
    Observer(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
