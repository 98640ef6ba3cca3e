//! xornet - evolve bitwise networks that pick a legal move on a board
//!
//! Settings are layered: built-in preset, optional TOML file, `XORNET_*`
//! environment variables, then command-line flags.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xornet_engine::{
    ConsoleObserver, EvolutionConfig, EvolutionEngine, GenerationObserver, JsonObserver,
};
use xornet_fitness::FitnessVariant;

mod config;

use config::{ReportFormat, Settings};

/// Starting configuration before file and environment overrides.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// Discrete scoring, deferred mutation.
    Default,
    /// Continuous scoring, online mutation at rarity 10000.
    Reference,
    /// Small population for quick runs.
    Small,
}

impl Preset {
    fn config(self) -> EvolutionConfig {
        match self {
            Preset::Default => EvolutionConfig::default(),
            Preset::Reference => EvolutionConfig::reference(),
            Preset::Small => EvolutionConfig::small(),
        }
    }
}

/// xornet CLI
#[derive(Parser)]
#[command(name = "xornet")]
#[command(about = "Evolve XOR/AND networks that choose a move on a board", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "XORNET_CONFIG")]
    config: Option<String>,

    /// Built-in configuration to start from
    #[arg(short, long, value_enum, default_value = "default")]
    preset: Preset,

    /// RNG seed
    #[arg(short, long, env = "XORNET_SEED")]
    seed: Option<u64>,

    /// Stop after this many generations
    #[arg(short, long, env = "XORNET_GENERATIONS")]
    generations: Option<u64>,

    /// Fitness variant (discrete or continuous)
    #[arg(long, env = "XORNET_VARIANT")]
    variant: Option<FitnessVariant>,

    /// Report format on stdout
    #[arg(long, value_enum)]
    report: Option<ReportArg>,

    /// Log level
    #[arg(long, env = "XORNET_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "XORNET_LOG_JSON")]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReportArg {
    Text,
    Json,
}

impl From<ReportArg> for ReportFormat {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Text => ReportFormat::Text,
            ReportArg::Json => ReportFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref(), cli.preset.config())
        .context("failed to load settings")?;

    // Override with CLI args
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.generations.is_some() {
        settings.generations = cli.generations;
    }
    if let Some(variant) = cli.variant {
        settings.evolution.fitness_variant = variant;
    }
    if let Some(report) = cli.report {
        settings.report = report.into();
    }
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    settings.logging.json |= cli.json;

    init_tracing(&settings);

    let seed = settings.seed.unwrap_or_else(rand::random);
    info!(seed, generations = ?settings.generations, "seeding random source");

    let mut engine = EvolutionEngine::with_seed(settings.evolution.clone(), seed)
        .context("invalid evolution configuration")?;

    let mut observer: Box<dyn GenerationObserver> = match settings.report {
        ReportFormat::Text => Box::new(ConsoleObserver::stdout()),
        ReportFormat::Json => Box::new(JsonObserver::stdout()),
    };

    let summary = engine
        .run(observer.as_mut(), settings.generations)
        .context("evolution run failed")?;

    info!(
        generations = summary.generations,
        best_ever = ?summary.best_ever,
        total_commits = summary.total_commits,
        "run finished"
    );
    Ok(())
}

fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| settings.logging.level.clone().into());

    // Logs go to stderr so stdout carries only reports.
    if settings.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
