#![deny(unsafe_code)]
//! # xornet-engine
//!
//! Evolves a population of bitwise networks against the move-scoring
//! board. Every generation each member is scored over a batch of random
//! boards, the population is ranked, the top members survive unchanged,
//! elite tiers are refilled with clones of the best members and the rest
//! of the population is replaced with fresh random networks.
//!
//! ```no_run
//! use xornet_engine::{ConsoleObserver, EvolutionConfig, EvolutionEngine};
//!
//! let mut engine = EvolutionEngine::with_seed(EvolutionConfig::default(), 7)?;
//! engine.run(&mut ConsoleObserver::stdout(), Some(100))?;
//! # Ok::<(), xornet_engine::EngineError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod types;

pub use config::{EliteTier, EvolutionConfig, MutationPolicy};
pub use engine::EvolutionEngine;
pub use error::{ConfigError, EngineError, EngineResult};
pub use metrics::EngineMetrics;
pub use observer::{
    ConsoleObserver, GenerationObserver, JsonObserver, NullObserver, RecordingObserver,
};
pub use types::{GenerationReport, RunSummary, Scored};
