//! Layered settings for the `xornet` binary.

use serde::{Deserialize, Serialize};
use xornet_engine::EvolutionConfig;

/// Everything the binary needs before it builds an engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub evolution: EvolutionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub report: ReportFormat,

    /// RNG seed; drawn from OS entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Generation limit; unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generations: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit log lines as JSON.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// How generation reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Best score, then the best output vector.
    #[default]
    Text,
    /// One JSON object per generation.
    Json,
}

impl Settings {
    /// Start from `base`, then apply the file at `path` (if any), then
    /// `XORNET_*` environment variables. Nested keys use `__`, as in
    /// `XORNET_EVOLUTION__POPULATION_SIZE=200`.
    pub fn load(path: Option<&str>, base: EvolutionConfig) -> Result<Self, config::ConfigError> {
        let defaults = Settings {
            evolution: base,
            ..Default::default()
        };

        let mut builder = config::Config::builder();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("XORNET")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
