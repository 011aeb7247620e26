use crate::error::Result;
use crate::synthetic::{LatencyStrategy, NoLatency, SimulatedLatency};
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const ENV_PREFIX: &str = "STOCKCAST";
const DEFAULT_FILE: &str = "stockcast";

/// Runtime settings
///
/// Only latency, the randomness source and logging are configurable. The
/// symbol and model tables are compiled in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub latency_enabled: bool,
    pub history_latency_ms: u64,
    pub forecast_latency_ms: u64,
    /// Fixed seed for reproducible series; entropy when unset
    pub seed: Option<u64>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            latency_enabled: true,
            history_latency_ms: 800,
            forecast_latency_ms: 1000,
            seed: None,
            log_filter: "stockcast=info".to_string(),
        }
    }
}

impl Settings {
    /// Load defaults, then `stockcast.toml` (or `path`) if present, then
    /// `STOCKCAST_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };

        let builder = Config::builder().add_source(file).add_source(
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        );

        Self::build(builder)
    }

    /// Apply defaults underneath whatever sources `builder` already has
    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let defaults = Settings::default();
        let settings = builder
            .set_default("latency_enabled", defaults.latency_enabled)?
            .set_default("history_latency_ms", defaults.history_latency_ms as i64)?
            .set_default("forecast_latency_ms", defaults.forecast_latency_ms as i64)?
            .set_default("log_filter", defaults.log_filter)?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn latency(&self) -> Arc<dyn LatencyStrategy> {
        if self.latency_enabled {
            Arc::new(SimulatedLatency {
                history: Duration::from_millis(self.history_latency_ms),
                forecast: Duration::from_millis(self.forecast_latency_ms),
            })
        } else {
            Arc::new(NoLatency)
        }
    }
}
