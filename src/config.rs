//! Optimizer configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `ROUTE_SPEED_KMH` | average speed for duration estimates | `50` |
//! | `ROUTE_STRATEGY` | `full` or `delta` 2-opt scoring | `full` |
//! | `ROUTE_MAX_SWEEPS` | cap on 2-opt sweeps | unbounded |

use std::env::VarError;

use anyhow::{anyhow, bail};

use crate::local_search::ImprovementStrategy;
use crate::optimizer::{OptimizerConfig, DEFAULT_SPEED_KMH};

/// Variables read by [`Config::env`]. All are optional.
pub const OPTIONAL_VARIABLES: [&str; 3] = ["ROUTE_SPEED_KMH", "ROUTE_STRATEGY", "ROUTE_MAX_SWEEPS"];

/// Settings loaded from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub speed_kmh: f64,
    pub strategy: ImprovementStrategy,
    pub max_sweeps: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            strategy: ImprovementStrategy::FullRecompute,
            max_sweeps: None,
        }
    }
}

impl Config {
    /// Reads [`OPTIONAL_VARIABLES`] from the process environment.
    ///
    /// Unset or blank variables fall back to defaults; unparseable values
    /// are errors.
    pub fn env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Builds a config from any variable source; `env()` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut config = Self::default();

        if let Some(raw) = var(&lookup, "ROUTE_SPEED_KMH")? {
            let speed: f64 = raw
                .trim()
                .parse()
                .map_err(|e| anyhow!("ROUTE_SPEED_KMH: {e}"))?;
            if !speed.is_finite() || speed <= 0.0 {
                bail!("ROUTE_SPEED_KMH must be a positive number, got {raw}");
            }
            config.speed_kmh = speed;
        }

        if let Some(raw) = var(&lookup, "ROUTE_STRATEGY")? {
            config.strategy = parse_strategy(&raw)?;
        }

        if let Some(raw) = var(&lookup, "ROUTE_MAX_SWEEPS")? {
            let max: usize = raw
                .trim()
                .parse()
                .map_err(|e| anyhow!("ROUTE_MAX_SWEEPS: {e}"))?;
            config.max_sweeps = Some(max);
        }

        Ok(config)
    }

    /// Converts to the optimizer's own configuration.
    pub fn optimizer_config(&self) -> OptimizerConfig {
        let config = OptimizerConfig::default()
            .with_speed_kmh(self.speed_kmh)
            .with_strategy(self.strategy);
        match self.max_sweeps {
            Some(max) => config.with_max_sweeps(max),
            None => config,
        }
    }

    /// Logs the effective settings at `info`.
    pub fn log(&self) {
        log::info!(
            "config: speed_kmh={} strategy={:?} max_sweeps={}",
            self.speed_kmh,
            self.strategy,
            self.max_sweeps
                .map_or_else(|| "unbounded".to_string(), |m| m.to_string())
        );
    }
}

fn parse_strategy(raw: &str) -> anyhow::Result<ImprovementStrategy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "full" => Ok(ImprovementStrategy::FullRecompute),
        "delta" => Ok(ImprovementStrategy::IncrementalDelta),
        other => bail!("ROUTE_STRATEGY must be `full` or `delta`, got `{other}`"),
    }
}

fn var<F>(lookup: &F, name: &str) -> anyhow::Result<Option<String>>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(anyhow!("{name} value is not valid unicode")),
    }
}
