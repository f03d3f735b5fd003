//! Simulation-wide configuration.

use core::str::FromStr;

use serde::Deserialize;
use tracing::warn;

/// Externally supplied defaults: the initial stock figure and the drift
/// thresholds shared across channels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub initial_stock: i64,
    pub buffer_percent: f64,
    pub pct_threshold: f64,
    pub abs_threshold: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_stock: 1000,
            buffer_percent: 5.0,
            pct_threshold: 10.0,
            abs_threshold: 5,
        }
    }
}

impl SimulationConfig {
    /// Load from `STOCKFLOW_*` environment variables, falling back to the
    /// defaults for anything missing or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            initial_stock: env_or("STOCKFLOW_INITIAL_STOCK", defaults.initial_stock),
            buffer_percent: env_or("STOCKFLOW_BUFFER_PERCENT", defaults.buffer_percent),
            pct_threshold: env_or("STOCKFLOW_PCT_THRESHOLD", defaults.pct_threshold),
            abs_threshold: env_or("STOCKFLOW_ABS_THRESHOLD", defaults.abs_threshold),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + core::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, %default, "unparseable value; using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_simulation_constants() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.initial_stock, 1000);
        assert_eq!(cfg.buffer_percent, 5.0);
        assert_eq!(cfg.pct_threshold, 10.0);
        assert_eq!(cfg.abs_threshold, 5);
    }

    #[test]
    fn environment_overrides_the_defaults() {
        // SAFETY: test-local variable name, no concurrent reader cares.
        unsafe { std::env::set_var("STOCKFLOW_INITIAL_STOCK", "2500") };
        let cfg = SimulationConfig::from_env();
        assert_eq!(cfg.initial_stock, 2500);
        unsafe { std::env::remove_var("STOCKFLOW_INITIAL_STOCK") };
    }

    #[test]
    fn unparseable_environment_values_fall_back_to_defaults() {
        unsafe { std::env::set_var("STOCKFLOW_ABS_THRESHOLD", "lots") };
        let cfg = SimulationConfig::from_env();
        assert_eq!(cfg.abs_threshold, SimulationConfig::default().abs_threshold);
        unsafe { std::env::remove_var("STOCKFLOW_ABS_THRESHOLD") };
    }
}
