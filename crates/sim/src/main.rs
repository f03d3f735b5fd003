//! One-shot allocation run driven entirely by environment variables.
//!
//! Reads the simulation config, a channel list (`STOCKFLOW_CHANNELS`,
//! `id:weight` pairs separated by commas) and a strategy tag
//! (`STOCKFLOW_STRATEGY`), computes the ideal allocation, reports drift per
//! channel through tracing, and prints the allocation as JSON on stdout.

use std::str::FromStr;

use anyhow::{Context, Result};

use stockflow_allocation::{
    AllocationEngine, AllocationStrategy, Channel, SimulationConfig, check_drift,
};
use stockflow_core::ChannelId;

fn main() -> Result<()> {
    stockflow_observability::init();

    let config = SimulationConfig::from_env();

    let strategy_tag =
        std::env::var("STOCKFLOW_STRATEGY").unwrap_or_else(|_| "weighted".to_string());
    let strategy = AllocationStrategy::from_str(&strategy_tag)
        .with_context(|| format!("STOCKFLOW_STRATEGY={strategy_tag}"))?;

    let channel_spec = std::env::var("STOCKFLOW_CHANNELS")
        .unwrap_or_else(|_| "web:50,store:30,marketplace:20".to_string());
    let channels = parse_channels(&channel_spec)?;

    let mut engine = AllocationEngine::from_config(&config);
    engine.set_channels(channels);

    let sales_stock = engine.sales_stock();
    tracing::info!(
        physical = engine.pool().physical_stock(),
        buffer = engine.effective_buffer(),
        reserved = engine.pool().reserved_stock(),
        sales = sales_stock,
        %strategy,
        "allocating sales stock"
    );

    let ideals = engine.calculate_ideals(strategy, sales_stock);
    for ch in engine.channels_mut() {
        ch.ideal = ideals.get(&ch.id).copied().unwrap_or(0);
    }

    for ch in engine.channels() {
        let report = check_drift(
            &ch.id,
            ch.internal,
            ch.ideal,
            config.pct_threshold,
            config.abs_threshold,
        );
        if report.sync_required {
            tracing::warn!(channel = %ch.id, reason = %report.reason(), "channel requires sync");
        } else {
            tracing::info!(channel = %ch.id, ideal = ch.ideal, "channel within tolerance");
        }
    }

    println!("{}", serde_json::to_string_pretty(&ideals)?);
    Ok(())
}

fn parse_channels(spec: &str) -> Result<Vec<Channel>> {
    spec.split(',')
        .map(|entry| {
            let (id, weight) = entry
                .split_once(':')
                .with_context(|| format!("channel entry '{entry}' is not id:weight"))?;
            let id: ChannelId = id.parse()?;
            let weight: f64 = weight
                .trim()
                .parse()
                .with_context(|| format!("channel '{id}' has unparseable weight '{weight}'"))?;
            Ok(Channel::new(id, weight))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_an_id_weight_list() {
        let channels = parse_channels("web:50,store:30, marketplace:20").unwrap();
        assert_eq!(channels.len(), 3);
        assert_eq!(channels[2].id.as_str(), "marketplace");
        assert_eq!(channels[2].weight, 20.0);
    }

    #[test]
    fn rejects_entries_without_a_weight() {
        assert!(parse_channels("web").is_err());
        assert!(parse_channels("web:").is_err());
        assert!(parse_channels(":50").is_err());
    }
}
