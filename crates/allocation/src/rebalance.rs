//! Proportional weight rebalancing after a direct weight edit.

use stockflow_core::ChannelId;
use tracing::{debug, warn};

use crate::channel::Channel;

/// Outcome of a [`rebalance_weights`] call.
///
/// An unknown master id leaves the list untouched; that is policy, not an
/// error, but it is surfaced as a distinct variant so callers cannot mistake
/// the no-op for an applied edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RebalanceOutcome {
    /// The master channel was set to the new value and the delta absorbed
    /// proportionally by the remaining channels.
    Applied { delta: f64 },
    /// No channel matched the master id; nothing changed.
    UnknownMaster,
}

/// Set one channel's weight to `new_value` and absorb the delta
/// proportionally from every other channel.
///
/// Each other channel gives up `delta * (weight / sum_others)`, clipped at
/// zero. Clipping means a large positive delta may not be fully absorbed
/// when the other channels are near zero; the scheme is deliberately not
/// weight-conserving in that case. When the other channels hold no weight at
/// all (`sum_others == 0`), no redistribution happens and only the master
/// moves.
///
/// Mutates the slice in place.
pub fn rebalance_weights(
    channels: &mut [Channel],
    master_id: &ChannelId,
    new_value: f64,
) -> RebalanceOutcome {
    let Some(master_idx) = channels.iter().position(|c| &c.id == master_id) else {
        warn!(master = %master_id, "rebalance skipped: master channel not found");
        return RebalanceOutcome::UnknownMaster;
    };

    let old_value = channels[master_idx].weight;
    let delta = new_value - old_value;

    let sum_others: f64 = channels
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != master_idx)
        .map(|(_, c)| c.weight)
        .sum();

    if sum_others > 0.0 {
        for (i, ch) in channels.iter_mut().enumerate() {
            if i == master_idx {
                continue;
            }
            let reduction = delta * (ch.weight / sum_others);
            ch.weight = (ch.weight - reduction).max(0.0);
        }
    }

    channels[master_idx].weight = new_value;
    debug!(master = %master_id, delta, "channel weights rebalanced");
    RebalanceOutcome::Applied { delta }
}
