//! Ideal allocation: apportioning sales stock to channels.

use std::collections::BTreeMap;

use stockflow_core::ChannelId;

use crate::channel::Channel;
use crate::strategy::AllocationStrategy;

struct Entry {
    id: ChannelId,
    value: i64,
    weight: f64,
}

/// Compute the ideal quantity per channel for the given strategy.
///
/// Returns a mapping from channel id to a non-negative integer ideal. For
/// `Weighted` and `Equal` the mapping is exactly conservative: integer bases
/// are floored and the shortfall is handed out one unit at a time in a
/// deterministic order, so the values sum to `sales_stock` whenever
/// `sales_stock > 0`. `Mirror` intentionally ignores that constraint and
/// gives every channel the full sellable quantity.
///
/// Remainder order: `Weighted` walks channels by descending weight (ties keep
/// original list order; the sort is stable), `Equal` by ascending
/// lexicographic channel id. Both cycle if the remainder exceeds the channel
/// count. A zero or negative remainder is never subtracted from any channel.
///
/// Duplicate channel ids collapse in the returned map, which is why id
/// uniqueness is a caller obligation.
pub fn calculate_ideals(
    channels: &[Channel],
    strategy: AllocationStrategy,
    sales_stock: i64,
) -> BTreeMap<ChannelId, i64> {
    let mut new_ideals = BTreeMap::new();

    if strategy == AllocationStrategy::Mirror {
        let mirrored = sales_stock.max(0);
        for ch in channels {
            new_ideals.insert(ch.id.clone(), mirrored);
        }
        return new_ideals;
    }

    let mut total_allocated = 0i64;
    let mut entries: Vec<Entry> = Vec::with_capacity(channels.len());

    for ch in channels {
        let base = match strategy {
            AllocationStrategy::Weighted => {
                ((sales_stock as f64) * (ch.weight / 100.0)).floor() as i64
            }
            AllocationStrategy::Equal => sales_stock.div_euclid(channels.len() as i64),
            AllocationStrategy::Mirror => unreachable!("handled above"),
        };
        let value = base.max(0);
        total_allocated += value;
        entries.push(Entry {
            id: ch.id.clone(),
            value,
            weight: ch.weight,
        });
    }

    let remainder = sales_stock - total_allocated;
    if remainder > 0 && sales_stock > 0 && !entries.is_empty() {
        match strategy {
            AllocationStrategy::Weighted => entries.sort_by(|a, b| {
                b.weight
                    .partial_cmp(&a.weight)
                    .unwrap_or(core::cmp::Ordering::Equal)
            }),
            _ => entries.sort_by(|a, b| a.id.cmp(&b.id)),
        }

        let len = entries.len();
        for i in 0..remainder as usize {
            entries[i % len].value += 1;
        }
    }

    for entry in entries {
        new_ideals.insert(entry.id, entry.value);
    }

    new_ideals
}
