//! Allocation engine: stock pool + channel list under one owner.

use std::collections::BTreeMap;

use stockflow_core::ChannelId;

use crate::allocate;
use crate::channel::Channel;
use crate::config::SimulationConfig;
use crate::pool::StockPool;
use crate::strategy::AllocationStrategy;

/// Owns one stock pool and the channel list allocations are computed over.
///
/// The engine owns its channels exclusively: `set_channels` takes the list
/// by move, so no aliasing with the caller survives the handoff. It is a
/// stateless-between-reads calculator plus the pool's small cached buffer;
/// callers sharing one instance across threads must serialize access
/// themselves (there is no internal locking, and none of the operations
/// block).
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationEngine {
    pool: StockPool,
    channels: Vec<Channel>,
}

impl AllocationEngine {
    /// Engine over a fresh pool with the default buffer policy.
    pub fn new(initial_physical_stock: i64) -> Self {
        Self {
            pool: StockPool::new(initial_physical_stock),
            channels: Vec::new(),
        }
    }

    /// Engine configured from simulation defaults.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut pool = StockPool::new(config.initial_stock);
        pool.set_buffer_percent(config.buffer_percent);
        pool.recalculate_buffer();
        Self {
            pool,
            channels: Vec::new(),
        }
    }

    /// Replace the working channel list wholesale.
    pub fn set_channels(&mut self, channels: Vec<Channel>) {
        self.channels = channels;
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Mutable view for weight edits, e.g. feeding
    /// [`rebalance_weights`](crate::rebalance_weights).
    pub fn channels_mut(&mut self) -> &mut [Channel] {
        &mut self.channels
    }

    pub fn pool(&self) -> &StockPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut StockPool {
        &mut self.pool
    }

    pub fn recalculate_buffer(&mut self) {
        self.pool.recalculate_buffer();
    }

    pub fn effective_buffer(&self) -> i64 {
        self.pool.effective_buffer()
    }

    pub fn raw_sales_stock(&self) -> i64 {
        self.pool.raw_sales_stock()
    }

    pub fn sales_stock(&self) -> i64 {
        self.pool.sales_stock()
    }

    /// Ideal quantity per channel for the given strategy and sellable
    /// quantity. Pure with respect to the engine: the mapping is returned
    /// for the caller to apply, not written back into the channels.
    pub fn calculate_ideals(
        &self,
        strategy: AllocationStrategy,
        sales_stock: i64,
    ) -> BTreeMap<ChannelId, i64> {
        allocate::calculate_ideals(&self.channels, strategy, sales_stock)
    }
}
