//! Stock-allocation domain module.
//!
//! This crate contains the business rules for distributing a single pool of
//! sellable inventory across sales channels, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).
//!
//! The pieces:
//! - [`StockPool`] derives buffer and sales stock from physical stock.
//! - [`calculate_ideals`] apportions sales stock to channels under a
//!   [`AllocationStrategy`], conserving every unit for the non-mirror
//!   strategies (floor-then-distribute-remainder).
//! - [`rebalance_weights`] absorbs a direct weight edit proportionally from
//!   the other channels.
//! - [`check_drift`] compares a channel's live internal stock against its
//!   ideal and reports whether a resync is required.

pub mod allocate;
pub mod channel;
pub mod config;
pub mod drift;
pub mod engine;
pub mod pool;
pub mod rebalance;
pub mod strategy;

pub use allocate::calculate_ideals;
pub use channel::Channel;
pub use config::SimulationConfig;
pub use drift::{DriftReport, DriftTrigger, check_drift};
pub use engine::AllocationEngine;
pub use pool::StockPool;
pub use rebalance::{RebalanceOutcome, rebalance_weights};
pub use strategy::AllocationStrategy;
