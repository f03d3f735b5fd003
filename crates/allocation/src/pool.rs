//! Stock pool: physical stock and the figures derived from it.

use serde::{Deserialize, Serialize};

/// A single pool of physical inventory plus its buffer policy.
///
/// `buffer_stock` is a cached derivation: it reflects the last
/// [`recalculate_buffer`](StockPool::recalculate_buffer) call and is NOT
/// recomputed automatically when `physical_stock` or `buffer_percent`
/// changes. Recomputation is an explicit, caller-triggered step, so the
/// owner controls exactly when derived figures move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPool {
    physical_stock: i64,
    buffer_percent: f64,
    buffer_stock: i64,
    reserved_stock: i64,
}

impl StockPool {
    pub const DEFAULT_BUFFER_PERCENT: f64 = 5.0;

    /// Create a pool with the default buffer policy applied.
    ///
    /// The buffer is recalculated once at construction, matching the
    /// explicit-recalculation contract everywhere else.
    pub fn new(physical_stock: i64) -> Self {
        let mut pool = Self {
            physical_stock,
            buffer_percent: Self::DEFAULT_BUFFER_PERCENT,
            buffer_stock: 0,
            reserved_stock: 0,
        };
        pool.recalculate_buffer();
        pool
    }

    pub fn physical_stock(&self) -> i64 {
        self.physical_stock
    }

    /// Set physical stock. Not clamped; a negative value is floored at 0
    /// only inside the buffer calculation.
    pub fn set_physical_stock(&mut self, physical_stock: i64) {
        self.physical_stock = physical_stock;
    }

    pub fn buffer_percent(&self) -> f64 {
        self.buffer_percent
    }

    /// Set the buffer percentage, clamped non-negative.
    pub fn set_buffer_percent(&mut self, buffer_percent: f64) {
        self.buffer_percent = buffer_percent.max(0.0);
    }

    pub fn reserved_stock(&self) -> i64 {
        self.reserved_stock
    }

    /// Set reserved stock, clamped non-negative.
    pub fn set_reserved_stock(&mut self, reserved_stock: i64) {
        self.reserved_stock = reserved_stock.max(0);
    }

    /// Recompute `buffer_stock` from the current physical stock and buffer
    /// percentage: `ceil(max(0, physical) * percent / 100)`.
    pub fn recalculate_buffer(&mut self) {
        let base_stock = self.physical_stock.max(0);
        self.buffer_stock = ((base_stock as f64) * (self.buffer_percent / 100.0)).ceil() as i64;
    }

    /// Current cached buffer stock. No recomputation.
    pub fn effective_buffer(&self) -> i64 {
        self.buffer_stock
    }

    /// `physical - buffer - reserved`; may be negative.
    pub fn raw_sales_stock(&self) -> i64 {
        self.physical_stock - self.buffer_stock - self.reserved_stock
    }

    /// Non-negative quantity available to distribute to channels.
    pub fn sales_stock(&self) -> i64 {
        self.raw_sales_stock().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_ceiled_percentage_of_physical_stock() {
        let pool = StockPool::new(1000);
        // 5% of 1000
        assert_eq!(pool.effective_buffer(), 50);

        let pool = StockPool::new(1001);
        // ceil(50.05) = 51
        assert_eq!(pool.effective_buffer(), 51);
    }

    #[test]
    fn negative_physical_stock_yields_zero_buffer() {
        let pool = StockPool::new(-200);
        assert_eq!(pool.effective_buffer(), 0);
    }

    #[test]
    fn buffer_is_not_recomputed_until_explicitly_asked() {
        let mut pool = StockPool::new(1000);
        assert_eq!(pool.effective_buffer(), 50);

        pool.set_physical_stock(2000);
        assert_eq!(pool.effective_buffer(), 50);

        pool.recalculate_buffer();
        assert_eq!(pool.effective_buffer(), 100);
    }

    #[test]
    fn recalculate_buffer_is_idempotent() {
        let mut pool = StockPool::new(937);
        pool.recalculate_buffer();
        let first = pool.effective_buffer();
        pool.recalculate_buffer();
        assert_eq!(pool.effective_buffer(), first);
    }

    #[test]
    fn sales_stock_is_clamped_non_negative() {
        let mut pool = StockPool::new(10);
        pool.set_buffer_percent(80.0);
        pool.recalculate_buffer();
        pool.set_reserved_stock(5);

        assert_eq!(pool.effective_buffer(), 8);
        assert_eq!(pool.raw_sales_stock(), -3);
        assert_eq!(pool.sales_stock(), 0);
    }

    #[test]
    fn reserved_stock_reduces_sales_stock() {
        let mut pool = StockPool::new(1000);
        pool.set_reserved_stock(100);
        assert_eq!(pool.sales_stock(), 1000 - 50 - 100);
    }

    #[test]
    fn negative_reserved_stock_is_clamped_to_zero() {
        let mut pool = StockPool::new(1000);
        pool.set_reserved_stock(-40);
        assert_eq!(pool.reserved_stock(), 0);
        assert_eq!(pool.sales_stock(), 950);
    }
}
