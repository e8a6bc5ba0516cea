//! Order Accumulator
//!
//! The in-memory cart for the current till session. Lines are keyed by
//! menu item id; display order is key-ascending, which the BTreeMap gives
//! for free. Nothing here touches storage — stock is only enforced as the
//! commit-time decrement.

use shared::models::{MenuItem, OrderLine};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct Order {
    lines: BTreeMap<i64, OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`. A first add captures name, price and
    /// category as they are right now; repeat adds only bump the quantity,
    /// so later menu edits never change an open order.
    pub fn add(&mut self, item: &MenuItem) {
        self.lines
            .entry(item.id)
            .and_modify(|line| line.quantity += 1)
            .or_insert_with(|| OrderLine {
                item_id: item.id,
                name: item.name.clone(),
                unit_price: item.price,
                quantity: 1,
                category: item.category.clone(),
            });
    }

    /// Drop the whole line for `item_id`; false when it was not in the order.
    pub fn remove(&mut self, item_id: i64) -> bool {
        self.lines.remove(&item_id).is_some()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of unit_price × quantity over all lines; exactly 0.0 when empty.
    pub fn total(&self) -> f64 {
        self.lines.values().map(OrderLine::line_total).sum()
    }

    /// Snapshot of the lines in display order (item id ascending).
    pub fn snapshot(&self) -> Vec<OrderLine> {
        self.lines.values().cloned().collect()
    }
}
