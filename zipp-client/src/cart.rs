//! Cart engine - the customer's in-memory draft order
//!
//! Lines merge on (item id, note): adding the same item with the same note
//! bumps the existing quantity, a different note opens a separate line.
//! Totals are computed in `Decimal` from the per-line unit price and only
//! rounded to two decimals for display.

use crate::{ClientError, ClientResult};
use rust_decimal::{Decimal, RoundingStrategy};
use shared::models::{MenuItem, OrderItem};

/// One entry in the draft order
///
/// Holds a snapshot of the menu item at the time it was added, not a live
/// reference; later backend edits to the menu do not touch open carts.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Locally assigned line identity, stable across quantity edits
    pub line_id: u64,
    pub item: MenuItem,
    /// Display name of the category the item was added from
    pub category_name: String,
    pub quantity: u32,
    /// Free-text note; part of the line's merge identity
    pub note: Option<String>,
}

impl CartLine {
    /// Line subtotal (unit price x quantity), unrounded
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }

    /// Snapshot for the order-create request
    pub fn to_order_item(&self) -> OrderItem {
        OrderItem {
            id: self.item.id,
            name: self.item.name.clone(),
            price: self.item.price,
            quantity: self.quantity,
            note: self.note.clone(),
        }
    }
}

/// The draft order's line set
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_line_id: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add an item to the cart, merging into an existing line when the
    /// (item id, note) pair matches. Returns the id of the affected line.
    ///
    /// Unavailable items and zero quantities are rejected before any state
    /// changes; both are validation failures, not backend errors.
    pub fn add_line(
        &mut self,
        item: &MenuItem,
        category_name: &str,
        quantity: u32,
        note: Option<&str>,
    ) -> ClientResult<u64> {
        if quantity == 0 {
            return Err(ClientError::Validation(
                "Quantity must be at least 1".to_string(),
            ));
        }
        if !item.is_available {
            return Err(ClientError::Validation(format!(
                "{} is not available",
                item.name
            )));
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.item.id == item.id && l.note.as_deref() == note)
        {
            line.quantity += quantity;
            return Ok(line.line_id);
        }

        self.next_line_id += 1;
        let line_id = self.next_line_id;
        self.lines.push(CartLine {
            line_id,
            item: item.clone(),
            category_name: category_name.to_string(),
            quantity,
            note: note.map(str::to_string),
        });
        Ok(line_id)
    }

    /// Replace a line's quantity. A new quantity of zero or less removes the
    /// line outright; a zero-quantity line never exists. No upper bound.
    pub fn update_quantity(&mut self, line_id: u64, new_quantity: i32) {
        if new_quantity <= 0 {
            self.remove_line(line_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.line_id == line_id) {
            line.quantity = new_quantity as u32;
        }
    }

    /// Unconditional removal; unknown ids are a no-op
    pub fn remove_line(&mut self, line_id: u64) {
        self.lines.retain(|l| l.line_id != line_id);
    }

    /// Sum of (unit price x quantity) over all lines, unrounded
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total rounded to two decimals; rounding happens here and only here
    pub fn total_price_display(&self) -> String {
        format!(
            "{:.2}",
            self.total_price()
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        )
    }

    /// Sum of quantities, for the cart badge
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Drop every line (checkout success or explicit clear)
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Line snapshots for the order-create request
    pub fn to_order_items(&self) -> Vec<OrderItem> {
        self.lines.iter().map(CartLine::to_order_item).collect()
    }
}
