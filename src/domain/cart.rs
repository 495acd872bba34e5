//! Cart aggregate and its line-item type.
//!
//! DDD: the cart is the one entity with a client-owned read-modify-write
//! cycle; it is modeled as an explicit aggregate so its operations can be
//! tested independently of any transport.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single cart entry: normalized item snapshot plus quantity.
///
/// This is the canonical line-item shape; loose legacy records
/// (`actualPrice`/`price`, `brand`) are normalized into it at the API
/// boundary and the fallback chains never propagate past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    pub unit_price: Decimal,
    pub units: String,
    #[serde(rename = "hasVAT")]
    pub has_vat: bool,
    pub quantity: u32,
}

/// Stored cart record keyed by user id.
///
/// `updated_at` is `None` only for the synthetic empty record returned
/// when no cart has ever been saved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartRecord {
    pub user_id: String,
    pub items: Vec<CartLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CartRecord {
    /// Empty record for a user with no stored cart.
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
            updated_at: None,
        }
    }
}

/// In-memory cart aggregate.
///
/// Entries keep insertion order. Every entry holds quantity >= 1; an
/// entry whose quantity would reach 0 is removed instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from previously stored lines.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Add an item: an existing entry gains one unit, a new item is
    /// appended with quantity 1. Returns the new cart snapshot.
    pub fn add(&mut self, item: CartLine) -> Vec<CartLine> {
        match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                quantity: 1,
                ..item
            }),
        }
        self.snapshot()
    }

    /// Remove the entry matching `item_id` entirely (not a decrement).
    /// Returns the new cart snapshot.
    pub fn remove(&mut self, item_id: &str) -> Vec<CartLine> {
        self.lines.retain(|line| line.id != item_id);
        self.snapshot()
    }

    /// Apply `delta` to an entry's quantity, clamped at 0; reaching 0
    /// removes the entry; an absent id is a no-op. Returns the new cart
    /// snapshot.
    pub fn set_quantity(&mut self, item_id: &str, delta: i32) -> Vec<CartLine> {
        if let Some(index) = self.lines.iter().position(|line| line.id == item_id) {
            let next = self.lines[index].quantity.saturating_add_signed(delta);
            if next == 0 {
                self.lines.remove(index);
            } else {
                self.lines[index].quantity = next;
            }
        }
        self.snapshot()
    }

    /// Empty the cart. Idempotent. Returns the (empty) snapshot.
    pub fn clear(&mut self) -> Vec<CartLine> {
        self.lines.clear();
        self.snapshot()
    }

    /// Owned copy of the current lines, in insertion order.
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Borrowed view of the current lines.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total unit count across all entries.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_string(),
            title: format!("Item {}", id),
            item_type: None,
            unit_price: Decimal::new(500, 2),
            units: "KG".to_string(),
            has_vat: true,
            quantity,
        }
    }

    #[test]
    fn add_new_item_starts_at_quantity_one() {
        let mut cart = Cart::new();
        // incoming quantity is ignored for a fresh entry
        cart.add(line("a", 7));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn add_existing_item_increments() {
        let mut cart = Cart::new();
        cart.add(line("a", 1));
        cart.add(line("a", 1));
        cart.add(line("a", 1));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(line("a", 1));
        cart.add(line("b", 1));
        cart.add(line("a", 1));
        cart.add(line("c", 1));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn remove_drops_entry_entirely() {
        let mut cart = Cart::new();
        cart.add(line("a", 1));
        cart.add(line("a", 1));
        cart.remove("a");

        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_applies_delta() {
        let mut cart = Cart::new();
        cart.add(line("a", 1));
        cart.set_quantity("a", 4);

        assert_eq!(cart.lines()[0].quantity, 5);

        cart.set_quantity("a", -2);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn set_quantity_clamps_at_zero_and_removes() {
        let mut cart = Cart::new();
        cart.add(line("a", 1));
        cart.set_quantity("a", 2);
        // larger negative delta than remaining quantity clamps to 0
        cart.set_quantity("a", -10);

        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_on_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(line("a", 1));
        let snapshot = cart.set_quantity("missing", 3);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "a");
        assert_eq!(snapshot[0].quantity, 1);
    }

    #[test]
    fn total_quantity_equals_sum_of_entries() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add(line("a", 1));
        }
        cart.add(line("b", 1));
        cart.set_quantity("b", 5);

        assert_eq!(cart.total_quantity(), 3 + 6);
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn no_entry_ever_holds_zero_quantity() {
        let mut cart = Cart::new();
        cart.add(line("a", 1));
        cart.add(line("b", 1));
        cart.set_quantity("a", -1);
        cart.set_quantity("b", 3);
        cart.set_quantity("b", -4);

        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(line("a", 1));

        let first = cart.clear();
        let second = cart.clear();

        assert!(first.is_empty());
        assert_eq!(first, second);
        assert_eq!(cart, Cart::new());
    }
}
