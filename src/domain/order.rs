//! Order entity, priced line snapshots, and totals.
//!
//! Prices are frozen into the order at placement time; later catalog
//! edits never change a stored order. All money values use two-decimal
//! half-up rounding.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{
    MONEY_SCALE, ORDER_SOURCE_MOBILE, ORDER_STATUS_PENDING, VAT_RATE,
};
use crate::domain::cart::CartLine;

/// Round a money value to two decimals, half away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// A priced order line, frozen from a cart line at placement time.
///
/// `price` and `priceExclVAT` both mirror `unitPrice`; `totalPrice` is
/// the pre-VAT line total (`unitPrice * quantity`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    pub quantity: u32,
    pub units: String,
    pub unit_price: Decimal,
    #[serde(rename = "hasVAT")]
    pub has_vat: bool,
    pub price: Decimal,
    #[serde(rename = "priceExclVAT")]
    pub price_excl_vat: Decimal,
    pub vat_amount: Decimal,
    #[serde(rename = "priceInclVAT")]
    pub price_incl_vat: Decimal,
    pub total_price: Decimal,
}

impl OrderLine {
    /// Price a cart line into an order snapshot.
    ///
    /// VAT-exempt lines carry a zero `vatAmount` and an unchanged
    /// `priceInclVAT`; the exemption does not feed into order totals.
    pub fn price(line: &CartLine) -> Self {
        let vat_amount = if line.has_vat {
            round2(line.unit_price * *VAT_RATE)
        } else {
            Decimal::ZERO
        };
        let price_incl_vat = if line.has_vat {
            round2(line.unit_price + vat_amount)
        } else {
            line.unit_price
        };
        Self {
            id: line.id.clone(),
            title: line.title.clone(),
            item_type: line.item_type.clone(),
            quantity: line.quantity,
            units: line.units.clone(),
            unit_price: line.unit_price,
            has_vat: line.has_vat,
            price: line.unit_price,
            price_excl_vat: line.unit_price,
            vat_amount,
            price_incl_vat,
            total_price: round2(line.unit_price * Decimal::from(line.quantity)),
        }
    }
}

/// Order-level money summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// Compute totals from priced lines.
    ///
    /// Tax and total are taken from the raw (unrounded) sum of line
    /// totals; the stored subtotal is rounded afterwards. The flat rate
    /// applies to the whole order, VAT-exempt lines included.
    pub fn compute(lines: &[OrderLine]) -> Self {
        let raw_subtotal: Decimal = lines.iter().map(|line| line.total_price).sum();
        let tax = round2(raw_subtotal * *VAT_RATE);
        let total = round2(raw_subtotal + tax);
        Self {
            subtotal: round2(raw_subtotal),
            tax,
            total,
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub restaurant_name: String,
    pub items: Vec<OrderLine>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total_price: Decimal,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub order_status: String,
    pub is_bill_paid: bool,
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Build a new pending order. Both timestamps are stamped from the
    /// same instant.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        restaurant_name: impl Into<String>,
        items: Vec<OrderLine>,
        totals: OrderTotals,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            name: name.into(),
            restaurant_name: restaurant_name.into(),
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total_price: totals.total,
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            order_status: ORDER_STATUS_PENDING.to_string(),
            is_bill_paid: false,
            source: ORDER_SOURCE_MOBILE.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Stock remaining after an order line is fulfilled, clamped at zero.
pub fn remaining_quantity(current: i32, ordered: u32) -> i32 {
    let ordered = i32::try_from(ordered).unwrap_or(i32::MAX);
    current.saturating_sub(ordered).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_line(unit_price: Decimal, has_vat: bool, quantity: u32) -> CartLine {
        CartLine {
            id: "item-1".to_string(),
            title: "Idli Batter".to_string(),
            item_type: Some("Batter".to_string()),
            unit_price,
            units: "KG".to_string(),
            has_vat,
            quantity,
        }
    }

    #[test]
    fn prices_a_standard_rated_line() {
        let line = OrderLine::price(&cart_line(Decimal::new(100, 0), true, 2));

        assert_eq!(line.unit_price, Decimal::new(100, 0));
        assert_eq!(line.price, line.unit_price);
        assert_eq!(line.price_excl_vat, line.unit_price);
        assert_eq!(line.vat_amount, Decimal::new(2000, 2));
        assert_eq!(line.price_incl_vat, Decimal::new(12000, 2));
        assert_eq!(line.total_price, Decimal::new(20000, 2));
    }

    #[test]
    fn exempt_line_carries_zero_vat() {
        let line = OrderLine::price(&cart_line(Decimal::new(4550, 2), false, 3));

        assert_eq!(line.vat_amount, Decimal::ZERO);
        assert_eq!(line.price_incl_vat, Decimal::new(4550, 2));
        assert_eq!(line.total_price, Decimal::new(13650, 2));
    }

    #[test]
    fn line_total_is_pre_vat() {
        let line = OrderLine::price(&cart_line(Decimal::new(333, 2), true, 3));

        // 3.33 * 3, not 4.00 * 3
        assert_eq!(line.total_price, Decimal::new(999, 2));
    }

    #[test]
    fn vat_rounds_half_away_from_zero() {
        // 0.625 * 0.20 = 0.125 -> 0.13
        let line = OrderLine::price(&cart_line(Decimal::new(625, 3), true, 1));

        assert_eq!(line.vat_amount, Decimal::new(13, 2));
    }

    #[test]
    fn totals_for_single_line_order() {
        let lines = vec![OrderLine::price(&cart_line(Decimal::new(100, 0), true, 2))];
        let totals = OrderTotals::compute(&lines);

        assert_eq!(totals.subtotal, Decimal::new(20000, 2));
        assert_eq!(totals.tax, Decimal::new(4000, 2));
        assert_eq!(totals.total, Decimal::new(24000, 2));
    }

    #[test]
    fn tax_is_computed_before_subtotal_rounds() {
        // raw subtotal 9.99: tax = round2(1.998) = 2.00, total = 11.99
        let lines = vec![OrderLine::price(&cart_line(Decimal::new(333, 2), true, 3))];
        let totals = OrderTotals::compute(&lines);

        assert_eq!(totals.subtotal, Decimal::new(999, 2));
        assert_eq!(totals.tax, Decimal::new(200, 2));
        assert_eq!(totals.total, Decimal::new(1199, 2));
    }

    #[test]
    fn flat_tax_ignores_line_exemptions() {
        let lines = vec![
            OrderLine::price(&cart_line(Decimal::new(100, 0), true, 1)),
            OrderLine::price(&cart_line(Decimal::new(50, 0), false, 1)),
        ];
        let totals = OrderTotals::compute(&lines);

        // 20% of 150.00 even though the second line is exempt
        assert_eq!(totals.tax, Decimal::new(3000, 2));
        assert_eq!(totals.total, Decimal::new(18000, 2));
    }

    #[test]
    fn empty_line_set_totals_to_zero() {
        let totals = OrderTotals::compute(&[]);

        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn new_order_stamps_defaults() {
        let lines = vec![OrderLine::price(&cart_line(Decimal::new(100, 0), true, 1))];
        let totals = OrderTotals::compute(&lines);
        let order = Order::new(
            "user-1",
            "Priya",
            "Saravana Bhavan",
            lines,
            totals,
            "priya@example.com",
            "",
            "",
        );

        assert_eq!(order.order_status, "pending");
        assert_eq!(order.source, "mobile");
        assert!(!order.is_bill_paid);
        assert_eq!(order.created_at, order.updated_at);
        assert_eq!(order.total_price, totals.total);
    }

    #[test]
    fn remaining_quantity_clamps_at_zero() {
        assert_eq!(remaining_quantity(10, 3), 7);
        assert_eq!(remaining_quantity(2, 5), 0);
        assert_eq!(remaining_quantity(0, 1), 0);
        assert_eq!(remaining_quantity(4, 4), 0);
    }
}
