//! Cart and order pricing arithmetic.
//!
//! One formula everywhere: a line total is `price × size`, where a missing
//! price counts as 0 and a missing or zero size counts as 1 (a line without an
//! explicit area is one unit of the product). Quantity is informational and
//! carried through unchanged; it never multiplies into the total. Totals stay
//! full-precision `f64` - rounding happens only in the display formatter.

use crate::models::{CartLine, OrderItem};

/// The price a line contributes per unit area. Missing prices count as 0.
#[must_use]
pub fn effective_price(price: Option<f64>) -> f64 {
    match price {
        Some(p) if !p.is_nan() => p,
        _ => 0.0,
    }
}

/// The size factor of a line. Missing, zero, or NaN sizes count as 1, so a
/// line without an explicit area yields the per-unit price as its total.
#[must_use]
pub fn effective_size(size: Option<f64>) -> f64 {
    match size {
        Some(s) if s != 0.0 && !s.is_nan() => s,
        _ => 1.0,
    }
}

/// Total of a single cart line.
#[must_use]
pub fn line_total(line: &CartLine) -> f64 {
    effective_price(line.price) * effective_size(line.size)
}

/// Total of a whole cart.
#[must_use]
pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines.iter().map(line_total).sum()
}

/// Total of a single placed order item, using the same formula as the cart.
#[must_use]
pub fn order_item_total(item: &OrderItem) -> f64 {
    effective_price(Some(item.price)) * effective_size(Some(item.size))
}

/// Recomputed total of an order's items, used when admin edits re-PUT the
/// order's `totalPrice`.
#[must_use]
pub fn order_items_total(items: &[OrderItem]) -> f64 {
    items.iter().map(order_item_total).sum()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{sample_line, sample_order_item};

    #[test]
    fn test_cart_total_with_defaults() {
        // price/size default to 0/1 when absent
        let lines = vec![
            sample_line(Some(100.0), Some(2.0)),
            sample_line(Some(50.0), None),
        ];
        assert_eq!(cart_total(&lines), 250.0);
    }

    #[test]
    fn test_missing_price_counts_as_zero() {
        let line = sample_line(None, Some(3.0));
        assert_eq!(line_total(&line), 0.0);
    }

    #[test]
    fn test_zero_size_yields_per_unit_price() {
        let line = sample_line(Some(75_000.0), Some(0.0));
        assert_eq!(line_total(&line), 75_000.0);
    }

    #[test]
    fn test_fractional_size_multiplies_price() {
        let line = sample_line(Some(100_000.0), Some(0.5));
        assert_eq!(line_total(&line), 50_000.0);
    }

    #[test]
    fn test_quantity_does_not_multiply_into_total() {
        let mut line = sample_line(Some(100.0), Some(2.0));
        line.quantity = 5;
        assert_eq!(line_total(&line), 200.0);
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn test_nan_size_counts_as_one() {
        let line = sample_line(Some(100.0), Some(f64::NAN));
        assert_eq!(line_total(&line), 100.0);
    }

    #[test]
    fn test_order_items_total_matches_cart_formula() {
        let items = vec![
            sample_order_item(100_000.0, 1.5),
            sample_order_item(20_000.0, 0.0),
        ];
        assert_eq!(order_items_total(&items), 170_000.0);
    }
}
