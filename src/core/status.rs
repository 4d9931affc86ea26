//! Order status partitioning for the order-history view.
//!
//! Three named tabs match statuses exactly: PENDING is "unpaid", IN_PROGRESS
//! is "processing", COMPLETED is "finished". SHIPPED and CANCELLED orders go
//! to a separate archived bucket instead of disappearing from the view
//! entirely; the three named tabs keep their exact membership.

use crate::models::{Order, OrderStatus};

/// Orders partitioned into display buckets.
#[derive(Debug, Default)]
pub struct OrderTabs {
    /// PENDING orders awaiting payment
    pub unpaid: Vec<Order>,
    /// IN_PROGRESS orders in production
    pub processing: Vec<Order>,
    /// COMPLETED orders
    pub finished: Vec<Order>,
    /// SHIPPED and CANCELLED orders, kept visible outside the three tabs
    pub archived: Vec<Order>,
}

/// Partitions a flat order list into the display buckets, preserving the
/// incoming order within each bucket.
#[must_use]
pub fn partition_orders(orders: Vec<Order>) -> OrderTabs {
    let mut tabs = OrderTabs::default();
    for order in orders {
        match order.status {
            OrderStatus::Pending => tabs.unpaid.push(order),
            OrderStatus::InProgress => tabs.processing.push(order),
            OrderStatus::Completed => tabs.finished.push(order),
            OrderStatus::Shipped | OrderStatus::Cancelled => tabs.archived.push(order),
        }
    }
    tabs
}
