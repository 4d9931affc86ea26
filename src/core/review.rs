//! Review gating and submission.
//!
//! A review may be written once per order item, and only after the order has
//! reached COMPLETED.

use crate::api::{self, ApiClient};
use crate::errors::{Error, Result};
use crate::models::{NewReview, Order, OrderStatus, Review};

/// Whether the customer may review items of this order.
#[must_use]
pub fn can_review(order: &Order) -> bool {
    order.status == OrderStatus::Completed
}

/// Validates and submits a review for one product of a completed order.
///
/// # Errors
/// Returns [`Error::ReviewNotAllowed`] when the order is not completed, and
/// [`Error::InvalidRating`] for a rating outside 1-5. Nothing is sent in
/// either case.
pub async fn submit_review(
    client: &ApiClient,
    order: &Order,
    product_id: &str,
    user_id: &str,
    rating: u8,
    description: String,
) -> Result<Review> {
    if !can_review(order) {
        return Err(Error::ReviewNotAllowed {
            order_id: order.id.clone(),
        });
    }
    if !(1..=5).contains(&rating) {
        return Err(Error::InvalidRating { rating });
    }

    let review = NewReview {
        order_id: order.id.clone(),
        user_id: user_id.to_string(),
        product_id: product_id.to_string(),
        rating,
        description,
    };
    api::reviews::create(client, &review).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_order;

    #[test]
    fn test_only_completed_orders_can_be_reviewed() {
        assert!(can_review(&sample_order("o1", OrderStatus::Completed)));
        assert!(!can_review(&sample_order("o2", OrderStatus::Pending)));
        assert!(!can_review(&sample_order("o3", OrderStatus::InProgress)));
        assert!(!can_review(&sample_order("o4", OrderStatus::Shipped)));
    }
}
