//! Order assembly and submission.
//!
//! The submission payload never trusts a previously displayed total: it is
//! recomputed from the current cart with the pricing formula at assembly
//! time. An empty cart is rejected locally before any request is made, and
//! the cart store is cleared only after the backend confirms the order.

use crate::api::{self, ApiClient};
use crate::core::pricing;
use crate::errors::{Error, Result};
use crate::models::{Address, CartLine, CreateOrderRequest, Order, OrderItemDraft};
use crate::store::cart::CartStore;
use tracing::info;

/// Everything checkout needs besides the cart itself.
#[derive(Debug, Clone)]
pub struct CheckoutDetails {
    /// The ordering customer
    pub user_id: String,
    /// Free-form order note
    pub note: String,
    /// Delivery address
    pub address: Address,
}

/// Builds the order-creation payload from the given cart lines.
///
/// # Errors
/// Returns [`Error::EmptyCart`] when there is nothing to order.
pub fn build_order_request(
    lines: &[CartLine],
    details: &CheckoutDetails,
) -> Result<CreateOrderRequest> {
    if lines.is_empty() {
        return Err(Error::EmptyCart);
    }

    let items = lines
        .iter()
        .map(|line| OrderItemDraft {
            product_id: line.product_id.clone(),
            size: line.size.unwrap_or(0.0),
            quantity: line.quantity,
            price: line.price.unwrap_or(0.0),
        })
        .collect();

    Ok(CreateOrderRequest {
        user_id: details.user_id.clone(),
        note: details.note.clone(),
        items,
        total_price: pricing::cart_total(lines),
        address: details.address.clone(),
    })
}

/// Submits the current cart as an order and clears the cart on success.
///
/// A failed submission leaves the cart untouched so the customer can retry.
pub async fn submit_order(
    client: &ApiClient,
    cart: &CartStore,
    details: &CheckoutDetails,
) -> Result<Order> {
    let lines = cart.load()?;
    let request = build_order_request(&lines, details)?;
    let order = api::orders::create(client, &request).await?;
    cart.clear()?;
    info!(order_id = %order.id, total = order.total_price, "Order submitted, cart cleared.");
    Ok(order)
}
