//! Order and order-item endpoints.
//!
//! Orders are created from the checkout flow and only ever mutated through
//! explicit admin edits that re-PUT the changed fields. Order items get their
//! own flat `order-item` resource on the backend.

use crate::api::{ApiClient, expect_success, read_data};
use crate::errors::Result;
use crate::models::{CreateOrderRequest, Order, OrderItem, OrderItemPayload, OrderPatch, OrderStatus};
use serde::Serialize;

/// Fetches all orders (admin).
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Order>> {
    let response = client.http().get(client.url("orders")).send().await?;
    read_data(response, "orders").await
}

/// Fetches a single order by ID.
///
/// # Errors
/// Returns [`crate::errors::Error::NotFound`] when the order does not exist.
pub async fn fetch_one(client: &ApiClient, order_id: &str) -> Result<Order> {
    let response = client
        .http()
        .get(client.url(&format!("orders/{order_id}")))
        .send()
        .await?;
    read_data(response, "order").await
}

/// Fetches the order history of one customer.
pub async fn fetch_for_user(client: &ApiClient, user_id: &str) -> Result<Vec<Order>> {
    let response = client
        .http()
        .get(client.url(&format!("orders/user/{user_id}")))
        .send()
        .await?;
    read_data(response, "orders").await
}

/// Submits an order-creation payload and returns the created order.
///
/// Callers should go through [`crate::core::checkout`], which recomputes the
/// total from the cart and rejects empty carts before any request is made.
pub async fn create(client: &ApiClient, request: &CreateOrderRequest) -> Result<Order> {
    let response = client
        .http()
        .post(client.url("orders"))
        .json(request)
        .send()
        .await?;
    read_data(response, "order").await
}

/// Applies a partial update to an order (admin).
pub async fn update(client: &ApiClient, order_id: &str, patch: &OrderPatch) -> Result<Order> {
    let response = client
        .http()
        .put(client.url(&format!("orders/{order_id}")))
        .json(patch)
        .send()
        .await?;
    read_data(response, "order").await
}

#[derive(Debug, Serialize)]
struct StatusBody {
    status: OrderStatus,
}

/// Moves an order to a new lifecycle status (admin).
pub async fn update_status(client: &ApiClient, order_id: &str, status: OrderStatus) -> Result<Order> {
    let response = client
        .http()
        .put(client.url(&format!("orders/{order_id}/status")))
        .json(&StatusBody { status })
        .send()
        .await?;
    read_data(response, "order").await
}

/// Deletes (cancels) an order.
pub async fn delete(client: &ApiClient, order_id: &str) -> Result<()> {
    let response = client
        .http()
        .delete(client.url(&format!("orders/{order_id}")))
        .send()
        .await?;
    expect_success(response, "order").await
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewOrderItem<'a> {
    order_id: &'a str,
    #[serde(flatten)]
    item: &'a OrderItemPayload,
}

/// Adds an item to an existing order (admin).
///
/// The caller is expected to follow up with an order-total update; see
/// [`crate::core::pricing::order_items_total`].
pub async fn add_item(
    client: &ApiClient,
    order_id: &str,
    item: &OrderItemPayload,
) -> Result<OrderItem> {
    let response = client
        .http()
        .post(client.url("order-item"))
        .json(&NewOrderItem { order_id, item })
        .send()
        .await?;
    read_data(response, "order item").await
}

/// Edits an existing order item (admin).
pub async fn update_item(
    client: &ApiClient,
    item_id: &str,
    item: &OrderItemPayload,
) -> Result<OrderItem> {
    let response = client
        .http()
        .put(client.url(&format!("order-item/{item_id}")))
        .json(item)
        .send()
        .await?;
    read_data(response, "order item").await
}

/// Removes an item from an order (admin).
pub async fn delete_item(client: &ApiClient, item_id: &str) -> Result<()> {
    let response = client
        .http()
        .delete(client.url(&format!("order-item/{item_id}")))
        .send()
        .await?;
    expect_success(response, "order item").await
}
