//! Production-progress endpoints.
//!
//! Progress entries are admin-authored timestamped notes attached to an order
//! item, shown to the customer as production status.

use crate::api::{ApiClient, expect_success, read_data};
use crate::errors::Result;
use crate::models::ProgressEntry;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ProgressBody<'a> {
    description: &'a str,
}

/// Fetches all progress entries for one order item.
pub async fn fetch_for_item(client: &ApiClient, order_item_id: &str) -> Result<Vec<ProgressEntry>> {
    let response = client
        .http()
        .get(client.url(&format!("progress/order-item/{order_item_id}")))
        .send()
        .await?;
    read_data(response, "progress entries").await
}

/// Adds a progress note to an order item (admin).
pub async fn add(
    client: &ApiClient,
    order_item_id: &str,
    description: &str,
) -> Result<ProgressEntry> {
    let response = client
        .http()
        .post(client.url(&format!("progress/order-item/{order_item_id}")))
        .json(&ProgressBody { description })
        .send()
        .await?;
    read_data(response, "progress entry").await
}

/// Edits a progress note (admin).
pub async fn update(client: &ApiClient, progress_id: &str, description: &str) -> Result<ProgressEntry> {
    let response = client
        .http()
        .put(client.url(&format!("progress/{progress_id}")))
        .json(&ProgressBody { description })
        .send()
        .await?;
    read_data(response, "progress entry").await
}

/// Deletes a progress note (admin).
pub async fn delete(client: &ApiClient, progress_id: &str) -> Result<()> {
    let response = client
        .http()
        .delete(client.url(&format!("progress/{progress_id}")))
        .send()
        .await?;
    expect_success(response, "progress entry").await
}
