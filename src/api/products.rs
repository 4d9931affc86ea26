//! Product catalog endpoints.
//!
//! Products are read-only from the storefront's perspective; deletion exists
//! for the administrative back-office.

use crate::api::{ApiClient, expect_success, read_data};
use crate::errors::Result;
use crate::models::Product;

/// Fetches the full product catalog.
///
/// # Errors
/// Returns an error if the request or decoding fails.
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Product>> {
    let response = client.http().get(client.url("products")).send().await?;
    read_data(response, "products").await
}

/// Fetches a single product by ID.
///
/// # Errors
/// Returns [`crate::errors::Error::NotFound`] when the product does not exist.
pub async fn fetch_one(client: &ApiClient, product_id: &str) -> Result<Product> {
    let response = client
        .http()
        .get(client.url(&format!("products/{product_id}")))
        .send()
        .await?;
    read_data(response, "product").await
}

/// Deletes a product (admin).
pub async fn delete(client: &ApiClient, product_id: &str) -> Result<()> {
    let response = client
        .http()
        .delete(client.url(&format!("products/{product_id}")))
        .send()
        .await?;
    expect_success(response, "product").await
}
