//! Review endpoints. Creation is gated in [`crate::core::review`].

use crate::api::{ApiClient, read_data};
use crate::errors::Result;
use crate::models::{NewReview, Review};

/// Fetches all reviews for a product.
pub async fn fetch_for_product(client: &ApiClient, product_id: &str) -> Result<Vec<Review>> {
    let response = client
        .http()
        .get(client.url(&format!("reviews/product/{product_id}")))
        .send()
        .await?;
    read_data(response, "reviews").await
}

/// Submits a review.
pub async fn create(client: &ApiClient, review: &NewReview) -> Result<Review> {
    let response = client
        .http()
        .post(client.url("reviews"))
        .json(review)
        .send()
        .await?;
    read_data(response, "review").await
}
