//! Category endpoints (admin CRUD plus public listing).

use crate::api::{ApiClient, expect_success, read_data};
use crate::errors::{Error, Result};
use crate::models::Category;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CategoryName<'a> {
    name: &'a str,
}

/// Fetches all categories.
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Category>> {
    let response = client.http().get(client.url("categories")).send().await?;
    read_data(response, "categories").await
}

/// Creates a category with the given name (admin).
///
/// # Errors
/// Returns [`Error::Config`] when the name is empty or whitespace-only.
pub async fn create(client: &ApiClient, name: &str) -> Result<Category> {
    let name = validated_name(name)?;
    let response = client
        .http()
        .post(client.url("categories"))
        .json(&CategoryName { name })
        .send()
        .await?;
    read_data(response, "category").await
}

/// Renames a category (admin).
///
/// # Errors
/// Returns [`Error::Config`] when the name is empty or whitespace-only.
pub async fn update(client: &ApiClient, category_id: &str, name: &str) -> Result<Category> {
    let name = validated_name(name)?;
    let response = client
        .http()
        .put(client.url(&format!("categories/{category_id}")))
        .json(&CategoryName { name })
        .send()
        .await?;
    read_data(response, "category").await
}

/// Deletes a category (admin).
pub async fn delete(client: &ApiClient, category_id: &str) -> Result<()> {
    let response = client
        .http()
        .delete(client.url(&format!("categories/{category_id}")))
        .send()
        .await?;
    expect_success(response, "category").await
}

fn validated_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::Config {
            message: "Category name cannot be empty".to_string(),
        });
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_name_trims_whitespace() {
        assert_eq!(validated_name("  Pagar  ").ok(), Some("Pagar"));
    }

    #[test]
    fn test_validated_name_rejects_empty() {
        assert!(matches!(validated_name("   "), Err(Error::Config { .. })));
    }
}
