//! User endpoints: lookup, registration, and admin management.

use crate::api::{ApiClient, expect_success, read_body, read_data};
use crate::errors::{Error, Result};
use crate::models::{RegistrationForm, User};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

const DEFAULT_ROLE: &str = "customer";

#[derive(Debug, Deserialize)]
struct EmailLookup {
    exists: bool,
}

/// Fetches all users (admin).
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<User>> {
    let response = client.http().get(client.url("users")).send().await?;
    read_data(response, "users").await
}

/// Fetches a single user by ID.
///
/// # Errors
/// Returns [`Error::NotFound`] when the user does not exist.
pub async fn fetch_one(client: &ApiClient, user_id: &str) -> Result<User> {
    let response = client
        .http()
        .get(client.url(&format!("users/{user_id}")))
        .send()
        .await?;
    read_data(response, "user").await
}

/// Checks whether an e-mail address is already registered.
///
/// This endpoint answers with a bare `{ "exists": bool }` body, without the
/// usual data envelope.
pub async fn email_exists(client: &ApiClient, email: &str) -> Result<bool> {
    let response = client
        .http()
        .get(client.url(&format!("users/email/{email}")))
        .send()
        .await?;
    let lookup: EmailLookup = read_body(response, "email lookup").await?;
    Ok(lookup.exists)
}

/// Registers a user via a multipart form, with an optional profile photo.
///
/// # Errors
/// Returns [`Error::Config`] when username, e-mail, or password is empty.
pub async fn register(client: &ApiClient, registration: RegistrationForm) -> Result<User> {
    if registration.username.trim().is_empty()
        || registration.email.trim().is_empty()
        || registration.password.is_empty()
    {
        return Err(Error::Config {
            message: "Username, email, and password are required".to_string(),
        });
    }

    let role = if registration.role.is_empty() {
        DEFAULT_ROLE.to_string()
    } else {
        registration.role
    };

    let address = registration.address;
    let mut form = Form::new()
        .text("username", registration.username)
        .text("name", registration.name)
        .text("email", registration.email)
        .text("password", registration.password)
        .text("role", role)
        .text("phone", registration.phone)
        .text("street", address.street.unwrap_or_default())
        .text("village", address.village.unwrap_or_default())
        .text("district", address.district.unwrap_or_default())
        .text("city", address.city.unwrap_or_default())
        .text("province", address.province.unwrap_or_default())
        .text("postalCode", address.postal_code.unwrap_or_default());

    if let Some(photo) = registration.photo_profile {
        let part = Part::bytes(photo.bytes).file_name(photo.file_name);
        form = form.part("photoProfile", part);
    }

    let response = client
        .http()
        .post(client.url("users"))
        .multipart(form)
        .send()
        .await?;
    read_data(response, "user").await
}

/// Deletes a user (admin).
pub async fn delete(client: &ApiClient, user_id: &str) -> Result<()> {
    let response = client
        .http()
        .delete(client.url(&format!("users/{user_id}")))
        .send()
        .await?;
    expect_success(response, "user").await
}
