//! Payment-proof endpoints.
//!
//! Customers upload one proof image per order while it is awaiting payment;
//! admins approve by re-PUTting the order's payment status, or reject the
//! proof itself. Gating lives in [`crate::core::payment`].

use crate::api::{ApiClient, expect_success, read_data};
use crate::errors::Result;
use crate::models::{Order, OrderPatch, PAYMENT_STATUS_APPROVED, PaymentProof, PaymentProofUpload};
use reqwest::multipart::{Form, Part};

/// Fetches all payment proofs (admin).
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<PaymentProof>> {
    let response = client.http().get(client.url("payment-proof")).send().await?;
    read_data(response, "payment proofs").await
}

/// Uploads a payment proof image as a multipart form.
///
/// Fields: `orderId`, `senderName` and `amount` when collected, and the
/// `paymentImage` file itself.
pub async fn upload(client: &ApiClient, upload: PaymentProofUpload) -> Result<PaymentProof> {
    let mut form = Form::new().text("orderId", upload.order_id);
    if let Some(sender_name) = upload.sender_name {
        form = form.text("senderName", sender_name);
    }
    if let Some(amount) = upload.amount {
        form = form.text("amount", amount.to_string());
    }
    let image = Part::bytes(upload.image.bytes).file_name(upload.image.file_name);
    form = form.part("paymentImage", image);

    let response = client
        .http()
        .post(client.url("payment-proof"))
        .multipart(form)
        .send()
        .await?;
    read_data(response, "payment proof").await
}

/// Rejects a payment proof (admin).
pub async fn reject(client: &ApiClient, proof_id: &str) -> Result<()> {
    let response = client
        .http()
        .put(client.url(&format!("payment-proof/{proof_id}/reject")))
        .send()
        .await?;
    expect_success(response, "payment proof").await
}

/// Approves the payment of an order (admin) by advancing its payment status.
pub async fn approve_order(client: &ApiClient, order_id: &str) -> Result<Order> {
    let patch = OrderPatch {
        payment_status: Some(PAYMENT_STATUS_APPROVED.to_string()),
        ..OrderPatch::default()
    };
    crate::api::orders::update(client, order_id, &patch).await
}
