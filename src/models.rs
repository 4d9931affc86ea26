//! Typed request/response contracts for the backend REST API.
//!
//! The backend speaks camelCase JSON and wraps most responses in a
//! `{ "data": ... }` envelope, which is stripped at the API boundary
//! (see [`crate::api`]). Fields the backend may omit are `Option` or carry
//! serde defaults; nothing here is re-validated at render time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `paymentStatus` value the backend stores once an admin approves a
/// payment proof. The rest of the field's value space is backend-defined,
/// so the field itself stays a free-form string.
pub const PAYMENT_STATUS_APPROVED: &str = "ACC";

/// Lifecycle status of an order, serialized in SCREAMING_SNAKE_CASE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Created, awaiting payment
    Pending,
    /// Payment accepted, production underway
    InProgress,
    /// Production finished
    Completed,
    /// Handed to the courier
    Shipped,
    /// Cancelled by the customer or an admin
    Cancelled,
}

/// One client-held cart entry: a product, its chosen area size, and quantity,
/// pending order submission.
///
/// Uniqueness key is (`product_id`, `size`); adding the same product at the
/// same size increments `quantity` rather than duplicating the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product the line refers to
    pub product_id: String,
    /// Product name snapshot for display
    pub name: String,
    /// Per-unit-area price snapshot; absent lines price at 0
    pub price: Option<f64>,
    /// Cover image URL snapshot, if the product has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Chosen area in square meters; absent means one unit
    pub size: Option<f64>,
    /// How many times this (product, size) pair was added
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// A catalog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// Junction record linking a product to one of its categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    /// The linked category
    pub category: Category,
}

/// A storefront product. Read-only from the storefront's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Long description
    #[serde(default)]
    pub description: Option<String>,
    /// Price per square meter
    pub price: Option<f64>,
    /// Cover image URL
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Categories the product belongs to
    #[serde(default)]
    pub categories: Vec<ProductCategory>,
    /// Reviews left by customers
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One item of a placed order.
///
/// `price` is a snapshot copied from the product at order-creation time and
/// is never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Unique identifier
    pub id: String,
    /// Referenced catalog product, if any
    #[serde(default)]
    pub product_id: Option<String>,
    /// Referenced raw-material product, if any
    #[serde(default)]
    pub raw_product_id: Option<String>,
    /// Area in square meters; 0 means the item is priced per unit
    #[serde(default)]
    pub size: f64,
    /// Quantity, informational alongside the size
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Per-unit-area price snapshot
    #[serde(default)]
    pub price: f64,
    /// Expanded catalog product, when the backend joins it in
    #[serde(default)]
    pub product: Option<Product>,
    /// Expanded raw-material product, when the backend joins it in
    #[serde(default)]
    pub raw_product: Option<Product>,
}

/// An uploaded payment proof image, pending admin approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProof {
    /// Unique identifier
    pub id: String,
    /// The order the proof belongs to
    pub order_id: String,
    /// Where the uploaded image ended up
    #[serde(default)]
    pub image_url: Option<String>,
    /// Backend-defined proof status
    #[serde(default)]
    pub status: Option<String>,
    /// Upload time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A customer order as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier
    pub id: String,
    /// Owning customer
    pub user_id: String,
    /// Lifecycle status
    pub status: OrderStatus,
    /// Backend-defined payment status; [`PAYMENT_STATUS_APPROVED`] once approved
    #[serde(default)]
    pub payment_status: Option<String>,
    /// Chosen payment method, if recorded
    #[serde(default)]
    pub payment_method: Option<String>,
    /// Free-form customer note
    #[serde(default)]
    pub note: Option<String>,
    /// Items in the order
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Total price snapshot taken at creation or last admin edit
    #[serde(default)]
    pub total_price: f64,
    /// Delivery address
    #[serde(flatten)]
    pub address: Address,
    /// Uploaded payment proof, once one exists
    #[serde(default)]
    pub payment_proof: Option<PaymentProof>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Indonesian-style delivery address, flattened into order and user records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Village (desa)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    /// District (kecamatan)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Province
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// A product review, created once per order item on a completed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique identifier
    pub id: String,
    /// Reviewed product
    #[serde(default)]
    pub product_id: Option<String>,
    /// Reviewing customer
    pub user_id: String,
    /// Star rating, 1-5
    pub rating: u8,
    /// Review text
    #[serde(default)]
    pub description: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: String,
    /// Login name
    pub username: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// E-mail address
    pub email: String,
    /// Backend role, e.g. "customer" or "admin"
    #[serde(default)]
    pub role: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Profile photo URL
    #[serde(default)]
    pub photo_profile: Option<String>,
    /// Default delivery address
    #[serde(flatten)]
    pub address: Address,
}

/// An admin-authored production progress note attached to an order item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    /// Unique identifier
    pub id: String,
    /// The order item the note is attached to
    #[serde(default)]
    pub order_item_id: Option<String>,
    /// Note text shown to the customer
    pub description: String,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One line of an order-creation payload, snapshotting the cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDraft {
    /// Product the line refers to
    pub product_id: String,
    /// Area in square meters; 0 when the cart line had no explicit size
    pub size: f64,
    /// Quantity, carried through unchanged
    pub quantity: u32,
    /// Per-unit-area price snapshot; 0 when the cart line had none
    pub price: f64,
}

/// The order-creation payload. The total is always recomputed from the cart
/// at assembly time, never copied from a previously displayed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Ordering customer
    pub user_id: String,
    /// Free-form customer note
    pub note: String,
    /// Snapshotted cart lines
    pub items: Vec<OrderItemDraft>,
    /// Total recomputed from the cart
    pub total_price: f64,
    /// Delivery address
    #[serde(flatten)]
    pub address: Address,
}

/// Partial order update, re-PUT to `orders/{id}`. Only the populated fields
/// are sent; the backend merges them into the stored record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    /// New lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// New payment status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    /// Recomputed total price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    /// New payment method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// New customer note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Payload for creating or editing an order item on the admin side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemPayload {
    /// Product the item refers to
    pub product_id: String,
    /// Area in square meters
    pub size: f64,
    /// Per-unit-area price snapshot
    pub price: f64,
}

/// Payload for submitting a review.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    /// The completed order being reviewed
    pub order_id: String,
    /// Reviewing customer
    pub user_id: String,
    /// Reviewed product
    pub product_id: String,
    /// Star rating, 1-5
    pub rating: u8,
    /// Review text
    pub description: String,
}

/// An in-memory file destined for a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    /// File name reported to the backend
    pub file_name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

/// Multipart payload for uploading a payment proof.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentProofUpload {
    /// The order being paid
    pub order_id: String,
    /// Name of the transferring account holder, when collected
    pub sender_name: Option<String>,
    /// Transferred amount, when collected
    pub amount: Option<f64>,
    /// The proof image
    pub image: FileUpload,
}

/// Multipart payload for registering a user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    /// Login name (required)
    pub username: String,
    /// Display name
    pub name: String,
    /// E-mail address (required)
    pub email: String,
    /// Password (required)
    pub password: String,
    /// Backend role; defaults to "customer" when empty
    pub role: String,
    /// Phone number
    pub phone: String,
    /// Default delivery address
    pub address: Address,
    /// Optional profile photo
    pub photo_profile: Option<FileUpload>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_order_deserializes_camel_case_payload() {
        let json = serde_json::json!({
            "id": "order-1",
            "userId": "user-1",
            "status": "IN_PROGRESS",
            "paymentStatus": "ACC",
            "totalPrice": 225_000.0,
            "street": "Jl. Magelang No. 12",
            "postalCode": "55281",
            "items": [{
                "id": "item-1",
                "productId": "p1",
                "size": 1.5,
                "quantity": 2,
                "price": 150_000.0
            }],
            "createdAt": "2026-08-29T07:30:00Z"
        });

        let order: Order = serde_json::from_value(json).unwrap();

        assert_eq!(order.status, OrderStatus::InProgress);
        assert_eq!(order.payment_status.as_deref(), Some(PAYMENT_STATUS_APPROVED));
        assert_eq!(order.total_price, 225_000.0);
        assert_eq!(order.address.street.as_deref(), Some("Jl. Magelang No. 12"));
        assert_eq!(order.items[0].size, 1.5);
        assert_eq!(order.items[0].quantity, 2);
        assert!(order.payment_proof.is_none());
    }

    #[test]
    fn test_order_status_round_trips_screaming_snake_case() {
        for (status, wire) in [
            (OrderStatus::Pending, "\"PENDING\""),
            (OrderStatus::InProgress, "\"IN_PROGRESS\""),
            (OrderStatus::Completed, "\"COMPLETED\""),
            (OrderStatus::Shipped, "\"SHIPPED\""),
            (OrderStatus::Cancelled, "\"CANCELLED\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            assert_eq!(serde_json::from_str::<OrderStatus>(wire).unwrap(), status);
        }
    }

    #[test]
    fn test_order_patch_serializes_only_populated_fields() {
        let patch = OrderPatch {
            payment_status: Some(PAYMENT_STATUS_APPROVED.to_string()),
            ..OrderPatch::default()
        };

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "paymentStatus": "ACC" }));
    }

    #[test]
    fn test_cart_line_quantity_defaults_to_one() {
        let json = serde_json::json!({
            "productId": "p1",
            "name": "Pagar Besi",
            "price": 150_000.0,
            "size": 2.0
        });

        let line: CartLine = serde_json::from_value(json).unwrap();
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_product_tolerates_missing_optional_collections() {
        let json = serde_json::json!({
            "id": "p1",
            "name": "Kanopi Baja",
            "price": 200_000.0
        });

        let product: Product = serde_json::from_value(json).unwrap();
        assert!(product.categories.is_empty());
        assert!(product.reviews.is_empty());
        assert!(product.description.is_none());
    }
}
