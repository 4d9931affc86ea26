//! Shared test utilities.
//!
//! Helpers for building sample catalog, cart, and order records with sensible
//! defaults, used across the unit tests.

use crate::core::checkout::CheckoutDetails;
use crate::models::{
    Address, CartLine, Order, OrderItem, OrderStatus, PaymentProof, Product,
};

/// Builds a catalog product with the given id, name, and per-area price.
pub fn sample_product(id: &str, name: &str, price: Option<f64>) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        price,
        cover_image: None,
        categories: Vec::new(),
        reviews: Vec::new(),
        updated_at: None,
    }
}

/// Builds a cart line for product "p1" with the given price and size and a
/// quantity of 1.
pub fn sample_line(price: Option<f64>, size: Option<f64>) -> CartLine {
    CartLine {
        product_id: "p1".to_string(),
        name: "Pagar Besi".to_string(),
        price,
        cover_image: None,
        size,
        quantity: 1,
    }
}

/// Builds an order with the given id and status and no items.
pub fn sample_order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        status,
        payment_status: None,
        payment_method: None,
        note: None,
        items: Vec::new(),
        total_price: 0.0,
        address: Address::default(),
        payment_proof: None,
        created_at: None,
        updated_at: None,
    }
}

/// Builds a placed order item with the given price snapshot and size.
pub fn sample_order_item(price: f64, size: f64) -> OrderItem {
    OrderItem {
        id: "item-1".to_string(),
        product_id: Some("p1".to_string()),
        raw_product_id: None,
        size,
        quantity: 1,
        price,
        product: None,
        raw_product: None,
    }
}

/// Builds a payment proof attached to the given order.
pub fn sample_payment_proof(id: &str, order_id: &str) -> PaymentProof {
    PaymentProof {
        id: id.to_string(),
        order_id: order_id.to_string(),
        image_url: Some("https://example.com/proof.jpg".to_string()),
        status: None,
        created_at: None,
    }
}

/// Builds checkout details for user "user-1" with a Yogyakarta address.
pub fn sample_checkout_details() -> CheckoutDetails {
    CheckoutDetails {
        user_id: "user-1".to_string(),
        note: "Tolong dikirim sore".to_string(),
        address: Address {
            street: Some("Jl. Magelang No. 12".to_string()),
            village: Some("Sinduadi".to_string()),
            district: Some("Mlati".to_string()),
            city: Some("Sleman".to_string()),
            province: Some("DI Yogyakarta".to_string()),
            postal_code: Some("55281".to_string()),
        },
    }
}
