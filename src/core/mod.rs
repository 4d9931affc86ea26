//! Core business logic - framework-agnostic and side-effect free where possible.
//!
//! Pricing arithmetic, cart mutation rules, checkout reconciliation, order
//! status partitioning, input validation, gating rules, and locale formatting.
//! Everything here is exercised by both the storefront and the admin surfaces.

/// Cart line mutation rules (merge, remove, clear)
pub mod cart;
/// Order assembly and submission from the cart
pub mod checkout;
/// Indonesian locale formatters (currency, dates, area sizes)
pub mod format;
/// Payment-proof gating rules
pub mod payment;
/// Line and cart/order total arithmetic
pub mod pricing;
/// Review gating and submission
pub mod review;
/// Order status partitioning into display buckets
pub mod status;
/// Numeric input validation
pub mod validate;
