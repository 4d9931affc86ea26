//! `WeldStore` - Client core for a custom fabrication goods storefront
//!
//! This crate provides the typed client side of a welding/fabrication storefront:
//! endpoint wrappers for the backend REST API, a locally persisted cart and
//! session, the cart/order pricing and reconciliation arithmetic, input
//! validation, order-status partitioning, and Indonesian locale formatters.
//! Rendering is left to whatever surface consumes this crate.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// HTTP client wrapper and per-resource endpoint modules
pub mod api;
/// Configuration loading from config.toml and environment variables
pub mod config;
/// Core business logic - pricing, cart ops, checkout, status, validation, formatting
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Typed request/response contracts for the backend API
pub mod models;
/// Local persistence shim - cart and session files
pub mod store;

#[cfg(test)]
pub mod test_utils;
