//! Cart mutation rules, pure over an in-memory line list.
//!
//! The cart's uniqueness key is (product, size): adding a product at a size
//! already in the cart increments that line's quantity; a different size
//! appends a new line. Removal is positional and keeps the remaining lines'
//! relative order. Persistence is the caller's concern - see
//! [`crate::store::cart::CartStore`].

use crate::models::{CartLine, Product};

/// Adds a product at the given area size, merging with an existing line when
/// the (product, size) pair is already present.
#[allow(clippy::float_cmp)] // merge key is exact equality on the parsed size
pub fn add_product(lines: &mut Vec<CartLine>, product: &Product, size: f64) {
    if let Some(existing) = lines
        .iter_mut()
        .find(|line| line.product_id == product.id && line.size == Some(size))
    {
        existing.quantity += 1;
        return;
    }

    lines.push(CartLine {
        product_id: product.id.clone(),
        name: product.name.clone(),
        price: product.price,
        cover_image: product.cover_image.clone(),
        size: Some(size),
        quantity: 1,
    });
}

/// Removes the line at `index`, returning it. Out-of-range indexes are a
/// no-op returning `None`; all other lines keep their relative order.
pub fn remove_line(lines: &mut Vec<CartLine>, index: usize) -> Option<CartLine> {
    if index < lines.len() {
        Some(lines.remove(index))
    } else {
        None
    }
}
