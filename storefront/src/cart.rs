//! Cart line items.
//!
//! A cart line is a product in a specific size. Two lines with the same
//! product but different sizes are distinct; the pair `(product id,
//! selected size)` is the line's identity everywhere — dedup on add,
//! removal, and quantity updates all key on [`CartItem::line_key`].

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// One cart line: a product, how many units, and in which size.
///
/// Serialized flat (product fields inline alongside `quantity` and
/// `selectedSize`) so the persisted cart slice is a plain array of product
/// records with two extra fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    /// Units of this line; at least 1 while the line exists.
    pub quantity: u32,
    /// One of `product.sizes`.
    pub selected_size: String,
}

impl CartItem {
    /// A new line with quantity 1.
    #[must_use]
    pub fn new(product: Product, selected_size: String) -> Self {
        Self { product, quantity: 1, selected_size }
    }

    /// The line's identity key, `"{product id}-{selected size}"`.
    #[must_use]
    pub fn line_key(&self) -> String {
        line_key(&self.product.id, &self.selected_size)
    }

    /// Whether this line is the `(product id, size)` pair.
    #[must_use]
    pub fn matches(&self, product_id: &str, size: &str) -> bool {
        self.product.id == product_id && self.selected_size == size
    }
}

/// Build a line key from its parts.
#[must_use]
pub fn line_key(product_id: &str, size: &str) -> String {
    format!("{product_id}-{size}")
}
