//! Filter and sort composition for the product listing pages.
//!
//! Facets combine conjunctively: a product must pass every facet, and an
//! empty facet passes everything. Sorting is stable, so "popularity" (the
//! generator's order) survives as the tiebreak within equal keys.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::catalog::Product;

/// Facet selections from the listing sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub colors: Vec<String>,
    /// A product passes when any of its sizes is selected.
    pub sizes: Vec<String>,
    pub price_min: u32,
    pub price_max: u32,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            brands: Vec::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
            price_min: 0,
            price_max: 10_000,
        }
    }
}

impl ProductFilter {
    /// Whether `product` passes every selected facet.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        (self.categories.is_empty() || self.categories.contains(&product.category))
            && (self.brands.is_empty() || self.brands.contains(&product.brand))
            && (self.colors.is_empty() || self.colors.contains(&product.color))
            && (self.sizes.is_empty()
                || product.sizes.iter().any(|size| self.sizes.contains(size)))
            && product.price >= self.price_min
            && product.price <= self.price_max
    }

    /// Toggle a value in a facet list: absent adds, present removes.
    pub fn toggle(list: &mut Vec<String>, value: &str) {
        match list.iter().position(|v| v == value) {
            Some(index) => {
                list.remove(index);
            }
            None => list.push(value.to_owned()),
        }
    }
}

/// Listing sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Generator order, unchanged.
    #[default]
    Popularity,
    PriceLowToHigh,
    PriceHighToLow,
    NameAToZ,
}

/// Apply a filter then a sort, returning the surviving products in order.
#[must_use]
pub fn filter_and_sort(
    products: &[Product],
    filter: &ProductFilter,
    sort: SortOrder,
) -> Vec<Product> {
    let mut result: Vec<Product> =
        products.iter().filter(|p| filter.matches(p)).cloned().collect();
    match sort {
        SortOrder::Popularity => {}
        SortOrder::PriceLowToHigh => result.sort_by_key(|p| p.price),
        SortOrder::PriceHighToLow => result.sort_by_key(|p| std::cmp::Reverse(p.price)),
        SortOrder::NameAToZ => result.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    result
}
