//! Brand roster and the synthetic product catalog.
//!
//! There is no backend; the client needs content the moment it loads. The
//! generator produces a deterministic-shape catalog (every brand gets exactly
//! [`crate::consts::ITEMS_PER_BRAND`] items) with randomized values drawn
//! from the vocabularies in [`crate::consts`]. Product ids are derived from
//! the brand slug and item index only, so they are stable across sessions
//! even though prices and colors are not. Nothing outside the id may be
//! relied on for cross-session identity.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::consts::{
    CATEGORIES, COLORS, ITEMS_PER_BRAND, MARKDOWN_PERCENT_MAX, MARKDOWN_PERCENT_MIN,
    ORIGINAL_PRICE_MAX, ORIGINAL_PRICE_MIN, SEASONS, SIZES,
};

/// A wholesale fashion brand carried by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// URL-safe identifier, always `slugify(name)`.
    pub id: String,
    pub name: String,
    /// Seasons this brand ships collections for.
    pub seasons: Vec<String>,
    /// Showcase image URL.
    pub image: String,
}

/// A single catalog product. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// `"{brand-slug}-{index+1}"` — the only stable cross-session handle.
    pub id: String,
    pub name: String,
    /// Selling price in rupees, marked down from `original_price`.
    pub price: u32,
    /// List price in rupees; always >= `price`.
    pub original_price: u32,
    pub image: String,
    /// Display name of the brand (not the slug).
    pub brand: String,
    pub category: String,
    pub color: String,
    /// Contiguous, non-empty window of the size run.
    pub sizes: Vec<String>,
    pub description: String,
    pub season: String,
}

/// Name, seasons, and showcase image for every carried brand.
const BRAND_TABLE: [(&str, &[&str], &str); 22] = [
    ("Urja & WACCHI", &["Summer", "Winter"], "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400"),
    ("Lasoon", &["Winter"], "https://images.unsplash.com/photo-1556905055-8f358a7a47b2?w=400"),
    ("Radhika", &["Winter"], "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?w=400"),
    ("Jsur", &["Winter"], "https://images.unsplash.com/photo-1469334031218-e382a71b716b?w=400"),
    ("Avangard", &["Winter", "Summer"], "https://images.unsplash.com/photo-1445205170230-053b83016050?w=400"),
    ("B-52", &["Winter"], "https://images.unsplash.com/photo-1516762689617-e1cffcef479d?w=400"),
    ("Oakberry", &["Winter"], "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?w=400"),
    ("Domex Club", &["Winter"], "https://images.unsplash.com/photo-1460353581641-37baddab0fa2?w=400"),
    ("E Zinna", &["Winter"], "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?w=400"),
    ("Belly-11", &["Winter"], "https://images.unsplash.com/photo-1509631179647-0177331693ae?w=400"),
    ("Miss Eney", &["Winter"], "https://images.unsplash.com/photo-1544441893-675973e31985?w=400"),
    ("Princy", &["Winter"], "https://images.unsplash.com/photo-1558769132-cb1aea458c5e?w=400"),
    ("Pampara", &["Winter"], "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=400"),
    ("5 Rivers", &["Winter"], "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400"),
    ("Yushiika", &["Summer", "Winter"], "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?w=400"),
    ("Amba Jee", &["Winter"], "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=400"),
    ("Anika", &["Winter"], "https://images.unsplash.com/photo-1583743089695-4b816a340f82?w=400"),
    ("Soulwin", &["Winter"], "https://images.unsplash.com/photo-1571945153237-4929e783af4a?w=400"),
    ("Cute Souls", &["Winter"], "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400"),
    ("Yuvika Fashion", &["Winter"], "https://images.unsplash.com/photo-1564557287817-3785e38ec1f5?w=400"),
    ("Lady Zone", &["Winter"], "https://images.unsplash.com/photo-1551488831-00ddcb6c6bd3?w=400"),
    ("Sweet Sister", &["Winter"], "https://images.unsplash.com/photo-1567401893414-76b7b1e5a7a5?w=400"),
];

/// The static brand roster, in carry order.
#[must_use]
pub fn brand_roster() -> Vec<Brand> {
    BRAND_TABLE
        .iter()
        .map(|(name, seasons, image)| Brand {
            id: slugify(name),
            name: (*name).to_owned(),
            seasons: seasons.iter().map(|s| (*s).to_owned()).collect(),
            image: (*image).to_owned(),
        })
        .collect()
}

/// Lowercase a display name into a URL-safe slug.
///
/// Alphanumerics are kept, runs of anything else collapse to a single `-`,
/// and leading/trailing separators are trimmed. Brand ids and product ids
/// both go through here so listing routes and catalog lookups agree.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    slug
}

/// Generate the full synthetic catalog: every brand times
/// [`ITEMS_PER_BRAND`] items, values randomized from the shared
/// vocabularies. Called once per session; the seed comes from the host
/// clock, so catalogs differ between reloads while ids stay stable.
#[must_use]
pub fn generate_catalog(seed: u64) -> Vec<Product> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut products = Vec::with_capacity(BRAND_TABLE.len() * ITEMS_PER_BRAND);

    for (brand_index, (name, _, _)) in BRAND_TABLE.iter().enumerate() {
        let slug = slugify(name);
        for item in 0..ITEMS_PER_BRAND {
            products.push(generate_product(&mut rng, name, &slug, brand_index, item));
        }
    }

    products
}

fn generate_product(
    rng: &mut SmallRng,
    brand: &str,
    slug: &str,
    brand_index: usize,
    item: usize,
) -> Product {
    let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];
    let color = COLORS[rng.random_range(0..COLORS.len())];
    let original_price = rng.random_range(ORIGINAL_PRICE_MIN..ORIGINAL_PRICE_MAX);
    let markdown = rng.random_range(MARKDOWN_PERCENT_MIN..MARKDOWN_PERCENT_MAX);
    // Integer floor keeps price strictly below original_price for any
    // markdown >= 1%.
    let price = original_price * (100 - markdown) / 100;

    // A contiguous window of the size run: start in the first half, end
    // at least four slots in, so the window is never empty.
    let start = rng.random_range(0..3);
    let end = rng.random_range(0..3) + 4;
    let sizes = SIZES[start..end].iter().map(|s| (*s).to_owned()).collect();

    let season = SEASONS[rng.random_range(0..SEASONS.len())];

    Product {
        id: format!("{}-{}", slug, item + 1),
        name: format!("{brand} {category} - {color}"),
        price,
        original_price,
        image: format!("{}?w=400&h=500&fit=crop", product_image_base(brand_index, item)),
        brand: brand.to_owned(),
        category: category.to_owned(),
        color: color.to_owned(),
        sizes,
        description: format!(
            "Premium quality {} from {brand}. Perfect for retailers looking for high-quality fashion pieces.",
            category.to_lowercase()
        ),
        season: season.to_owned(),
    }
}

/// Derive a per-item placeholder image from the shared photo id pool.
fn product_image_base(brand_index: usize, item: usize) -> String {
    let offset = (brand_index * 100 + item * 10) as u64;
    format!("https://images.unsplash.com/photo-{}", 1_556_905_055 + offset)
}
