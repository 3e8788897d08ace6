use super::*;
use crate::consts::ITEMS_PER_BRAND;

// =============================================================
// slugify
// =============================================================

#[test]
fn slugify_lowercases() {
    assert_eq!(slugify("Radhika"), "radhika");
}

#[test]
fn slugify_spaces_become_hyphens() {
    assert_eq!(slugify("Domex Club"), "domex-club");
    assert_eq!(slugify("5 Rivers"), "5-rivers");
}

#[test]
fn slugify_collapses_punctuation_runs() {
    // The ampersand and its surrounding spaces fold into one separator.
    assert_eq!(slugify("Urja & WACCHI"), "urja-wacchi");
}

#[test]
fn slugify_keeps_embedded_hyphens_as_separators() {
    assert_eq!(slugify("B-52"), "b-52");
    assert_eq!(slugify("Belly-11"), "belly-11");
}

#[test]
fn slugify_trims_leading_and_trailing_separators() {
    assert_eq!(slugify("  Soulwin  "), "soulwin");
    assert_eq!(slugify("--Anika--"), "anika");
}

#[test]
fn slugify_empty_is_empty() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify(" & "), "");
}

// =============================================================
// Brand roster
// =============================================================

#[test]
fn roster_has_twenty_two_brands() {
    assert_eq!(brand_roster().len(), 22);
}

#[test]
fn roster_ids_are_name_slugs() {
    for brand in brand_roster() {
        assert_eq!(brand.id, slugify(&brand.name));
    }
}

#[test]
fn roster_ids_are_unique() {
    let roster = brand_roster();
    for (i, a) in roster.iter().enumerate() {
        for b in &roster[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn roster_brands_have_seasons_and_images() {
    for brand in brand_roster() {
        assert!(!brand.seasons.is_empty(), "{} has no seasons", brand.name);
        assert!(brand.image.starts_with("https://"), "{} image", brand.name);
        for season in &brand.seasons {
            assert!(crate::consts::SEASONS.contains(&season.as_str()));
        }
    }
}

#[test]
fn roster_contains_known_brands() {
    let roster = brand_roster();
    assert!(roster.iter().any(|b| b.id == "urja-wacchi"));
    assert!(roster.iter().any(|b| b.id == "sweet-sister"));
}

// =============================================================
// Catalog generation: shape
// =============================================================

#[test]
fn generate_produces_items_per_brand_for_every_brand() {
    let catalog = generate_catalog(7);
    assert_eq!(catalog.len(), 22 * ITEMS_PER_BRAND);
    for brand in brand_roster() {
        let count = catalog.iter().filter(|p| p.brand == brand.name).count();
        assert_eq!(count, ITEMS_PER_BRAND, "{}", brand.name);
    }
}

#[test]
fn generate_ids_are_brand_slug_plus_index() {
    let catalog = generate_catalog(7);
    assert_eq!(catalog[0].id, "urja-wacchi-1");
    assert_eq!(catalog[ITEMS_PER_BRAND - 1].id, format!("urja-wacchi-{ITEMS_PER_BRAND}"));
    assert_eq!(catalog[ITEMS_PER_BRAND].id, "lasoon-1");
}

#[test]
fn generate_ids_are_unique() {
    let catalog = generate_catalog(3);
    let mut ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn generate_ids_are_stable_across_seeds() {
    let a = generate_catalog(1);
    let b = generate_catalog(99);
    let ids_a: Vec<&str> = a.iter().map(|p| p.id.as_str()).collect();
    let ids_b: Vec<&str> = b.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn generate_is_deterministic_for_a_seed() {
    assert_eq!(generate_catalog(42), generate_catalog(42));
}

#[test]
fn generate_varies_with_the_seed() {
    // Prices and colors are drawn from the RNG, so two seeds should not
    // produce the same 264-item catalog.
    assert_ne!(generate_catalog(1), generate_catalog(2));
}

// =============================================================
// Catalog generation: per-item invariants
// =============================================================

#[test]
fn generated_price_never_exceeds_original() {
    for product in generate_catalog(11) {
        assert!(product.price < product.original_price, "{}", product.id);
        assert!(product.price > 0, "{}", product.id);
    }
}

#[test]
fn generated_original_price_within_bounds() {
    for product in generate_catalog(11) {
        assert!(product.original_price >= crate::consts::ORIGINAL_PRICE_MIN);
        assert!(product.original_price < crate::consts::ORIGINAL_PRICE_MAX);
    }
}

#[test]
fn generated_sizes_are_a_contiguous_window_of_the_run() {
    for product in generate_catalog(11) {
        assert!(!product.sizes.is_empty(), "{}", product.id);
        let first = crate::consts::SIZES
            .iter()
            .position(|s| *s == product.sizes[0])
            .unwrap_or(usize::MAX);
        assert!(first != usize::MAX, "{} first size unknown", product.id);
        for (offset, size) in product.sizes.iter().enumerate() {
            assert_eq!(size, crate::consts::SIZES[first + offset], "{}", product.id);
        }
    }
}

#[test]
fn generated_vocabulary_fields_come_from_the_shared_lists() {
    for product in generate_catalog(11) {
        assert!(crate::consts::CATEGORIES.contains(&product.category.as_str()));
        assert!(crate::consts::COLORS.contains(&product.color.as_str()));
        assert!(crate::consts::SEASONS.contains(&product.season.as_str()));
    }
}

#[test]
fn generated_name_combines_brand_category_color() {
    for product in generate_catalog(5) {
        assert_eq!(
            product.name,
            format!("{} {} - {}", product.brand, product.category, product.color)
        );
    }
}

#[test]
fn generated_description_mentions_brand_and_category() {
    let catalog = generate_catalog(5);
    let product = &catalog[0];
    assert!(product.description.contains(&product.brand));
    assert!(product.description.contains(&product.category.to_lowercase()));
}

// =============================================================
// Product serde
// =============================================================

#[test]
fn product_serializes_camel_case() {
    let catalog = generate_catalog(1);
    let json = serde_json::to_string(&catalog[0]).unwrap();
    assert!(json.contains("\"originalPrice\""));
    assert!(!json.contains("\"original_price\""));
}

#[test]
fn product_serde_roundtrip() {
    let catalog = generate_catalog(1);
    let json = serde_json::to_string(&catalog[0]).unwrap();
    let back: Product = serde_json::from_str(&json).unwrap();
    assert_eq!(back, catalog[0]);
}
