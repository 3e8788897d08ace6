//! Shared constants for the storefront core.

// ── Pricing ─────────────────────────────────────────────────────

/// Percentage discount granted to registered buyers.
pub const REGISTERED_DISCOUNT_PERCENT: u32 = 12;

/// Multiplier applied to a unit price for registered buyers.
pub const REGISTERED_PRICE_FACTOR: f64 = 0.88;

/// Flat platform fee added to every order, in rupees.
pub const PLATFORM_FEE: u32 = 20;

/// Delivery charge for orders at or below the free-delivery threshold.
pub const DELIVERY_CHARGE: u32 = 50;

/// Subtotal above which delivery is free (strictly greater than).
pub const FREE_DELIVERY_THRESHOLD: u32 = 2000;

/// Coupon table: code to percentage off the subtotal. Codes match
/// case-insensitively; at most one coupon is active per order.
pub const COUPONS: [(&str, u32); 3] = [("WELCOME12", 12), ("FLAT20", 20), ("SAVE15", 15)];

// ── Catalog generation ──────────────────────────────────────────

/// Number of products generated per brand.
pub const ITEMS_PER_BRAND: usize = 12;

/// Lower bound (inclusive) for a generated original price, in rupees.
pub const ORIGINAL_PRICE_MIN: u32 = 1000;

/// Upper bound (exclusive) for a generated original price, in rupees.
pub const ORIGINAL_PRICE_MAX: u32 = 3000;

/// Lower bound (inclusive) for the generated markdown percentage.
pub const MARKDOWN_PERCENT_MIN: u32 = 10;

/// Upper bound (exclusive) for the generated markdown percentage.
pub const MARKDOWN_PERCENT_MAX: u32 = 50;

/// Product categories the generator draws from.
pub const CATEGORIES: [&str; 11] = [
    "Kurtis", "Tunics", "Tops", "Shirts", "T-Shirts", "Jeans", "Jackets", "Dresses", "Blazers",
    "Sweaters", "Trousers",
];

/// Colorways the generator draws from.
pub const COLORS: [&str; 7] = ["Black", "White", "Navy", "Gray", "Beige", "Red", "Blue"];

/// The full size run; each product carries a contiguous window of it.
pub const SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// Seasons a product or brand can be tagged with.
pub const SEASONS: [&str; 2] = ["Winter", "Summer"];

// ── Persistence ─────────────────────────────────────────────────

/// localStorage key for the buyer profile slice.
pub const KEY_USER: &str = "vastra_user";

/// localStorage key for the cart slice.
pub const KEY_CART: &str = "vastra_cart";

/// localStorage key for the address-book slice.
pub const KEY_ADDRESSES: &str = "vastra_addresses";

/// localStorage key for the admin-session flag slice.
pub const KEY_ADMIN: &str = "vastra_admin";

// ── Admin gate ──────────────────────────────────────────────────
//
// A client-side UI gate only. There is no server and nothing behind the
// dashboard that needs protecting.

/// Email half of the hardcoded admin credential pair.
pub const ADMIN_EMAIL: &str = "admin@vastra.shop";

/// Password half of the hardcoded admin credential pair.
pub const ADMIN_PASSWORD: &str = "vastra@2025";
