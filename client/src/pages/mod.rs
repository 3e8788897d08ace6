//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. Pages read and mutate state only through the
//! store context.

pub mod admin;
pub mod brand_products;
pub mod brands;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod login;
pub mod product_detail;
pub mod products;
