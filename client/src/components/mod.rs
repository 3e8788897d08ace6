//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and product surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod filter_panel;
pub mod navbar;
pub mod product_card;
pub mod registration_modal;
pub mod toast_host;
