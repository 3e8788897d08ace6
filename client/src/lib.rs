//! # client
//!
//! Leptos + WASM frontend for the Vastra B2B fashion wholesale storefront.
//! Entirely client-rendered: the `storefront` crate owns the state tree,
//! catalog, and pricing; this crate mounts the views, echoes state slices
//! into `localStorage`, and talks to the external identity provider.
//!
//! This crate contains pages, components, the reactive store wrapper, the
//! identity-provider boundary, and browser utilities. Build and serve with
//! `trunk serve`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
