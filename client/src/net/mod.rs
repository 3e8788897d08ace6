//! Network boundaries.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront has no backend of its own; the only remote collaborator
//! is the external identity provider in [`auth`].

pub mod auth;
