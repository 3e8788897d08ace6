//! Persisted state slices and the storage bridge.
//!
//! Four slices of [`AppState`] survive a reload: the buyer profile, the
//! cart, the address book, and the admin-session flag. Each is JSON-encoded
//! under its own namespaced key in a host key-value store behind the
//! [`SliceStore`] trait — `localStorage` in the browser, [`MemoryStore`] in
//! tests. The bridge subscribes to the [`crate::store::Store`]'s change
//! notifications and writes only the slices a dispatch touched.
//!
//! Failure policy: storage is best-effort. A missing or malformed entry is
//! dropped on load (the slice falls back to its default) and a failed write
//! is logged and ignored — in-memory state stays correct for the session
//! either way. Concurrent tabs each hold their own copy and reconcile
//! last-writer-wins on next load.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::cart::CartItem;
use crate::catalog::Product;
use crate::consts::{KEY_ADDRESSES, KEY_ADMIN, KEY_CART, KEY_USER};
use crate::store::{AppState, Store};
use crate::user::{Address, User};

/// Which persisted slices a state transition touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSet {
    pub user: bool,
    pub cart: bool,
    pub addresses: bool,
    pub admin: bool,
}

impl SliceSet {
    pub const NONE: Self = Self { user: false, cart: false, addresses: false, admin: false };
    pub const USER: Self = Self { user: true, cart: false, addresses: false, admin: false };
    pub const CART: Self = Self { user: false, cart: true, addresses: false, admin: false };
    pub const ADDRESSES: Self = Self { user: false, cart: false, addresses: true, admin: false };
    pub const ADMIN: Self = Self { user: false, cart: false, addresses: false, admin: true };
    pub const ALL: Self = Self { user: true, cart: true, addresses: true, admin: true };

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            user: self.user || other.user,
            cart: self.cart || other.cart,
            addresses: self.addresses || other.addresses,
            admin: self.admin || other.admin,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

/// Fields hydrated from storage at startup; absent fields keep their
/// defaults. Also the payload of
/// [`crate::store::Action::LoadFromStorage`], which shallow-merges it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateSnapshot {
    pub user: Option<User>,
    pub cart: Option<Vec<CartItem>>,
    pub addresses: Option<Vec<Address>>,
    pub is_admin_logged_in: Option<bool>,
    /// Not persisted — the startup sequence threads the generated catalog
    /// through the same merge.
    pub products: Option<Vec<Product>>,
}

/// Why a storage write failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The host has no usable store (storage disabled, quota exceeded, or
    /// not a browser).
    #[error("persistent storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Host-provided string key-value store.
///
/// Implementations are synchronous and infallible on read — an unreadable
/// entry is indistinguishable from an absent one, which suits the
/// drop-and-default load policy.
pub trait SliceStore {
    /// The stored string for `key`, if present and readable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// [`StorageError`] when the host store is unavailable or rejects the
    /// write; callers treat this as a non-fatal no-op.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory [`SliceStore`] for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, as if a previous session had written it.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

impl SliceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Shared handles delegate, so a caller can keep inspecting a store it has
/// attached to a bridge.
impl<S: SliceStore> SliceStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        S::get(self, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        S::set(self, key, value)
    }
}

/// JSON codec between state slices and a [`SliceStore`].
pub struct StorageBridge<S> {
    store: S,
}

impl<S: SliceStore> StorageBridge<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read every slice the host has. Absent entries are omitted; malformed
    /// entries are logged and dropped so the slice uses its default.
    #[must_use]
    pub fn load(&self) -> StateSnapshot {
        StateSnapshot {
            user: self.read_slice(KEY_USER),
            cart: self.read_slice(KEY_CART),
            addresses: self.read_slice(KEY_ADDRESSES),
            is_admin_logged_in: self.read_slice(KEY_ADMIN),
            products: None,
        }
    }

    /// Serialize the slices in `changed` out of `state`.
    ///
    /// The buyer slice is only written while a buyer is present: clearing
    /// `state.user` does not erase a previously saved profile, it persists
    /// until overwritten by the next registration.
    pub fn save(&self, state: &AppState, changed: SliceSet) {
        if changed.user {
            if let Some(user) = &state.user {
                self.write_slice(KEY_USER, user);
            }
        }
        if changed.cart {
            self.write_slice(KEY_CART, &state.cart);
        }
        if changed.addresses {
            self.write_slice(KEY_ADDRESSES, &state.addresses);
        }
        if changed.admin {
            self.write_slice(KEY_ADMIN, &state.is_admin_logged_in);
        }
    }

    /// Subscribe this bridge to a store so every slice-changing dispatch is
    /// echoed to the host store.
    pub fn attach(self, store: &mut Store)
    where
        S: 'static,
    {
        store.subscribe(Box::new(move |state, changed| self.save(state, changed)));
    }

    fn read_slice<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("dropping malformed {key} slice: {err}");
                None
            }
        }
    }

    fn write_slice<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("could not encode {key} slice: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &json) {
            log::warn!("could not persist {key} slice: {err}");
        }
    }
}
