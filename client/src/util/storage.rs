//! `localStorage` implementation of the core persistence boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `storefront` crate defines what gets persisted and when; this
//! adapter is only the browser-facing key-value store behind its
//! [`SliceStore`] trait. Storage being disabled (private browsing, quota)
//! degrades to in-memory state for the session, never an error the user
//! sees.

use storefront::persist::{SliceStore, StorageError};

/// Browser `localStorage` behind the core's [`SliceStore`] trait.
///
/// Off-wasm (native tests of this crate) every read misses and every write
/// reports storage as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl SliceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|err| StorageError::Write(format!("{err:?}")))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}
