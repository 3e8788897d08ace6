//! Clock-derived identifiers for client-minted records.
//!
//! Buyers and addresses are created in the browser and never leave it, so a
//! millisecond timestamp is enough identity — the same scheme the persisted
//! slices have always used.

/// A fresh id from the host clock.
#[must_use]
pub fn timestamp_id() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        format!("{}", js_sys::Date::now() as u64)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        format!("{millis}")
    }
}

/// A seed for the catalog generator from the host clock.
#[must_use]
pub fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default()
    }
}
