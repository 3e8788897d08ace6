//! Browser utilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin glue over `web-sys`/`js-sys` so pages and components never touch
//! the browser APIs directly.

pub mod format;
pub mod ids;
pub mod storage;
