//! Reactive handle around the core state container.
//!
//! DESIGN
//! ======
//! Exactly one [`Store`] exists per mounted app, constructed in `app` and
//! provided through context — components never reach for a global. The
//! store itself is not reactive, so the handle mirrors its state into an
//! `RwSignal` after every dispatch; views track the mirror, the storage
//! bridge subscribes to the store directly.

use leptos::prelude::*;

use storefront::store::{Action, AppState, Store};

/// Copyable context handle to the single application store.
///
/// The store holds boxed subscribers and is not `Send`, so it lives in
/// local storage; the mirror signal is plain data.
#[derive(Clone, Copy)]
pub struct StoreContext {
    store: StoredValue<Store, LocalStorage>,
    state: RwSignal<AppState>,
}

impl StoreContext {
    /// Wrap an already-hydrated store.
    pub fn new(store: Store) -> Self {
        let state = RwSignal::new(store.state().clone());
        Self { store: StoredValue::new_local(store), state }
    }

    /// Dispatch an action and refresh the reactive mirror.
    ///
    /// Synchronous, like the store itself: subscribers (persistence among
    /// them) run before this returns.
    pub fn dispatch(&self, action: Action) {
        self.store.update_value(|store| store.dispatch(action));
        self.state.set(self.store.with_value(|store| store.state().clone()));
    }

    /// Read a value out of the current state, tracking it reactively.
    pub fn with<T>(&self, read: impl Fn(&AppState) -> T) -> T {
        self.state.with(read)
    }
}

/// Construct the context from a store and provide it to descendants.
pub fn provide_store(store: Store) -> StoreContext {
    let ctx = StoreContext::new(store);
    provide_context(ctx);
    ctx
}

/// The context handle provided by [`provide_store`].
pub fn use_store() -> StoreContext {
    expect_context::<StoreContext>()
}
