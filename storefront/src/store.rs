//! The application state tree and its transition function.
//!
//! DESIGN
//! ======
//! One state tree, one way to change it: [`Store::dispatch`] feeds an
//! [`Action`] through the pure [`reduce`] function. Dispatch is synchronous
//! and single-threaded — each action fully applies before the next. The
//! store is an explicitly constructed value the caller owns and injects
//! (no globals), and persistence is decoupled: `reduce` reports which
//! persisted slices an action touched, and the store forwards that to
//! registered subscribers (the storage bridge among them) after the state
//! settles.
//!
//! The transition function is total. Every variant has a defined rule,
//! nothing panics, and a lookup miss (removing an absent line, updating an
//! absent line) is a no-op that changes no slice.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::cart::CartItem;
use crate::catalog::{Brand, Product, brand_roster};
use crate::persist::{SliceSet, StateSnapshot};
use crate::user::{Address, User};

/// The single shared state tree. Owned exclusively by a [`Store`];
/// everything else reads it through [`Store::state`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The registered buyer, if any.
    pub user: Option<User>,
    pub cart: Vec<CartItem>,
    pub addresses: Vec<Address>,
    /// Generated once at startup; empty until then.
    pub products: Vec<Product>,
    /// Static roster, present from construction.
    pub brands: Vec<Brand>,
    pub show_registration_modal: bool,
    pub is_admin_logged_in: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: None,
            cart: Vec::new(),
            addresses: Vec::new(),
            products: Vec::new(),
            brands: brand_roster(),
            show_registration_modal: false,
            is_admin_logged_in: false,
        }
    }
}

/// Everything that can happen to the state tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the buyer wholesale.
    SetUser(User),
    /// Merge one unit of `product` in `size` into the cart.
    AddToCart { product: Product, size: String },
    /// Drop the line with this key; no-op when absent.
    RemoveFromCart { line_key: String },
    /// Set a line's quantity directly; 0 removes the line.
    UpdateCartQuantity { line_key: String, quantity: u32 },
    ClearCart,
    /// Append to the address book.
    AddAddress(Address),
    /// Set the registration modal visibility, or flip it when `None`.
    ToggleRegistrationModal(Option<bool>),
    /// Set the admin-session UI gate.
    SetAdminLogin(bool),
    /// Shallow-merge hydrated fields over the current state. Fired once at
    /// startup.
    LoadFromStorage(StateSnapshot),
}

/// Apply `action` to `state`, returning the set of persisted slices that
/// changed. Total over [`Action`]; never panics.
pub fn reduce(state: &mut AppState, action: Action) -> SliceSet {
    match action {
        Action::SetUser(user) => {
            state.user = Some(user);
            SliceSet::USER
        }
        Action::AddToCart { product, size } => {
            match state.cart.iter_mut().find(|item| item.matches(&product.id, &size)) {
                Some(line) => line.quantity += 1,
                None => state.cart.push(CartItem::new(product, size)),
            }
            SliceSet::CART
        }
        Action::RemoveFromCart { line_key } => {
            let before = state.cart.len();
            state.cart.retain(|item| item.line_key() != line_key);
            if state.cart.len() == before { SliceSet::NONE } else { SliceSet::CART }
        }
        Action::UpdateCartQuantity { line_key, quantity } => {
            if quantity == 0 {
                // The >= 1 invariant is enforced here rather than trusted
                // to callers: a zero quantity is a removal.
                return reduce(state, Action::RemoveFromCart { line_key });
            }
            match state.cart.iter_mut().find(|item| item.line_key() == line_key) {
                Some(line) => {
                    line.quantity = quantity;
                    SliceSet::CART
                }
                None => SliceSet::NONE,
            }
        }
        Action::ClearCart => {
            state.cart.clear();
            SliceSet::CART
        }
        Action::AddAddress(address) => {
            state.addresses.push(address);
            SliceSet::ADDRESSES
        }
        Action::ToggleRegistrationModal(show) => {
            state.show_registration_modal = show.unwrap_or(!state.show_registration_modal);
            SliceSet::NONE
        }
        Action::SetAdminLogin(logged_in) => {
            state.is_admin_logged_in = logged_in;
            SliceSet::ADMIN
        }
        Action::LoadFromStorage(snapshot) => {
            let mut changed = SliceSet::NONE;
            if let Some(user) = snapshot.user {
                state.user = Some(user);
                changed = changed.union(SliceSet::USER);
            }
            if let Some(cart) = snapshot.cart {
                state.cart = cart;
                changed = changed.union(SliceSet::CART);
            }
            if let Some(addresses) = snapshot.addresses {
                state.addresses = addresses;
                changed = changed.union(SliceSet::ADDRESSES);
            }
            if let Some(flag) = snapshot.is_admin_logged_in {
                state.is_admin_logged_in = flag;
                changed = changed.union(SliceSet::ADMIN);
            }
            if let Some(products) = snapshot.products {
                state.products = products;
            }
            changed
        }
    }
}

/// Subscriber invoked after a dispatch that changed at least one persisted
/// slice.
pub type Subscriber = Box<dyn FnMut(&AppState, SliceSet)>;

/// The state container: owns the tree, applies actions, and notifies
/// subscribers of slice changes.
///
/// Constructed explicitly and passed to whoever needs it — there is no
/// ambient singleton. The view layer wraps one in a reactive handle; tests
/// construct their own.
#[derive(Default)]
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot of the current state. Callers must not clone and
    /// mutate expecting the store to notice; all writes go through
    /// [`Store::dispatch`].
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register for change notifications. Subscribers run in registration
    /// order, after the state has settled, and only when a dispatch changed
    /// at least one persisted slice.
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Apply one action. Synchronous: the state transition and all
    /// subscriber notifications complete before this returns.
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch {}", action_name(&action));
        let changed = reduce(&mut self.state, action);
        if changed.is_empty() {
            return;
        }
        for subscriber in &mut self.subscribers {
            subscriber(&self.state, changed);
        }
    }
}

/// Stable name for logging; avoids formatting whole payloads.
fn action_name(action: &Action) -> &'static str {
    match action {
        Action::SetUser(_) => "SetUser",
        Action::AddToCart { .. } => "AddToCart",
        Action::RemoveFromCart { .. } => "RemoveFromCart",
        Action::UpdateCartQuantity { .. } => "UpdateCartQuantity",
        Action::ClearCart => "ClearCart",
        Action::AddAddress(_) => "AddAddress",
        Action::ToggleRegistrationModal(_) => "ToggleRegistrationModal",
        Action::SetAdminLogin(_) => "SetAdminLogin",
        Action::LoadFromStorage(_) => "LoadFromStorage",
    }
}
