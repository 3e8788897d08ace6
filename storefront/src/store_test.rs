use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::catalog::generate_catalog;
use crate::user::RegistrationForm;

fn sample_products() -> Vec<Product> {
    generate_catalog(1)
}

fn sample_user(id: &str) -> User {
    RegistrationForm {
        name: "Rajesh Retailers".to_owned(),
        phone: "+91 9876543210".to_owned(),
        gst: "22AAAAA0000A1Z5".to_owned(),
        address: "Mumbai, Maharashtra".to_owned(),
    }
    .into_user(id.to_owned())
    .unwrap()
}

fn sample_address(id: &str) -> Address {
    Address {
        id: id.to_owned(),
        name: "Fashion Hub".to_owned(),
        phone: "+91 9876543211".to_owned(),
        address: "Delhi, India".to_owned(),
        gst: "27BBBBB0000B2Z4".to_owned(),
        is_default: false,
    }
}

fn add(state: &mut AppState, product: &Product, size: &str) -> SliceSet {
    reduce(state, Action::AddToCart { product: product.clone(), size: size.to_owned() })
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_except_brands() {
    let state = AppState::default();
    assert!(state.user.is_none());
    assert!(state.cart.is_empty());
    assert!(state.addresses.is_empty());
    assert!(state.products.is_empty());
    assert_eq!(state.brands.len(), 22);
    assert!(!state.show_registration_modal);
    assert!(!state.is_admin_logged_in);
}

// =============================================================
// SetUser
// =============================================================

#[test]
fn set_user_replaces_wholesale() {
    let mut state = AppState::default();
    reduce(&mut state, Action::SetUser(sample_user("1")));
    reduce(&mut state, Action::SetUser(sample_user("2")));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("2"));
}

#[test]
fn set_user_changes_the_user_slice() {
    let mut state = AppState::default();
    assert_eq!(reduce(&mut state, Action::SetUser(sample_user("1"))), SliceSet::USER);
}

// =============================================================
// AddToCart
// =============================================================

#[test]
fn repeated_adds_of_same_pair_merge_into_one_line() {
    let products = sample_products();
    let mut state = AppState::default();
    for _ in 0..5 {
        add(&mut state, &products[0], "M");
    }
    assert_eq!(state.cart.len(), 1);
    assert_eq!(state.cart[0].quantity, 5);
}

#[test]
fn adds_with_distinct_sizes_create_one_line_per_size() {
    let products = sample_products();
    let mut state = AppState::default();
    add(&mut state, &products[0], "S");
    add(&mut state, &products[0], "M");
    add(&mut state, &products[0], "M");
    add(&mut state, &products[0], "L");
    assert_eq!(state.cart.len(), 3);
    let m_line = state.cart.iter().find(|i| i.selected_size == "M").unwrap();
    assert_eq!(m_line.quantity, 2);
}

#[test]
fn adds_of_distinct_products_do_not_merge() {
    let products = sample_products();
    let mut state = AppState::default();
    add(&mut state, &products[0], "M");
    add(&mut state, &products[1], "M");
    assert_eq!(state.cart.len(), 2);
}

#[test]
fn add_to_cart_changes_the_cart_slice() {
    let products = sample_products();
    let mut state = AppState::default();
    assert_eq!(add(&mut state, &products[0], "M"), SliceSet::CART);
}

// =============================================================
// RemoveFromCart
// =============================================================

#[test]
fn remove_drops_only_the_matching_line() {
    let products = sample_products();
    let mut state = AppState::default();
    add(&mut state, &products[0], "S");
    add(&mut state, &products[0], "M");
    let key = state.cart[0].line_key();
    reduce(&mut state, Action::RemoveFromCart { line_key: key });
    assert_eq!(state.cart.len(), 1);
    assert_eq!(state.cart[0].selected_size, "M");
}

#[test]
fn remove_is_idempotent() {
    let products = sample_products();
    let mut state = AppState::default();
    add(&mut state, &products[0], "S");
    let key = state.cart[0].line_key();
    assert_eq!(
        reduce(&mut state, Action::RemoveFromCart { line_key: key.clone() }),
        SliceSet::CART
    );
    // Second removal finds nothing, changes nothing.
    assert_eq!(reduce(&mut state, Action::RemoveFromCart { line_key: key }), SliceSet::NONE);
    assert!(state.cart.is_empty());
}

#[test]
fn remove_of_unknown_key_is_a_noop() {
    let mut state = AppState::default();
    let result = reduce(&mut state, Action::RemoveFromCart { line_key: "nope-M".to_owned() });
    assert_eq!(result, SliceSet::NONE);
}

// =============================================================
// UpdateCartQuantity
// =============================================================

#[test]
fn update_quantity_sets_directly() {
    let products = sample_products();
    let mut state = AppState::default();
    add(&mut state, &products[0], "M");
    let key = state.cart[0].line_key();
    reduce(&mut state, Action::UpdateCartQuantity { line_key: key, quantity: 7 });
    assert_eq!(state.cart[0].quantity, 7);
}

#[test]
fn update_quantity_to_zero_removes_the_line() {
    let products = sample_products();
    let mut state = AppState::default();
    add(&mut state, &products[0], "M");
    let key = state.cart[0].line_key();
    assert_eq!(
        reduce(&mut state, Action::UpdateCartQuantity { line_key: key, quantity: 0 }),
        SliceSet::CART
    );
    assert!(state.cart.is_empty());
}

#[test]
fn update_quantity_of_unknown_line_is_a_noop() {
    let mut state = AppState::default();
    let result =
        reduce(&mut state, Action::UpdateCartQuantity { line_key: "nope-M".to_owned(), quantity: 3 });
    assert_eq!(result, SliceSet::NONE);
    assert!(state.cart.is_empty());
}

#[test]
fn quantity_stays_at_least_one_while_a_line_exists() {
    let products = sample_products();
    let mut state = AppState::default();
    add(&mut state, &products[0], "M");
    let key = state.cart[0].line_key();
    reduce(&mut state, Action::UpdateCartQuantity { line_key: key.clone(), quantity: 1 });
    assert!(state.cart.iter().all(|line| line.quantity >= 1));
    reduce(&mut state, Action::UpdateCartQuantity { line_key: key, quantity: 0 });
    assert!(state.cart.iter().all(|line| line.quantity >= 1));
}

// =============================================================
// ClearCart
// =============================================================

#[test]
fn clear_cart_empties_regardless_of_contents() {
    let products = sample_products();
    let mut state = AppState::default();
    add(&mut state, &products[0], "S");
    add(&mut state, &products[1], "M");
    add(&mut state, &products[2], "L");
    assert_eq!(reduce(&mut state, Action::ClearCart), SliceSet::CART);
    assert!(state.cart.is_empty());
}

#[test]
fn clear_cart_on_empty_cart_still_reports_the_slice() {
    // The original persisted the (empty) cart on every change; an explicit
    // clear is treated as a change even when nothing was in it.
    let mut state = AppState::default();
    assert_eq!(reduce(&mut state, Action::ClearCart), SliceSet::CART);
}

// =============================================================
// Addresses
// =============================================================

#[test]
fn add_address_appends_in_order() {
    let mut state = AppState::default();
    reduce(&mut state, Action::AddAddress(sample_address("a")));
    reduce(&mut state, Action::AddAddress(sample_address("b")));
    let ids: Vec<&str> = state.addresses.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn add_address_changes_the_addresses_slice() {
    let mut state = AppState::default();
    assert_eq!(reduce(&mut state, Action::AddAddress(sample_address("a"))), SliceSet::ADDRESSES);
}

// =============================================================
// Registration modal and admin gate
// =============================================================

#[test]
fn toggle_modal_with_value_sets_it() {
    let mut state = AppState::default();
    reduce(&mut state, Action::ToggleRegistrationModal(Some(true)));
    assert!(state.show_registration_modal);
    reduce(&mut state, Action::ToggleRegistrationModal(Some(false)));
    assert!(!state.show_registration_modal);
}

#[test]
fn toggle_modal_without_value_flips() {
    let mut state = AppState::default();
    reduce(&mut state, Action::ToggleRegistrationModal(None));
    assert!(state.show_registration_modal);
    reduce(&mut state, Action::ToggleRegistrationModal(None));
    assert!(!state.show_registration_modal);
}

#[test]
fn toggle_modal_touches_no_persisted_slice() {
    let mut state = AppState::default();
    assert_eq!(reduce(&mut state, Action::ToggleRegistrationModal(None)), SliceSet::NONE);
}

#[test]
fn set_admin_login_sets_flag_and_slice() {
    let mut state = AppState::default();
    assert_eq!(reduce(&mut state, Action::SetAdminLogin(true)), SliceSet::ADMIN);
    assert!(state.is_admin_logged_in);
    reduce(&mut state, Action::SetAdminLogin(false));
    assert!(!state.is_admin_logged_in);
}

// =============================================================
// LoadFromStorage
// =============================================================

#[test]
fn load_merges_only_present_fields() {
    let mut state = AppState::default();
    let products = sample_products();
    add(&mut state, &products[0], "M");
    let snapshot = StateSnapshot { user: Some(sample_user("7")), ..StateSnapshot::default() };
    reduce(&mut state, Action::LoadFromStorage(snapshot));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("7"));
    // Cart was absent from the snapshot, so it is untouched.
    assert_eq!(state.cart.len(), 1);
}

#[test]
fn load_replaces_cart_and_addresses_wholesale() {
    let products = sample_products();
    let mut state = AppState::default();
    add(&mut state, &products[0], "M");
    let snapshot = StateSnapshot {
        cart: Some(vec![CartItem::new(products[1].clone(), "L".to_owned())]),
        addresses: Some(vec![sample_address("x")]),
        ..StateSnapshot::default()
    };
    reduce(&mut state, Action::LoadFromStorage(snapshot));
    assert_eq!(state.cart.len(), 1);
    assert_eq!(state.cart[0].product.id, products[1].id);
    assert_eq!(state.addresses.len(), 1);
}

#[test]
fn load_threads_generated_products_through() {
    let mut state = AppState::default();
    let snapshot =
        StateSnapshot { products: Some(sample_products()), ..StateSnapshot::default() };
    let changed = reduce(&mut state, Action::LoadFromStorage(snapshot));
    assert_eq!(state.products.len(), 264);
    // Products are not a persisted slice.
    assert_eq!(changed, SliceSet::NONE);
}

#[test]
fn load_reports_every_slice_it_merged() {
    let mut state = AppState::default();
    let snapshot = StateSnapshot {
        user: Some(sample_user("7")),
        cart: Some(Vec::new()),
        addresses: Some(Vec::new()),
        is_admin_logged_in: Some(true),
        products: None,
    };
    assert_eq!(reduce(&mut state, Action::LoadFromStorage(snapshot)), SliceSet::ALL);
    assert!(state.is_admin_logged_in);
}

#[test]
fn empty_snapshot_changes_nothing() {
    let mut state = AppState::default();
    assert_eq!(
        reduce(&mut state, Action::LoadFromStorage(StateSnapshot::default())),
        SliceSet::NONE
    );
    assert_eq!(state, AppState::default());
}

// =============================================================
// Store container
// =============================================================

#[test]
fn store_dispatch_applies_and_exposes_state() {
    let products = sample_products();
    let mut store = Store::new();
    store.dispatch(Action::AddToCart { product: products[0].clone(), size: "M".to_owned() });
    assert_eq!(store.state().cart.len(), 1);
}

#[test]
fn store_notifies_subscribers_with_the_changed_slices() {
    let products = sample_products();
    let seen: Rc<RefCell<Vec<SliceSet>>> = Rc::default();
    let mut store = Store::new();
    let sink = Rc::clone(&seen);
    store.subscribe(Box::new(move |_, changed| sink.borrow_mut().push(changed)));

    store.dispatch(Action::AddToCart { product: products[0].clone(), size: "M".to_owned() });
    store.dispatch(Action::SetAdminLogin(true));
    assert_eq!(*seen.borrow(), vec![SliceSet::CART, SliceSet::ADMIN]);
}

#[test]
fn store_skips_notification_when_nothing_changed() {
    let seen: Rc<RefCell<Vec<SliceSet>>> = Rc::default();
    let mut store = Store::new();
    let sink = Rc::clone(&seen);
    store.subscribe(Box::new(move |_, changed| sink.borrow_mut().push(changed)));

    store.dispatch(Action::ToggleRegistrationModal(None));
    store.dispatch(Action::RemoveFromCart { line_key: "nope-M".to_owned() });
    assert!(seen.borrow().is_empty());
}

#[test]
fn store_subscribers_observe_settled_state() {
    let products = sample_products();
    let observed: Rc<RefCell<usize>> = Rc::default();
    let mut store = Store::new();
    let sink = Rc::clone(&observed);
    store.subscribe(Box::new(move |state, _| *sink.borrow_mut() = state.cart.len()));

    store.dispatch(Action::AddToCart { product: products[0].clone(), size: "M".to_owned() });
    assert_eq!(*observed.borrow(), 1);
}

#[test]
fn store_runs_subscribers_in_registration_order() {
    let order: Rc<RefCell<Vec<u8>>> = Rc::default();
    let mut store = Store::new();
    let first = Rc::clone(&order);
    store.subscribe(Box::new(move |_, _| first.borrow_mut().push(1)));
    let second = Rc::clone(&order);
    store.subscribe(Box::new(move |_, _| second.borrow_mut().push(2)));

    store.dispatch(Action::SetAdminLogin(true));
    assert_eq!(*order.borrow(), vec![1, 2]);
}
