//! Checkout: delivery address, order summary, and the simulated order.
//!
//! There is no order backend — placing an order validates the address,
//! waits out a simulated processing delay, clears the cart, and shows a
//! confirmation. Nothing is recorded anywhere.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use storefront::pricing::Totals;
use storefront::store::Action;
use storefront::user::{Address, RegistrationForm, ValidationError};

use crate::pages::cart::PriceDetails;
use crate::state::store::use_store;
use crate::state::toast::use_toasts;
use crate::util::format::inr;
use crate::util::ids::timestamp_id;

/// Simulated order-processing latency.
const ORDER_DELAY_MS: u32 = 2_000;

/// The checkout page. Requires a registered buyer and a non-empty cart.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();

    let placing = RwSignal::new(false);
    let placed_total = RwSignal::new(None::<u32>);

    // Address form, prefilled from the buyer profile.
    let initial = store.with(|state| state.user.clone());
    let name = RwSignal::new(initial.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let phone = RwSignal::new(initial.as_ref().map(|u| u.phone.clone()).unwrap_or_default());
    let address = RwSignal::new(initial.as_ref().map(|u| u.address.clone()).unwrap_or_default());
    let gst = RwSignal::new(initial.as_ref().map(|u| u.gst.clone()).unwrap_or_default());

    let signed_in = move || store.with(|state| state.user.is_some());
    let cart_empty = move || store.with(|state| state.cart.is_empty());
    let registered =
        move || store.with(|state| state.user.as_ref().is_some_and(|user| user.is_registered));
    let totals = move || {
        store.with(|state| {
            let registered = state.user.as_ref().is_some_and(|user| user.is_registered);
            Totals::compute(&state.cart, registered, None)
        })
    };

    let on_place_order = move |_| {
        if placing.get() {
            return;
        }
        // Reuse the registration rules: all fields present, GST well-formed.
        let form = RegistrationForm {
            name: name.get(),
            phone: phone.get(),
            gst: gst.get(),
            address: address.get(),
        };
        if let Err(err) = form.clone().into_user(String::new()) {
            let message = match err {
                ValidationError::MissingField => "Please fill in all address details".to_owned(),
                other => other.to_string(),
            };
            toasts.error(message);
            return;
        }

        placing.set(true);
        let order_total = totals().total;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(ORDER_DELAY_MS).await;

            let first_address = store.with(|state| state.addresses.is_empty());
            store.dispatch(Action::AddAddress(Address {
                id: timestamp_id(),
                name: form.name.clone(),
                phone: form.phone.clone(),
                address: form.address.clone(),
                gst: form.gst.clone(),
                is_default: first_address,
            }));
            store.dispatch(Action::ClearCart);

            placing.set(false);
            placed_total.set(Some(order_total));
            toasts.success("Order placed successfully!");
        });
    };

    view! {
        <Show
            when=move || signed_in()
            fallback=|| {
                view! {
                    <div class="empty-state">
                        <h1>"Please register to checkout"</h1>
                        <p>"Checkout needs your business profile."</p>
                        <a class="btn btn--primary" href="/">
                            "Back to Home"
                        </a>
                    </div>
                }
            }
        >
            <Show
                when=move || placed_total.get().is_some()
                fallback=move || {
                    view! {
                        <Show
                            when=move || !cart_empty()
                            fallback=|| {
                                view! {
                                    <div class="empty-state">
                                        <h1>"Nothing to check out"</h1>
                                        <a class="btn" href="/cart">
                                            "Back to cart"
                                        </a>
                                    </div>
                                }
                            }
                        >
                            <div class="checkout-page">
                                <h1>"Checkout"</h1>
                                <div class="checkout-page__layout">
                                    <OrderSummary registered=registered/>
                                    <div class="checkout-page__forms">
                                        <div class="card">
                                            <h3>"Delivery Address"</h3>
                                            <input
                                                class="dialog__input"
                                                type="text"
                                                placeholder="Full Name"
                                                prop:value=move || name.get()
                                                on:input=move |ev| name.set(event_target_value(&ev))
                                            />
                                            <input
                                                class="dialog__input"
                                                type="tel"
                                                placeholder="Phone Number"
                                                prop:value=move || phone.get()
                                                on:input=move |ev| phone.set(event_target_value(&ev))
                                            />
                                            <textarea
                                                class="dialog__input dialog__input--area"
                                                placeholder="Complete Address"
                                                prop:value=move || address.get()
                                                on:input=move |ev| address.set(event_target_value(&ev))
                                            ></textarea>
                                            <input
                                                class="dialog__input"
                                                type="text"
                                                placeholder="GST Number (Required for B2B)"
                                                prop:value=move || gst.get()
                                                on:input=move |ev| {
                                                    gst.set(event_target_value(&ev).to_ascii_uppercase());
                                                }
                                            />
                                        </div>

                                        <div class="card checkout-page__payment">
                                            <h3>"Payment Method"</h3>
                                            <p class="checkout-page__cod">"Cash on Delivery (COD)"</p>
                                            <p>"Pay when you receive your order."</p>
                                        </div>

                                        <PriceDetails totals=totals registered=registered/>

                                        <button
                                            class="btn btn--primary checkout-page__place"
                                            disabled=move || placing.get()
                                            on:click=on_place_order
                                        >
                                            {move || {
                                                if placing.get() {
                                                    "Placing Order..."
                                                } else {
                                                    "Place Order"
                                                }
                                            }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </Show>
                    }
                }
            >
                <div class="empty-state order-placed">
                    <div class="order-placed__check">"✓"</div>
                    <h1>"Order Placed!"</h1>
                    <p>"Thank you for your order. We'll send you a confirmation shortly."</p>
                    <p class="order-placed__total">
                        {move || format!("Order Total: {}", inr(placed_total.get().unwrap_or(0)))}
                    </p>
                    <a class="btn btn--primary" href="/">
                        "Continue Shopping"
                    </a>
                </div>
            </Show>
        </Show>
    }
}

/// Read-only cart recap on the checkout page.
#[component]
fn OrderSummary(registered: impl Fn() -> bool + Copy + Send + Sync + 'static) -> impl IntoView {
    let store = use_store();
    let lines = move || store.with(|state| state.cart.clone());

    view! {
        <div class="card checkout-page__summary">
            <h3>"Order Summary"</h3>
            {move || {
                lines()
                    .into_iter()
                    .map(|line| {
                        let unit = storefront::pricing::effective_unit_price(
                            line.product.price,
                            registered(),
                        );
                        view! {
                            <div class="summary-line">
                                <img src=line.product.image.clone() alt=line.product.name.clone()/>
                                <div class="summary-line__body">
                                    <span>{line.product.name.clone()}</span>
                                    <div class="summary-line__badges">
                                        <span class="badge">{line.selected_size.clone()}</span>
                                        <span class="badge">{format!("Qty: {}", line.quantity)}</span>
                                    </div>
                                    <span class="summary-line__total">
                                        {inr(unit * line.quantity)}
                                    </span>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
