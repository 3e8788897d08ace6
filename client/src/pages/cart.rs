//! Shopping cart: line management, coupons, and the price breakdown.

use leptos::prelude::*;

use storefront::cart::CartItem;
use storefront::pricing::{Coupon, Totals, effective_unit_price, find_coupon};
use storefront::store::Action;

use crate::state::store::use_store;
use crate::state::toast::use_toasts;
use crate::util::format::inr;

/// The cart page. Quantity edits below one become removals; the applied
/// coupon is page-local state, never persisted.
#[component]
pub fn CartPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();

    let coupon_code = RwSignal::new(String::new());
    let applied_coupon = RwSignal::new(None::<Coupon>);

    let cart = move || store.with(|state| state.cart.clone());
    let registered =
        move || store.with(|state| state.user.as_ref().is_some_and(|user| user.is_registered));
    let totals =
        move || store.with(|state| {
            let registered = state.user.as_ref().is_some_and(|user| user.is_registered);
            Totals::compute(&state.cart, registered, applied_coupon.get())
        });
    let default_address = move || {
        store.with(|state| state.addresses.iter().find(|a| a.is_default).cloned())
    };

    let update_quantity = move |line_key: String, quantity: u32| {
        if quantity == 0 {
            store.dispatch(Action::RemoveFromCart { line_key });
            toasts.success("Item removed from cart");
        } else {
            store.dispatch(Action::UpdateCartQuantity { line_key, quantity });
        }
    };

    let remove_line = move |line_key: String| {
        store.dispatch(Action::RemoveFromCart { line_key });
        toasts.success("Item removed from cart");
    };

    let on_apply_coupon = move |_| {
        let code = coupon_code.get();
        match find_coupon(&code) {
            Some(coupon) => {
                applied_coupon.set(Some(coupon));
                coupon_code.set(String::new());
                toasts.success(format!("Coupon applied! {}% discount", coupon.percent));
            }
            None => toasts.error("Invalid coupon code"),
        }
    };

    view! {
        <Show
            when=move || !cart().is_empty()
            fallback=|| {
                view! {
                    <div class="empty-state">
                        <h1>"Your cart is empty"</h1>
                        <p>"Add some products to get started"</p>
                        <a class="btn btn--primary" href="/brands">
                            "Start Shopping"
                        </a>
                    </div>
                }
            }
        >
            <div class="cart-page">
                <h1>"Shopping Cart"</h1>
                <div class="cart-page__layout">
                    <div class="cart-page__lines">
                        {move || {
                            cart()
                                .into_iter()
                                .map(|line| {
                                    view! {
                                        <CartLine
                                            line=line
                                            registered=registered
                                            update_quantity=update_quantity
                                            remove_line=remove_line
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>

                    <div class="cart-page__summary">
                        <div class="card">
                            <h3>"Apply Coupon"</h3>
                            {move || {
                                applied_coupon
                                    .get()
                                    .map(|coupon| {
                                        view! {
                                            <div class="coupon-banner">
                                                <span>
                                                    {format!(
                                                        "{} — {}% discount applied",
                                                        coupon.code,
                                                        coupon.percent,
                                                    )}
                                                </span>
                                                <button
                                                    class="coupon-banner__remove"
                                                    on:click=move |_| applied_coupon.set(None)
                                                >
                                                    "Remove"
                                                </button>
                                            </div>
                                        }
                                    })
                            }}
                            <div class="coupon-entry">
                                <input
                                    type="text"
                                    placeholder="Enter coupon code"
                                    prop:value=move || coupon_code.get()
                                    on:input=move |ev| coupon_code.set(event_target_value(&ev))
                                />
                                <button class="btn" on:click=on_apply_coupon>
                                    "Apply"
                                </button>
                            </div>
                            <p class="coupon-hint">"Try: WELCOME12, FLAT20, SAVE15"</p>
                        </div>

                        <PriceDetails totals=totals registered=registered/>

                        <div class="card">
                            <h3>"Deliver to"</h3>
                            {move || {
                                default_address()
                                    .map_or_else(
                                        || {
                                            view! {
                                                <p class="cart-page__no-address">
                                                    "Delivery address is collected at checkout."
                                                </p>
                                            }
                                                .into_any()
                                        },
                                        |address| {
                                            view! {
                                                <div class="address-card">
                                                    <span class="address-card__name">{address.name}</span>
                                                    <span>{address.address}</span>
                                                    <span>{format!("GST: {}", address.gst)}</span>
                                                </div>
                                            }
                                                .into_any()
                                        },
                                    )
                            }}
                        </div>

                        <a class="btn btn--primary cart-page__checkout" href="/checkout">
                            "Proceed to Checkout"
                        </a>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// One rendered cart line with quantity controls.
#[component]
fn CartLine(
    line: CartItem,
    registered: impl Fn() -> bool + Copy + Send + Sync + 'static,
    update_quantity: impl Fn(String, u32) + Copy + Send + Sync + 'static,
    remove_line: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let key = line.line_key();
    let price = line.product.price;
    let quantity = line.quantity;
    let line_total = move || inr(effective_unit_price(price, registered()) * quantity);
    let mrp_total = line.product.original_price * quantity;

    let decrement = {
        let key = key.clone();
        move |_| update_quantity(key.clone(), quantity - 1)
    };
    let increment = {
        let key = key.clone();
        move |_| update_quantity(key.clone(), quantity + 1)
    };
    let remove = {
        let key = key.clone();
        move |_| remove_line(key.clone())
    };

    view! {
        <div class="cart-line card">
            <img class="cart-line__image" src=line.product.image.clone() alt=line.product.name.clone()/>
            <div class="cart-line__body">
                <div class="cart-line__head">
                    <div>
                        <span class="cart-line__name">{line.product.name.clone()}</span>
                        <span class="cart-line__brand">{line.product.brand.clone()}</span>
                        <div class="cart-line__badges">
                            <span class="badge">{line.selected_size.clone()}</span>
                            <span class="badge">{line.product.color.clone()}</span>
                        </div>
                    </div>
                    <button class="cart-line__remove" on:click=remove>
                        "✕"
                    </button>
                </div>
                <div class="cart-line__foot">
                    <div class="cart-line__quantity">
                        <button on:click=decrement>"−"</button>
                        <span>{quantity}</span>
                        <button on:click=increment>"+"</button>
                    </div>
                    <div class="cart-line__pricing">
                        <span class="cart-line__total">{line_total}</span>
                        <Show when=move || (mrp_total > price * quantity)>
                            <span class="cart-line__mrp">{inr(mrp_total)}</span>
                        </Show>
                        <Show when=registered>
                            <span class="cart-line__member">"12% discount applied"</span>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// The price-details card shared with checkout.
#[component]
pub fn PriceDetails(
    totals: impl Fn() -> Totals + Copy + Send + Sync + 'static,
    registered: impl Fn() -> bool + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="card price-details">
            <h3>"Price Details"</h3>
            <div class="price-details__row">
                <span>"Total MRP"</span>
                <span>{move || inr(totals().mrp_total)}</span>
            </div>
            <Show when=move || (totals().savings > 0)>
                <div class="price-details__row price-details__row--green">
                    <span>"Discount on MRP"</span>
                    <span>{move || format!("-{}", inr(totals().savings))}</span>
                </div>
            </Show>
            <Show when=registered>
                <div class="price-details__row price-details__row--green">
                    <span>"Registration Discount (12%)"</span>
                    <span>"Included above"</span>
                </div>
            </Show>
            <Show when=move || (totals().coupon_discount > 0)>
                <div class="price-details__row price-details__row--green">
                    <span>"Coupon Discount"</span>
                    <span>{move || format!("-{}", inr(totals().coupon_discount))}</span>
                </div>
            </Show>
            <div class="price-details__row">
                <span>"Platform Fee"</span>
                <span>{move || inr(totals().platform_fee)}</span>
            </div>
            <div class="price-details__row">
                <span>"Delivery Charges"</span>
                <span>
                    {move || {
                        let charge = totals().delivery_charge;
                        if charge == 0 { "FREE".to_owned() } else { inr(charge) }
                    }}
                </span>
            </div>
            <div class="price-details__row price-details__row--total">
                <span>"Total Amount"</span>
                <span>{move || inr(totals().total)}</span>
            </div>
        </div>
    }
}
