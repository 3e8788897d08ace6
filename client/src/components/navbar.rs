//! Top navigation bar with cart badge and registration entry point.

use leptos::prelude::*;

use storefront::store::Action;

use crate::state::store::use_store;

/// Site-wide navigation. The cart badge counts units, not lines.
#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_store();

    let cart_units =
        move || store.with(|state| state.cart.iter().map(|line| line.quantity).sum::<u32>());
    let buyer_name = move || store.with(|state| state.user.as_ref().map(|user| user.name.clone()));

    let on_register = move |_| {
        store.dispatch(Action::ToggleRegistrationModal(Some(true)));
    };

    view! {
        <nav class="navbar">
            <a class="navbar__logo" href="/">
                "Vastra"
            </a>
            <div class="navbar__links">
                <a href="/brands">"Brands"</a>
                <a href="/products">"Products"</a>
                <a href="/contact">"Contact"</a>
            </div>
            <div class="navbar__actions">
                <Show
                    when=move || buyer_name().is_some()
                    fallback=move || {
                        view! {
                            <button class="navbar__register" on:click=on_register>
                                "Register for 12% off"
                            </button>
                        }
                    }
                >
                    <span class="navbar__buyer">{move || buyer_name().unwrap_or_default()}</span>
                </Show>
                <a href="/login" class="navbar__link">
                    "Sign in"
                </a>
                <a href="/cart" class="navbar__cart">
                    "Cart"
                    <Show when=move || (cart_units() > 0)>
                        <span class="navbar__cart-badge">{cart_units}</span>
                    </Show>
                </a>
            </div>
        </nav>
    }
}
