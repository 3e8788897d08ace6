//! Product detail page: size selection and add-to-cart.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use storefront::catalog::Product;
use storefront::pricing::effective_unit_price;
use storefront::store::Action;

use crate::state::store::use_store;
use crate::state::toast::use_toasts;
use crate::util::format::inr;

/// Detail view for one product, resolved from the `:id` route segment.
/// Unknown ids render a not-found view.
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();
    let params = use_params_map();

    let selected_size = RwSignal::new(String::new());
    let quantity = RwSignal::new(1_u32);

    let product = move || {
        let id = params.read().get("id").unwrap_or_default();
        store.with(|state| state.products.iter().find(|p| p.id == id).cloned())
    };
    let registered =
        move || store.with(|state| state.user.as_ref().is_some_and(|user| user.is_registered));

    let on_add = move |_| {
        let Some(product) = product() else {
            return;
        };
        let size = selected_size.get();
        if size.is_empty() {
            toasts.error("Please select a size");
            return;
        }
        // One dispatch per unit; the reducer merges them into a single line.
        let count = quantity.get();
        for _ in 0..count {
            store.dispatch(Action::AddToCart { product: product.clone(), size: size.clone() });
        }
        toasts.success(format!("{} ({count}) added to cart!", product.name));
    };

    view! {
        <Show
            when=move || product().is_some()
            fallback=|| {
                view! {
                    <div class="empty-state">
                        <h1>"Product not found"</h1>
                        <a class="btn" href="/products">
                            "Back to products"
                        </a>
                    </div>
                }
            }
        >
            {move || {
                product()
                    .map(|product| {
                        view! { <ProductDetail product=product registered=registered selected_size=selected_size quantity=quantity on_add=on_add/> }
                    })
            }}
        </Show>
    }
}

#[component]
fn ProductDetail(
    product: Product,
    registered: impl Fn() -> bool + Copy + Send + Sync + 'static,
    selected_size: RwSignal<String>,
    quantity: RwSignal<u32>,
    on_add: impl FnMut(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    let price = product.price;
    let sizes = product.sizes.clone();

    view! {
        <div class="detail-page">
            <img class="detail-page__image" src=product.image.clone() alt=product.name.clone()/>
            <div class="detail-page__body">
                <span class="detail-page__brand">{product.brand.clone()}</span>
                <h1>{product.name.clone()}</h1>
                <div class="detail-page__pricing">
                    <span class="detail-page__price">
                        {move || inr(effective_unit_price(price, registered()))}
                    </span>
                    <span class="detail-page__mrp">{inr(product.original_price)}</span>
                    <Show when=registered>
                        <span class="detail-page__member">"12% off applied"</span>
                    </Show>
                </div>
                <p class="detail-page__description">{product.description.clone()}</p>

                <div class="detail-page__sizes">
                    <span>"Size"</span>
                    {sizes
                        .into_iter()
                        .map(|size| {
                            let value = size.clone();
                            let is_active = {
                                let value = value.clone();
                                move || selected_size.get() == value
                            };
                            view! {
                                <button
                                    class="size-chip"
                                    class=("size-chip--active", is_active)
                                    on:click=move |_| selected_size.set(value.clone())
                                >
                                    {size}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="detail-page__quantity">
                    <span>"Quantity"</span>
                    <select on:change=move |ev| {
                        quantity.set(event_target_value(&ev).parse().unwrap_or(1));
                    }>
                        {(1..=10_u32)
                            .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <button class="btn btn--primary detail-page__add" on:click=on_add>
                    "Add to Cart"
                </button>

                <div class="detail-page__meta">
                    <p>{format!("Category: {}", product.category)}</p>
                    <p>{format!("Color: {}", product.color)}</p>
                    <p>{format!("Season: {}", product.season)}</p>
                </div>
            </div>
        </div>
    }
}
