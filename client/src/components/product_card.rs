//! Product tile for listing grids.

use leptos::prelude::*;

use storefront::catalog::Product;
use storefront::pricing::effective_unit_price;

use crate::state::store::use_store;
use crate::util::format::inr;

/// A clickable product tile showing price, markdown, and the registered
/// discount when it applies.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = use_store();
    let registered =
        move || store.with(|state| state.user.as_ref().is_some_and(|user| user.is_registered));

    let href = format!("/products/{}", product.id);
    let markdown_percent = if product.original_price > 0 {
        (product.original_price - product.price) * 100 / product.original_price
    } else {
        0
    };
    let price = product.price;
    let original_price = product.original_price;

    view! {
        <a class="product-card" href=href>
            <img class="product-card__image" src=product.image.clone() alt=product.name.clone()/>
            <div class="product-card__body">
                <span class="product-card__brand">{product.brand.clone()}</span>
                <span class="product-card__name">{product.name.clone()}</span>
                <div class="product-card__pricing">
                    <span class="product-card__price">
                        {move || inr(effective_unit_price(price, registered()))}
                    </span>
                    <span class="product-card__mrp">{inr(original_price)}</span>
                    <span class="product-card__off">{format!("{markdown_percent}% off")}</span>
                </div>
                <Show when=registered>
                    <span class="product-card__member">"12% wholesale discount applied"</span>
                </Show>
            </div>
        </a>
    }
}
