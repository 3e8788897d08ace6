//! Single-brand product listing.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use storefront::catalog::slugify;
use storefront::filter::{ProductFilter, SortOrder, filter_and_sort};

use crate::components::filter_panel::{FilterPanel, SortSelect};
use crate::components::product_card::ProductCard;
use crate::state::store::use_store;

/// Products for one brand, resolved from the `:id` route segment. An
/// unknown brand id renders a not-found view rather than an error.
#[component]
pub fn BrandProductsPage() -> impl IntoView {
    let store = use_store();
    let params = use_params_map();
    let brand_id = move || params.read().get("id").unwrap_or_default();

    let filter = RwSignal::new(ProductFilter::default());
    let sort = RwSignal::new(SortOrder::default());

    let brand = move || {
        let id = brand_id();
        store.with(|state| state.brands.iter().find(|b| b.id == id).cloned())
    };

    // Brand listings match on the product's brand slug, the same slug the
    // roster uses for ids.
    let listing = Memo::new(move |_| {
        let id = brand_id();
        store.with(|state| {
            let scoped: Vec<_> =
                state.products.iter().filter(|p| slugify(&p.brand) == id).cloned().collect();
            filter.with(|f| filter_and_sort(&scoped, f, sort.get()))
        })
    });

    view! {
        <Show
            when=move || brand().is_some()
            fallback=|| {
                view! {
                    <div class="empty-state">
                        <h1>"Brand not found"</h1>
                        <a class="btn" href="/brands">
                            "Back to brands"
                        </a>
                    </div>
                }
            }
        >
            <div class="listing-page">
                <header class="listing-page__brand">
                    <h1>{move || brand().map(|b| b.name).unwrap_or_default()}</h1>
                    <div class="listing-page__seasons">
                        {move || {
                            brand()
                                .map(|b| b.seasons)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|season| view! { <span class="badge">{season}</span> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </header>
                <div class="listing-page__layout">
                    <FilterPanel filter=filter/>
                    <main class="listing-page__results">
                        <div class="listing-page__toolbar">
                            <span>{move || format!("{} products", listing.get().len())}</span>
                            <SortSelect sort=sort/>
                        </div>
                        <Show
                            when=move || !listing.get().is_empty()
                            fallback=|| {
                                view! {
                                    <p class="empty-state">
                                        "No products found matching your filters."
                                    </p>
                                }
                            }
                        >
                            <div class="product-grid">
                                {move || {
                                    listing
                                        .get()
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product=product/> })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </main>
                </div>
            </div>
        </Show>
    }
}
