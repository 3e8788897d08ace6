//! Full catalog listing with every facet.

use leptos::prelude::*;

use storefront::filter::{ProductFilter, SortOrder, filter_and_sort};

use crate::components::filter_panel::{FilterPanel, SortSelect};
use crate::components::product_card::ProductCard;
use crate::state::store::use_store;

/// The all-products listing page.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let store = use_store();
    let filter = RwSignal::new(ProductFilter::default());
    let sort = RwSignal::new(SortOrder::default());

    let listing = Memo::new(move |_| {
        store.with(|state| filter.with(|f| filter_and_sort(&state.products, f, sort.get())))
    });
    let total = move || store.with(|state| state.products.len());
    let brand_names =
        move || store.with(|state| state.brands.iter().map(|b| b.name.clone()).collect::<Vec<_>>());

    view! {
        <div class="listing-page">
            <h1>"All Products"</h1>
            <div class="listing-page__layout">
                <FilterPanel filter=filter brand_options=brand_names()/>
                <main class="listing-page__results">
                    <div class="listing-page__toolbar">
                        <span>
                            {move || {
                                format!("Showing {} of {} products", listing.get().len(), total())
                            }}
                        </span>
                        <SortSelect sort=sort/>
                    </div>
                    <Show
                        when=move || !listing.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="empty-state">"No products found matching your filters."</p>
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
    }
}
