//! Brand roster page.

use leptos::prelude::*;

use crate::state::store::use_store;

/// All carried brands with their season badges.
#[component]
pub fn BrandsPage() -> impl IntoView {
    let store = use_store();
    let brands = move || store.with(|state| state.brands.clone());

    view! {
        <div class="brands-page">
            <h1>"Our Brands"</h1>
            <div class="brands-page__grid">
                {move || {
                    brands()
                        .into_iter()
                        .map(|brand| {
                            let href = format!("/brands/{}", brand.id);
                            view! {
                                <a class="brand-card" href=href>
                                    <img class="brand-card__image" src=brand.image alt=brand.name.clone()/>
                                    <div class="brand-card__body">
                                        <span class="brand-card__name">{brand.name}</span>
                                        <div class="brand-card__seasons">
                                            {brand
                                                .seasons
                                                .into_iter()
                                                .map(|season| {
                                                    view! { <span class="badge">{season}</span> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </div>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
