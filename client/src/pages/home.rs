//! Landing page: hero, brand teaser, and the registration pitch.

use leptos::prelude::*;

use storefront::store::Action;

use crate::state::store::use_store;

/// Home page with a teaser row of carried brands.
#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();

    let teaser = move || store.with(|state| state.brands.iter().take(8).cloned().collect::<Vec<_>>());
    let has_profile = move || store.with(|state| state.user.is_some());
    let on_register = move |_| store.dispatch(Action::ToggleRegistrationModal(Some(true)));

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Wholesale fashion, straight from the brands"</h1>
                <p>"Discover exclusive fashion brands for every season"</p>
                <div class="home-page__cta">
                    <a class="btn btn--primary" href="/brands">
                        "Browse Brands"
                    </a>
                    <Show when=move || !has_profile()>
                        <button class="btn" on:click=on_register>
                            "Register for 12% off"
                        </button>
                    </Show>
                </div>
            </section>

            <section class="home-page__brands">
                <h2>"Featured brands"</h2>
                <div class="home-page__brand-grid">
                    {move || {
                        teaser()
                            .into_iter()
                            .map(|brand| {
                                let href = format!("/brands/{}", brand.id);
                                view! {
                                    <a class="brand-tile" href=href>
                                        <img src=brand.image alt=brand.name.clone()/>
                                        <span>{brand.name}</span>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>
        </div>
    }
}
