//! Root application component: startup hydration, contexts, and routing.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use storefront::catalog::generate_catalog;
use storefront::persist::StorageBridge;
use storefront::store::{Action, Store};

use crate::components::navbar::Navbar;
use crate::components::registration_modal::RegistrationModal;
use crate::components::toast_host::ToastHost;
use crate::pages::admin::AdminPage;
use crate::pages::brand_products::BrandProductsPage;
use crate::pages::brands::BrandsPage;
use crate::pages::cart::CartPage;
use crate::pages::checkout::CheckoutPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::product_detail::ProductDetailPage;
use crate::pages::products::ProductsPage;
use crate::state::store::provide_store;
use crate::state::toast::provide_toasts;
use crate::util::ids::clock_seed;
use crate::util::storage::BrowserStore;

/// How long after startup the registration prompt appears for visitors
/// with no saved profile.
const REGISTRATION_PROMPT_DELAY_MS: u32 = 2_000;

/// Root application component.
///
/// Builds the one store for this session: hydrates the persisted slices,
/// generates the session catalog, subscribes the storage bridge, and only
/// then provides the reactive handle to the view tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mut store = Store::new();
    let bridge = StorageBridge::new(BrowserStore);
    let mut snapshot = bridge.load();
    let returning_buyer = snapshot.user.is_some();
    snapshot.products = Some(generate_catalog(clock_seed()));
    bridge.attach(&mut store);

    let store = provide_store(store);
    provide_toasts();
    store.dispatch(Action::LoadFromStorage(snapshot));

    // Nudge unregistered visitors after they have seen the page.
    if !returning_buyer {
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(REGISTRATION_PROMPT_DELAY_MS).await;
            store.dispatch(Action::ToggleRegistrationModal(Some(true)));
        });
    }

    view! {
        <Title text="Vastra — B2B Fashion Wholesale"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("brands") view=BrandsPage/>
                    <Route
                        path=(StaticSegment("brands"), ParamSegment("id"))
                        view=BrandProductsPage
                    />
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route
                        path=(StaticSegment("products"), ParamSegment("id"))
                        view=ProductDetailPage
                    />
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("checkout") view=CheckoutPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <RegistrationModal/>
            <ToastHost/>
        </Router>
    }
}
