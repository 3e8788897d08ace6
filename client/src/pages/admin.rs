//! Admin dashboard behind the hardcoded client-side gate.
//!
//! The gate is a UI convenience, not security: everything it reveals is
//! mock data rendered locally.

use leptos::prelude::*;

use storefront::store::Action;
use storefront::user::is_admin_credentials;

use crate::state::store::use_store;
use crate::state::toast::use_toasts;
use crate::util::format::inr;

/// A mock retailer row for the dashboard table.
struct RetailerRow {
    name: &'static str,
    email: &'static str,
    gst: &'static str,
    city: &'static str,
    status: &'static str,
    orders: u32,
    total_spent: u32,
}

/// Demo rows shown to the "admin".
const RETAILERS: [RetailerRow; 3] = [
    RetailerRow {
        name: "Rajesh Retailers",
        email: "rajesh@example.com",
        gst: "22AAAAA0000A1Z5",
        city: "Mumbai, Maharashtra",
        status: "Active",
        orders: 15,
        total_spent: 45_000,
    },
    RetailerRow {
        name: "Fashion Hub",
        email: "fashionhub@example.com",
        gst: "27BBBBB0000B2Z4",
        city: "Delhi, India",
        status: "Active",
        orders: 8,
        total_spent: 32_000,
    },
    RetailerRow {
        name: "Style World",
        email: "styleworld@example.com",
        gst: "29CCCCC0000C3Z3",
        city: "Bangalore, Karnataka",
        status: "Pending",
        orders: 3,
        total_spent: 12_000,
    },
];

/// Admin page: credential gate, then the mock dashboard.
#[component]
pub fn AdminPage() -> impl IntoView {
    let store = use_store();
    let logged_in = move || store.with(|state| state.is_admin_logged_in);

    view! {
        <Show when=logged_in fallback=|| view! { <AdminLogin/> }>
            <AdminDashboard/>
        </Show>
    }
}

#[component]
fn AdminLogin() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_admin_credentials(&email.get(), &password.get()) {
            store.dispatch(Action::SetAdminLogin(true));
            toasts.success("Welcome back!");
        } else {
            toasts.error("Invalid admin credentials");
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin"</h1>
                <p class="login-card__subtitle">"Access the Vastra admin panel"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Admin Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();

    let catalog_size = move || store.with(|state| state.products.len());
    let brand_count = move || store.with(|state| state.brands.len());
    let total_orders: u32 = RETAILERS.iter().map(|r| r.orders).sum();
    let total_revenue: u32 = RETAILERS.iter().map(|r| r.total_spent).sum();

    let on_logout = move |_| {
        store.dispatch(Action::SetAdminLogin(false));
        toasts.info("Signed out of admin");
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </header>

            <div class="admin-page__stats">
                <div class="stat-card">
                    <span class="stat-card__value">{move || RETAILERS.len()}</span>
                    <span class="stat-card__label">"Retailers"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{total_orders}</span>
                    <span class="stat-card__label">"Orders"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{inr(total_revenue)}</span>
                    <span class="stat-card__label">"Revenue"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">
                        {move || format!("{} / {}", catalog_size(), brand_count())}
                    </span>
                    <span class="stat-card__label">"Products / Brands"</span>
                </div>
            </div>

            <div class="card admin-page__table">
                <h3>"Registered Retailers"</h3>
                <table>
                    <thead>
                        <tr>
                            <th>"Retailer"</th>
                            <th>"GST"</th>
                            <th>"City"</th>
                            <th>"Status"</th>
                            <th>"Orders"</th>
                            <th>"Total Spent"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {RETAILERS
                            .iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>
                                            <div class="admin-page__retailer">
                                                <span>{row.name}</span>
                                                <span class="admin-page__email">{row.email}</span>
                                            </div>
                                        </td>
                                        <td>{row.gst}</td>
                                        <td>{row.city}</td>
                                        <td>{row.status}</td>
                                        <td>{row.orders}</td>
                                        <td>{inr(row.total_spent)}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
