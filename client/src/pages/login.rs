//! Sign-in and account registration against the identity provider.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth;
use crate::state::toast::use_toasts;

/// Email/password and federated sign-in. Provider failures are shown
/// verbatim; there are no retries.
#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let creating_account = RwSignal::new(false);
    let session = RwSignal::new(None::<auth::AuthUser>);

    // The provider's current-user notification: one lookup on mount, and
    // the sign-in/out handlers below refresh it.
    leptos::task::spawn_local(async move {
        session.set(auth::fetch_current_user().await);
    });

    let on_sign_out = move |_| {
        leptos::task::spawn_local(async move {
            auth::sign_out().await;
            session.set(auth::fetch_current_user().await);
        });
    };

    let finish = {
        let navigate = navigate.clone();
        move |result: Result<auth::AuthUser, String>| {
            busy.set(false);
            match result {
                Ok(user) => {
                    toasts.success(format!("Signed in as {}", user.email));
                    navigate("/", NavigateOptions::default());
                }
                Err(message) => error.set(message),
            }
        }
    };

    let on_submit = {
        let finish = finish.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let email_value = email.get().trim().to_owned();
            let password_value = password.get();
            if email_value.is_empty() || password_value.is_empty() {
                error.set("Enter both email and password.".to_owned());
                return;
            }
            busy.set(true);
            error.set(String::new());

            let finish = finish.clone();
            leptos::task::spawn_local(async move {
                let result = if creating_account.get() {
                    auth::sign_up(&email_value, &password_value).await
                } else {
                    auth::sign_in(&email_value, &password_value).await
                };
                finish(result);
            });
        }
    };

    let on_google = {
        let finish = finish.clone();
        move |_| {
            if busy.get() {
                return;
            }
            busy.set(true);
            error.set(String::new());
            let finish = finish.clone();
            leptos::task::spawn_local(async move {
                finish(auth::sign_in_with_google().await);
            });
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Vastra"</h1>
                <Show when=move || session.get().is_some()>
                    <p class="login-message">
                        {move || {
                            session
                                .get()
                                .map(|user| format!("Signed in as {}", user.email))
                                .unwrap_or_default()
                        }}
                    </p>
                    <button class="login-switch" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </Show>
                <p class="login-card__subtitle">
                    {move || {
                        if creating_account.get() { "Create your account" } else { "Welcome back" }
                    }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
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
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || {
                            if creating_account.get() { "Create Account" } else { "Sign In" }
                        }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button class="login-button" on:click=on_google disabled=move || busy.get()>
                    "Continue with Google"
                </button>
                <button
                    class="login-switch"
                    on:click=move |_| creating_account.update(|v| *v = !*v)
                >
                    {move || {
                        if creating_account.get() {
                            "Already have an account? Sign in"
                        } else {
                            "New here? Create an account"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
