//! Contact form with a simulated submission.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::state::toast::use_toasts;

/// Simulated submission latency.
const SUBMIT_DELAY_MS: u32 = 1_000;

/// Contact page. The form goes nowhere — submission is a timed delay and a
/// confirmation toast.
#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = use_toasts();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        if name.get().trim().is_empty() || email.get().trim().is_empty() {
            toasts.error("Please fill in your name and email");
            return;
        }
        sending.set(true);
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            sending.set(false);
            name.set(String::new());
            email.set(String::new());
            company.set(String::new());
            message.set(String::new());
            toasts.success("Message sent successfully! We'll get back to you soon.");
        });
    };

    view! {
        <div class="contact-page">
            <h1>"Contact Us"</h1>
            <p>"Questions about wholesale pricing, brands, or bulk orders? Write to us."</p>
            <form class="card contact-page__form" on:submit=on_submit>
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Your Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Company (optional)"
                    prop:value=move || company.get()
                    on:input=move |ev| company.set(event_target_value(&ev))
                />
                <textarea
                    class="dialog__input dialog__input--area"
                    placeholder="How can we help?"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
