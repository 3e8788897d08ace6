//! Buyer registration modal.
//!
//! Registration is what turns a visitor into a wholesale buyer: the form
//! collects business details, validation lives in the core crate, and a
//! successful submit replaces the buyer profile and unlocks the 12%
//! discount.

use leptos::prelude::*;

use storefront::store::Action;
use storefront::user::RegistrationForm;

use crate::state::store::use_store;
use crate::state::toast::use_toasts;
use crate::util::ids::timestamp_id;

/// Modal dialog driven by `show_registration_modal` in the state tree.
#[component]
pub fn RegistrationModal() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let gst = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());

    let visible = move || store.with(|state| state.show_registration_modal);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = RegistrationForm {
            name: name.get(),
            phone: phone.get(),
            gst: gst.get(),
            address: address.get(),
        };
        match form.into_user(timestamp_id()) {
            Ok(user) => {
                store.dispatch(Action::SetUser(user));
                store.dispatch(Action::ToggleRegistrationModal(Some(false)));
                toasts.success("Registration successful! You got 12% discount on all orders!");
            }
            Err(err) => toasts.error(err.to_string()),
        }
    };

    let on_skip = move |_| {
        store.dispatch(Action::ToggleRegistrationModal(Some(false)));
        toasts.info("You can register later at checkout to get 12% discount");
    };

    view! {
        <Show when=visible>
            <div class="dialog-backdrop">
                <div class="dialog dialog--registration">
                    <h2>"Register your business"</h2>
                    <p class="dialog__subtitle">"Flat 12% off every order for registered buyers"</p>
                    <form class="dialog__form" on:submit=on_submit>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Business Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            class="dialog__input"
                            type="tel"
                            placeholder="Phone Number"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="GST Number (e.g., 22AAAAA0000A1Z5)"
                            prop:value=move || gst.get()
                            on:input=move |ev| gst.set(event_target_value(&ev).to_ascii_uppercase())
                        />
                        <textarea
                            class="dialog__input dialog__input--area"
                            placeholder="Business Address"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        ></textarea>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=on_skip>
                                "Maybe later"
                            </button>
                            <button class="btn btn--primary" type="submit">
                                "Register"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
