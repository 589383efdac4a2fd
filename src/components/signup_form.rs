//! Signup Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use pinboard_core::{FormSubmitter, SignupFields, AFTER_SIGNUP, SIGNUP_FAILED};

use crate::components::ErrorMessage;
use crate::context::use_services;
use crate::hooks::{form_busy, form_error};

/// Account registration. Does not log in: success goes to the login form.
#[component]
pub fn SignupForm() -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();
    let form = RwSignal::new(FormSubmitter::<SignupFields>::new(SIGNUP_FAILED));
    let busy = form_busy(form);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(record) = form.try_update(|f| f.submit()) else {
            return;
        };
        let client = services.client.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match client.signup(&record).await {
                Ok(()) => {
                    form.try_update(|f| f.succeed(true));
                    navigate(AFTER_SIGNUP, Default::default());
                }
                Err(err) => {
                    form.try_update(|f| {
                        f.fail(&err);
                    });
                }
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Sign Up"</h2>
            <ErrorMessage message=form_error(form) />
            <input
                placeholder="username"
                prop:value=move || form.with(|f| f.fields().username.clone())
                on:input=move |ev| form.update(|f| f.fields_mut().username = event_target_value(&ev))
            />
            <input
                placeholder="email"
                prop:value=move || form.with(|f| f.fields().email.clone())
                on:input=move |ev| form.update(|f| f.fields_mut().email = event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="password"
                prop:value=move || form.with(|f| f.fields().password.clone())
                on:input=move |ev| form.update(|f| f.fields_mut().password = event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Register"</button>
            <p class="auth-switch">
                "Already registered? "
                <A href="/login">"Log in"</A>
            </p>
        </form>
    }
}
