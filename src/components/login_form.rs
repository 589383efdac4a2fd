//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use pinboard_core::{FormSubmitter, LoginFields, AFTER_LOGIN, LOGIN_FAILED};

use crate::components::ErrorMessage;
use crate::context::{use_services, use_session};
use crate::hooks::{form_busy, form_error};

/// Email/password login; a success lifts the identity into the session
#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();
    let services = use_services();
    let navigate = use_navigate();
    let form = RwSignal::new(FormSubmitter::<LoginFields>::new(LOGIN_FAILED));
    let busy = form_busy(form);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(record) = form.try_update(|f| f.submit()) else {
            return;
        };
        let client = services.client.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match client.login(&record).await {
                Ok(identity) => {
                    form.try_update(|f| f.succeed(false));
                    session.set_identity(identity);
                    navigate(AFTER_LOGIN, Default::default());
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
            <h2>"Login"</h2>
            <ErrorMessage message=form_error(form) />
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
            <button type="submit" disabled=move || busy.get()>"Login"</button>
            <p class="auth-switch">
                "Don't have an account? "
                <A href="/signup">"Sign up here"</A>
            </p>
        </form>
    }
}
