use leptos::prelude::*;
use leptos::task::spawn_local;
use pinboard_core::{Comment, CommentFields, FormSubmitter, PinId, COMMENT_FAILED};

use crate::components::ErrorMessage;
use crate::context::{use_services, use_session};
use crate::hooks::{form_busy, form_error};

/// New comment on a pin; the created comment is handed to `on_posted`
#[component]
pub fn CommentForm(pin_id: PinId, #[prop(into)] on_posted: Callback<Comment>) -> impl IntoView {
    let session = use_session();
    let services = use_services();
    let form = RwSignal::new(FormSubmitter::<CommentFields>::new(COMMENT_FAILED));
    let busy = form_busy(form);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.with(|f| f.fields().text.trim().is_empty()) {
            return;
        }
        let Some(record) = form.try_update(|f| f.submit()) else {
            return;
        };
        let client = services.client.clone();
        let author = session.identity();

        spawn_local(async move {
            match client.add_comment(pin_id, &record, author.as_ref()).await {
                Ok(comment) => {
                    form.try_update(|f| f.succeed(true));
                    on_posted.run(comment);
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
        <form class="comment-form" on:submit=on_submit>
            <ErrorMessage message=form_error(form) />
            <input
                placeholder="add a comment"
                prop:value=move || form.with(|f| f.fields().text.clone())
                on:input=move |ev| form.update(|f| f.fields_mut().text = event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Post"</button>
        </form>
    }
}
