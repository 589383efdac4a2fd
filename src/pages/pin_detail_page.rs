//! Pin Detail Page
//!
//! Like button, comments oldest first, and forms to comment on or repin the
//! pin. Repinning lands on the target board.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use pinboard_core::{Board, Comment, FormSubmitter, PinId, RepinFields, Route, REPIN_FAILED};

use crate::components::{CommentForm, ErrorMessage, LikeButton};
use crate::context::use_services;
use crate::hooks::{
    collection_error, collection_loading, form_busy, form_error, use_remote_collection,
};

#[component]
pub fn PinDetailPage() -> impl IntoView {
    let params = use_params_map();
    let pin_id = Memo::new(move |_| {
        params.with(|p| p.get("pid").and_then(|raw| raw.parse::<PinId>().ok()))
    });

    let comments = use_remote_collection(
        "comments",
        move || pin_id.get(),
        |client, pin_id| async move { client.pin_comments(pin_id).await },
    );
    let loading = collection_loading(comments);
    let on_posted = move |comment: Comment| {
        comments.update(|c| c.push(comment));
    };

    view! {
        <div class="pin-detail-page">
            {move || pin_id.get().map(|id| view! {
                <h2>"Pin #" {id}</h2>
                <LikeButton pin_id=id />
                <RepinForm pin_id=id />
                <CommentForm pin_id=id on_posted=on_posted />
            })}
            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <ErrorMessage message=collection_error(comments) />
            <ul class="comment-list">
                <For
                    each=move || comments.with(|c| c.items().to_vec())
                    key=|comment: &Comment| comment.comment_id
                    children=|comment| {
                        let author = comment
                            .username
                            .clone()
                            .unwrap_or_else(|| "someone".to_string());
                        let time = comment.display_time();
                        view! {
                            <li class="comment">
                                <strong>{author}</strong>
                                " "
                                <span class="comment-text">{comment.comment_text}</span>
                                " "
                                <time>{time}</time>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

/// Board picker over the caller's own boards
#[component]
fn RepinForm(pin_id: PinId) -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();
    let boards = use_remote_collection("repin boards", || Some(()), |client, ()| async move {
        client.own_boards().await
    });
    let form = RwSignal::new(FormSubmitter::<RepinFields>::new(REPIN_FAILED));
    let busy = form_busy(form);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if form.with(|f| f.fields().board_id.is_none()) {
            return;
        }
        let Some(record) = form.try_update(|f| f.submit()) else {
            return;
        };
        let Some(board_id) = record.board_id else {
            return;
        };
        let client = services.client.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match client.repin(pin_id, board_id).await {
                Ok(new_pin) => {
                    log::info!("pin {} repinned as {} on board {}", pin_id, new_pin, board_id);
                    form.try_update(|f| f.succeed(true));
                    navigate(&Route::BoardPins(board_id).path(), Default::default());
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
        <form class="repin-form" on:submit=on_submit>
            <ErrorMessage message=form_error(form) />
            <select on:change=move |ev| {
                let picked = event_target_value(&ev).parse().ok();
                form.update(|f| f.fields_mut().board_id = picked);
            }>
                <option value="" selected=move || form.with(|f| f.fields().board_id.is_none())>
                    "Choose a board"
                </option>
                <For
                    each=move || boards.with(|b| b.items().to_vec())
                    key=|board: &Board| board.board_id
                    children=|board| view! { <option value=board.board_id.to_string()>{board.name}</option> }
                />
            </select>
            <button type="submit" disabled=move || busy.get()>"Repin"</button>
        </form>
    }
}
