//! Boards Page
//!
//! The signed-in user's boards plus the create-board form. New boards are
//! appended locally; the list is not reloaded.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pinboard_core::{Board, BoardFields, FormSubmitter, BOARD_FAILED};

use crate::components::{BoardCard, ErrorMessage};
use crate::context::use_services;
use crate::hooks::{
    collection_error, collection_loading, form_busy, form_error, use_remote_collection,
};

#[component]
pub fn BoardsPage() -> impl IntoView {
    let services = use_services();

    // `/me` first, then that user's boards
    let boards = use_remote_collection("boards", || Some(()), |client, ()| async move {
        client.own_boards().await
    });
    let form = RwSignal::new(FormSubmitter::<BoardFields>::new(BOARD_FAILED));
    let busy = form_busy(form);
    let loading = collection_loading(boards);

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(record) = form.try_update(|f| f.submit()) else {
            return;
        };
        let client = services.client.clone();

        spawn_local(async move {
            match client.create_board(&record).await {
                Ok(board) => {
                    boards.try_update(|b| b.push(board));
                    form.try_update(|f| f.succeed(true));
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
        <div class="boards-page">
            <h2>"Your Boards"</h2>
            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <ErrorMessage message=collection_error(boards) />
            <ul class="board-list">
                <For
                    each=move || boards.with(|b| b.items().to_vec())
                    key=|board: &Board| board.board_id
                    children=|board| view! { <BoardCard board=board /> }
                />
            </ul>

            <h3>"Create board"</h3>
            <form class="board-form" on:submit=on_create>
                <ErrorMessage message=form_error(form) />
                <input
                    placeholder="name"
                    prop:value=move || form.with(|f| f.fields().name.clone())
                    on:input=move |ev| form.update(|f| f.fields_mut().name = event_target_value(&ev))
                />
                <input
                    placeholder="desc"
                    prop:value=move || form.with(|f| f.fields().description.clone())
                    on:input=move |ev| form.update(|f| f.fields_mut().description = event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Create"</button>
            </form>
        </div>
    }
}
