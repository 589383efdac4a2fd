use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use pinboard_core::BoardId;

use crate::components::{ErrorMessage, FollowButton, PinGrid};
use crate::hooks::{collection_error, collection_items, collection_loading, use_remote_collection};

/// Pins of the board named by `:bid`
#[component]
pub fn BoardPinsPage() -> impl IntoView {
    let params = use_params_map();
    let board_id = Memo::new(move |_| {
        params.with(|p| p.get("bid").and_then(|raw| raw.parse::<BoardId>().ok()))
    });

    let pins = use_remote_collection(
        "board pins",
        move || board_id.get(),
        |client, board_id| async move { client.board_pins(board_id).await },
    );
    let loading = collection_loading(pins);

    view! {
        <div class="board-pins-page">
            <h2>"Pins"</h2>
            {move || board_id.get().map(|id| view! { <FollowButton board_id=id /> })}
            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <ErrorMessage message=collection_error(pins) />
            <PinGrid pins=collection_items(pins) />
        </div>
    }
}
