use leptos::prelude::*;
use leptos::task::spawn_local;
use pinboard_core::BoardId;

use crate::context::use_services;
use crate::hooks::use_optimistic_toggle;

/// Follow/Unfollow a board; initial state comes from the server
#[component]
pub fn FollowButton(board_id: BoardId) -> impl IntoView {
    let services = use_services();
    let follow = use_optimistic_toggle(false, move |client, request| async move {
        client.set_board_follow(board_id, request).await
    });

    let client = services.client.clone();
    spawn_local(async move {
        match client.is_following(board_id).await {
            Ok(following) => follow.load_confirmed(following),
            Err(err) => log::warn!("follow status for board {} unavailable: {}", board_id, err),
        }
    });

    view! {
        <button
            class=move || if follow.is_pending() { "follow-btn pending" } else { "follow-btn" }
            on:click=move |_| follow.click()
        >
            {move || if follow.is_active() { "Unfollow" } else { "Follow" }}
        </button>
    }
}
