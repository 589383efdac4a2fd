use leptos::prelude::*;
use pinboard_core::PinId;

use crate::hooks::use_optimistic_toggle;

/// Like/Unlike for one pin.
///
/// Always starts unliked: list endpoints carry no like status.
#[component]
pub fn LikeButton(pin_id: PinId) -> impl IntoView {
    let like = use_optimistic_toggle(false, move |client, request| async move {
        client.set_pin_like(pin_id, request).await
    });

    view! {
        <button
            class=move || if like.is_active() { "like-btn active" } else { "like-btn" }
            on:click=move |_| like.click()
        >
            {move || if like.is_active() { "Unlike" } else { "Like" }}
        </button>
    }
}
