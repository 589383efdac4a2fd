use leptos::prelude::*;

use crate::components::{ErrorMessage, PinGrid};
use crate::hooks::{collection_error, collection_items, collection_loading, use_remote_collection};

#[component]
pub fn FeedPage() -> impl IntoView {
    // The feed has no key of its own: it loads once per mount
    let feed = use_remote_collection("feed", || Some(()), |client, ()| async move {
        client.feed().await
    });
    let loading = collection_loading(feed);

    view! {
        <div class="feed-page">
            <h2>"Feed"</h2>
            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <ErrorMessage message=collection_error(feed) />
            <PinGrid pins=collection_items(feed) />
        </div>
    }
}
